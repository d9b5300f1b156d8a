//! Japanese rendering of a parsed select list.
//!
//! Each statement is read source first: FROM, then WHERE, then ORDER BY,
//! and the projection last, which is the natural order of the Japanese
//! sentence. Rendering never fails and never touches the tree.

mod condition;

use crate::ast::{
    ColumnRef, FromClause, FromItem, Literal, OrderByClause, OrderDirection, OrderItem, OrderKey,
    SelectClause, SelectItem, SelectList, SelectStatement, SetOperator, TableSource, WhereClause,
};

use condition::render_conditions;

/// Full stop closing the rendered sentence.
pub const FULL_STOP: &str = "。";

/// Separator between list items.
const SEPARATOR: &str = "、";

/// Renders a select list as one sentence ending in [`FULL_STOP`].
#[must_use]
pub fn render(list: &SelectList) -> String {
    let mut out = render_select_list(list);
    out.push_str(FULL_STOP);
    out
}

/// Renders a select list without the closing full stop.
///
/// Sub-selects recurse through here at any depth.
pub(crate) fn render_select_list(list: &SelectList) -> String {
    let mut out = render_statement(&list.first);

    for compound in &list.compounds {
        out.push_str("。その結果に、");
        out.push_str(&render_statement(&compound.statement));
        out.push_str("したレコードを結合");
        if compound.op == SetOperator::UnionAll {
            out.push_str("(重複レコードを含む)");
        }
    }

    out
}

fn render_statement(statement: &SelectStatement) -> String {
    let mut out = render_from(&statement.from);
    if let Some(where_clause) = &statement.where_clause {
        out.push_str(&render_where(where_clause));
    }
    if let Some(order_by) = &statement.order_by {
        out.push_str(&render_order_by(order_by));
    }
    out.push_str(&render_select(&statement.select));
    out
}

fn render_select(clause: &SelectClause) -> String {
    let mut out = String::new();

    for item in &clause.items {
        out.push_str(SEPARATOR);
        match item {
            // `*` replaces whatever was listed before it.
            SelectItem::Wildcard => out = String::from("全ての項目"),
            SelectItem::Column { column, alias } => {
                out.push_str(&render_column(column));
                push_column_alias(&mut out, alias.as_deref());
            }
            SelectItem::Literal {
                value: Literal::Number(n),
                alias,
            } => {
                out.push_str(&format!("{n}列目"));
                push_column_alias(&mut out, alias.as_deref());
            }
            SelectItem::Literal {
                value: Literal::String(s),
                alias,
            } => {
                out.push_str(&format!("固定値{s}"));
                push_column_alias(&mut out, alias.as_deref());
            }
        }
    }

    out.push_str("の抽出");
    out
}

fn push_column_alias(out: &mut String, alias: Option<&str>) {
    if let Some(alias) = alias {
        out.push_str(&format!("(列別名: {alias})"));
    }
}

fn render_from(clause: &FromClause) -> String {
    let items: Vec<String> = clause.items.iter().map(render_from_item).collect();
    format!("{}から", items.join(SEPARATOR))
}

fn render_from_item(item: &FromItem) -> String {
    let mut out = match &item.source {
        TableSource::Table(name) => format!("{name}テーブル"),
        TableSource::Subquery(list) => format!("{}したレコード", render_select_list(list)),
    };
    if let Some(alias) = &item.alias {
        out.push_str(&format!("(別名: {alias})"));
    }
    out
}

fn render_where(clause: &WhereClause) -> String {
    format!("{}という条件で", render_conditions(&clause.conditions))
}

fn render_order_by(clause: &OrderByClause) -> String {
    let mut out = String::new();
    for item in &clause.items {
        out.push_str(SEPARATOR);
        out.push_str(&render_order_item(item));
    }
    out.push_str("にソートして");
    out
}

fn render_order_item(item: &OrderItem) -> String {
    let direction = match item.direction {
        OrderDirection::Asc => "昇順",
        OrderDirection::Desc => "降順",
    };
    match &item.key {
        OrderKey::Ordinal(n) => format!("{n}列目の{direction}"),
        OrderKey::Column(column) => format!("{}の{direction}", render_column(column)),
    }
}

/// Renders `[table]テーブルの` followed by the column name.
pub(crate) fn render_column(column: &ColumnRef) -> String {
    match &column.table {
        Some(table) => format!("{table}テーブルの{}", column.name),
        None => column.name.clone(),
    }
}
