//! SELECT statement AST types.

use std::fmt;

use super::condition::ConditionList;
use crate::lexer::Keyword;

/// How two statements of a select list are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOperator {
    /// UNION (duplicates removed).
    Union,
    /// UNION ALL (duplicates kept).
    UnionAll,
}

impl SetOperator {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Union => "UNION",
            Self::UnionAll => "UNION ALL",
        }
    }
}

/// A statement joined onto a select list with UNION or UNION ALL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compound {
    /// The set operator preceding the statement.
    pub op: SetOperator,
    /// The statement.
    pub statement: SelectStatement,
}

/// One or more SELECT statements chained with UNION / UNION ALL.
///
/// This is the root of every parse, and also what a parenthesized
/// sub-select contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectList {
    /// The first statement.
    pub first: SelectStatement,
    /// Statements appended with a set operator, in source order.
    pub compounds: Vec<Compound>,
}

impl SelectList {
    /// Iterates over every statement in source order.
    pub fn statements(&self) -> impl Iterator<Item = &SelectStatement> {
        std::iter::once(&self.first).chain(self.compounds.iter().map(|c| &c.statement))
    }
}

/// A single SELECT ... FROM ... [WHERE ...] [ORDER BY ...].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStatement {
    /// The projection.
    pub select: SelectClause,
    /// The sources.
    pub from: FromClause,
    /// The filter, if any.
    pub where_clause: Option<WhereClause>,
    /// The ordering, if any.
    pub order_by: Option<OrderByClause>,
}

/// The SELECT clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectClause {
    /// Projected items, never empty.
    pub items: Vec<SelectItem>,
}

/// An item in the SELECT list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectItem {
    /// `*`.
    Wildcard,
    /// A (possibly qualified) column.
    Column {
        /// The column.
        column: ColumnRef,
        /// Alias.
        alias: Option<String>,
    },
    /// A number or string literal.
    Literal {
        /// The literal.
        value: Literal,
        /// Alias.
        alias: Option<String>,
    },
}

/// The FROM clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromClause {
    /// Sources, never empty.
    pub items: Vec<FromItem>,
}

/// A source in the FROM clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromItem {
    /// The table or sub-select.
    pub source: TableSource,
    /// Alias.
    pub alias: Option<String>,
}

/// What a FROM item reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// A table name.
    Table(String),
    /// A parenthesized select list.
    Subquery(Box<SelectList>),
}

/// The WHERE clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereClause {
    /// The condition.
    pub conditions: ConditionList,
}

/// The ORDER BY clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByClause {
    /// Sort keys, never empty.
    pub items: Vec<OrderItem>,
}

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// An ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    /// What to sort by.
    pub key: OrderKey,
    /// The direction.
    pub direction: OrderDirection,
}

/// A sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderKey {
    /// A 1-based position in the SELECT list, kept as written.
    Ordinal(String),
    /// A column.
    Column(ColumnRef),
}

/// A column reference, optionally qualified by its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    /// Table qualifier.
    pub table: Option<String>,
    /// Column name.
    pub name: String,
}

impl ColumnRef {
    /// Creates an unqualified column reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }

    /// Creates a `table.name` column reference.
    #[must_use]
    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            name: name.into(),
        }
    }
}

/// A literal value, kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Digits only.
    Number(String),
    /// Quoted text, quotes included.
    String(String),
}

impl Literal {
    /// Returns the source text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Number(s) | Self::String(s) => s,
        }
    }
}

fn write_alias(f: &mut fmt::Formatter<'_>, alias: Option<&String>) -> fmt::Result {
    match alias {
        Some(alias) => write!(f, " AS {alias}"),
        None => Ok(()),
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for SelectList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for compound in &self.compounds {
            write!(f, " {} {}", compound.op.as_str(), compound.statement)?;
        }
        Ok(())
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.select, self.from)?;
        if let Some(where_clause) = &self.where_clause {
            write!(f, " {where_clause}")?;
        }
        if let Some(order_by) = &self.order_by {
            write!(f, " {order_by}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SelectClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", Keyword::Select)?;
        write_list(f, &self.items)
    }
}

impl fmt::Display for SelectItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wildcard => f.write_str("*"),
            Self::Column { column, alias } => {
                write!(f, "{column}")?;
                write_alias(f, alias.as_ref())
            }
            Self::Literal { value, alias } => {
                write!(f, "{value}")?;
                write_alias(f, alias.as_ref())
            }
        }
    }
}

impl fmt::Display for FromClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", Keyword::From)?;
        write_list(f, &self.items)
    }
}

impl fmt::Display for FromItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            TableSource::Table(name) => f.write_str(name)?,
            TableSource::Subquery(list) => write!(f, "({list})")?,
        }
        write_alias(f, self.alias.as_ref())
    }
}

impl fmt::Display for WhereClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Keyword::Where, self.conditions)
    }
}

impl fmt::Display for OrderByClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ORDER BY ")?;
        write_list(f, &self.items)
    }
}

impl fmt::Display for OrderItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            OrderKey::Ordinal(n) => f.write_str(n)?,
            OrderKey::Column(column) => write!(f, "{column}")?,
        }
        write!(f, " {}", self.direction.as_str())
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => write!(f, "{table}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
