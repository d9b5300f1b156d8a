//! Tests for WHERE and ORDER BY.

mod common;
use common::*;

use sqlnarrate_core::ast::{ColumnRef, OrderDirection, OrderItem, OrderKey};

#[test]
fn where_simple() {
    let s = parse_select("SELECT * FROM users WHERE id = 1;");
    assert!(s.where_clause.is_some());
    assert!(s.order_by.is_none());
    round_trip("SELECT * FROM users WHERE id = 1;");
}

#[test]
fn order_by_column_default_direction() {
    let s = parse_select("SELECT a FROM t ORDER BY a;");
    let order_by = s.order_by.expect("ORDER BY");
    assert_eq!(
        order_by.items,
        vec![OrderItem {
            key: OrderKey::Column(ColumnRef::new("a")),
            direction: OrderDirection::Asc,
        }]
    );
    round_trip("SELECT a FROM t ORDER BY a;");
}

#[test]
fn order_by_ordinal_and_directions() {
    let s = parse_select("SELECT a, b FROM t ORDER BY 2 DESC, t.a asc, b;");
    let items = s.order_by.expect("ORDER BY").items;
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].key, OrderKey::Ordinal("2".to_string()));
    assert_eq!(items[0].direction, OrderDirection::Desc);
    assert_eq!(items[1].key, OrderKey::Column(ColumnRef::qualified("t", "a")));
    assert_eq!(items[1].direction, OrderDirection::Asc);
    assert_eq!(items[2].direction, OrderDirection::Asc);
    round_trip("SELECT a, b FROM t ORDER BY 2 DESC, t.a asc, b;");
}

#[test]
fn where_then_order_by() {
    let s = parse_select("SELECT a FROM t WHERE a > 1 ORDER BY a DESC;");
    assert!(s.where_clause.is_some());
    assert!(s.order_by.is_some());
    round_trip("SELECT a FROM t WHERE a > 1 ORDER BY a DESC;");
}

#[test]
fn lowercase_and_uppercase_parse_identically() {
    assert_eq!(parse("select A from T;"), parse("SELECT A FROM T;"));
    assert_eq!(
        parse("select a from t where a in (select b from u) order by a desc;"),
        parse("SELECT a FROM t WHERE a IN (SELECT b FROM u) ORDER BY a DESC;")
    );
}

#[test]
fn mixed_case_keywords() {
    assert_eq!(
        parse("SeLeCt a FrOm t WhErE a = 1 OrDeR By a DeSc;"),
        parse("SELECT a FROM t WHERE a = 1 ORDER BY a DESC;")
    );
}

#[test]
fn statement_spanning_lines() {
    assert_eq!(
        parse("SELECT *\nFROM t\n WHERE a = 1\n;"),
        parse("SELECT * FROM t WHERE a = 1;")
    );
}
