//! Tests for the FROM clause: tables, aliases and sub-selects.

mod common;
use common::*;

use sqlnarrate_core::ast::{FromItem, TableSource};

#[test]
fn from_simple_table() {
    let s = parse_select("SELECT * FROM users;");
    assert_eq!(
        s.from.items,
        vec![FromItem {
            source: TableSource::Table("users".to_string()),
            alias: None,
        }]
    );
    round_trip("SELECT * FROM users;");
}

#[test]
fn from_table_with_as_alias() {
    let s = parse_select("SELECT * FROM users AS u;");
    assert_eq!(s.from.items[0].alias.as_deref(), Some("u"));
    round_trip("SELECT * FROM users AS u;");
}

#[test]
fn from_table_with_bare_alias() {
    let s = parse_select("SELECT * FROM users u;");
    assert_eq!(s.from.items[0].alias.as_deref(), Some("u"));
    round_trip("SELECT * FROM users u;");
}

#[test]
fn from_multiple_tables() {
    let s = parse_select("SELECT * FROM users u, orders AS o, items;");
    let aliases: Vec<_> = s.from.items.iter().map(|i| i.alias.as_deref()).collect();
    assert_eq!(aliases, vec![Some("u"), Some("o"), None]);
    round_trip("SELECT * FROM users u, orders AS o, items;");
}

#[test]
fn from_subquery() {
    let s = parse_select("SELECT a FROM (SELECT a FROM t WHERE a > 1) AS sub;");
    let FromItem {
        source: TableSource::Subquery(inner),
        alias,
    } = &s.from.items[0]
    else {
        panic!("Expected subquery, got {:?}", s.from.items[0]);
    };
    assert_eq!(alias.as_deref(), Some("sub"));
    assert!(inner.first.where_clause.is_some());
    round_trip("SELECT a FROM (SELECT a FROM t WHERE a > 1) AS sub;");
}

#[test]
fn from_subquery_with_union() {
    let s = parse_select("SELECT a FROM (SELECT a FROM t UNION SELECT a FROM u);");
    let TableSource::Subquery(inner) = &s.from.items[0].source else {
        panic!("Expected subquery");
    };
    assert_eq!(inner.compounds.len(), 1);
    round_trip("SELECT a FROM (SELECT a FROM t UNION SELECT a FROM u);");
}

#[test]
fn from_nested_subqueries() {
    round_trip("SELECT a FROM (SELECT a FROM (SELECT a FROM t) x) y;");
}

#[test]
fn from_table_named_like_contextual_word() {
    let s = parse_select("SELECT a FROM asc;");
    assert_eq!(s.from.items[0].source, TableSource::Table("asc".to_string()));
}
