#![allow(dead_code)]

use sqlnarrate_core::ast::{ConditionList, SelectList, SelectStatement};
use sqlnarrate_core::{ParseError, Parser};

pub fn parse(sql: &str) -> SelectList {
    Parser::new(sql)
        .parse()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    Parser::new(sql)
        .parse()
        .expect_err(&format!("Expected parse error for: {sql}"))
}

/// Parses a single statement (no UNION).
pub fn parse_select(sql: &str) -> SelectStatement {
    let list = parse(sql);
    assert!(
        list.compounds.is_empty(),
        "Expected a single statement, got {list:?}"
    );
    list.first
}

/// Parses a statement and returns its WHERE condition.
pub fn parse_where(sql: &str) -> ConditionList {
    parse_select(sql)
        .where_clause
        .unwrap_or_else(|| panic!("Expected WHERE clause in: {sql}"))
        .conditions
}

/// Asserts the diagnostic produced for `sql`.
pub fn assert_near(sql: &str, atom: &str) {
    assert_eq!(
        parse_err(sql).to_string(),
        format!("Syntax Error: near \"{atom}\"."),
        "Unexpected diagnostic for: {sql}"
    );
}

/// Verifies that `to_string()` produces a fixed point:
/// the printed SQL parses back to the same tree and prints the same.
pub fn round_trip(sql: &str) {
    let ast1 = parse(sql);
    let rendered1 = ast1.to_string();
    let ast2 = parse(&format!("{rendered1};"));
    let rendered2 = ast2.to_string();
    assert_eq!(ast1, ast2, "Round-trip changed the tree for: {sql}");
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}
