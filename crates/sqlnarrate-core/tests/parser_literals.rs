//! Tests for tokenizing and classifying literals and names.

mod common;
use common::*;

use sqlnarrate_core::ast::{Literal, SelectItem};
use sqlnarrate_core::{Atom, Lexer};

fn texts(sql: &str) -> Vec<String> {
    Lexer::new(sql)
        .tokenize()
        .iter()
        .map(|atom| atom.text().to_string())
        .collect()
}

#[test]
fn quoted_string_is_one_atom() {
    assert_eq!(texts("'a b c'"), vec!["'a b c'"]);
    assert_eq!(texts("\"x, y; z\""), vec!["\"x, y; z\""]);
}

#[test]
fn compound_comparisons_are_one_atom() {
    assert_eq!(texts("a<=b"), vec!["a", "<=", "b"]);
    assert_eq!(texts("a<>b"), vec!["a", "<>", "b"]);
    assert_eq!(texts("a!=b"), vec!["a", "!=", "b"]);
    assert_eq!(texts("a>=b"), vec!["a", ">=", "b"]);
}

#[test]
fn string_literal_keeps_quotes() {
    let s = parse_select("SELECT 'hello world' FROM t;");
    assert_eq!(
        s.select.items,
        vec![SelectItem::Literal {
            value: Literal::String("'hello world'".to_string()),
            alias: None,
        }]
    );
}

#[test]
fn double_quoted_string() {
    let tokens = parse_where("SELECT a FROM t WHERE a = \"b\";").tokens;
    assert_eq!(tokens[2].to_string(), "\"b\"");
}

#[test]
fn numbers_keep_their_text() {
    let s = parse_select("SELECT 007, 99999999999999999999999 FROM t;");
    assert_eq!(
        s.select.items[0],
        SelectItem::Literal {
            value: Literal::Number("007".to_string()),
            alias: None,
        }
    );
    assert_eq!(
        s.select.items[1].to_string(),
        "99999999999999999999999"
    );
}

#[test]
fn decimal_point_splits_number() {
    assert_eq!(texts("1.5"), vec!["1", ".", "5"]);
    assert_near("SELECT 1.5 FROM t;", ".");
}

#[test]
fn name_classification() {
    let name = |text: &str| Atom::new(text, Default::default()).is_name();
    assert!(name("a"));
    assert!(name("user_id2"));
    assert!(!name("2a"));
    assert!(!name("_a"));
    assert!(!name("a-b"));
}

#[test]
fn name_with_digit_prefix_is_rejected() {
    assert_near("SELECT 2a FROM t;", "2a");
}

#[test]
fn mismatched_quotes_are_not_a_string() {
    assert!(!Atom::new("'a\"", Default::default()).is_string());
    assert!(!Atom::new("'", Default::default()).is_string());
    assert!(Atom::new("''", Default::default()).is_string());
}

#[test]
fn empty_string_literal() {
    round_trip("SELECT a FROM t WHERE a = '';");
}
