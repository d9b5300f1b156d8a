//! End-to-end tests for `translate`.

use sqlnarrate_core::translate;

const WELL_FORMED: &[&str] = &[
    "SELECT a FROM t;",
    "SELECT * FROM t WHERE a = 1;",
    "SELECT a, b FROM t ORDER BY a;",
    "SELECT a FROM t WHERE a > 1 AND b < 2 ORDER BY 1 DESC;",
    "SELECT t.a AS x, 'k' FROM t, u v WHERE t.a = v.a;",
    "select a from t where not exists (select b from u) order by a asc;",
];

#[test]
fn well_formed_statements_end_with_full_stop() {
    for sql in WELL_FORMED {
        let sentence = translate(sql);
        assert!(!sentence.is_empty(), "empty output for {sql}");
        assert!(sentence.ends_with('。'), "{sql} -> {sentence}");
        assert!(!sentence.starts_with("Syntax Error"), "{sql} -> {sentence}");
    }
}

#[test]
fn simple_select() {
    assert_eq!(translate("SELECT a FROM t;"), "tテーブルから、aの抽出。");
}

#[test]
fn full_statement() {
    assert_eq!(
        translate("SELECT name, age FROM users WHERE age >= 20 ORDER BY age DESC;"),
        "usersテーブルからageが20以上という条件で、ageの降順にソートして、name、ageの抽出。"
    );
}

#[test]
fn quoted_string_with_spaces() {
    assert_eq!(
        translate("SELECT 'a b c' FROM t;"),
        "tテーブルから、固定値'a b c'の抽出。"
    );
}

#[test]
fn less_or_equal_is_one_operator() {
    assert_eq!(
        translate("SELECT a FROM t WHERE a <= 1;"),
        "tテーブルからaが1以下という条件で、aの抽出。"
    );
}

#[test]
fn missing_terminator() {
    assert_eq!(translate("SELECT a FROM t"), "Syntax Error: missing \";\"");
}

#[test]
fn near_first_unexpected_atom() {
    assert_eq!(
        translate("SELECT a FROM t WHERE a === 1;"),
        "Syntax Error: near \"=\"."
    );
}

#[test]
fn case_insensitive_keywords() {
    assert_eq!(translate("select A from T;"), translate("SELECT A FROM T;"));
}

#[test]
fn union_all() {
    assert_eq!(
        translate("SELECT a FROM t UNION ALL SELECT a FROM u;"),
        "tテーブルから、aの抽出。その結果に、uテーブルから、aの抽出したレコードを結合(重複レコードを含む)。"
    );
}

#[test]
fn in_subquery_renders_recursively() {
    assert_eq!(
        translate("SELECT a FROM t WHERE a IN (SELECT b FROM u);"),
        "tテーブルからaがuテーブルから、bの抽出に含まれるという条件で、aの抽出。"
    );
}

#[test]
fn not_in_subquery() {
    assert_eq!(
        translate("SELECT a FROM t WHERE NOT a IN (SELECT b FROM u WHERE b > 1);"),
        "tテーブルからaでは無いがuテーブルからbが1より大きいという条件で、bの抽出に含まれるという条件で、aの抽出。"
    );
}

#[test]
fn alias_forms_agree() {
    let expected = "tテーブルから、a(列別名: x)の抽出。";
    assert_eq!(translate("SELECT a AS x FROM t;"), expected);
    assert_eq!(translate("SELECT a x FROM t;"), expected);
}

#[test]
fn both_not_equal_spellings() {
    assert_eq!(
        translate("SELECT a FROM t WHERE a <> 1;"),
        translate("SELECT a FROM t WHERE a != 1;")
    );
}

#[test]
fn nested_from_subquery_with_union() {
    assert_eq!(
        translate("SELECT * FROM (SELECT a FROM t UNION SELECT a FROM u) s;"),
        "tテーブルから、aの抽出。その結果に、uテーブルから、aの抽出したレコードを結合したレコード(別名: s)から全ての項目の抽出。"
    );
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        translate("SELECT a\r\nFROM t\r\nWHERE a = 1;\r\n"),
        "tテーブルからaが1と等しいという条件で、aの抽出。"
    );
}
