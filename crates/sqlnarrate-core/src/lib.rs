//! # sqlnarrate-core
//!
//! Reads a restricted SQL SELECT statement and describes it in Japanese.
//!
//! This crate provides:
//! - A tokenizer that splits SQL text into atoms
//! - A hand-written recursive descent parser producing a typed AST
//! - A renderer turning the AST into a single Japanese sentence
//!
//! ## Translating
//!
//! [`translate`] is the whole pipeline. It always returns a string: the
//! sentence on success, the diagnostic on failure.
//!
//! ```rust
//! use sqlnarrate_core::translate;
//!
//! assert_eq!(
//!     translate("SELECT name FROM users WHERE id = 1;"),
//!     "usersテーブルからidが1と等しいという条件で、nameの抽出。"
//! );
//! assert_eq!(translate("SELECT name FROM users"), "Syntax Error: missing \";\"");
//! ```
//!
//! ## Working with the AST
//!
//! ```rust
//! use sqlnarrate_core::{Parser, render};
//!
//! let list = Parser::new("select a from t union all select a from u;").parse()?;
//! assert_eq!(list.compounds.len(), 1);
//! assert_eq!(list.to_string(), "SELECT a FROM t UNION ALL SELECT a FROM u");
//! assert!(render(&list).ends_with('。'));
//! # Ok::<(), sqlnarrate_core::ParseError>(())
//! ```

use tracing::debug;

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod render;

pub use ast::{SelectList, SelectStatement};
pub use lexer::{Atom, Keyword, Lexer, Span};
pub use parser::{ParseError, Parser};
pub use render::render;

/// Translates a SQL statement into a Japanese sentence.
///
/// On a syntax error the diagnostic text is returned instead, e.g.
/// `Syntax Error: near "===".` or `Syntax Error: missing ";"`.
#[must_use]
pub fn translate(sql: &str) -> String {
    match Parser::new(sql).parse() {
        Ok(list) => {
            debug!(statements = list.statements().count(), "parsed select list");
            render(&list)
        }
        Err(err) => {
            debug!(error = %err, span = ?err.span(), "rejected statement");
            err.to_string()
        }
    }
}
