//! SQL atomizer.
//!
//! Splits raw SQL text into [`Atom`]s and provides the stateless classifiers
//! the parser consults (name, string, number, keyword).

mod atom;
mod span;
mod tokenizer;

pub use atom::{Atom, Keyword};
pub use span::Span;
pub use tokenizer::Lexer;
