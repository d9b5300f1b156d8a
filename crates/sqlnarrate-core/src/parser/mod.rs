//! SQL Parser
//!
//! A hand-written recursive descent parser over the atom stream, with one
//! atom of lookahead and a stack of scope terminators.

mod condition;
mod error;
mod parser;

pub use error::ParseError;
pub use parser::{MAX_DEPTH, Parser};
