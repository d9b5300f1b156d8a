//! Parser error types.

use thiserror::Error;

use crate::lexer::{Atom, Span};

/// A parse error.
///
/// The `Display` form is the diagnostic handed back to callers verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An atom that fits none of the alternatives at its position.
    #[error("Syntax Error: near \"{atom}\".")]
    Unexpected {
        /// The offending atom, as written.
        atom: String,
        /// Where it was found.
        span: Span,
    },

    /// The input stopped before the expected terminator.
    #[error("Syntax Error: missing \"{terminator}\"")]
    MissingTerminator {
        /// The terminator that was expected (`;` or `)`).
        terminator: &'static str,
    },
}

impl ParseError {
    /// Creates an "unexpected atom" error.
    #[must_use]
    pub fn unexpected(atom: &Atom) -> Self {
        Self::Unexpected {
            atom: atom.text().to_string(),
            span: atom.span(),
        }
    }

    /// Creates a "missing terminator" error.
    #[must_use]
    pub const fn missing(terminator: &'static str) -> Self {
        Self::MissingTerminator { terminator }
    }

    /// Returns the location of the offending atom, if there is one.
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::Unexpected { span, .. } => Some(*span),
            Self::MissingTerminator { .. } => None,
        }
    }
}
