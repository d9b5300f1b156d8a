//! Atoms and the classifiers the parser consults.
//!
//! An atom is only a slice of source text. Whether it is a name, a
//! number, a string or a keyword is decided each time it is asked, so the
//! same atom can be a table name in one position and an alias in another.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::Span;

static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("valid name pattern"));

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid number pattern"));

/// Reserved SQL keywords. None of these can be used as a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Select,
    From,
    Where,
    Order,
    Union,
    Not,
    In,
    And,
    Or,
    Exists,
    All,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "ORDER" => Some(Self::Order),
            "UNION" => Some(Self::Union),
            "NOT" => Some(Self::Not),
            "IN" => Some(Self::In),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "EXISTS" => Some(Self::Exists),
            "ALL" => Some(Self::All),
            _ => None,
        }
    }

    /// Returns the keyword as an uppercase string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Order => "ORDER",
            Self::Union => "UNION",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Exists => "EXISTS",
            Self::All => "ALL",
        }
    }

    /// Returns true if the keyword opens a clause (or a compound statement).
    ///
    /// Clause loops stop when they meet one of these.
    #[must_use]
    pub const fn starts_clause(&self) -> bool {
        matches!(
            self,
            Self::Select | Self::From | Self::Where | Self::Order | Self::Union
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The smallest lexical unit: a run of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    text: String,
    span: Span,
}

impl Atom {
    /// Creates an atom.
    #[must_use]
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    /// The atom's text exactly as written.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Where the atom came from in the input.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns the reserved keyword this atom spells, if any.
    #[must_use]
    pub fn keyword(&self) -> Option<Keyword> {
        Keyword::from_str(&self.text)
    }

    /// Returns true if the atom is the given keyword, in any case.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.keyword() == Some(keyword)
    }

    /// Returns true if the atom is a keyword that opens a clause.
    #[must_use]
    pub fn starts_clause(&self) -> bool {
        self.keyword().is_some_and(|kw| kw.starts_clause())
    }

    /// Case-insensitive match for contextual words such as `BY` or `ASC`.
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        self.text.eq_ignore_ascii_case(word)
    }

    /// Exact match for punctuation and operators.
    #[must_use]
    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.text == symbol
    }

    /// A name: a letter followed by letters, digits or underscores, and not
    /// a reserved keyword.
    #[must_use]
    pub fn is_name(&self) -> bool {
        NAME.is_match(&self.text) && self.keyword().is_none()
    }

    /// A string literal wrapped in matching single or double quotes.
    #[must_use]
    pub fn is_string(&self) -> bool {
        let text = self.text.as_str();
        text.len() >= 2
            && ((text.starts_with('\'') && text.ends_with('\''))
                || (text.starts_with('"') && text.ends_with('"')))
    }

    /// An unsigned integer literal.
    #[must_use]
    pub fn is_number(&self) -> bool {
        NUMBER.is_match(&self.text)
    }

    /// Anything usable as a value: number, string or bare name.
    #[must_use]
    pub fn is_value(&self) -> bool {
        self.is_number() || self.is_string() || self.is_name()
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
