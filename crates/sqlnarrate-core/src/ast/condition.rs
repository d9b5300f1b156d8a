//! Condition AST types.
//!
//! A WHERE condition is kept as the flat sequence of tokens the user wrote,
//! not as a precedence tree. Operators sit between (or before) operands in
//! source order.

use std::fmt;

use super::statement::{ColumnRef, Literal, SelectList};
use crate::lexer::Keyword;

/// Comparison operators, `IN` included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `=`
    Eq,
    /// `<>` or `!=`
    NotEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `IN`
    In,
}

impl CompareOp {
    /// Parses an operator atom. `IN` is matched case-insensitively.
    #[must_use]
    pub fn from_atom(text: &str) -> Option<Self> {
        match text {
            "=" => Some(Self::Eq),
            "<>" | "!=" => Some(Self::NotEq),
            "<" => Some(Self::Lt),
            ">" => Some(Self::Gt),
            "<=" => Some(Self::LtEq),
            ">=" => Some(Self::GtEq),
            _ if text.eq_ignore_ascii_case("IN") => Some(Self::In),
            _ => None,
        }
    }

    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::In => "IN",
        }
    }
}

/// Boolean connectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// Arithmetic operators. `+` and `-` double as unary signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    /// Parses an operator atom.
    #[must_use]
    pub fn from_atom(text: &str) -> Option<Self> {
        match text {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Returns true for `+` and `-`, the operators allowed as a sign.
    #[must_use]
    pub const fn is_sign(&self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

/// Something a condition operator applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A column (or bare name).
    Column(ColumnRef),
    /// A number or string.
    Literal(Literal),
    /// A parenthesized select list.
    Subquery(Box<SelectList>),
    /// A parenthesized condition.
    Group(ConditionList),
}

/// One element of a flat condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionToken {
    Operand(Operand),
    Compare(CompareOp),
    Logical(LogicalOp),
    Arithmetic(ArithOp),
    Not,
    Exists,
}

/// A flat, non-empty condition token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionList {
    /// The tokens in source order.
    pub tokens: Vec<ConditionToken>,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column(column) => write!(f, "{column}"),
            Self::Literal(value) => write!(f, "{value}"),
            Self::Subquery(list) => write!(f, "({list})"),
            Self::Group(conditions) => write!(f, "({conditions})"),
        }
    }
}

impl fmt::Display for ConditionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(operand) => write!(f, "{operand}"),
            Self::Compare(op) => f.write_str(op.as_str()),
            Self::Logical(op) => f.write_str(op.as_str()),
            Self::Arithmetic(op) => f.write_str(op.as_str()),
            Self::Not => f.write_str(Keyword::Not.as_str()),
            Self::Exists => f.write_str(Keyword::Exists.as_str()),
        }
    }
}

impl fmt::Display for ConditionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
