//! Rendering of flat WHERE conditions.
//!
//! Operators do not print their meaning where they stand. A comparison
//! writes `が` and leaves a qualifier pending; the qualifier is written
//! after the next operand. `NOT` marks the pending qualifier as negated, so
//! it has to come before the `IN` or `EXISTS` it negates.

use crate::ast::{CompareOp, ConditionList, ConditionToken, LogicalOp, Operand};

use super::{render_column, render_select_list};

const NEGATION: &str = "では無い";

/// The phrase waiting for the next operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Qualifier {
    /// Nothing pending.
    Empty,
    /// `NOT` was seen.
    Negated,
    /// A phrase to append after the operand.
    Phrase(&'static str),
}

impl Qualifier {
    const fn is_negated(self) -> bool {
        matches!(self, Self::Negated)
    }

    const fn text(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Negated => NEGATION,
            Self::Phrase(phrase) => phrase,
        }
    }

    /// The qualifier set by a comparison operator.
    const fn compare(self, op: CompareOp) -> Self {
        Self::Phrase(match op {
            CompareOp::Eq => "と等しい",
            CompareOp::NotEq => "と異なる",
            CompareOp::Lt => "より小さい",
            CompareOp::Gt => "より大きい",
            CompareOp::LtEq => "以下",
            CompareOp::GtEq => "以上",
            CompareOp::In if self.is_negated() => "に含まれない",
            CompareOp::In => "に含まれる",
        })
    }

    /// The qualifier set by `EXISTS`.
    const fn exists(self) -> Self {
        Self::Phrase(if self.is_negated() {
            "にデータが存在しない"
        } else {
            "にデータが存在する"
        })
    }
}

/// Renders a condition token sequence.
pub(super) fn render_conditions(conditions: &ConditionList) -> String {
    let mut out = String::new();
    let mut pending = Qualifier::Empty;

    for token in &conditions.tokens {
        match token {
            ConditionToken::Logical(LogicalOp::And) => out.push_str("かつ、"),
            ConditionToken::Logical(LogicalOp::Or) => out.push_str("または、"),
            ConditionToken::Compare(op) => {
                out.push('が');
                pending = pending.compare(*op);
            }
            ConditionToken::Exists => pending = pending.exists(),
            ConditionToken::Not => pending = Qualifier::Negated,
            ConditionToken::Arithmetic(op) => out.push_str(op.as_str()),
            ConditionToken::Operand(operand) => {
                out.push_str(&render_operand(operand));
                out.push_str(pending.text());
                pending = Qualifier::Empty;
            }
        }
    }

    out
}

fn render_operand(operand: &Operand) -> String {
    match operand {
        Operand::Column(column) => render_column(column),
        Operand::Literal(value) => value.as_str().to_string(),
        Operand::Subquery(list) => render_select_list(list),
        Operand::Group(conditions) => render_conditions(conditions),
    }
}
