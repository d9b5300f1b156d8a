//! Legality rules for flat WHERE conditions.
//!
//! Conditions are not parsed into a precedence tree. Instead a two-flag
//! state decides, atom by atom, whether the atom ends the condition, is an
//! operator token, must start an operand, or is an error.

use crate::ast::{ArithOp, CompareOp, ConditionToken, LogicalOp};
use crate::lexer::{Atom, Keyword};

/// What to do with the atom under the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Step {
    /// The condition ends before this atom.
    End,
    /// The atom is this operator token; consume it.
    Token(ConditionToken),
    /// An operand starts at this atom.
    Operand,
    /// The atom is not allowed here.
    Reject,
}

/// Parsing state of one condition list (one per parenthesized group).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ConditionState {
    /// A sign, NOT or EXISTS may appear here.
    prefix_allowed: bool,
    /// The next token has to be an operand.
    operand_required: bool,
}

impl ConditionState {
    /// The state at the start of a condition: prefixes allowed, operand due.
    pub(super) const fn new() -> Self {
        Self {
            prefix_allowed: true,
            operand_required: true,
        }
    }

    /// Classifies `atom` and advances the state accordingly.
    ///
    /// `terminator` is the atom that closes the current scope.
    pub(super) fn step(&mut self, atom: &Atom, terminator: &str) -> Step {
        if atom.starts_clause() || atom.is_symbol(terminator) {
            return Step::End;
        }

        let arithmetic = ArithOp::from_atom(atom.text());

        if self.prefix_allowed {
            if let Some(sign) = arithmetic.filter(ArithOp::is_sign) {
                self.require_operand(false);
                return Step::Token(ConditionToken::Arithmetic(sign));
            }
            if atom.is_keyword(Keyword::Not) {
                self.require_operand(true);
                return Step::Token(ConditionToken::Not);
            }
            if atom.is_keyword(Keyword::Exists) {
                self.require_operand(false);
                return Step::Token(ConditionToken::Exists);
            }
        }

        if self.operand_required {
            self.operand_required = false;
            self.prefix_allowed = false;
            return Step::Operand;
        }

        if let Some(op) = arithmetic {
            self.require_operand(false);
            return Step::Token(ConditionToken::Arithmetic(op));
        }
        if let Some(op) = CompareOp::from_atom(atom.text()) {
            self.require_operand(true);
            return Step::Token(ConditionToken::Compare(op));
        }
        let logical = match atom.keyword() {
            Some(Keyword::And) => LogicalOp::And,
            Some(Keyword::Or) => LogicalOp::Or,
            _ => return Step::Reject,
        };
        self.require_operand(true);
        Step::Token(ConditionToken::Logical(logical))
    }

    /// Returns true if the condition may end here.
    pub(super) const fn is_complete(&self) -> bool {
        !self.operand_required
    }

    fn require_operand(&mut self, prefix_allowed: bool) {
        self.operand_required = true;
        self.prefix_allowed = prefix_allowed;
    }
}
