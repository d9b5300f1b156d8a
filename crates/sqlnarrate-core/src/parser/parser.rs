//! SQL Parser implementation.

use tracing::trace;

use super::condition::{ConditionState, Step};
use super::error::ParseError;
use crate::ast::{
    ColumnRef, Compound, ConditionList, ConditionToken, FromClause, FromItem, Literal, Operand,
    OrderByClause, OrderDirection, OrderItem, OrderKey, SelectClause, SelectItem, SelectList,
    SelectStatement, SetOperator, TableSource, WhereClause,
};
use crate::lexer::{Atom, Keyword, Lexer};

/// Maximum number of nested parenthesized groups.
///
/// Parsing, rendering and dropping the tree all recurse once per level.
pub const MAX_DEPTH: usize = 128;

/// A nesting level and the atom that closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// The whole input, closed by `;`.
    Statement,
    /// A parenthesized group, closed by `)`.
    Group,
}

impl Scope {
    const fn terminator(self) -> &'static str {
        match self {
            Self::Statement => ";",
            Self::Group => ")",
        }
    }
}

/// SQL Parser.
///
/// Owns the atoms of one input and walks them with a cursor. A parser is
/// consumed by [`Parser::parse`], so no state leaks from one parse to the
/// next.
pub struct Parser {
    atoms: Vec<Atom>,
    pos: usize,
    scopes: Vec<Scope>,
}

impl Parser {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self::from_atoms(Lexer::new(input).tokenize())
    }

    /// Creates a parser over already tokenized atoms.
    #[must_use]
    pub fn from_atoms(atoms: Vec<Atom>) -> Self {
        trace!(atoms = atoms.len(), "parser created");
        Self {
            atoms,
            pos: 0,
            scopes: vec![Scope::Statement],
        }
    }

    /// Parses the input as a `;`-terminated select list.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` naming the first atom that does not fit the
    /// grammar, or a missing-terminator error if the input does not end
    /// with `;`.
    pub fn parse(mut self) -> Result<SelectList, ParseError> {
        if !self.atoms.last().is_some_and(|atom| atom.is_symbol(";")) {
            return Err(ParseError::missing(Scope::Statement.terminator()));
        }

        let list = self.parse_select_list()?;
        self.expect_symbol(";")?;

        // Anything after the first top-level `;` is not part of the statement.
        if let Some(extra) = self.atoms.get(self.pos) {
            return Err(ParseError::unexpected(extra));
        }

        Ok(list)
    }

    /// Parses statements chained with UNION / UNION ALL.
    fn parse_select_list(&mut self) -> Result<SelectList, ParseError> {
        let first = self.parse_select_statement()?;
        let mut compounds = vec![];

        while self.check_keyword(Keyword::Union) {
            self.bump();
            let op = if self.check_keyword(Keyword::All) {
                self.bump();
                SetOperator::UnionAll
            } else {
                SetOperator::Union
            };
            let statement = self.parse_select_statement()?;
            compounds.push(Compound { op, statement });
        }

        Ok(SelectList { first, compounds })
    }

    /// Parses a SELECT statement.
    fn parse_select_statement(&mut self) -> Result<SelectStatement, ParseError> {
        let select = self.parse_select_clause()?;
        let from = self.parse_from_clause()?;

        let where_clause = if self.check_keyword(Keyword::Where) {
            self.bump();
            Some(WhereClause {
                conditions: self.parse_condition_list()?,
            })
        } else {
            None
        };

        let order_by = if self.check_keyword(Keyword::Order) {
            self.bump();
            Some(self.parse_order_by_clause()?)
        } else {
            None
        };

        Ok(SelectStatement {
            select,
            from,
            where_clause,
            order_by,
        })
    }

    /// Parses the SELECT clause.
    fn parse_select_clause(&mut self) -> Result<SelectClause, ParseError> {
        self.expect_keyword(Keyword::Select)?;

        let mut items = vec![self.parse_select_item()?];
        loop {
            if self.check_symbol(",") {
                self.bump();
                items.push(self.parse_select_item()?);
            } else if self.current()?.starts_clause() {
                break;
            } else {
                return Err(self.error_here());
            }
        }

        Ok(SelectClause { items })
    }

    /// Parses a SELECT item: `*`, a column or a literal, with its alias.
    fn parse_select_item(&mut self) -> Result<SelectItem, ParseError> {
        let atom = self.current()?;

        if atom.is_symbol("*") {
            self.bump();
            Ok(SelectItem::Wildcard)
        } else if atom.is_name() {
            let column = self.parse_column()?;
            let alias = self.parse_optional_alias()?;
            Ok(SelectItem::Column { column, alias })
        } else if atom.is_value() {
            let value = self.parse_literal()?;
            let alias = self.parse_optional_alias()?;
            Ok(SelectItem::Literal { value, alias })
        } else {
            Err(ParseError::unexpected(atom))
        }
    }

    /// Parses the FROM clause.
    fn parse_from_clause(&mut self) -> Result<FromClause, ParseError> {
        self.expect_keyword(Keyword::From)?;

        let mut items = vec![self.parse_from_item()?];
        loop {
            if self.check_symbol(",") {
                self.bump();
                items.push(self.parse_from_item()?);
            } else if self.at_clause_end()? {
                break;
            } else {
                return Err(self.error_here());
            }
        }

        Ok(FromClause { items })
    }

    /// Parses a table name or a parenthesized sub-select, with its alias.
    fn parse_from_item(&mut self) -> Result<FromItem, ParseError> {
        let atom = self.current()?;

        let source = if atom.is_name() {
            TableSource::Table(self.take()?)
        } else if atom.is_symbol("(")
            && self
                .peek_next()
                .is_some_and(|next| next.is_keyword(Keyword::Select))
        {
            self.enter_group()?;
            let list = self.parse_select_list()?;
            self.leave_group()?;
            TableSource::Subquery(Box::new(list))
        } else {
            return Err(ParseError::unexpected(atom));
        };

        let alias = self.parse_optional_alias()?;
        Ok(FromItem { source, alias })
    }

    /// Parses a flat condition up to the next clause or scope terminator.
    fn parse_condition_list(&mut self) -> Result<ConditionList, ParseError> {
        let mut state = ConditionState::new();
        let mut tokens = vec![];

        loop {
            let terminator = self.terminator();
            let atom = self.current()?;
            match state.step(atom, terminator) {
                Step::End => break,
                Step::Token(token) => {
                    self.bump();
                    tokens.push(token);
                }
                Step::Operand => tokens.push(ConditionToken::Operand(self.parse_operand()?)),
                Step::Reject => return Err(ParseError::unexpected(atom)),
            }
        }

        // Also rejects an empty condition.
        if !state.is_complete() {
            return Err(self.error_here());
        }

        Ok(ConditionList { tokens })
    }

    /// Parses a condition operand.
    fn parse_operand(&mut self) -> Result<Operand, ParseError> {
        let atom = self.current()?;

        if atom.is_symbol("(") {
            self.parse_group()
        } else if atom.is_name() {
            Ok(Operand::Column(self.parse_column()?))
        } else if atom.is_value() {
            Ok(Operand::Literal(self.parse_literal()?))
        } else {
            Err(ParseError::unexpected(atom))
        }
    }

    /// Parses `( SELECT ... )` or `( condition )` inside a condition.
    fn parse_group(&mut self) -> Result<Operand, ParseError> {
        self.enter_group()?;
        let operand = if self.check_keyword(Keyword::Select) {
            Operand::Subquery(Box::new(self.parse_select_list()?))
        } else {
            Operand::Group(self.parse_condition_list()?)
        };
        self.leave_group()?;
        Ok(operand)
    }

    /// Parses the ORDER BY clause; `ORDER` has been consumed.
    fn parse_order_by_clause(&mut self) -> Result<OrderByClause, ParseError> {
        self.expect_word("BY")?;

        let mut items = vec![self.parse_order_item()?];
        loop {
            if self.check_symbol(",") {
                self.bump();
                items.push(self.parse_order_item()?);
            } else if self.at_clause_end()? {
                break;
            } else {
                return Err(self.error_here());
            }
        }

        Ok(OrderByClause { items })
    }

    /// Parses an ordinal or a column, followed by an optional direction.
    fn parse_order_item(&mut self) -> Result<OrderItem, ParseError> {
        let atom = self.current()?;

        let key = if atom.is_number() {
            OrderKey::Ordinal(self.take()?)
        } else if atom.is_name() {
            OrderKey::Column(self.parse_column()?)
        } else {
            return Err(ParseError::unexpected(atom));
        };

        let direction = if self.check_word("DESC") {
            self.bump();
            OrderDirection::Desc
        } else {
            if self.check_word("ASC") {
                self.bump();
            }
            OrderDirection::Asc
        };

        Ok(OrderItem { key, direction })
    }

    /// Parses `name` or `table.name`.
    fn parse_column(&mut self) -> Result<ColumnRef, ParseError> {
        let first = self.expect_name()?;
        if self.check_symbol(".") {
            self.bump();
            let name = self.expect_name()?;
            Ok(ColumnRef::qualified(first, name))
        } else {
            Ok(ColumnRef::new(first))
        }
    }

    /// Parses a number or string literal.
    fn parse_literal(&mut self) -> Result<Literal, ParseError> {
        let atom = self.current()?;
        if atom.is_number() {
            Ok(Literal::Number(self.take()?))
        } else if atom.is_string() {
            Ok(Literal::String(self.take()?))
        } else {
            Err(ParseError::unexpected(atom))
        }
    }

    /// Parses an optional alias: `AS alias`, or a bare name or string.
    fn parse_optional_alias(&mut self) -> Result<Option<String>, ParseError> {
        if self.check_word("AS") {
            self.bump();
            let atom = self.current()?;
            if atom.is_name() || atom.is_string() {
                Ok(Some(self.take()?))
            } else {
                Err(ParseError::unexpected(atom))
            }
        } else if self
            .atoms
            .get(self.pos)
            .is_some_and(|atom| atom.is_name() || atom.is_string())
        {
            Ok(Some(self.take()?))
        } else {
            Ok(None)
        }
    }

    // --- Helper methods ---

    /// The atom that closes the innermost scope.
    fn terminator(&self) -> &'static str {
        self.scopes
            .last()
            .copied()
            .unwrap_or(Scope::Statement)
            .terminator()
    }

    /// Returns the atom under the cursor.
    fn current(&self) -> Result<&Atom, ParseError> {
        self.atoms
            .get(self.pos)
            .ok_or_else(|| ParseError::missing(self.terminator()))
    }

    /// Returns the atom after the one under the cursor.
    fn peek_next(&self) -> Option<&Atom> {
        self.atoms.get(self.pos + 1)
    }

    /// Moves past the current atom.
    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Moves past the current atom and returns its text.
    fn take(&mut self) -> Result<String, ParseError> {
        let text = self.current()?.text().to_string();
        self.bump();
        Ok(text)
    }

    /// The error to report at the cursor.
    fn error_here(&self) -> ParseError {
        match self.current() {
            Ok(atom) => ParseError::unexpected(atom),
            Err(err) => err,
        }
    }

    /// Returns true if the current atom opens a clause or closes the scope.
    fn at_clause_end(&self) -> Result<bool, ParseError> {
        let atom = self.current()?;
        Ok(atom.starts_clause() || atom.is_symbol(self.terminator()))
    }

    /// Checks if the current atom is the given punctuation.
    fn check_symbol(&self, symbol: &str) -> bool {
        self.atoms
            .get(self.pos)
            .is_some_and(|atom| atom.is_symbol(symbol))
    }

    /// Checks if the current atom is the given keyword.
    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.atoms
            .get(self.pos)
            .is_some_and(|atom| atom.is_keyword(keyword))
    }

    /// Checks if the current atom is the given contextual word.
    fn check_word(&self, word: &str) -> bool {
        self.atoms
            .get(self.pos)
            .is_some_and(|atom| atom.is_word(word))
    }

    /// Expects the current atom to be the given punctuation.
    fn expect_symbol(&mut self, symbol: &str) -> Result<(), ParseError> {
        if self.check_symbol(symbol) {
            self.bump();
            Ok(())
        } else {
            Err(self.error_here())
        }
    }

    /// Expects the current atom to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if self.check_keyword(keyword) {
            self.bump();
            Ok(())
        } else {
            Err(self.error_here())
        }
    }

    /// Expects the current atom to be the given contextual word.
    fn expect_word(&mut self, word: &str) -> Result<(), ParseError> {
        if self.check_word(word) {
            self.bump();
            Ok(())
        } else {
            Err(self.error_here())
        }
    }

    /// Expects and returns a name.
    fn expect_name(&mut self) -> Result<String, ParseError> {
        let atom = self.current()?;
        if atom.is_name() {
            self.take()
        } else {
            Err(ParseError::unexpected(atom))
        }
    }

    /// Opens a parenthesized group.
    ///
    /// A `(` past [`MAX_DEPTH`] levels is reported like any other
    /// unexpected atom.
    fn enter_group(&mut self) -> Result<(), ParseError> {
        let atom = self.current()?;
        // `scopes` also holds the statement scope.
        if !atom.is_symbol("(") || self.scopes.len() > MAX_DEPTH {
            return Err(ParseError::unexpected(atom));
        }
        self.bump();
        self.scopes.push(Scope::Group);
        Ok(())
    }

    /// Closes the innermost parenthesized group.
    fn leave_group(&mut self) -> Result<(), ParseError> {
        self.expect_symbol(Scope::Group.terminator())?;
        self.scopes.pop();
        Ok(())
    }
}
