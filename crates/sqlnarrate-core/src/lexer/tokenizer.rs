//! SQL tokenizer implementation.

use super::{Atom, Span};

/// Characters that always form an atom of their own.
const PUNCTUATION: &[char] = &[',', '.', '(', ')', '-', '+', '*', ';', '=', '!', '<', '>'];

/// A lexer that splits SQL input into atoms.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// Text of the atom being accumulated.
    pending: String,
    /// Span of the atom being accumulated.
    pending_span: Option<Span>,
    /// The quote character of the string currently open, if any.
    quote: Option<char>,
    /// Atoms produced so far.
    atoms: Vec<Atom>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            pending: String::new(),
            pending_span: None,
            quote: None,
            atoms: Vec::new(),
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Appends a character to the atom being accumulated.
    fn push(&mut self, c: char, start: usize) {
        let end = start + c.len_utf8();
        self.pending_span = Some(match self.pending_span {
            Some(span) => span.extend_to(end),
            None => Span::new(start, end),
        });
        self.pending.push(c);
    }

    /// Emits the accumulated atom, if there is one.
    fn flush(&mut self) {
        if let Some(span) = self.pending_span.take() {
            let text = std::mem::take(&mut self.pending);
            self.atoms.push(Atom::new(text, span));
        }
    }

    /// Emits a punctuation atom, merging two-character comparisons.
    fn punctuation(&mut self, c: char, start: usize) {
        self.flush();
        let second = match (c, self.peek()) {
            ('<', Some(next @ ('>' | '='))) | ('!' | '>', Some(next @ '=')) => Some(next),
            _ => None,
        };

        let mut text = String::from(c);
        if let Some(next) = second {
            self.advance();
            text.push(next);
        }
        self.atoms.push(Atom::new(text, Span::new(start, self.pos)));
    }

    /// Tokenizes the entire input and returns all atoms.
    ///
    /// Newlines are dropped without separating anything. Quoted text keeps
    /// its spaces. An unterminated quote swallows the rest of the input into
    /// a single atom, which the parser later rejects.
    #[must_use]
    pub fn tokenize(mut self) -> Vec<Atom> {
        while let Some(c) = self.advance() {
            let start = self.pos - c.len_utf8();

            if c == '\n' {
                continue;
            }

            if let Some(quote) = self.quote {
                if c == quote {
                    self.quote = None;
                }
                self.push(c, start);
                continue;
            }

            match c {
                '\'' | '"' => {
                    self.quote = Some(c);
                    self.push(c, start);
                }
                c if c.is_whitespace() => self.flush(),
                c if PUNCTUATION.contains(&c) => self.punctuation(c, start),
                c => self.push(c, start),
            }
        }

        self.flush();
        self.atoms
    }
}
