//! Command-line front end for `sqlnarrate-core`.
//!
//! Takes one SQL statement from the command line or stdin and prints the
//! Japanese description, the canonical SQL, or a JSON response.
//!
//! # CLI Usage
//!
//! ```bash
//! # Describe a statement
//! sqlnarrate "SELECT name FROM users WHERE id = 1;"
//!
//! # Read the statement from stdin
//! echo "SELECT * FROM t;" | sqlnarrate
//!
//! # JSON request/response
//! echo '{"sql": "SELECT a FROM t;"}' | sqlnarrate --json
//!
//! # Print the canonical form of the statement
//! sqlnarrate --normalize "select a x from t order by a;"
//! ```

pub mod error;
pub mod json;

use std::io::{Read, Write};

use clap::Parser as ClapParser;
use sqlnarrate_core::{Parser, render, translate};
use tracing::debug;

pub use error::{CliError, Result};
pub use json::{Request, Response};

/// Describes SQL SELECT statements in Japanese.
#[derive(Debug, ClapParser)]
#[command(name = "sqlnarrate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// SQL statement to translate (read from stdin if omitted).
    pub sql: Option<String>,

    /// Read a JSON request `{"sql": ...}` from stdin and answer with
    /// `{"result": ...}`.
    #[arg(long, conflicts_with_all = ["sql", "normalize"])]
    pub json: bool,

    /// Print the canonical SQL instead of the description.
    #[arg(short, long)]
    pub normalize: bool,

    /// Enable verbose output.
    #[arg(short, long, env = "SQLNARRATE_VERBOSE")]
    pub verbose: bool,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The statement was understood.
    Success,
    /// A syntax diagnostic was written instead.
    Diagnostic,
}

impl Cli {
    /// Runs the command, reading stdin from `input` when needed and writing
    /// the result line to `output`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading, writing or JSON decoding fails. A SQL
    /// syntax error is reported through [`Outcome::Diagnostic`].
    pub fn run<R: Read, W: Write>(&self, mut input: R, mut output: W) -> Result<Outcome> {
        if self.json {
            let request: Request = serde_json::from_reader(input)?;
            debug!(len = request.sql.len(), "json request");
            let response = Response {
                result: translate(&request.sql),
            };
            serde_json::to_writer(&mut output, &response)?;
            writeln!(output)?;
            return Ok(Outcome::Success);
        }

        let sql = match &self.sql {
            Some(sql) => sql.clone(),
            None => {
                let mut buf = String::new();
                input.read_to_string(&mut buf)?;
                buf
            }
        };

        let (text, outcome) = match Parser::new(&sql).parse() {
            Ok(list) if self.normalize => (format!("{list};"), Outcome::Success),
            Ok(list) => (render(&list), Outcome::Success),
            Err(err) => {
                debug!(span = ?err.span(), "statement rejected");
                (err.to_string(), Outcome::Diagnostic)
            }
        };

        writeln!(output, "{text}")?;
        Ok(outcome)
    }
}
