//! JSON request and response bodies.

use serde::{Deserialize, Serialize};

/// A translation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// The SQL statement.
    pub sql: String,
}

/// A translation response: the sentence or the diagnostic, unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// The translation result.
    pub result: String,
}
