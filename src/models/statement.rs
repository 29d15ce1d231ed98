use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// An opaque query string paired with its ordered bound parameters.
///
/// Statements are request-scoped: one is built at call entry, handed to the
/// driver, and discarded when the call returns. Nothing in this layer
/// inspects or rewrites the query text.
///
/// # Examples
///
/// ```rust
/// use quill_link::Statement;
/// use serde_json::json;
///
/// let stmt = Statement::new("UPDATE users SET name = ? WHERE id = ?", vec![json!("x"), json!(42)]);
/// assert_eq!(stmt.params.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Query text, with driver-native placeholders
    pub query: String,

    /// Bound parameter values, in placeholder order
    pub params: Vec<JsonValue>,
}

impl Statement {
    /// Create a statement from a query string and its bound parameters.
    pub fn new(query: impl Into<String>, params: Vec<JsonValue>) -> Self {
        Self {
            query: query.into(),
            params,
        }
    }
}
