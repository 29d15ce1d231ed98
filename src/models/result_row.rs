use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// A single materialized result row: column name mapped to a
/// dynamically-typed value.
///
/// Every row returned by the executor is a fresh map owned by the caller.
/// No two rows share backing storage, so mutating one row can never be
/// observed through another.
pub type ResultRow = HashMap<String, JsonValue>;
