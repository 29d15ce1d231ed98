use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::statement::Statement;
use crate::error::{QuillLinkError, Result};

/// An ordered set of statements submitted to the cluster as one
/// atomically-logged unit: either every statement applies or none do.
///
/// A `BatchRequest` can only be built through [`BatchRequest::pair`], which
/// enforces the one-to-one pairing of statements and parameter sets before
/// any network interaction takes place. The atomicity guarantee itself
/// comes from the driver's logged-batch primitive; this layer adds no
/// compensation logic on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRequest {
    statements: Vec<Statement>,
}

impl BatchRequest {
    /// Pair each statement with its parameter set, preserving input order.
    ///
    /// Fails with [`QuillLinkError::BatchMismatch`] when the two sequences
    /// have different lengths. An empty pairing is valid and produces an
    /// empty batch.
    pub fn pair(statements: &[String], param_sets: &[Vec<JsonValue>]) -> Result<Self> {
        if statements.len() != param_sets.len() {
            return Err(QuillLinkError::BatchMismatch {
                statements: statements.len(),
                param_sets: param_sets.len(),
            });
        }

        let statements = statements
            .iter()
            .zip(param_sets)
            .map(|(query, params)| Statement::new(query.clone(), params.clone()))
            .collect();

        Ok(Self { statements })
    }

    /// Statements in submission order.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Number of statements in the batch.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// True when the batch contains no statements.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
