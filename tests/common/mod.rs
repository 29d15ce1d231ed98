//! Shared test doubles for executor integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use quill_link::{
    BatchRequest, ClusterConfig, ClusterConnect, ClusterDriver, Consistency, ExecutionProfile,
    QueryExecutor, QuillLinkError, Result, ResultRow, RetryDecision, RowCursor, Statement,
};
use serde_json::Value as JsonValue;

/// Initialize test logging once per process.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a result row from column/value pairs.
pub fn row(pairs: &[(&str, JsonValue)]) -> ResultRow {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

/// One recorded driver call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub statement: Statement,
    pub consistency: Option<Consistency>,
    pub had_retry_policy: bool,
    pub attempts: u32,
}

#[derive(Debug, Default)]
struct DriverState {
    canned_rows: Mutex<Vec<ResultRow>>,
    cursor_close_error: Mutex<Option<String>>,
    failures_remaining: Mutex<u32>,
    queries: Mutex<Vec<RecordedCall>>,
    executions: Mutex<Vec<RecordedCall>>,
    batches: Mutex<Vec<BatchRequest>>,
    close_calls: Mutex<u32>,
}

/// Scriptable fake [`ClusterDriver`] that records every call it receives.
///
/// Handles are cheap clones over shared state, so a test can keep one
/// handle for assertions after moving another into the executor.
#[derive(Debug, Clone, Default)]
pub struct RecordingDriver {
    state: Arc<DriverState>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve these rows for every query.
    pub fn with_rows(self, rows: Vec<ResultRow>) -> Self {
        *self.state.canned_rows.lock().unwrap() = rows;
        self
    }

    /// Fail cursor close with a connection error after the rows are served.
    pub fn with_cursor_close_error(self, message: &str) -> Self {
        *self.state.cursor_close_error.lock().unwrap() = Some(message.to_string());
        self
    }

    /// Fail the next `count` write attempts with a timeout before
    /// succeeding.
    pub fn with_failing_attempts(self, count: u32) -> Self {
        *self.state.failures_remaining.lock().unwrap() = count;
        self
    }

    pub fn queries(&self) -> Vec<RecordedCall> {
        self.state.queries.lock().unwrap().clone()
    }

    pub fn executions(&self) -> Vec<RecordedCall> {
        self.state.executions.lock().unwrap().clone()
    }

    pub fn batches(&self) -> Vec<BatchRequest> {
        self.state.batches.lock().unwrap().clone()
    }

    pub fn close_calls(&self) -> u32 {
        *self.state.close_calls.lock().unwrap()
    }

    /// Total network-facing calls (queries + writes + batches).
    pub fn total_calls(&self) -> usize {
        self.queries().len() + self.executions().len() + self.batches().len()
    }
}

struct CannedCursor {
    rows: std::vec::IntoIter<ResultRow>,
    close_error: Option<String>,
}

impl RowCursor for CannedCursor {
    fn next_row(&mut self) -> Option<ResultRow> {
        self.rows.next()
    }

    fn close(self: Box<Self>) -> Result<()> {
        match self.close_error {
            Some(message) => Err(QuillLinkError::ConnectionError(message)),
            None => Ok(()),
        }
    }
}

impl ClusterDriver for RecordingDriver {
    fn query(
        &self,
        statement: &Statement,
        profile: &ExecutionProfile,
    ) -> Result<Box<dyn RowCursor>> {
        self.state.queries.lock().unwrap().push(RecordedCall {
            statement: statement.clone(),
            consistency: profile.consistency,
            had_retry_policy: profile.retry_policy.is_some(),
            attempts: 1,
        });

        Ok(Box::new(CannedCursor {
            rows: self.state.canned_rows.lock().unwrap().clone().into_iter(),
            close_error: self.state.cursor_close_error.lock().unwrap().clone(),
        }))
    }

    fn execute(&self, statement: &Statement, profile: &ExecutionProfile) -> Result<()> {
        // The driver owns the retry loop: after a failed attempt it asks
        // the attached policy whether to go again, exactly once per
        // failure, and returns the last error once the budget is spent.
        let mut attempts = 0u32;
        let result = loop {
            attempts += 1;
            let failed = {
                let mut remaining = self.state.failures_remaining.lock().unwrap();
                if *remaining > 0 {
                    *remaining -= 1;
                    true
                } else {
                    false
                }
            };
            if !failed {
                break Ok(());
            }

            let err = QuillLinkError::TimeoutError("scripted write timeout".into());
            let retry = profile.retry_policy.as_ref().is_some_and(|policy| {
                policy.classify(&err) == RetryDecision::Retry && policy.should_attempt(attempts)
            });
            if !retry {
                break Err(err);
            }
        };

        self.state.executions.lock().unwrap().push(RecordedCall {
            statement: statement.clone(),
            consistency: profile.consistency,
            had_retry_policy: profile.retry_policy.is_some(),
            attempts,
        });
        result
    }

    fn execute_batch(&self, batch: &BatchRequest) -> Result<()> {
        self.state.batches.lock().unwrap().push(batch.clone());
        Ok(())
    }

    fn close(&self) {
        *self.state.close_calls.lock().unwrap() += 1;
    }
}

impl ClusterConnect for RecordingDriver {
    fn connect(config: &ClusterConfig) -> Result<Self> {
        if let Some(credentials) = &config.credentials {
            if credentials.password.is_empty() {
                return Err(QuillLinkError::AuthenticationError(format!(
                    "empty password for user '{}'",
                    credentials.username
                )));
            }
        }
        Ok(Self::new())
    }
}

/// In-memory [`QueryExecutor`] serving canned rows — the second
/// implementation of the contract, with no driver behind it.
#[derive(Default)]
pub struct StaticExecutor {
    pub rows: Vec<ResultRow>,
    pub writes: Mutex<Vec<Statement>>,
    pub batches: Mutex<Vec<BatchRequest>>,
    pub closed: Mutex<bool>,
}

impl StaticExecutor {
    pub fn with_rows(rows: Vec<ResultRow>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }
}

impl QueryExecutor for StaticExecutor {
    fn query_with_options(
        &self,
        _options: &quill_link::Options,
        _stmt: &str,
        _params: &[JsonValue],
    ) -> Result<Vec<ResultRow>> {
        Ok(self.rows.clone())
    }

    fn execute_with_options(
        &self,
        _options: &quill_link::Options,
        stmt: &str,
        params: &[JsonValue],
    ) -> Result<()> {
        self.writes
            .lock()
            .unwrap()
            .push(Statement::new(stmt, params.to_vec()));
        Ok(())
    }

    fn execute_atomically(
        &self,
        statements: &[String],
        param_sets: &[Vec<JsonValue>],
    ) -> Result<()> {
        let batch = BatchRequest::pair(statements, param_sets)?;
        if !batch.is_empty() {
            self.batches.lock().unwrap().push(batch);
        }
        Ok(())
    }

    fn close(&self) {
        *self.closed.lock().unwrap() = true;
    }
}
