//! The query executor contract and its driver-backed implementation.

use log::{debug, warn};
use serde_json::Value as JsonValue;

use crate::config::{ClusterConfig, Credentials};
use crate::driver::{ClusterConnect, ClusterDriver, RowCursor};
use crate::error::{QuillLinkError, Result};
use crate::models::{BatchRequest, Options, ResultRow, Statement};

/// The execution contract offered to the data-access layer.
///
/// Three operation families — read, single-statement write, and
/// multi-statement atomic write — each with a plain variant that applies
/// default [`Options`] and an options-aware variant. The executor is
/// synchronous and stateless per call: concurrency, deadlines, and
/// cancellation belong to the caller or the driver.
///
/// Exactly one production implementation exists ([`ClusterExecutor`]);
/// in-memory fakes can implement the same contract for tests.
pub trait QueryExecutor: Send + Sync {
    /// Execute a read with default options.
    fn query(&self, stmt: &str, params: &[JsonValue]) -> Result<Vec<ResultRow>> {
        self.query_with_options(&Options::default(), stmt, params)
    }

    /// Execute a read, applying any consistency override in `options`, and
    /// eagerly materialize the full result set.
    ///
    /// This is not a lazy cursor: every row is realized in memory before
    /// the call returns. If closing the cursor fails after rows were read,
    /// the error is [`QuillLinkError::CursorClose`] carrying both the
    /// partial rows and the driver's unmodified close error.
    fn query_with_options(
        &self,
        options: &Options,
        stmt: &str,
        params: &[JsonValue],
    ) -> Result<Vec<ResultRow>>;

    /// Execute a single-statement write with default options.
    fn execute(&self, stmt: &str, params: &[JsonValue]) -> Result<()> {
        self.execute_with_options(&Options::default(), stmt, params)
    }

    /// Execute a single-statement write, applying any consistency override
    /// in `options`. When `options.cas` is set, a bounded retry policy is
    /// attached before execution so the driver re-attempts transient
    /// failures; a CAS precondition mismatch is a valid, non-retried
    /// outcome.
    fn execute_with_options(
        &self,
        options: &Options,
        stmt: &str,
        params: &[JsonValue],
    ) -> Result<()>;

    /// Submit `statements`, each paired with the parameter set at the same
    /// index, as one atomically-logged batch.
    ///
    /// Mismatched lengths fail with [`QuillLinkError::BatchMismatch`]
    /// before any network call; an empty pairing succeeds trivially
    /// without one.
    fn execute_atomically(
        &self,
        statements: &[String],
        param_sets: &[Vec<JsonValue>],
    ) -> Result<()>;

    /// Release the underlying session. Double-close behavior is
    /// driver-defined; this layer does not guard against it.
    fn close(&self);
}

/// Driver-backed [`QueryExecutor`].
///
/// Owns the long-lived driver session; everything else is request-scoped.
#[derive(Debug)]
pub struct ClusterExecutor<D: ClusterDriver> {
    driver: D,
}

impl<D: ClusterDriver> ClusterExecutor<D> {
    /// Wrap a pre-configured driver session.
    ///
    /// Use this when the session needs custom driver-level options the
    /// [`ClusterConfig`] surface does not expose.
    pub fn from_session(driver: D) -> Self {
        Self { driver }
    }
}

impl<D: ClusterConnect> ClusterExecutor<D> {
    /// Connect to the cluster described by `config` and wrap the session.
    pub fn connect(config: ClusterConfig) -> Result<Self> {
        if config.nodes.is_empty() {
            return Err(QuillLinkError::ConfigurationError(
                "at least one node address is required".into(),
            ));
        }
        debug!(
            "[QUILL_SESSION] Connecting: nodes={} consistency={}",
            config.nodes.len(),
            config.consistency
        );
        let driver = D::connect(&config)?;
        Ok(Self::from_session(driver))
    }

    /// Connect with node addresses and a username/password pair, keeping
    /// every other setting at its default.
    pub fn connect_nodes(
        nodes: Vec<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::connect(
            ClusterConfig::new(nodes).with_credentials(Credentials::new(username, password)),
        )
    }
}

impl<D: ClusterDriver> QueryExecutor for ClusterExecutor<D> {
    fn query_with_options(
        &self,
        options: &Options,
        stmt: &str,
        params: &[JsonValue],
    ) -> Result<Vec<ResultRow>> {
        let profile = options.read_profile();
        debug!(
            "[QUILL_QUERY] Executing read: \"{}\" (params={}, consistency={:?})",
            statement_preview(stmt),
            params.len(),
            profile.consistency
        );

        let statement = Statement::new(stmt, params.to_vec());
        let cursor = match self.driver.query(&statement, &profile) {
            Ok(cursor) => cursor,
            Err(err) => {
                warn!("[QUILL_QUERY] Read failed: {err}");
                return Err(err);
            }
        };

        let rows = drain_cursor(cursor)?;
        debug!("[QUILL_QUERY] Read complete: rows={}", rows.len());
        Ok(rows)
    }

    fn execute_with_options(
        &self,
        options: &Options,
        stmt: &str,
        params: &[JsonValue],
    ) -> Result<()> {
        let profile = options.write_profile();
        debug!(
            "[QUILL_EXEC] Executing write: \"{}\" (params={}, cas={}, consistency={:?})",
            statement_preview(stmt),
            params.len(),
            options.cas,
            profile.consistency
        );

        let statement = Statement::new(stmt, params.to_vec());
        match self.driver.execute(&statement, &profile) {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!("[QUILL_EXEC] Write failed: {err}");
                Err(err)
            }
        }
    }

    fn execute_atomically(
        &self,
        statements: &[String],
        param_sets: &[Vec<JsonValue>],
    ) -> Result<()> {
        let batch = BatchRequest::pair(statements, param_sets)?;
        if batch.is_empty() {
            debug!("[QUILL_BATCH] Empty batch, nothing to submit");
            return Ok(());
        }

        debug!("[QUILL_BATCH] Submitting logged batch: statements={}", batch.len());
        match self.driver.execute_batch(&batch) {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!("[QUILL_BATCH] Batch failed: {err}");
                Err(err)
            }
        }
    }

    fn close(&self) {
        debug!("[QUILL_SESSION] Closing cluster session");
        self.driver.close();
    }
}

/// Materialize every row the cursor yields, then close it.
///
/// The cursor is always closed, even after a clean iteration; a close
/// error is returned together with the rows read so far.
fn drain_cursor(mut cursor: Box<dyn RowCursor>) -> Result<Vec<ResultRow>> {
    let mut rows = Vec::new();
    while let Some(row) = cursor.next_row() {
        rows.push(row);
    }

    match cursor.close() {
        Ok(()) => Ok(rows),
        Err(source) => {
            warn!(
                "[QUILL_QUERY] Cursor close failed after {} rows: {source}",
                rows.len()
            );
            Err(QuillLinkError::CursorClose {
                partial: rows,
                source: Box::new(source),
            })
        }
    }
}

/// Truncate a statement for log output. Parameters are never logged.
fn statement_preview(stmt: &str) -> String {
    const MAX: usize = 80;
    let flat = stmt.replace('\n', " ");
    if flat.chars().count() > MAX {
        let truncated: String = flat.chars().take(MAX).collect();
        format!("{truncated}...")
    } else {
        flat
    }
}
