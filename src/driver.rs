//! The seam between the execution layer and the clustered database driver.
//!
//! Everything network-facing lives behind [`ClusterDriver`]: transport,
//! node discovery, connection pooling, the authentication handshake, and
//! row codec internals. The execution layer resolves per-call options into
//! an [`ExecutionProfile`] and hands it across this seam untouched.

use std::sync::Arc;

use crate::config::ClusterConfig;
use crate::error::Result;
use crate::models::{BatchRequest, Consistency, ResultRow, Statement};
use crate::retry::RetryPolicy;

/// The resolved per-call execution policy handed to the driver.
#[derive(Debug, Clone, Default)]
pub struct ExecutionProfile {
    /// Consistency override; `None` keeps the session default
    pub consistency: Option<Consistency>,

    /// Retry policy for conditional writes. The driver owns the retry
    /// loop and must consult this policy between failed attempts.
    pub retry_policy: Option<Arc<dyn RetryPolicy>>,
}

/// A driver row cursor.
///
/// Cursor close is the point at which drivers surface deferred and
/// connection-level errors, so [`RowCursor::close`] must always be invoked
/// and its error checked, even after a clean iteration.
pub trait RowCursor {
    /// Produce the next row, or `None` once the cursor is exhausted.
    ///
    /// Each returned row must be a fresh map: the caller owns it outright
    /// and may mutate it without affecting any other row.
    fn next_row(&mut self) -> Option<ResultRow>;

    /// Release the cursor, reporting any deferred error.
    fn close(self: Box<Self>) -> Result<()>;
}

/// Session abstraction over the clustered database driver.
///
/// Implementations own the shared connection state and its thread-safety
/// contract; the execution layer is stateless per call and adds no locking
/// of its own.
pub trait ClusterDriver: Send + Sync {
    /// Execute a read and return a cursor over its rows.
    fn query(&self, statement: &Statement, profile: &ExecutionProfile)
        -> Result<Box<dyn RowCursor>>;

    /// Execute a single-statement write.
    ///
    /// When `profile.retry_policy` is present the driver re-attempts
    /// transient failures while the policy allows it, returning the error
    /// of the final attempt once the budget is exhausted. Logical CAS
    /// rejection (precondition not met) is reported as a normal outcome
    /// without consulting the policy.
    fn execute(&self, statement: &Statement, profile: &ExecutionProfile) -> Result<()>;

    /// Submit a batch with all-or-nothing (logged) semantics.
    fn execute_batch(&self, batch: &BatchRequest) -> Result<()>;

    /// Release the session. Behavior on repeated calls is driver-defined.
    fn close(&self);
}

/// Drivers that can establish their own session from a [`ClusterConfig`].
///
/// Kept separate from [`ClusterDriver`] so that pre-configured sessions
/// (built with custom driver-level options) can be wrapped directly via
/// [`ClusterExecutor::from_session`](crate::ClusterExecutor::from_session).
pub trait ClusterConnect: ClusterDriver + Sized {
    /// Connect to the cluster described by `config`.
    fn connect(config: &ClusterConfig) -> Result<Self>;
}
