//! Client-side query execution layer for the Quill distributed column store.
//!
//! This crate sits between a data-access layer and a clustered database
//! driver. It owns the execution *policy* — per-call consistency overrides,
//! retry behavior for conditional (compare-and-swap) writes, and atomic
//! batch submission with fail-fast validation — while the driver behind the
//! [`ClusterDriver`] trait owns transport, node discovery, pooling, and the
//! wire protocol.
//!
//! The public surface is the [`QueryExecutor`] trait with one production
//! implementation, [`ClusterExecutor`], generic over the driver session.
//!
//! # Example
//!
//! ```rust,ignore
//! use quill_link::{ClusterConfig, ClusterExecutor, Consistency, Options, QueryExecutor};
//!
//! let config = ClusterConfig::new(vec!["10.0.0.1:9042".into(), "10.0.0.2:9042".into()])
//!     .with_credentials(quill_link::Credentials::new("alice", "secret"));
//! let executor = ClusterExecutor::<MyDriver>::connect(config)?;
//!
//! let rows = executor.query_with_options(
//!     &Options::default().with_consistency(Consistency::Quorum),
//!     "SELECT id, name FROM users WHERE org = ?",
//!     &[serde_json::json!("acme")],
//! )?;
//!
//! executor.close();
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod executor;
pub mod models;
pub mod retry;

pub use config::{ClusterConfig, Credentials};
pub use driver::{ClusterConnect, ClusterDriver, ExecutionProfile, RowCursor};
pub use error::{QuillLinkError, Result};
pub use executor::{ClusterExecutor, QueryExecutor};
pub use models::{BatchRequest, Consistency, Options, ResultRow, Statement};
pub use retry::{RetryDecision, RetryPolicy, SimpleRetryPolicy};
