//! Data models for the quill-link client library.
//!
//! Defines the per-call option, statement, and batch structures consumed by
//! the executor and the driver seam.

pub mod batch_request;
pub mod consistency;
pub mod options;
pub mod result_row;
pub mod statement;


pub use batch_request::BatchRequest;
pub use consistency::Consistency;
pub use options::Options;
pub use result_row::ResultRow;
pub use statement::Statement;
