use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::consistency::Consistency;
use crate::driver::ExecutionProfile;
use crate::retry::SimpleRetryPolicy;

/// Per-call execution options.
///
/// Immutable for the duration of a call. The default value applies the
/// driver's session defaults: no consistency override and a plain
/// (non-conditional) statement.
///
/// # Examples
///
/// ```rust
/// use quill_link::{Consistency, Options};
///
/// let opts = Options::default()
///     .with_consistency(Consistency::Quorum)
///     .with_cas(true);
///
/// assert_eq!(opts.consistency, Some(Consistency::Quorum));
/// assert!(opts.cas);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Consistency level override for this call.
    /// `None` leaves the driver's session default in effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistency: Option<Consistency>,

    /// Marks the write as conditional (compare-and-swap). Conditional
    /// writes get a bounded retry policy attached; the flag has no effect
    /// on reads.
    #[serde(default)]
    pub cas: bool,
}

impl Options {
    /// Override the consistency level for this call.
    pub fn with_consistency(mut self, consistency: Consistency) -> Self {
        self.consistency = Some(consistency);
        self
    }

    /// Mark the write as conditional (compare-and-swap).
    pub fn with_cas(mut self, cas: bool) -> Self {
        self.cas = cas;
        self
    }

    /// Resolve these options into the profile for a read.
    ///
    /// Reads never carry a retry policy; only the consistency override is
    /// merged onto the base profile.
    pub fn read_profile(&self) -> ExecutionProfile {
        ExecutionProfile {
            consistency: self.consistency,
            retry_policy: None,
        }
    }

    /// Resolve these options into the profile for a single-statement write.
    ///
    /// When the `cas` flag is set, a [`SimpleRetryPolicy`] with the default
    /// retry budget is attached so the driver can re-attempt transient
    /// failures. Logical CAS rejection (precondition not met) is a valid
    /// outcome the driver reports without consulting the policy.
    pub fn write_profile(&self) -> ExecutionProfile {
        ExecutionProfile {
            consistency: self.consistency,
            retry_policy: if self.cas {
                Some(Arc::new(SimpleRetryPolicy::default()))
            } else {
                None
            },
        }
    }
}
