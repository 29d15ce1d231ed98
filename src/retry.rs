//! Retry policy for conditional (compare-and-swap) writes.
//!
//! CAS writes against a quorum-based store can fail transiently — for
//! example a timeout before consensus is known — without the write having
//! failed logically. A bounded retry budget trades a small chance of
//! duplicate application for a higher success probability, which is
//! acceptable because CAS statements are idempotent under re-application
//! (they are conditional on prior state).

use log::debug;
use std::fmt;

use crate::error::QuillLinkError;

/// Default number of additional attempts beyond the first for CAS writes.
pub const DEFAULT_CAS_RETRIES: u32 = 3;

/// What to do with a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Re-attempt the same statement
    Retry,
    /// Give up and surface the error
    DontRetry,
}

/// Decides, per failed attempt, whether a conditional write should be
/// re-attempted.
///
/// The policy is attached to the [`ExecutionProfile`](crate::ExecutionProfile)
/// of CAS-flagged writes; the driver consults it between attempts and owns
/// the retry loop itself.
pub trait RetryPolicy: fmt::Debug + Send + Sync {
    /// True while another attempt is allowed after `attempts_so_far`
    /// attempts have already run.
    fn should_attempt(&self, attempts_so_far: u32) -> bool;

    /// Classify a failed attempt.
    fn classify(&self, error: &QuillLinkError) -> RetryDecision;
}

/// A fixed-budget retry policy: allow up to `num_retries` additional
/// attempts beyond the first, and classify every failure as retryable.
///
/// The lenient classification is deliberate and load-bearing: the policy
/// does not distinguish idempotent-safe retries from others, so callers
/// relying on CAS semantics must ensure the statement itself is safe to
/// re-apply. Downstream callers depend on this retry-everything behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleRetryPolicy {
    /// Maximum number of additional attempts beyond the first
    pub num_retries: u32,
}

impl SimpleRetryPolicy {
    /// Create a policy with an explicit retry budget.
    pub fn new(num_retries: u32) -> Self {
        Self { num_retries }
    }
}

impl Default for SimpleRetryPolicy {
    fn default() -> Self {
        Self {
            num_retries: DEFAULT_CAS_RETRIES,
        }
    }
}

impl RetryPolicy for SimpleRetryPolicy {
    fn should_attempt(&self, attempts_so_far: u32) -> bool {
        debug!(
            "[QUILL_RETRY] CAS write attempt check: attempts={} max_retries={}",
            attempts_so_far, self.num_retries
        );
        attempts_so_far <= self.num_retries
    }

    fn classify(&self, _error: &QuillLinkError) -> RetryDecision {
        RetryDecision::Retry
    }
}
