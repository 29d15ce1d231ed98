use serde::{Deserialize, Serialize};
use std::fmt;

/// Replica-acknowledgment level for a read or write.
///
/// The execution layer treats this as an opaque passthrough value: it is
/// attached to the per-call [`ExecutionProfile`](crate::ExecutionProfile)
/// when an override is requested and otherwise left to the driver's
/// session default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Consistency {
    /// Closest replica, acknowledged asynchronously (writes only)
    Any,
    /// One replica must acknowledge
    #[default]
    One,
    /// Two replicas must acknowledge
    Two,
    /// Three replicas must acknowledge
    Three,
    /// A majority of replicas across the cluster
    Quorum,
    /// Every replica
    All,
    /// A majority of replicas within the local datacenter
    LocalQuorum,
    /// A majority of replicas within each datacenter
    EachQuorum,
    /// One replica within the local datacenter
    LocalOne,
}

impl fmt::Display for Consistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Any => "ANY",
            Self::One => "ONE",
            Self::Two => "TWO",
            Self::Three => "THREE",
            Self::Quorum => "QUORUM",
            Self::All => "ALL",
            Self::LocalQuorum => "LOCAL_QUORUM",
            Self::EachQuorum => "EACH_QUORUM",
            Self::LocalOne => "LOCAL_ONE",
        };
        f.write_str(name)
    }
}
