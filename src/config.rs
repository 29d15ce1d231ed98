//! Connection configuration for driver-backed executors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::models::Consistency;

/// Username and password presented to the cluster during session setup.
///
/// The password is redacted from `Debug` output; credentials must never
/// reach the log stream.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Username for authentication
    pub username: String,

    /// Password for authentication
    pub password: String,
}

impl Credentials {
    /// Create credentials from a username/password pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Connection settings handed to the driver when it establishes a session.
///
/// # Examples
///
/// ```rust
/// use quill_link::{ClusterConfig, Consistency, Credentials};
/// use std::time::Duration;
///
/// let config = ClusterConfig::new(vec!["10.0.0.1:9042".into()])
///     .with_credentials(Credentials::new("alice", "secret"))
///     .with_consistency(Consistency::Quorum)
///     .with_connect_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Contact-point node addresses; the driver discovers the rest of the
    /// cluster from these
    pub nodes: Vec<String>,

    /// Optional authentication credentials
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,

    /// Session-default consistency level.
    /// Default: `One`
    #[serde(default)]
    pub consistency: Consistency,

    /// Timeout for establishing the session.
    /// Default: 10 seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: Duration,
}

impl ClusterConfig {
    /// Create a config for the given contact points with default settings.
    pub fn new(nodes: Vec<String>) -> Self {
        Self {
            nodes,
            credentials: None,
            consistency: Consistency::One,
            connect_timeout: default_connect_timeout(),
        }
    }

    /// Set authentication credentials.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the session-default consistency level.
    pub fn with_consistency(mut self, consistency: Consistency) -> Self {
        self.consistency = consistency;
        self
    }

    /// Set the session establishment timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(10)
}
