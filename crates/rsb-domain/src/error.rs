//! Error handling types

use crate::value_objects::UserSet;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by error variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the Roster Sync Bridge
///
/// Every variant is fatal for the job that produced it. Avatar failures are
/// not errors; they are reported as [`crate::AvatarWarning`] values.
#[derive(Error, Debug)]
pub enum Error {
    /// The messaging service answered with an unexpected status, a malformed
    /// body, or an explicit error status, or could not be reached at all
    #[error("Remote error: {message}")]
    Remote {
        /// Description of the remote failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Remote membership did not converge after a reconciliation run
    #[error("Reconciliation error: {message}")]
    Reconciliation {
        /// Description of the mismatch
        message: String,
        /// Desired users absent from the remote group
        missing: UserSet,
        /// Remote users that are not desired
        unexpected: UserSet,
    },

    /// A required setting is missing or the host group does not exist
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// The host platform could not be queried
    #[error("Host platform error: {message}")]
    Host {
        /// Description of the host failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Job could not be handed to the work queue
    #[error("Queue error: {message}")]
    Queue {
        /// Description of the queue failure
        message: String,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Remote error creation methods
impl Error {
    /// Create a remote error
    pub fn remote<S: Into<String>>(message: S) -> Self {
        Self::Remote {
            message: message.into(),
            source: None,
        }
    }

    /// Create a remote error with source
    pub fn remote_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Remote {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Reconciliation error creation methods
impl Error {
    /// Create a reconciliation error from the desired and observed sets
    pub fn reconciliation(desired: &UserSet, actual: &UserSet) -> Self {
        let missing = desired.difference(actual);
        let unexpected = actual.difference(desired);
        Self::Reconciliation {
            message: format!(
                "remote membership did not converge (missing: [{missing}], unexpected: [{unexpected}])"
            ),
            missing,
            unexpected,
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error naming every missing setting
    pub fn missing_settings(fields: &[&str]) -> Self {
        Self::configuration(format!("missing setting(s): {}", fields.join(", ")))
    }

    /// Create a configuration error for an unknown host group
    pub fn group_not_found<S: AsRef<str>>(name: S) -> Self {
        Self::configuration(format!("host group not found: {}", name.as_ref()))
    }
}

// Host, queue and internal error creation methods
impl Error {
    /// Create a host platform error
    pub fn host<S: Into<String>>(message: S) -> Self {
        Self::Host {
            message: message.into(),
            source: None,
        }
    }

    /// Create a host platform error with source
    pub fn host_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Host {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a queue error
    pub fn queue<S: Into<String>>(message: S) -> Self {
        Self::Queue {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// Short category label, used as a structured logging field
    pub fn category(&self) -> &'static str {
        match self {
            Self::Remote { .. } => "remote",
            Self::Reconciliation { .. } => "reconciliation",
            Self::Configuration { .. } => "configuration",
            Self::Host { .. } => "host",
            Self::Queue { .. } => "queue",
            Self::Json { .. } => "json",
            Self::Internal { .. } => "internal",
        }
    }

    /// Whether this is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
