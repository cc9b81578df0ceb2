//! Error types.
//!
//! Each concern gets its own enum; [`Error`] wraps them so callers can
//! match on the kind of failure instead of its message.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Stage(#[from] StageError),

    #[error(transparent)]
    Context(#[from] ContextError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while resolving the database connection string.
#[derive(Error, Debug)]
pub enum SecretError {
    /// A required input for the active execution mode is not configured.
    #[error("configuration missing: {what}")]
    ConfigurationMissing { what: &'static str },

    /// The secret store answered without a payload.
    #[error("secret store returned an empty payload for {secret_id}")]
    SecretFetchEmpty { secret_id: String },

    /// The secret store did not answer in time.
    #[error("timed out after {timeout:?} fetching secret {secret_id}")]
    SecretFetchTimeout {
        secret_id: String,
        timeout: Duration,
    },

    /// The payload is not a JSON object with host, username and password.
    #[error("malformed secret payload: {0}")]
    SecretMalformed(String),

    /// Transport or service failure reported by the store backend.
    #[error("secret store error: {0}")]
    Store(String),

    /// Deployed mode was requested but no store backend is compiled in.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

/// Failures while reading stage-scoped context values.
#[derive(Error, Debug)]
pub enum StageError {
    #[error("could not find stage in context")]
    StageNotSpecified,

    #[error("stage '{stage}' is not present in the deployment context")]
    StageConfigMissing { stage: String },

    #[error("{}", missing_key_message(.key, .stage.as_deref()))]
    ConfigKeyMissing { key: String, stage: Option<String> },

    #[error("context value '{key}' is not a string")]
    NotAString { key: String },
}

fn missing_key_message(key: &str, stage: Option<&str>) -> String {
    match stage {
        Some(stage) => format!("{} not provided in context for stage {}", key, stage),
        None => format!("{} not provided in context", key),
    }
}

/// Failures while loading the deployment context itself.
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("failed to read context file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse context file {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("invalid context override '{0}': expected key=value")]
    InvalidOverride(String),
}

pub type Result<T> = std::result::Result<T, Error>;
