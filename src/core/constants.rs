//! Constants used throughout stagekey.
//!
//! Centralizes environment variable names and default values.

use std::time::Duration;

/// Environment indicator; `development` selects the local connection string.
pub const MODE_ENV: &str = "NODE_ENV";

/// Locally supplied connection string used in development.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Identifier (ARN or name) of the database secret in the secret store.
pub const SECRET_ID_ENV: &str = "DB_SECRET_ARN";

/// Region of the secret store.
pub const REGION_ENV: &str = "AWS_REGION";

/// Fetch timeout override, in seconds.
pub const TIMEOUT_ENV: &str = "STAGEKEY_FETCH_TIMEOUT";

/// Log filter for the binary (same syntax as `RUST_LOG`).
pub const LOG_ENV: &str = "STAGEKEY_LOG";

/// Log output format for the binary; `json` switches to JSON lines.
pub const LOG_FORMAT_ENV: &str = "STAGEKEY_LOG_FORMAT";

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "eu-central-1";

/// Upper bound on a single secret store round trip.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Database name every connection string points at.
pub const DATABASE_NAME: &str = "main";

/// Deployment context file read when none is given.
pub const CONTEXT_FILE: &str = "cdk.json";

/// Top-level context key naming the active stage.
pub const STAGE_KEY: &str = "stage";

/// Stage name treated as production.
pub const PRODUCTION_STAGE: &str = "prod";
