//! stagekey - database URL and deploy context bootstrap.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stagekey::cli::output;
use stagekey::cli::{execute, Cli};
use stagekey::core::constants;
use stagekey::error::{Error, SecretError, StageError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("stagekey=debug")
        } else {
            EnvFilter::new("stagekey=warn")
        }
    });

    // STAGEKEY_LOG_FORMAT=json emits JSON lines instead of plain text
    let json = std::env::var(constants::LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| {
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr)
        }))
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Secret(SecretError::ConfigurationMissing { what }) => {
                Some(format!("set {} or pass it as a flag", what))
            }
            Error::Secret(SecretError::Unsupported(_)) => {
                Some("rebuild with: cargo install stagekey --features aws".to_string())
            }
            Error::Stage(StageError::StageNotSpecified) => {
                Some("pass the stage: -c stage=<stage>".to_string())
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
