//! Command-line interface.

pub mod completions;
pub mod context;
pub mod output;
pub mod url;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// stagekey - database URL and deploy context bootstrap.
#[derive(Parser)]
#[command(
    name = "stagekey",
    about = "Resolve database connection strings and stage-scoped deploy context",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the database connection string
    Url(UrlArgs),

    /// Read values from the deployment-stage context
    Context {
        #[command(flatten)]
        source: ContextSource,

        #[command(subcommand)]
        action: ContextAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Inputs for `stagekey url`.
///
/// Flags override the environment variables named in their help; anything
/// not passed is read from the environment with the library's rules.
#[derive(Args, Debug, Clone, Default)]
pub struct UrlArgs {
    /// Execution mode; "development" uses the local connection string [env: NODE_ENV]
    #[arg(long)]
    pub mode: Option<String>,

    /// Connection string used in development mode [env: DATABASE_URL]
    #[arg(long)]
    pub local_url: Option<String>,

    /// Secret store identifier used in deployed mode [env: DB_SECRET_ARN]
    #[arg(long)]
    pub secret_id: Option<String>,

    /// Secret store region [env: AWS_REGION]
    #[arg(long)]
    pub region: Option<String>,

    /// Fetch timeout in seconds [env: STAGEKEY_FETCH_TIMEOUT]
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Mask the password in the printed connection string
    #[arg(long)]
    pub redact: bool,
}

/// Where the deployment context comes from.
#[derive(Args, Debug, Clone)]
pub struct ContextSource {
    /// Context file (JSON or TOML); defaults to ./cdk.json when present
    #[arg(long, global = true, value_name = "PATH")]
    pub context_file: Option<PathBuf>,

    /// Override a context value (repeatable)
    #[arg(short = 'c', long = "context", global = true, value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

/// Context subcommands.
#[derive(Subcommand)]
pub enum ContextAction {
    /// Print a value for the active stage
    Get {
        /// Context key
        key: String,
        /// Read a top-level key instead of a stage-scoped one
        #[arg(long)]
        global: bool,
    },

    /// Print the active stage
    Stage,

    /// Print the deploy target for the active stage
    Target {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Url(args) => url::execute(args),
        Context { source, action } => match action {
            ContextAction::Get { key, global } => context::get(&source, &key, global),
            ContextAction::Stage => context::stage(&source),
            ContextAction::Target { json } => context::target(&source, json),
        },
        Completions { shell } => completions::execute(shell),
    }
}
