mod cmd;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cmd::check::{self, CheckCommandArgs};
use crate::domain::diff_size::Severity;
use crate::error::AppResult;
use crate::infra::git::GitCli;

const TRIPPED_EXIT_CODE: i32 = 2;

#[derive(Parser)]
#[command(
    name = "diffsize",
    author,
    version,
    about = "Warns when the uncommitted diff grows too large"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Measure the working-tree diff and classify its size.
    Check(CheckArgs),
}

#[derive(Args)]
struct CheckArgs {
    /// Repository directory to inspect (defaults to the current directory).
    #[arg(short, long)]
    workspace: Option<PathBuf>,
    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
    /// Exit with status 2 when the severity reaches this tier.
    #[arg(long, value_enum)]
    fail_on: Option<FailOn>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FailOn {
    Warn,
    Critical,
}

impl From<FailOn> for Severity {
    fn from(value: FailOn) -> Self {
        match value {
            FailOn::Warn => Severity::Warn,
            FailOn::Critical => Severity::Critical,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(true) => std::process::exit(TRIPPED_EXIT_CODE),
        Ok(false) => {}
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    }
}

async fn run() -> AppResult<bool> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => run_check(args).await,
    }
}

async fn run_check(args: CheckArgs) -> AppResult<bool> {
    let workspace = match args.workspace {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    debug!(workspace = %workspace.display(), "checking diff size");

    let git = GitCli::new(workspace);
    let outcome = check::run(
        &git,
        CheckCommandArgs {
            json: args.json,
            fail_on: args.fail_on.map(Severity::from),
        },
    )
    .await?;

    if outcome.tripped {
        debug!(
            severity = outcome.result.severity.as_str(),
            "diff size reached the --fail-on tier"
        );
    }
    println!("{}", outcome.report);
    Ok(outcome.tripped)
}
