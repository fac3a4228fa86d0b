//! CLI for repo-sweeper.
//!
//! Enumerates every repository owned by a GitHub account and applies bulk
//! visibility, clone and delete actions to each one.

use clap::Parser;
use repo_sweeper::{resolve_run_config, FileConfig, RunConfig, RunSummary, Runner, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Repo Sweeper - Apply bulk actions to every repository of a GitHub account.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// User or organization login to sweep.
    #[arg(long, env = "SWEEP_ACCOUNT")]
    account: Option<String>,

    /// Treat the account as an organization.
    #[arg(long)]
    organization: bool,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// Make every repository public.
    #[arg(long)]
    make_public: bool,

    /// Make every repository private. Wins over --make-public.
    #[arg(long)]
    make_private: bool,

    /// Clone every repository into <output-dir>/<account>/.
    #[arg(long = "clone")]
    clone_all: bool,

    /// Delete every repository from GitHub.
    #[arg(long = "delete")]
    delete_all: bool,

    /// Preview actions without changing anything.
    #[arg(long)]
    dry_run: bool,

    /// Directory under which the account folder is created.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Per-request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    /// Values given on the command line, in config file shape.
    ///
    /// Unset flags are `None` so they never override the file.
    fn overrides(&self) -> FileConfig {
        FileConfig {
            account: self.account.clone(),
            organization: self.organization.then_some(true),
            make_all_public: self.make_public.then_some(true),
            make_all_private: self.make_private.then_some(true),
            clone_all: self.clone_all.then_some(true),
            delete_all: self.delete_all.then_some(true),
            output_dir: self.output_dir.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Both ring and aws-lc-rs are linked; pick one explicitly
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
///
/// Stdout is left to the summary and the dry-run preview.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Builds the run configuration from arguments and the optional config file.
fn build_config(args: Args) -> Result<RunConfig, RunnerError> {
    let file = args.config.as_deref().map(FileConfig::load).transpose()?;
    let config = resolve_run_config(args.overrides(), file, args.token, args.dry_run)?;
    Ok(config)
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = build_config(args)?;
    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!(
        "  Repositories discovered: {}",
        summary.repositories_discovered
    );

    if !summary.dry_run {
        println!("  Repositories succeeded: {}", summary.repositories_succeeded);
        println!("  Repositories failed: {}", summary.repositories_failed);
        println!("  Visibility updated: {}", summary.visibility_updated);
        println!("  Cloned: {}", summary.cloned);
        println!("  Deleted: {}", summary.deleted);
    }
}
