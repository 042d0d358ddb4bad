//! driverup - keep a local ChromeDriver current

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use driverup_core::{Config, Reporter};
use driverup_schema::Platform;
use tracing_subscriber::EnvFilter;

use driverup_cli::ops::Context;
use driverup_cli::ui::TerminalReporter;
use driverup_cli::{Cli, ExitStatus, cmd};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here and are not failures.
            let _ = e.print();
            return if e.use_stderr() {
                ExitStatus::Failure.into()
            } else {
                ExitStatus::Success.into()
            };
        }
    };

    run(cli).await.into()
}

async fn run(cli: Cli) -> ExitStatus {
    let reporter = Arc::new(TerminalReporter::new());

    let config = match Config::from_home() {
        Ok(config) => config,
        Err(e) => {
            reporter.error(&e.to_string());
            return ExitStatus::Failure;
        }
    };
    let ctx = Context::new(config, reqwest::Client::new(), reporter.clone());

    if let Some(limit) = cli.list {
        let mut stdout = std::io::stdout().lock();
        return match cmd::list::list(&ctx, limit.unwrap_or(0), &mut stdout).await {
            Ok(()) => ExitStatus::Success,
            Err(e) => {
                reporter.error(&format!("{e:#}"));
                ExitStatus::Failure
            }
        };
    }

    match cmd::install::install(&ctx, cli.prefix.as_deref(), Platform::detect).await {
        Ok(_) => ExitStatus::Success,
        Err(e) => {
            reporter.error(&e.to_string());
            e.exit_status()
        }
    }
}
