// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use service_create::app::{run, Report};
use service_create::config::{log_directives, Config};
use service_create::error::Result;
use service_create::kubernetes::{connect, CreatedService};

/// Create a Kubernetes Service from RD_CONFIG_* environment variables.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _cli = Cli::parse();

    let config = Config::from_env();
    let debug = config.as_ref().is_ok_and(|c| c.debug);

    // Diagnostics go to stderr, stdout only carries the result line
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_directives(debug))),
        )
        .init();

    let result = match config {
        Ok(config) => execute(&config).await,
        Err(e) => Err(e),
    };

    let report = Report::from_result(&result);
    if let Some(line) = report.stdout {
        println!("{}", line);
    }
    ExitCode::from(report.exit_code)
}

async fn execute(config: &Config) -> Result<CreatedService> {
    if config.debug {
        debug!("Log level configured for DEBUG");
    }

    let client = connect(&config.connection).await?;
    info!("Connected to Kubernetes API server");

    run(config, &client).await
}
