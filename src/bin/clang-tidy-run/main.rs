mod cli;

use crate::cli::Cli;
use anyhow::{Context, Result};
use clap::Parser;
use como_tooling::fetch::http_client;
use como_tooling::logging;
use como_tooling::tidy::{self, default_source_root, resolve_source_dir, RunConfig, TidyOptions};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    logging::init(if args.verbose { "debug" } else { "info" });

    let source_root = match args.source_dir {
        Some(dir) => resolve_source_dir(&dir)?,
        None => default_source_root()?,
    };

    let config = RunConfig {
        options: TidyOptions {
            build_path: args.build_path,
            jobs: args.jobs,
        },
        source_root,
        interpreter: args.interpreter,
        script_url: args.script_url,
    };

    let client = http_client()?;
    let status = tidy::run(&config, &client)
        .await
        .context("clang-tidy run failed")?;

    Ok(ExitCode::from(tidy::exit_code(status)))
}
