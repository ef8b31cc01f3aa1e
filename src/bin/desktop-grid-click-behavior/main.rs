use anyhow::{Context, Result};
use clap::Parser;
use como_tooling::logging;
use como_tooling::migration::migrate;
use std::io::{self, BufWriter};
use tracing::info;

/// kconf_update filter: turns the legacy PresentWindows flag of the desktop
/// grid effect into the ClickBehavior setting.
///
/// Reads the old group from stdin and writes update directives to stdout.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    logging::init("warn");

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    let migrated = migrate(stdin, stdout).context("desktop grid click behavior migration failed")?;
    info!(migrated, "done");
    Ok(())
}
