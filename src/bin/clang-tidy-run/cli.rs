use clap::Parser;
use como_tooling::tidy::{DEFAULT_INTERPRETER, RUN_SCRIPT_URL};
use std::path::PathBuf;

/// Run clang-tidy script with additional options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path used to read a compile command database.
    #[arg(short = 'p', value_name = "BUILD_PATH")]
    pub build_path: PathBuf,

    /// number of tidy instances to be run in parallel.
    #[arg(short = 'j', default_value_t = 0, allow_negative_numbers = true)]
    pub jobs: i32,

    /// Source tree to analyze (defaults to two levels above this tool's directory)
    #[arg(long)]
    pub source_dir: Option<PathBuf>,

    /// Interpreter used to run the downloaded script
    #[arg(long, default_value = DEFAULT_INTERPRETER)]
    pub interpreter: String,

    /// Location of run-clang-tidy.py
    #[arg(long, default_value = RUN_SCRIPT_URL)]
    pub script_url: String,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}
