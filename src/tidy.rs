// src/tidy.rs
use crate::fetch::{fetch_script, FetchError};
use reqwest::Client;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info, warn};

pub const RUN_SCRIPT_URL: &str = "https://raw.githubusercontent.com/llvm/llvm-project/release/16.x/clang-tools-extra/clang-tidy/tool/run-clang-tidy.py";
pub const DEFAULT_INTERPRETER: &str = "python";

#[derive(Debug, Error)]
pub enum TidyError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("cannot locate executable: {0}")]
    CurrentExe(#[source] io::Error),
    #[error("no source root two levels above {}", .0.display())]
    NoSourceRoot(PathBuf),
    #[error("invalid source directory {}: {source}", .path.display())]
    SourceDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Options forwarded to run-clang-tidy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TidyOptions {
    /// Directory holding `compile_commands.json`.
    pub build_path: PathBuf,
    /// Parallel tidy instances, 0 lets the script pick.
    pub jobs: i32,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub options: TidyOptions,
    pub source_root: PathBuf,
    pub interpreter: String,
    pub script_url: String,
}

/// The directory two levels above the one containing `anchor`.
pub fn source_root(anchor: &Path) -> Option<PathBuf> {
    anchor
        .parent()
        .and_then(Path::parent)
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

/// Resolves the source root from the running executable.
pub fn default_source_root() -> Result<PathBuf, TidyError> {
    let exe = std::env::current_exe().map_err(TidyError::CurrentExe)?;
    let exe = exe.canonicalize().unwrap_or(exe);
    source_root(&exe).ok_or(TidyError::NoSourceRoot(exe))
}

/// Makes a user supplied source directory absolute.
///
/// The child runs inside the root and also receives it as an argument, so a
/// relative path would be resolved twice.
pub fn resolve_source_dir(dir: &Path) -> Result<PathBuf, TidyError> {
    dir.canonicalize().map_err(|source| TidyError::SourceDir {
        path: dir.to_path_buf(),
        source,
    })
}

pub fn tidy_arguments(options: &TidyOptions, root: &Path) -> Vec<OsString> {
    let mut build_path = OsString::from("-p=");
    build_path.push(&options.build_path);

    vec![
        OsString::from("-use-color"),
        OsString::from("-j"),
        OsString::from(options.jobs.to_string()),
        build_path,
        OsString::from("-header-filter=.*"),
        root.as_os_str().to_owned(),
    ]
}

/// Runs `interpreter script args..` inside `root` and waits for it to exit.
///
/// Stdin is inherited so the script can prompt if it needs to.
pub async fn launch(
    interpreter: &str,
    script: &Path,
    args: &[OsString],
    root: &Path,
) -> Result<ExitStatus, TidyError> {
    debug!(interpreter, script = %script.display(), ?args, "spawning");
    let status = Command::new(interpreter)
        .arg(script)
        .args(args)
        .current_dir(root)
        .stdin(Stdio::inherit())
        .status()
        .await
        .map_err(|source| TidyError::Spawn {
            program: interpreter.to_string(),
            source,
        })?;

    if status.success() {
        info!("analysis finished");
    } else {
        warn!(%status, "analysis exited unsuccessfully");
    }
    Ok(status)
}

/// Downloads the driver script and runs it with the assembled arguments.
///
/// The temporary script is deleted when this returns, whichever way it does.
pub async fn run(config: &RunConfig, client: &Client) -> Result<ExitStatus, TidyError> {
    let script = fetch_script(client, &config.script_url).await?;
    let args = tidy_arguments(&config.options, &config.source_root);

    launch(&config.interpreter, script.path(), &args, &config.source_root).await
}

/// Mirrors the child's exit code. Signal deaths and codes that do not fit
/// a byte become 1.
pub fn exit_code(status: ExitStatus) -> u8 {
    status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .unwrap_or(1)
}
