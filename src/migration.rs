// src/migration.rs
use crate::mapping::{ClickBehavior, UnrecognizedValue, LEGACY_KEY};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("line {line}: {source}")]
    Value {
        line: usize,
        #[source]
        source: UnrecognizedValue,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Rewrites a single kconf line.
///
/// Returns `None` for anything that is not a `PresentWindows=` assignment,
/// those lines are dropped rather than echoed.
pub fn migrate_line(line: &str) -> Result<Option<[String; 2]>, UnrecognizedValue> {
    let line = line.trim();
    let Some(value) = line
        .strip_prefix(LEGACY_KEY)
        .and_then(|rest| rest.strip_prefix('='))
    else {
        return Ok(None);
    };

    let behavior = ClickBehavior::from_legacy(value)?;

    Ok(Some([format!("# DELETE {}", LEGACY_KEY), behavior.to_string()]))
}

/// Streams `input` through [`migrate_line`], writing results in input order.
///
/// On an unrecognized value everything produced for earlier lines is flushed
/// before the error is returned; nothing is written for the offending line.
pub fn migrate<R: BufRead, W: Write>(input: R, mut output: W) -> Result<usize, MigrationError> {
    let mut line_num = 0;
    let mut migrated = 0;

    for line in input.lines() {
        line_num += 1;
        let line = line?;

        match migrate_line(&line) {
            Ok(Some([delete, assign])) => {
                debug!(line = line_num, %assign, "migrated {}", LEGACY_KEY);
                writeln!(output, "{}", delete)?;
                writeln!(output, "{}", assign)?;
                migrated += 1;
            }
            Ok(None) => trace!(line = line_num, "skipped"),
            Err(source) => {
                output.flush()?;
                return Err(MigrationError::Value {
                    line: line_num,
                    source,
                });
            }
        }
    }

    output.flush()?;
    Ok(migrated)
}
