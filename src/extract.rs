//! Subprocess invocation and output parsing.
//!
//! exiftool emits one field per line in the form `Label : Value`. The parser
//! splits each line on its first colon, trims both halves, and drops lines
//! without a colon. There is no structured output mode in play here, so a
//! tool that crashes mid-stream is only detected through its exit status.

use crate::record::MediaRecord;
use crate::tools::ExifTool;
use crate::{Error, Result};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::Stdio;

/// Resolve `path` against the current working directory and require that it
/// exists on disk.
pub(crate) fn resolve_existing(path: &Path) -> Result<PathBuf> {
    let resolved = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(Error::EnvironmentUnavailable)?;
        cwd.join(path)
    };

    if !resolved.exists() {
        return Err(Error::path_not_found(resolved));
    }

    Ok(resolved)
}

/// Run the configured tool against `path` and parse its stdout.
///
/// The argument vector is `<base-args...> <extra-args...> <resolved-path>`.
/// The child's stdout is drained and the child waited on before this returns,
/// on every exit path. No timeout is applied; a hung tool hangs the caller.
pub(crate) fn run<I>(tool: &ExifTool, path: &Path, extra_args: I) -> Result<MediaRecord>
where
    I: IntoIterator,
    I::Item: AsRef<OsStr>,
{
    let resolved = resolve_existing(path)?;
    let tool_name = tool.tool_name();

    let mut cmd = tool.command();
    cmd.args(extra_args);
    cmd.arg(&resolved);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::null());

    #[cfg(feature = "tracing")]
    tracing::debug!(tool = %tool_name, path = %resolved.display(), "extracting metadata");

    let mut child = cmd
        .spawn()
        .map_err(|e| Error::launch_failed(&tool_name, e))?;

    let mut fields = HashMap::new();
    let mut read_err = None;

    if let Some(stdout) = child.stdout.take() {
        for line in BufReader::new(stdout).lines() {
            match line {
                Ok(line) => {
                    if let Some((label, value)) = split_field(&line) {
                        fields.insert(label, value);
                    }
                }
                Err(e) => {
                    // Stop reading but still reap the child below.
                    read_err = Some(e);
                    break;
                }
            }
        }
    }

    let status = child
        .wait()
        .map_err(|e| Error::tool_failed(&tool_name, format!("wait failed: {e}")))?;

    if let Some(e) = read_err {
        return Err(Error::Io(e));
    }

    if !status.success() {
        return Err(Error::tool_failed(
            &tool_name,
            format!("exited with status {status}"),
        ));
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(fields = fields.len(), "parsed tool output");

    Ok(MediaRecord::new(resolved, fields))
}

/// Split one output line on its first colon, trimming both halves.
///
/// Returns `None` for lines without a colon; they carry no field.
fn split_field(line: &str) -> Option<(String, String)> {
    let (label, value) = line.split_once(':')?;
    Some((label.trim().to_string(), value.trim().to_string()))
}
