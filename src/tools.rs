//! External tool detection and configuration.

use crate::{extract, Error, MediaRecord, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Name of the external tool looked up on the search path.
pub const DEFAULT_TOOL: &str = "exiftool";

/// A configured exiftool invocation.
///
/// The default entry points search `PATH` for the binary. Callers that need
/// to pin a specific build, or tests substituting a fake tool, can point at
/// an explicit program and prepend base arguments to every run. Each value
/// is an independent configuration; nothing is process-global.
///
/// # Example
///
/// ```no_run
/// use mediameta::ExifTool;
///
/// let tool = ExifTool::at("/opt/exiftool/exiftool").base_arg("-fast");
/// let record = tool.extract("photo.jpg")?;
/// println!("{} fields", record.len());
/// # Ok::<(), mediameta::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExifTool {
    program: PathBuf,
    base_args: Vec<String>,
}

impl ExifTool {
    /// Locate `exiftool` on the search path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolNotFound`] if the binary is not on `PATH`.
    pub fn locate() -> Result<Self> {
        let program =
            which::which(DEFAULT_TOOL).map_err(|_| Error::tool_not_found(DEFAULT_TOOL))?;
        Ok(Self {
            program,
            base_args: Vec::new(),
        })
    }

    /// Use a specific program instead of searching the path.
    pub fn at(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            base_args: Vec::new(),
        }
    }

    /// Append a base argument passed ahead of any per-call arguments.
    pub fn base_arg(mut self, s: impl Into<String>) -> Self {
        self.base_args.push(s.into());
        self
    }

    /// Append multiple base arguments.
    pub fn base_args(mut self, iter: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.base_args.extend(iter.into_iter().map(Into::into));
        self
    }

    /// Path of the configured program.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run the tool against `path` and parse its output into a record.
    pub fn extract<P: AsRef<Path>>(&self, path: P) -> Result<MediaRecord> {
        extract::run(self, path.as_ref(), std::iter::empty::<&OsStr>())
    }

    /// Like [`ExifTool::extract`], with extra arguments inserted between the
    /// base arguments and the file path.
    pub fn extract_with_args<P, I>(&self, path: P, args: I) -> Result<MediaRecord>
    where
        P: AsRef<Path>,
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        extract::run(self, path.as_ref(), args)
    }

    /// Short name used in error messages.
    pub(crate) fn tool_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.program.to_string_lossy().to_string())
    }

    /// Build a command with the base arguments already applied.
    pub(crate) fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.base_args);
        cmd
    }
}

/// Information about the external tool installation.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Whether the tool is available.
    pub available: bool,
    /// Version string if available.
    pub version: Option<String>,
    /// Path to the tool executable.
    pub path: Option<PathBuf>,
}

/// Check whether exiftool is available and report its version.
///
/// # Example
///
/// ```no_run
/// let info = mediameta::check_tool();
/// if info.available {
///     println!("exiftool version: {:?}", info.version);
/// }
/// ```
pub fn check_tool() -> ToolInfo {
    let result = Command::new(DEFAULT_TOOL).arg("-ver").output();

    match result {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout)
                .lines()
                .next()
                .map(|s| s.trim().to_string());

            let path = which::which(DEFAULT_TOOL).ok();

            ToolInfo {
                name: DEFAULT_TOOL.to_string(),
                available: true,
                version,
                path,
            }
        }
        _ => ToolInfo {
            name: DEFAULT_TOOL.to_string(),
            available: false,
            version: None,
            path: None,
        },
    }
}
