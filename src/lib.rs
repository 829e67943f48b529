//! # mediameta
//!
//! Media metadata extraction built on the `exiftool` command-line program.
//!
//! This crate shells out to exiftool, reads its line-oriented `Label : Value`
//! output, and exposes the result as a flat field mapping with typed
//! accessors for the fields most callers want (camera, lens, capture date,
//! GPS presence). exiftool itself does the heavy lifting; it must be
//! installed separately.
//!
//! ## Features
//!
//! - `serialize` - Serde support for [`MediaRecord`]
//! - `tracing` - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! let record = mediameta::extract("photo.jpg")?;
//!
//! if let Ok(camera) = record.camera() {
//!     println!("shot on {camera}");
//! }
//! if record.is_geo_tagged() {
//!     println!("has GPS data");
//! }
//! println!("captured {}", record.date()?);
//! # Ok::<(), mediameta::Error>(())
//! ```

mod error;
mod extract;
mod record;
pub mod tools;

// Re-exports
pub use error::{Error, Result};
pub use record::{MediaRecord, FIELD_CAMERA, FIELD_GPS, FIELD_LENS};
pub use tools::{check_tool, ExifTool, ToolInfo};

use std::ffi::OsStr;
use std::path::Path;

/// Extract metadata from a media file.
///
/// This is the main entry point. It locates `exiftool` on the search path,
/// runs it against the file, and parses the output. Relative paths are
/// resolved against the current working directory.
///
/// # Example
///
/// ```no_run
/// let record = mediameta::extract("/photos/img_0001.cr2")?;
/// println!("{} fields", record.len());
/// # Ok::<(), mediameta::Error>(())
/// ```
pub fn extract<P: AsRef<Path>>(path: P) -> Result<MediaRecord> {
    ExifTool::locate()?.extract(path)
}

/// Extract metadata, passing extra arguments to the tool ahead of the file
/// path.
///
/// # Example
///
/// ```no_run
/// // Ask exiftool to include duplicate and unknown tags.
/// let record = mediameta::extract_with_args("photo.jpg", ["-a", "-u"])?;
/// # Ok::<(), mediameta::Error>(())
/// ```
pub fn extract_with_args<P, I>(path: P, args: I) -> Result<MediaRecord>
where
    P: AsRef<Path>,
    I: IntoIterator,
    I::Item: AsRef<OsStr>,
{
    ExifTool::locate()?.extract_with_args(path, args)
}
