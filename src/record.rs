//! The extraction result type and its typed accessors.

use crate::{Error, Result};
use chrono::{DateTime, NaiveDateTime};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Field holding the lens used for the shot.
pub const FIELD_LENS: &str = "Lens ID";
/// Field holding the camera body name.
pub const FIELD_CAMERA: &str = "Camera Model Name";
/// Field present when the file carries GPS coordinates.
pub const FIELD_GPS: &str = "GPS Position";

/// Capture timestamp fields, in priority order.
const DATE_FIELDS: [&str; 3] = ["Date/Time Original", "Create Date", "Modify Date"];

/// Naive timestamp formats, tried in order. Some files carry two fractional
/// digits on top of whole seconds.
const DATE_FORMATS: [&str; 2] = ["%Y:%m:%d %H:%M:%S", "%Y:%m:%d %H:%M:%S%.f"];

/// Highest-precision format: six fractional digits plus a UTC offset.
const DATE_FORMAT_ZONED: &str = "%Y:%m:%d %H:%M:%S%.f%:z";

/// Parsed metadata for a single media file.
///
/// A record is populated once, by one tool invocation, and never mutated
/// afterwards. Keys are exiftool's own labels, which may aggregate several
/// EXIF/XMP/IPTC tags under one name. Repeated labels in the tool output
/// collapse last-write-wins, so the mapping is flat and keys are unique.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct MediaRecord {
    path: PathBuf,
    fields: HashMap<String, String>,
}

impl MediaRecord {
    pub(crate) fn new(path: PathBuf, fields: HashMap<String, String>) -> Self {
        Self { path, fields }
    }

    /// Resolved absolute path of the probed file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All parsed fields, keyed by exiftool's labels.
    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }

    /// Number of parsed fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the tool produced no parsable lines at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Raw value of an exactly named field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] if the field is absent.
    pub fn get(&self, name: &str) -> Result<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::unknown_field(name))
    }

    /// Lens used for the shot (the `Lens ID` field).
    pub fn lens(&self) -> Result<&str> {
        self.get(FIELD_LENS)
    }

    /// Camera body name (the `Camera Model Name` field).
    pub fn camera(&self) -> Result<&str> {
        self.get(FIELD_CAMERA)
    }

    /// Capture timestamp.
    ///
    /// Tries `Date/Time Original`, then `Create Date`, then `Modify Date`,
    /// and parses the first one present. Whole-second values are the common
    /// case; some files carry two fractional digits, a few carry six plus a
    /// UTC offset. For the offset form the wall-clock time is kept as
    /// written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampMissing`] if none of the fields are present,
    /// or [`Error::TimestampFormat`] if the first-found value matches no
    /// known format.
    pub fn date(&self) -> Result<NaiveDateTime> {
        let value = DATE_FIELDS
            .iter()
            .find_map(|f| self.fields.get(*f))
            .ok_or(Error::TimestampMissing)?;

        parse_timestamp(value).ok_or_else(|| Error::TimestampFormat {
            value: value.clone(),
        })
    }

    /// Whether the file carries GPS data (the `GPS Position` field exists,
    /// regardless of its value).
    pub fn is_geo_tagged(&self) -> bool {
        self.fields.contains_key(FIELD_GPS)
    }
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    for fmt in DATE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }

    DateTime::parse_from_str(value, DATE_FORMAT_ZONED)
        .ok()
        .map(|dt| dt.naive_local())
}

impl fmt::Display for MediaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.path.display())?;
        for (label, value) in &self.fields {
            writeln!(f, "\t{label} = {value}")?;
        }
        Ok(())
    }
}
