//! Format identification from file names

use std::fmt;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
    Xml,
}

impl Format {
    pub const ALL: [Self; 3] = [Self::Json, Self::Yaml, Self::Xml];

    /// File extensions recognized for this format, lowercase, without the dot
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Json => &["json"],
            Self::Yaml => &["yml", "yaml"],
            Self::Xml => &["xml"],
        }
    }

    /// Look up a format by extension (case-insensitive, without the dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.extensions().contains(&ext.as_str()))
    }

    /// Resolve the format of a path, failing with `UnsupportedFormat`
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = extension_of(path).unwrap_or_default();
        match Self::from_extension(&ext) {
            Some(format) => {
                debug!(path = %path.display(), %format, "detected format");
                Ok(format)
            }
            None => {
                warn!(path = %path.display(), "unsupported file extension");
                Err(Error::unsupported_format(ext))
            }
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Xml => "XML",
        };
        f.write_str(name)
    }
}

/// Detect a format from the extension of a path
pub fn detect_format_from_path(path: impl AsRef<Path>) -> Option<Format> {
    extension_of(path.as_ref()).and_then(|ext| Format::from_extension(&ext))
}

/// Lowercase text after the last `.` of the file name.
///
/// Unlike `Path::extension`, a leading dot counts, so `.json` yields `json`.
fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let (_, ext) = name.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}
