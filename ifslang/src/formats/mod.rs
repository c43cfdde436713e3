//! File formats handled by ifslang.
//!
//! The two generated formats share a header ([`header`]) and the nested CS/CE
//! block syntax ([`block`]); [`lng`] and [`trs`] assemble complete files, and
//! [`export`] reads the XML export they are generated from. [`FileKind`]
//! selects between the two generated formats.

pub mod block;
pub mod export;
pub mod header;
pub mod lng;
pub mod trs;

use std::{
    fmt::{Display, Formatter},
    path::Path,
    str::FromStr,
};

// Reexporting the formats for easier access
pub use header::Header;
pub use lng::Format as LngFormat;
pub use trs::Format as TrsFormat;

use crate::Error;

/// The two kinds of generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Base-language definition file (`.lng`).
    Definition,
    /// Per-language translation file (`.trs`).
    Translation,
}

/// Implements [`std::fmt::Display`] for [`FileKind`] as the file extension.
///
/// # Example
/// ```rust
/// use ifslang::formats::FileKind;
/// assert_eq!(FileKind::Definition.to_string(), "lng");
/// assert_eq!(FileKind::Translation.to_string(), "trs");
/// ```
impl Display for FileKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Implements [`std::str::FromStr`] for [`FileKind`].
///
/// Accepts, case-insensitively and with an optional leading dot:
/// - `"lng"`, `"definition"` → `FileKind::Definition`
/// - `"trs"`, `"translation"` → `FileKind::Translation`
///
/// # Example
/// ```rust
/// use ifslang::formats::FileKind;
/// use std::str::FromStr;
/// assert_eq!(FileKind::from_str(".lng").unwrap(), FileKind::Definition);
/// assert_eq!(FileKind::from_str("TRS").unwrap(), FileKind::Translation);
/// assert!(FileKind::from_str("xml").is_err());
/// ```
impl FromStr for FileKind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches('.').to_ascii_lowercase();
        match s.as_str() {
            "lng" | "definition" => Ok(FileKind::Definition),
            "trs" | "translation" => Ok(FileKind::Translation),
            other => Err(Error::UnknownFileKind(other.to_string())),
        }
    }
}

impl FileKind {
    /// Returns the file extension (without dot) for this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Definition => "lng",
            FileKind::Translation => "trs",
        }
    }

    /// Infers the kind from an exact `.lng`/`.trs` extension.
    ///
    /// Matching is case-sensitive, like the consuming subsystem.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<FileKind> {
        match path.as_ref().extension().and_then(|s| s.to_str()) {
            Some("lng") => Some(FileKind::Definition),
            Some("trs") => Some(FileKind::Translation),
            _ => None,
        }
    }

    /// The `File Type:` declaration written into the header.
    pub fn file_type(&self) -> &'static str {
        match self {
            FileKind::Definition => "IFS Foundation Language File",
            FileKind::Translation => "IFS Foundation Translation File",
        }
    }

    /// Number of `^`-separated fields every `CS:` line carries.
    pub fn cs_field_count(&self) -> usize {
        match self {
            FileKind::Definition => 5,
            FileKind::Translation => 2,
        }
    }
}
