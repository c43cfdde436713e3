//! The ten-line preamble shared by `.lng` and `.trs` files.
//!
//! ```text
//! -------------------------------------------------------
//! File Type: IFS Foundation Language File
//! Type version: 10.00
//! -------------------------------------------------------
//! Module: ESSPRO
//! Layer: Cust
//! Main Type: LU
//! Sub Type: Logical Unit
//! Content:
//! -------------------------------------------------------
//! ```
//!
//! Translation files add `Language:` and `Culture:` after `Module:`.

use super::{FileKind, block::LINE_END};
use crate::naming::language_code;

pub const SEPARATOR: &str = "-------------------------------------------------------";
pub const TYPE_VERSION: &str = "10.00";
pub const DEFAULT_MAIN_TYPE: &str = "LU";
pub const DEFAULT_SUB_TYPE: &str = "Logical Unit";

/// Minimum number of lines a file needs before its header is inspected.
pub const MIN_HEADER_LINES: usize = 10;
/// Number of leading lines searched for header fields.
pub const HEADER_SCAN_LINES: usize = 15;

const REQUIRED_FIELDS: [&str; 4] = ["Module:", "Layer:", "Main Type:", "Sub Type:"];

/// Header values of one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub kind: FileKind,
    pub module: String,
    pub layer: String,
    /// Culture such as `sv-SE`; only written for translation files.
    pub language: Option<String>,
    pub main_type: String,
    pub sub_type: String,
}

impl Header {
    pub fn new(
        kind: FileKind,
        module: impl Into<String>,
        layer: impl Into<String>,
        language: Option<String>,
    ) -> Self {
        Header {
            kind,
            module: module.into(),
            layer: layer.into(),
            language,
            main_type: DEFAULT_MAIN_TYPE.to_string(),
            sub_type: DEFAULT_SUB_TYPE.to_string(),
        }
    }

    pub fn with_types(mut self, main_type: impl Into<String>, sub_type: impl Into<String>) -> Self {
        self.main_type = main_type.into();
        self.sub_type = sub_type.into();
        self
    }

    /// Renders the header, every line terminated by CRLF.
    pub fn encode(&self) -> String {
        let mut lines = vec![
            SEPARATOR.to_string(),
            format!("File Type: {}", self.kind.file_type()),
            format!("Type version: {}", TYPE_VERSION),
            SEPARATOR.to_string(),
            format!("Module: {}", self.module),
        ];
        if self.kind == FileKind::Translation {
            let culture = self.language.as_deref().unwrap_or_default();
            lines.push(format!("Language: {}", language_code(culture)));
            lines.push(format!("Culture: {}", culture));
        }
        lines.push(format!("Layer: {}", self.layer));
        lines.push(format!("Main Type: {}", self.main_type));
        lines.push(format!("Sub Type: {}", self.sub_type));
        lines.push("Content: ".to_string());
        lines.push(SEPARATOR.to_string());

        let mut out = lines.join(LINE_END);
        out.push_str(LINE_END);
        out
    }
}

/// Renders the header for `kind` with the default main and sub type.
pub fn encode_header(kind: FileKind, module: &str, layer: &str, language: Option<&str>) -> String {
    Header::new(kind, module, layer, language.map(str::to_string)).encode()
}

/// Checks the header region of `lines` for the declarations `kind` requires.
///
/// Returns `(errors, warnings)`. Field order is not enforced; each field only
/// has to appear somewhere in the first [`HEADER_SCAN_LINES`] lines.
pub fn recognize_header<S: AsRef<str>>(lines: &[S], kind: FileKind) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if lines.len() < MIN_HEADER_LINES {
        errors.push("File too short, missing header".to_string());
        return (errors, warnings);
    }

    let header_text = lines
        .iter()
        .take(HEADER_SCAN_LINES)
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");

    if !header_text.contains(kind.file_type()) {
        errors.push(format!(
            "Invalid file type header. Expected: {}",
            kind.file_type()
        ));
    }

    if !header_text.contains(&format!("Type version: {}", TYPE_VERSION)) {
        warnings.push(format!("Type version is not {}", TYPE_VERSION));
    }

    for field in REQUIRED_FIELDS {
        if !header_text.contains(field) {
            errors.push(format!("Missing required header field: {}", field));
        }
    }

    (errors, warnings)
}
