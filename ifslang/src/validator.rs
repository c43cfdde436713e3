//! Structural validation of `.lng` and `.trs` files.
//!
//! Validation never fails: every finding is collected into a
//! [`ValidationReport`] as either an error (the file must be rejected) or a
//! warning (advisory only). The checks run as independent passes so that all
//! violations are reported, not just the first:
//!
//! 1. header declarations ([`crate::formats::header::recognize_header`]),
//! 2. location of the first `CS:` line,
//! 3. CS/CE pairing,
//! 4. indentation and line terminators,
//! 5. field shape of `CS:`, `A:Prompt^` and (translation files) `P:` lines.
//!
//! Line numbers in messages are 1-based and count from the top of the file.

use std::{fs::File, io::Read, path::Path};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::formats::{
    FileKind,
    block::{CE_LINE, CS_PREFIX, FIELD_SEPARATOR, ORIGINAL_PREFIX, PROMPT_PREFIX},
    header::recognize_header,
};

lazy_static! {
    static ref CS_IDENTIFIER_REGEX: Regex = Regex::new(r"^CS:([^^]+)").unwrap();
}

/// Outcome of validating one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationReport {
    /// `true` iff `errors` is empty.
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    fn from_findings(findings: Findings) -> Self {
        ValidationReport {
            valid: findings.errors.is_empty(),
            errors: findings.errors,
            warnings: findings.warnings,
        }
    }

    fn rejected(error: String) -> Self {
        ValidationReport {
            valid: false,
            errors: vec![error],
            warnings: Vec::new(),
        }
    }

    /// One-line summary such as `Validation: 0 errors, 1 warnings`.
    pub fn summary(&self) -> String {
        format!(
            "Validation: {} errors, {} warnings",
            self.errors.len(),
            self.warnings.len()
        )
    }

    /// `(valid, errors, warnings)`, the shape the orchestrator consumes.
    pub fn into_parts(self) -> (bool, Vec<String>, Vec<String>) {
        (self.valid, self.errors, self.warnings)
    }
}

/// Validates the file at `path`, inferring its kind from the extension.
///
/// A missing or unreadable file, or an extension other than `.lng`/`.trs`,
/// yields a report with that single error and no further checks.
pub fn validate_file<P: AsRef<Path>>(path: P) -> ValidationReport {
    let path = path.as_ref();

    if !path.exists() {
        return ValidationReport::rejected(format!("File does not exist: {}", path.display()));
    }

    let Some(kind) = FileKind::from_path(path) else {
        let suffix = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();
        return ValidationReport::rejected(format!("Unknown file type: {}", suffix));
    };

    let text = match read_text(path) {
        Ok(text) => text,
        Err(e) => return ValidationReport::rejected(format!("Failed to read file: {}", e)),
    };

    let report = validate_str(&text, kind);
    tracing::debug!(
        path = %path.display(),
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "validated file"
    );
    report
}

/// Validates complete file text (header and blocks) of the given kind.
pub fn validate_str(text: &str, kind: FileKind) -> ValidationReport {
    let lines = split_lines(text);
    let mut findings = Findings::default();

    let contents: Vec<&str> = lines.iter().map(|l| l.content).collect();
    let (errors, warnings) = recognize_header(&contents, kind);
    findings.errors.extend(errors);
    findings.warnings.extend(warnings);

    let Some(start) = find_content_start(&lines) else {
        findings
            .errors
            .push("Could not find content section".to_string());
        return ValidationReport::from_findings(findings);
    };

    findings.check_content(&lines[start..], start, kind);
    ValidationReport::from_findings(findings)
}

/// Validates block text without a header, treating every line as content.
///
/// Useful for checking a fragment before a header is attached, and for
/// reporting pairing problems in text that has no `CS:` line at all.
pub fn validate_content(text: &str, kind: FileKind) -> ValidationReport {
    let lines = split_lines(text);
    let mut findings = Findings::default();
    findings.check_content(&lines, 0, kind);
    ValidationReport::from_findings(findings)
}

/// Index of the first line whose trimmed content starts with `CS:`.
fn find_content_start(lines: &[Line<'_>]) -> Option<usize> {
    lines
        .iter()
        .position(|line| line.content.trim().starts_with(CS_PREFIX))
}

/// Extracts the identifier of a trimmed `CS:` line: everything up to the first `^`.
pub fn cs_identifier(line: &str) -> Option<&str> {
    CS_IDENTIFIER_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// A physical line without its terminator.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    content: &'a str,
    /// The line ended in CRLF (as opposed to a bare LF or end of input).
    crlf: bool,
}

fn split_lines(text: &str) -> Vec<Line<'_>> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    if text.is_empty() {
        return Vec::new();
    }
    let ends_with_newline = body.len() != text.len();
    let pieces: Vec<&str> = body.split('\n').collect();
    let last = pieces.len() - 1;

    pieces
        .into_iter()
        .enumerate()
        .map(|(i, piece)| match piece.strip_suffix('\r') {
            Some(content) => Line {
                content,
                crlf: i < last || ends_with_newline,
            },
            None => Line {
                content: piece,
                crlf: false,
            },
        })
        .collect()
}

fn read_text(path: &Path) -> std::io::Result<String> {
    let file = File::open(path)?;
    // Auto-detect BOM, decode to UTF-8; passthrough UTF-8
    let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .bom_override(true)
        .build(file);
    let mut decoded = String::new();
    decoder.read_to_string(&mut decoded)?;
    Ok(decoded)
}

#[derive(Debug, Default)]
struct Findings {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Findings {
    /// Runs every content pass over `lines`, the first of which is file line `offset + 1`.
    fn check_content(&mut self, lines: &[Line<'_>], offset: usize, kind: FileKind) {
        self.check_pairing(lines, offset);
        self.check_indentation(lines, offset);
        self.check_terminators(lines, offset);
        self.check_fields(lines, offset, kind);
    }

    fn check_pairing(&mut self, lines: &[Line<'_>], offset: usize) {
        let mut stack: Vec<(String, usize)> = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let line_num = i + offset + 1;
            let stripped = line.content.trim();

            if stripped.starts_with(CS_PREFIX) {
                match cs_identifier(stripped) {
                    Some(identifier) => stack.push((identifier.to_string(), line_num)),
                    None => self.errors.push(format!(
                        "Line {}: Malformed CS line: {}",
                        line_num, stripped
                    )),
                }
            } else if stripped.starts_with(CE_LINE) && stack.pop().is_none() {
                self.errors
                    .push(format!("Line {}: CE without matching CS", line_num));
            }
        }

        for (identifier, line_num) in stack {
            self.errors.push(format!(
                "Line {}: CS '{}' not closed with CE",
                line_num, identifier
            ));
        }
    }

    fn check_indentation(&mut self, lines: &[Line<'_>], offset: usize) {
        for (i, line) in lines.iter().enumerate() {
            if line.content.trim().is_empty() {
                continue;
            }
            if line.content.starts_with(' ') {
                self.warnings.push(format!(
                    "Line {}: Uses spaces instead of tabs for indentation",
                    i + offset + 1
                ));
            }
        }
    }

    fn check_terminators(&mut self, lines: &[Line<'_>], offset: usize) {
        for (i, line) in lines.iter().enumerate() {
            if !line.crlf && !line.content.trim().is_empty() {
                self.warnings.push(format!(
                    "Line {}: Missing CRLF line terminator",
                    i + offset + 1
                ));
            }
        }
    }

    fn check_fields(&mut self, lines: &[Line<'_>], offset: usize, kind: FileKind) {
        let expected = kind.cs_field_count();

        for (i, line) in lines.iter().enumerate() {
            let line_num = i + offset + 1;
            let stripped = line.content.trim();

            if stripped.starts_with(CS_PREFIX) {
                let parts = stripped.split(FIELD_SEPARATOR).count();
                if parts != expected {
                    let message = match kind {
                        FileKind::Definition => format!(
                            "Line {}: Invalid CS format. Expected {} parts, got {}",
                            line_num, expected, parts
                        ),
                        FileKind::Translation => format!(
                            "Line {}: Invalid CS format for .trs. Expected {} parts, got {}",
                            line_num, expected, parts
                        ),
                    };
                    self.errors.push(message);
                }
            }

            if kind == FileKind::Translation
                && stripped.starts_with(ORIGINAL_PREFIX)
                && !stripped.ends_with(FIELD_SEPARATOR)
            {
                self.errors
                    .push(format!("Line {}: P: line should end with ^", line_num));
            }

            if stripped.starts_with(PROMPT_PREFIX) && !stripped.ends_with(FIELD_SEPARATOR) {
                self.errors
                    .push(format!("Line {}: A:Prompt should end with ^", line_num));
            }
        }
    }
}
