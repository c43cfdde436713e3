//! File names of generated files.
//!
//! ```text
//! <Module>_LU_LogicalUnit-<layer>.lng
//! <Module>_LU_LogicalUnit-<layer>-<code>.trs
//! ```

use crate::formats::FileKind;

/// Cultures whose two-letter file code is not simply the part before the hyphen.
const LANGUAGE_CODES: [(&str, &str); 2] = [("sv-SE", "sv"), ("nb-NO", "no")];

/// Maps a culture such as `sv-SE` to the code used in `.trs` names and headers.
///
/// # Example
/// ```rust
/// use ifslang::naming::language_code;
/// assert_eq!(language_code("sv-SE"), "sv");
/// assert_eq!(language_code("nb-NO"), "no");
/// assert_eq!(language_code("de-DE"), "de");
/// assert_eq!(language_code("fi"), "fi");
/// ```
pub fn language_code(culture: &str) -> &str {
    LANGUAGE_CODES
        .iter()
        .find(|(c, _)| *c == culture)
        .map(|(_, code)| *code)
        .unwrap_or_else(|| culture.split('-').next().unwrap_or(culture))
}

/// Upper-cases the first character of `module` and lower-cases the rest.
pub fn capitalize(module: &str) -> String {
    let mut chars = module.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn definition_file_name(module: &str, layer: &str) -> String {
    format!(
        "{}_LU_LogicalUnit-{}.{}",
        capitalize(module),
        layer,
        FileKind::Definition.extension()
    )
}

pub fn translation_file_name(module: &str, layer: &str, culture: &str) -> String {
    format!(
        "{}_LU_LogicalUnit-{}-{}.{}",
        capitalize(module),
        layer,
        language_code(culture),
        FileKind::Translation.extension()
    )
}
