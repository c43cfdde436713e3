use std::path::Path;
use unic_langid::LanguageIdentifier;

/// Arguments of one command, checked together before any work starts.
#[derive(Debug, Default)]
pub struct ValidationContext {
    pub input_files: Vec<String>,
    pub output_dir: Option<String>,
    pub language_codes: Vec<String>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_file(mut self, file: impl Into<String>) -> Self {
        self.input_files.push(file.into());
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_language_code(mut self, lang: impl Into<String>) -> Self {
        self.language_codes.push(lang.into());
        self
    }
}

/// Validate file path exists and is readable
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }

    Ok(())
}

/// Validate output directory exists or can be created
pub fn validate_output_dir(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if path_obj.is_file() {
        return Err(format!("Output path is a file: {}", path));
    }
    if !path_obj.exists() {
        std::fs::create_dir_all(path_obj)
            .map_err(|e| format!("Cannot create output directory: {}", e))?;
    }

    Ok(())
}

/// Validate a target culture such as `sv-SE` with unic-langid.
///
/// Generated `.trs` names use the part before the region, so the
/// undetermined language (`und`) is rejected.
pub fn validate_language_code(lang: &str) -> Result<(), String> {
    if lang.is_empty() {
        return Err("Language code cannot be empty".to_string());
    }

    match lang.parse::<LanguageIdentifier>() {
        Ok(lang_id) => {
            let language = lang_id.language.as_str();
            if language.is_empty() || language == "und" {
                return Err(format!(
                    "Invalid language code format: {}. Expected a culture such as sv-SE",
                    lang
                ));
            }
            Ok(())
        }
        Err(_) => Err(format!(
            "Invalid language code format: {}. Expected a culture such as sv-SE",
            lang
        )),
    }
}

/// Validate a complete validation context
pub fn validate_context(context: &ValidationContext) -> Result<(), String> {
    for (i, input) in context.input_files.iter().enumerate() {
        validate_file_path(input)
            .map_err(|e| format!("Input file {} validation failed: {}", i + 1, e))?;
    }

    if let Some(ref output) = context.output_dir {
        validate_output_dir(output).map_err(|e| format!("Output validation failed: {}", e))?;
    }

    for lang in &context.language_codes {
        validate_language_code(lang)
            .map_err(|e| format!("Language code validation failed: {}", e))?;
    }

    Ok(())
}
