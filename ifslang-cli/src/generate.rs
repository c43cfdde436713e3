use std::path::{Path, PathBuf};

use ifslang::{CachingTranslator, Codec, DictionaryTranslator, Error, validate_file};

use crate::config::Config;
use crate::run_log::RunLog;
use crate::validation::{ValidationContext, validate_context};

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub xml: String,
    pub output_dir: Option<String>,
    pub languages: Vec<String>,
    pub dictionary_dir: Option<String>,
    pub config: Option<String>,
    pub skip_validation: bool,
}

/// Files produced by one successful run.
#[derive(Debug, Clone)]
pub struct GeneratedFiles {
    pub definition: PathBuf,
    pub translations: Vec<(String, PathBuf)>,
}

impl GeneratedFiles {
    pub fn all(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.definition.as_path())
            .chain(self.translations.iter().map(|(_, p)| p.as_path()))
    }
}

pub fn run_generate_command(opts: GenerateOptions) -> Result<(), String> {
    let xml = Path::new(&opts.xml);
    let config = Config::load(opts.config.as_deref().map(Path::new))?;
    let languages = config.resolve_languages(&opts.languages);
    let output_dir = config.resolve_output_dir(opts.output_dir.as_deref().map(Path::new), xml);
    let dictionary_dir =
        config.resolve_dictionary_dir(opts.dictionary_dir.as_deref().map(Path::new));

    let mut log = RunLog::in_dir(&output_dir);
    log.info("IFS language file generation - starting");

    let context = languages.iter().fold(
        ValidationContext::new()
            .with_input_file(opts.xml.clone())
            .with_output_dir(output_dir.to_string_lossy()),
        |ctx, lang| ctx.with_language_code(lang.clone()),
    );
    if let Err(e) = validate_context(&context) {
        return Err(abort(&mut log, e));
    }

    let translator = match dictionary_dir {
        Some(dir) => DictionaryTranslator::with_dictionary_dir(dir),
        None => DictionaryTranslator::new(),
    };
    let files = generate(
        &mut log,
        xml,
        &output_dir,
        &languages,
        &CachingTranslator::new(translator),
        opts.skip_validation,
    )
    .map_err(|e| abort(&mut log, e))?;

    log.success("IFS language file generation - completed successfully");
    log.write()?;
    println!("Generated files in: {}", output_dir.display());
    for path in files.all() {
        println!("  {}", path.display());
    }
    println!("{}", log.summary());
    Ok(())
}

/// Records `error` as fatal, flushes the run log and hands the error back.
fn abort(log: &mut RunLog, error: String) -> String {
    log.error(format!("Fatal error: {}", error));
    if let Err(write_err) = log.write() {
        tracing::error!("{}", write_err);
    }
    error
}

/// Parse, filter, write, translate and validate, recording each step in `log`.
pub fn generate(
    log: &mut RunLog,
    xml: &Path,
    output_dir: &Path,
    languages: &[String],
    translator: &CachingTranslator<DictionaryTranslator>,
    skip_validation: bool,
) -> Result<GeneratedFiles, String> {
    log.info(format!("Starting XML parsing: {}", xml.display()));
    let codec = Codec::read_export(xml).map_err(|e| format!("Failed to parse {}: {}", xml.display(), e))?;

    let stats = codec.statistics();
    log.info("XML parsing complete");
    log.info(format!("  Logical Units: {}", stats.total_logical_units));
    log.info(format!("  Views: {}", stats.total_views));
    log.info(format!("  Total Columns: {}", stats.total_columns));
    log.info(format!("  Custom Columns (C_*): {}", stats.custom_columns));
    log.info(format!("  Standard Columns (skipped): {}", stats.standard_columns));

    log.info("Extracting custom fields (C_* prefix only)");
    for column in codec.custom.custom_columns() {
        log.info(format!(
            "Processing custom field: {} -> '{}'",
            column.control, column.label
        ));
    }
    let custom_count = codec.custom.custom_column_count();
    if custom_count == 0 {
        return Err(format!(
            "No custom (C_*) fields found in {}",
            xml.display()
        ));
    }
    log.success(format!("Extracted {} custom fields", custom_count));
    if stats.standard_columns > 0 {
        log.info(format!(
            "Skipped {} standard fields (non-C_* prefix)",
            stats.standard_columns
        ));
    }

    let definition = codec.write_definition(output_dir).map_err(|e| e.to_string())?;
    log.info(format!("Created: {}", definition.display()));

    let label_count = codec.custom_labels().len();
    let mut translations = Vec::with_capacity(languages.len());
    for language in languages {
        log.info(format!(
            "Starting translation to {}: {} fields",
            language, label_count
        ));
        let map = codec
            .translate_labels(translator, language)
            .map_err(|e| format!("Translation to {} failed: {}", language, e))?;
        log.success(format!("Translation to {} complete", language));

        let path = codec
            .write_translation(output_dir, language, &map)
            .map_err(|e| e.to_string())?;
        log.info(format!("Created: {}", path.display()));
        translations.push((language.clone(), path));
    }

    let files = GeneratedFiles {
        definition,
        translations,
    };

    if skip_validation {
        log.warn("Validation skipped");
        return Ok(files);
    }

    for path in files.all() {
        validate_generated(log, path)?;
    }
    log.success("All files validated successfully");

    Ok(files)
}

fn validate_generated(log: &mut RunLog, path: &Path) -> Result<(), String> {
    log.info(format!("Validating: {}", path.display()));
    let report = validate_file(path);
    for warning in &report.warnings {
        log.warn(format!("  {}", warning));
    }
    if !report.errors.is_empty() {
        for error in &report.errors {
            log.error(format!("  {}", error));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        return Err(Error::validation_error(format!("Validation failed for {}", name)).to_string());
    }
    log.success(format!("Validation passed: {}", path.display()));
    Ok(())
}
