//! The `Codec` ties the pieces together: it reads an XML export, keeps both
//! the full tree and its custom-only view, and writes the generated
//! definition and translation files next to each other.

use std::path::{Path, PathBuf};

use crate::{
    error::Error,
    formats::{FileKind, LngFormat, TrsFormat},
    naming::{definition_file_name, translation_file_name},
    statistics::Statistics,
    traits::{Encoder, Parser},
    translator::Translator,
    types::{ResourceTree, TranslationMap},
};

/// A parsed export plus its custom-only projection.
#[derive(Debug, Clone)]
pub struct Codec {
    /// Every logical unit, view and column read from the export.
    pub tree: ResourceTree,
    /// Only the custom columns, with empty views and units dropped.
    pub custom: ResourceTree,
}

impl Codec {
    pub fn new(tree: ResourceTree) -> Self {
        let custom = tree.filter_custom();
        Codec { tree, custom }
    }

    /// Reads and filters the XML export at `path`.
    pub fn read_export<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "parsing XML export");
        let tree = ResourceTree::read_from(path)?;
        Ok(Codec::new(tree))
    }

    /// Statistics of the unfiltered tree.
    pub fn statistics(&self) -> Statistics {
        self.tree.statistics()
    }

    pub fn module(&self) -> &str {
        &self.tree.module
    }

    pub fn layer(&self) -> &str {
        &self.tree.layer
    }

    /// Sorted unique labels of the custom columns.
    pub fn custom_labels(&self) -> Vec<String> {
        self.custom.custom_labels()
    }

    pub fn definition_path<P: AsRef<Path>>(&self, dir: P) -> PathBuf {
        dir.as_ref()
            .join(definition_file_name(self.module(), self.layer()))
    }

    pub fn translation_path<P: AsRef<Path>>(&self, dir: P, language: &str) -> PathBuf {
        dir.as_ref()
            .join(translation_file_name(self.module(), self.layer(), language))
    }

    /// Writes the `.lng` file into `dir` and returns its path.
    pub fn write_definition<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, Error> {
        let path = self.definition_path(dir);
        LngFormat::new(&self.custom).write_to(&path)?;
        tracing::info!(path = %path.display(), "generated definition file");
        Ok(path)
    }

    /// Writes the `.trs` file for `language` into `dir` and returns its path.
    pub fn write_translation<P: AsRef<Path>>(
        &self,
        dir: P,
        language: &str,
        translations: &TranslationMap,
    ) -> Result<PathBuf, Error> {
        let path = self.translation_path(dir, language);
        TrsFormat::new(&self.custom, language, translations).write_to(&path)?;
        tracing::info!(path = %path.display(), language, "generated translation file");
        Ok(path)
    }

    /// Sends the custom labels to `translator` in one batch.
    pub fn translate_labels<T: Translator + ?Sized>(
        &self,
        translator: &T,
        language: &str,
    ) -> Result<TranslationMap, Error> {
        let labels = self.custom_labels();
        tracing::info!(
            language,
            backend = translator.name(),
            count = labels.len(),
            "translating labels"
        );
        let map = translator.translate(&labels, language)?;
        tracing::info!(language, count = map.len(), "translation complete");
        Ok(map)
    }
}

/// Infers the generated-file kind from a path's extension.
///
/// # Example
/// ```rust
/// use ifslang::{FileKind, infer_kind_from_extension};
/// assert_eq!(infer_kind_from_extension("a/Proj_LU_LogicalUnit-Cust.lng"), Some(FileKind::Definition));
/// assert_eq!(infer_kind_from_extension("Proj_LU_LogicalUnit-Cust-sv.trs"), Some(FileKind::Translation));
/// assert_eq!(infer_kind_from_extension("export.xml"), None);
/// ```
pub fn infer_kind_from_extension<P: AsRef<Path>>(path: P) -> Option<FileKind> {
    FileKind::from_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{translator::DictionaryTranslator, validator::validate_file};

    const EXPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<TranslationDb module="ESSPRO" layer="Cust" version="1.0" type="Client">
  <TranslatableResource ID="1" name="ActivityEstimate" type="LU">
    <Text>Activity Estimate</Text>
    <Resource ID="2" subtype="View" control="ACTIVITY_ESTIMATE">
      <Text>Activity Estimate View</Text>
      <Resource ID="3" subtype="Column" control="C_ACTUAL_COST"><Text>C Actual Cost</Text></Resource>
      <Resource ID="4" subtype="Column" control="DESCRIPTION"><Text>Description</Text></Resource>
    </Resource>
  </TranslatableResource>
  <TranslatableResource ID="5" name="Standard" type="LU">
    <Text>Standard</Text>
    <Resource ID="6" subtype="View" control="STANDARD">
      <Resource ID="7" subtype="Column" control="NAME"><Text>Name</Text></Resource>
    </Resource>
  </TranslatableResource>
</TranslationDb>"#;

    fn codec() -> Codec {
        Codec::new(ResourceTree::from_str(EXPORT).unwrap())
    }

    #[test]
    fn test_filtered_view() {
        let codec = codec();
        assert_eq!(codec.tree.logical_units.len(), 2);
        assert_eq!(codec.custom.logical_units.len(), 1);
        assert_eq!(codec.custom_labels(), vec!["C Actual Cost".to_string()]);
        let stats = codec.statistics();
        assert_eq!(stats.total_columns, 3);
        assert_eq!(stats.custom_columns, 1);
    }

    #[test]
    fn test_write_and_validate() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let codec = codec();

        let lng = codec.write_definition(&out).unwrap();
        assert_eq!(lng.file_name().unwrap(), "Esspro_LU_LogicalUnit-Cust.lng");
        assert!(validate_file(&lng).valid);

        let map = codec
            .translate_labels(&DictionaryTranslator::new(), "sv-SE")
            .unwrap();
        let trs = codec.write_translation(&out, "sv-SE", &map).unwrap();
        assert_eq!(trs.file_name().unwrap(), "Esspro_LU_LogicalUnit-Cust-sv.trs");
        let report = validate_file(&trs);
        assert!(report.valid, "{:?}", report.errors);

        let text = std::fs::read_to_string(&trs).unwrap();
        assert!(text.contains("\t\t\tP:C Actual Cost^\r\n\t\t\tA:Prompt^Verklig kostnad^\r\n"));
        assert!(!text.contains("DESCRIPTION"));
    }

    #[test]
    fn test_read_export_missing_file() {
        assert!(matches!(
            Codec::read_export("no/such/export.xml"),
            Err(Error::Io(_))
        ));
    }
}
