//! Support for IFS Foundation translation files (`.trs`).
//!
//! A translation file pairs every custom column's original prompt (`P:`) with
//! its prompt in the target language (`A:Prompt^`). `CS:` lines carry two
//! fields only: `CS:<identifier>^LU`.

use super::{
    FileKind,
    block::{BlockWriter, NodeKind},
    header::Header,
};
use crate::{
    traits::Encoder,
    types::{ResourceTree, TranslationMap},
};

/// A translation file ready to be written.
#[derive(Debug, Clone)]
pub struct Format<'a> {
    pub header: Header,
    pub tree: &'a ResourceTree,
    pub translations: &'a TranslationMap,
}

impl<'a> Format<'a> {
    /// `language` is the culture (e.g. `sv-SE`) written into the header.
    pub fn new(tree: &'a ResourceTree, language: &str, translations: &'a TranslationMap) -> Self {
        Format {
            header: Header::new(
                FileKind::Translation,
                &tree.module,
                &tree.layer,
                Some(language.to_string()),
            ),
            tree,
            translations,
        }
    }

    pub fn with_header(mut self, header: Header) -> Self {
        self.header = header;
        self
    }
}

impl Encoder for Format<'_> {
    fn encode(&self) -> String {
        let mut out = self.header.encode();
        out.push_str(&encode_blocks(self.tree, self.translations));
        out
    }
}

/// Renders the block section of a translation file.
///
/// Labels missing from `translations` are written untranslated.
pub fn encode_blocks(tree: &ResourceTree, translations: &TranslationMap) -> String {
    let mut w = BlockWriter::new(FileKind::Translation);
    for unit in tree.logical_units.values() {
        w.open(&unit.name, NodeKind::LogicalUnit);
        for view in unit.views.values() {
            w.open(&view.control, NodeKind::View);
            for column in view.custom_columns() {
                w.open(&column.control, NodeKind::Column);
                w.original(&column.label);
                w.prompt(translations.translate(&column.label));
                w.close();
            }
            w.close();
        }
        w.close();
    }
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, LogicalUnit, View};

    fn test_tree() -> ResourceTree {
        let mut tree = ResourceTree::new("ESSPRO", "Cust");
        tree.add_logical_unit(
            LogicalUnit::new("TestLU", "TestLU", "Test Logical Unit").with_view(
                View::new("TEST_VIEW", "Test View")
                    .with_column(Column::new("C_TEST_FIELD", "Test Field")),
            ),
        );
        tree
    }

    #[test]
    fn test_encode_blocks_translated() {
        let mut map = TranslationMap::new();
        map.insert("Test Field", "Testfält");
        assert_eq!(
            encode_blocks(&test_tree(), &map),
            "CS:TestLU^LU\r\n\tCS:TEST_VIEW^LU\r\n\t\tCS:C_TEST_FIELD^LU\r\n\t\t\tP:Test Field^\r\n\t\t\tA:Prompt^Testfält^\r\n\t\tCE:\r\n\tCE:\r\nCE:\r\n"
        );
    }

    #[test]
    fn test_missing_translation_falls_back() {
        let blocks = encode_blocks(&test_tree(), &TranslationMap::new());
        assert!(blocks.contains("\t\t\tP:Test Field^\r\n\t\t\tA:Prompt^Test Field^\r\n"));
    }

    #[test]
    fn test_header_carries_language() {
        let tree = test_tree();
        let map = TranslationMap::new();
        let text = Format::new(&tree, "sv-SE", &map).encode();
        assert!(text.contains("File Type: IFS Foundation Translation File\r\n"));
        assert!(text.contains("Language: sv\r\nCulture: sv-SE\r\n"));
    }

    #[test]
    fn test_logical_unit_and_view_have_no_prompts() {
        let tree = test_tree();
        let blocks = encode_blocks(&tree, &TranslationMap::new());
        assert!(!blocks.contains("Test Logical Unit"));
        assert!(!blocks.contains("Test View"));
        assert_eq!(blocks.matches("A:Prompt^").count(), 1);
    }
}
