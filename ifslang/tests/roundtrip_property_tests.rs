use ifslang::formats::block::{CS_PREFIX, FIELD_SEPARATOR};
use ifslang::formats::{FileKind, LngFormat, TrsFormat};
use ifslang::traits::Encoder;
use ifslang::validator::validate_str;
use ifslang::{Column, LogicalUnit, ResourceTree, TranslationMap, View, validate_file};
use proptest::prelude::*;

fn label_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9 ()%åäöø\r\n]{0,20}")
        .expect("valid label regex")
}

fn control_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("(C_)?[A-Z][A-Z0-9_]{0,12}").expect("valid control regex")
}

fn column_strategy() -> impl Strategy<Value = Column> {
    (control_strategy(), label_strategy()).prop_map(|(control, label)| Column::new(control, label))
}

fn view_strategy() -> impl Strategy<Value = View> {
    (
        control_strategy(),
        label_strategy(),
        prop::collection::vec(column_strategy(), 0..6),
    )
        .prop_map(|(control, label, columns)| {
            columns
                .into_iter()
                .fold(View::new(control, label), View::with_column)
        })
}

fn tree_strategy() -> impl Strategy<Value = ResourceTree> {
    prop::collection::vec(
        (
            "[A-Z][A-Za-z]{0,12}",
            label_strategy(),
            prop::collection::vec(view_strategy(), 0..4),
        ),
        0..5,
    )
    .prop_map(|units| {
        let mut tree = ResourceTree::new("PROJ", "Cust");
        for (name, label, views) in units {
            let unit = views
                .into_iter()
                .fold(LogicalUnit::new(name.clone(), name, label), LogicalUnit::with_view);
            tree.add_logical_unit(unit);
        }
        tree
    })
}

fn translations_for(tree: &ResourceTree) -> TranslationMap {
    tree.custom_labels()
        .into_iter()
        .map(|label| {
            let translated = format!("{} (sv)", label);
            (label, translated)
        })
        .collect()
}

fn cs_field_counts(text: &str) -> Vec<usize> {
    text.split("\r\n")
        .map(str::trim_start)
        .filter(|line| line.starts_with(CS_PREFIX))
        .map(|line| line.split(FIELD_SEPARATOR).count())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn encoded_definition_validates_clean(tree in tree_strategy()) {
        let filtered = tree.filter_custom();
        prop_assume!(!filtered.is_empty());
        let text = LngFormat::new(&filtered).encode();
        let report = validate_str(&text, FileKind::Definition);
        prop_assert!(report.valid, "{:?}", report.errors);
        prop_assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    }

    #[test]
    fn encoded_translation_validates_clean(tree in tree_strategy()) {
        let filtered = tree.filter_custom();
        prop_assume!(!filtered.is_empty());
        let map = translations_for(&filtered);
        let text = TrsFormat::new(&filtered, "sv-SE", &map).encode();
        let report = validate_str(&text, FileKind::Translation);
        prop_assert!(report.valid, "{:?}", report.errors);
        prop_assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    }

    #[test]
    fn cs_lines_carry_the_kind_field_count(tree in tree_strategy()) {
        let filtered = tree.filter_custom();
        let lng = LngFormat::new(&filtered).encode();
        prop_assert!(cs_field_counts(&lng).iter().all(|&n| n == 5));

        let map = TranslationMap::new();
        let trs = TrsFormat::new(&filtered, "nb-NO", &map).encode();
        prop_assert!(cs_field_counts(&trs).iter().all(|&n| n == 2));
    }

    #[test]
    fn body_lines_never_break(tree in tree_strategy()) {
        let filtered = tree.filter_custom();
        let map = translations_for(&filtered);
        let trs = TrsFormat::new(&filtered, "sv-SE", &map).encode();
        let body = trs.strip_suffix("\r\n").unwrap_or(&trs);
        prop_assert!(body.split("\r\n").all(|line| !line.contains(['\r', '\n'])));
    }

    #[test]
    fn filtering_is_idempotent(tree in tree_strategy()) {
        let once = tree.filter_custom();
        prop_assert_eq!(once.filter_custom(), once.clone());
        prop_assert_eq!(once.custom_column_count(), tree.custom_column_count());
        prop_assert!(once
            .logical_units
            .values()
            .all(|unit| !unit.views.is_empty()
                && unit.views.values().all(|view| !view.columns.is_empty())));
    }

    #[test]
    fn written_files_validate_from_disk(tree in tree_strategy()) {
        let tmp = tempfile::tempdir().map_err(|e| TestCaseError::fail(e.to_string()))?;
        let filtered = tree.filter_custom();
        prop_assume!(!filtered.is_empty());
        let path = tmp.path().join("Proj_LU_LogicalUnit-Cust.lng");
        LngFormat::new(&filtered)
            .write_to(&path)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        let report = validate_file(&path);
        prop_assert!(report.valid, "{:?}", report.errors);
    }
}
