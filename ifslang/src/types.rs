//! Core types for ifslang.
//! The XML reader decodes into these; the block encoders serialize these.
//!
//! The tree is strictly hierarchical: a [`ResourceTree`] owns its
//! [`LogicalUnit`]s, each unit owns its [`View`]s and each view owns its
//! [`Column`]s. All maps keep insertion order, which is the order blocks are
//! emitted in.

use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::statistics::Statistics;

/// Prefix that marks a column as a customer-specific field.
pub const CUSTOM_PREFIX: &str = "C_";

/// Returns `true` if `control` names a custom field.
pub fn is_custom_control(control: &str) -> bool {
    control.starts_with(CUSTOM_PREFIX)
}

/// Root of a parsed TranslatableResources export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResourceTree {
    /// Module name as declared on the export root (e.g. `ESSPRO`).
    pub module: String,

    /// Customization layer (e.g. `Cust`).
    pub layer: String,

    /// Export format version, if the root declared one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,

    /// Export type attribute of the root, if any.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub export_type: String,

    /// Logical units keyed by their source `ID`.
    #[serde(default)]
    pub logical_units: IndexMap<String, LogicalUnit>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogicalUnit {
    pub id: String,
    /// Identifier written into the `CS:` line.
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub unit_type: String,
    /// Views keyed by their `control`.
    #[serde(default)]
    pub views: IndexMap<String, View>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct View {
    #[serde(default)]
    pub id: String,
    pub control: String,
    #[serde(default)]
    pub label: String,
    /// Columns keyed by their `control`.
    #[serde(default)]
    pub columns: IndexMap<String, Column>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Column {
    #[serde(default)]
    pub id: String,
    pub control: String,
    #[serde(default)]
    pub label: String,
    pub is_custom: bool,
}

impl ResourceTree {
    pub fn new(module: impl Into<String>, layer: impl Into<String>) -> Self {
        ResourceTree {
            module: module.into(),
            layer: layer.into(),
            ..Default::default()
        }
    }

    /// Adds a logical unit keyed by its `id`, replacing any unit with the same key
    /// while keeping its original position.
    pub fn add_logical_unit(&mut self, unit: LogicalUnit) {
        self.logical_units.insert(unit.id.clone(), unit);
    }

    /// Returns a copy that keeps only custom columns.
    ///
    /// Views left without columns are dropped, and so are logical units left
    /// without views. Applying it to an already filtered tree is a no-op.
    pub fn filter_custom(&self) -> ResourceTree {
        let logical_units = self
            .logical_units
            .iter()
            .filter_map(|(id, unit)| {
                let views: IndexMap<String, View> = unit
                    .views
                    .iter()
                    .filter_map(|(view_id, view)| {
                        let columns: IndexMap<String, Column> = view
                            .custom_columns()
                            .map(|c| (c.control.clone(), c.clone()))
                            .collect();
                        if columns.is_empty() {
                            None
                        } else {
                            Some((
                                view_id.clone(),
                                View {
                                    columns,
                                    ..view.clone_without_columns()
                                },
                            ))
                        }
                    })
                    .collect();

                if views.is_empty() {
                    None
                } else {
                    Some((
                        id.clone(),
                        LogicalUnit {
                            views,
                            ..unit.clone_without_views()
                        },
                    ))
                }
            })
            .collect();

        ResourceTree {
            module: self.module.clone(),
            layer: self.layer.clone(),
            version: self.version.clone(),
            export_type: self.export_type.clone(),
            logical_units,
        }
    }

    /// Counts units, views and columns of this tree as it is (unfiltered).
    pub fn statistics(&self) -> Statistics {
        Statistics::from_tree(self)
    }

    /// Iterates over every custom column, in emission order.
    pub fn custom_columns(&self) -> impl Iterator<Item = &Column> {
        self.logical_units
            .values()
            .flat_map(|unit| unit.views.values())
            .flat_map(View::custom_columns)
    }

    pub fn custom_column_count(&self) -> usize {
        self.custom_columns().count()
    }

    /// Sorted, de-duplicated labels of all custom columns.
    ///
    /// This is the batch handed to a translator for every target language.
    pub fn custom_labels(&self) -> Vec<String> {
        self.custom_columns()
            .map(|c| c.label.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.logical_units.is_empty()
    }
}

impl LogicalUnit {
    pub fn new(id: impl Into<String>, name: impl Into<String>, label: impl Into<String>) -> Self {
        LogicalUnit {
            id: id.into(),
            name: name.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    /// Adds a view keyed by its `control`.
    pub fn add_view(&mut self, view: View) {
        self.views.insert(view.control.clone(), view);
    }

    /// Builder-style variant of [`LogicalUnit::add_view`].
    pub fn with_view(mut self, view: View) -> Self {
        self.add_view(view);
        self
    }

    fn clone_without_views(&self) -> Self {
        LogicalUnit {
            id: self.id.clone(),
            name: self.name.clone(),
            label: self.label.clone(),
            unit_type: self.unit_type.clone(),
            views: IndexMap::new(),
        }
    }
}

impl View {
    pub fn new(control: impl Into<String>, label: impl Into<String>) -> Self {
        View {
            control: control.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    /// Adds a column keyed by its `control`.
    pub fn add_column(&mut self, column: Column) {
        self.columns.insert(column.control.clone(), column);
    }

    /// Builder-style variant of [`View::add_column`].
    pub fn with_column(mut self, column: Column) -> Self {
        self.add_column(column);
        self
    }

    pub fn custom_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values().filter(|c| c.is_custom)
    }

    fn clone_without_columns(&self) -> Self {
        View {
            id: self.id.clone(),
            control: self.control.clone(),
            label: self.label.clone(),
            columns: IndexMap::new(),
        }
    }
}

impl Column {
    /// Creates a column, deriving `is_custom` from the `C_` prefix of `control`.
    pub fn new(control: impl Into<String>, label: impl Into<String>) -> Self {
        let control = control.into();
        Column {
            id: String::new(),
            is_custom: is_custom_control(&control),
            control,
            label: label.into(),
        }
    }
}

/// Original label → translated label, for one target language.
///
/// Lookups never fail: a label without an entry translates to itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TranslationMap(HashMap<String, String>);

impl TranslationMap {
    pub fn new() -> Self {
        TranslationMap(HashMap::new())
    }

    pub fn insert(&mut self, original: impl Into<String>, translated: impl Into<String>) {
        self.0.insert(original.into(), translated.into());
    }

    pub fn get(&self, original: &str) -> Option<&str> {
        self.0.get(original).map(String::as_str)
    }

    /// Returns the translation of `original`, or `original` itself when absent.
    pub fn translate<'a>(&'a self, original: &'a str) -> &'a str {
        self.get(original).unwrap_or(original)
    }

    pub fn contains(&self, original: &str) -> bool {
        self.0.contains_key(original)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for TranslationMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        TranslationMap(iter.into_iter().collect())
    }
}

impl Extend<(String, String)> for TranslationMap {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl From<HashMap<String, String>> for TranslationMap {
    fn from(value: HashMap<String, String>) -> Self {
        TranslationMap(value)
    }
}
