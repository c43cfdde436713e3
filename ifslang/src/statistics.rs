//! Column counts over a resource tree.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::types::ResourceTree;

/// Aggregate counts of an (unfiltered) resource tree.
///
/// Field names double as the JSON keys reported by the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Statistics {
    pub total_logical_units: usize,
    pub total_views: usize,
    pub total_columns: usize,
    pub custom_columns: usize,
    pub standard_columns: usize,
}

impl Statistics {
    pub fn from_tree(tree: &ResourceTree) -> Self {
        let mut stats = Statistics::default();
        for unit in tree.logical_units.values() {
            stats.total_logical_units += 1;
            for view in unit.views.values() {
                stats.total_views += 1;
                for column in view.columns.values() {
                    stats.total_columns += 1;
                    if column.is_custom {
                        stats.custom_columns += 1;
                    } else {
                        stats.standard_columns += 1;
                    }
                }
            }
        }
        stats
    }
}

impl Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Logical Units: {}", self.total_logical_units)?;
        writeln!(f, "Views: {}", self.total_views)?;
        writeln!(f, "Total Columns: {}", self.total_columns)?;
        writeln!(f, "Custom Columns (C_*): {}", self.custom_columns)?;
        write!(f, "Standard Columns (skipped): {}", self.standard_columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, LogicalUnit, View};

    #[test]
    fn test_counts_every_level() {
        let mut tree = ResourceTree::new("ESSPRO", "Cust");
        tree.add_logical_unit(
            LogicalUnit::new("A", "A", "A")
                .with_view(
                    View::new("V1", "")
                        .with_column(Column::new("C_ONE", "One"))
                        .with_column(Column::new("TWO", "Two")),
                )
                .with_view(View::new("V2", "")),
        );
        tree.add_logical_unit(LogicalUnit::new("B", "B", "B"));

        let stats = tree.statistics();
        assert_eq!(
            stats,
            Statistics {
                total_logical_units: 2,
                total_views: 2,
                total_columns: 2,
                custom_columns: 1,
                standard_columns: 1,
            }
        );
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(ResourceTree::default().statistics(), Statistics::default());
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(Statistics::default()).unwrap();
        for key in [
            "total_logical_units",
            "total_views",
            "total_columns",
            "custom_columns",
            "standard_columns",
        ] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
    }

    #[test]
    fn test_display() {
        let stats = Statistics {
            custom_columns: 3,
            ..Default::default()
        };
        assert!(stats.to_string().contains("Custom Columns (C_*): 3"));
    }
}
