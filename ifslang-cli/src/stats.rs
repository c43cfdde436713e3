use ifslang::{Codec, Statistics};
use serde_json::json;

use crate::validation::validate_file_path;

pub fn print_stats(codec: &Codec, json_output: bool) -> Result<(), String> {
    let stats: Statistics = codec.statistics();
    let custom = codec.custom.statistics();

    if json_output {
        let body = json!({
            "module": codec.module(),
            "layer": codec.layer(),
            "statistics": stats,
            "custom": {
                "logical_units": custom.total_logical_units,
                "views": custom.total_views,
                "labels": codec.custom_labels().len(),
            },
        });
        let text = serde_json::to_string_pretty(&body)
            .map_err(|e| format!("Failed to serialize statistics: {}", e))?;
        println!("{}", text);
        return Ok(());
    }

    println!("=== Stats ===");
    println!("Module: {}", codec.module());
    println!("Layer: {}", codec.layer());
    println!("Logical Units: {}", stats.total_logical_units);
    println!("Views: {}", stats.total_views);
    println!("Total Columns: {}", stats.total_columns);
    println!("Custom Columns (C_*): {}", stats.custom_columns);
    println!("Standard Columns: {}", stats.standard_columns);
    println!(
        "\nTo generate: {} logical units, {} views, {} unique labels",
        custom.total_logical_units,
        custom.total_views,
        codec.custom_labels().len()
    );
    Ok(())
}

pub fn run_stats_command(xml: String, json_output: bool) -> Result<(), String> {
    validate_file_path(&xml)?;
    let codec = Codec::read_export(&xml).map_err(|e| format!("Failed to parse {}: {}", xml, e))?;
    print_stats(&codec, json_output)
}
