//! Inspect command implementation
//!
//! Parses an index data file and reports the declared schema, row count
//! and scan statistics, human-readable or as JSON.

use colored::Colorize;
use serde_json::json;
use tracing::debug;

use super::shared::setup_logging;
use crate::app::services::index_file_parser::{IndexFileParser, ParseResult};
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::Result;

/// Inspect command runner
pub fn run_inspect(args: InspectArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    debug!("Inspect arguments: {:?}", args);

    args.validate()?;

    let parser = IndexFileParser::with_options(args.read_options())?;
    let result = parser.parse_file(&args.input)?;

    match args.format {
        OutputFormat::Json => print_json_report(&args, &result)?,
        _ => print_human_report(&args, &result),
    }

    Ok(())
}

/// Print the schema report in human-readable form
fn print_human_report(args: &InspectArgs, result: &ParseResult) {
    println!("{}: {}", "File".bold(), args.input.display());
    println!();

    if result.schema.field_count() == 0 {
        println!("No field definitions found");
    } else {
        println!(
            "{:<24} {:<10} {:>6} {:>8}",
            "FIELD".bold(),
            "KIND".bold(),
            "WIDTH".bold(),
            "DECIMALS".bold()
        );
        for field in result.schema.fields() {
            println!(
                "{:<24} {:<10} {:>6} {:>8}",
                field.name, field.kind, field.width, field.decimal_len
            );
        }
    }

    println!();
    println!(
        "{} fields, {} rows",
        result.schema.field_count(),
        result.table.row_count()
    );
    println!(
        "{} lines scanned, {} definition lines, {} skipped, EOD marker: {}",
        result.stats.lines_scanned,
        result.stats.definition_lines,
        result.stats.lines_skipped,
        if result.stats.eod_seen { "yes" } else { "no" }
    );
}

/// Print the schema report as JSON
fn print_json_report(args: &InspectArgs, result: &ParseResult) -> Result<()> {
    let fields: Vec<serde_json::Value> = result
        .schema
        .fields()
        .iter()
        .map(|field| {
            json!({
                "name": field.name,
                "kind": field.kind.to_string(),
                "width": field.width,
                "decimal_len": field.decimal_len,
            })
        })
        .collect();

    let report = json!({
        "file": args.input.display().to_string(),
        "fields": fields,
        "rows": result.table.row_count(),
        "stats": result.stats.clone(),
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
