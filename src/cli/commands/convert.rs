//! Convert command implementation
//!
//! Parses an index data file and writes the decoded table as CSV or JSON
//! to a file or stdout, then reports a short summary.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use colored::Colorize;
use tracing::{debug, info};

use super::shared::{render_cell, setup_logging, table_to_json};
use crate::app::models::IndexTable;
use crate::app::services::index_file_parser::{IndexFileParser, ParseResult};
use crate::cli::args::{ConvertArgs, OutputFormat};
use crate::{Error, Result};

/// Convert command runner
pub fn run_convert(args: ConvertArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;

    info!("Starting index file conversion");
    debug!("Convert arguments: {:?}", args);

    args.validate()?;

    let start_time = Instant::now();
    let parser = IndexFileParser::with_options(args.read_options())?;
    let result = parser.parse_file(&args.input)?;

    match args.format {
        OutputFormat::Csv => write_csv(&result.table, args.output.as_deref())?,
        OutputFormat::Json => write_json(&result.table, args.output.as_deref())?,
        OutputFormat::Human => {
            return Err(Error::configuration(
                "convert writes csv or json".to_string(),
            ));
        }
    }

    if !args.quiet {
        print_summary(&args, &result, start_time.elapsed().as_secs_f64());
    }

    Ok(())
}

/// Write the decoded table as CSV
fn write_csv(table: &IndexTable, output: Option<&Path>) -> Result<()> {
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path).map_err(|e| {
            Error::io(format!("Failed to create output file {}", path.display()), e)
        })?),
        None => Box::new(std::io::stdout()),
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(table.column_names())?;
    for index in 0..table.row_count() {
        let row: Vec<String> = table
            .columns()
            .iter()
            .map(|column| render_cell(column.values[index].as_ref()))
            .collect();
        csv_writer.write_record(&row)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Write the decoded table as JSON
fn write_json(table: &IndexTable, output: Option<&Path>) -> Result<()> {
    let rendered = table_to_json(table);

    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                Error::io(format!("Failed to create output file {}", path.display()), e)
            })?;
            serde_json::to_writer_pretty(file, &rendered)?;
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&rendered)?);
        }
    }

    Ok(())
}

/// Print the conversion summary to stderr
fn print_summary(args: &ConvertArgs, result: &ParseResult, elapsed_secs: f64) {
    let destination = match &args.output {
        Some(path) => path.display().to_string(),
        None => "stdout".to_string(),
    };

    eprintln!(
        "{} {} rows x {} columns -> {} in {:.3}s",
        "Converted".green().bold(),
        result.table.row_count(),
        result.table.column_count(),
        destination,
        elapsed_secs
    );
    eprintln!(
        "  {} lines scanned, {} skipped{}",
        result.stats.lines_scanned,
        result.stats.lines_skipped,
        if result.stats.eod_seen {
            ", stopped at EOD marker"
        } else {
            ""
        }
    );
}
