//! Command-line argument definitions for the MSCI index file reader
//!
//! This module defines the CLI interface using the clap derive API: the
//! `convert` and `inspect` subcommands, their shared reader options, and
//! per-command validation.

use crate::config::ReadOptions;
use crate::constants::DEFAULT_DELIMITER;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the MSCI index file reader
///
/// Reads MSCI daily index data files in the vendor's custom line-oriented
/// format and converts them into typed tabular output.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "msci-reader",
    version,
    about = "Read MSCI custom-format index data files into typed tabular output",
    long_about = "Reads MSCI daily index data files in the vendor's custom line-oriented \
                  format: a self-describing metadata header declaring field names, types, \
                  widths and decimal precision, followed by delimiter-separated data \
                  records. Decoded tables can be written as CSV or JSON."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the index file reader
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert an index data file to CSV or JSON (main command)
    Convert(ConvertArgs),
    /// Report the declared schema and scan statistics of an index data file
    Inspect(InspectArgs),
}

/// Arguments for the convert command (main data conversion)
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input index data file
    #[arg(value_name = "FILE", help = "Input index data file")]
    pub input: PathBuf,

    /// Output file for the converted table
    ///
    /// If not specified, the converted table is written to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for the converted table (stdout if omitted)"
    )]
    pub output: Option<PathBuf>,

    /// Field delimiter for record lines
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "CHAR",
        default_value_t = DEFAULT_DELIMITER,
        help = "Field delimiter for record lines"
    )]
    pub delimiter: char,

    /// Keep all present cells as raw strings
    ///
    /// By default, cells are coerced to their declared types (string,
    /// integer, float, date). This flag skips coercion.
    #[arg(long = "raw", help = "Skip type coercion, keep cells as raw strings")]
    pub raw: bool,

    /// Output format for the converted table
    #[arg(
        long = "format",
        value_enum,
        default_value = "csv",
        help = "Output format for the converted table"
    )]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the inspect command (schema and statistics report)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Input index data file
    #[arg(value_name = "FILE", help = "Input index data file")]
    pub input: PathBuf,

    /// Field delimiter for record lines
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "CHAR",
        default_value_t = DEFAULT_DELIMITER,
        help = "Field delimiter for record lines"
    )]
    pub delimiter: char,

    /// Output format for the report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }

        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input.display()
            )));
        }

        if let Some(output) = &self.output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        if self.format == OutputFormat::Human {
            return Err(Error::configuration(
                "convert writes csv or json; use inspect for a human-readable report"
                    .to_string(),
            ));
        }

        self.read_options().validate()
    }

    /// Reader options derived from the arguments
    pub fn read_options(&self) -> ReadOptions {
        ReadOptions {
            delimiter: self.delimiter,
            parse_values: !self.raw,
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl InspectArgs {
    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }

        if self.format == OutputFormat::Csv {
            return Err(Error::configuration(
                "inspect reports as human or json".to_string(),
            ));
        }

        ReadOptions::with_delimiter(self.delimiter).validate()
    }

    /// Reader options derived from the arguments
    pub fn read_options(&self) -> ReadOptions {
        ReadOptions::with_delimiter(self.delimiter)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
