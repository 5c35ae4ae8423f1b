//! Command implementations for the MSCI index file reader CLI
//!
//! This module contains the main command execution logic and output
//! rendering for the CLI interface. Each command is implemented in its
//! own module.

pub mod convert;
pub mod inspect;
pub mod shared;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for the index file reader
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `convert`: parse an input file and write the decoded table as CSV/JSON
/// - `inspect`: parse an input file and report schema and scan statistics
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Convert(convert_args) => convert::run_convert(convert_args),
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args),
    }
}
