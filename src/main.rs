use clap::Parser;
use msci_reader::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("MSCI Reader - Index Data File Converter");
    println!("=======================================");
    println!();
    println!("Read MSCI daily index data files in the vendor's custom format");
    println!("and convert them into typed CSV or JSON tables.");
    println!();
    println!("USAGE:");
    println!("    msci-reader <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert an index data file to CSV or JSON (main command)");
    println!("    inspect     Report the declared schema and scan statistics");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert a daily index file to CSV on stdout:");
    println!("    msci-reader convert core_dly.txt");
    println!();
    println!("    # Convert to JSON in a file, keeping raw string cells:");
    println!("    msci-reader convert core_dly.txt --format json --raw -o core_dly.json");
    println!();
    println!("    # Show the declared schema of a file:");
    println!("    msci-reader inspect core_dly.txt");
    println!();
    println!("For detailed help on any command, use:");
    println!("    msci-reader <COMMAND> --help");
}
