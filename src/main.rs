use catalog_processor::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Catalog Processor - Part Catalog Dump Converter");
    println!("===============================================");
    println!();
    println!("Convert null-delimited part-catalog dump files into structured");
    println!("CSV tables with one row per catalog entry.");
    println!();
    println!("USAGE:");
    println!("    catalog-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Convert a catalog dump to a CSV table (main command)");
    println!("    inspect     Report token and chunk structure of a dump file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert the default dump file:");
    println!("    catalog-processor process");
    println!();
    println!("    # Convert a specific dump with a custom output path:");
    println!("    catalog-processor process --input dumps/catalog_2024.bin \\");
    println!("                              --output tables/catalog_2024.csv");
    println!();
    println!("    # Show chunk boundaries and classifications for a dump:");
    println!("    catalog-processor inspect --input dumps/catalog_2024.bin --limit 20");
    println!();
    println!("For detailed help on any command, use:");
    println!("    catalog-processor <COMMAND> --help");
}
