//! hive-tabledef - command-line entry point.
//!
//! Reads an import descriptor and prints the Hive statements for its table.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use hive_tabledef::config::{generate, Output};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    // Parse simple command line args.
    let mut descriptor: Option<PathBuf> = None;
    let mut output = Output::Script;
    let mut no_comments = false;
    let mut verbose = false;

    for arg in &args[1..] {
        match arg.as_str() {
            "--create-only" => output = Output::CreateOnly,
            "--load-only" => output = Output::LoadOnly,
            "--no-comments" => no_comments = true,
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => {
                print_help();
                return ExitCode::SUCCESS;
            }
            "--version" => {
                println!("hive-tabledef v{}", env!("CARGO_PKG_VERSION"));
                return ExitCode::SUCCESS;
            }
            arg if !arg.starts_with('-') && descriptor.is_none() => {
                descriptor = Some(PathBuf::from(arg));
            }
            arg => {
                eprintln!("Unknown option: {}", arg);
                return ExitCode::FAILURE;
            }
        }
    }

    init_logging(verbose);

    let Some(path) = descriptor else {
        eprintln!("Error: no descriptor given (see --help)");
        return ExitCode::FAILURE;
    };

    match generate(&path, output, !no_comments) {
        Ok(text) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_help() {
    println!("hive-tabledef - Hive table definitions for imported tables");
    println!();
    println!("Usage: hive-tabledef [OPTIONS] DESCRIPTOR");
    println!();
    println!("Options:");
    println!("  --create-only          Print only the CREATE TABLE statement");
    println!("  --load-only            Print only the LOAD DATA statement");
    println!("  --no-comments          Omit the import timestamp comment");
    println!("  -v, --verbose          Enable debug logging");
    println!("  -h, --help             Show this help message");
    println!("  --version              Show version");
    println!();
    println!("Examples:");
    println!("  hive-tabledef employees.json             Print the full Hive script");
    println!("  hive-tabledef --load-only employees.json Print the LOAD DATA statement");
}
