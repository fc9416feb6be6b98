//! Command-line interface for bundlecat.
//!
//! Expands the given files, directories and glob patterns, drops binary
//! files, and prints everything as fenced blocks (or JSON).

use bundlecat::output::{self, OutputFormat};
use bundlecat::{BinaryDetection, BundleBuilder, BundleOptions, BundlecatError};
use clap::{ArgAction, Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::exit;

/// bundlecat — concatenate files into one fenced document
#[derive(Parser)]
#[command(name = "bundlecat", version, about, long_about = None)]
struct Cli {
    /// Files, directories or glob patterns
    #[arg(required = true, value_name = "SPECIFIER")]
    specifiers: Vec<String>,

    /// Include binary files
    #[arg(long)]
    include_binary: bool,

    /// Exclude binary files (default; --include-binary wins)
    #[arg(long)]
    #[allow(dead_code)]
    exclude_binary: bool,

    /// Binary detection strategy
    #[arg(long, default_value = "heuristic", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Fenced)]
    format: Format,

    /// Indented JSON
    #[arg(short, long)]
    pretty: bool,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// More log output, repeatable (requires the `logging` feature)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Fenced,
    Json,
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "heuristic" => Ok(BinaryDetection::Heuristic),
        "accurate" => Ok(BinaryDetection::Accurate),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn to_options(&self) -> BundleOptions {
        BundleBuilder::new(self.specifiers.iter().cloned())
            .binary_detection(self.binary_detection)
            .include_binary(self.include_binary)
            .build()
    }

    fn output_format(&self) -> OutputFormat {
        match self.format {
            Format::Fenced => OutputFormat::Fenced,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    #[cfg(feature = "logging")]
    init_logging(cli.verbose);
    #[cfg(not(feature = "logging"))]
    let _ = cli.verbose;

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), BundlecatError> {
    let options = cli.to_options();
    let resolution = bundlecat::resolve(&options)?;
    for issue in &resolution.issues {
        eprintln!("Warning: {}", issue);
    }
    let bundle = bundlecat::select(resolution, &options)?;
    if bundle.skipped_binary > 0 {
        eprintln!("Skipped {} binary file(s).", bundle.skipped_binary);
    }

    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).map_err(|e| BundlecatError::Io {
                path: path.clone(),
                source: e,
            })?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let failures = output::write_bundle(&bundle, cli.output_format(), &mut writer, cli.pretty)?;
    for failure in failures {
        eprintln!("Error: {}", failure);
    }
    Ok(())
}
