//! OpenRTB Schema CLI
//!
//! Command-line interface for round-tripping OpenRTB documents and checking
//! fixture directories.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use openrtb_schema::{
    check, read_document, round_trip_document, CheckOptions, DocumentKind, FileStatus, Severity,
    SpecVersion,
};

#[derive(Parser)]
#[command(name = "openrtb-schema")]
#[command(about = "Round-trip OpenRTB Native 1.x and OpenRTB 3.0 documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a document, re-encode it and print the result
    Roundtrip {
        /// Document to round-trip
        file: PathBuf,

        /// Document kind: request, response or body (detected if omitted)
        #[arg(long, value_parser = parse_kind)]
        kind: Option<DocumentKind>,

        /// Spec version: 1.0, 1.1, 1.2-draft, 1.2 or 3.0 (read from `ver` if omitted)
        #[arg(long = "spec-version", value_parser = parse_version)]
        spec_version: Option<SpecVersion>,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Check that every document in a file or directory round-trips unchanged
    Check {
        /// File or directory to check
        path: PathBuf,

        /// Document kind: request, response or body (detected if omitted)
        #[arg(long, value_parser = parse_kind)]
        kind: Option<DocumentKind>,

        /// Spec version: 1.0, 1.1, 1.2-draft, 1.2 or 3.0 (read from `ver` if omitted)
        #[arg(long = "spec-version", value_parser = parse_version)]
        spec_version: Option<SpecVersion>,

        /// Output format: text (default) or json
        #[arg(long, default_value = "text")]
        format: String,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Suppress progress output, only show errors
        #[arg(long, short)]
        quiet: bool,
    },
}

fn parse_kind(s: &str) -> Result<DocumentKind, String> {
    DocumentKind::parse(s).ok_or_else(|| format!("unknown kind '{s}': expected request, response or body"))
}

fn parse_version(s: &str) -> Result<SpecVersion, String> {
    SpecVersion::parse(s)
        .ok_or_else(|| format!("unknown version '{s}': expected 1.0, 1.1, 1.2-draft, 1.2 or 3.0"))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roundtrip {
            file,
            kind,
            spec_version,
            output,
            pretty,
        } => run_roundtrip(&file, options(kind, spec_version), output, pretty),

        Commands::Check {
            path,
            kind,
            spec_version,
            format,
            strict,
            quiet,
        } => run_check(&path, &options(kind, spec_version), &format, strict, quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn options(kind: Option<DocumentKind>, version: Option<SpecVersion>) -> CheckOptions {
    let mut options = CheckOptions::new();
    if let Some(kind) = kind {
        options = options.kind(kind);
    }
    if let Some(version) = version {
        options = options.version(version);
    }
    options
}

fn run_roundtrip(
    file: &Path,
    options: CheckOptions,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<(), u8> {
    let bytes = read_document(file).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let trip = round_trip_document(&bytes, &options).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    if trip.version_defaulted {
        log::warn!(
            "{} has no ver, treated as {} {}",
            file.display(),
            trip.kind(),
            trip.version()
        );
    }

    let encoded = trip.to_bytes(pretty).map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;

    match output {
        Some(path) => {
            std::fs::write(&path, &encoded).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            println!("{}", String::from_utf8_lossy(&encoded));
        }
    }

    Ok(())
}

fn run_check(
    path: &Path,
    options: &CheckOptions,
    format: &str,
    strict: bool,
    quiet: bool,
) -> Result<(), u8> {
    if !path.exists() {
        eprintln!("Error: path not found: {}", path.display());
        return Err(3);
    }

    let result = check(path, options, strict);
    let passed = result.is_ok() && (!strict || result.warnings == 0);

    if format == "json" {
        let json = serde_json::to_string_pretty(&result).map_err(|e| {
            eprintln!("Error serializing output: {}", e);
            2u8
        })?;
        println!("{}", json);
    } else {
        if !quiet {
            println!("Checking {} ...\n", path.display());
        }

        for file_result in &result.results {
            let status_icon = match file_result.status {
                FileStatus::Ok => "\x1b[32m✓\x1b[0m",
                FileStatus::Warning => "\x1b[33m⚠\x1b[0m",
                FileStatus::Error => "\x1b[31m✗\x1b[0m",
            };

            if !quiet || file_result.status != FileStatus::Ok {
                match (file_result.kind, file_result.version) {
                    (Some(kind), Some(version)) => println!(
                        "  {} {} ({} {})",
                        status_icon,
                        file_result.file.display(),
                        kind,
                        version
                    ),
                    _ => println!("  {} {}", status_icon, file_result.file.display()),
                }
            }

            for diag in &file_result.diagnostics {
                let (color, label) = match diag.severity {
                    Severity::Error => ("\x1b[31m", "error"),
                    Severity::Warning => ("\x1b[33m", "warning"),
                };
                if !quiet || diag.severity == Severity::Error {
                    println!(
                        "    {}{}[{}]\x1b[0m: {} - {}",
                        color, label, diag.code, diag.path, diag.message
                    );
                }
            }
        }

        println!();
        if passed {
            println!(
                "\x1b[32m✓ {} files checked, all passed\x1b[0m",
                result.files_checked
            );
        } else {
            println!(
                "\x1b[31m✗ {} files checked: {} passed, {} failed ({} errors, {} warnings)\x1b[0m",
                result.files_checked, result.passed, result.failed, result.errors, result.warnings
            );
        }
    }

    if passed {
        Ok(())
    } else {
        Err(1)
    }
}
