use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use dataconv::{ConvertOptions, Format};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "convert",
    about = "Convert a JSON, YAML or XML file into another of those formats",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// Input file; format taken from its extension
    #[arg(value_name = "INPUT_FILE", allow_hyphen_values = true)]
    input: PathBuf,
    /// Output file; format taken from its extension
    #[arg(value_name = "OUTPUT_FILE", allow_hyphen_values = true)]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            debug!(kind = ?err.kind(), "rejected arguments");
            return usage();
        }
    };

    match run(&args) {
        Ok(()) => {
            println!(
                "Conversion completed successfully: {} -> {}",
                args.input.display(),
                args.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(error = ?err, "conversion failed");
            println!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    dataconv::convert_file(&args.input, &args.output, &ConvertOptions::default()).with_context(
        || {
            format!(
                "failed to convert {} to {}",
                args.input.display(),
                args.output.display()
            )
        },
    )
}

/// Anything other than exactly two positional arguments is a usage error
fn usage() -> ExitCode {
    let extensions: Vec<&str> = Format::ALL
        .iter()
        .flat_map(|format| format.extensions().iter().copied())
        .collect();
    println!("Usage: convert <input_file> <output_file>");
    println!("Supported extensions: {}", extensions.join(", "));
    ExitCode::FAILURE
}
