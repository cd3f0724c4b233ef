//! file2header CLI - embed a binary file as a C++ `std::array` header.
//!
//! This is the main entry point for the file2header command-line application.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use file2header::prelude::*;
use file2header::{DEFAULT_NAME, NAMESPACE_SENTINEL};

/// file2header - convert a binary file into a C++ header
#[derive(Parser, Debug)]
#[command(name = "file2header")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file
    #[arg(short, long)]
    input: PathBuf,

    /// Output header file
    #[arg(short, long)]
    output: PathBuf,

    /// Variable name of the emitted array
    #[arg(short, long, default_value = DEFAULT_NAME)]
    name: String,

    /// Namespace wrapping the array ("empty" for none)
    #[arg(short, long, default_value = NAMESPACE_SENTINEL)]
    space: String,
}

impl Cli {
    fn header_options(&self) -> HeaderOptions {
        HeaderOptions::from_args(self.name.as_str(), &self.space)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    run(&cli)?;

    Ok(())
}

fn run(cli: &Cli) -> Result<Conversion> {
    log::debug!("Converting: {} -> {}", cli.input.display(), cli.output.display());

    match convert_file(&cli.input, &cli.output, &cli.header_options()) {
        Ok(conversion) => Ok(conversion),
        // Validation messages already name the offending path
        Err(e) if e.is_validation() => Err(e.into()),
        Err(e) => Err(e).with_context(|| {
            format!(
                "Failed to convert {} to {}",
                cli.input.display(),
                cli.output.display()
            )
        }),
    }
}
