//! CLI logic for the Arrowsmith converter.
//!
//! This module contains the core CLI logic: load configuration, convert the
//! schema file, write the export.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, OutputFormat};

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use arrowsmith::{ArrowsmithError, Converter, config::AppConfig};

/// Run the Arrowsmith CLI application
///
/// This function converts the input schema into a graph model and writes
/// the requested export to the output file, or to standard output when no
/// output file is given.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ArrowsmithError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Schema syntax and conversion errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), ArrowsmithError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing schema"
    );

    let app_config = apply_overrides(config::load_config(args.config.as_ref())?, args);

    let source = fs::read_to_string(&args.input)?;

    let converter = Converter::new(app_config);
    let model = converter.convert(&source)?;
    let output = converter.export(&model, args.format.into())?;

    match &args.output {
        Some(path) => {
            fs::write(path, output)?;
            info!(output_file = path; "Export written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{output}")?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn apply_overrides(config: AppConfig, args: &Args) -> AppConfig {
    if args.pretty {
        let export = config.export().clone().with_pretty(true);
        config.with_export(export)
    } else {
        config
    }
}
