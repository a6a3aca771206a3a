use crate::cli::Cli;
use crate::config::build_config;
use crate::error::Result;
use crate::utils::path::resolve_output_path;
use crate::utils::progress::CliProgressHandler;
use gparse::engine::progress::ProgressReporter;
use gparse::workflows;
use tracing::{info, warn};

pub fn run(cli: &Cli) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app_config = build_config(cli)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = if cli.quiet {
        ProgressReporter::new()
    } else {
        ProgressReporter::with_callback(progress_handler.get_callback())
    };

    info!("Reading Gaussian log {:?}", &app_config.input_path);
    let conversion = workflows::convert::run(
        &app_config.input_path,
        &app_config.core_config,
        &reporter,
    )?;

    if conversion.selection().is_empty() {
        warn!(
            "No geometry blocks were found in {:?}; the output will be empty.",
            &app_config.input_path
        );
    }

    let output_path = resolve_output_path(
        &app_config.input_path,
        app_config.output_path.as_deref(),
        app_config.clobber,
    )?;

    conversion.write_to_path(&output_path, &reporter)?;
    println!("Output written to {}", output_path.display());
    Ok(())
}
