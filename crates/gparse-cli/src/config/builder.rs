use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::AppConfig;
use crate::cli::Cli;
use crate::error::{CliError, Result};
use gparse::core::io::gaussian::{EnergySource, Orientation, PostHfMethod};
use gparse::engine::config::{ConversionConfigBuilder, SelectionPolicy};
use gparse::engine::error::EngineError;
use tracing::debug;

/// Merges command-line flags, the optional config file and built-in defaults, in that
/// order of precedence.
///
/// Option values are validated here, before any log file is opened.
pub fn build_config(cli: &Cli) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    let scan = cli.scan || file_config.scan.unwrap_or(defaults.scan);
    let all = cli.all || file_config.all.unwrap_or(defaults.all);
    let last_frame = cli.last_frame || file_config.last_frame.unwrap_or(defaults.last_frame);
    let energy_enabled = !cli.no_energy && file_config.energy.unwrap_or(defaults.energy);
    let clobber = !cli.no_clobber && file_config.clobber.unwrap_or(defaults.clobber);

    let post_hf = cli
        .post_hartree_fock
        .as_deref()
        .or(file_config.post_hartree_fock.as_deref())
        .map(str::parse::<PostHfMethod>)
        .transpose()
        .map_err(EngineError::from)?;

    let orientation = match cli.orientation.as_deref() {
        Some(value) => value.parse::<Orientation>().map_err(EngineError::from)?,
        None => file_config.orientation.unwrap_or(defaults.orientation),
    };

    let energy = match (energy_enabled, post_hf) {
        (false, _) => EnergySource::Disabled,
        (true, Some(method)) => EnergySource::PostHartreeFock(method),
        (true, None) => EnergySource::Scf,
    };
    let selection = SelectionPolicy::from_flags(scan, all);
    debug!(
        "Resolved selection {:?}, energy {:?}, orientation {:?}, last frame {}, clobber {}.",
        selection, energy, orientation, last_frame, clobber
    );

    let core_config = ConversionConfigBuilder::new()
        .selection(selection)
        .energy(energy)
        .orientation(orientation)
        .last_frame(last_frame)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: cli.logfile.clone(),
        output_path: cli.outfile.clone(),
        clobber,
        core_config,
    })
}
