use super::config::ConfigError;
use crate::core::io::gaussian::{GaussianLogError, InvalidOptionValue};
use crate::core::io::xyz::XyzError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Cannot open log file '{path}': {source}", path = path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse log: {0}")]
    MalformedLog(#[from] GaussianLogError),

    #[error("Failed to write trajectory: {0}")]
    Write(#[from] XyzError),

    #[error(
        "Calculation is likely a scan: {frames} frames share only {distinct} distinct step numbers. Rerun with the -s/--scan flag."
    )]
    AmbiguousScanInput { frames: usize, distinct: usize },

    #[error("Invalid option: {0}")]
    InvalidOption(#[from] InvalidOptionValue),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
