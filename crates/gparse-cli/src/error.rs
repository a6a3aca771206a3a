use gparse::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "Too many versions of '{path}' already exist ({attempts} numbered names tried)",
        path = path.display()
    )]
    TooManyVersions { path: PathBuf, attempts: usize },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
