use crate::error::{CliError, Result};
use gparse::core::io::gaussian::Orientation;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Defaults read from a `--config` TOML file. Every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub scan: Option<bool>,
    pub all: Option<bool>,
    pub energy: Option<bool>,
    pub post_hartree_fock: Option<String>,
    pub last_frame: Option<bool>,
    pub clobber: Option<bool>,
    pub orientation: Option<Orientation>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn from_file_reads_kebab_case_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log2xyz.toml");
        fs::write(
            &path,
            r#"
            scan = true
            energy = false
            post-hartree-fock = "MP2"
            last-frame = true
            clobber = false
            orientation = "standard"
            "#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        assert_eq!(config.scan, Some(true));
        assert_eq!(config.all, None);
        assert_eq!(config.energy, Some(false));
        assert_eq!(config.post_hartree_fock.as_deref(), Some("MP2"));
        assert_eq!(config.last_frame, Some(true));
        assert_eq!(config.clobber, Some(false));
        assert_eq!(config.orientation, Some(Orientation::Standard));
    }

    #[test]
    fn empty_file_gives_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        fs::write(&path, "").unwrap();
        assert_eq!(FileConfig::from_file(&path).unwrap(), FileConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "frames = 3\n").unwrap();
        assert!(matches!(
            FileConfig::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            FileConfig::from_file(&dir.path().join("absent.toml")),
            Err(CliError::Io(_))
        ));
    }
}
