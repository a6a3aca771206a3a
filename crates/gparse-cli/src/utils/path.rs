use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

const XYZ_EXTENSION: &str = "xyz";

/// Numbered names `<stem>0.xyz` through `<stem>99.xyz` are tried before giving up.
pub const MAX_VERSIONS: usize = 100;

pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default();
    path.with_file_name(format!("{}{}", stem.to_string_lossy(), suffix))
}

/// Appends `.xyz` unless the path already ends with it; other extensions are kept.
pub fn force_xyz_extension(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == XYZ_EXTENSION) {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(XYZ_EXTENSION);
    PathBuf::from(name)
}

pub fn default_output_path(logfile: &Path) -> PathBuf {
    logfile.with_extension(XYZ_EXTENSION)
}

/// Chooses where the trajectory is written.
///
/// Without clobbering, an existing file is never replaced: a version number is inserted
/// before the extension instead (`run.xyz` → `run0.xyz` → `run1.xyz` …).
pub fn resolve_output_path(logfile: &Path, outfile: Option<&Path>, clobber: bool) -> Result<PathBuf> {
    let base = match outfile {
        Some(path) => force_xyz_extension(path),
        None => default_output_path(logfile),
    };

    if clobber || !base.exists() {
        return Ok(base);
    }

    for version in 0..MAX_VERSIONS {
        let candidate = with_suffix(&base, &format!("{}.{}", version, XYZ_EXTENSION));
        if !candidate.exists() {
            debug!("{:?} exists; writing to {:?} instead.", base, candidate);
            return Ok(candidate);
        }
    }

    Err(CliError::TooManyVersions {
        path: base,
        attempts: MAX_VERSIONS,
    })
}
