use gparse::engine::config::ConversionConfig;
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppConfig {
    pub input_path: PathBuf,
    /// Explicit `--outfile`, before the `.xyz` extension is forced.
    pub output_path: Option<PathBuf>,
    pub clobber: bool,
    pub core_config: ConversionConfig,
}
