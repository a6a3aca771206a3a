use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "log2xyz",
    author = "Luke D Gibson",
    version,
    about = "log2xyz - Extract geometry trajectories and energies from Gaussian log files into multi-frame XYZ files.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Gaussian log file to convert (e.g., "<filename>.log"); output is saved in <filename>.xyz
    #[arg(value_name = "LOGFILE")]
    pub logfile: PathBuf,

    // --- Frame Selection ---
    /// Treat the log as a scan calculation and keep the last frame of each scan point.
    #[arg(short, long)]
    pub scan: bool,

    /// Save all frames, regardless of the calculation being a scan.
    #[arg(short, long)]
    pub all: bool,

    /// Save only the last of the selected structures.
    #[arg(short, long)]
    pub last_frame: bool,

    // --- Energies ---
    /// Turn off energy recording.
    #[arg(long)]
    pub no_energy: bool,

    /// Denotes a post-Hartree-Fock level of theory; the default assumes semiempirical,
    /// HF, or DFT. Valid options are: MP2, MP3.
    #[arg(short = 'p', long = "post-hartree-fock", value_name = "METHOD")]
    pub post_hartree_fock: Option<String>,

    /// Which orientation table to read geometries from: input (default) or standard.
    #[arg(long, value_name = "ORIENTATION")]
    pub orientation: Option<String>,

    // --- Output ---
    /// Output file name with or without the xyz extension; the extension is forced.
    #[arg(short, long, value_name = "PATH")]
    pub outfile: Option<PathBuf>,

    /// Prevent overwriting an existing XYZ file by appending a version number instead.
    #[arg(short = 'c', long)]
    pub no_clobber: bool,

    /// Path to a TOML file providing defaults for the options above.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Logging ---
    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output and progress display
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
