use crate::core::io::gaussian::GaussianLog;
use crate::core::io::traits::{TrajectoryReader, TrajectoryWriter};
use crate::core::io::xyz::{XyzFile, XyzWriteOptions};
use crate::core::models::frame::{Frame, Trajectory};
use crate::engine::config::ConversionConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::selection;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{info, instrument};

/// A parsed log together with the frames chosen for output.
#[derive(Debug, Clone)]
pub struct Conversion {
    trajectory: Trajectory,
    selection: Vec<usize>,
    write_options: XyzWriteOptions,
}

impl Conversion {
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Indices of the retained frames, in output order.
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn selected_frames(&self) -> impl Iterator<Item = &Frame> {
        self.selection
            .iter()
            .filter_map(|&index| self.trajectory.get(index))
    }

    /// Renders every retained frame as an XYZ record.
    pub fn write_to(
        &self,
        writer: &mut impl Write,
        reporter: &ProgressReporter,
    ) -> Result<(), EngineError> {
        reporter.report(Progress::TaskStart {
            total_steps: self.selection.len() as u64,
        });
        for frame in self.selected_frames() {
            XyzFile::write_frame(frame, &self.write_options, writer)?;
            reporter.report(Progress::TaskIncrement);
        }
        reporter.report(Progress::TaskFinish);
        Ok(())
    }

    /// Renders the trajectory in memory and only then creates the output file, so a
    /// failing frame never leaves a partial file behind.
    pub fn write_to_path(
        &self,
        path: &Path,
        reporter: &ProgressReporter,
    ) -> Result<(), EngineError> {
        reporter.report(Progress::PhaseStart {
            name: "Writing trajectory",
        });
        let mut buffer = Vec::new();
        self.write_to(&mut buffer, reporter)?;
        std::fs::write(path, buffer)?;
        reporter.report(Progress::PhaseFinish);

        info!(
            "Wrote {} frame(s) to {}.",
            self.selection.len(),
            path.display()
        );
        Ok(())
    }
}

/// Reads a Gaussian log from disk and resolves the frames to keep.
///
/// # Errors
///
/// Returns [`EngineError::InputNotFound`] if the log cannot be opened, and any error
/// of [`convert`] otherwise.
#[instrument(skip_all, name = "conversion_workflow", fields(log = %log_path.display()))]
pub fn run(
    log_path: &Path,
    config: &ConversionConfig,
    reporter: &ProgressReporter,
) -> Result<Conversion, EngineError> {
    let file = File::open(log_path).map_err(|source| EngineError::InputNotFound {
        path: log_path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    convert(&mut reader, config, reporter)
}

/// Parses a Gaussian log from any buffered reader and resolves the frames to keep.
///
/// # Errors
///
/// Returns [`EngineError::MalformedLog`] for structurally broken logs and
/// [`EngineError::AmbiguousScanInput`] when an undeclared scan is detected.
pub fn convert(
    reader: &mut impl BufRead,
    config: &ConversionConfig,
    reporter: &ProgressReporter,
) -> Result<Conversion, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Scanning log",
    });
    let trajectory = GaussianLog::read_from(reader, &config.read_options())?;
    reporter.report(Progress::PhaseFinish);
    info!("Found {} frame(s) in the log.", trajectory.len());

    reporter.report(Progress::PhaseStart {
        name: "Selecting frames",
    });
    let scan_points: Vec<u32> = trajectory.steps().map(|step| step.scan_point()).collect();
    let selection = selection::resolve(&scan_points, config.selection, config.last_frame)?;
    reporter.report(Progress::PhaseFinish);
    reporter.report(Progress::Message(format!(
        "Keeping {} of {} frame(s)",
        selection.len(),
        trajectory.len()
    )));

    Ok(Conversion {
        trajectory,
        selection,
        write_options: config.write_options(),
    })
}
