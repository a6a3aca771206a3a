use crate::core::models::frame::{Frame, Trajectory};
use std::error::Error;
use std::io::{self, BufRead, Write};

/// Defines the interface for formats that trajectories are extracted from.
///
/// Readers consume the whole input in one forward pass, because deciding which frames
/// are meaningful requires knowledge of the complete file.
pub trait TrajectoryReader {
    /// Format-specific switches that change what is extracted.
    type Options;

    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads every frame recorded in the input.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    /// * `options` - Extraction options for this format.
    ///
    /// # Return
    ///
    /// Returns all frames in discovery order. An input without any frames yields an
    /// empty trajectory.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is structurally malformed or cannot be read.
    fn read_from(
        reader: &mut impl BufRead,
        options: &Self::Options,
    ) -> Result<Trajectory, Self::Error>;
}

/// Defines the interface for formats that trajectories are written to.
pub trait TrajectoryWriter {
    /// Format-specific switches that change what is written.
    type Options;

    /// The error type for write operations.
    type Error: Error + From<io::Error>;

    /// Writes a single frame record.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be represented in this format or the
    /// underlying writer fails.
    fn write_frame(
        frame: &Frame,
        options: &Self::Options,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Writes several frame records back to back.
    ///
    /// # Errors
    ///
    /// Stops at the first frame that fails to write and returns its error.
    fn write_frames<'a>(
        frames: impl IntoIterator<Item = &'a Frame>,
        options: &Self::Options,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        for frame in frames {
            Self::write_frame(frame, options, writer)?;
        }
        Ok(())
    }
}
