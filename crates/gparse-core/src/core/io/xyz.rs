use crate::core::io::traits::TrajectoryWriter;
use crate::core::models::element::element_symbol;
use crate::core::models::frame::Frame;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XyzWriteOptions {
    /// Append `, E = <energy>` to the comment line of every record.
    pub include_energy: bool,
}

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Unknown element with atomic number {atomic_number} in frame {frame}")]
    UnknownElement { frame: usize, atomic_number: u8 },
    #[error("Frame {frame} has no reported energy")]
    MissingEnergy { frame: usize },
}

/// Formats a coordinate with five decimals, padding non-negative values with a
/// leading space so the columns of a record line up.
fn format_coordinate(value: f64) -> String {
    if value.is_sign_negative() {
        format!("{:.5}", value)
    } else {
        format!(" {:.5}", value)
    }
}

pub struct XyzFile;

impl TrajectoryWriter for XyzFile {
    type Options = XyzWriteOptions;
    type Error = XyzError;

    fn write_frame(
        frame: &Frame,
        options: &Self::Options,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        // Resolve everything fallible before emitting any line of the record.
        let symbols = frame
            .atoms
            .iter()
            .map(|atom| {
                element_symbol(atom.atomic_number).ok_or(XyzError::UnknownElement {
                    frame: frame.index,
                    atomic_number: atom.atomic_number,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let energy = if options.include_energy {
            Some(
                frame
                    .energy
                    .ok_or(XyzError::MissingEnergy { frame: frame.index })?,
            )
        } else {
            None
        };

        writeln!(writer, "{}", frame.atom_count())?;
        match energy {
            Some(energy) => writeln!(
                writer,
                "i = {:>3}, E = {:>17.12}",
                frame.step.step_index(),
                energy
            )?,
            None => writeln!(writer, "i = {:>3}", frame.step.step_index())?,
        }

        for (atom, symbol) in frame.atoms.iter().zip(symbols) {
            writeln!(
                writer,
                " {}\t\t\t{}  {}  {}",
                symbol,
                format_coordinate(atom.position.x),
                format_coordinate(atom.position.y),
                format_coordinate(atom.position.z)
            )?;
        }
        Ok(())
    }
}
