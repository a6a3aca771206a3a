use crate::core::io::traits::TrajectoryReader;
use crate::core::models::frame::{Atom, Frame, StepTuple, Trajectory};
use crate::core::utils::fortran::fortran_double;
use nalgebra::Point3;
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::io::{self, BufRead};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, trace, warn};

const HEADER_LINES: usize = 4;
const BLOCK_TERMINATOR: &str = "-----";
const GEOMETRY_ROW_COLUMNS: usize = 6;

const STEP_MARKER: &str = "Step number";
const SCF_MARKER: &str = "SCF Done";

const STEP_PATTERN: &str = r"\d+";
const SCF_ENERGY_PATTERN: &str = r"-?\d+\.\d+(?:[DE][+-]?\d+)?";
const FORTRAN_ENERGY_PATTERN: &str = r"-?\d+\.\d+[DE][+-]\d+";

/// An option value that does not name any known choice.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{value}' is not a valid {option}; expected one of: {expected}")]
pub struct InvalidOptionValue {
    pub option: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Which orientation table is treated as the geometry of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// `Input orientation:` blocks, in the frame of the input deck.
    #[default]
    Input,
    /// `Standard orientation:` blocks, in Gaussian's reoriented frame.
    Standard,
}

impl Orientation {
    pub fn marker(self) -> &'static str {
        match self {
            Orientation::Input => "Input orientation",
            Orientation::Standard => "Standard orientation",
        }
    }
}

impl FromStr for Orientation {
    type Err = InvalidOptionValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "input" => Ok(Orientation::Input),
            "standard" => Ok(Orientation::Standard),
            _ => Err(InvalidOptionValue {
                option: "orientation",
                value: s.to_string(),
                expected: "input, standard",
            }),
        }
    }
}

/// Post-Hartree-Fock levels of theory whose energies can be recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostHfMethod {
    Mp2,
    Mp3,
}

impl PostHfMethod {
    /// The tag Gaussian prints in front of the correlated energy.
    pub fn energy_tag(self) -> &'static str {
        match self {
            PostHfMethod::Mp2 => "EUMP2",
            PostHfMethod::Mp3 => "EUMP3",
        }
    }
}

impl fmt::Display for PostHfMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostHfMethod::Mp2 => write!(f, "MP2"),
            PostHfMethod::Mp3 => write!(f, "MP3"),
        }
    }
}

impl FromStr for PostHfMethod {
    type Err = InvalidOptionValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MP2" => Ok(PostHfMethod::Mp2),
            "MP3" => Ok(PostHfMethod::Mp3),
            _ => Err(InvalidOptionValue {
                option: "post-Hartree-Fock method",
                value: s.to_string(),
                expected: "MP2, MP3",
            }),
        }
    }
}

/// Where per-frame energies come from, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnergySource {
    /// Energies are neither parsed nor reported.
    Disabled,
    /// `SCF Done` lines (semiempirical, HF and DFT levels of theory).
    #[default]
    Scf,
    /// Correlated energies printed in Fortran double notation.
    PostHartreeFock(PostHfMethod),
}

impl EnergySource {
    pub fn is_enabled(self) -> bool {
        !matches!(self, EnergySource::Disabled)
    }

    fn marker(self) -> Option<&'static str> {
        match self {
            EnergySource::Disabled => None,
            EnergySource::Scf => Some(SCF_MARKER),
            EnergySource::PostHartreeFock(method) => Some(method.energy_tag()),
        }
    }

    fn pattern(self) -> Option<&'static str> {
        match self {
            EnergySource::Disabled => None,
            EnergySource::Scf => Some(SCF_ENERGY_PATTERN),
            EnergySource::PostHartreeFock(_) => Some(FORTRAN_ENERGY_PATTERN),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GaussianReadOptions {
    pub orientation: Orientation,
    pub energy: EnergySource,
}

#[derive(Debug, Error)]
pub enum GaussianLogError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed log on line {line}: {kind}")]
    Malformed { line: usize, kind: MalformedKind },
    #[error("Found {frames} geometry block(s) but {steps} step number line(s)")]
    StepCountMismatch { frames: usize, steps: usize },
    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedKind {
    #[error("log ends inside the header of a geometry block")]
    TruncatedHeader,
    #[error("log ends before the geometry block terminator")]
    UnterminatedBlock,
    #[error("geometry row must have 6 columns, found {found}")]
    RowWidth { found: usize },
    #[error("invalid atomic number '{value}'")]
    InvalidAtomicNumber { value: String },
    #[error("invalid coordinate '{value}'")]
    InvalidCoordinate { value: String },
    #[error("step number line needs at least two integers, found {found}")]
    ShortStepLine { found: usize },
    #[error("invalid integer '{value}' on step number line")]
    InvalidStepValue { value: String },
    #[error("energy line carries no value matching '{pattern}'")]
    MissingEnergyValue { pattern: &'static str },
    #[error("invalid energy value '{value}'")]
    InvalidEnergy { value: String },
}

fn malformed(line: usize, kind: MalformedKind) -> GaussianLogError {
    GaussianLogError::Malformed { line, kind }
}

/// The categories of log line the scanner reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    GeometryHeader,
    StepNumber,
    Energy,
    Other,
}

/// Classifies log lines and pulls raw fields out of them.
pub struct LineScanner {
    geometry_marker: &'static str,
    energy_marker: Option<&'static str>,
    step_re: Regex,
    energy_re: Option<Regex>,
    energy_pattern: &'static str,
}

impl LineScanner {
    pub fn new(options: &GaussianReadOptions) -> Result<Self, GaussianLogError> {
        let energy_re = options.energy.pattern().map(Regex::new).transpose()?;
        Ok(Self {
            geometry_marker: options.orientation.marker(),
            energy_marker: options.energy.marker(),
            step_re: Regex::new(STEP_PATTERN)?,
            energy_re,
            energy_pattern: options.energy.pattern().unwrap_or_default(),
        })
    }

    /// Geometry markers win over step lines, which win over energy lines. Energy lines
    /// are only recognised when energy recording is enabled.
    pub fn classify(&self, line: &str) -> LineKind {
        if line.contains(self.geometry_marker) {
            LineKind::GeometryHeader
        } else if line.contains(STEP_MARKER) {
            LineKind::StepNumber
        } else if self.energy_marker.is_some_and(|marker| line.contains(marker)) {
            LineKind::Energy
        } else {
            LineKind::Other
        }
    }

    pub fn parse_step_line(&self, line: &str, line_num: usize) -> Result<StepTuple, GaussianLogError> {
        let values = self
            .step_re
            .find_iter(line)
            .map(|m| {
                m.as_str().parse::<u32>().map_err(|_| {
                    malformed(
                        line_num,
                        MalformedKind::InvalidStepValue {
                            value: m.as_str().to_string(),
                        },
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let found = values.len();
        StepTuple::new(values).ok_or_else(|| malformed(line_num, MalformedKind::ShortStepLine { found }))
    }

    /// Takes the last numeric match on the line; Gaussian prints auxiliary numbers
    /// (E2 corrections, SCF cycle counts) before or after the energy on the same line.
    pub fn parse_energy_line(&self, line: &str, line_num: usize) -> Result<f64, GaussianLogError> {
        let Some(energy_re) = &self.energy_re else {
            return Err(malformed(
                line_num,
                MalformedKind::MissingEnergyValue {
                    pattern: self.energy_pattern,
                },
            ));
        };
        let token = energy_re
            .find_iter(line)
            .last()
            .map(|m| m.as_str())
            .ok_or_else(|| {
                malformed(
                    line_num,
                    MalformedKind::MissingEnergyValue {
                        pattern: self.energy_pattern,
                    },
                )
            })?;
        fortran_double(token).map_err(|_| {
            malformed(
                line_num,
                MalformedKind::InvalidEnergy {
                    value: token.to_string(),
                },
            )
        })
    }
}

/// Parses one row of an orientation table.
///
/// Rows read `center  atomic-number  atomic-type  x  y  z`; the center number and
/// atomic type are dropped.
pub fn parse_geometry_row(line: &str, line_num: usize) -> Result<Atom, GaussianLogError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != GEOMETRY_ROW_COLUMNS {
        return Err(malformed(
            line_num,
            MalformedKind::RowWidth {
                found: fields.len(),
            },
        ));
    }

    let atomic_number: u8 = fields[1].parse().map_err(|_| {
        malformed(
            line_num,
            MalformedKind::InvalidAtomicNumber {
                value: fields[1].to_string(),
            },
        )
    })?;

    let coordinate = |value: &str| -> Result<f64, GaussianLogError> {
        value.parse().map_err(|_| {
            malformed(
                line_num,
                MalformedKind::InvalidCoordinate {
                    value: value.to_string(),
                },
            )
        })
    };

    Ok(Atom::new(
        atomic_number,
        Point3::new(
            coordinate(fields[3])?,
            coordinate(fields[4])?,
            coordinate(fields[5])?,
        ),
    ))
}

/// Collects geometry blocks, step tuples and energies in file order and pairs them
/// up into frames once the whole log has been read.
#[derive(Debug, Default)]
pub struct FrameAssembler {
    geometries: Vec<Vec<Atom>>,
    steps: Vec<StepTuple>,
    energies: Vec<f64>,
    record_energy: bool,
}

impl FrameAssembler {
    pub fn new(record_energy: bool) -> Self {
        Self {
            record_energy,
            ..Default::default()
        }
    }

    pub fn push_geometry(&mut self, atoms: Vec<Atom>) {
        debug!(
            "Geometry block {} read with {} atom(s).",
            self.geometries.len(),
            atoms.len()
        );
        self.geometries.push(atoms);
    }

    pub fn push_step(&mut self, step: StepTuple) {
        trace!("Step tuple {:?}", step.values());
        self.steps.push(step);
    }

    pub fn push_energy(&mut self, energy: f64) {
        if self.record_energy {
            trace!("Energy {}", energy);
            self.energies.push(energy);
        }
    }

    pub fn finish(self) -> Result<Trajectory, GaussianLogError> {
        let frame_count = self.geometries.len();
        if self.steps.len() != frame_count {
            return Err(GaussianLogError::StepCountMismatch {
                frames: frame_count,
                steps: self.steps.len(),
            });
        }

        if self.record_energy {
            if self.energies.len() > frame_count {
                warn!(
                    "Found {} energies for {} frame(s); ignoring the trailing {}.",
                    self.energies.len(),
                    frame_count,
                    self.energies.len() - frame_count
                );
            } else if self.energies.len() < frame_count {
                warn!(
                    "Only {} of {} frame(s) have a reported energy.",
                    self.energies.len(),
                    frame_count
                );
            }
        }

        let energies = self.energies;
        let frames = self
            .geometries
            .into_iter()
            .zip(self.steps)
            .enumerate()
            .map(|(index, (atoms, step))| Frame {
                index,
                atoms,
                step,
                energy: energies.get(index).copied(),
            })
            .collect();
        Ok(Trajectory::new(frames))
    }
}

pub struct GaussianLog;

impl TrajectoryReader for GaussianLog {
    type Options = GaussianReadOptions;
    type Error = GaussianLogError;

    fn read_from(
        reader: &mut impl BufRead,
        options: &Self::Options,
    ) -> Result<Trajectory, Self::Error> {
        let scanner = LineScanner::new(options)?;
        let mut assembler = FrameAssembler::new(options.energy.is_enabled());
        let mut lines = reader.lines().enumerate();

        while let Some((line_idx, line_res)) = lines.next() {
            let line = line_res?;
            let line_num = line_idx + 1;

            match scanner.classify(&line) {
                LineKind::GeometryHeader => {
                    for _ in 0..HEADER_LINES {
                        match lines.next() {
                            Some((_, header)) => {
                                header?;
                            }
                            None => return Err(malformed(line_num, MalformedKind::TruncatedHeader)),
                        }
                    }

                    let mut atoms = Vec::new();
                    loop {
                        let Some((row_idx, row_res)) = lines.next() else {
                            return Err(malformed(line_num, MalformedKind::UnterminatedBlock));
                        };
                        let row = row_res?;
                        if row.contains(BLOCK_TERMINATOR) {
                            break;
                        }
                        atoms.push(parse_geometry_row(&row, row_idx + 1)?);
                    }
                    assembler.push_geometry(atoms);
                }
                LineKind::StepNumber => {
                    assembler.push_step(scanner.parse_step_line(&line, line_num)?);
                }
                LineKind::Energy => {
                    assembler.push_energy(scanner.parse_energy_line(&line, line_num)?);
                }
                LineKind::Other => {}
            }
        }

        assembler.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const WATER_BLOCK: &str = "\
                          Input orientation:
 ---------------------------------------------------------------------
 Center     Atomic      Atomic             Coordinates (Angstroms)
 Number     Number       Type             X           Y           Z
 ---------------------------------------------------------------------
      1          8           0        0.000000    0.000000    0.117790
      2          1           0        0.000000    0.755453   -0.471161
      3          1           0        0.000000   -0.755453   -0.471161
 ---------------------------------------------------------------------
";

    fn read(log: &str, options: &GaussianReadOptions) -> Result<Trajectory, GaussianLogError> {
        GaussianLog::read_from(&mut Cursor::new(log), options)
    }

    fn optimization_log(steps: &[&str], energies: &[&str]) -> String {
        let mut log = String::from(" Entering Gaussian System\n");
        for (i, step) in steps.iter().enumerate() {
            log.push_str(WATER_BLOCK);
            if let Some(energy) = energies.get(i) {
                log.push_str(energy);
                log.push('\n');
            }
            log.push_str(step);
            log.push('\n');
        }
        log.push_str(" Normal termination of Gaussian 16\n");
        log
    }

    #[test]
    fn single_block_is_parsed_with_columns_dropped() {
        let log = optimization_log(
            &[" Step number   1 out of a maximum of   20"],
            &[" SCF Done:  E(RB3LYP) =  -76.4089170713     A.U. after   10 cycles"],
        );
        let trajectory = read(&log, &GaussianReadOptions::default()).unwrap();

        assert_eq!(trajectory.len(), 1);
        let frame = &trajectory.frames()[0];
        assert_eq!(frame.index, 0);
        assert_eq!(frame.atoms.len(), 3);
        assert_eq!(frame.atoms[0], Atom::new(8, Point3::new(0.0, 0.0, 0.117790)));
        assert_eq!(frame.atoms[1], Atom::new(1, Point3::new(0.0, 0.755453, -0.471161)));
        assert_eq!(frame.atoms[2], Atom::new(1, Point3::new(0.0, -0.755453, -0.471161)));
        assert_eq!(frame.step.values(), &[1, 20]);
        assert_eq!(frame.energy, Some(-76.4089170713));
    }

    #[test]
    fn log_without_geometry_yields_empty_trajectory() {
        let trajectory = read(" Nothing to see here\n", &GaussianReadOptions::default()).unwrap();
        assert!(trajectory.is_empty());
    }

    #[test]
    fn energies_are_ignored_when_disabled() {
        let log = optimization_log(
            &[" Step number   1 out of a maximum of   20"],
            &[" SCF Done:  E(RHF) =  -75.9853882740     A.U. after    9 cycles"],
        );
        let options = GaussianReadOptions {
            energy: EnergySource::Disabled,
            ..Default::default()
        };
        let trajectory = read(&log, &options).unwrap();
        assert_eq!(trajectory.frames()[0].energy, None);
    }

    #[test]
    fn post_hf_energy_uses_last_fortran_match() {
        let log = optimization_log(
            &[" Step number   1 out of a maximum of   20"],
            &[" E2 =    -0.2012345678D+00 EUMP2 =    -0.76234567890123D+02"],
        );
        let options = GaussianReadOptions {
            energy: EnergySource::PostHartreeFock(PostHfMethod::Mp2),
            ..Default::default()
        };
        let trajectory = read(&log, &options).unwrap();
        let energy = trajectory.frames()[0].energy.unwrap();
        assert!((energy - -76.234567890123).abs() < 1e-9);
    }

    #[test]
    fn scf_lines_do_not_count_in_post_hf_mode() {
        let log = optimization_log(
            &[" Step number   1 out of a maximum of   20"],
            &[" SCF Done:  E(RHF) =  -75.9853882740     A.U. after    9 cycles"],
        );
        let options = GaussianReadOptions {
            energy: EnergySource::PostHartreeFock(PostHfMethod::Mp3),
            ..Default::default()
        };
        let trajectory = read(&log, &options).unwrap();
        assert_eq!(trajectory.frames()[0].energy, None);
    }

    #[test]
    fn scan_step_lines_keep_every_integer() {
        let log = optimization_log(
            &[
                " Step number   1 out of a maximum of   20 on scan point     1 out of    11",
                " Step number   2 out of a maximum of   20 on scan point     1 out of    11",
            ],
            &[],
        );
        let options = GaussianReadOptions {
            energy: EnergySource::Disabled,
            ..Default::default()
        };
        let trajectory = read(&log, &options).unwrap();
        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.frames()[1].step.values(), &[2, 20, 1, 11]);
        assert_eq!(trajectory.frames()[1].step.scan_point(), 1);
    }

    #[test]
    fn standard_orientation_blocks_are_read_when_requested() {
        let log = optimization_log(&[" Step number   1 out of a maximum of   2"], &[])
            .replace("Input orientation", "Standard orientation");
        let input = GaussianReadOptions {
            energy: EnergySource::Disabled,
            ..Default::default()
        };
        assert!(matches!(
            read(&log, &input),
            Err(GaussianLogError::StepCountMismatch { frames: 0, steps: 1 })
        ));

        let standard = GaussianReadOptions {
            orientation: Orientation::Standard,
            energy: EnergySource::Disabled,
        };
        assert_eq!(read(&log, &standard).unwrap().len(), 1);
    }

    #[test]
    fn missing_step_line_is_a_count_mismatch() {
        let log = format!("{WATER_BLOCK}{WATER_BLOCK} Step number   1 out of a maximum of   20\n");
        let err = read(&log, &GaussianReadOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            GaussianLogError::StepCountMismatch { frames: 2, steps: 1 }
        ));
    }

    #[test]
    fn truncated_header_is_malformed() {
        let log = "                          Input orientation:\n ------\n";
        let err = read(log, &GaussianReadOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            GaussianLogError::Malformed {
                line: 1,
                kind: MalformedKind::TruncatedHeader
            }
        ));
    }

    #[test]
    fn unterminated_block_is_malformed() {
        let log: String = WATER_BLOCK.lines().take(7).map(|l| format!("{l}\n")).collect();
        let err = read(&log, &GaussianReadOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            GaussianLogError::Malformed {
                kind: MalformedKind::UnterminatedBlock,
                ..
            }
        ));
    }

    #[test]
    fn short_geometry_row_reports_its_line() {
        let log = WATER_BLOCK.replace("      2          1           0        0.000000", "      2          1");
        let err = read(&log, &GaussianReadOptions::default()).unwrap_err();
        match err {
            GaussianLogError::Malformed { line, kind } => {
                assert_eq!(line, 7);
                assert_eq!(kind, MalformedKind::RowWidth { found: 4 });
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_geometry_row_rejects_bad_numbers() {
        assert!(matches!(
            parse_geometry_row("1 X 0 0.0 0.0 0.0", 3),
            Err(GaussianLogError::Malformed {
                line: 3,
                kind: MalformedKind::InvalidAtomicNumber { .. }
            })
        ));
        assert!(matches!(
            parse_geometry_row("1 6 0 0.0 abc 0.0", 4),
            Err(GaussianLogError::Malformed {
                line: 4,
                kind: MalformedKind::InvalidCoordinate { .. }
            })
        ));
    }

    #[test]
    fn step_line_with_single_integer_is_malformed() {
        let scanner = LineScanner::new(&GaussianReadOptions::default()).unwrap();
        let err = scanner.parse_step_line(" Step number 7", 12).unwrap_err();
        assert!(matches!(
            err,
            GaussianLogError::Malformed {
                line: 12,
                kind: MalformedKind::ShortStepLine { found: 1 }
            }
        ));
    }

    #[test]
    fn energy_marker_without_value_is_malformed() {
        let scanner = LineScanner::new(&GaussianReadOptions::default()).unwrap();
        let err = scanner.parse_energy_line(" SCF Done: no number here", 5).unwrap_err();
        assert!(matches!(
            err,
            GaussianLogError::Malformed {
                line: 5,
                kind: MalformedKind::MissingEnergyValue { .. }
            }
        ));
    }

    #[test]
    fn classify_prefers_geometry_then_step_then_energy() {
        let scanner = LineScanner::new(&GaussianReadOptions::default()).unwrap();
        assert_eq!(scanner.classify(" Input orientation:"), LineKind::GeometryHeader);
        assert_eq!(scanner.classify(" Step number 1 out of 2"), LineKind::StepNumber);
        assert_eq!(scanner.classify(" SCF Done:  E(RHF) = -1.0"), LineKind::Energy);
        assert_eq!(scanner.classify(" Rotational constants"), LineKind::Other);

        let silent = LineScanner::new(&GaussianReadOptions {
            energy: EnergySource::Disabled,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(silent.classify(" SCF Done:  E(RHF) = -1.0"), LineKind::Other);
    }

    #[test]
    fn frames_beyond_reported_energies_have_none() {
        let log = optimization_log(
            &[
                " Step number   1 out of a maximum of   20",
                " Step number   2 out of a maximum of   20",
            ],
            &[" SCF Done:  E(RHF) =  -75.98     A.U. after    9 cycles"],
        );
        let trajectory = read(&log, &GaussianReadOptions::default()).unwrap();
        assert_eq!(trajectory.frames()[0].energy, Some(-75.98));
        assert_eq!(trajectory.frames()[1].energy, None);
    }

    #[test]
    fn scf_energy_keeps_exponent() {
        let scanner = LineScanner::new(&GaussianReadOptions::default()).unwrap();
        let energy = scanner
            .parse_energy_line(
                " SCF Done:  E(RPM6) = -0.285963118370E-01 A.U. after 14 cycles",
                9,
            )
            .unwrap();
        assert!((energy - -0.0285963118370).abs() < 1e-15);
    }

    #[test]
    fn semiempirical_log_records_exponent_energies() {
        let log = optimization_log(
            &[" Step number   1 out of a maximum of   20"],
            &[" SCF Done:  E(RAM1) = -0.118234567890E-01 A.U. after 12 cycles"],
        );
        let trajectory = read(&log, &GaussianReadOptions::default()).unwrap();
        let energy = trajectory.frames()[0].energy.unwrap();
        assert!((energy - -0.0118234567890).abs() < 1e-15);
    }

    #[test]
    fn surplus_energies_are_not_attached_to_frames() {
        let mut log = optimization_log(
            &[
                " Step number   1 out of a maximum of   20",
                " Step number   2 out of a maximum of   20",
            ],
            &[
                " SCF Done:  E(RHF) =  -75.98     A.U. after    9 cycles",
                " SCF Done:  E(RHF) =  -75.99     A.U. after    7 cycles",
            ],
        );
        log.push_str(" SCF Done:  E(RHF) =  -76.01     A.U. after    5 cycles\n");

        let trajectory = read(&log, &GaussianReadOptions::default()).unwrap();
        assert_eq!(trajectory.len(), 2);
        let energies: Vec<Option<f64>> = trajectory.frames().iter().map(|f| f.energy).collect();
        assert_eq!(energies, vec![Some(-75.98), Some(-75.99)]);
    }

    #[test]
    fn option_values_parse_case_insensitively() {
        assert_eq!("mp2".parse::<PostHfMethod>(), Ok(PostHfMethod::Mp2));
        assert_eq!("MP3".parse::<PostHfMethod>(), Ok(PostHfMethod::Mp3));
        assert_eq!("Standard".parse::<Orientation>(), Ok(Orientation::Standard));

        let err = "CCSD".parse::<PostHfMethod>().unwrap_err();
        assert_eq!(err.value, "CCSD");
        assert!(err.to_string().contains("MP2, MP3"));
    }
}
