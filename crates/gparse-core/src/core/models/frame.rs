use nalgebra::Point3;

/// A single atom of a geometry block.
///
/// Only the atomic number and the Cartesian position survive parsing; the center
/// number and atomic-type columns of the Gaussian table are dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom {
    /// The atomic number as printed by Gaussian.
    pub atomic_number: u8,
    /// The Cartesian coordinates in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    pub fn new(atomic_number: u8, position: Point3<f64>) -> Self {
        Self {
            atomic_number,
            position,
        }
    }
}

/// The integers reported on a Gaussian `Step number` line.
///
/// A regular optimization prints `Step number N out of a maximum of M`, a relaxed
/// scan appends `on scan point P out of Q`. The tuple always holds at least two
/// integers; the second-to-last one is the counter used both for header annotation
/// and for grouping frames by scan point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StepTuple {
    values: Vec<u32>,
}

impl StepTuple {
    /// Wraps the integers of a step line, returning `None` if there are fewer than two.
    pub fn new(values: Vec<u32>) -> Option<Self> {
        if values.len() < 2 {
            None
        } else {
            Some(Self { values })
        }
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// The second-to-last integer: the optimization step of a plain run, or the scan
    /// point of a relaxed scan.
    pub fn step_index(&self) -> u32 {
        self.values[self.values.len() - 2]
    }

    /// The key frames are grouped by during scan resolution.
    pub fn scan_point(&self) -> u32 {
        self.step_index()
    }
}

/// One geometry recorded in the log, together with the metadata reported for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Zero-based position in the log, in discovery order.
    pub index: usize,
    pub atoms: Vec<Atom>,
    pub step: StepTuple,
    /// Present only when energy recording was enabled and the log reported one.
    pub energy: Option<f64>,
}

impl Frame {
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }
}

/// Every frame found in a log, in discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    frames: Vec<Frame>,
}

impl Trajectory {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Step tuples of all frames, in frame order.
    pub fn steps(&self) -> impl Iterator<Item = &StepTuple> {
        self.frames.iter().map(|f| &f.step)
    }
}
