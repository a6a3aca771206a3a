//! Provides input/output functionality for the supported file formats.
//!
//! Gaussian log files are only ever read and XYZ trajectories are only ever written,
//! so the two directions are described by separate traits in [`traits`].

pub mod gaussian;
pub mod traits;
pub mod xyz;
