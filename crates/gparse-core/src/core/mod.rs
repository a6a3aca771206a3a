//! # Core Module
//!
//! Fundamental building blocks for reading Gaussian output and writing trajectories.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, frames, step counters and the
//!   periodic table lookup
//! - **File I/O** ([`io`]) - The single-pass Gaussian log reader and the XYZ writer
//! - **Utilities** ([`utils`]) - Numeric helpers for Fortran-style output

pub mod io;
pub mod models;
pub mod utils;
