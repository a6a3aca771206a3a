//! # gparse Core Library
//!
//! A library for turning Gaussian log files into multi-frame XYZ trajectories.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so each stage of the conversion can be
//! tested on its own:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Frame`, `StepTuple`,
//!   `Trajectory`), the element symbol table, and the readers/writers for the Gaussian
//!   log and XYZ formats.
//!
//! - **[`engine`]: The Logic Core.** Conversion configuration, frame selection for scan
//!   and non-scan runs, progress reporting, and the engine error type.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into a single
//!   log-to-XYZ conversion that front ends such as the `log2xyz` binary can drive.

pub mod core;
pub mod engine;
pub mod workflows;
