//! # Workflows Module
//!
//! High-level entry points that run a complete conversion.
//!
//! - **Conversion Workflow** ([`convert`]) - Reads a Gaussian log, resolves the frames to
//!   keep, and renders them as an XYZ trajectory.

pub mod convert;
