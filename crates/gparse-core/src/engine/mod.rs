//! # Engine Module
//!
//! Decides what a conversion extracts and which frames it keeps.
//!
//! - **Configuration** ([`config`]) - The validated switches of a conversion run
//! - **Frame Selection** ([`selection`]) - Scan detection and per-scan-point retention
//! - **Progress** ([`progress`]) - Callback-based progress events for front ends
//! - **Errors** ([`error`]) - The error type surfaced by every workflow

pub mod config;
pub mod error;
pub mod progress;
pub mod selection;
