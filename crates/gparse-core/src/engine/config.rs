use crate::core::io::gaussian::{EnergySource, GaussianReadOptions, Orientation};
use crate::core::io::xyz::XyzWriteOptions;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// How frames are retained before the optional last-frame filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionPolicy {
    /// Keep every frame, but refuse logs whose repeated step numbers suggest an
    /// undeclared scan.
    #[default]
    Auto,
    /// Keep the last frame of each scan point, plus the final frame.
    Scan,
    /// Keep every frame unconditionally.
    All,
}

impl SelectionPolicy {
    /// Combines the command-line style flags; `full` takes precedence over `scan`.
    pub fn from_flags(scan: bool, full: bool) -> Self {
        match (full, scan) {
            (true, _) => SelectionPolicy::All,
            (false, true) => SelectionPolicy::Scan,
            (false, false) => SelectionPolicy::Auto,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionConfig {
    pub selection: SelectionPolicy,
    pub energy: EnergySource,
    pub orientation: Orientation,
    /// Applied after `selection`: keep only the last retained frame.
    pub last_frame: bool,
}

impl ConversionConfig {
    pub fn read_options(&self) -> GaussianReadOptions {
        GaussianReadOptions {
            orientation: self.orientation,
            energy: self.energy,
        }
    }

    pub fn write_options(&self) -> XyzWriteOptions {
        XyzWriteOptions {
            include_energy: self.energy.is_enabled(),
        }
    }
}

#[derive(Default)]
pub struct ConversionConfigBuilder {
    selection: Option<SelectionPolicy>,
    energy: Option<EnergySource>,
    orientation: Option<Orientation>,
    last_frame: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(mut self, policy: SelectionPolicy) -> Self {
        self.selection = Some(policy);
        self
    }
    pub fn energy(mut self, source: EnergySource) -> Self {
        self.energy = Some(source);
        self
    }
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }
    pub fn last_frame(mut self, last_frame: bool) -> Self {
        self.last_frame = Some(last_frame);
        self
    }

    pub fn build(self) -> Result<ConversionConfig, ConfigError> {
        Ok(ConversionConfig {
            selection: self
                .selection
                .ok_or(ConfigError::MissingParameter("selection"))?,
            energy: self.energy.ok_or(ConfigError::MissingParameter("energy"))?,
            orientation: self.orientation.unwrap_or_default(),
            last_frame: self.last_frame.unwrap_or(false),
        })
    }
}
