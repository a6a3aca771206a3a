use gparse::core::io::gaussian::Orientation;

pub struct DefaultsConfig {
    pub scan: bool,
    pub all: bool,
    pub energy: bool,
    pub last_frame: bool,
    pub clobber: bool,
    pub orientation: Orientation,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            scan: false,
            all: false,
            energy: true,
            last_frame: false,
            clobber: true,
            orientation: Orientation::Input,
        }
    }
}
