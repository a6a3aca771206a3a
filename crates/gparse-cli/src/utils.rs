pub mod path;
pub mod progress;
