pub mod element;
pub mod frame;
