pub mod analysis;
pub mod indicators;
pub mod window;
