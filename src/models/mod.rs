pub mod config;

pub use config::{DitherConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
