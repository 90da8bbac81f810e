/// Plain-text board loading and saving
pub mod board;
/// Command-line interface
pub mod cli;
/// Defaults and limits
pub mod configuration;
/// Error types
pub mod error;
/// PNG export of boards
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Simulation progress display
pub mod progress;
