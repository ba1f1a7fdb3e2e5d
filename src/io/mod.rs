/// Command-line interface and run orchestration
pub mod cli;
/// Constants and runtime configuration
pub mod configuration;
/// Error types for every puzzle operation
pub mod error;
/// Word sources for candidate words
pub mod fetch;
/// Run log files
pub mod log_file;
/// Diagnostic logging setup
pub mod logging;
/// Placement progress display
pub mod progress;
/// Text layout of grids and word lists
pub mod render;
