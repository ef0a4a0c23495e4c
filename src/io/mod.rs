//! Input/output operations and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Pipeline constants and runtime configuration defaults
pub mod configuration;
/// Error types for pipeline and export operations
pub mod error;
/// Export of rendered artifacts to the filesystem
pub mod export;
/// Batch progress display
pub mod progress;
