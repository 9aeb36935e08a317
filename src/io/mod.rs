//! Input/output operations and error handling

/// Command-line interface for running layouts
pub mod cli;
/// Engine constants and runtime configuration defaults
pub mod configuration;
/// Error types and the crate result alias
pub mod error;
/// Text layout parsing
pub mod layout;
/// Progress display for solve runs
pub mod progress;
/// PNG export of board snapshots
pub mod visualization;
