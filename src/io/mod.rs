//! Input/output operations: CLI, errors, pacing, progress, and rendering

/// Command-line interface and run orchestration
pub mod cli;
/// Runtime defaults and rendering constants
pub mod configuration;
/// Error types for search and export operations
pub mod error;
/// Board rasterization and PNG export
pub mod image;
/// Wall-clock pacing between observed search steps
pub mod pacing;
/// Live progress display for a running search
pub mod progress;
/// Text rendering of recorded solutions
pub mod report;
/// Frame capture and GIF generation for search animation
pub mod visualization;
