/// Command-line parsing and batch orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// JSON layout export
pub mod export;
/// PNG rendering
pub mod image;
/// Progress display
pub mod progress;
