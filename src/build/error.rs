// ABOUTME: Error types for assembling build variables
// ABOUTME: Covers malformed version strings, debug flags, and host introspection failures

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("Invalid debug flag '{0}'. Expected 'y' or 'n'")]
    InvalidDebugFlag(String),

    #[error("Failed to collect platform information: {0}")]
    Platform(String),
}

pub type Result<T> = std::result::Result<T, BuildError>;
