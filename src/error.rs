//! Error taxonomy for a word lookup
//!
//! Every failure that can end a lookup is a `LookupError`. Cache failures only
//! appear here for explicit cache commands; during a lookup they are logged and
//! the cache is treated as a miss.

use thiserror::Error;

use crate::cache::CacheError;
use crate::config::ConfigError;
use crate::source::SourceError;

/// Exit status for a word that could not be found
pub const EXIT_NOT_FOUND: i32 = 1;

/// Exit status for usage and configuration problems
pub const EXIT_USAGE: i32 = 2;

/// Exit status for every other failure
pub const EXIT_FAILURE: i32 = 3;

/// Errors that abort a lookup
#[derive(Debug, Error)]
pub enum LookupError {
    /// The source could not be reached or answered with an error status
    #[error(transparent)]
    Transport(#[from] SourceError),

    /// A payload did not have the expected shape
    #[error("Failed to parse response: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// The search returned no usable word
    #[error("Word not found: {0}")]
    NotFound(String),

    /// Homonym selection was attempted on an empty list
    #[error("No words available")]
    NoMatches,

    /// The requested homonym does not exist
    #[error("Homonym {index} not found (have {available})")]
    IndexOutOfRange { index: usize, available: usize },

    /// The cache could not be opened or modified
    #[error("Cache unavailable: {0}")]
    CacheUnavailable(#[from] CacheError),

    /// Required configuration is missing
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl LookupError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LookupError::NotFound(_) => EXIT_NOT_FOUND,
            LookupError::Config(_) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}
