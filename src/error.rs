//! Error types.

use thiserror::Error;

/// Errors raised while building a classifier or loading device patterns.
///
/// Classification itself never fails; these only come out of construction.
#[derive(Error, Debug)]
pub enum Error {
    /// A device pattern did not compile.
    #[error("invalid {category} pattern '{name}': {source}")]
    InvalidPattern {
        /// Table the pattern belongs to (`"mobile"` or `"tablet"`).
        category: &'static str,
        /// Device key the caller gave the pattern.
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("device pattern config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
