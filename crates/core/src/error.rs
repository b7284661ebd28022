use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised while validating configuration or decoding Typo values.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid table prefix {0:?}: only ASCII letters, digits and '_' are allowed")]
    InvalidPrefix(String),

    #[error("invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("undecodable filter settings: {0}")]
    FilterSettings(String),
}

pub type Result<T> = StdResult<T, CoreError>;
