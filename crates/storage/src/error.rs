//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (bad URL, corrupt row, missing
//! generated id) instead of downcasting opaque boxes.

use thiserror::Error;
use typo2wp_core::CoreError;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Connection URL scheme is not one of the supported drivers. Holds the
    /// scheme only, never the credentials.
    #[error("unsupported database scheme {0:?}: expected mysql://, postgres:// or sqlite:")]
    UnsupportedUrl(String),

    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Row data could not be converted into a domain value.
    #[error("data corruption in {context}: {source}")]
    DataCorruption {
        context: String,
        #[source]
        source: CoreError,
    },

    /// A required column was NULL or empty.
    #[error("missing value for {context}")]
    MissingValue { context: String },

    /// The driver did not report the id of a freshly inserted row.
    #[error("no generated id returned for insert into {table}")]
    MissingInsertId { table: String },
}

impl StorageError {
    pub(crate) fn corrupt(context: impl Into<String>, source: CoreError) -> Self {
        Self::DataCorruption { context: context.into(), source }
    }
}
