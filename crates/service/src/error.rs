//! Typed error enum for the migration pipeline.
//!
//! Every variant aborts the run. Per-item conditions that merely skip an
//! item are logged instead and never surface here.

use std::io;

use thiserror::Error;
use typo2wp_core::PostType;
use typo2wp_storage::StorageError;

#[derive(Debug, Error)]
pub enum MigrationError {
    /// Source or destination query failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// The prefixed WordPress tables are not there.
    #[error("can't find the WordPress tables ({table} is missing); perhaps the prefix is wrong?")]
    MissingSchema { table: String },

    /// More than one destination row has the same `(post_name, post_type)`.
    #[error(
        "found more than one {} named {slug:?} (ids: {}); aborting",
        .post_type.label(),
        join_ids(.ids)
    )]
    AmbiguousMatch { post_type: PostType, slug: String, ids: Vec<i64> },

    /// Reading the operator's overwrite answer failed.
    #[error("overwrite prompt: {0}")]
    Prompt(#[from] io::Error),
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter().map(i64::to_string).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_match_lists_ids() {
        let err = MigrationError::AmbiguousMatch {
            post_type: PostType::Post,
            slug: "hello".to_owned(),
            ids: vec![4, 9],
        };
        assert_eq!(
            err.to_string(),
            "found more than one article named \"hello\" (ids: 4, 9); aborting"
        );
    }

    #[test]
    fn missing_schema_names_the_table() {
        let err = MigrationError::MissingSchema { table: "blog_terms".to_owned() };
        assert!(err.to_string().contains("blog_terms"));
    }
}
