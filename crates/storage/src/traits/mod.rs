//! Storage trait abstraction
//!
//! Defines async domain traits for the two sides of the migration, so the
//! pipeline can run against the SQL stores or in-memory doubles.

pub mod typo;
pub mod wordpress;

pub use typo::TypoStore;
pub use wordpress::{CommentStore, PostStore, SchemaStore, TermStore, WordPressStore};
