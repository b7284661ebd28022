//! Storage layer for typo2wp
//!
//! Typo source and WordPress destination stores over `sqlx::Any`, so either
//! side may live in MySQL, PostgreSQL or SQLite.

mod database;
mod dialect;
pub mod error;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
mod row;
#[cfg(test)]
mod tests;
pub mod traits;
mod typo;
mod wordpress;

pub use database::Database;
pub use dialect::Dialect;
pub use error::StorageError;
pub use traits::{
    CommentStore, PostStore, SchemaStore, TermStore, TypoStore, WordPressStore,
};
pub use typo::TypoDb;
pub use wordpress::WordPressDb;
