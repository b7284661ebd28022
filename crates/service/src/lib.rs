//! Service layer for typo2wp
//!
//! Runs the migration phases in order over a Typo source store and a
//! WordPress destination store.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]
#![allow(clippy::arithmetic_side_effects, reason = "Counters cannot realistically overflow")]

pub mod error;
mod migration_service;
mod prompt;
mod report;

pub use error::MigrationError;
pub use migration_service::{MigrationService, Phase, UpsertOutcome};
pub use prompt::{LinePrompt, OverwritePrompt};
pub use report::{MigrationReport, PhaseCounts};
