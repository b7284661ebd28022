//! Core types for typo2wp
//!
//! Typo source rows, WordPress destination rows, the run configuration and
//! the pure conversions between them. Shared by the storage and service
//! crates.

mod config;
mod constants;
mod error;
mod id_map;
mod source;
mod target;
mod text_filter;
mod timestamp;
mod transform;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use id_map::*;
pub use source::*;
pub use target::*;
pub use text_filter::*;
pub use timestamp::*;
pub use transform::*;
