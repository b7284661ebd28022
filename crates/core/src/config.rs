//! Run configuration, built once from the command line.

use std::fmt;

use crate::constants::{DEFAULT_POST_AUTHOR, DEFAULT_TABLE_PREFIX};
use crate::error::{CoreError, Result};

/// What to do when a page or article already exists in WordPress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Replace the existing row without asking.
    Always,
    /// Leave the existing row alone and skip the item.
    Never,
    /// Ask the operator for every conflicting item.
    #[default]
    Ask,
}

impl OverwritePolicy {
    /// Fixed answer for the non-interactive policies, `None` for `Ask`.
    #[must_use]
    pub const fn fixed_answer(self) -> Option<bool> {
        match self {
            Self::Always => Some(true),
            Self::Never => Some(false),
            Self::Ask => None,
        }
    }
}

/// Validated WordPress table prefix.
///
/// The prefix is spliced into SQL identifiers, so it is restricted to
/// ASCII alphanumerics and underscores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePrefix(String);

impl TablePrefix {
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        if prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            Ok(Self(prefix))
        } else {
            Err(CoreError::InvalidPrefix(prefix))
        }
    }

    /// Full table name for `name`, e.g. `wp_terms`.
    #[must_use]
    pub fn table(&self, name: &str) -> String {
        format!("{}{name}", self.0)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TablePrefix {
    fn default() -> Self {
        Self(DEFAULT_TABLE_PREFIX.to_owned())
    }
}

impl fmt::Display for TablePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable settings shared by every migration phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationConfig {
    pub table_prefix: TablePrefix,
    pub overwrite: OverwritePolicy,
    pub post_author: i64,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            table_prefix: TablePrefix::default(),
            overwrite: OverwritePolicy::default(),
            post_author: DEFAULT_POST_AUTHOR,
        }
    }
}
