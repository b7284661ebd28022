//! Shared constants for typo2wp.
//!
//! Values fixed by the Typo and WordPress schemas live here so the storage
//! and service crates agree on them.

/// Default WordPress table prefix.
pub const DEFAULT_TABLE_PREFIX: &str = "wp_";

/// Hours added to Typo local time to obtain the WordPress `*_gmt` columns.
/// Typo stores naive local timestamps with no zone information.
pub const GMT_OFFSET_HOURS: i64 = 4;

/// Author id written on every migrated post unless overridden.
pub const DEFAULT_POST_AUTHOR: i64 = 1;

/// Separator WordPress uses between the teaser and the rest of a post.
pub const MORE_SEPARATOR: &str = "\n\n<!--more-->\n\n";

/// Markup used for articles whose text filter could not be resolved.
pub const DEFAULT_MARKUP: &str = "markdown";

/// Filter used for articles whose text filter could not be resolved.
pub const DEFAULT_FILTER: &str = "smartypants";

/// Filter name recorded when a text filter has no active filter.
pub const NO_FILTER: &str = "none";

/// Legacy Typo markup names and their current Text Control equivalents.
pub const MARKUP_RENAMES: &[(&str, &str)] = &[("textile", "textile2")];

/// Page template metadata written for every page.
pub const PAGE_TEMPLATE_META_KEY: &str = "_wp_page_template";
pub const PAGE_TEMPLATE_META_VALUE: &str = "default";

/// Text Control metadata keys recording an article's markup and filter.
pub const POST_FORMAT_META_KEY: &str = "_tc_post_format";
pub const POST_ENCODING_META_KEY: &str = "_tc_post_encoding";

/// Connection pool size. The migration is strictly sequential; a single
/// connection keeps every write visible to the following lookup.
pub const POOL_MAX_CONNECTIONS: u32 = 1;

/// Connection pool: acquire timeout in seconds.
pub const POOL_ACQUIRE_TIMEOUT_SECS: u64 = 30;
