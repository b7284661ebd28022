//! Typo text-filter settings.
//!
//! A Typo text filter pairs a markup language with a serialized list of
//! post-processing filters. Only the first filter is significant to Text
//! Control, so that is all we keep.

use serde_yaml::Value;

use crate::constants::{DEFAULT_FILTER, DEFAULT_MARKUP, MARKUP_RENAMES, NO_FILTER};
use crate::error::{CoreError, Result};

/// Markup and filter names recorded on a migrated article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFormat {
    pub markup: String,
    pub filter: String,
}

impl TextFormat {
    #[must_use]
    pub fn new(markup: impl Into<String>, filter: impl Into<String>) -> Self {
        Self { markup: markup.into(), filter: filter.into() }
    }
}

impl Default for TextFormat {
    fn default() -> Self {
        Self::new(DEFAULT_MARKUP, DEFAULT_FILTER)
    }
}

/// Decodes the `text_filters.filters` column into the ordered filter names.
pub trait FilterSettingsDecoder {
    fn decode(&self, raw: &str) -> Result<Vec<Option<String>>>;
}

/// Decoder for the YAML that Rails writes for serialized array columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFilterSettings;

impl FilterSettingsDecoder for YamlFilterSettings {
    fn decode(&self, raw: &str) -> Result<Vec<Option<String>>> {
        let value: Value =
            serde_yaml::from_str(raw).map_err(|e| CoreError::FilterSettings(e.to_string()))?;
        match value {
            Value::Null => Ok(Vec::new()),
            Value::Sequence(items) => Ok(items.iter().map(yaml_name).collect()),
            other => Err(CoreError::FilterSettings(format!("expected a list, found {other:?}"))),
        }
    }
}

/// Ruby symbols serialize as `:name`; strip the sigil to get the name.
fn yaml_name(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.strip_prefix(':').unwrap_or(s).to_owned()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Tagged(tagged) => yaml_name(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Current name for a possibly legacy markup name.
#[must_use]
pub fn normalize_markup(markup: &str) -> &str {
    MARKUP_RENAMES
        .iter()
        .find_map(|(legacy, current)| (*legacy == markup).then_some(*current))
        .unwrap_or(markup)
}

/// Resolve a text-filter row into the format recorded on articles.
///
/// Settings that fail to decode are logged and treated as having no filter.
pub fn resolve_text_format(
    decoder: &dyn FilterSettingsDecoder,
    markup: &str,
    filters: Option<&str>,
) -> TextFormat {
    let first = match filters {
        Some(raw) => match decoder.decode(raw) {
            Ok(names) => names.into_iter().next().flatten(),
            Err(e) => {
                tracing::warn!(markup, error = %e, "ignoring undecodable text filter settings");
                None
            },
        },
        None => None,
    };
    TextFormat::new(normalize_markup(markup), first.unwrap_or_else(|| NO_FILTER.to_owned()))
}
