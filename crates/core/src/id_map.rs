//! Run-scoped id remapping tables.

use std::collections::HashMap;

use crate::text_filter::TextFormat;

/// Maps built by earlier phases and read by later ones. Never persisted.
#[derive(Debug, Default, Clone)]
pub struct IdMaps {
    /// Typo category id → WordPress `term_taxonomy_id`.
    pub categories: HashMap<i64, i64>,
    /// Typo tag id → WordPress `term_taxonomy_id`.
    pub tags: HashMap<i64, i64>,
    /// Typo text filter id → resolved format.
    pub text_filters: HashMap<i64, TextFormat>,
    /// Typo article id → WordPress post `ID`.
    pub articles: HashMap<i64, i64>,
}

impl IdMaps {
    /// Format for an article's text filter, or the markdown/smartypants default.
    #[must_use]
    pub fn text_format(&self, text_filter_id: Option<i64>) -> TextFormat {
        text_filter_id
            .and_then(|id| self.text_filters.get(&id))
            .cloned()
            .unwrap_or_default()
    }

    /// WordPress post for a Typo article, if it was migrated in this run.
    #[must_use]
    pub fn post_for_article(&self, article_id: Option<i64>) -> Option<i64> {
        article_id.and_then(|id| self.articles.get(&id).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_text_filter_uses_default() {
        let maps = IdMaps::default();
        assert_eq!(maps.text_format(Some(3)), TextFormat::new("markdown", "smartypants"));
        assert_eq!(maps.text_format(None), TextFormat::default());
    }

    #[test]
    fn known_text_filter_is_returned() {
        let mut maps = IdMaps::default();
        maps.text_filters.insert(3, TextFormat::new("textile2", "none"));
        assert_eq!(maps.text_format(Some(3)).markup, "textile2");
    }

    #[test]
    fn missing_article_yields_no_post() {
        let mut maps = IdMaps::default();
        maps.articles.insert(10, 42);
        assert_eq!(maps.post_for_article(Some(10)), Some(42));
        assert_eq!(maps.post_for_article(Some(11)), None);
        assert_eq!(maps.post_for_article(None), None);
    }
}
