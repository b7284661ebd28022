use typo2wp_core::resolve_text_format;
use typo2wp_storage::traits::{TypoStore, WordPressStore};

use super::MigrationService;
use crate::error::MigrationError;
use crate::prompt::OverwritePrompt;

impl<S, W, P> MigrationService<'_, S, W, P>
where
    S: TypoStore,
    W: WordPressStore,
    P: OverwritePrompt,
{
    pub(super) async fn resolve_text_filters(&mut self) -> Result<(), MigrationError> {
        for text_filter in self.source.text_filters().await? {
            let format = resolve_text_format(
                self.decoder.as_ref(),
                &text_filter.markup,
                text_filter.filters.as_deref(),
            );
            tracing::info!("Found {}, {}", format.markup, format.filter);
            self.maps.text_filters.insert(text_filter.id, format);
            self.report.text_filters += 1;
        }
        Ok(())
    }
}
