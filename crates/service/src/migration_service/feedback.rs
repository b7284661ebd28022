use typo2wp_core::{comment_record, trackback_record};
use typo2wp_storage::traits::{TypoStore, WordPressStore};

use super::MigrationService;
use crate::error::MigrationError;
use crate::prompt::OverwritePrompt;

// Feedback rows have no natural key, so re-running the migration
// duplicates them.
impl<S, W, P> MigrationService<'_, S, W, P>
where
    S: TypoStore,
    W: WordPressStore,
    P: OverwritePrompt,
{
    pub(super) async fn copy_comments(&mut self) -> Result<(), MigrationError> {
        for (idx, comment) in self.source.comments().await?.iter().enumerate() {
            tracing::info!("Copying comment {idx}");
            let post_id = self.maps.post_for_article(comment.article_id);
            if post_id.is_none() {
                tracing::debug!(comment = comment.id, "comment has no migrated article");
                self.report.orphaned_feedback += 1;
            }
            self.target.insert_comment(&comment_record(comment, post_id)).await?;
            self.report.comments += 1;
        }
        Ok(())
    }

    pub(super) async fn copy_trackbacks(&mut self) -> Result<(), MigrationError> {
        for (idx, trackback) in self.source.trackbacks().await?.iter().enumerate() {
            tracing::info!("Copying trackback {idx}");
            let post_id = self.maps.post_for_article(trackback.article_id);
            if post_id.is_none() {
                tracing::debug!(trackback = trackback.id, "trackback has no migrated article");
                self.report.orphaned_feedback += 1;
            }
            self.target.insert_comment(&trackback_record(trackback, post_id)).await?;
            self.report.trackbacks += 1;
        }
        Ok(())
    }
}
