use typo2wp_core::Taxonomy;
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
    /// Find or create the term and its taxonomy binding.
    ///
    /// Returns the `term_taxonomy_id`, whether or not anything was written.
    pub async fn copy_term(
        &self,
        name: &str,
        slug: &str,
        taxonomy: Taxonomy,
    ) -> Result<i64, MigrationError> {
        tracing::info!("Copying {name} ({slug})");

        let term_id = match self.target.find_term(slug).await? {
            Some(id) => id,
            None => self.target.insert_term(name, slug).await?,
        };
        let term_taxonomy_id = match self.target.find_term_taxonomy(term_id, taxonomy).await? {
            Some(id) => id,
            None => self.target.insert_term_taxonomy(term_id, taxonomy).await?,
        };
        tracing::debug!(term_id, term_taxonomy_id, taxonomy = taxonomy.as_str(), "term ready");
        Ok(term_taxonomy_id)
    }

    pub(super) async fn copy_categories(&mut self) -> Result<(), MigrationError> {
        for category in self.source.categories().await? {
            let tt_id =
                self.copy_term(&category.name, &category.permalink, Taxonomy::Category).await?;
            self.maps.categories.insert(category.id, tt_id);
            self.report.categories += 1;
        }
        Ok(())
    }

    pub(super) async fn copy_tags(&mut self) -> Result<(), MigrationError> {
        for tag in self.source.tags().await? {
            let tt_id = self.copy_term(&tag.display_name, &tag.name, Taxonomy::PostTag).await?;
            self.maps.tags.insert(tag.id, tt_id);
            self.report.tags += 1;
        }
        Ok(())
    }
}
