use typo2wp_core::{
    PostMeta, PostRecord, PostType, Taxonomy, article_meta, article_record, page_meta,
    page_record,
};
use typo2wp_storage::traits::{TypoStore, WordPressStore};

use super::MigrationService;
use crate::error::MigrationError;
use crate::prompt::OverwritePrompt;
use crate::report::PhaseCounts;

/// What happened to one page or article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted(i64),
    Updated(i64),
    /// An existing row was kept.
    Skipped,
}

impl UpsertOutcome {
    #[must_use]
    pub const fn post_id(self) -> Option<i64> {
        match self {
            Self::Inserted(id) | Self::Updated(id) => Some(id),
            Self::Skipped => None,
        }
    }

    fn tally(self, counts: &mut PhaseCounts) {
        match self {
            Self::Inserted(_) => counts.inserted += 1,
            Self::Updated(_) => counts.updated += 1,
            Self::Skipped => counts.skipped += 1,
        }
    }
}

const fn question(post_type: PostType) -> &'static str {
    match post_type {
        PostType::Page => "Page already exists, overwrite?",
        PostType::Post => "Article already exists, overwrite?",
    }
}

impl<S, W, P> MigrationService<'_, S, W, P>
where
    S: TypoStore,
    W: WordPressStore,
    P: OverwritePrompt,
{
    /// Insert `post`, or overwrite the single row sharing its
    /// `(post_name, post_type)` when the overwrite policy allows it.
    ///
    /// Metadata is written only for inserted or updated rows.
    pub async fn upsert_post(
        &mut self,
        post: &PostRecord,
        meta: &[PostMeta],
    ) -> Result<UpsertOutcome, MigrationError> {
        let matches = self.target.find_posts(&post.post_name, post.post_type).await?;
        let outcome = match matches.as_slice() {
            [] => UpsertOutcome::Inserted(self.target.insert_post(post).await?),
            [existing] => {
                if !self.should_overwrite(post.post_type)? {
                    tracing::info!("Skipping");
                    return Ok(UpsertOutcome::Skipped);
                }
                let removed = self.target.delete_post_meta(*existing).await?;
                tracing::debug!(post_id = existing, removed, "cleared post meta");
                self.target.update_post(*existing, post).await?;
                UpsertOutcome::Updated(*existing)
            },
            _ => {
                return Err(MigrationError::AmbiguousMatch {
                    post_type: post.post_type,
                    slug: post.post_name.clone(),
                    ids: matches,
                });
            },
        };

        if let Some(post_id) = outcome.post_id() {
            for entry in meta {
                self.target.insert_post_meta(post_id, entry).await?;
            }
        }
        Ok(outcome)
    }

    fn should_overwrite(&mut self, post_type: PostType) -> Result<bool, MigrationError> {
        match self.config.overwrite.fixed_answer() {
            Some(answer) => Ok(answer),
            None => Ok(self.prompt.confirm(question(post_type))?),
        }
    }

    pub(super) async fn copy_pages(&mut self) -> Result<(), MigrationError> {
        let meta = page_meta();
        for page in self.source.pages().await? {
            tracing::info!("Copying {} ({})", page.title, page.name);
            let record = page_record(&page, self.config.post_author);
            let outcome = self.upsert_post(&record, &meta).await?;
            outcome.tally(&mut self.report.pages);
        }
        Ok(())
    }

    pub(super) async fn copy_articles(&mut self) -> Result<(), MigrationError> {
        for article in self.source.articles().await? {
            tracing::info!("Copying {} ({})", article.title, article.permalink);
            let format = self.maps.text_format(article.text_filter_id);
            let record = article_record(&article, self.config.post_author);
            let outcome = self.upsert_post(&record, &article_meta(&format)).await?;
            outcome.tally(&mut self.report.articles);

            let Some(post_id) = outcome.post_id() else {
                continue;
            };
            self.maps.articles.insert(article.id, post_id);

            for category_id in self.source.article_category_ids(article.id).await? {
                self.link_term(post_id, Taxonomy::Category, category_id).await?;
            }
            for tag_id in self.source.article_tag_ids(article.id).await? {
                self.link_term(post_id, Taxonomy::PostTag, tag_id).await?;
            }
        }
        Ok(())
    }

    async fn link_term(
        &mut self,
        post_id: i64,
        taxonomy: Taxonomy,
        source_id: i64,
    ) -> Result<(), MigrationError> {
        let map = match taxonomy {
            Taxonomy::Category => &self.maps.categories,
            Taxonomy::PostTag => &self.maps.tags,
        };
        let Some(&term_taxonomy_id) = map.get(&source_id) else {
            tracing::warn!(
                post_id,
                source_id,
                taxonomy = taxonomy.as_str(),
                "link to unknown term, skipping"
            );
            self.report.unmapped_links += 1;
            return Ok(());
        };
        if self.make_relationship(post_id, term_taxonomy_id).await? {
            self.report.relationships_created += 1;
        } else {
            self.report.relationships_existing += 1;
        }
        Ok(())
    }

    /// Attach a post to a term and bump the term's count.
    ///
    /// Returns `false`, leaving the count alone, when the pair is already linked.
    pub async fn make_relationship(
        &self,
        post_id: i64,
        term_taxonomy_id: i64,
    ) -> Result<bool, MigrationError> {
        if self.target.relationship_exists(post_id, term_taxonomy_id).await? {
            tracing::debug!(post_id, term_taxonomy_id, "relationship already present");
            return Ok(false);
        }
        self.target.insert_relationship(post_id, term_taxonomy_id).await?;
        self.target.increment_term_count(term_taxonomy_id).await?;
        Ok(true)
    }
}
