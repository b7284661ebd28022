use std::fmt;

use typo2wp_core::{FilterSettingsDecoder, IdMaps, MigrationConfig, YamlFilterSettings};
use typo2wp_storage::traits::{TypoStore, WordPressStore};

use crate::error::MigrationError;
use crate::prompt::OverwritePrompt;
use crate::report::MigrationReport;

mod content;
mod feedback;
mod terms;
mod text_filters;

#[cfg(test)]
mod fakes;

pub use content::UpsertOutcome;

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Categories,
    Tags,
    TextFilters,
    Pages,
    Articles,
    Comments,
    Trackbacks,
}

impl Phase {
    pub const ALL: [Self; 7] = [
        Self::Categories,
        Self::Tags,
        Self::TextFilters,
        Self::Pages,
        Self::Articles,
        Self::Comments,
        Self::Trackbacks,
    ];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Categories => "Copying Categories",
            Self::Tags => "Copying Tags",
            Self::TextFilters => "Processing Text Filters",
            Self::Pages => "Copying Pages",
            Self::Articles => "Copying Articles",
            Self::Comments => "Copying Comments",
            Self::Trackbacks => "Copying Trackbacks",
        })
    }
}

/// One migration run from a Typo store into a WordPress store.
///
/// Phases run strictly in order; the id maps built by the term and article
/// phases are consumed by the ones after them and dropped with the service.
pub struct MigrationService<'a, S, W, P> {
    source: &'a S,
    target: &'a W,
    config: &'a MigrationConfig,
    prompt: P,
    decoder: Box<dyn FilterSettingsDecoder + 'a>,
    maps: IdMaps,
    report: MigrationReport,
}

impl<'a, S, W, P> MigrationService<'a, S, W, P>
where
    S: TypoStore,
    W: WordPressStore,
    P: OverwritePrompt,
{
    #[must_use]
    pub fn new(source: &'a S, target: &'a W, config: &'a MigrationConfig, prompt: P) -> Self {
        Self {
            source,
            target,
            config,
            prompt,
            decoder: Box::new(YamlFilterSettings),
            maps: IdMaps::default(),
            report: MigrationReport::default(),
        }
    }

    /// Replace the decoder used for `text_filters.filters`.
    #[must_use]
    pub fn with_decoder(mut self, decoder: impl FilterSettingsDecoder + 'a) -> Self {
        self.decoder = Box::new(decoder);
        self
    }

    /// Fails with [`MigrationError::MissingSchema`] unless the prefixed
    /// `terms` table exists.
    pub async fn validate_schema(&self) -> Result<(), MigrationError> {
        if self.target.has_terms_table().await? {
            Ok(())
        } else {
            Err(MigrationError::MissingSchema { table: self.target.terms_table() })
        }
    }

    pub async fn run(&mut self) -> Result<MigrationReport, MigrationError> {
        self.run_with(|_| {}).await
    }

    /// Run every phase, calling `on_phase` before each one starts.
    ///
    /// The id maps stay readable through [`Self::maps`] afterwards.
    pub async fn run_with(
        &mut self,
        mut on_phase: impl FnMut(Phase),
    ) -> Result<MigrationReport, MigrationError> {
        for phase in Phase::ALL {
            on_phase(phase);
            tracing::debug!(%phase, "phase started");
            match phase {
                Phase::Categories => self.copy_categories().await?,
                Phase::Tags => self.copy_tags().await?,
                Phase::TextFilters => self.resolve_text_filters().await?,
                Phase::Pages => self.copy_pages().await?,
                Phase::Articles => self.copy_articles().await?,
                Phase::Comments => self.copy_comments().await?,
                Phase::Trackbacks => self.copy_trackbacks().await?,
            }
        }
        tracing::info!(
            articles = self.maps.articles.len(),
            relationships = self.report.relationships_created,
            "migration finished"
        );
        Ok(self.report.clone())
    }

    #[must_use]
    pub const fn maps(&self) -> &IdMaps {
        &self.maps
    }

    #[must_use]
    pub const fn report(&self) -> &MigrationReport {
        &self.report
    }
}
