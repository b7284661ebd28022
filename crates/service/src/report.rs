//! End-of-run counts.

use std::fmt;

/// Outcomes of the page or article phase.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PhaseCounts {
    pub inserted: usize,
    pub updated: usize,
    pub skipped: usize,
}

impl PhaseCounts {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.inserted + self.updated + self.skipped
    }
}

impl fmt::Display for PhaseCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} inserted, {} updated, {} skipped",
            self.inserted, self.updated, self.skipped
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub categories: usize,
    pub tags: usize,
    pub text_filters: usize,
    pub pages: PhaseCounts,
    pub articles: PhaseCounts,
    /// Relationship rows written; each one bumped a term count.
    pub relationships_created: usize,
    /// Links that were already present in WordPress.
    pub relationships_existing: usize,
    /// Links to a category or tag that was never copied.
    pub unmapped_links: usize,
    pub comments: usize,
    pub trackbacks: usize,
    /// Comments and trackbacks written without a post.
    pub orphaned_feedback: usize,
}

impl fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Categories:    {}", self.categories)?;
        writeln!(f, "Tags:          {}", self.tags)?;
        writeln!(f, "Text filters:  {}", self.text_filters)?;
        writeln!(f, "Pages:         {}", self.pages)?;
        writeln!(f, "Articles:      {}", self.articles)?;
        writeln!(
            f,
            "Relationships: {} created, {} already present, {} unmapped",
            self.relationships_created, self.relationships_existing, self.unmapped_links
        )?;
        writeln!(f, "Comments:      {}", self.comments)?;
        writeln!(f, "Trackbacks:    {}", self.trackbacks)?;
        write!(f, "Orphaned:      {}", self.orphaned_feedback)
    }
}
