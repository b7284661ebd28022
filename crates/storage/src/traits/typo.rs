use async_trait::async_trait;
use typo2wp_core::{Article, Category, Comment, Page, Tag, TextFilter, Trackback};

use crate::error::StorageError;

/// Read-only access to a Typo blog database.
#[async_trait]
pub trait TypoStore: Send + Sync {
    /// All categories, ordered by `position`.
    async fn categories(&self) -> Result<Vec<Category>, StorageError>;

    async fn tags(&self) -> Result<Vec<Tag>, StorageError>;

    async fn text_filters(&self) -> Result<Vec<TextFilter>, StorageError>;

    /// Rows of `contents` with `type = 'Page'`.
    async fn pages(&self) -> Result<Vec<Page>, StorageError>;

    /// Rows of `contents` with `type = 'Article'`.
    async fn articles(&self) -> Result<Vec<Article>, StorageError>;

    /// Category ids linked to an article through `categorizations`.
    async fn article_category_ids(&self, article_id: i64) -> Result<Vec<i64>, StorageError>;

    /// Tag ids linked to an article through `articles_tags`.
    async fn article_tag_ids(&self, article_id: i64) -> Result<Vec<i64>, StorageError>;

    /// Rows of `feedback` with `type = 'Comment'`.
    async fn comments(&self) -> Result<Vec<Comment>, StorageError>;

    /// Rows of `feedback` with `type = 'Trackback'`.
    async fn trackbacks(&self) -> Result<Vec<Trackback>, StorageError>;
}
