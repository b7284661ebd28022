use async_trait::async_trait;
use typo2wp_core::{CommentRecord, PostMeta, PostRecord, PostType, Taxonomy};

use crate::error::StorageError;

/// Schema presence checks.
#[async_trait]
pub trait SchemaStore: Send + Sync {
    /// Name of the `terms` table under the configured prefix.
    fn terms_table(&self) -> String;

    /// Whether the prefixed `terms` table exists.
    async fn has_terms_table(&self) -> Result<bool, StorageError>;
}

/// `terms`, `term_taxonomy` and `term_relationships`.
#[async_trait]
pub trait TermStore: Send + Sync {
    /// `term_id` of the term with this slug, if any.
    async fn find_term(&self, slug: &str) -> Result<Option<i64>, StorageError>;

    /// Insert a term. Returns the new `term_id`.
    async fn insert_term(&self, name: &str, slug: &str) -> Result<i64, StorageError>;

    /// `term_taxonomy_id` binding `term_id` to `taxonomy`, if any.
    async fn find_term_taxonomy(
        &self,
        term_id: i64,
        taxonomy: Taxonomy,
    ) -> Result<Option<i64>, StorageError>;

    /// Insert a term-taxonomy row with a zero count. Returns the new id.
    async fn insert_term_taxonomy(
        &self,
        term_id: i64,
        taxonomy: Taxonomy,
    ) -> Result<i64, StorageError>;

    async fn relationship_exists(
        &self,
        object_id: i64,
        term_taxonomy_id: i64,
    ) -> Result<bool, StorageError>;

    async fn insert_relationship(
        &self,
        object_id: i64,
        term_taxonomy_id: i64,
    ) -> Result<(), StorageError>;

    /// Add one to `term_taxonomy.count`.
    async fn increment_term_count(&self, term_taxonomy_id: i64) -> Result<(), StorageError>;
}

/// `posts` and `postmeta`.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Ids of posts matching `(post_name, post_type)`, ascending.
    async fn find_posts(
        &self,
        post_name: &str,
        post_type: PostType,
    ) -> Result<Vec<i64>, StorageError>;

    /// Insert a post. Returns the new `ID`.
    async fn insert_post(&self, post: &PostRecord) -> Result<i64, StorageError>;

    /// Overwrite an existing post in place.
    async fn update_post(&self, post_id: i64, post: &PostRecord) -> Result<(), StorageError>;

    /// Delete all metadata of a post. Returns the number of rows removed.
    async fn delete_post_meta(&self, post_id: i64) -> Result<u64, StorageError>;

    async fn insert_post_meta(&self, post_id: i64, meta: &PostMeta) -> Result<(), StorageError>;
}

/// `comments`.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Insert a comment or trackback. Returns the new `comment_ID`.
    async fn insert_comment(&self, comment: &CommentRecord) -> Result<i64, StorageError>;
}

/// Everything the migration writes to WordPress.
pub trait WordPressStore: SchemaStore + TermStore + PostStore + CommentStore {}

impl<T: SchemaStore + TermStore + PostStore + CommentStore> WordPressStore for T {}
