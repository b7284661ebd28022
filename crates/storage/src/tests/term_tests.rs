#![allow(clippy::unwrap_used)]

use super::create_test_blog;
use crate::fixtures::scalar_i64;
use crate::traits::{SchemaStore, TermStore};
use crate::{Database, StorageError, WordPressDb};
use typo2wp_core::{Taxonomy, TablePrefix};

#[tokio::test]
async fn terms_table_is_detected() {
    let blog = create_test_blog().await;
    assert!(blog.wp.has_terms_table().await.unwrap());
    assert_eq!(blog.wp.terms_table(), "wp_terms");
}

#[tokio::test]
async fn wrong_prefix_has_no_terms_table() {
    let blog = create_test_blog().await;
    let other = WordPressDb::new(blog.db.clone(), TablePrefix::new("blog_").unwrap());
    assert!(!other.has_terms_table().await.unwrap());
}

#[tokio::test]
async fn terms_probe_reports_connection_failure() {
    let blog = create_test_blog().await;
    blog.db.close().await;
    assert!(matches!(blog.wp.has_terms_table().await, Err(StorageError::Database(_))));
}

#[tokio::test]
async fn inserted_term_is_found_by_slug() {
    let blog = create_test_blog().await;
    assert_eq!(blog.wp.find_term("news").await.unwrap(), None);

    let term_id = blog.wp.insert_term("News", "news").await.unwrap();
    assert_eq!(blog.wp.find_term("news").await.unwrap(), Some(term_id));
}

#[tokio::test]
async fn term_taxonomy_is_keyed_by_term_and_taxonomy() {
    let blog = create_test_blog().await;
    let term_id = blog.wp.insert_term("Rust", "rust").await.unwrap();
    let category = blog.wp.insert_term_taxonomy(term_id, Taxonomy::Category).await.unwrap();

    assert_eq!(
        blog.wp.find_term_taxonomy(term_id, Taxonomy::Category).await.unwrap(),
        Some(category)
    );
    assert_eq!(blog.wp.find_term_taxonomy(term_id, Taxonomy::PostTag).await.unwrap(), None);

    let tag = blog.wp.insert_term_taxonomy(term_id, Taxonomy::PostTag).await.unwrap();
    assert_ne!(tag, category);
    let count = count_where(&blog.db, "wp_term_taxonomy", &format!("term_id = {term_id}")).await;
    assert_eq!(count, 2);
}

#[tokio::test]
async fn relationship_insert_and_count() {
    let blog = create_test_blog().await;
    let term_id = blog.wp.insert_term("News", "news").await.unwrap();
    let tt_id = blog.wp.insert_term_taxonomy(term_id, Taxonomy::Category).await.unwrap();

    assert!(!blog.wp.relationship_exists(5, tt_id).await.unwrap());
    blog.wp.insert_relationship(5, tt_id).await.unwrap();
    blog.wp.increment_term_count(tt_id).await.unwrap();
    assert!(blog.wp.relationship_exists(5, tt_id).await.unwrap());

    let count = scalar_i64(
        &blog.db,
        &format!("SELECT count FROM wp_term_taxonomy WHERE term_taxonomy_id = {tt_id}"),
    )
    .await
    .unwrap();
    assert_eq!(count, 1);
}

async fn count_where(db: &Database, table: &str, filter: &str) -> i64 {
    scalar_i64(db, &format!("SELECT COUNT(*) FROM {table} WHERE {filter}")).await.unwrap()
}
