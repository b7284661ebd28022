//! Test utilities and module declarations for storage tests.

use tempfile::TempDir;
use typo2wp_core::TablePrefix;

use crate::fixtures::open_blog_pair;
use crate::{Database, TypoDb, WordPressDb};

pub(crate) struct TestBlog {
    pub db: Database,
    pub typo: TypoDb,
    pub wp: WordPressDb,
    _dir: TempDir,
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub(crate) async fn create_test_blog() -> TestBlog {
    let dir = TempDir::new().unwrap();
    let prefix = TablePrefix::default();
    let db = open_blog_pair(&dir.path().join("blog.db"), &prefix).await.unwrap();
    TestBlog {
        typo: TypoDb::new(db.clone()),
        wp: WordPressDb::new(db.clone(), prefix),
        db,
        _dir: dir,
    }
}

mod term_tests;
