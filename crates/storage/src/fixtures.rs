//! SQLite schemas and helpers for tests.
//!
//! The schemas mirror the Typo 5 and WordPress 2.x tables closely enough
//! for the converter: same names, same nullability, same defaults.

use std::path::Path;

use sqlx::Row;
use typo2wp_core::TablePrefix;

use crate::database::Database;
use crate::error::StorageError;

pub const TYPO_SCHEMA: &str = "
CREATE TABLE categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(255),
    position INTEGER,
    permalink VARCHAR(255)
);
CREATE TABLE tags (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(255),
    display_name VARCHAR(255),
    created_at DATETIME,
    updated_at DATETIME
);
CREATE TABLE text_filters (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(255),
    description VARCHAR(255),
    markup VARCHAR(255),
    filters TEXT,
    params TEXT
);
CREATE TABLE contents (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    type VARCHAR(255),
    title VARCHAR(255),
    author VARCHAR(255),
    body TEXT,
    extended TEXT,
    excerpt TEXT,
    created_at DATETIME,
    updated_at DATETIME,
    user_id INTEGER,
    permalink VARCHAR(255),
    guid VARCHAR(255),
    text_filter_id INTEGER,
    whiteboard TEXT,
    name VARCHAR(255),
    published BOOLEAN DEFAULT 0,
    allow_pings BOOLEAN,
    allow_comments BOOLEAN,
    published_at DATETIME
);
CREATE TABLE categorizations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    article_id INTEGER,
    category_id INTEGER,
    is_primary BOOLEAN
);
CREATE TABLE articles_tags (
    article_id INTEGER,
    tag_id INTEGER
);
CREATE TABLE feedback (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    type VARCHAR(255),
    title VARCHAR(255),
    author VARCHAR(255),
    body TEXT,
    excerpt TEXT,
    created_at DATETIME,
    updated_at DATETIME,
    user_id INTEGER,
    guid VARCHAR(255),
    text_filter_id INTEGER,
    whiteboard TEXT,
    article_id INTEGER,
    email VARCHAR(255),
    url VARCHAR(255),
    ip VARCHAR(40),
    blog_name VARCHAR(255),
    published BOOLEAN DEFAULT 0,
    published_at DATETIME
)
";

/// WordPress tables under `prefix`.
#[must_use]
pub fn wordpress_schema(prefix: &TablePrefix) -> String {
    const NO_DATE: &str = "DEFAULT '0000-00-00 00:00:00'";
    format!(
        "
CREATE TABLE {terms} (
    term_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(55) NOT NULL DEFAULT '',
    slug VARCHAR(200) NOT NULL DEFAULT '',
    term_group INTEGER NOT NULL DEFAULT 0
);
CREATE TABLE {term_taxonomy} (
    term_taxonomy_id INTEGER PRIMARY KEY AUTOINCREMENT,
    term_id INTEGER NOT NULL DEFAULT 0,
    taxonomy VARCHAR(32) NOT NULL DEFAULT '',
    description TEXT NOT NULL,
    parent INTEGER NOT NULL DEFAULT 0,
    count INTEGER NOT NULL DEFAULT 0
);
CREATE TABLE {term_relationships} (
    object_id INTEGER NOT NULL DEFAULT 0,
    term_taxonomy_id INTEGER NOT NULL DEFAULT 0,
    term_order INTEGER NOT NULL DEFAULT 0,
    PRIMARY KEY (object_id, term_taxonomy_id)
);
CREATE TABLE {posts} (
    ID INTEGER PRIMARY KEY AUTOINCREMENT,
    post_author INTEGER NOT NULL DEFAULT 0,
    post_date DATETIME NOT NULL {NO_DATE},
    post_date_gmt DATETIME NOT NULL {NO_DATE},
    post_content TEXT NOT NULL,
    post_title TEXT NOT NULL,
    post_excerpt TEXT NOT NULL,
    post_status VARCHAR(20) NOT NULL DEFAULT 'publish',
    comment_status VARCHAR(20) NOT NULL DEFAULT 'open',
    ping_status VARCHAR(20) NOT NULL DEFAULT 'open',
    post_name VARCHAR(200) NOT NULL DEFAULT '',
    to_ping TEXT NOT NULL,
    pinged TEXT NOT NULL,
    post_modified DATETIME NOT NULL {NO_DATE},
    post_modified_gmt DATETIME NOT NULL {NO_DATE},
    post_content_filtered TEXT NOT NULL,
    guid VARCHAR(255) NOT NULL DEFAULT '',
    post_type VARCHAR(20) NOT NULL DEFAULT 'post'
);
CREATE TABLE {postmeta} (
    meta_id INTEGER PRIMARY KEY AUTOINCREMENT,
    post_id INTEGER NOT NULL DEFAULT 0,
    meta_key VARCHAR(255),
    meta_value TEXT
);
CREATE TABLE {comments} (
    comment_ID INTEGER PRIMARY KEY AUTOINCREMENT,
    comment_post_ID INTEGER NOT NULL DEFAULT 0,
    comment_author TEXT NOT NULL,
    comment_author_email VARCHAR(100) NOT NULL DEFAULT '',
    comment_author_url VARCHAR(200) NOT NULL DEFAULT '',
    comment_author_IP VARCHAR(100) NOT NULL DEFAULT '',
    comment_date DATETIME NOT NULL {NO_DATE},
    comment_date_gmt DATETIME NOT NULL {NO_DATE},
    comment_content TEXT NOT NULL,
    comment_approved VARCHAR(20) NOT NULL DEFAULT '1',
    comment_type VARCHAR(20) NOT NULL DEFAULT '',
    user_id INTEGER NOT NULL DEFAULT 0
)
",
        terms = prefix.table("terms"),
        term_taxonomy = prefix.table("term_taxonomy"),
        term_relationships = prefix.table("term_relationships"),
        posts = prefix.table("posts"),
        postmeta = prefix.table("postmeta"),
        comments = prefix.table("comments"),
    )
}

/// SQLite URL that creates `path` on first connect.
#[must_use]
pub fn sqlite_url(path: &Path) -> String {
    format!("sqlite://{}?mode=rwc", path.display())
}

/// Open (creating if needed) a SQLite database at `path`.
pub async fn open_sqlite(path: &Path) -> Result<Database, StorageError> {
    Database::connect(&sqlite_url(path)).await
}

/// Open a SQLite database at `path` holding both the Typo and WordPress tables.
pub async fn open_blog_pair(path: &Path, prefix: &TablePrefix) -> Result<Database, StorageError> {
    let db = open_sqlite(path).await?;
    db.execute_script(TYPO_SCHEMA).await?;
    db.execute_script(&wordpress_schema(prefix)).await?;
    Ok(db)
}

/// First column of the first row of `sql` as an integer.
pub async fn scalar_i64(db: &Database, sql: &str) -> Result<i64, StorageError> {
    let row = sqlx::query(sql).fetch_one(db.pool()).await?;
    Ok(row.try_get::<i64, _>(0)?)
}

/// First column of the first row of `sql` as text, `None` for NULL or no rows.
pub async fn scalar_text(db: &Database, sql: &str) -> Result<Option<String>, StorageError> {
    let row = sqlx::query(sql).fetch_optional(db.pool()).await?;
    Ok(row.map(|r| r.try_get::<Option<String>, _>(0)).transpose()?.flatten())
}
