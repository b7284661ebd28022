//! `TypoStore` over a Typo database.

use async_trait::async_trait;
use sqlx::any::AnyRow;
use typo2wp_core::{
    Article, Category, Comment, ContentKind, FeedbackKind, Page, Tag, TextFilter, Trackback,
};

use crate::database::Database;
use crate::dialect::Dialect;
use crate::error::StorageError;
use crate::row;
use crate::traits::TypoStore;

/// Typo source tables. Unprefixed, read only.
#[derive(Clone, Debug)]
pub struct TypoDb {
    db: Database,
}

impl TypoDb {
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    async fn fetch_by_type(
        &self,
        columns: &str,
        table: &str,
        kind: &str,
    ) -> Result<Vec<AnyRow>, StorageError> {
        let sql = self.db.sql(&format!("SELECT {columns} FROM {table} WHERE type = ? ORDER BY id"));
        Ok(sqlx::query(&sql).bind(kind).fetch_all(self.db.pool()).await?)
    }

    async fn linked_ids(
        &self,
        table: &str,
        column: &str,
        article_id: i64,
    ) -> Result<Vec<i64>, StorageError> {
        let sql = self.db.sql(&format!("SELECT {column} FROM {table} WHERE article_id = ?"));
        let rows = sqlx::query(&sql).bind(article_id).fetch_all(self.db.pool()).await?;
        rows.iter().map(|r| row::id(r, column)).collect()
    }
}

fn category_columns(d: Dialect) -> String {
    format!("id, {}", d.text_list(&["name", "permalink"]))
}

fn tag_columns(d: Dialect) -> String {
    format!("id, {}", d.text_list(&["name", "display_name"]))
}

fn text_filter_columns(d: Dialect) -> String {
    format!("id, {}", d.text_list(&["markup", "filters"]))
}

fn page_columns(d: Dialect) -> String {
    format!(
        "id, {}",
        d.text_list(&["title", "body", "name", "published", "created_at", "updated_at"])
    )
}

fn article_columns(d: Dialect) -> String {
    format!(
        "id, text_filter_id, {}",
        d.text_list(&[
            "title",
            "body",
            "extended",
            "excerpt",
            "permalink",
            "guid",
            "published",
            "published_at",
            "updated_at",
            "allow_comments",
            "allow_pings",
        ])
    )
}

fn comment_columns(d: Dialect) -> String {
    format!(
        "id, article_id, user_id, {}",
        d.text_list(&["author", "body", "email", "url", "ip", "created_at"])
    )
}

fn trackback_columns(d: Dialect) -> String {
    format!(
        "id, article_id, {}",
        d.text_list(&["title", "excerpt", "blog_name", "url", "ip", "created_at"])
    )
}

fn row_to_page(r: &AnyRow) -> Result<Page, StorageError> {
    Ok(Page {
        id: row::id(r, "id")?,
        title: row::string(r, "title")?,
        body: row::string(r, "body")?,
        name: row::string(r, "name")?,
        published: row::flag(r, "published")?,
        created_at: row::timestamp(r, "contents", "created_at")?,
        updated_at: row::timestamp(r, "contents", "updated_at")?,
    })
}

fn row_to_article(r: &AnyRow) -> Result<Article, StorageError> {
    Ok(Article {
        id: row::id(r, "id")?,
        title: row::string(r, "title")?,
        body: row::string(r, "body")?,
        extended: row::opt_string(r, "extended")?,
        excerpt: row::opt_string(r, "excerpt")?,
        permalink: row::string(r, "permalink")?,
        guid: row::opt_string(r, "guid")?,
        text_filter_id: row::opt_id(r, "text_filter_id")?,
        published: row::flag(r, "published")?,
        published_at: row::opt_timestamp(r, "contents", "published_at")?,
        updated_at: row::timestamp(r, "contents", "updated_at")?,
        allow_comments: row::flag(r, "allow_comments")?,
        allow_pings: row::flag(r, "allow_pings")?,
    })
}

fn row_to_comment(r: &AnyRow) -> Result<Comment, StorageError> {
    Ok(Comment {
        id: row::id(r, "id")?,
        article_id: row::opt_id(r, "article_id")?,
        author: row::string(r, "author")?,
        body: row::string(r, "body")?,
        email: row::opt_string(r, "email")?,
        url: row::opt_string(r, "url")?,
        ip: row::opt_string(r, "ip")?,
        user_id: row::opt_id(r, "user_id")?,
        created_at: row::timestamp(r, "feedback", "created_at")?,
    })
}

fn row_to_trackback(r: &AnyRow) -> Result<Trackback, StorageError> {
    Ok(Trackback {
        id: row::id(r, "id")?,
        article_id: row::opt_id(r, "article_id")?,
        title: row::opt_string(r, "title")?,
        excerpt: row::opt_string(r, "excerpt")?,
        blog_name: row::string(r, "blog_name")?,
        url: row::opt_string(r, "url")?,
        ip: row::opt_string(r, "ip")?,
        created_at: row::timestamp(r, "feedback", "created_at")?,
    })
}

#[async_trait]
impl TypoStore for TypoDb {
    async fn categories(&self) -> Result<Vec<Category>, StorageError> {
        let sql = format!(
            "SELECT {} FROM categories ORDER BY position",
            category_columns(self.db.dialect())
        );
        let rows = sqlx::query(&sql).fetch_all(self.db.pool()).await?;
        rows.iter()
            .map(|r| {
                Ok(Category {
                    id: row::id(r, "id")?,
                    name: row::string(r, "name")?,
                    permalink: row::string(r, "permalink")?,
                })
            })
            .collect()
    }

    async fn tags(&self) -> Result<Vec<Tag>, StorageError> {
        let sql = format!("SELECT {} FROM tags ORDER BY id", tag_columns(self.db.dialect()));
        let rows = sqlx::query(&sql).fetch_all(self.db.pool()).await?;
        rows.iter()
            .map(|r| {
                Ok(Tag {
                    id: row::id(r, "id")?,
                    name: row::string(r, "name")?,
                    display_name: row::string(r, "display_name")?,
                })
            })
            .collect()
    }

    async fn text_filters(&self) -> Result<Vec<TextFilter>, StorageError> {
        let sql = format!(
            "SELECT {} FROM text_filters ORDER BY id",
            text_filter_columns(self.db.dialect())
        );
        let rows = sqlx::query(&sql).fetch_all(self.db.pool()).await?;
        rows.iter()
            .map(|r| {
                Ok(TextFilter {
                    id: row::id(r, "id")?,
                    markup: row::string(r, "markup")?,
                    filters: row::opt_string(r, "filters")?,
                })
            })
            .collect()
    }

    async fn pages(&self) -> Result<Vec<Page>, StorageError> {
        let columns = page_columns(self.db.dialect());
        let rows = self.fetch_by_type(&columns, "contents", ContentKind::Page.as_str()).await?;
        rows.iter().map(row_to_page).collect()
    }

    async fn articles(&self) -> Result<Vec<Article>, StorageError> {
        let columns = article_columns(self.db.dialect());
        let rows = self.fetch_by_type(&columns, "contents", ContentKind::Article.as_str()).await?;
        rows.iter().map(row_to_article).collect()
    }

    async fn article_category_ids(&self, article_id: i64) -> Result<Vec<i64>, StorageError> {
        self.linked_ids("categorizations", "category_id", article_id).await
    }

    async fn article_tag_ids(&self, article_id: i64) -> Result<Vec<i64>, StorageError> {
        self.linked_ids("articles_tags", "tag_id", article_id).await
    }

    async fn comments(&self) -> Result<Vec<Comment>, StorageError> {
        let columns = comment_columns(self.db.dialect());
        let rows = self.fetch_by_type(&columns, "feedback", FeedbackKind::Comment.as_str()).await?;
        rows.iter().map(row_to_comment).collect()
    }

    async fn trackbacks(&self) -> Result<Vec<Trackback>, StorageError> {
        let columns = trackback_columns(self.db.dialect());
        let rows =
            self.fetch_by_type(&columns, "feedback", FeedbackKind::Trackback.as_str()).await?;
        rows.iter().map(row_to_trackback).collect()
    }
}
