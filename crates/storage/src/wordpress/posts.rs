//! PostStore implementation for WordPressDb.

use super::*;

use sqlx::Row;
use typo2wp_core::{PostMeta, PostRecord, PostType};

use crate::traits::PostStore;

/// Columns written on both insert and update.
fn post_columns(post: &PostRecord) -> Columns {
    let mut columns: Columns = vec![
        ("post_author", Param::Int(post.post_author)),
        ("post_content", Param::Text(post.post_content.clone())),
        ("post_title", Param::Text(post.post_title.clone())),
        ("post_excerpt", Param::Text(post.post_excerpt.clone())),
        ("post_status", Param::Text(post.post_status.as_str().to_owned())),
        ("post_name", Param::Text(post.post_name.clone())),
        ("post_modified", Param::Timestamp(post.post_modified.local)),
        ("post_modified_gmt", Param::Timestamp(post.post_modified.gmt)),
        ("post_type", Param::Text(post.post_type.as_str().to_owned())),
    ];
    if let Some(date) = post.post_date {
        columns.push(("post_date", Param::Timestamp(date.local)));
        columns.push(("post_date_gmt", Param::Timestamp(date.gmt)));
    }
    if let Some(status) = post.comment_status {
        columns.push(("comment_status", Param::Text(status.as_str().to_owned())));
    }
    if let Some(status) = post.ping_status {
        columns.push(("ping_status", Param::Text(status.as_str().to_owned())));
    }
    if let Some(guid) = &post.guid {
        columns.push(("guid", Param::Text(guid.clone())));
    }
    columns
}

#[async_trait]
impl PostStore for WordPressDb {
    async fn find_posts(
        &self,
        post_name: &str,
        post_type: PostType,
    ) -> Result<Vec<i64>, StorageError> {
        let sql = self.db.sql(&format!(
            "SELECT {} FROM {} WHERE post_name = ? AND post_type = ? ORDER BY ID",
            self.db.dialect().signed("ID"),
            self.table("posts"),
        ));
        let rows = sqlx::query(&sql)
            .bind(post_name)
            .bind(post_type.as_str())
            .fetch_all(self.db.pool())
            .await?;
        Ok(rows.iter().map(|r| r.try_get::<i64, _>(0)).collect::<Result<_, _>>()?)
    }

    async fn insert_post(&self, post: &PostRecord) -> Result<i64, StorageError> {
        let table = self.table("posts");
        let mut columns = post_columns(post);
        // NOT NULL text columns that WordPress declares without a default.
        for column in ["to_ping", "pinged", "post_content_filtered"] {
            columns.push((column, Param::Text(String::new())));
        }
        let dialect = self.db.dialect();
        let sql = self.db.sql(&dialect.returning(insert_sql(dialect, &table, &columns), "ID"));
        self.db.insert_returning_id(bind_all(sqlx::query(&sql), columns), &table).await
    }

    async fn update_post(&self, post_id: i64, post: &PostRecord) -> Result<(), StorageError> {
        let mut columns = post_columns(post);
        let sql = self.db.sql(&format!(
            "UPDATE {} SET {} WHERE ID = ?",
            self.table("posts"),
            assignments_sql(self.db.dialect(), &columns),
        ));
        columns.push(("ID", Param::Int(post_id)));
        bind_all(sqlx::query(&sql), columns).execute(self.db.pool()).await?;
        Ok(())
    }

    async fn delete_post_meta(&self, post_id: i64) -> Result<u64, StorageError> {
        let sql =
            self.db.sql(&format!("DELETE FROM {} WHERE post_id = ?", self.table("postmeta")));
        let result = sqlx::query(&sql).bind(post_id).execute(self.db.pool()).await?;
        Ok(result.rows_affected())
    }

    async fn insert_post_meta(&self, post_id: i64, meta: &PostMeta) -> Result<(), StorageError> {
        let sql = self.db.sql(&format!(
            "INSERT INTO {} (post_id, meta_key, meta_value) VALUES (?, ?, ?)",
            self.table("postmeta"),
        ));
        sqlx::query(&sql)
            .bind(post_id)
            .bind(meta.meta_key)
            .bind(meta.meta_value.as_str())
            .execute(self.db.pool())
            .await?;
        Ok(())
    }
}
