//! CommentStore implementation for WordPressDb.

use super::*;

use typo2wp_core::CommentRecord;

use crate::traits::CommentStore;

#[async_trait]
impl CommentStore for WordPressDb {
    async fn insert_comment(&self, comment: &CommentRecord) -> Result<i64, StorageError> {
        let table = self.table("comments");
        let mut columns: Columns = Vec::with_capacity(10);
        // Left out when the article was not migrated; the column default applies.
        if let Some(post_id) = comment.post_id {
            columns.push(("comment_post_ID", Param::Int(post_id)));
        }
        columns.extend([
            ("comment_author", Param::Text(comment.author.clone())),
            ("comment_author_email", Param::Text(comment.author_email.clone())),
            ("comment_author_url", Param::Text(comment.author_url.clone())),
            ("comment_author_IP", Param::Text(comment.author_ip.clone())),
            ("comment_date", Param::Timestamp(comment.date.local)),
            ("comment_date_gmt", Param::Timestamp(comment.date.gmt)),
            ("comment_content", Param::Text(comment.content.clone())),
            ("comment_type", Param::Text(comment.comment_type.as_str().to_owned())),
            ("user_id", Param::Int(comment.user_id)),
        ]);
        let dialect = self.db.dialect();
        let sql =
            self.db.sql(&dialect.returning(insert_sql(dialect, &table, &columns), "comment_ID"));
        self.db.insert_returning_id(bind_all(sqlx::query(&sql), columns), &table).await
    }
}
