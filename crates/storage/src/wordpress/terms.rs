//! TermStore implementation for WordPressDb.

use super::*;

use sqlx::Row;
use typo2wp_core::Taxonomy;

use crate::traits::TermStore;

#[async_trait]
impl TermStore for WordPressDb {
    async fn find_term(&self, slug: &str) -> Result<Option<i64>, StorageError> {
        let sql = self.db.sql(&format!(
            "SELECT {} FROM {} WHERE slug = ? ORDER BY term_id LIMIT 1",
            self.db.dialect().signed("term_id"),
            self.table("terms"),
        ));
        let row = sqlx::query(&sql).bind(slug).fetch_optional(self.db.pool()).await?;
        Ok(row.map(|r| r.try_get::<i64, _>(0)).transpose()?)
    }

    async fn insert_term(&self, name: &str, slug: &str) -> Result<i64, StorageError> {
        let table = self.table("terms");
        let columns: Columns = vec![
            ("name", Param::Text(name.to_owned())),
            ("slug", Param::Text(slug.to_owned())),
        ];
        let dialect = self.db.dialect();
        let sql = self.db.sql(&dialect.returning(insert_sql(dialect, &table, &columns), "term_id"));
        self.db.insert_returning_id(bind_all(sqlx::query(&sql), columns), &table).await
    }

    async fn find_term_taxonomy(
        &self,
        term_id: i64,
        taxonomy: Taxonomy,
    ) -> Result<Option<i64>, StorageError> {
        let sql = self.db.sql(&format!(
            "SELECT {} FROM {} WHERE term_id = ? AND taxonomy = ? \
             ORDER BY term_taxonomy_id LIMIT 1",
            self.db.dialect().signed("term_taxonomy_id"),
            self.table("term_taxonomy"),
        ));
        let row = sqlx::query(&sql)
            .bind(term_id)
            .bind(taxonomy.as_str())
            .fetch_optional(self.db.pool())
            .await?;
        Ok(row.map(|r| r.try_get::<i64, _>(0)).transpose()?)
    }

    async fn insert_term_taxonomy(
        &self,
        term_id: i64,
        taxonomy: Taxonomy,
    ) -> Result<i64, StorageError> {
        let table = self.table("term_taxonomy");
        let columns: Columns = vec![
            ("term_id", Param::Int(term_id)),
            ("taxonomy", Param::Text(taxonomy.as_str().to_owned())),
            ("description", Param::Text(String::new())),
            ("count", Param::Int(0)),
        ];
        let dialect = self.db.dialect();
        let sql = self
            .db
            .sql(&dialect.returning(insert_sql(dialect, &table, &columns), "term_taxonomy_id"));
        self.db.insert_returning_id(bind_all(sqlx::query(&sql), columns), &table).await
    }

    async fn relationship_exists(
        &self,
        object_id: i64,
        term_taxonomy_id: i64,
    ) -> Result<bool, StorageError> {
        let sql = self.db.sql(&format!(
            "SELECT 1 FROM {} WHERE object_id = ? AND term_taxonomy_id = ?",
            self.table("term_relationships"),
        ));
        let row = sqlx::query(&sql)
            .bind(object_id)
            .bind(term_taxonomy_id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(row.is_some())
    }

    async fn insert_relationship(
        &self,
        object_id: i64,
        term_taxonomy_id: i64,
    ) -> Result<(), StorageError> {
        let sql = self.db.sql(&format!(
            "INSERT INTO {} (object_id, term_taxonomy_id) VALUES (?, ?)",
            self.table("term_relationships"),
        ));
        sqlx::query(&sql)
            .bind(object_id)
            .bind(term_taxonomy_id)
            .execute(self.db.pool())
            .await?;
        Ok(())
    }

    async fn increment_term_count(&self, term_taxonomy_id: i64) -> Result<(), StorageError> {
        let sql = self.db.sql(&format!(
            "UPDATE {} SET count = count + 1 WHERE term_taxonomy_id = ?",
            self.table("term_taxonomy"),
        ));
        sqlx::query(&sql).bind(term_taxonomy_id).execute(self.db.pool()).await?;
        Ok(())
    }
}
