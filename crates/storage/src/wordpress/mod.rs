//! WordPress destination store using sqlx.
//!
//! Split into modular files by table group.

mod comments;
mod posts;
mod terms;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::Any;
use sqlx::any::AnyArguments;
use sqlx::query::Query;
use typo2wp_core::{TablePrefix, format_timestamp};

use crate::database::Database;
use crate::dialect::Dialect;
use crate::error::StorageError;
use crate::traits::SchemaStore;

/// WordPress tables under a configurable prefix.
#[derive(Clone, Debug)]
pub struct WordPressDb {
    db: Database,
    prefix: TablePrefix,
}

impl WordPressDb {
    #[must_use]
    pub fn new(db: Database, prefix: TablePrefix) -> Self {
        Self { db, prefix }
    }

    pub(crate) fn table(&self, name: &str) -> String {
        self.prefix.table(name)
    }
}

/// A bound column value.
#[derive(Debug, Clone)]
pub(crate) enum Param {
    Text(String),
    Int(i64),
    Timestamp(NaiveDateTime),
}

impl Param {
    fn placeholder(&self, dialect: Dialect) -> &'static str {
        match self {
            Self::Timestamp(_) => dialect.timestamp_param(),
            Self::Text(_) | Self::Int(_) => "?",
        }
    }

    fn bind<'q>(
        self,
        query: Query<'q, Any, AnyArguments<'q>>,
    ) -> Query<'q, Any, AnyArguments<'q>> {
        match self {
            Self::Text(s) => query.bind(s),
            Self::Int(i) => query.bind(i),
            Self::Timestamp(ts) => query.bind(format_timestamp(ts)),
        }
    }
}

/// Ordered `(column, value)` pairs for an insert or update.
pub(crate) type Columns = Vec<(&'static str, Param)>;

/// `INSERT INTO table (a, b) VALUES (?, ?)` for `columns`.
pub(crate) fn insert_sql(dialect: Dialect, table: &str, columns: &Columns) -> String {
    let names: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
    let values: Vec<&str> = columns.iter().map(|(_, p)| p.placeholder(dialect)).collect();
    format!("INSERT INTO {table} ({}) VALUES ({})", names.join(", "), values.join(", "))
}

/// `a = ?, b = ?` for `columns`.
pub(crate) fn assignments_sql(dialect: Dialect, columns: &Columns) -> String {
    columns
        .iter()
        .map(|(name, p)| format!("{name} = {}", p.placeholder(dialect)))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn bind_all<'q>(
    mut query: Query<'q, Any, AnyArguments<'q>>,
    columns: Columns,
) -> Query<'q, Any, AnyArguments<'q>> {
    for (_, param) in columns {
        query = param.bind(query);
    }
    query
}

#[async_trait]
impl SchemaStore for WordPressDb {
    fn terms_table(&self) -> String {
        self.table("terms")
    }

    async fn has_terms_table(&self) -> Result<bool, StorageError> {
        self.db.table_exists(&self.terms_table()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Columns {
        vec![
            ("post_title", Param::Text("Hello".to_owned())),
            ("post_author", Param::Int(1)),
            ("post_date", Param::Timestamp(NaiveDateTime::default())),
        ]
    }

    #[test]
    fn insert_sql_lists_columns_in_order() {
        assert_eq!(
            insert_sql(Dialect::MySql, "wp_posts", &columns()),
            "INSERT INTO wp_posts (post_title, post_author, post_date) VALUES (?, ?, ?)"
        );
    }

    #[test]
    fn postgres_timestamps_are_cast() {
        assert_eq!(
            assignments_sql(Dialect::Postgres, &columns()),
            "post_title = ?, post_author = ?, post_date = CAST(? AS TIMESTAMP)"
        );
    }
}
