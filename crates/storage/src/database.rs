//! Connection handling shared by the Typo and WordPress stores.

use std::sync::Once;
use std::time::Duration;

use sqlx::any::{AnyArguments, AnyPoolOptions, AnyRow};
use sqlx::query::Query;
use sqlx::{Any, AnyPool, Row};
use typo2wp_core::{POOL_ACQUIRE_TIMEOUT_SECS, POOL_MAX_CONNECTIONS};

use crate::dialect::Dialect;
use crate::error::StorageError;

static INSTALL_DRIVERS: Once = Once::new();

/// A connection pool plus the dialect of the database behind it.
///
/// Cloning shares the pool, which is how source and destination use the
/// same connection when only one URL is given.
#[derive(Clone, Debug)]
pub struct Database {
    pool: AnyPool,
    dialect: Dialect,
}

impl Database {
    pub async fn connect(url: &str) -> Result<Self, StorageError> {
        let dialect = Dialect::from_url(url)?;
        INSTALL_DRIVERS.call_once(sqlx::any::install_default_drivers);
        let pool = AnyPoolOptions::new()
            .max_connections(POOL_MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(url)
            .await?;
        tracing::debug!(?dialect, "database connected");
        Ok(Self { pool, dialect })
    }

    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub(crate) fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// Backend-specific form of a `?`-placeholder query.
    pub(crate) fn sql(&self, query: &str) -> String {
        self.dialect.prepare(query)
    }

    /// Whether `table` can be selected from.
    ///
    /// Only a missing-table error means absent. Connection and permission
    /// failures are returned as errors.
    pub(crate) async fn table_exists(&self, table: &str) -> Result<bool, StorageError> {
        let probe = format!("SELECT 1 FROM {table} WHERE 1 = 0");
        match sqlx::query(&probe).fetch_optional(&self.pool).await {
            Ok(_) => Ok(true),
            Err(e) if is_missing_table(&e) => {
                tracing::debug!(table, error = %e, "table probe found no table");
                Ok(false)
            },
            Err(e) => Err(e.into()),
        }
    }

    /// Run an insert and return the generated id of `id_column`.
    ///
    /// `query` must have been built from SQL passed through
    /// [`Dialect::returning`].
    pub(crate) async fn insert_returning_id<'q>(
        &self,
        query: Query<'q, Any, AnyArguments<'q>>,
        table: &str,
    ) -> Result<i64, StorageError> {
        if self.dialect.returns_ids() {
            let row: AnyRow = query.fetch_one(&self.pool).await?;
            Ok(row.try_get::<i64, _>(0)?)
        } else {
            let result = query.execute(&self.pool).await?;
            result
                .last_insert_id()
                .ok_or_else(|| StorageError::MissingInsertId { table: table.to_owned() })
        }
    }

    /// Stop handing out connections.
    #[cfg(test)]
    pub(crate) async fn close(&self) {
        self.pool.close().await;
    }

    /// Run a `;`-separated script, one statement at a time.
    #[cfg(any(test, feature = "fixtures"))]
    pub async fn execute_script(&self, script: &str) -> Result<(), StorageError> {
        for statement in script.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }
}

/// Undefined-table error from any supported backend.
///
/// MySQL reports SQLSTATE `42S02`, Postgres `42P01`, and SQLite only says so
/// in the message.
fn is_missing_table(err: &sqlx::Error) -> bool {
    let sqlx::Error::Database(db) = err else {
        return false;
    };
    matches!(db.code().as_deref(), Some("42S02" | "42P01"))
        || db.message().contains("no such table")
}
