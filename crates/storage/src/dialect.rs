//! SQL differences between the backends reachable through `sqlx::Any`.
//!
//! Queries are written once with `?` placeholders and passed through
//! [`Dialect::prepare`] before execution.

use std::fmt::Write as _;

use crate::error::StorageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    MySql,
    Postgres,
    Sqlite,
}

impl Dialect {
    pub fn from_url(url: &str) -> Result<Self, StorageError> {
        let scheme = url.split(':').next().unwrap_or_default().to_ascii_lowercase();
        match scheme.as_str() {
            "mysql" | "mariadb" => Ok(Self::MySql),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite" => Ok(Self::Sqlite),
            _ => Err(StorageError::UnsupportedUrl(scheme)),
        }
    }

    /// Rewrite `?` placeholders into the backend's native form.
    #[must_use]
    pub fn prepare(self, query: &str) -> String {
        match self {
            Self::MySql | Self::Sqlite => query.to_owned(),
            Self::Postgres => {
                let mut out = String::with_capacity(query.len() + 8);
                let mut n = 0_u32;
                for c in query.chars() {
                    if c == '?' {
                        n += 1;
                        let _ = write!(out, "${n}");
                    } else {
                        out.push(c);
                    }
                }
                out
            },
        }
    }

    /// Expression reading `column` as text.
    ///
    /// The `Any` driver has no date or boolean types in common across
    /// backends, so timestamps and flags are fetched as strings.
    #[must_use]
    pub fn text(self, column: &str) -> String {
        match self {
            Self::MySql => format!("CAST({column} AS CHAR) AS {column}"),
            Self::Postgres | Self::Sqlite => format!("CAST({column} AS TEXT) AS {column}"),
        }
    }

    /// Comma-separated [`Dialect::text`] expressions for `columns`.
    ///
    /// MySQL reports `TEXT` columns as blobs, which `Any` will not decode
    /// into `String`, so every string column is read through a cast.
    #[must_use]
    pub fn text_list(self, columns: &[&str]) -> String {
        columns.iter().map(|c| self.text(c)).collect::<Vec<_>>().join(", ")
    }

    /// Expression reading an integer id as a signed 64-bit value.
    ///
    /// WordPress declares its ids `BIGINT UNSIGNED` on MySQL.
    #[must_use]
    pub fn signed(self, column: &str) -> String {
        match self {
            Self::MySql => format!("CAST({column} AS SIGNED) AS {column}"),
            Self::Postgres | Self::Sqlite => column.to_owned(),
        }
    }

    /// Placeholder for a timestamp bound as `YYYY-MM-DD HH:MM:SS` text.
    #[must_use]
    pub const fn timestamp_param(self) -> &'static str {
        match self {
            Self::Postgres => "CAST(? AS TIMESTAMP)",
            Self::MySql | Self::Sqlite => "?",
        }
    }

    /// Whether generated ids come back through `RETURNING` rather than the
    /// driver's last-insert-id.
    ///
    /// The `Any` driver never reports a last-insert-id for SQLite, so only
    /// MySQL relies on it.
    #[must_use]
    pub const fn returns_ids(self) -> bool {
        matches!(self, Self::Postgres | Self::Sqlite)
    }

    /// Append the clause that yields `id_column` for an insert, if needed.
    #[must_use]
    pub fn returning(self, insert: String, id_column: &str) -> String {
        if self.returns_ids() { format!("{insert} RETURNING {id_column}") } else { insert }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_dialect_from_scheme() {
        assert_eq!(Dialect::from_url("mysql://u:p@host/blog").unwrap(), Dialect::MySql);
        assert_eq!(Dialect::from_url("mariadb://host/blog").unwrap(), Dialect::MySql);
        assert_eq!(Dialect::from_url("postgres://host/blog").unwrap(), Dialect::Postgres);
        assert_eq!(Dialect::from_url("postgresql://host/blog").unwrap(), Dialect::Postgres);
        assert_eq!(Dialect::from_url("sqlite:///tmp/blog.db").unwrap(), Dialect::Sqlite);
        assert_eq!(Dialect::from_url("sqlite::memory:").unwrap(), Dialect::Sqlite);
    }

    #[test]
    fn rejects_unknown_scheme() {
        assert!(matches!(
            Dialect::from_url("oracle://host/blog"),
            Err(StorageError::UnsupportedUrl(_))
        ));
        assert!(Dialect::from_url("blog.db").is_err());
    }

    #[test]
    fn postgres_placeholders_are_numbered() {
        let sql = "UPDATE t SET a = ?, b = CAST(? AS TIMESTAMP) WHERE id = ?";
        assert_eq!(
            Dialect::Postgres.prepare(sql),
            "UPDATE t SET a = $1, b = CAST($2 AS TIMESTAMP) WHERE id = $3"
        );
        assert_eq!(Dialect::MySql.prepare(sql), sql);
        assert_eq!(Dialect::Sqlite.prepare(sql), sql);
    }

    #[test]
    fn returning_for_postgres_and_sqlite() {
        let insert = "INSERT INTO wp_terms (name) VALUES (?)".to_owned();
        let returning = "INSERT INTO wp_terms (name) VALUES (?) RETURNING term_id";
        assert_eq!(Dialect::Postgres.returning(insert.clone(), "term_id"), returning);
        assert_eq!(Dialect::Sqlite.returning(insert.clone(), "term_id"), returning);
        assert_eq!(Dialect::MySql.returning(insert.clone(), "term_id"), insert);
        assert!(!Dialect::MySql.returns_ids());
    }

    #[test]
    fn text_cast_keeps_column_name() {
        assert_eq!(Dialect::MySql.text("created_at"), "CAST(created_at AS CHAR) AS created_at");
        assert_eq!(Dialect::Sqlite.text("published"), "CAST(published AS TEXT) AS published");
    }

    #[test]
    fn text_list_casts_every_column() {
        assert_eq!(
            Dialect::MySql.text_list(&["body", "extended"]),
            "CAST(body AS CHAR) AS body, CAST(extended AS CHAR) AS extended"
        );
        assert_eq!(Dialect::Postgres.text_list(&[]), "");
    }
}
