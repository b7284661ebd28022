//! Column accessors for `AnyRow` that produce domain values.

use chrono::NaiveDateTime;
use sqlx::Row;
use sqlx::any::AnyRow;
use typo2wp_core::{parse_flag, parse_timestamp};

use crate::error::StorageError;

pub(crate) fn string(row: &AnyRow, column: &str) -> Result<String, StorageError> {
    Ok(row.try_get::<Option<String>, _>(column)?.unwrap_or_default())
}

pub(crate) fn opt_string(row: &AnyRow, column: &str) -> Result<Option<String>, StorageError> {
    Ok(row.try_get::<Option<String>, _>(column)?)
}

pub(crate) fn id(row: &AnyRow, column: &str) -> Result<i64, StorageError> {
    Ok(row.try_get::<i64, _>(column)?)
}

pub(crate) fn opt_id(row: &AnyRow, column: &str) -> Result<Option<i64>, StorageError> {
    Ok(row.try_get::<Option<i64>, _>(column)?)
}

pub(crate) fn flag(row: &AnyRow, column: &str) -> Result<bool, StorageError> {
    Ok(parse_flag(opt_string(row, column)?.as_deref()))
}

pub(crate) fn opt_timestamp(
    row: &AnyRow,
    table: &str,
    column: &str,
) -> Result<Option<NaiveDateTime>, StorageError> {
    opt_string(row, column)?
        .filter(|s| !s.trim().is_empty())
        .map(|s| {
            parse_timestamp(&s).map_err(|e| StorageError::corrupt(format!("{table}.{column}"), e))
        })
        .transpose()
}

/// Required timestamp; NULL is reported as a missing value.
pub(crate) fn timestamp(
    row: &AnyRow,
    table: &str,
    column: &str,
) -> Result<NaiveDateTime, StorageError> {
    opt_timestamp(row, table, column)?
        .ok_or_else(|| StorageError::MissingValue { context: format!("{table}.{column}") })
}
