//! Row-to-entity parsing helpers.
//!
//! Every repo converts a column-indexed `libsql::Row` into a typed entity.
//! These helpers isolate the parsing and handle the two datetime formats a
//! row may carry (`SQLite`'s `datetime('now')` vs Rust's `to_rfc3339()`).

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all votigo-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if the string does not match any variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::InvalidState(format!("Unknown value '{s}': {e}")))
}

/// Read a nullable INTEGER column.
///
/// `row.get::<i64>(idx)` on a NULL column returns an error, so nullable
/// columns (`max_rank`, `rank`) must go through `Option<i64>`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_i64(row: &libsql::Row, idx: i32) -> Result<Option<i64>, DatabaseError> {
    Ok(row.get::<Option<i64>>(idx)?)
}

/// Read an aggregate column (`COUNT`, `SUM`) as a plain integer.
///
/// `SUM` over zero rows yields NULL and may surface as REAL depending on
/// the inputs, so every aggregate is normalized here and nowhere else.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for TEXT or BLOB values.
pub fn get_aggregate(row: &libsql::Row, idx: i32) -> Result<i64, DatabaseError> {
    match row.get_value(idx)? {
        libsql::Value::Integer(n) => Ok(n),
        libsql::Value::Null => Ok(0),
        #[allow(clippy::cast_possible_truncation)]
        libsql::Value::Real(f) => Ok(f.round() as i64),
        other => Err(DatabaseError::InvalidState(format!(
            "Aggregate column {idx} is not numeric: {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use votigo_core::enums::{CategoryStatus, VoteType};

    #[test]
    fn parses_both_datetime_formats() {
        let rfc = parse_datetime("2026-02-09T14:30:00+00:00").unwrap();
        let sqlite = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(rfc, sqlite);
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn parses_snake_case_enums() {
        assert_eq!(parse_enum::<VoteType>("approval").unwrap(), VoteType::Approval);
        assert_eq!(
            parse_enum::<CategoryStatus>("archived").unwrap(),
            CategoryStatus::Archived
        );
        let err = parse_enum::<VoteType>("borda").unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidState(_)));
    }
}
