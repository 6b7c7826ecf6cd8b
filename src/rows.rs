use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value as JsonValue;

use crate::error::DataAccessError;
use crate::value::SqlValue;

/// A single driver row normalized to column-name → [`SqlValue`].
///
/// Column names and the lookup index are shared across all rows of a result
/// set. Rows stay internal to this crate; operations map them into typed
/// records before returning.
#[derive(Debug, Clone)]
pub struct DbRow {
    column_names: Arc<Vec<String>>,
    values: Vec<SqlValue>,
    column_index: Arc<HashMap<String, usize>>,
}

impl DbRow {
    #[must_use]
    pub fn new(column_names: Arc<Vec<String>>, values: Vec<SqlValue>) -> Self {
        let column_index = Arc::new(
            column_names
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), i))
                .collect::<HashMap<_, _>>(),
        );
        Self {
            column_names,
            values,
            column_index,
        }
    }

    fn with_index(
        column_names: Arc<Vec<String>>,
        column_index: Arc<HashMap<String, usize>>,
        values: Vec<SqlValue>,
    ) -> Self {
        Self {
            column_names,
            values,
            column_index,
        }
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.column_names
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.column_index
            .get(column)
            .and_then(|&idx| self.values.get(idx))
    }

    fn require(&self, column: &str) -> Result<&SqlValue, DataAccessError> {
        self.get(column)
            .ok_or_else(|| DataAccessError::Decode(format!("missing column '{column}'")))
    }

    fn mismatch(column: &str, expected: &str, found: &SqlValue) -> DataAccessError {
        DataAccessError::Decode(format!(
            "column '{column}': expected {expected}, found {found:?}"
        ))
    }

    pub fn require_int(&self, column: &str) -> Result<i64, DataAccessError> {
        let value = self.require(column)?;
        value
            .as_int()
            .ok_or_else(|| Self::mismatch(column, "integer", value))
    }

    pub fn require_text(&self, column: &str) -> Result<String, DataAccessError> {
        let value = self.require(column)?;
        value
            .as_text()
            .map(str::to_owned)
            .ok_or_else(|| Self::mismatch(column, "text", value))
    }

    pub fn opt_text(&self, column: &str) -> Result<Option<String>, DataAccessError> {
        let value = self.require(column)?;
        if value.is_null() {
            return Ok(None);
        }
        value
            .as_text()
            .map(|s| Some(s.to_owned()))
            .ok_or_else(|| Self::mismatch(column, "text or null", value))
    }

    pub fn opt_float(&self, column: &str) -> Result<Option<f64>, DataAccessError> {
        let value = self.require(column)?;
        if value.is_null() {
            return Ok(None);
        }
        value
            .as_float()
            .map(Some)
            .ok_or_else(|| Self::mismatch(column, "number or null", value))
    }

    pub fn require_bool(&self, column: &str) -> Result<bool, DataAccessError> {
        let value = self.require(column)?;
        value
            .as_bool()
            .ok_or_else(|| Self::mismatch(column, "boolean", value))
    }

    pub fn require_date(&self, column: &str) -> Result<NaiveDate, DataAccessError> {
        let value = self.require(column)?;
        value
            .as_date()
            .ok_or_else(|| Self::mismatch(column, "date", value))
    }
}

/// All rows returned by one statement.
#[derive(Debug, Clone, Default)]
pub struct RowSet {
    pub rows: Vec<DbRow>,
}

impl RowSet {
    /// Normalize driver rows. Column names are taken from the first row's
    /// metadata and shared across the set.
    pub fn from_postgres_rows(rows: &[tokio_postgres::Row]) -> Result<Self, DataAccessError> {
        let Some(first) = rows.first() else {
            return Ok(Self::default());
        };

        let column_names: Arc<Vec<String>> = Arc::new(
            first
                .columns()
                .iter()
                .map(|c| c.name().to_string())
                .collect(),
        );
        let column_index: Arc<HashMap<String, usize>> = Arc::new(
            column_names
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), i))
                .collect(),
        );

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let mut values = Vec::with_capacity(row.columns().len());
            for idx in 0..row.columns().len() {
                values.push(extract_value(row, idx)?);
            }
            out.push(DbRow::with_index(
                column_names.clone(),
                column_index.clone(),
                values,
            ));
        }
        Ok(Self { rows: out })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&DbRow> {
        self.rows.first()
    }
}

/// Extract one column of a `tokio_postgres` row into an [`SqlValue`],
/// dispatching on the column's declared type.
fn extract_value(row: &tokio_postgres::Row, idx: usize) -> Result<SqlValue, DataAccessError> {
    let type_name = row.columns()[idx].type_().name();

    match type_name {
        "int2" => {
            let val: Option<i16> = row.try_get(idx)?;
            Ok(val.map_or(SqlValue::Null, |v| SqlValue::Int(i64::from(v))))
        }
        "int4" => {
            let val: Option<i32> = row.try_get(idx)?;
            Ok(val.map_or(SqlValue::Null, |v| SqlValue::Int(i64::from(v))))
        }
        "int8" => {
            let val: Option<i64> = row.try_get(idx)?;
            Ok(val.map_or(SqlValue::Null, SqlValue::Int))
        }
        "float4" | "float8" => {
            let val: Option<f64> = row.try_get(idx)?;
            Ok(val.map_or(SqlValue::Null, SqlValue::Float))
        }
        "bool" => {
            let val: Option<bool> = row.try_get(idx)?;
            Ok(val.map_or(SqlValue::Null, SqlValue::Bool))
        }
        "date" => {
            let val: Option<NaiveDate> = row.try_get(idx)?;
            Ok(val.map_or(SqlValue::Null, SqlValue::Date))
        }
        "timestamp" | "timestamptz" => {
            let val: Option<NaiveDateTime> = row.try_get(idx)?;
            Ok(val.map_or(SqlValue::Null, SqlValue::Timestamp))
        }
        "json" | "jsonb" => {
            let val: Option<JsonValue> = row.try_get(idx)?;
            Ok(val.map_or(SqlValue::Null, SqlValue::Json))
        }
        // text, varchar, char, and anything else that reads as a string
        _ => {
            let val: Option<String> = row.try_get(idx)?;
            Ok(val.map_or(SqlValue::Null, SqlValue::Text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(columns: &[&str], values: Vec<SqlValue>) -> DbRow {
        DbRow::new(
            Arc::new(columns.iter().map(|c| (*c).to_string()).collect()),
            values,
        )
    }

    #[test]
    fn lookup_by_name() {
        let r = row(
            &["id", "email"],
            vec![SqlValue::Int(7), SqlValue::Text("a@b.c".into())],
        );
        assert_eq!(r.require_int("id").unwrap(), 7);
        assert_eq!(r.require_text("email").unwrap(), "a@b.c");
        assert!(r.get("missing").is_none());
    }

    #[test]
    fn missing_column_is_decode_error() {
        let r = row(&["id"], vec![SqlValue::Int(1)]);
        let err = r.require_text("email").unwrap_err();
        assert!(matches!(err, DataAccessError::Decode(_)));
    }

    #[test]
    fn type_mismatch_is_decode_error() {
        let r = row(&["id"], vec![SqlValue::Text("x".into())]);
        let err = r.require_int("id").unwrap_err();
        assert!(matches!(err, DataAccessError::Decode(_)));
    }

    #[test]
    fn null_reads_as_none() {
        let r = row(
            &["average_rating", "cover_photo_url"],
            vec![SqlValue::Null, SqlValue::Null],
        );
        assert_eq!(r.opt_float("average_rating").unwrap(), None);
        assert_eq!(r.opt_text("cover_photo_url").unwrap(), None);
    }
}
