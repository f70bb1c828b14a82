//! Tabular result container returned by every driver call.
//!
//! Cells are JSON values so results can go straight into API responses. For
//! comparisons a NULL cell equals the empty string.

use common::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DataTable {
    pub columns: Vec<String>,
    #[schema(value_type = Vec<Vec<Object>>)]
    pub rows: Vec<Vec<Value>>,
}

impl DataTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an empty table with the given header.
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_column(&mut self, name: impl Into<String>) {
        self.columns.push(name.into());
    }

    pub fn add_row(&mut self, row: Vec<Value>) -> AppResult<()> {
        if self.columns.is_empty() && !row.is_empty() {
            return Err(AppError::DataTable(
                "Can not add row to a table with no columns.".into(),
            ));
        }
        if self.columns.len() != row.len() {
            return Err(AppError::DataTable(
                "Can not add row to a table with different columns.".into(),
            ));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell by row index and column name. Missing cells read as NULL.
    pub fn get(&self, row: usize, column: &str) -> &Value {
        self.column_index(column)
            .and_then(|idx| self.rows.get(row).and_then(|r| r.get(idx)))
            .unwrap_or(&Value::Null)
    }

    /// Text rendering of a cell. NULL becomes `""`.
    pub fn text(&self, row: usize, column: &str) -> String {
        value_text(self.get(row, column))
    }

    /// Rows whose `keys` columns equal `values`, in the original order.
    pub fn select(&self, keys: &[&str], values: &[Value]) -> AppResult<DataTable> {
        if keys.len() != values.len() {
            return Err(AppError::DataTable(
                "Can not select with different key-value dimension.".into(),
            ));
        }
        let idx = keys
            .iter()
            .map(|k| {
                self.column_index(k)
                    .ok_or_else(|| AppError::DataTable(format!("Unknown column: {}", k)))
            })
            .collect::<AppResult<Vec<_>>>()?;

        let rows = self
            .rows
            .iter()
            .filter(|row| {
                idx.iter()
                    .zip(values)
                    .all(|(&i, value)| values_equal(&row[i], value))
            })
            .cloned()
            .collect();

        Ok(DataTable {
            columns: self.columns.clone(),
            rows,
        })
    }

    /// Appends the rows of `other`. Both headers must match and be non-empty.
    pub fn merge(&mut self, other: DataTable) -> AppResult<()> {
        if self.columns.is_empty() || other.columns.is_empty() {
            return Err(AppError::DataTable(
                "Can not merge tables with no columns.".into(),
            ));
        }
        if self.columns != other.columns {
            return Err(AppError::DataTable(
                "Can not merge tables with different columns.".into(),
            ));
        }
        self.rows.extend(other.rows);
        Ok(())
    }

    /// Turns a single-row table into `(column_1, column_2)` name/value pairs.
    pub fn transpose(&self, column_1: &str, column_2: &str) -> AppResult<DataTable> {
        if self.rows.len() != 1 {
            return Err(AppError::DataTable(
                "Can only transpose a table with a single row.".into(),
            ));
        }
        let mut table = DataTable::with_columns([column_1, column_2]);
        for (name, value) in self.columns.iter().zip(&self.rows[0]) {
            table.rows.push(vec![Value::String(name.clone()), value.clone()]);
        }
        Ok(table)
    }

    /// Keeps the first row for each distinct combination of `key_columns`.
    pub fn distinct(&self, key_columns: &[&str]) -> AppResult<DataTable> {
        let mut table = DataTable::with_columns(self.columns.clone());
        for row in &self.rows {
            let key = key_columns
                .iter()
                .map(|k| {
                    self.column_index(k)
                        .map(|i| row[i].clone())
                        .ok_or_else(|| AppError::DataTable(format!("Unknown column: {}", k)))
                })
                .collect::<AppResult<Vec<_>>>()?;
            if table.select(key_columns, &key)?.is_empty() {
                table.rows.push(row.clone());
            }
        }
        Ok(table)
    }

    /// Values of one column as text, in row order.
    pub fn column_texts(&self, column: &str) -> Vec<String> {
        (0..self.rows.len()).map(|r| self.text(r, column)).collect()
    }
}

/// String form used for comparisons and for building SQL fragments.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::String(s)) | (Value::String(s), Value::Null) => s.is_empty(),
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> DataTable {
        let mut t = DataTable::with_columns(["name", "kind"]);
        t.add_row(vec![json!("a"), json!("t")]).unwrap();
        t.add_row(vec![json!("b"), Value::Null]).unwrap();
        t.add_row(vec![json!("a"), json!("v")]).unwrap();
        t
    }

    #[test]
    fn test_add_row_without_columns() {
        let mut t = DataTable::new();
        let err = t.add_row(vec![json!(1)]).unwrap_err();
        assert_eq!(err.to_string(), "Can not add row to a table with no columns.");
        assert!(t.add_row(vec![]).is_ok());
    }

    #[test]
    fn test_add_row_wrong_arity() {
        let mut t = DataTable::with_columns(["a", "b"]);
        let err = t.add_row(vec![json!(1)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Can not add row to a table with different columns."
        );
    }

    #[test]
    fn test_select_treats_null_as_empty() {
        let t = sample();
        let hit = t.select(&["kind"], &[json!("")]).unwrap();
        assert_eq!(hit.len(), 1);
        assert_eq!(hit.text(0, "name"), "b");

        let both = t.select(&["name"], &[json!("a")]).unwrap();
        assert_eq!(both.len(), 2);
    }

    #[test]
    fn test_select_dimension_mismatch() {
        let err = sample().select(&["name", "kind"], &[json!("a")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Can not select with different key-value dimension."
        );
    }

    #[test]
    fn test_merge() {
        let mut t = sample();
        t.merge(sample()).unwrap();
        assert_eq!(t.len(), 6);

        let err = t.merge(DataTable::with_columns(["x"])).unwrap_err();
        assert_eq!(err.to_string(), "Can not merge tables with different columns.");

        let err = DataTable::new().merge(sample()).unwrap_err();
        assert_eq!(err.to_string(), "Can not merge tables with no columns.");
    }

    #[test]
    fn test_transpose_single_row() {
        let mut t = DataTable::with_columns(["Table Name", "Root Page"]);
        t.add_row(vec![json!("users"), json!(2)]).unwrap();
        let p = t.transpose("Property", "Value").unwrap();
        assert_eq!(p.columns, vec!["Property", "Value"]);
        assert_eq!(p.rows[1], vec![json!("Root Page"), json!(2)]);
    }

    #[test]
    fn test_transpose_requires_one_row() {
        let err = sample().transpose("Property", "Value").unwrap_err();
        assert_eq!(err.to_string(), "Can only transpose a table with a single row.");
        let err = DataTable::with_columns(["x"])
            .transpose("Property", "Value")
            .unwrap_err();
        assert_eq!(err.to_string(), "Can only transpose a table with a single row.");
    }

    #[test]
    fn test_distinct_keeps_first() {
        let d = sample().distinct(&["name"]).unwrap();
        assert_eq!(d.len(), 2);
        assert_eq!(d.text(0, "kind"), "t");
    }

    #[test]
    fn test_text_rendering() {
        let mut t = DataTable::with_columns(["n"]);
        t.add_row(vec![json!(42)]).unwrap();
        assert_eq!(t.text(0, "n"), "42");
        assert_eq!(t.text(0, "missing"), "");
    }
}
