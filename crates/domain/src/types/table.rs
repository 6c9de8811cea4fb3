//! Tabular content for structured de-identification

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::errors::{DlpError, Result};

/// Column header of a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldId {
    pub name: String,
}

impl FieldId {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A single typed cell.
///
/// Serializes as a one-key object (`{"stringValue": "..."}`), matching the
/// oneof encoding the service uses. `integerValue` is an int64 and therefore
/// travels as a JSON string; numbers are accepted on the way in as well.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    StringValue(String),
    IntegerValue(#[serde_as(as = "PickFirst<(DisplayFromStr, _)>")] i64),
    FloatValue(f64),
    BooleanValue(bool),
}

impl Value {
    pub fn string(value: impl Into<String>) -> Self {
        Self::StringValue(value.into())
    }

    /// Returns the string payload, if this is a string cell.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::StringValue(value) => Some(value),
            _ => None,
        }
    }
}

/// One row of cells, ordered like the table headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }
}

/// Structured content: ordered headers plus rows of equal width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<FieldId>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Table {
    /// Build a table, rejecting rows whose width differs from the header
    /// count.
    ///
    /// # Errors
    /// Returns `DlpError::InvalidInput` when there are no headers or when any
    /// row is ragged.
    pub fn new(headers: Vec<FieldId>, rows: Vec<Row>) -> Result<Self> {
        let table = Self { headers, rows };
        table.validate()?;
        Ok(table)
    }

    /// Check the row-width invariant on an already constructed table (for
    /// example one deserialized from a file).
    ///
    /// # Errors
    /// Returns `DlpError::InvalidInput` describing the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.headers.is_empty() {
            return Err(DlpError::InvalidInput("table must have at least one header".into()));
        }

        let width = self.headers.len();
        if let Some((index, row)) =
            self.rows.iter().enumerate().find(|(_, row)| row.values.len() != width)
        {
            return Err(DlpError::InvalidInput(format!(
                "row {} has {} values but the table has {} headers",
                index,
                row.values.len(),
                width
            )));
        }

        Ok(())
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<FieldId> {
        vec![FieldId::new("userid"), FieldId::new("comments")]
    }

    #[test]
    fn accepts_rows_matching_header_width() {
        let table = Table::new(
            headers(),
            vec![Row::new(vec![Value::string("user1@example.org"), Value::string("hi")])],
        )
        .unwrap();

        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Table::new(
            headers(),
            vec![
                Row::new(vec![Value::string("a"), Value::string("b")]),
                Row::new(vec![Value::string("c")]),
            ],
        )
        .unwrap_err();

        match err {
            DlpError::InvalidInput(msg) => assert!(msg.contains("row 1 has 1 values")),
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn rejects_headerless_table() {
        assert!(Table::new(vec![], vec![]).is_err());
    }

    #[test]
    fn values_use_oneof_encoding() {
        let json = serde_json::to_value(Value::string("x")).unwrap();
        assert_eq!(json, serde_json::json!({ "stringValue": "x" }));

        let json = serde_json::to_value(Value::IntegerValue(42)).unwrap();
        assert_eq!(json, serde_json::json!({ "integerValue": "42" }));
    }

    #[test]
    fn integer_values_parse_from_string_or_number() {
        let from_string: Value = serde_json::from_str(r#"{"integerValue": "7"}"#).unwrap();
        let from_number: Value = serde_json::from_str(r#"{"integerValue": 7}"#).unwrap();

        assert_eq!(from_string, Value::IntegerValue(7));
        assert_eq!(from_number, Value::IntegerValue(7));
    }

    #[test]
    fn missing_rows_deserialize_as_empty() {
        let table: Table = serde_json::from_str(r#"{"headers": [{"name": "a"}]}"#).unwrap();
        assert!(table.rows.is_empty());
    }
}
