//! Table representation for checks.
//!
//! This module provides the in-memory tabular dataset the checks operate
//! on: an ordered set of declared column names plus rows of scalar values.
//! Tables are loaded once (from CSV or built in memory), passed by
//! reference to each check, and never mutated by a check.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::CheckError;

/// A scalar cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null/missing value
    Null,
    /// Text value
    Str(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
}

impl Value {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the kind name of this value.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Str(_) => "text",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
        }
    }

    /// Attempts to get this value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Attempts to get this value as a float. Integers widen.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Attempts to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// String form used when comparing rows for duplicates.
    ///
    /// Missing markers normalize to a sentinel that cannot collide with
    /// data, so two missing cells compare equal.
    pub(crate) fn duplicate_key(&self) -> String {
        match self {
            Value::Null => "\u{0}null".to_string(),
            Value::Str(s) => s.clone(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Bool(b) => b.to_string(),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// A single row of data.
pub type Row = HashMap<String, Value>;

static NULL: Value = Value::Null;

/// A rectangular dataset: declared column names plus rows.
///
/// A cell absent from a row's map reads as `Value::Null`; checks do not
/// distinguish "field missing from row" from an explicit null.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Creates a new empty table with no columns.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Creates a new table with the given column names and no rows.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Creates a new table from column names and rows.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Returns the declared column names, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns true if the table declares a column with this name.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Gets a specific row by index.
    pub fn get_row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Adds a row to the table.
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Returns an iterator over one column's values, in row order.
    ///
    /// Rows without the column yield `Value::Null`.
    pub fn column_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Value> {
        self.rows.iter().map(move |row| row.get(name).unwrap_or(&NULL))
    }

    /// Takes a sample of rows from the table.
    ///
    /// If `size` is greater than the number of rows, returns all rows.
    pub fn sample(&self, size: usize) -> Table {
        let sample_size = size.min(self.rows.len());
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(sample_size).cloned().collect(),
        }
    }

    /// Loads a table from a CSV file with a header row.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Table, CheckError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Loads a table from CSV text with a header row.
    pub fn from_csv_str(data: &str) -> Result<Table, CheckError> {
        Self::from_csv_reader(data.as_bytes())
    }

    /// Loads a table from any CSV reader with a header row.
    ///
    /// Cell values are inferred per cell: integer, then float (the `inf`
    /// and `-inf` spellings parse as infinities), then boolean; anything
    /// else stays text. Empty cells become `Value::Null`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Table, CheckError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let mut row = Row::with_capacity(columns.len());
            for (i, column) in columns.iter().enumerate() {
                let cell = record.get(i).unwrap_or("");
                row.insert(column.clone(), infer_value(cell));
            }
            rows.push(row);
        }

        tracing::debug!(
            columns = columns.len(),
            rows = rows.len(),
            "loaded CSV table"
        );

        Ok(Table { columns, rows })
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::empty()
    }
}

/// Infers a typed value from one CSV cell.
fn infer_value(cell: &str) -> Value {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Int(i);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        return Value::Float(f);
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::Str(cell.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_kinds() {
        assert_eq!(Value::Null.kind_name(), "null");
        assert_eq!(Value::Str("test".into()).kind_name(), "text");
        assert_eq!(Value::Int(42).kind_name(), "int");
        assert_eq!(Value::Float(3.5).kind_name(), "float");
        assert_eq!(Value::Bool(true).kind_name(), "bool");
    }

    #[test]
    fn test_value_conversions() {
        let val = Value::Str("hello".into());
        assert_eq!(val.as_str(), Some("hello"));
        assert_eq!(val.as_int(), None);

        let val = Value::Int(42);
        assert_eq!(val.as_int(), Some(42));
        assert_eq!(val.as_f64(), Some(42.0));
        assert_eq!(val.as_str(), None);
    }

    #[test]
    fn test_table_operations() {
        let mut table = Table::new(vec!["id".to_string()]);
        assert_eq!(table.len(), 0);
        assert!(table.is_empty());

        let mut row = Row::new();
        row.insert("id".to_string(), Value::Int(1));
        table.push_row(row);

        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
        assert!(table.has_column("id"));
        assert!(!table.has_column("missing"));

        let row = table.get_row(0).unwrap();
        assert_eq!(row.get("id"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_column_values_fill_missing_fields() {
        let mut table = Table::new(vec!["id".to_string(), "label".to_string()]);

        let mut row = Row::new();
        row.insert("id".to_string(), Value::Int(1));
        row.insert("label".to_string(), Value::Str("a".into()));
        table.push_row(row);

        let mut row = Row::new();
        row.insert("id".to_string(), Value::Int(2));
        // No label field at all
        table.push_row(row);

        let labels: Vec<&Value> = table.column_values("label").collect();
        assert_eq!(labels, vec![&Value::Str("a".into()), &Value::Null]);
    }

    #[test]
    fn test_table_sample() {
        let mut table = Table::new(vec!["id".to_string()]);
        for i in 0..10 {
            let mut row = Row::new();
            row.insert("id".to_string(), Value::Int(i));
            table.push_row(row);
        }

        let sample = table.sample(5);
        assert_eq!(sample.len(), 5);

        let large_sample = table.sample(100);
        assert_eq!(large_sample.len(), 10); // Only has 10 rows
    }

    #[test]
    fn test_csv_inference() {
        let csv = "id,value,flag,note\n1,2.5,true,ok\n2,,false,\n3,inf,TRUE,text here\n";
        let table = Table::from_csv_str(csv).unwrap();

        assert_eq!(table.columns(), &["id", "value", "flag", "note"]);
        assert_eq!(table.len(), 3);

        let row = table.get_row(0).unwrap();
        assert_eq!(row.get("id"), Some(&Value::Int(1)));
        assert_eq!(row.get("value"), Some(&Value::Float(2.5)));
        assert_eq!(row.get("flag"), Some(&Value::Bool(true)));
        assert_eq!(row.get("note"), Some(&Value::Str("ok".into())));

        let row = table.get_row(1).unwrap();
        assert_eq!(row.get("value"), Some(&Value::Null));
        assert_eq!(row.get("note"), Some(&Value::Null));

        let row = table.get_row(2).unwrap();
        assert_eq!(row.get("value"), Some(&Value::Float(f64::INFINITY)));
        assert_eq!(row.get("flag"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_csv_short_record_reads_null() {
        let csv = "a,b,c\n1,2\n";
        let table = Table::from_csv_str(csv).unwrap();
        let row = table.get_row(0).unwrap();
        assert_eq!(row.get("c"), Some(&Value::Null));
    }
}
