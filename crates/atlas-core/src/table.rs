// File: crates/atlas-core/src/table.rs
// Summary: CSV loading into a dynamically typed table, plus sort and count helpers.

use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{AtlasError, Result};

/// A single CSV cell after type inference.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Value {
    /// Infer a type from raw cell text: empty is `Null`, then booleans, numbers, text.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() {
            return Value::Null;
        }
        match s {
            "true" | "TRUE" | "True" => return Value::Bool(true),
            "false" | "FALSE" | "False" => return Value::Bool(false),
            _ => {}
        }
        // Rust accepts "inf"/"NaN"; a CSV cell with those words is text.
        let numeric = s.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'));
        match s.parse::<f64>() {
            Ok(v) if numeric && v.is_finite() => Value::Number(v),
            _ => Value::Text(s.to_string()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Key used to join rows against GeoJSON properties.
    pub fn as_key(&self) -> Option<String> {
        match self {
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// Tooltip rendering: numbers with three decimals, everything else verbatim.
    pub fn tooltip_text(&self) -> String {
        match self {
            Value::Number(v) => format!("{v:.3}"),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(v) => write!(f, "{v}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// Rows of typed values under a header row.
#[derive(Clone, Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { headers, rows }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;
        let table = Self::from_csv(rdr)?;
        debug!(path = %path.display(), rows = table.len(), columns = table.headers.len(), "loaded csv");
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        Self::from_csv(rdr)
    }

    pub fn parse_str(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }

    fn from_csv<R: Read>(mut rdr: csv::Reader<R>) -> Result<Self> {
        let headers = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>();
        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            // a blank trailing line parses as one empty field
            if rec.iter().all(|f| f.trim().is_empty()) {
                continue;
            }
            let mut row: Vec<Value> = rec.iter().map(Value::parse).collect();
            row.resize(headers.len(), Value::Null);
            rows.push(row);
        }
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] { &self.headers }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn rows(&self) -> &[Vec<Value>] { &self.rows }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| AtlasError::MissingColumn(name.to_string()))
    }

    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let col = self.headers.iter().position(|h| h == column)?;
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Numeric view of a column; non-numeric cells are `None`.
    pub fn numbers(&self, column: &str) -> Result<Vec<Option<f64>>> {
        let col = self.column_index(column)?;
        Ok(self.rows.iter().map(|r| r.get(col).and_then(Value::as_f64)).collect())
    }

    /// Stable ascending sort on a column; numbers first, other cells keep their order after.
    pub fn sort_by_column(&mut self, column: &str) -> Result<()> {
        let col = self.column_index(column)?;
        self.rows.sort_by(|a, b| {
            let (x, y) = (a.get(col).and_then(Value::as_f64), b.get(col).and_then(Value::as_f64));
            match (x, y) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }
        });
        Ok(())
    }

    /// Occurrences per distinct value of `column`, in order of first appearance.
    pub fn count_by(&self, column: &str) -> Result<Vec<(String, usize)>> {
        let col = self.column_index(column)?;
        let mut order: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for row in &self.rows {
            let key = row.get(col).map(Value::to_string).unwrap_or_else(|| "null".to_string());
            match index.get(&key) {
                Some(&i) => order[i].1 += 1,
                None => {
                    index.insert(key.clone(), order.len());
                    order.push((key, 1));
                }
            }
        }
        Ok(order)
    }

    /// Tooltip lines `"{column} : {value}"` for one row; unknown columns read `N/A`.
    pub fn info_lines(&self, row: usize, columns: &[String]) -> Vec<String> {
        columns
            .iter()
            .map(|c| {
                let v = self.value(row, c).map(Value::tooltip_text).unwrap_or_else(|| "N/A".to_string());
                format!("{c} : {v}")
            })
            .collect()
    }

    /// First row whose `column` renders to `key`.
    pub fn find_row(&self, column: &str, key: &str) -> Option<usize> {
        let col = self.headers.iter().position(|h| h == column)?;
        self.rows
            .iter()
            .position(|r| r.get(col).and_then(Value::as_key).as_deref() == Some(key))
    }
}
