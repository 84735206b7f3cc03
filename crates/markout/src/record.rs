//! Record and cell value types.
//!
//! A [`Record`] is one input row: an insertion-ordered mapping from field
//! name to [`CellValue`]. The renderer reads "natural field order" straight
//! off this insertion order, so the map type's ordering contract is
//! load-bearing.
//!
//! # Example
//!
//! ```rust
//! use markout::{CellValue, Record};
//!
//! let record = Record::new()
//!     .field("name", "widget")
//!     .field("qty", 4)
//!     .field("in_stock", true);
//!
//! assert_eq!(record.get("qty"), Some(&CellValue::Int(4)));
//! let names: Vec<&str> = record.field_names().collect();
//! assert_eq!(names, ["name", "qty", "in_stock"]);
//! ```

use std::fmt;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::error::MarkupError;

/// A single cell value.
///
/// Textual values default to the cell's natural left alignment; every other
/// variant is center-aligned unless a rule or attribute says otherwise.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    /// Textual value.
    Str(String),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value, rendered as `true`/`false`.
    Bool(bool),
    /// Calendar date, rendered as ISO `YYYY-MM-DD`.
    Date(NaiveDate),
    /// Absent value, rendered as an empty cell.
    Null,
}

impl CellValue {
    /// Whether the value is textual.
    pub fn is_textual(&self) -> bool {
        matches!(self, CellValue::Str(_))
    }

    /// Converts a JSON value into a cell value.
    ///
    /// Strings stay strings even when they look like dates; callers that want
    /// [`CellValue::Date`] build records directly. Arrays and objects coerce
    /// to their JSON text form.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Int(i),
                None => CellValue::Float(n.as_f64().unwrap_or(0.0)),
            },
            Value::String(s) => CellValue::Str(s.clone()),
            other => CellValue::Str(other.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Str(s) => f.write_str(s),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::Null => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Str(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Str(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(value as i64)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Int(value as i64)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

/// One input row: field names mapped to values, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, CellValue>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Record::default()
    }

    /// Adds a field, keeping insertion order. Fluent.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Adds or replaces a field in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<CellValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Looks up a field by name.
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields.get(name)
    }

    /// Field names in natural (insertion) order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates `(name, value)` pairs in natural order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds a record from any serializable value.
    ///
    /// The value must serialize to a map; field order follows the struct's
    /// declaration order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use markout::{CellValue, Record};
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Item {
    ///     name: String,
    ///     qty: u32,
    /// }
    ///
    /// let record = Record::from_serialize(&Item { name: "widget".into(), qty: 4 }).unwrap();
    /// let names: Vec<&str> = record.field_names().collect();
    /// assert_eq!(names, ["name", "qty"]);
    /// assert_eq!(record.get("qty"), Some(&CellValue::Int(4)));
    /// ```
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Record, MarkupError> {
        let json = serde_json::to_value(value)?;
        match json {
            Value::Object(map) => {
                let mut fields = IndexMap::with_capacity(map.len());
                for (name, value) in &map {
                    fields.insert(name.clone(), CellValue::from_json(value));
                }
                Ok(Record { fields })
            }
            other => Err(MarkupError::RecordError(format!(
                "expected a map-like value, got: {}",
                other
            ))),
        }
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}
