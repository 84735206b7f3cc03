//! Row and column selectors for cell formatting rules.
//!
//! Selectors serialize as plain strings (`"odd"`, `"any"`, a field name) so
//! rule lists read naturally in YAML and JSON configs. Parsing is strict:
//! an unknown parity token is a configuration error, reported immediately
//! rather than silently matching nothing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MarkupError;

/// Which data rows a rule applies to.
///
/// Parity is zero-based over emitted data rows: row 0 is even.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RowSelector {
    /// Every data row.
    #[default]
    Any,
    /// Rows with odd index (1, 3, 5, ...).
    Odd,
    /// Rows with even index (0, 2, 4, ...).
    Even,
}

impl RowSelector {
    /// Whether the selector matches the row at `row_index`.
    pub fn matches(&self, row_index: usize) -> bool {
        match self {
            RowSelector::Any => true,
            RowSelector::Odd => row_index % 2 == 1,
            RowSelector::Even => row_index % 2 == 0,
        }
    }

    /// The canonical token for this selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            RowSelector::Any => "any",
            RowSelector::Odd => "odd",
            RowSelector::Even => "even",
        }
    }
}

impl fmt::Display for RowSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowSelector {
    type Err = MarkupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "any" | "*" => Ok(RowSelector::Any),
            "odd" => Ok(RowSelector::Odd),
            "even" => Ok(RowSelector::Even),
            other => Err(MarkupError::SelectorError(format!(
                "invalid row selector '{}': expected 'any', 'odd' or 'even'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for RowSelector {
    type Error = MarkupError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RowSelector> for String {
    fn from(selector: RowSelector) -> Self {
        selector.as_str().to_string()
    }
}

/// Which columns a rule applies to.
///
/// The tokens `any` and `*` are reserved; a column literally named `any`
/// cannot be selected by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColumnSelector {
    /// Every column.
    #[default]
    Any,
    /// The column whose field name matches exactly.
    Field(String),
}

impl ColumnSelector {
    /// Whether the selector matches the column named `field`.
    pub fn matches(&self, field: &str) -> bool {
        match self {
            ColumnSelector::Any => true,
            ColumnSelector::Field(name) => name == field,
        }
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSelector::Any => f.write_str("any"),
            ColumnSelector::Field(name) => f.write_str(name),
        }
    }
}

impl FromStr for ColumnSelector {
    type Err = MarkupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(MarkupError::SelectorError(
                "empty column selector: expected 'any', '*' or a field name".to_string(),
            )),
            "any" | "*" => Ok(ColumnSelector::Any),
            name => Ok(ColumnSelector::Field(name.to_string())),
        }
    }
}

impl TryFrom<String> for ColumnSelector {
    type Error = MarkupError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ColumnSelector> for String {
    fn from(selector: ColumnSelector) -> Self {
        match selector {
            ColumnSelector::Any => "any".to_string(),
            ColumnSelector::Field(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_selector_default_is_any() {
        assert_eq!(RowSelector::default(), RowSelector::Any);
    }

    #[test]
    fn row_selector_parse() {
        assert_eq!("any".parse::<RowSelector>().unwrap(), RowSelector::Any);
        assert_eq!("*".parse::<RowSelector>().unwrap(), RowSelector::Any);
        assert_eq!("odd".parse::<RowSelector>().unwrap(), RowSelector::Odd);
        assert_eq!("even".parse::<RowSelector>().unwrap(), RowSelector::Even);
    }

    #[test]
    fn row_selector_rejects_unknown_parity() {
        let err = "diagonal".parse::<RowSelector>().unwrap_err();
        assert!(matches!(err, MarkupError::SelectorError(_)));
        assert!(err.to_string().contains("diagonal"));
    }

    #[test]
    fn row_selector_matching() {
        assert!(RowSelector::Any.matches(0));
        assert!(RowSelector::Any.matches(7));
        assert!(RowSelector::Even.matches(0));
        assert!(!RowSelector::Even.matches(1));
        assert!(RowSelector::Odd.matches(3));
        assert!(!RowSelector::Odd.matches(2));
    }

    #[test]
    fn row_selector_serde_roundtrip() {
        let values = [RowSelector::Any, RowSelector::Odd, RowSelector::Even];
        for selector in values {
            let json = serde_json::to_string(&selector).unwrap();
            let parsed: RowSelector = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, selector);
        }
    }

    #[test]
    fn row_selector_serde_rejects_unknown() {
        let result: Result<RowSelector, _> = serde_json::from_str("\"diagonal\"");
        assert!(result.is_err());
    }

    #[test]
    fn column_selector_parse() {
        assert_eq!("any".parse::<ColumnSelector>().unwrap(), ColumnSelector::Any);
        assert_eq!("*".parse::<ColumnSelector>().unwrap(), ColumnSelector::Any);
        assert_eq!(
            "price".parse::<ColumnSelector>().unwrap(),
            ColumnSelector::Field("price".to_string())
        );
        assert!("".parse::<ColumnSelector>().is_err());
    }

    #[test]
    fn column_selector_matching() {
        assert!(ColumnSelector::Any.matches("anything"));
        let price = ColumnSelector::Field("price".to_string());
        assert!(price.matches("price"));
        assert!(!price.matches("name"));
    }

    #[test]
    fn column_selector_serde_roundtrip() {
        let values = [
            ColumnSelector::Any,
            ColumnSelector::Field("status".to_string()),
        ];
        for selector in values {
            let json = serde_json::to_string(&selector).unwrap();
            let parsed: ColumnSelector = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, selector);
        }
    }
}
