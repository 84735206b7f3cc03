//! Declarative cell formatting rules.
//!
//! A [`CellRule`] ties a row/column selector pair to a single CSS
//! `property: value` declaration. Every rule matching a cell contributes its
//! fragment to the cell's inline style, in declaration order. Conflicting
//! properties are all emitted; the rendering-time CSS cascade picks the
//! effective one. Rules naming columns that never resolve simply match
//! nothing.

use serde::{Deserialize, Serialize};

use super::selector::{ColumnSelector, RowSelector};

/// One formatting rule: selectors plus a CSS declaration, emitted verbatim.
///
/// # Example
///
/// ```rust
/// use markout::CellRule;
///
/// let rules = vec![
///     CellRule::odd("background-color", "#F3F6FB"),
///     CellRule::any("text-align", "right").column("price"),
/// ];
///
/// assert!(rules[0].matches(1, "price"));
/// assert!(!rules[0].matches(2, "price"));
/// assert!(rules[1].matches(2, "price"));
/// assert!(!rules[1].matches(2, "name"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRule {
    /// Row parity the rule applies to.
    #[serde(default)]
    pub row: RowSelector,
    /// Column the rule applies to.
    #[serde(default)]
    pub column: ColumnSelector,
    /// CSS property name, emitted as-is.
    pub property: String,
    /// CSS value, emitted as-is.
    pub value: String,
}

impl CellRule {
    /// Creates a rule with explicit selectors.
    pub fn new(
        row: RowSelector,
        column: ColumnSelector,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        CellRule {
            row,
            column,
            property: property.into(),
            value: value.into(),
        }
    }

    /// Rule applying to every cell.
    pub fn any(property: impl Into<String>, value: impl Into<String>) -> Self {
        CellRule::new(RowSelector::Any, ColumnSelector::Any, property, value)
    }

    /// Rule for odd-indexed rows.
    pub fn odd(property: impl Into<String>, value: impl Into<String>) -> Self {
        CellRule::new(RowSelector::Odd, ColumnSelector::Any, property, value)
    }

    /// Rule for even-indexed rows.
    pub fn even(property: impl Into<String>, value: impl Into<String>) -> Self {
        CellRule::new(RowSelector::Even, ColumnSelector::Any, property, value)
    }

    /// Restricts the rule to one column.
    pub fn column(mut self, field: impl Into<String>) -> Self {
        self.column = ColumnSelector::Field(field.into());
        self
    }

    /// Whether the rule matches the cell at `row_index` in column `field`.
    pub fn matches(&self, row_index: usize, field: &str) -> bool {
        self.row.matches(row_index) && self.column.matches(field)
    }

    /// The `property:value;` fragment this rule contributes when it matches.
    pub fn fragment(&self) -> String {
        format!("{}:{};", self.property, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_selectors() {
        let rule = CellRule::odd("color", "red");
        assert_eq!(rule.row, RowSelector::Odd);
        assert_eq!(rule.column, ColumnSelector::Any);

        let rule = CellRule::even("color", "green").column("status");
        assert_eq!(rule.row, RowSelector::Even);
        assert_eq!(rule.column, ColumnSelector::Field("status".to_string()));
    }

    #[test]
    fn matching_requires_both_selectors() {
        let rule = CellRule::odd("color", "red").column("price");
        assert!(rule.matches(1, "price"));
        assert!(!rule.matches(0, "price"));
        assert!(!rule.matches(1, "name"));
    }

    #[test]
    fn fragment_form() {
        assert_eq!(CellRule::any("color", "red").fragment(), "color:red;");
        assert_eq!(
            CellRule::any("font-size", "9pt").fragment(),
            "font-size:9pt;"
        );
    }

    #[test]
    fn serde_with_string_selectors() {
        let yaml = "row: odd\ncolumn: price\nproperty: color\nvalue: red\n";
        let rule: CellRule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rule, CellRule::odd("color", "red").column("price"));
    }

    #[test]
    fn serde_selectors_default_to_any() {
        let yaml = "property: color\nvalue: red\n";
        let rule: CellRule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rule, CellRule::any("color", "red"));
    }
}
