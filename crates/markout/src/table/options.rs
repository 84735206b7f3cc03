//! Table rendering configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MarkupError;
use crate::style::CellRule;

/// Default inline style for the `<table>` tag.
pub const DEFAULT_TABLE_STYLE: &str =
    "font-family:Segoe UI,Helvetica,Arial,sans-serif;font-size:10pt;border-collapse:collapse";

/// Fixed informational color for the empty-state row.
pub(crate) const EMPTY_MESSAGE_COLOR: &str = "#808080";

/// Configuration for one render call.
///
/// Every option is independently overridable; [`Default`] gives a complete,
/// usable configuration. Options also deserialize from YAML, so table
/// styling can ship as config:
///
/// ```rust
/// use markout::TableOptions;
///
/// let options = TableOptions::from_yaml(r##"
/// title: Weekly totals
/// columns: [name, qty]
/// rules:
///   - row: odd
///     property: color
///     value: "#333333"
/// "##).unwrap();
/// assert_eq!(options.title.as_deref(), Some("Weekly totals"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableOptions {
    /// Title row text. `None` suppresses the title row entirely.
    pub title: Option<String>,
    /// Explicit ordered column list. `None` uses the first record's natural
    /// field order.
    pub columns: Option<Vec<String>>,
    /// Text of the single row emitted when there are no records.
    pub empty_message: String,
    /// Base inline style for the `<table>` tag.
    pub table_style: String,
    /// Extra style appended (semicolon-joined) after `table_style`. Appends,
    /// never replaces.
    pub table_style_override: Option<String>,
    /// Title row background color.
    pub title_background: String,
    /// Title row text color.
    pub title_foreground: String,
    /// Header row background color.
    pub header_background: String,
    /// Header row text color.
    pub header_foreground: String,
    /// Background of even-indexed data rows (0, 2, 4, ...).
    pub row_background_a: String,
    /// Background of odd-indexed data rows (1, 3, 5, ...).
    pub row_background_b: String,
    /// Cell formatting rules, applied in declaration order.
    pub rules: Vec<CellRule>,
    /// Enables the deprecated `ATTR_` field escape that injects per-cell
    /// HTML attributes. Off by default; prefixed fields are excluded from
    /// display columns either way.
    pub legacy_attributes: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            title: None,
            columns: None,
            empty_message: "No records".to_string(),
            table_style: DEFAULT_TABLE_STYLE.to_string(),
            table_style_override: None,
            title_background: "#2F5496".to_string(),
            title_foreground: "#FFFFFF".to_string(),
            header_background: "#4472C4".to_string(),
            header_foreground: "#FFFFFF".to_string(),
            row_background_a: "#FFFFFF".to_string(),
            row_background_b: "#D9E1F2".to_string(),
            rules: Vec::new(),
            legacy_attributes: false,
        }
    }
}

impl TableOptions {
    /// Creates the default configuration.
    pub fn new() -> Self {
        TableOptions::default()
    }

    /// Sets the title row text.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the explicit column list.
    pub fn columns<S: Into<String>, I: IntoIterator<Item = S>>(mut self, columns: I) -> Self {
        self.columns = Some(columns.into_iter().map(|c| c.into()).collect());
        self
    }

    /// Sets the empty-state message.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Replaces the base table style.
    pub fn table_style(mut self, style: impl Into<String>) -> Self {
        self.table_style = style.into();
        self
    }

    /// Appends extra style after the base table style.
    pub fn table_style_override(mut self, style: impl Into<String>) -> Self {
        self.table_style_override = Some(style.into());
        self
    }

    /// Sets the title row background and foreground colors.
    pub fn title_colors(mut self, background: impl Into<String>, foreground: impl Into<String>) -> Self {
        self.title_background = background.into();
        self.title_foreground = foreground.into();
        self
    }

    /// Sets the header row background and foreground colors.
    pub fn header_colors(
        mut self,
        background: impl Into<String>,
        foreground: impl Into<String>,
    ) -> Self {
        self.header_background = background.into();
        self.header_foreground = foreground.into();
        self
    }

    /// Sets the alternating data-row backgrounds (even rows, odd rows).
    pub fn row_backgrounds(mut self, even: impl Into<String>, odd: impl Into<String>) -> Self {
        self.row_background_a = even.into();
        self.row_background_b = odd.into();
        self
    }

    /// Replaces the rule list.
    pub fn rules<I: IntoIterator<Item = CellRule>>(mut self, rules: I) -> Self {
        self.rules = rules.into_iter().collect();
        self
    }

    /// Appends one rule.
    pub fn rule(mut self, rule: CellRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Enables or disables the legacy attribute escape.
    pub fn legacy_attributes(mut self, enabled: bool) -> Self {
        self.legacy_attributes = enabled;
        self
    }

    /// The merged `<table>` style: base plus appended override.
    pub fn merged_table_style(&self) -> String {
        match self.table_style_override.as_deref() {
            Some(extra) if !extra.is_empty() => format!("{};{}", self.table_style, extra),
            _ => self.table_style.clone(),
        }
    }

    /// Loads options from a YAML string.
    ///
    /// Unknown keys and invalid selector tokens are configuration errors.
    pub fn from_yaml(yaml: &str) -> Result<Self, MarkupError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads options from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, MarkupError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}
