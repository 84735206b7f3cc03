//! Streaming HTML table emission.
//!
//! [`HtmlTableWriter`] accepts records one at a time. The table prologue
//! (opening tag, title row, header row) cannot be emitted before the column
//! list is known, and the column list comes from the first record — so
//! emission is deferred until the first [`push`](HtmlTableWriter::push), and
//! [`finish`](HtmlTableWriter::finish) settles the empty-input case with a
//! single-column span and the informational empty row. Nothing beyond the
//! output buffer and the resolved column list is retained between records.

use crate::record::{CellValue, Record};
use crate::table::options::{TableOptions, EMPTY_MESSAGE_COLOR};
use crate::table::resolve::{ResolvedColumns, ATTR_PREFIX, ATTR_TARGET_SEPARATOR};

/// Incremental table writer.
///
/// # Example
///
/// ```rust
/// use markout::{HtmlTableWriter, Record, TableOptions};
///
/// let options = TableOptions::default();
/// let mut writer = HtmlTableWriter::new(&options);
/// writer.push(&Record::new().field("name", "widget"));
/// writer.push(&Record::new().field("name", "gadget"));
/// let html = writer.finish();
/// assert!(html.starts_with("<table"));
/// assert!(html.ends_with("</table>"));
/// ```
#[derive(Debug)]
pub struct HtmlTableWriter<'a> {
    options: &'a TableOptions,
    buf: String,
    columns: Option<ResolvedColumns>,
    row_index: usize,
}

impl<'a> HtmlTableWriter<'a> {
    /// Creates a writer that emits nothing until the first record arrives.
    pub fn new(options: &'a TableOptions) -> Self {
        HtmlTableWriter {
            options,
            buf: String::new(),
            columns: None,
            row_index: 0,
        }
    }

    /// Appends one data row.
    ///
    /// The first call resolves the column list from this record and emits
    /// the table prologue.
    pub fn push(&mut self, record: &Record) {
        if self.columns.is_none() {
            let columns = ResolvedColumns::resolve(record, self.options.columns.as_deref());
            let prologue = format_prologue(self.options, &columns, true);
            self.buf.push_str(&prologue);
            self.columns = Some(columns);
        }
        if let Some(columns) = &self.columns {
            let row = format_row(self.options, columns, self.row_index, record);
            self.buf.push_str(&row);
        }
        self.row_index += 1;
    }

    /// Number of data rows pushed so far.
    pub fn rows_written(&self) -> usize {
        self.row_index
    }

    /// Closes the table and returns the markup.
    ///
    /// With no pushed records this emits the prologue (title spanning a
    /// single column, no header row) followed by the empty-state row.
    pub fn finish(mut self) -> String {
        if self.columns.is_none() {
            let prologue = format_prologue(self.options, &ResolvedColumns::none(), false);
            self.buf.push_str(&prologue);
            self.buf.push_str(&format!(
                "<tr><td align=\"center\" style=\"color:{}\">{}</td></tr>\n",
                EMPTY_MESSAGE_COLOR, self.options.empty_message
            ));
        }
        self.buf.push_str("</table>");
        self.buf
    }
}

/// Opening table tag, optional title row, optional header row.
fn format_prologue(options: &TableOptions, columns: &ResolvedColumns, with_header: bool) -> String {
    let mut out = format!("<table style=\"{}\">\n", options.merged_table_style());

    if let Some(title) = &options.title {
        out.push_str(&format!(
            "<tr><td colspan=\"{}\" align=\"center\" style=\"background-color:{};color:{}\">{}</td></tr>\n",
            columns.span(),
            options.title_background,
            options.title_foreground,
            title
        ));
    }

    if with_header && !columns.is_empty() {
        out.push_str("<tr>");
        for name in columns.names() {
            out.push_str(&format!(
                "<td align=\"center\" style=\"background-color:{};color:{};font-weight:bold\">{}</td>",
                options.header_background, options.header_foreground, name
            ));
        }
        out.push_str("</tr>\n");
    }

    out
}

/// One `<tr>` for `record` at `row_index`, with the parity background.
fn format_row(
    options: &TableOptions,
    columns: &ResolvedColumns,
    row_index: usize,
    record: &Record,
) -> String {
    let background = if row_index % 2 == 0 {
        &options.row_background_a
    } else {
        &options.row_background_b
    };

    let mut row = format!("<tr style=\"background-color:{}\">", background);
    for name in columns.names() {
        row.push_str(&format_cell(options, record, row_index, name));
    }
    row.push_str("</tr>\n");
    row
}

/// One `<td>`: legacy attribute injection, accumulated rule styles, then the
/// default alignment for non-textual values.
fn format_cell(options: &TableOptions, record: &Record, row_index: usize, column: &str) -> String {
    let mut attributes = String::new();
    let mut explicit_alignment = false;

    if options.legacy_attributes {
        for (field, value) in record.iter() {
            let rest = match field.strip_prefix(ATTR_PREFIX) {
                Some(rest) => rest,
                None => continue,
            };
            // `ATTR_name:column` targets one column; `ATTR_name` targets the
            // whole row.
            let (attribute, target) = match rest.split_once(ATTR_TARGET_SEPARATOR) {
                Some((attribute, target)) => (attribute, Some(target)),
                None => (rest, None),
            };
            if attribute.is_empty() {
                continue;
            }
            if let Some(target) = target {
                if target != column {
                    continue;
                }
            }
            attributes.push_str(&format!(" {}=\"{}\"", attribute, value));
            if attribute.eq_ignore_ascii_case("align") {
                explicit_alignment = true;
            }
        }
    }

    let mut style = String::new();
    for rule in &options.rules {
        if rule.matches(row_index, column) {
            style.push_str(&rule.fragment());
            if rule.property.eq_ignore_ascii_case("text-align") {
                explicit_alignment = true;
            }
        }
    }
    if !style.is_empty() {
        attributes.push_str(&format!(" style=\"{}\"", style));
    }

    let value = record.get(column);
    let textual = matches!(value, Some(CellValue::Str(_)));
    if !explicit_alignment && !textual {
        attributes.push_str(" align=\"center\"");
    }

    let content = value.map(|v| v.to_string()).unwrap_or_default();
    format!("<td{}>{}</td>", attributes, content)
}
