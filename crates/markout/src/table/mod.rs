//! HTML table rendering.
//!
//! Two entry points, same output:
//!
//! | Entry point | Use when |
//! |-------------|----------|
//! | [`render`] | All records are in hand |
//! | [`HtmlTableWriter`] | Records arrive one at a time |
//!
//! Rendering is a single pass. The column list is resolved once, from the
//! first record (requested order intersected with its fields, or its natural
//! field order); row parity runs on a zero-based counter over emitted rows;
//! per-cell styling accumulates from the configured rules. An empty input
//! produces the informational empty-state row instead of data rows.
//! Rendering never fails and never escapes field values.
//!
//! ```rust
//! use markout::{render, Record, TableOptions};
//!
//! let records = vec![
//!     Record::new().field("name", "widget").field("qty", 4),
//!     Record::new().field("name", "gadget").field("qty", 7),
//! ];
//! let options = TableOptions::default().title("Inventory");
//!
//! let html = render(&records, &options);
//! assert!(html.contains("Inventory"));
//! assert!(html.contains("<td>widget</td>"));
//! ```

mod options;
mod resolve;
mod writer;

pub use options::{TableOptions, DEFAULT_TABLE_STYLE};
pub use resolve::{ResolvedColumns, ATTR_PREFIX, ATTR_TARGET_SEPARATOR};
pub use writer::HtmlTableWriter;

use serde::Serialize;

use crate::error::MarkupError;
use crate::record::Record;

/// Renders records into one `<table>` fragment.
///
/// Pure and single-pass: the same records and options always produce
/// byte-identical output, and each record is visited exactly once.
pub fn render<'r, I>(records: I, options: &TableOptions) -> String
where
    I: IntoIterator<Item = &'r Record>,
{
    let mut writer = HtmlTableWriter::new(options);
    for record in records {
        writer.push(record);
    }
    writer.finish()
}

/// Renders a slice of serializable values.
///
/// Each item is converted with [`Record::from_serialize`]; columns follow
/// the first item's field declaration order unless options request
/// otherwise.
///
/// # Example
///
/// ```rust
/// use markout::{render_serialize, TableOptions};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Item {
///     name: &'static str,
///     qty: u32,
/// }
///
/// let items = [Item { name: "widget", qty: 4 }];
/// let html = render_serialize(&items, &TableOptions::default()).unwrap();
/// assert!(html.contains("<td>widget</td>"));
/// ```
pub fn render_serialize<T: Serialize>(
    items: &[T],
    options: &TableOptions,
) -> Result<String, MarkupError> {
    let mut writer = HtmlTableWriter::new(options);
    for item in items {
        writer.push(&Record::from_serialize(item)?);
    }
    Ok(writer.finish())
}
