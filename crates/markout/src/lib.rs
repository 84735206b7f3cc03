//! # Markout - Styled HTML Table Rendering
//!
//! `markout` turns a sequence of uniformly-shaped records into one styled
//! HTML `<table>` fragment, ready to embed in a report or an email body. No
//! templating engine, no DOM, no external CSS — just inline styles on a flat
//! table.
//!
//! ## Core Concepts
//!
//! - [`Record`]: one input row — an insertion-ordered map of field name to
//!   [`CellValue`]
//! - [`TableOptions`]: title, column order, colors, alternating row
//!   backgrounds, empty-state message
//! - [`CellRule`]: declarative per-cell styling selected by row parity and
//!   column name
//! - [`render`]: one-shot rendering; [`HtmlTableWriter`] for record-at-a-time
//!   streaming
//! - [`parse_css`]: load rule lists from a small CSS sheet
//!
//! ## Quick Start
//!
//! ```rust
//! use markout::{render, CellRule, Record, TableOptions};
//!
//! let records = vec![
//!     Record::new().field("name", "widget").field("qty", 4),
//!     Record::new().field("name", "gadget").field("qty", 7),
//!     Record::new().field("name", "sprocket").field("qty", 2),
//! ];
//!
//! let options = TableOptions::default()
//!     .title("Inventory")
//!     .rule(CellRule::any("text-align", "right").column("qty"));
//!
//! let html = render(&records, &options);
//! assert!(html.starts_with("<table"));
//! assert!(html.contains("Inventory"));
//! ```
//!
//! ## Column Resolution
//!
//! Columns come from the first record: its field order is the column order,
//! unless [`TableOptions::columns`](TableOptions) requests an explicit list
//! (requested order wins; names the record lacks are dropped). Later records
//! never change the column list — missing fields render as empty cells.
//!
//! ## Formatting Rules
//!
//! Every rule matching a cell contributes its `property:value;` fragment to
//! the cell's inline style, in declaration order. Conflicting properties are
//! all emitted; the client's CSS cascade decides. Rules can be declared in
//! code, in YAML options, or as CSS:
//!
//! ```rust
//! use markout::parse_css;
//!
//! let rules = parse_css(r#"
//!     odd          { background-color: #F3F6FB; }
//!     .price       { text-align: right; }
//!     even .status { color: #1B7F3A; }
//! "#).unwrap();
//! assert_eq!(rules.len(), 3);
//! ```
//!
//! ## YAML-Based Options
//!
//! Options deserialize from YAML, so presentation can ship as config:
//!
//! ```rust
//! use markout::TableOptions;
//!
//! let options = TableOptions::from_yaml(r##"
//! title: Weekly totals
//! columns: [name, qty]
//! header_background: "#333333"
//! rules:
//!   - column: qty
//!     property: text-align
//!     value: right
//! "##).unwrap();
//! ```
//!
//! ## What It Does Not Do
//!
//! Field values are emitted verbatim — no HTML escaping, by design: callers
//! own their data and may embed markup deliberately. The output is not
//! validated. There is exactly one layout: a flat table with an optional
//! title row and header row.

mod error;
pub mod record;
pub mod style;
pub mod table;

// Error type
pub use error::MarkupError;

// Record module exports
pub use record::{CellValue, Record};

// Style module exports
pub use style::{parse_css, CellRule, ColumnSelector, RowSelector};

// Table module exports
pub use table::{
    render, render_serialize, HtmlTableWriter, ResolvedColumns, TableOptions, ATTR_PREFIX,
    ATTR_TARGET_SEPARATOR, DEFAULT_TABLE_STYLE,
};
