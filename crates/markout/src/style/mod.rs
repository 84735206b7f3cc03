//! Cell formatting rules and selectors.
//!
//! Rules select cells by row parity and column name, and attach one CSS
//! declaration each. They can be built three ways, all producing the same
//! [`CellRule`] values:
//!
//! | Source | Use when |
//! |--------|----------|
//! | Fluent constructors (`CellRule::odd(..).column(..)`) | Rules are known in code |
//! | YAML (via [`TableOptions`](crate::TableOptions) config) | Rules ship with deployment config |
//! | CSS rule sheets ([`parse_css`]) | Many rules, familiar notation |
//!
//! ```rust
//! use markout::{parse_css, CellRule};
//!
//! let from_css = parse_css(".price { text-align: right; }").unwrap();
//! let from_code = vec![CellRule::any("text-align", "right").column("price")];
//! assert_eq!(from_css, from_code);
//! ```

mod css;
mod rule;
mod selector;

pub use css::parse_css;
pub use rule::CellRule;
pub use selector::{ColumnSelector, RowSelector};
