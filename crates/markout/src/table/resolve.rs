//! Column resolution from the first record.
//!
//! The column list is fixed once, from the first record alone: later records
//! never add or remove columns. With an explicit request the requested order
//! wins, restricted to fields the first record actually has; without one the
//! record's natural field order is used as-is.

use crate::record::Record;

/// Reserved field-name prefix for the legacy attribute escape. Fields with
/// this prefix carry cell metadata and are never display columns.
pub const ATTR_PREFIX: &str = "ATTR_";

/// Separator between attribute name and target column inside a reserved
/// field name (`ATTR_title:name`).
pub const ATTR_TARGET_SEPARATOR: char = ':';

/// The columns resolved for one render, in output order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedColumns {
    names: Vec<String>,
}

impl ResolvedColumns {
    /// Resolves the column list from the first record.
    pub fn resolve(first: &Record, requested: Option<&[String]>) -> Self {
        let names: Vec<String> = match requested {
            Some(requested) => requested
                .iter()
                .filter(|name| first.get(name.as_str()).is_some())
                .cloned()
                .collect(),
            None => first.field_names().map(str::to_string).collect(),
        };
        let names = names
            .into_iter()
            .filter(|name| !name.starts_with(ATTR_PREFIX))
            .collect();
        ResolvedColumns { names }
    }

    /// Resolution for an empty input sequence: no columns, but a span of 1
    /// so the title row still spans something.
    pub fn none() -> Self {
        ResolvedColumns::default()
    }

    /// Column names in output order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of resolved columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no columns resolved.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column count used for the title's `colspan`; at least 1.
    pub fn span(&self) -> usize {
        self.names.len().max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_abc() -> Record {
        Record::new().field("a", 1).field("b", 2).field("c", 3)
    }

    #[test]
    fn natural_order_without_request() {
        let resolved = ResolvedColumns::resolve(&record_abc(), None);
        assert_eq!(resolved.names(), ["a", "b", "c"]);
    }

    #[test]
    fn requested_order_wins() {
        let requested = vec!["b".to_string(), "a".to_string()];
        let resolved = ResolvedColumns::resolve(&record_abc(), Some(&requested));
        assert_eq!(resolved.names(), ["b", "a"]);
    }

    #[test]
    fn requested_names_missing_from_record_are_dropped() {
        let requested = vec!["b".to_string(), "ghost".to_string(), "a".to_string()];
        let resolved = ResolvedColumns::resolve(&record_abc(), Some(&requested));
        assert_eq!(resolved.names(), ["b", "a"]);
    }

    #[test]
    fn reserved_prefix_fields_never_resolve() {
        let record = Record::new()
            .field("a", 1)
            .field("ATTR_title:a", "hint")
            .field("ATTR_class", "wide");
        let resolved = ResolvedColumns::resolve(&record, None);
        assert_eq!(resolved.names(), ["a"]);

        // Even when explicitly requested.
        let requested = vec!["a".to_string(), "ATTR_class".to_string()];
        let resolved = ResolvedColumns::resolve(&record, Some(&requested));
        assert_eq!(resolved.names(), ["a"]);
    }

    #[test]
    fn span_is_at_least_one() {
        assert_eq!(ResolvedColumns::none().span(), 1);
        assert_eq!(ResolvedColumns::resolve(&record_abc(), None).span(), 3);
    }

    #[test]
    fn empty_request_resolves_no_columns() {
        let resolved = ResolvedColumns::resolve(&record_abc(), Some(&[]));
        assert!(resolved.is_empty());
        assert_eq!(resolved.span(), 1);
    }
}
