//! Property tests for the structural invariants: cell-count agreement,
//! parity alternation, alignment defaults, purity, and empty-state handling.

use markout::{render, Record, TableOptions};
use proptest::prelude::*;

const FIELDS: [&str; 5] = ["alpha", "beta", "gamma", "delta", "epsilon"];

fn build_records(names: &[&str], rows: &[Vec<i64>]) -> Vec<Record> {
    rows.iter()
        .map(|values| {
            names
                .iter()
                .zip(values)
                .map(|(name, value)| (*name, *value))
                .collect()
        })
        .collect()
}

fn data_rows(html: &str) -> Vec<&str> {
    html.lines()
        .filter(|line| line.starts_with("<tr style="))
        .collect()
}

proptest! {
    #[test]
    fn header_and_every_data_row_agree_on_cell_count(
        names in prop::sample::subsequence(FIELDS.to_vec(), 1..=5),
        rows in proptest::collection::vec(proptest::collection::vec(any::<i64>(), 5), 1..6),
    ) {
        let records = build_records(&names, &rows);
        let html = render(&records, &TableOptions::default());

        let header = html
            .lines()
            .find(|line| line.contains("font-weight:bold"))
            .expect("header row");
        prop_assert_eq!(header.matches("<td").count(), names.len());

        let data = data_rows(&html);
        prop_assert_eq!(data.len(), rows.len());
        for row in data {
            prop_assert_eq!(row.matches("<td").count(), names.len());
        }
    }

    #[test]
    fn parity_backgrounds_alternate(
        names in prop::sample::subsequence(FIELDS.to_vec(), 1..=5),
        rows in proptest::collection::vec(proptest::collection::vec(any::<i64>(), 5), 1..8),
    ) {
        let records = build_records(&names, &rows);
        let options = TableOptions::default();
        let html = render(&records, &options);

        for (index, row) in data_rows(&html).iter().enumerate() {
            let expected = if index % 2 == 0 {
                &options.row_background_a
            } else {
                &options.row_background_b
            };
            prop_assert!(
                row.contains(expected.as_str()),
                "row {} missing background {}: {}",
                index,
                expected,
                row
            );
        }
    }

    #[test]
    fn numeric_cells_all_center(
        names in prop::sample::subsequence(FIELDS.to_vec(), 1..=5),
        rows in proptest::collection::vec(proptest::collection::vec(any::<i64>(), 5), 1..6),
    ) {
        let records = build_records(&names, &rows);
        let html = render(&records, &TableOptions::default());

        for row in data_rows(&html) {
            prop_assert_eq!(row.matches("align=\"center\"").count(), names.len());
        }
    }

    #[test]
    fn rendering_twice_is_byte_identical(
        names in prop::sample::subsequence(FIELDS.to_vec(), 1..=5),
        rows in proptest::collection::vec(proptest::collection::vec(any::<i64>(), 5), 0..6),
        title in prop::option::of("[A-Za-z ]{1,20}"),
    ) {
        let records = build_records(&names, &rows);
        let mut options = TableOptions::default();
        if let Some(title) = title {
            options = options.title(title);
        }

        prop_assert_eq!(render(&records, &options), render(&records, &options));
    }

    #[test]
    fn empty_input_always_renders_empty_state(
        title in prop::option::of("[A-Za-z ]{1,20}"),
        columns in prop::option::of(prop::sample::subsequence(FIELDS.to_vec(), 0..=5)),
    ) {
        let mut options = TableOptions::default();
        if let Some(title) = title.clone() {
            options = options.title(title);
        }
        if let Some(columns) = columns {
            options = options.columns(columns);
        }

        let html = render(&[], &options);
        prop_assert!(html.contains(">No records</td>"));

        let expected_rows = 1 + usize::from(title.is_some());
        prop_assert_eq!(html.matches("<tr").count(), expected_rows);
    }
}
