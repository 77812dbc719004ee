//! The filter, sort, paginate pipeline.
//!
//! Every function works on index projections over the caller's rows, so the
//! input sequence is never reordered.

use super::column::{Column, TableRow};
use super::sort::{SortDirection, SortState};

/// Indices of rows matching `query` in any column.
///
/// Matching is a case-insensitive substring test on each cell's display
/// string. An empty query keeps every row in input order.
pub fn filter_indices<T: TableRow>(rows: &[T], columns: &[Column<T>], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..rows.len()).collect();
    }

    let query_lower = query.to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| {
            columns
                .iter()
                .any(|c| row.cell(c.key).matches(&query_lower))
        })
        .map(|(i, _)| i)
        .collect()
}

/// Stable sort of `indices` by the active sort column.
///
/// Rows that compare equal keep their relative order in both directions.
pub fn sort_indices<T: TableRow>(rows: &[T], indices: &mut [usize], sort: &SortState) {
    let Some(key) = sort.column else {
        return;
    };

    // Decorate once so each row's cell is read a single time.
    let mut keyed: Vec<_> = indices.iter().map(|&i| (rows[i].cell(key), i)).collect();
    keyed.sort_by(|(a, _), (b, _)| match sort.direction {
        SortDirection::Ascending => a.compare(b),
        SortDirection::Descending => b.compare(a),
    });

    for (slot, (_, i)) in indices.iter_mut().zip(keyed) {
        *slot = i;
    }
}

/// Filter then sort: the derived sequence before pagination.
pub fn derive_indices<T: TableRow>(
    rows: &[T],
    columns: &[Column<T>],
    query: &str,
    sort: &SortState,
) -> Vec<usize> {
    let mut indices = filter_indices(rows, columns, query);
    sort_indices(rows, &mut indices, sort);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::pagination::page_range;
    use crate::table::value::{CellValue, RowId};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i64,
        name: String,
        group: i64,
    }

    impl TableRow for Item {
        fn id(&self) -> RowId {
            RowId::Int(self.id)
        }

        fn cell(&self, key: &str) -> CellValue {
            match key {
                "id" => CellValue::Int(self.id),
                "name" => self.name.as_str().into(),
                "group" => CellValue::Int(self.group),
                _ => CellValue::Empty,
            }
        }
    }

    fn item(id: i64, name: &str, group: i64) -> Item {
        Item {
            id,
            name: name.to_string(),
            group,
        }
    }

    fn scenario_rows() -> Vec<Item> {
        vec![item(1, "Zeta", 0), item(2, "alpha", 0), item(3, "Mid", 0)]
    }

    fn columns() -> Vec<Column<Item>> {
        vec![
            Column::new("id", "ID").sortable(),
            Column::new("name", "Name").sortable(),
            Column::new("group", "Group").sortable(),
        ]
    }

    fn ids(rows: &[Item], indices: &[usize]) -> Vec<i64> {
        indices.iter().map(|&i| rows[i].id).collect()
    }

    fn sorted_by(key: &'static str, direction: SortDirection) -> SortState {
        SortState {
            column: Some(key),
            direction,
        }
    }

    /// A larger set with repeated names and groups.
    fn sample_rows() -> Vec<Item> {
        let names = ["Ada", "bob", "Cy", "ada", "Eve", "BOB", "dan", "Cy"];
        names
            .iter()
            .enumerate()
            .map(|(i, name)| item(i as i64 + 1, name, (i % 3) as i64))
            .collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything_in_order() {
        let rows = sample_rows();
        let indices = filter_indices(&rows, &columns(), "");
        assert_eq!(indices, (0..rows.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_is_substring_not_subsequence() {
        let rows = scenario_rows();
        assert!(filter_indices(&rows, &columns(), "ap").is_empty());
        let indices = filter_indices(&rows, &columns(), "LP");
        assert_eq!(ids(&rows, &indices), vec![2]);
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let rows = scenario_rows();
        assert!(filter_indices(&rows, &columns(), "nothing").is_empty());
    }

    #[test]
    fn test_filter_is_exact_partition() {
        let rows = sample_rows();
        let cols = columns();
        for query in ["a", "B", "cy", "1", "2", "zz", "ev"] {
            let kept = filter_indices(&rows, &cols, query);
            let lower = query.to_lowercase();
            for (i, row) in rows.iter().enumerate() {
                let matches = cols.iter().any(|c| {
                    row.cell(c.key).to_string().to_lowercase().contains(&lower)
                });
                assert_eq!(kept.contains(&i), matches, "query {query:?} row {i}");
            }
        }
    }

    #[test]
    fn test_filter_checks_every_column() {
        struct Flagged {
            name: &'static str,
            flag: bool,
        }

        impl TableRow for Flagged {
            fn id(&self) -> RowId {
                RowId::from(self.name)
            }

            fn cell(&self, key: &str) -> CellValue {
                match key {
                    "name" => self.name.into(),
                    "flag" => CellValue::Bool(self.flag),
                    _ => CellValue::Empty,
                }
            }
        }

        let rows = vec![
            Flagged { name: "Ada", flag: true },
            Flagged { name: "Bob", flag: false },
        ];
        let cols: Vec<Column<Flagged>> =
            vec![Column::new("name", "Name"), Column::new("flag", "Flag")];
        assert_eq!(filter_indices(&rows, &cols, "true"), vec![0]);
        assert_eq!(filter_indices(&rows, &cols, "FALSE"), vec![1]);
    }

    #[test]
    fn test_sort_scenario_ascending() {
        let rows = scenario_rows();
        let mut indices = filter_indices(&rows, &columns(), "");
        sort_indices(&rows, &mut indices, &sorted_by("name", SortDirection::Ascending));
        let names: Vec<_> = indices.iter().map(|&i| rows[i].name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn test_no_sort_column_keeps_order() {
        let rows = sample_rows();
        let indices = derive_indices(&rows, &columns(), "", &SortState::default());
        assert_eq!(indices, (0..rows.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_descending_reverses_distinct_values() {
        let rows = sample_rows();
        let cols = columns();
        let asc = derive_indices(&rows, &cols, "", &sorted_by("id", SortDirection::Ascending));
        let mut desc =
            derive_indices(&rows, &cols, "", &sorted_by("id", SortDirection::Descending));
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let rows = sample_rows();
        let cols = columns();
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let indices = derive_indices(&rows, &cols, "", &sorted_by("group", direction));
            for pair in indices.windows(2) {
                let (a, b) = (&rows[pair[0]], &rows[pair[1]]);
                if a.group == b.group {
                    assert!(pair[0] < pair[1], "unstable for {:?} / {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_sort_is_stable_after_filter() {
        let rows = sample_rows();
        let cols = columns();
        // "ada" and "Ada" compare equal case-insensitively.
        let indices = derive_indices(
            &rows,
            &cols,
            "a",
            &sorted_by("name", SortDirection::Ascending),
        );
        let names: Vec<_> = indices.iter().map(|&i| rows[i].name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "ada", "dan"]);
    }

    #[test]
    fn test_sort_does_not_touch_input() {
        let rows = sample_rows();
        let before = rows.clone();
        let _ = derive_indices(&rows, &columns(), "", &sorted_by("name", SortDirection::Descending));
        assert_eq!(rows, before);
    }

    #[test]
    fn test_pages_concatenate_to_derived_sequence() {
        let rows = sample_rows();
        let derived = derive_indices(
            &rows,
            &columns(),
            "",
            &sorted_by("name", SortDirection::Ascending),
        );
        for page_size in 1..=derived.len() + 1 {
            let pages = derived.len().div_ceil(page_size).max(1);
            let joined: Vec<usize> = (1..=pages)
                .flat_map(|page| derived[page_range(derived.len(), page, page_size)].to_vec())
                .collect();
            assert_eq!(joined, derived, "page size {page_size}");
        }
    }

    #[test]
    fn test_pagination_scenario() {
        let rows = scenario_rows();
        let derived = derive_indices(
            &rows,
            &columns(),
            "",
            &sorted_by("name", SortDirection::Ascending),
        );
        assert_eq!(ids(&rows, &derived[page_range(derived.len(), 1, 2)]), vec![2, 3]);
        assert_eq!(ids(&rows, &derived[page_range(derived.len(), 2, 2)]), vec![1]);
    }
}
