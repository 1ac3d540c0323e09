//! Search and sort decisions for enhanced tables.
//!
//! The frontend reads row texts out of the DOM, asks these functions what
//! to do and writes the answer back.

use std::cmp::Ordering;

/// Attribute on the `<table>` holding the last applied order
pub const SORT_ORDER_ATTRIBUTE: &str = "data-sort-order";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_attr(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortOrder::Ascending),
            "desc" => Some(SortOrder::Descending),
            _ => None,
        }
    }

    /// Order applied by the next header click.
    /// Only a stored ascending order flips to descending.
    pub fn next(stored: Option<SortOrder>) -> SortOrder {
        match stored {
            Some(SortOrder::Ascending) => SortOrder::Descending,
            _ => SortOrder::Ascending,
        }
    }
}

/// Case-insensitive substring match of the whole row text.
/// An empty query matches every row.
pub fn row_matches(row_text: &str, query: &str) -> bool {
    row_text.to_lowercase().contains(&query.to_lowercase())
}

/// Visibility of each row for the given query, in row order
pub fn visible_rows<S: AsRef<str>>(row_texts: &[S], query: &str) -> Vec<bool> {
    row_texts
        .iter()
        .map(|text| row_matches(text.as_ref(), query))
        .collect()
}

/// New row order as indices into `keys`.
///
/// `keys` are the trimmed texts of the sorted column. The sort is stable,
/// so equal keys keep their current relative order in both directions.
pub fn sort_permutation<S, F>(keys: &[S], order: SortOrder, compare: F) -> Vec<usize>
where
    S: AsRef<str>,
    F: Fn(&str, &str) -> Ordering,
{
    let mut indices: Vec<usize> = (0..keys.len()).collect();
    indices.sort_by(|&a, &b| {
        let cmp = compare(keys[a].as_ref(), keys[b].as_ref());
        match order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(keys: &[&str], order: SortOrder) -> Vec<String> {
        sort_permutation(keys, order, |a, b| a.cmp(b))
            .into_iter()
            .map(|i| keys[i].to_string())
            .collect()
    }

    #[test]
    fn test_next_order_toggles() {
        assert_eq!(SortOrder::next(None), SortOrder::Ascending);
        assert_eq!(SortOrder::next(Some(SortOrder::Ascending)), SortOrder::Descending);
        assert_eq!(SortOrder::next(Some(SortOrder::Descending)), SortOrder::Ascending);
        assert_eq!(SortOrder::from_attr("asc"), Some(SortOrder::Ascending));
        assert_eq!(SortOrder::from_attr("desc"), Some(SortOrder::Descending));
        assert_eq!(SortOrder::from_attr(""), None);
    }

    #[test]
    fn test_empty_query_shows_everything() {
        let rows = ["Alpha", "beta", ""];
        assert_eq!(visible_rows(&rows, ""), vec![true, true, true]);
    }

    #[test]
    fn test_unmatched_query_hides_everything() {
        let rows = ["Alpha", "beta", "gamma"];
        assert_eq!(visible_rows(&rows, "zzz"), vec![false, false, false]);
    }

    #[test]
    fn test_search_then_clear() {
        let rows: Vec<String> = (0..10)
            .map(|i| {
                if i == 3 || i == 7 {
                    format!("Paper {} exported.csv 2024", i)
                } else {
                    format!("Paper {} draft.docx 2024", i)
                }
            })
            .collect();

        let filtered = visible_rows(&rows, "CSV");
        assert_eq!(filtered.iter().filter(|v| **v).count(), 2);
        assert!(filtered[3] && filtered[7]);

        let cleared = visible_rows(&rows, "");
        assert_eq!(cleared.iter().filter(|v| **v).count(), 10);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let rows = ["Thesis", "thesis draft", "Review"];
        let once = visible_rows(&rows, "THESIS");
        let twice = visible_rows(&rows, "THESIS");
        assert_eq!(once, twice);
        assert_eq!(once, vec![true, true, false]);
    }

    #[test]
    fn test_sort_twice_reverses() {
        let keys = ["b", "c", "a"];
        assert_eq!(apply(&keys, SortOrder::Ascending), vec!["a", "b", "c"]);

        let ascending = apply(&keys, SortOrder::Ascending);
        let ascending: Vec<&str> = ascending.iter().map(String::as_str).collect();
        assert_eq!(apply(&ascending, SortOrder::Descending), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_resort_same_direction_is_noop() {
        let keys = ["a", "b", "b", "c"];
        assert_eq!(
            sort_permutation(&keys, SortOrder::Ascending, |a, b| a.cmp(b)),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn test_ties_keep_current_order() {
        let keys = ["x", "a", "x", "a"];
        assert_eq!(
            sort_permutation(&keys, SortOrder::Ascending, |a, b| a.cmp(b)),
            vec![1, 3, 0, 2]
        );
        assert_eq!(
            sort_permutation(&keys, SortOrder::Descending, |a, b| a.cmp(b)),
            vec![0, 2, 1, 3]
        );
    }

    #[test]
    fn test_numbers_sort_as_text() {
        let keys = ["2", "10", "1"];
        assert_eq!(apply(&keys, SortOrder::Ascending), vec!["1", "10", "2"]);
    }
}
