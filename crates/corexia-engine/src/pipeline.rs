//! The list-view pipeline: filter → sort → paginate.
//!
//! Three pure stages chained in fixed order. No stage retains state
//! between calls or mutates its input, so re-running with unchanged
//! inputs yields an identical page.

use crate::query::{QueryState, SortDirection};
use crate::schema::ListSchema;
use corexia_types::Record;
use std::cmp::Ordering;

/// The materialized slice of records plus pagination metadata handed to
/// a view.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    pub items: Vec<R>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

/// Run the full pipeline over a resolved collection.
pub fn run<R: Record>(records: &[R], schema: &ListSchema<R>, query: &QueryState) -> Page<R> {
    let filtered = filter(records, schema, &query.search_term);
    let sorted = sort(filtered, query.sort_key, query.sort_direction);
    paginate(sorted, query.page, query.page_size)
}

/// Case-insensitive substring match against the schema's designated
/// text fields. An empty or whitespace-only term is the identity; the
/// input order is preserved.
pub fn filter<R: Record>(records: &[R], schema: &ListSchema<R>, term: &str) -> Vec<R> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| {
            schema.search_fields().iter().any(|field| {
                record
                    .field(field)
                    .and_then(|v| v.search_text())
                    .is_some_and(|text| text.contains(&needle))
            })
        })
        .cloned()
        .collect()
}

/// Order a collection by a sort key under the field's comparison
/// semantics. Equal keys fall back to ascending record id, so the
/// output order is total and deterministic regardless of the
/// underlying sort's stability.
pub fn sort<R: Record>(mut records: Vec<R>, key: &str, direction: SortDirection) -> Vec<R> {
    records.sort_by(|a, b| {
        let ordering = match (a.field(key), b.field(key)) {
            // Cross-variant comparison is unreachable under a validated
            // schema; treating it as equal keeps the tie-break in charge.
            (Some(av), Some(bv)) => av.compare(&bv).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        let directed = match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        directed.then_with(|| a.id().cmp(b.id()))
    });
    records
}

/// Slice one page out of a sorted collection.
///
/// `total_pages` is at least 1 even for an empty collection, and the
/// requested page is clamped into `[1, total_pages]`.
pub fn paginate<R>(records: Vec<R>, page: usize, page_size: usize) -> Page<R> {
    let page_size = page_size.max(1);
    let total_items = records.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let current_page = page.clamp(1, total_pages);

    let start = (current_page - 1) * page_size;
    let items: Vec<R> = records
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    Page {
        items,
        total_items,
        total_pages,
        current_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryState;
    use chrono::NaiveDate;
    use corexia_types::Dataset;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dataset(id: &str, name: &str, samples: u64, size_mb: f64, created: NaiveDate) -> Dataset {
        Dataset {
            id: id.to_string(),
            name: name.to_string(),
            samples,
            size_mb,
            created_at: created,
        }
    }

    /// The three datasets from the platform's sample data.
    fn sample_datasets() -> Vec<Dataset> {
        vec![
            dataset("ds_1", "Chat QA", 120_000, 850.0, date(2025, 8, 12)),
            dataset("ds_2", "Customer Support", 54_000, 320.0, date(2025, 7, 3)),
            dataset("ds_3", "Code Instruct", 20_000, 210.0, date(2025, 6, 20)),
        ]
    }

    fn schema() -> ListSchema<Dataset> {
        ListSchema::builder()
            .sort_key(Dataset::FIELD_CREATED_AT)
            .sort_key(Dataset::FIELD_NAME)
            .sort_key(Dataset::FIELD_SAMPLES)
            .sort_key(Dataset::FIELD_SIZE_MB)
            .search_field(Dataset::FIELD_NAME)
            .default_sort(Dataset::FIELD_CREATED_AT, SortDirection::Desc)
            .build()
            .unwrap()
    }

    fn names(page: &Page<Dataset>) -> Vec<&str> {
        page.items.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn test_empty_term_is_identity_in_order() {
        let records = sample_datasets();
        let filtered = filter(&records, &schema(), "   ");
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let records = sample_datasets();
        for term in ["support", "SUPPORT", "SuPpOrT"] {
            let filtered = filter(&records, &schema(), term);
            assert_eq!(filtered.len(), 1, "term {term:?}");
            assert_eq!(filtered[0].name, "Customer Support");
        }
    }

    #[test]
    fn test_search_matches_substrings() {
        let records = sample_datasets();
        let filtered = filter(&records, &schema(), "c");
        // All three names contain a 'c' case-insensitively
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_search_with_no_match_yields_empty() {
        let records = sample_datasets();
        assert!(filter(&records, &schema(), "nonexistent").is_empty());
    }

    #[test]
    fn test_sort_by_name_ascending() {
        let sorted = sort(sample_datasets(), "name", SortDirection::Asc);
        let names: Vec<_> = sorted.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Chat QA", "Code Instruct", "Customer Support"]);
    }

    #[test]
    fn test_sort_desc_inverts_asc() {
        let asc = sort(sample_datasets(), "samples", SortDirection::Asc);
        let desc = sort(sample_datasets(), "samples", SortDirection::Desc);
        // Keys are distinct here, so desc is exactly the reverse of asc
        let reversed: Vec<_> = asc.into_iter().rev().collect();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_sort_by_date_is_chronological_not_lexicographic() {
        let mut records = sample_datasets();
        records.push(dataset("ds_4", "Legacy", 1, 1.0, date(2024, 12, 1)));
        let sorted = sort(records, "created_at", SortDirection::Asc);
        let ids: Vec<_> = sorted.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["ds_4", "ds_3", "ds_2", "ds_1"]);
    }

    #[test]
    fn test_equal_keys_tie_break_by_id_in_both_directions() {
        let day = date(2025, 9, 1);
        let records = vec![
            dataset("ds_b", "Beta", 10, 1.0, day),
            dataset("ds_a", "Alpha", 10, 1.0, day),
            dataset("ds_c", "Gamma", 10, 1.0, day),
        ];

        let asc = sort(records.clone(), "created_at", SortDirection::Asc);
        let ids: Vec<_> = asc.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["ds_a", "ds_b", "ds_c"]);

        let desc = sort(records, "created_at", SortDirection::Desc);
        let ids: Vec<_> = desc.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["ds_a", "ds_b", "ds_c"]);
    }

    #[test]
    fn test_paginate_metadata() {
        let page = paginate(sample_datasets(), 1, 2);
        assert_eq!(page.total_items, 3);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn test_paginate_empty_collection() {
        let page = paginate(Vec::<Dataset>::new(), 5, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn test_paginate_clamps_out_of_range_page() {
        let low = paginate(sample_datasets(), 0, 2);
        assert_eq!(low.current_page, 1);

        let high = paginate(sample_datasets(), 99, 2);
        assert_eq!(high.current_page, 2);
        assert_eq!(high.items.len(), 1);
    }

    #[test]
    fn test_paginate_clamps_zero_page_size() {
        let page = paginate(sample_datasets(), 1, 0);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_name_ascending_page_split() {
        // 3 datasets sorted by name ascending with page size 2:
        // page 1 = [Chat QA, Code Instruct], page 2 = [Customer Support]
        let s = schema();
        let mut query = QueryState::new(&s);
        query.set_sort(&s, "name").unwrap();
        query.set_direction(SortDirection::Asc);
        query.set_page_size(2);

        let page1 = run(&sample_datasets(), &s, &query);
        assert_eq!(names(&page1), ["Chat QA", "Code Instruct"]);
        assert_eq!(page1.total_pages, 2);

        query.set_page(2);
        let page2 = run(&sample_datasets(), &s, &query);
        assert_eq!(names(&page2), ["Customer Support"]);
        assert_eq!(page2.current_page, 2);
    }

    #[test]
    fn test_run_is_idempotent() {
        let s = schema();
        let mut query = QueryState::new(&s);
        query.set_search("c");
        query.set_page_size(2);

        let records = sample_datasets();
        let first = run(&records, &s, &query);
        let second = run(&records, &s, &query);
        assert_eq!(first, second);
        // Inputs are untouched
        assert_eq!(records, sample_datasets());
    }

    #[test]
    fn test_total_pages_formula() {
        for (total, page_size, expected) in
            [(0, 10, 1), (1, 10, 1), (10, 10, 1), (11, 10, 2), (21, 5, 5)]
        {
            let records: Vec<Dataset> = (0..total)
                .map(|i| dataset(&format!("ds_{i:03}"), "X", i as u64, 0.0, date(2025, 1, 1)))
                .collect();
            let page = paginate(records, 1, page_size);
            assert_eq!(page.total_pages, expected, "total={total} size={page_size}");
        }
    }

    #[test]
    fn test_pages_partition_the_collection() {
        let s = schema();
        let records: Vec<Dataset> = (0..23)
            .map(|i| {
                dataset(
                    &format!("ds_{i:03}"),
                    &format!("Set {i:03}"),
                    i as u64,
                    0.0,
                    date(2025, 1, 1 + (i % 28) as u32),
                )
            })
            .collect();

        let mut query = QueryState::new(&s);
        query.set_sort(&s, "name").unwrap();
        query.set_direction(SortDirection::Asc);
        query.set_page_size(5);

        let mut seen = Vec::new();
        let mut page_no = 1;
        loop {
            query.set_page(page_no);
            let page = run(&records, &s, &query);
            seen.extend(page.items.iter().map(|d| d.id.clone()));
            if page_no >= page.total_pages {
                break;
            }
            page_no += 1;
        }

        assert_eq!(seen.len(), 23);
        let mut expected: Vec<String> = records.iter().map(|d| d.id.clone()).collect();
        expected.sort();
        assert_eq!(seen, expected);
    }
}
