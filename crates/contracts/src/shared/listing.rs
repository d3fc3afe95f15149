//! Search, filter and sort for listing pages.
//!
//! Products, orders and customers run the same pipeline over their rows:
//! categorical filter, case-insensitive substring search, stable sort.
//! Pages differ only in their [`ListingConfig`].

use chrono::NaiveDate;
use std::cmp::Ordering;

/// Filter value meaning "do not filter by category".
pub const FILTER_ALL: &str = "All";

/// Value of a single record field, borrowed from the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    /// Integers, including money in cents.
    Number(i64),
    /// `None` is a missing date ("N/A").
    Date(Option<NaiveDate>),
}

impl FieldValue<'_> {
    /// Natural ordering of the field. A missing date sorts before any date;
    /// values of different kinds are treated as equal.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }

    /// Lower-cased text the search step matches against.
    pub fn search_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.to_lowercase(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Date(Some(d)) => d.format("%Y-%m-%d").to_string(),
            FieldValue::Date(None) => "n/a".to_string(),
        }
    }
}

/// Row type that can be shown in a listing.
pub trait ListingRecord {
    /// Value of the named field, `None` if the record has no such field.
    fn field_value(&self, field: &str) -> Option<FieldValue<'_>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Search / filter / sort state of one listing view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub search_text: String,
    pub filter_value: String,
    pub sort_key: Option<String>,
    pub sort_direction: SortDirection,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            filter_value: FILTER_ALL.to_string(),
            sort_key: None,
            sort_direction: SortDirection::Ascending,
        }
    }
}

impl QueryParams {
    /// Header click: the active key flips ascending to descending,
    /// anything else starts ascending on the clicked key.
    pub fn request_sort(&mut self, key: &str) {
        let same_key = self.sort_key.as_deref() == Some(key);
        self.sort_direction = if same_key && self.sort_direction.is_ascending() {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.sort_key = Some(key.to_string());
    }

    pub fn has_filter(&self) -> bool {
        self.filter_value != FILTER_ALL
    }
}

/// Per-page listing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingConfig {
    /// Fields searched by free text (OR across fields).
    pub search_fields: &'static [&'static str],
    /// Categorical field compared against `QueryParams::filter_value`.
    pub filter_field: &'static str,
    /// Choices offered by the filter select, `FILTER_ALL` first.
    pub filter_options: &'static [&'static str],
    /// Sort applied when the page is first shown.
    pub default_sort: Option<(&'static str, SortDirection)>,
}

/// "Showing X of Y" counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingSummary {
    pub shown: usize,
    pub total: usize,
}

impl ListingSummary {
    pub fn label(&self, noun: &str) -> String {
        format!("Showing {} of {} {}", self.shown, self.total, noun)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ListingQueryEngine {
    config: ListingConfig,
}

impl ListingQueryEngine {
    pub const fn new(config: ListingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    /// Params the page starts with.
    pub fn default_params(&self) -> QueryParams {
        let mut params = QueryParams::default();
        if let Some((key, direction)) = self.config.default_sort {
            params.sort_key = Some(key.to_string());
            params.sort_direction = direction;
        }
        params
    }

    /// Rows to display for `params`. The input is left untouched.
    ///
    /// An unknown sort key keeps the input order; a filter value outside the
    /// field's domain matches nothing.
    pub fn query<R>(&self, records: &[R], params: &QueryParams) -> Vec<R>
    where
        R: ListingRecord + Clone,
    {
        let needle = params.search_text.to_lowercase();

        let mut rows: Vec<R> = records
            .iter()
            .filter(|record| self.matches_filter(*record, &params.filter_value))
            .filter(|record| self.matches_search(*record, &needle))
            .cloned()
            .collect();

        if let Some(key) = params.sort_key.as_deref() {
            sort_rows(&mut rows, key, params.sort_direction);
        }

        log::debug!(
            "listing query: filter={:?} search={:?} sort={:?}/{:?} -> {} of {}",
            params.filter_value,
            params.search_text,
            params.sort_key,
            params.sort_direction,
            rows.len(),
            records.len()
        );
        rows
    }

    pub fn summary(&self, shown: usize, total: usize) -> ListingSummary {
        ListingSummary { shown, total }
    }

    /// Number of records whose filter field equals `value`.
    pub fn count_matching<R: ListingRecord>(&self, records: &[R], value: &str) -> usize {
        records
            .iter()
            .filter(|record| self.matches_filter(*record, value))
            .count()
    }

    fn matches_filter<R: ListingRecord>(&self, record: &R, value: &str) -> bool {
        if value == FILTER_ALL {
            return true;
        }
        matches!(
            record.field_value(self.config.filter_field),
            Some(FieldValue::Text(field)) if field == value
        )
    }

    /// `needle` is already lower-cased.
    fn matches_search<R: ListingRecord>(&self, record: &R, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.config.search_fields.iter().any(|field| {
            record
                .field_value(field)
                .is_some_and(|value| value.search_text().contains(needle))
        })
    }
}

/// Stable sort by `field`. Records lacking the field compare equal.
pub fn sort_rows<R: ListingRecord>(rows: &mut [R], field: &str, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = match (a.field_value(field), b.field_value(field)) {
            (Some(left), Some(right)) => left.compare(&right),
            _ => Ordering::Equal,
        };
        direction.apply(ordering)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        status: &'static str,
        orders: i64,
        last_order: Option<NaiveDate>,
    }

    impl ListingRecord for Row {
        fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
            match field {
                "name" => Some(FieldValue::Text(self.name)),
                "status" => Some(FieldValue::Text(self.status)),
                "orders" => Some(FieldValue::Number(self.orders)),
                "lastOrder" => Some(FieldValue::Date(self.last_order)),
                _ => None,
            }
        }
    }

    const CONFIG: ListingConfig = ListingConfig {
        search_fields: &["name"],
        filter_field: "status",
        filter_options: &[FILTER_ALL, "Active", "Inactive"],
        default_sort: Some(("name", SortDirection::Ascending)),
    };

    fn row(name: &'static str, status: &'static str, orders: i64) -> Row {
        Row {
            name,
            status,
            orders,
            last_order: None,
        }
    }

    fn customers() -> Vec<Row> {
        vec![
            row("Bob", "Active", 3),
            row("Amy", "Inactive", 1),
            row("Cid", "Active", 3),
        ]
    }

    fn names(rows: &[Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.name).collect()
    }

    fn params(search: &str, filter: &str, sort: Option<&str>, direction: SortDirection) -> QueryParams {
        QueryParams {
            search_text: search.to_string(),
            filter_value: filter.to_string(),
            sort_key: sort.map(str::to_string),
            sort_direction: direction,
        }
    }

    #[test]
    fn test_filter_then_sort_by_name() {
        let engine = ListingQueryEngine::new(CONFIG);
        let result = engine.query(
            &customers(),
            &params("", "Active", Some("name"), SortDirection::Ascending),
        );
        assert_eq!(names(&result), vec!["Bob", "Cid"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let engine = ListingQueryEngine::new(CONFIG);
        let result = engine.query(&customers(), &params("am", FILTER_ALL, None, SortDirection::Ascending));
        assert_eq!(names(&result), vec!["Amy"]);

        let result = engine.query(&customers(), &params("AM", FILTER_ALL, None, SortDirection::Ascending));
        assert_eq!(names(&result), vec!["Amy"]);
    }

    #[test]
    fn test_search_any_configured_field() {
        let engine = ListingQueryEngine::new(ListingConfig {
            search_fields: &["name", "status"],
            ..CONFIG
        });
        let result = engine.query(&customers(), &params("inact", FILTER_ALL, None, SortDirection::Ascending));
        assert_eq!(names(&result), vec!["Amy"]);

        // "status" is not searchable under the default config
        let engine = ListingQueryEngine::new(CONFIG);
        let result = engine.query(&customers(), &params("inact", FILTER_ALL, None, SortDirection::Ascending));
        assert!(result.is_empty());
    }

    #[test]
    fn test_unknown_sort_key_keeps_input_order() {
        let engine = ListingQueryEngine::new(CONFIG);
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let result = engine.query(&customers(), &params("", FILTER_ALL, Some("zzz"), direction));
            assert_eq!(names(&result), vec!["Bob", "Amy", "Cid"]);
        }
    }

    #[test]
    fn test_unknown_filter_value_yields_nothing() {
        let engine = ListingQueryEngine::new(CONFIG);
        let result = engine.query(&customers(), &params("", "Archived", None, SortDirection::Ascending));
        assert!(result.is_empty());

        // exact, case-sensitive match
        let result = engine.query(&customers(), &params("", "active", None, SortDirection::Ascending));
        assert!(result.is_empty());
    }

    #[test]
    fn test_sentinel_and_empty_search_are_no_ops() {
        let engine = ListingQueryEngine::new(CONFIG);
        let input = customers();
        let result = engine.query(&input, &QueryParams::default());
        assert_eq!(result, input);
    }

    #[test]
    fn test_empty_records_yield_empty() {
        let engine = ListingQueryEngine::new(CONFIG);
        let empty: Vec<Row> = Vec::new();
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let result = engine.query(&empty, &params("x", "Active", Some("name"), direction));
            assert!(result.is_empty());
        }
        assert!(engine.query(&empty, &QueryParams::default()).is_empty());
        assert_eq!(engine.count_matching(&empty, "Active"), 0);
    }

    #[test]
    fn test_empty_search_is_no_op_under_active_filter() {
        let engine = ListingQueryEngine::new(CONFIG);
        let input = customers();
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let filtered = engine.query(&input, &params("", "Active", Some("orders"), direction));
            let mut expected: Vec<Row> = input.iter().filter(|r| r.status == "Active").cloned().collect();
            sort_rows(&mut expected, "orders", direction);
            assert_eq!(filtered, expected);
        }
    }

    #[test]
    fn test_sentinel_filter_is_no_op_under_active_search() {
        let engine = ListingQueryEngine::new(CONFIG);
        let input = customers();
        let with_all = engine.query(&input, &params("b", FILTER_ALL, Some("name"), SortDirection::Descending));
        let by_search: Vec<Row> = input
            .iter()
            .filter(|r| r.name.to_lowercase().contains('b'))
            .cloned()
            .collect();
        assert_eq!(with_all, by_search);
        assert_eq!(names(&with_all), vec!["Bob"]);
    }

    #[test]
    fn test_every_sort_key_keeps_all_rows() {
        let engine = ListingQueryEngine::new(CONFIG);
        let input = customers();
        for key in ["name", "status", "orders", "lastOrder", "zzz"] {
            for direction in [SortDirection::Ascending, SortDirection::Descending] {
                let result = engine.query(&input, &params("", FILTER_ALL, Some(key), direction));
                assert_eq!(result.len(), input.len(), "sort key {}", key);
            }
        }
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let engine = ListingQueryEngine::new(CONFIG);
        let input = vec![
            row("Bob", "Active", 3),
            row("Amy", "Active", 1),
            row("Cid", "Active", 3),
            row("Dan", "Active", 5),
        ];

        let asc = engine.query(&input, &params("", FILTER_ALL, Some("orders"), SortDirection::Ascending));
        assert_eq!(names(&asc), vec!["Amy", "Bob", "Cid", "Dan"]);

        let desc = engine.query(&input, &params("", FILTER_ALL, Some("orders"), SortDirection::Descending));
        assert_eq!(names(&desc), vec!["Dan", "Bob", "Cid", "Amy"]);
    }

    #[test]
    fn test_numbers_sort_numerically() {
        let engine = ListingQueryEngine::new(CONFIG);
        let input = vec![row("a", "Active", 12), row("b", "Active", 8), row("c", "Active", 100)];
        let result = engine.query(&input, &params("", FILTER_ALL, Some("orders"), SortDirection::Ascending));
        assert_eq!(names(&result), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_missing_date_sorts_first() {
        let engine = ListingQueryEngine::new(CONFIG);
        let date = |d: &str| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok();
        let input = vec![
            Row { last_order: date("2025-03-12"), ..row("a", "Active", 0) },
            Row { last_order: None, ..row("b", "Active", 0) },
            Row { last_order: date("2025-02-15"), ..row("c", "Active", 0) },
        ];
        let result = engine.query(&input, &params("", FILTER_ALL, Some("lastOrder"), SortDirection::Ascending));
        assert_eq!(names(&result), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_query_is_idempotent_and_a_subsequence() {
        let engine = ListingQueryEngine::new(CONFIG);
        let input = customers();
        let p = params("b", "Active", None, SortDirection::Ascending);

        let once = engine.query(&input, &p);
        let twice = engine.query(&once, &p);
        assert_eq!(once, twice);
        assert_eq!(names(&once), vec!["Bob"]);
        assert_eq!(input, customers());
    }

    #[test]
    fn test_request_sort_toggles_direction() {
        let mut p = QueryParams::default();
        p.request_sort("name");
        assert_eq!(p.sort_key.as_deref(), Some("name"));
        assert_eq!(p.sort_direction, SortDirection::Ascending);

        p.request_sort("name");
        assert_eq!(p.sort_direction, SortDirection::Descending);

        p.request_sort("name");
        assert_eq!(p.sort_direction, SortDirection::Ascending);

        p.request_sort("name");
        p.request_sort("orders");
        assert_eq!(p.sort_key.as_deref(), Some("orders"));
        assert_eq!(p.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn test_direction_toggle() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
    }

    #[test]
    fn test_default_params_and_counts() {
        let engine = ListingQueryEngine::new(CONFIG);
        let p = engine.default_params();
        assert_eq!(p.sort_key.as_deref(), Some("name"));
        assert!(!p.has_filter());

        assert_eq!(engine.count_matching(&customers(), "Active"), 2);
        assert_eq!(engine.count_matching(&customers(), FILTER_ALL), 3);
        assert_eq!(engine.summary(2, 3).label("customers"), "Showing 2 of 3 customers");
    }
}
