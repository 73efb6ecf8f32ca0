//! Filter/sort engine for the catalog listing.
//!
//! Every function here borrows its input and returns a fresh collection, so
//! callers can memoize on `(items, filter, order)`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::aggregate::CatalogItem;
use super::query::{AvailabilityFilter, QueryState, SortOrder};

/// Parse `created_at` as an instant.
///
/// Accepts RFC 3339, naive `YYYY-MM-DD[T| ]HH:MM:SS[.fff]` (read as UTC) and a
/// bare `YYYY-MM-DD` (midnight UTC). Anything else yields `None`.
pub fn created_instant(item: &CatalogItem) -> Option<DateTime<Utc>> {
    parse_instant(&item.created_at)
}

pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Keep the items that pass `filter`, preserving input order.
pub fn filter_items(items: &[CatalogItem], filter: AvailabilityFilter) -> Vec<CatalogItem> {
    items
        .iter()
        .filter(|item| filter.matches(item.is_available))
        .cloned()
        .collect()
}

/// Stable sort by creation instant.
///
/// Unparseable timestamps order as the earliest possible instant: first in
/// `Asc`, last in `Desc`.
pub fn sort_items(items: &[CatalogItem], order: SortOrder) -> Vec<CatalogItem> {
    let mut keyed: Vec<(Option<DateTime<Utc>>, &CatalogItem)> = items
        .iter()
        .map(|item| (created_instant(item), item))
        .collect();

    match order {
        SortOrder::Asc => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
        SortOrder::Desc => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
    }

    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Filter, then sort: the list the catalog view renders.
pub fn derive_view(items: &[CatalogItem], state: QueryState) -> Vec<CatalogItem> {
    sort_items(&filter_items(items, state.status), state.order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, created_at: &str, is_available: bool) -> CatalogItem {
        CatalogItem {
            id: id.into(),
            name: format!("item {id}"),
            description: None,
            price: 1000.0,
            category: None,
            is_available,
            stock: 1,
            image_url: None,
            created_at: created_at.into(),
            updated_at: created_at.into(),
        }
    }

    fn ids(items: &[CatalogItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_available_filter_keeps_relative_order() {
        let items = vec![
            item("a", "2024-01-01", true),
            item("b", "2024-01-02", false),
            item("c", "2024-01-03", true),
        ];
        let out = filter_items(&items, AvailabilityFilter::Available);
        assert_eq!(ids(&out), vec!["a", "c"]);
    }

    #[test]
    fn test_unavailable_filter_is_complement() {
        let items = vec![
            item("a", "2024-01-01", true),
            item("b", "2024-01-02", false),
            item("c", "2024-01-03", true),
        ];
        let out = filter_items(&items, AvailabilityFilter::Unavailable);
        assert_eq!(ids(&out), vec!["b"]);
        assert_eq!(filter_items(&items, AvailabilityFilter::All), items);
    }

    #[test]
    fn test_sort_ascending_by_date() {
        let items = vec![
            item("jan", "2024-01-01", true),
            item("mar", "2024-03-01", true),
            item("feb", "2024-02-01", true),
        ];
        assert_eq!(ids(&sort_items(&items, SortOrder::Asc)), vec!["jan", "feb", "mar"]);
        assert_eq!(ids(&sort_items(&items, SortOrder::Desc)), vec!["mar", "feb", "jan"]);
    }

    #[test]
    fn test_sort_compares_instants_not_text() {
        // 08:00+09:00 is 23:00Z of the previous day, text order says otherwise
        let items = vec![
            item("utc-late", "2024-06-01T00:30:00Z", true),
            item("tokyo-early", "2024-06-01T08:00:00+09:00", true),
        ];
        assert_eq!(
            ids(&sort_items(&items, SortOrder::Asc)),
            vec!["tokyo-early", "utc-late"]
        );
    }

    #[test]
    fn test_ties_keep_input_order_both_directions() {
        let items = vec![
            item("x", "2024-02-01T00:00:00Z", true),
            item("y", "2024-02-01T00:00:00+00:00", true),
            item("z", "2024-02-01", true),
        ];
        assert_eq!(ids(&sort_items(&items, SortOrder::Asc)), vec!["x", "y", "z"]);
        assert_eq!(ids(&sort_items(&items, SortOrder::Desc)), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_unparseable_timestamps_sort_as_earliest() {
        let items = vec![
            item("ok", "2024-01-01T00:00:00Z", true),
            item("bad", "not a date", true),
        ];
        assert_eq!(ids(&sort_items(&items, SortOrder::Asc)), vec!["bad", "ok"]);
        assert_eq!(ids(&sort_items(&items, SortOrder::Desc)), vec!["ok", "bad"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(derive_view(&[], QueryState::default()).is_empty());
    }

    #[test]
    fn test_derive_view_does_not_touch_input() {
        let items = vec![
            item("a", "2024-01-01", false),
            item("b", "2024-03-01", true),
            item("c", "2024-02-01", true),
        ];
        let snapshot = items.clone();
        let state = QueryState::new(SortOrder::Desc, AvailabilityFilter::Available);

        let first = derive_view(&items, state);
        let second = derive_view(&items, state);

        assert_eq!(ids(&first), vec!["b", "c"]);
        assert_eq!(first, second);
        assert_eq!(items, snapshot);
    }

    #[test]
    fn test_parse_instant_formats() {
        assert!(parse_instant("2024-03-15T14:02:26.123Z").is_some());
        assert!(parse_instant("2024-03-15T14:02:26").is_some());
        assert!(parse_instant("2024-03-15 14:02:26.5").is_some());
        assert!(parse_instant("2024-03-15").is_some());
        assert!(parse_instant("").is_none());
        assert!(parse_instant("15.03.2024").is_none());
    }
}
