//! Sort/filter selection of the menu page, kept in step with `?order=&status=`.
//!
//! The URL is read once when the page is created. Every setter updates the
//! state and immediately replaces the current history entry, so the last
//! setter to run owns the final URL.

use std::collections::BTreeMap;

use contracts::domain::a001_catalog_item::query::{ORDER_PARAM, SORT_PARAM, STATUS_PARAM};
use contracts::domain::a001_catalog_item::{AvailabilityFilter, QueryState, SortOrder};
use leptos::prelude::*;
use serde::Serialize;
use web_sys::window;

/// Decoded parameters of a `location.search` string.
/// Unreadable query strings count as empty.
pub fn parse_search(search: &str) -> BTreeMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

pub fn state_from_search(search: &str) -> QueryState {
    let params = parse_search(search);
    QueryState::from_params(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

/// What the menu page writes back: foreign parameters first, ours after them
#[derive(Serialize)]
struct CatalogSearch {
    #[serde(flatten)]
    rest: BTreeMap<String, String>,
    sort: &'static str,
    order: &'static str,
    status: &'static str,
}

impl CatalogSearch {
    fn new(mut rest: BTreeMap<String, String>, state: QueryState) -> Self {
        for key in [SORT_PARAM, ORDER_PARAM, STATUS_PARAM] {
            rest.remove(key);
        }
        let [(_, sort), (_, order), (_, status)] = state.to_params();
        Self {
            rest,
            sort,
            order,
            status,
        }
    }
}

/// New search string: unrelated parameters kept, ours rewritten
pub fn merge_into_search(search: &str, state: QueryState) -> String {
    let params = CatalogSearch::new(parse_search(search), state);
    match serde_qs::to_string(&params) {
        Ok(qs) => format!("?{}", qs),
        Err(e) => {
            log::warn!("Failed to encode menu query: {}", e);
            let [(sk, sv), (ok, ov), (tk, tv)] = state.to_params();
            format!("?{}={}&{}={}&{}={}", sk, sv, ok, ov, tk, tv)
        }
    }
}

fn current_location() -> Option<(String, String)> {
    let location = window()?.location();
    let path = location.pathname().ok()?;
    let search = location.search().unwrap_or_default();
    Some((path, search))
}

fn replace_url(state: QueryState) {
    let Some((path, search)) = current_location() else {
        return;
    };
    let new_url = format!("{}{}", path, merge_into_search(&search, state));
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            if let Err(e) =
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
            {
                log::warn!("Failed to update URL: {:?}", e);
            }
        }
    }
}

/// Reactive handle shared by the menu page, its controls and the list
#[derive(Clone, Copy)]
pub struct CatalogQuery {
    state: RwSignal<QueryState>,
}

impl CatalogQuery {
    /// Initial state from the address bar; malformed values fall back to defaults
    pub fn from_location() -> Self {
        let search = current_location()
            .map(|(_, search)| search)
            .unwrap_or_default();
        Self {
            state: RwSignal::new(state_from_search(&search)),
        }
    }

    pub fn state(&self) -> Signal<QueryState> {
        self.state.into()
    }

    pub fn set_order(&self, order: SortOrder) {
        self.state.update(|s| *s = s.with_order(order));
        replace_url(self.state.get_untracked());
    }

    pub fn set_status(&self, status: AvailabilityFilter) {
        self.state.update(|s| *s = s.with_status(status));
        replace_url(self.state.get_untracked());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_params_give_defaults() {
        let state = state_from_search("");
        assert_eq!(state.order, SortOrder::Desc);
        assert_eq!(state.status, AvailabilityFilter::All);
    }

    #[test]
    fn test_malformed_params_are_normalized() {
        let state = state_from_search("?order=xyz&status=bogus");
        assert_eq!(state, QueryState::new(SortOrder::Desc, AvailabilityFilter::All));
    }

    #[test]
    fn test_every_state_survives_the_url() {
        for order in SortOrder::ALL {
            for status in AvailabilityFilter::ALL {
                let state = QueryState::new(order, status);
                let search = merge_into_search("", state);
                assert_eq!(state_from_search(&search), state, "{}", search);
            }
        }
    }

    #[test]
    fn test_written_url_carries_sort_marker() {
        let search = merge_into_search(
            "",
            QueryState::new(SortOrder::Asc, AvailabilityFilter::Available),
        );
        assert_eq!(search, "?sort=created_at&order=asc&status=available");
    }

    #[test]
    fn test_unrelated_params_are_preserved() {
        let search = merge_into_search(
            "?ref=top%20page&order=desc&utm=a+b",
            QueryState::new(SortOrder::Asc, AvailabilityFilter::Unavailable),
        );
        assert!(search.ends_with("sort=created_at&order=asc&status=unavailable"), "{}", search);

        let params = parse_search(&search);
        assert_eq!(params.get("ref").map(String::as_str), Some("top page"));
        assert_eq!(params.get("utm").map(String::as_str), Some("a b"));
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn test_last_write_wins() {
        let first = merge_into_search(
            "?x=1",
            QueryState::new(SortOrder::Asc, AvailabilityFilter::Available),
        );
        let second = merge_into_search(
            &first,
            QueryState::new(SortOrder::Desc, AvailabilityFilter::Unavailable),
        );
        assert_eq!(
            second,
            merge_into_search(
                "?x=1",
                QueryState::new(SortOrder::Desc, AvailabilityFilter::Unavailable)
            )
        );
        assert_eq!(
            state_from_search(&second),
            QueryState::new(SortOrder::Desc, AvailabilityFilter::Unavailable)
        );
    }

    #[test]
    fn test_encoded_values_are_decoded() {
        assert_eq!(state_from_search("?order=%61sc").order, SortOrder::Asc);
        assert_eq!(state_from_search("order=asc").order, SortOrder::Asc);
    }
}
