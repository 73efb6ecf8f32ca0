//! Catalog query state: the sort/filter selection mirrored in the URL.
//!
//! Parsing is total. Any combination of parameters, including garbage or
//! missing values, maps to a valid [`QueryState`].

use serde::{Deserialize, Serialize};

pub const ORDER_PARAM: &str = "order";
pub const STATUS_PARAM: &str = "status";
pub const SORT_PARAM: &str = "sort";

/// Written next to `order` on every change, never read back.
pub const SORT_KEY_MARKER: &str = "created_at";

/// Direction of the creation-time sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Desc, SortOrder::Asc];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Only the exact token `asc` selects ascending order.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Desc => "新しい順",
            SortOrder::Asc => "古い順",
        }
    }
}

/// Availability filter for the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityFilter {
    #[default]
    All,
    Available,
    Unavailable,
}

impl AvailabilityFilter {
    pub const ALL: [AvailabilityFilter; 3] = [
        AvailabilityFilter::All,
        AvailabilityFilter::Available,
        AvailabilityFilter::Unavailable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityFilter::All => "all",
            AvailabilityFilter::Available => "available",
            AvailabilityFilter::Unavailable => "unavailable",
        }
    }

    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("available") => AvailabilityFilter::Available,
            Some("unavailable") => AvailabilityFilter::Unavailable,
            _ => AvailabilityFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AvailabilityFilter::All => "すべて",
            AvailabilityFilter::Available => "販売中",
            AvailabilityFilter::Unavailable => "準備中",
        }
    }

    /// Whether an item with the given availability flag passes the filter
    pub fn matches(&self, is_available: bool) -> bool {
        match self {
            AvailabilityFilter::All => true,
            AvailabilityFilter::Available => is_available,
            AvailabilityFilter::Unavailable => !is_available,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct QueryState {
    pub order: SortOrder,
    pub status: AvailabilityFilter,
}

impl QueryState {
    pub fn new(order: SortOrder, status: AvailabilityFilter) -> Self {
        Self { order, status }
    }

    /// Build the state from decoded query pairs.
    ///
    /// The first occurrence of a key wins, unknown keys are ignored.
    pub fn from_params<'a, I>(params: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut order = None;
        let mut status = None;
        for (key, value) in params {
            match key {
                ORDER_PARAM if order.is_none() => order = Some(value),
                STATUS_PARAM if status.is_none() => status = Some(value),
                _ => {}
            }
        }
        Self {
            order: SortOrder::parse(order),
            status: AvailabilityFilter::parse(status),
        }
    }

    /// Pairs to write into the URL, marker first.
    pub fn to_params(&self) -> [(&'static str, &'static str); 3] {
        [
            (SORT_PARAM, SORT_KEY_MARKER),
            (ORDER_PARAM, self.order.as_str()),
            (STATUS_PARAM, self.status.as_str()),
        ]
    }

    pub fn with_order(self, order: SortOrder) -> Self {
        Self { order, ..self }
    }

    pub fn with_status(self, status: AvailabilityFilter) -> Self {
        Self { status, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let state = QueryState::from_params(std::iter::empty());
        assert_eq!(state, QueryState::new(SortOrder::Desc, AvailabilityFilter::All));
        assert_eq!(state, QueryState::default());
    }

    #[test]
    fn test_malformed_values_normalize() {
        let state = QueryState::from_params([("order", "xyz"), ("status", "bogus")]);
        assert_eq!(state.order, SortOrder::Desc);
        assert_eq!(state.status, AvailabilityFilter::All);
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        let state = QueryState::from_params([("order", "ASC"), ("status", "Available")]);
        assert_eq!(state, QueryState::default());
    }

    #[test]
    fn test_first_occurrence_wins() {
        let state = QueryState::from_params([
            ("status", "unavailable"),
            ("order", "asc"),
            ("status", "available"),
            ("order", "desc"),
        ]);
        assert_eq!(state.order, SortOrder::Asc);
        assert_eq!(state.status, AvailabilityFilter::Unavailable);
    }

    #[test]
    fn test_sort_marker_is_ignored_on_read() {
        let state = QueryState::from_params([("sort", "price"), ("order", "asc")]);
        assert_eq!(state.order, SortOrder::Asc);
    }

    #[test]
    fn test_every_valid_pair_round_trips() {
        for order in SortOrder::ALL {
            for status in AvailabilityFilter::ALL {
                let state = QueryState::new(order, status);
                let params = state.to_params();
                assert_eq!(params[0], (SORT_PARAM, SORT_KEY_MARKER));
                assert_eq!(QueryState::from_params(params), state);
            }
        }
    }

    #[test]
    fn test_filter_predicate() {
        assert!(AvailabilityFilter::All.matches(true));
        assert!(AvailabilityFilter::All.matches(false));
        assert!(AvailabilityFilter::Available.matches(true));
        assert!(!AvailabilityFilter::Available.matches(false));
        assert!(AvailabilityFilter::Unavailable.matches(false));
        assert!(!AvailabilityFilter::Unavailable.matches(true));
    }

    #[test]
    fn test_serde_uses_url_tokens() {
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), "\"asc\"");
        assert_eq!(
            serde_json::to_string(&AvailabilityFilter::Unavailable).unwrap(),
            "\"unavailable\""
        );
    }
}
