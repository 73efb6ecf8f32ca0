use contracts::domain::a001_catalog_item::engine::{filter_items, parse_instant, sort_items};
use contracts::domain::a001_catalog_item::{
    derive_view, AvailabilityFilter, CatalogItem, QueryState, SortOrder,
};
use proptest::prelude::*;

fn arb_timestamp() -> impl Strategy<Value = String> {
    prop_oneof![
        // bare dates, plenty of ties
        (2020i32..2026, 1u32..13, 1u32..29)
            .prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}")),
        // RFC 3339 with offsets
        (2020i32..2026, 1u32..13, 1u32..29, 0u32..24, -12i32..13).prop_map(
            |(y, m, d, h, off)| {
                let sign = if off < 0 { '-' } else { '+' };
                format!("{y:04}-{m:02}-{d:02}T{h:02}:00:00{sign}{:02}:00", off.abs())
            }
        ),
        Just("garbage".to_string()),
    ]
}

fn arb_item() -> impl Strategy<Value = CatalogItem> {
    ("[a-z]{6}", any::<bool>(), arb_timestamp(), 0u32..100).prop_map(
        |(id, is_available, created_at, stock)| CatalogItem {
            name: format!("name-{id}"),
            id,
            description: None,
            price: 500.0,
            category: None,
            is_available,
            stock,
            image_url: None,
            updated_at: created_at.clone(),
            created_at,
        },
    )
}

fn arb_filter() -> impl Strategy<Value = AvailabilityFilter> {
    prop::sample::select(AvailabilityFilter::ALL.to_vec())
}

fn arb_order() -> impl Strategy<Value = SortOrder> {
    prop::sample::select(SortOrder::ALL.to_vec())
}

proptest! {
    #[test]
    fn filter_never_grows_and_respects_predicate(
        items in prop::collection::vec(arb_item(), 0..40),
        filter in arb_filter(),
    ) {
        let out = filter_items(&items, filter);
        prop_assert!(out.len() <= items.len());
        for item in &out {
            prop_assert!(filter.matches(item.is_available));
        }
    }

    #[test]
    fn sort_is_monotone(
        items in prop::collection::vec(arb_item(), 0..40),
        order in arb_order(),
    ) {
        let out = sort_items(&items, order);
        prop_assert_eq!(out.len(), items.len());
        for pair in out.windows(2) {
            let a = parse_instant(&pair[0].created_at);
            let b = parse_instant(&pair[1].created_at);
            match order {
                SortOrder::Asc => prop_assert!(a <= b),
                SortOrder::Desc => prop_assert!(a >= b),
            }
        }
    }

    #[test]
    fn derive_view_is_idempotent(
        items in prop::collection::vec(arb_item(), 0..40),
        order in arb_order(),
        filter in arb_filter(),
    ) {
        let state = QueryState::new(order, filter);
        let once = derive_view(&items, state);
        let twice = derive_view(&once, state);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn any_params_parse_to_a_valid_state(order in ".*", status in ".*") {
        let state = QueryState::from_params([("order", order.as_str()), ("status", status.as_str())]);
        prop_assert!(SortOrder::ALL.contains(&state.order));
        prop_assert!(AvailabilityFilter::ALL.contains(&state.status));
        prop_assert_eq!(state.order == SortOrder::Asc, order == "asc");
    }

    #[test]
    fn state_round_trips_through_params(order in arb_order(), filter in arb_filter()) {
        let state = QueryState::new(order, filter);
        prop_assert_eq!(QueryState::from_params(state.to_params()), state);
    }
}
