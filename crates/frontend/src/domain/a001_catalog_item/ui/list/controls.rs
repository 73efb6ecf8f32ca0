use contracts::domain::a001_catalog_item::{AvailabilityFilter, SortOrder};
use leptos::prelude::*;

use super::query_state::CatalogQuery;

/// Sort select and status toggle. Each control calls only its own setter.
#[component]
pub fn CatalogControls(query: CatalogQuery) -> impl IntoView {
    let state = query.state();

    view! {
        <div class="catalog__controls">
            <label class="catalog__sort">
                "並び順 "
                <select
                    prop:value=move || state.get().order.as_str()
                    on:change=move |ev| {
                        query.set_order(SortOrder::parse(Some(&event_target_value(&ev))))
                    }
                >
                    {SortOrder::ALL
                        .into_iter()
                        .map(|order| view! {
                            <option
                                value=order.as_str()
                                selected=move || state.get().order == order
                            >
                                {order.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </label>

            <div class="catalog__status" role="group" aria-label="販売状況">
                {AvailabilityFilter::ALL
                    .into_iter()
                    .map(|status| view! {
                        <button
                            type="button"
                            class="toggle"
                            class:toggle--active=move || state.get().status == status
                            aria-pressed=move || (state.get().status == status).to_string()
                            on:click=move |_| query.set_status(status)
                        >
                            {status.label()}
                        </button>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
