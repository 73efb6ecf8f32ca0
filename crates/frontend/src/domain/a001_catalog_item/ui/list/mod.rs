pub mod controls;
pub mod query_state;

use contracts::domain::a001_catalog_item::{derive_view, CatalogItem};
use leptos::prelude::*;
use leptos::task::spawn_local;

use self::controls::CatalogControls;
use self::query_state::CatalogQuery;
use super::card::ItemCard;
use crate::domain::a001_catalog_item::api;

pub const EMPTY_MESSAGE: &str = "該当する商品はありません。";

/// What the list area shows
#[derive(Debug, Clone, PartialEq)]
pub enum ListBody {
    Loading,
    Failed(String),
    Empty,
    Items,
}

pub fn list_body(loading: bool, error: Option<&str>, visible_count: usize) -> ListBody {
    if loading {
        ListBody::Loading
    } else if let Some(e) = error {
        ListBody::Failed(e.to_string())
    } else if visible_count == 0 {
        ListBody::Empty
    } else {
        ListBody::Items
    }
}

/// `/menu`: loads the catalog once, then filters and orders it locally
#[component]
pub fn MenuPage() -> impl IntoView {
    let query = CatalogQuery::from_location();
    let items = RwSignal::new(Vec::<CatalogItem>::new());
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(true);

    spawn_local(async move {
        let (data, failure) = match api::fetch_items().await {
            Ok(data) => (data, None),
            Err(e) => {
                log::error!("Failed to load catalog: {}", e);
                (Vec::new(), Some(e))
            }
        };
        // Page already left: nothing to update
        if items.try_set(data).is_some() {
            return;
        }
        let _ = error.try_set(failure);
        let _ = loading.try_set(false);
    });

    view! {
        <div class="page catalog">
            <h1 class="header__title">"メニュー"</h1>
            <CatalogListView items=items query=query error=error loading=loading />
        </div>
    }
}

/// Renders the derived collection; never fetches on its own
#[component]
pub fn CatalogListView(
    #[prop(into)] items: Signal<Vec<CatalogItem>>,
    query: CatalogQuery,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let state = query.state();
    let visible = Memo::new(move |_| {
        let state = state.get();
        items.with(|all| derive_view(all, state))
    });

    // Changes of the item set alone must not rebuild the grid
    let body_state =
        Memo::new(move |_| list_body(loading.get(), error.get().as_deref(), visible.with(Vec::len)));

    let body = move || {
        match body_state.get() {
            ListBody::Loading => view! { <p class="catalog__loading">"読み込み中..."</p> }.into_any(),
            ListBody::Failed(e) => view! {
                <div class="error-message">{format!("メニューを読み込めませんでした: {}", e)}</div>
            }
            .into_any(),
            ListBody::Empty => view! { <p class="catalog__empty">{EMPTY_MESSAGE}</p> }.into_any(),
            ListBody::Items => view! {
                <div class="catalog__grid">
                    <For
                        each=move || visible.get()
                        key=|item| item.id.clone()
                        children=|item| view! { <ItemCard item=item /> }
                    />
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <CatalogControls query=query />
        <div class="catalog__results">{body}</div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_shows_error_and_no_items() {
        assert_eq!(
            list_body(false, Some("サーバーに接続できません"), 0),
            ListBody::Failed("サーバーに接続できません".into())
        );
    }

    #[test]
    fn test_empty_derived_list_shows_message() {
        assert_eq!(list_body(false, None, 0), ListBody::Empty);
    }

    #[test]
    fn test_loading_wins() {
        assert_eq!(list_body(true, None, 0), ListBody::Loading);
        assert_eq!(list_body(false, None, 3), ListBody::Items);
    }
}
