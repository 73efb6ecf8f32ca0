use contracts::domain::a001_catalog_item::presentation::{format_price, NO_DESCRIPTION};
use contracts::domain::a001_catalog_item::CatalogItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::domain::a001_catalog_item::api;
use crate::shared::components::ui::AvailabilityBadge;
use crate::shared::components::FallbackImage;

/// `/menu/:id`
#[component]
pub fn ItemDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let item = RwSignal::new(Option::<CatalogItem>::None);
    let error = RwSignal::new(Option::<String>::None);

    Effect::new(move |_| {
        let id = params.read().get("id").unwrap_or_default();
        item.set(None);
        error.set(None);
        spawn_local(async move {
            match api::fetch_item(&id).await {
                Ok(found) => {
                    let _ = item.try_set(Some(found));
                }
                Err(e) => {
                    let _ = error.try_set(Some(e));
                }
            }
        });
    });

    view! {
        <div class="page item-details">
            <a class="button button--ghost" href="/menu">"← メニューへ戻る"</a>
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            {move || match item.get() {
                Some(item) => view! { <ItemDetails item=item /> }.into_any(),
                None if error.with(Option::is_none) => {
                    view! { <p>"読み込み中..."</p> }.into_any()
                }
                None => ().into_any(),
            }}
        </div>
    }
}

#[component]
fn ItemDetails(item: CatalogItem) -> impl IntoView {
    let description = item
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    view! {
        <article class="item-details__body">
            <FallbackImage image_url=item.image_url.clone() alt=item.name.clone() class="item-details__image" />
            <div class="item-details__info">
                <h1>{item.name.clone()}</h1>
                <AvailabilityBadge is_available=item.is_available />
                <div class="item-details__price">{format_price(item.price)}</div>
                <dl>
                    <dt>"カテゴリー"</dt>
                    <dd>{item.category.clone().unwrap_or_else(|| "-".to_string())}</dd>
                    <dt>"在庫"</dt>
                    <dd>{item.stock}</dd>
                </dl>
                <p class="item-details__description">{description}</p>
                <a class="button button--primary" href="/contact">"お問い合わせ・ご予約"</a>
            </div>
        </article>
    }
}
