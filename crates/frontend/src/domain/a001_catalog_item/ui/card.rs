use contracts::domain::a001_catalog_item::presentation::{
    format_price, truncate_description, DESCRIPTION_PREVIEW_CHARS,
};
use contracts::domain::a001_catalog_item::CatalogItem;
use leptos::prelude::*;

use crate::shared::components::ui::AvailabilityBadge;
use crate::shared::components::FallbackImage;

/// One catalog entry in the menu grid
#[component]
pub fn ItemCard(item: CatalogItem) -> impl IntoView {
    let href = format!("/menu/{}", item.id);
    let description = truncate_description(item.description.as_deref(), DESCRIPTION_PREVIEW_CHARS);

    view! {
        <a class="item-card" href=href>
            <FallbackImage image_url=item.image_url.clone() alt=item.name.clone() class="item-card__image" />
            <div class="item-card__body">
                <div class="item-card__header">
                    <h3 class="item-card__name">{item.name.clone()}</h3>
                    <AvailabilityBadge is_available=item.is_available />
                </div>
                <p class="item-card__description">{description}</p>
                <div class="item-card__price">{format_price(item.price)}</div>
            </div>
        </a>
    }
}
