use contracts::domain::a001_catalog_item::presentation::{image_src, PLACEHOLDER_IMAGE};
use leptos::prelude::*;

/// Image that falls back to the placeholder once if the source fails to load
#[component]
pub fn FallbackImage(
    #[prop(into)] image_url: Option<String>,
    alt: String,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let src = RwSignal::new(image_src(image_url.as_deref()));
    let on_error = move |_| {
        if src.get_untracked() != PLACEHOLDER_IMAGE {
            src.set(PLACEHOLDER_IMAGE.to_string());
        }
    };

    view! {
        <img class=class src=move || src.get() alt=alt loading="lazy" on:error=on_error />
    }
}
