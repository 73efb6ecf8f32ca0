use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// `販売中` / `準備中` badge of a catalog item
#[component]
pub fn AvailabilityBadge(is_available: bool) -> impl IntoView {
    use contracts::domain::a001_catalog_item::presentation::{
        availability_badge_variant, availability_label,
    };

    view! {
        <Badge variant=availability_badge_variant(is_available).to_string()>
            {availability_label(is_available)}
        </Badge>
    }
}
