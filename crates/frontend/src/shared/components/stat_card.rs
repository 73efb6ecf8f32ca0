use leptos::prelude::*;

/// Single figure of the admin dashboard
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// None while loading
    #[prop(into)]
    value: Signal<Option<u64>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    /// Where a click on the card leads
    #[prop(optional)]
    href: Option<&'static str>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => v.to_string(),
        None => "—".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <a class="stat-card" href=href.unwrap_or("#")>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </a>
    }
}
