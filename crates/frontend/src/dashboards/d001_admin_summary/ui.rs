use contracts::dashboards::d001_admin_summary::dto::AdminSummary;
use contracts::domain::a001_catalog_item::presentation::format_price;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d001_admin_summary::api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::AvailabilityBadge;
use crate::shared::date_utils::format_date;

/// `/admin`
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let (data, set_data) = signal(None::<AdminSummary>);
    let (error, set_error) = signal(None::<String>);

    // Load summary on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_summary().await {
                Ok(summary) => {
                    let _ = set_data.try_set(Some(summary));
                }
                Err(e) => {
                    log::error!("Failed to load admin summary: {}", e);
                    let _ = set_error.try_set(Some(e));
                }
            }
        });
    });

    let figure = move |pick: fn(&AdminSummary) -> u64| {
        Signal::derive(move || data.with(|d| d.as_ref().map(pick)))
    };
    let available_subtitle = Signal::derive(move || {
        data.with(|d| {
            d.as_ref()
                .map(|s| format!("準備中 {} 件", s.unavailable_item_count()))
        })
    });
    let admin_subtitle = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|s| format!("うち管理者 {} 名", s.admin_count)))
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"ダッシュボード"</h1>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="stat-grid">
                    <StatCard label="商品" value=figure(|s| s.item_count) href="/admin/items" />
                    <StatCard
                        label="販売中"
                        value=figure(|s| s.available_item_count)
                        subtitle=available_subtitle
                        href="/admin/items"
                    />
                    <StatCard
                        label="ユーザー"
                        value=figure(|s| s.user_count)
                        subtitle=admin_subtitle
                        href="/admin/users"
                    />
                    <StatCard label="ブログ記事" value=figure(|s| s.post_count) href="/admin/blog" />
                </div>

                <section class="dashboard__recent">
                    <h2>"最近追加された商品"</h2>
                    {move || data.get().map(|summary| {
                        if summary.recent_items.is_empty() {
                            return view! { <p class="text-muted">"商品はまだありません。"</p> }.into_any();
                        }
                        view! {
                            <ul class="recent-list">
                                {summary
                                    .recent_items
                                    .into_iter()
                                    .map(|item| view! {
                                        <li class="recent-list__item">
                                            <a href=format!("/menu/{}", item.id)>{item.name.clone()}</a>
                                            <span>{format_price(item.price)}</span>
                                            <AvailabilityBadge is_available=item.is_available />
                                            <time class="text-muted">{format_date(&item.created_at)}</time>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any()
                    })}
                </section>
            </div>
        </div>
    }
}
