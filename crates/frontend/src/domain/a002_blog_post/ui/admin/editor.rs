use contracts::domain::a002_blog_post::{Category, PostDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use crate::domain::a002_blog_post::api;
use crate::layout::notifications::use_notifications;
use crate::shared::uploads::ImageUrlField;

/// Category `<select>` value: empty string for "none"
fn parse_category(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// `/admin/blog/new` and `/admin/blog/edit/:id`
#[component]
pub fn PostEditorPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let notifications = use_notifications();

    let post_id = params
        .read_untracked()
        .get("id")
        .and_then(|raw| raw.parse::<i64>().ok());

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(post_id.is_some());
    let (saving, set_saving) = signal(false);

    spawn_local(async move {
        match api::fetch_categories().await {
            Ok(list) => {
                let _ = categories.try_set(list);
            }
            Err(e) => log::warn!("Failed to load categories: {}", e),
        }
    });

    if let Some(id) = post_id {
        spawn_local(async move {
            match api::admin_fetch_post(id).await {
                Ok(post) => {
                    let _ = title.try_set(post.title);
                    let _ = content.try_set(post.content);
                    let _ = image_url.try_set(post.image_url.unwrap_or_default());
                    let _ = category.try_set(
                        post.category_id.map(|c| c.to_string()).unwrap_or_default(),
                    );
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                }
            }
            let _ = set_loading.try_set(false);
        });
    }

    let on_save = move |_| {
        let dto = PostDto {
            title: title.get().trim().to_string(),
            content: content.get(),
            image_url: Some(image_url.get()),
            category_id: parse_category(&category.get()),
        };
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_error.set(None);
        set_saving.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match post_id {
                Some(id) => api::update_post(id, &dto).await,
                None => api::create_post(&dto).await,
            };
            match result {
                Ok(_) => {
                    notifications.success("記事を保存しました");
                    navigate("/admin/blog", Default::default());
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                    let _ = set_saving.try_set(false);
                }
            }
        });
    };

    let busy = Signal::derive(move || saving.get() || loading.get());
    let heading = if post_id.is_some() { "記事を編集" } else { "記事を作成" };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{heading}</h1>
                </div>
                <div class="page__header-right">
                    <a class="button button--secondary" href="/admin/blog">"キャンセル"</a>
                    <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=busy>
                        {move || if saving.get() { "保存中..." } else { "保存" }}
                    </Button>
                </div>
            </div>

            <div class="page__content form">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || loading.get().then(|| view! { <p>"読み込み中..."</p> })}

                <div class="form__group">
                    <Label>"タイトル *"</Label>
                    <Input value=title disabled=busy />
                </div>
                <div class="form__group">
                    <Label>"カテゴリー"</Label>
                    <select
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    >
                        <option value="" selected=move || category.with(String::is_empty)>
                            "なし"
                        </option>
                        <For
                            each=move || categories.get()
                            key=|c| c.id
                            children=move |c| {
                                let value = c.id.to_string();
                                let selected_value = value.clone();
                                view! {
                                    <option
                                        value=value
                                        selected=move || category.with(|v| *v == selected_value)
                                    >
                                        {c.name}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>
                <div class="form__group">
                    <Label>"アイキャッチ画像"</Label>
                    <ImageUrlField value=image_url disabled=busy />
                </div>
                <div class="form__group">
                    <Label>"本文 *"</Label>
                    <Textarea value=content disabled=busy attr:rows=16 />
                    <small class="text-muted">"HTMLタグが使えます。スクリプトなどは保存時に取り除かれます。"</small>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category(""), None);
        assert_eq!(parse_category("3"), Some(3));
        assert_eq!(parse_category("x"), None);
    }
}
