use contracts::domain::a002_blog_post::{Category, Post};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use super::category_name;
use crate::domain::a002_blog_post::api;
use crate::shared::components::FallbackImage;
use crate::shared::date_utils::format_date;

/// `/blog/:id`
#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let post = RwSignal::new(Option::<Post>::None);
    let categories = RwSignal::new(Vec::<Category>::new());
    let error = RwSignal::new(Option::<String>::None);

    spawn_local(async move {
        if let Ok(list) = api::fetch_categories().await {
            let _ = categories.try_set(list);
        }
    });

    Effect::new(move |_| {
        let raw_id = params.read().get("id").unwrap_or_default();
        post.set(None);
        error.set(None);

        let Ok(id) = raw_id.parse::<i64>() else {
            error.set(Some("記事が見つかりません".to_string()));
            return;
        };

        spawn_local(async move {
            match api::fetch_post(id).await {
                Ok(found) => {
                    let _ = post.try_set(Some(found));
                }
                Err(e) => {
                    let _ = error.try_set(Some(e));
                }
            }
        });
    });

    view! {
        <div class="page blog-post">
            <a class="button button--ghost" href="/blog">"← ブログ一覧へ"</a>
            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            {move || match post.get() {
                Some(post) => {
                    let category = categories.with(|c| category_name(c, post.category_id));
                    view! { <PostArticle post=post category=category /> }.into_any()
                }
                None if error.with(Option::is_none) => {
                    view! { <p>"読み込み中..."</p> }.into_any()
                }
                None => ().into_any(),
            }}
        </div>
    }
}

#[component]
fn PostArticle(post: Post, category: Option<String>) -> impl IntoView {
    // Sanitized by the server before storage
    let content = post.content.clone();

    view! {
        <article class="blog-post__article">
            <header class="blog-post__header">
                <h1>{post.title.clone()}</h1>
                <div class="post-card__meta">
                    <time>{format_date(&post.created_at)}</time>
                    {category.map(|name| view! { <span class="chip">{name}</span> })}
                </div>
            </header>
            {post.image_url.clone().map(|url| view! {
                <FallbackImage image_url=Some(url) alt=post.title.clone() class="blog-post__image" />
            })}
            <div class="blog-post__content" inner_html=content></div>
        </article>
    }
}
