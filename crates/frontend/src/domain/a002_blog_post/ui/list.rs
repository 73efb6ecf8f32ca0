use contracts::domain::a002_blog_post::{Category, Post, PostListQuery};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;
use serde::{Deserialize, Serialize};

use super::category_name;
use crate::domain::a002_blog_post::api;
use crate::shared::components::FallbackImage;
use crate::shared::date_utils::format_date;

pub const BLOG_PAGE_SIZE: u64 = 20;
const EXCERPT_CHARS: usize = 120;

/// `?page=&category=` of the blog list
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
}

impl BlogListParams {
    /// Unreadable parameters mean the first page of everything
    pub fn from_search(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    /// 1-based
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn to_api_query(&self) -> PostListQuery {
        PostListQuery {
            limit: Some(BLOG_PAGE_SIZE),
            offset: Some((self.page() - 1) * BLOG_PAGE_SIZE),
            category: self.category,
        }
    }

    pub fn href(&self, page: u64, category: Option<i64>) -> String {
        let params = BlogListParams {
            page: (page > 1).then_some(page),
            category,
        };
        match serde_qs::to_string(&params) {
            Ok(qs) if !qs.is_empty() => format!("/blog?{}", qs),
            _ => "/blog".to_string(),
        }
    }
}

/// `/blog`
#[component]
pub fn BlogListPage() -> impl IntoView {
    let location = use_location();
    let params = Memo::new(move |_| BlogListParams::from_search(&location.search.get()));

    let posts = RwSignal::new(Vec::<Post>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(true);
    let request_seq = StoredValue::new(0u64);

    spawn_local(async move {
        match api::fetch_categories().await {
            Ok(list) => {
                let _ = categories.try_set(list);
            }
            Err(e) => log::warn!("Failed to load categories: {}", e),
        }
    });

    Effect::new(move |_| {
        let query = params.get().to_api_query();
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        loading.set(true);
        error.set(None);

        spawn_local(async move {
            let result = api::fetch_posts(&query).await;
            // Only the latest page request may write
            if request_seq.try_get_value() != Some(seq) {
                return;
            }
            match result {
                Ok(list) => {
                    let _ = posts.try_set(list);
                }
                Err(e) => {
                    let _ = posts.try_set(Vec::new());
                    let _ = error.try_set(Some(e));
                }
            }
            let _ = loading.try_set(false);
        });
    });

    let category_links = move || {
        let current = params.get();
        let all_link = view! {
            <a
                class="chip"
                class:chip--active=current.category.is_none()
                href=current.href(1, None)
            >
                "すべて"
            </a>
        };
        let links = categories
            .get()
            .into_iter()
            .map(|c| {
                view! {
                    <a
                        class="chip"
                        class:chip--active=current.category == Some(c.id)
                        href=current.href(1, Some(c.id))
                    >
                        {c.name}
                    </a>
                }
            })
            .collect_view();
        view! { {all_link} {links} }
    };

    let pager = move || {
        let current = params.get();
        let page = current.page();
        let has_next = posts.with(|p| p.len() as u64 == BLOG_PAGE_SIZE);
        view! {
            <div class="pager">
                {(page > 1).then(|| view! {
                    <a class="button button--secondary" href=current.href(page - 1, current.category)>"← 前へ"</a>
                })}
                <span class="pager__page">{format!("{} ページ", page)}</span>
                {has_next.then(|| view! {
                    <a class="button button--secondary" href=current.href(page + 1, current.category)>"次へ →"</a>
                })}
            </div>
        }
    };

    view! {
        <div class="page blog">
            <h1 class="header__title">"ブログ"</h1>
            <nav class="blog__categories">{category_links}</nav>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p>"読み込み中..."</p> }
            >
                <Show
                    when=move || !posts.with(Vec::is_empty)
                    fallback=move || (error.with(Option::is_none)).then(|| view! { <p>"記事はまだありません。"</p> })
                >
                    <div class="blog__grid">
                        <For
                            each=move || posts.get()
                            key=|post| post.id
                            children=move |post| {
                                let category = categories.with(|c| category_name(c, post.category_id));
                                view! { <PostCard post=post category=category /> }
                            }
                        />
                    </div>
                </Show>
            </Show>

            {pager}
        </div>
    }
}

#[component]
fn PostCard(post: Post, category: Option<String>) -> impl IntoView {
    let href = format!("/blog/{}", post.id);
    let excerpt = post.excerpt(EXCERPT_CHARS);

    view! {
        <a class="post-card" href=href>
            <FallbackImage image_url=post.image_url.clone() alt=post.title.clone() class="post-card__image" />
            <div class="post-card__body">
                <div class="post-card__meta">
                    <time>{format_date(&post.created_at)}</time>
                    {category.map(|name| view! { <span class="chip">{name}</span> })}
                </div>
                <h2 class="post-card__title">{post.title.clone()}</h2>
                <p class="post-card__excerpt">{excerpt}</p>
            </div>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_from_search() {
        let p = BlogListParams::from_search("?page=3&category=2");
        assert_eq!(p.page(), 3);
        assert_eq!(p.category, Some(2));
    }

    #[test]
    fn test_bad_params_mean_first_page() {
        assert_eq!(BlogListParams::from_search("page=abc").page(), 1);
        assert_eq!(BlogListParams::from_search("page=0").page(), 1);
        assert_eq!(BlogListParams::from_search("").page(), 1);
    }

    #[test]
    fn test_api_query_offsets_by_page() {
        let q = BlogListParams::from_search("page=2").to_api_query();
        assert_eq!(q.limit, Some(BLOG_PAGE_SIZE));
        assert_eq!(q.offset, Some(BLOG_PAGE_SIZE));
        assert_eq!(q.category, None);
    }

    #[test]
    fn test_href() {
        let p = BlogListParams::default();
        assert_eq!(p.href(1, None), "/blog");
        assert_eq!(p.href(2, None), "/blog?page=2");
        assert_eq!(p.href(1, Some(4)), "/blog?category=4");
    }
}
