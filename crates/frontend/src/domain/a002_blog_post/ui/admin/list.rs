use contracts::domain::a002_blog_post::{Category, Post};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_blog_post::api;
use crate::domain::a002_blog_post::ui::category_name;
use crate::layout::modal_service::use_modal;
use crate::layout::notifications::use_notifications;
use crate::shared::date_utils::format_datetime;

/// `/admin/blog`
#[component]
pub fn AdminPostsPage() -> impl IntoView {
    let posts = RwSignal::new(Vec::<Post>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let modal = use_modal();
    let notifications = use_notifications();

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::admin_fetch_posts().await {
                Ok(data) => {
                    let _ = posts.try_set(data);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                }
            }
            let _ = set_loading.try_set(false);
        });
    };

    Effect::new(move |_| load_data());

    spawn_local(async move {
        if let Ok(list) = api::fetch_categories().await {
            let _ = categories.try_set(list);
        }
    });

    let request_delete = move |post: Post| {
        let id = post.id;
        modal.confirm(
            "記事の削除",
            format!("「{}」を削除しますか？", post.title),
            Callback::new(move |_| {
                spawn_local(async move {
                    match api::delete_post(id).await {
                        Ok(()) => {
                            posts.update(|list| list.retain(|p| p.id != id));
                            notifications.success("記事を削除しました");
                        }
                        Err(e) => notifications.error(e),
                    }
                });
            }),
        );
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"ブログ管理"</h1>
                    <Badge>{move || posts.with(Vec::len).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <a class="button button--primary" href="/admin/blog/new">"+ 新規作成"</a>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "読み込み中..." } else { "更新" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"タイトル"</TableHeaderCell>
                                <TableHeaderCell>"カテゴリー"</TableHeaderCell>
                                <TableHeaderCell>"作成日時"</TableHeaderCell>
                                <TableHeaderCell>"更新日時"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || posts.get()
                                key=|post| (post.id, post.updated_at.clone())
                                children=move |post| {
                                    let category = categories
                                        .with(|c| category_name(c, post.category_id))
                                        .unwrap_or_else(|| "-".to_string());
                                    let for_delete = post.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a href=format!("/blog/{}", post.id)>{post.title.clone()}</a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{category}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime(&post.created_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime(&post.updated_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <a class="button button--ghost" href=format!("/admin/blog/edit/{}", post.id)>
                                                        "編集"
                                                    </a>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| request_delete(for_delete.clone())
                                                    >
                                                        "削除"
                                                    </Button>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </div>
    }
}
