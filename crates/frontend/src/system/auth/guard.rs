use leptos::prelude::*;

use super::context::use_session;

fn loading_view() -> AnyView {
    view! { <div class="page page--centered">"読み込み中..."</div> }.into_any()
}

/// Renders children only for a signed-in visitor
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || !session.is_loading.get() && session.is_authenticated.get()
            fallback=move || {
                if session.is_loading.get() {
                    loading_view()
                } else {
                    view! {
                        <div class="page page--centered">
                            <p>"このページを表示するにはログインしてください。"</p>
                            <a class="button button--primary" href="/login">"ログイン"</a>
                        </div>
                    }
                    .into_any()
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Renders children only when the visitor's profile has the admin flag
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || !session.is_loading.get() && session.is_admin.get()
            fallback=move || {
                if session.is_loading.get() {
                    loading_view()
                } else {
                    view! {
                        <div class="page page--centered">
                            <div class="warning-box">"管理者権限が必要です。"</div>
                            <a class="button button--secondary" href="/">"トップへ戻る"</a>
                        </div>
                    }
                    .into_any()
                }
            }
        >
            {children()}
        </Show>
    }
}
