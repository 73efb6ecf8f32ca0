use crate::marketing::data::SITE_NAME;
use crate::system::auth::context::{sign_out, use_auth, use_session};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let on_logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            sign_out(set_auth_state).await;
            navigate("/", Default::default());
        });
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <a class="header__title" href="/">{SITE_NAME}</a>
                <button
                    class="button button--ghost header__toggle"
                    aria-label="メニュー"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </div>
            <nav
                class="header__nav"
                class:header__nav--open=move || menu_open.get()
                on:click=move |_| menu_open.set(false)
            >
                <a href="/menu">"メニュー"</a>
                <a href="/blog">"ブログ"</a>
                <a href="/contact">"お問い合わせ"</a>
                <Show when=move || session.is_admin.get()>
                    <a href="/admin" class="header__nav-admin">"管理画面"</a>
                </Show>
                <Show
                    when=move || session.is_authenticated.get()
                    fallback=|| view! {
                        <a href="/login">"ログイン"</a>
                        <a href="/register" class="button button--primary">"新規登録"</a>
                    }
                >
                    <a href="/profile">"プロフィール"</a>
                    <button class="button button--ghost" on:click=on_logout.clone()>"ログアウト"</button>
                </Show>
            </nav>
        </header>
    }
}
