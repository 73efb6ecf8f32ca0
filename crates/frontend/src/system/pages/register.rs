use contracts::system::auth::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::system::auth::{api, context::sign_in, context::use_auth};

fn optional(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirm = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if password.get() != password_confirm.get() {
            set_error_message.set(Some("パスワードが一致しません".into()));
            return;
        }

        let request = RegisterRequest {
            username: username.get().trim().to_string(),
            password: password.get(),
            email: email.get().trim().to_string(),
            first_name: optional(first_name.get()),
            last_name: optional(last_name.get()),
        };

        set_is_saving.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(request).await {
                Ok(response) => {
                    sign_in(set_auth_state, response);
                    set_is_saving.set(false);
                    navigate("/profile", Default::default());
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_saving.set(false);
                }
            }
        });
    };

    let text_field = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>, required: bool| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type=kind
                    id=id
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    required=required
                    disabled=move || is_saving.get()
                />
            </div>
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"新規登録"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    {text_field("username", "ユーザー名", "text", username, true)}
                    {text_field("email", "メールアドレス", "email", email, true)}
                    {text_field("last_name", "姓", "text", last_name, false)}
                    {text_field("first_name", "名", "text", first_name, false)}
                    {text_field("password", "パスワード", "password", password, true)}
                    {text_field("password_confirm", "パスワード (確認)", "password", password_confirm, true)}

                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_saving.get()
                    >
                        {move || if is_saving.get() { "登録中..." } else { "登録する" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"すでにアカウントをお持ちの方は " <a href="/login">"ログイン"</a></p>
                </div>
            </div>
        </div>
    }
}
