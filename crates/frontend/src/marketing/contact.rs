use leptos::prelude::*;

use super::data::{COMPANY, CONTACT_FORM_ACTION};

/// The form posts straight to the external form service
#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="page page--narrow">
            <h1 class="header__title">"お問い合わせ"</h1>
            <form class="form" action=CONTACT_FORM_ACTION method="post">
                <div class="form-group">
                    <label for="name">"お名前"</label>
                    <input type="text" name="name" id="name" required />
                </div>
                <div class="form-group">
                    <label for="email">"メールアドレス"</label>
                    <input type="email" name="email" id="email" required />
                </div>
                <div class="form-group">
                    <label for="message">"お問い合わせ内容"</label>
                    <textarea name="message" id="message" rows="6" required></textarea>
                </div>
                <button type="submit" class="button button--primary">"送信する"</button>
            </form>
            <div class="contact__info">
                <p>"お電話でのお問い合わせ：" {COMPANY.phone}</p>
                <p class="text-muted">{COMPANY.hours}</p>
            </div>
        </div>
    }
}
