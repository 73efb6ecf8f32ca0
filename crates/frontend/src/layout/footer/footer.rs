use crate::marketing::data::{COMPANY, SITE_NAME};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__columns">
                <div class="footer__column">
                    <div class="footer__brand">{SITE_NAME}</div>
                    <p>{COMPANY.address}</p>
                    <p>"TEL " {COMPANY.phone}</p>
                </div>
                <nav class="footer__column">
                    <a href="/menu">"メニュー"</a>
                    <a href="/blog">"ブログ"</a>
                    <a href="/contact">"お問い合わせ"</a>
                </nav>
                <nav class="footer__column">
                    <a href="/privacy">"プライバシーポリシー"</a>
                    <a href="/legal-notice">"特定商取引法に基づく表記"</a>
                </nav>
            </div>
            <div class="footer__copyright">"© " {COMPANY.name}</div>
        </footer>
    }
}
