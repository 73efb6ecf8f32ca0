use leptos::prelude::*;

use super::data::{DocSection, LEGAL_NOTICE, PRIVACY_ENACTED, PRIVACY_POLICY};

#[component]
fn DocSections(sections: &'static [DocSection]) -> impl IntoView {
    sections
        .iter()
        .map(|section| {
            view! {
                <section class="doc__section">
                    <h2>{section.heading}</h2>
                    {section.paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                    {(!section.bullets.is_empty()).then(|| view! {
                        <ul>{section.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}</ul>
                    })}
                </section>
            }
        })
        .collect_view()
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <div class="page page--narrow doc">
            <h1 class="header__title">"プライバシー・ポリシー"</h1>
            <DocSections sections=PRIVACY_POLICY />
            <p class="doc__footnote">{PRIVACY_ENACTED}</p>
        </div>
    }
}

#[component]
pub fn LegalNoticePage() -> impl IntoView {
    view! {
        <div class="page page--narrow doc">
            <h1 class="header__title">"特定商取引法に基づく表記"</h1>
            <DocSections sections=LEGAL_NOTICE />
        </div>
    }
}
