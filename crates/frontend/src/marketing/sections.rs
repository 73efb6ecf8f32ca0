use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::data::{
    ACHIEVEMENTS, COMPANY, FEATURES, HERO_SERVICES, PROCEDURE, PROCEDURE_NOTES, PROCEDURE_POINTS,
    SITE_NAME, TESTIMONIALS,
};
use crate::layout::notifications::use_notifications;

const TESTIMONIAL_ROTATE_MS: u32 = 4_000;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="section hero">
            <h2 class="section__title">{format!("{}メニュー", SITE_NAME)}</h2>
            {HERO_SERVICES
                .iter()
                .map(|service| {
                    view! {
                        <a class="hero__card" class:hero__card--open=service.is_open href="/menu">
                            <div class="hero__card-image">"画像"</div>
                            <div class="hero__card-body">
                                <h3>{service.title}</h3>
                                <p>{service.summary}</p>
                                <p class="text-muted">{service.period}</p>
                                <p class="text-muted">{service.price}</p>
                                <p class="text-muted">{service.status}</p>
                            </div>
                        </a>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="section features">
            <div class="features__grid">
                {FEATURES
                    .iter()
                    .map(|f| {
                        view! {
                            <div class="features__item">
                                <h3>{f.title}</h3>
                                <p>{f.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Procedure() -> impl IntoView {
    view! {
        <section class="section procedure">
            <h2 class="section__title">"雪かき、草刈りサービスの利用方法"</h2>
            <ol class="procedure__steps">
                {PROCEDURE
                    .iter()
                    .map(|step| view! {
                        <li>
                            <strong>{step.title}</strong>
                            <p>{step.detail}</p>
                        </li>
                    })
                    .collect_view()}
            </ol>
            <h3>"ポイント"</h3>
            <ul>{PROCEDURE_POINTS.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}</ul>
            <h3>"注意事項"</h3>
            <ul>{PROCEDURE_NOTES.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}</ul>
        </section>
    }
}

#[component]
pub fn Achievements() -> impl IntoView {
    view! {
        <section class="section achievements">
            <h2 class="section__title">"実績"</h2>
            <div class="achievements__list">
                {ACHIEVEMENTS
                    .iter()
                    .map(|a| view! {
                        <div class="achievements__item" id=a.id>
                            <img src=a.image_src alt=a.title loading="lazy" />
                            <div class="achievements__title">{a.title}</div>
                            <div class="achievements__date">{a.date}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Auto-rotating quotes
#[component]
pub fn Testimonials() -> impl IntoView {
    let current = RwSignal::new(0usize);

    spawn_local(async move {
        loop {
            TimeoutFuture::new(TESTIMONIAL_ROTATE_MS).await;
            // Stops once the page is left and the signal is disposed
            if current
                .try_update(|i| *i = (*i + 1) % TESTIMONIALS.len())
                .is_none()
            {
                break;
            }
        }
    });

    view! {
        <section class="section testimonials">
            <h2 class="section__title">"多くのお客様からまたお願いしたいと希望されています"</h2>
            {move || {
                let t = &TESTIMONIALS[current.get() % TESTIMONIALS.len()];
                view! {
                    <blockquote class="testimonials__item">
                        <h3>{t.headline}</h3>
                        <p>{t.body}</p>
                        <footer>"By " {t.author}</footer>
                    </blockquote>
                }
            }}
            <div class="testimonials__dots">
                {(0..TESTIMONIALS.len())
                    .map(|i| view! {
                        <button
                            class="testimonials__dot"
                            class:testimonials__dot--active=move || current.get() == i
                            aria-label=format!("{}件目", i + 1)
                            on:click=move |_| current.set(i)
                        ></button>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Sign-up form; there is no mailing backend, the address is only acknowledged
#[component]
pub fn Newsletter() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let (sending, set_sending) = signal(false);
    let notifications = use_notifications();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let address = email.get().trim().to_string();
        if address.is_empty() {
            return;
        }
        set_sending.set(true);
        spawn_local(async move {
            TimeoutFuture::new(600).await;
            notifications.success(format!("ニュースレターに登録しました！ {}宛に確認メールを送信しました。", address));
            email.set(String::new());
            set_sending.set(false);
        });
    };

    view! {
        <section class="section newsletter">
            <h2 class="section__title">"ニュースレター"</h2>
            <p>"季節のサービス情報やお知らせをお届けします。"</p>
            <form class="newsletter__form" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="your@email.com"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    disabled=move || sending.get()
                />
                <button type="submit" class="button button--primary" disabled=move || sending.get()>
                    {move || if sending.get() { "送信中..." } else { "登録する" }}
                </button>
            </form>
        </section>
    }
}

#[component]
pub fn ContactBlock() -> impl IntoView {
    view! {
        <section class="section contact-block">
            <h2 class="section__title">"お問い合わせ"</h2>
            <p>"お見積りやご相談はお気軽にどうぞ。"</p>
            <p>"TEL " {COMPANY.phone} " / " {COMPANY.email}</p>
            <p class="text-muted">{COMPANY.hours}</p>
            <a class="button button--primary" href="/contact">"お問い合わせフォームへ"</a>
        </section>
    }
}
