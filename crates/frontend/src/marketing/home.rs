use leptos::prelude::*;

use super::sections::{
    Achievements, ContactBlock, Features, Hero, Newsletter, Procedure, Testimonials,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <Hero />
            <Features />
            <Procedure />
            <Achievements />
            <Testimonials />
            <Newsletter />
            <ContactBlock />
        </div>
    }
}
