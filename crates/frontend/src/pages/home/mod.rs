mod about;
mod call_to_action;
mod hero;
mod services_preview;
mod stats;
mod testimonials;

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <hero::Hero />
            <about::About />
            <services_preview::ServicesPreview />
            <stats::Stats />
            <testimonials::Testimonials />
            <call_to_action::CallToAction />
        </div>
    }
}
