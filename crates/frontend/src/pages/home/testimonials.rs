use crate::shared::i18n::use_locale;
use leptos::prelude::*;

const TESTIMONIALS: [(&str, &str); 3] = [
    ("testimonial1.quote", "testimonial1.author"),
    ("testimonial2.quote", "testimonial2.author"),
    ("testimonial3.quote", "testimonial3.author"),
];

#[component]
pub fn Testimonials() -> impl IntoView {
    let locale = use_locale();

    view! {
        <section class="section testimonials">
            <h2 class="section__title">{move || locale.t("testimonials.title")}</h2>
            <div class="testimonials__list">
                {TESTIMONIALS.into_iter().map(|(quote, author)| view! {
                    <figure class="testimonial">
                        <blockquote>{move || locale.t(quote)}</blockquote>
                        <figcaption>{move || locale.t(author)}</figcaption>
                    </figure>
                }).collect_view()}
            </div>
        </section>
    }
}
