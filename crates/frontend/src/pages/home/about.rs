use crate::shared::i18n::use_locale;
use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    let locale = use_locale();

    view! {
        <section class="section about">
            <h2 class="section__title">{move || locale.t("about.title")}</h2>
            <p class="about__body">{move || locale.t("about.body")}</p>
            <ul class="about__points">
                {["about.point1", "about.point2", "about.point3"].into_iter().map(|key| view! {
                    <li>{move || locale.t(key)}</li>
                }).collect_view()}
            </ul>
        </section>
    }
}
