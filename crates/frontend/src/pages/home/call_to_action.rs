use crate::shared::i18n::use_locale;
use crate::shared::router::use_router;
use contracts::enums::ViewId;
use leptos::prelude::*;

#[component]
pub fn CallToAction() -> impl IntoView {
    let router = use_router();
    let locale = use_locale();

    view! {
        <section class="section cta">
            <h2 class="section__title">{move || locale.t("cta.title")}</h2>
            <p>{move || locale.t("cta.body")}</p>
            <button class="hero__cta" on:click=move |_| router.navigate_to(ViewId::Contact)>
                {move || locale.t("cta.button")}
            </button>
        </section>
    }
}
