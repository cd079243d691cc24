use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::CardAnimated;
use crate::shared::i18n::use_locale;
use crate::shared::router::use_router;
use contracts::enums::{ServiceKind, ViewId};
use leptos::prelude::*;

const PREVIEW_COUNT: usize = 3;

#[component]
pub fn ServicesPreview() -> impl IntoView {
    let router = use_router();
    let locale = use_locale();

    view! {
        <section class="section services-preview">
            <h2 class="section__title">{move || locale.t("services.title")}</h2>
            <div class="card-grid">
                {ServiceKind::all().into_iter().take(PREVIEW_COUNT).enumerate().map(|(i, kind)| view! {
                    <CardAnimated delay_ms=stagger_delay(i)>
                        <div class="service-card__icon">{kind.icon()}</div>
                        <h3 class="service-card__title">{move || locale.t(kind.title_key())}</h3>
                        <p class="service-card__summary">{move || locale.t(kind.summary_key())}</p>
                    </CardAnimated>
                }).collect_view()}
            </div>
            <button class="button button--link" on:click=move |_| router.navigate_to(ViewId::Services)>
                {move || locale.t("services.view_all")}
            </button>
        </section>
    }
}
