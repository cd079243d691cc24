use super::contact::ContactPrefill;
use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::{CardAnimated, PageHeader};
use crate::shared::i18n::use_locale;
use crate::shared::router::use_router;
use contracts::enums::{ServiceKind, ViewId};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn ServicesPage() -> impl IntoView {
    let router = use_router();
    let locale = use_locale();
    let prefill = use_context::<ContactPrefill>();

    let request_quote = move |kind: ServiceKind| {
        if let Some(prefill) = prefill {
            prefill.request(kind);
        }
        router.navigate_to(ViewId::Contact);
    };

    view! {
        <div class="services-page">
            <PageHeader title_key="services.title" subtitle_key="services.subtitle">
                <button class="button button--link" on:click=move |_| router.navigate_to(ViewId::Home)>
                    {move || locale.t("page.back_home")}
                </button>
            </PageHeader>

            <div class="page-content card-grid">
                {ServiceKind::all().into_iter().enumerate().map(|(i, kind)| view! {
                    <CardAnimated delay_ms=stagger_delay(i)>
                        <div class="service-card__icon">{kind.icon()}</div>
                        <h3 class="service-card__title">{move || locale.t(kind.title_key())}</h3>
                        <p class="service-card__summary">{move || locale.t(kind.summary_key())}</p>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| request_quote(kind)
                        >
                            {move || locale.t("services.request_quote")}
                        </Button>
                    </CardAnimated>
                }).collect_view()}
            </div>
        </div>
    }
}
