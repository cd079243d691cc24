use crate::shared::carousel::CarouselState;
use crate::shared::config::use_site_config;
use crate::shared::i18n::use_locale;
use crate::shared::router::use_router;
use contracts::enums::ViewId;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// (title key, subtitle key, css modifier)
const SLIDES: [(&str, &str, &str); 3] = [
    ("hero.slide1.title", "hero.slide1.subtitle", "hero__slide--towers"),
    ("hero.slide2.title", "hero.slide2.subtitle", "hero__slide--maintenance"),
    ("hero.slide3.title", "hero.slide3.subtitle", "hero__slide--green"),
];

#[component]
pub fn Hero() -> impl IntoView {
    let router = use_router();
    let locale = use_locale();
    let interval_ms = use_site_config().carousel.interval_ms;

    let slides = RwSignal::new(CarouselState::new(SLIDES.len()));
    // Bumped on manual navigation so the auto-advance timer restarts.
    let epoch = StoredValue::new(0u64);

    spawn_local(async move {
        loop {
            let Some(before) = epoch.try_get_value() else {
                break;
            };
            TimeoutFuture::new(interval_ms).await;
            let Some(after) = epoch.try_get_value() else {
                break;
            };
            if before == after && slides.try_update(|s| s.next()).is_none() {
                break;
            }
        }
    });

    let manual = move |f: fn(&mut CarouselState)| {
        epoch.update_value(|e| *e += 1);
        slides.update(f);
    };

    view! {
        <section class="hero">
            {SLIDES.iter().enumerate().map(|(i, (title, subtitle, modifier))| {
                let (title, subtitle, modifier) = (*title, *subtitle, *modifier);
                view! {
                    <div
                        class=format!("hero__slide {modifier}")
                        class:hero__slide--active=move || slides.with(|s| s.index() == i)
                    >
                        <h1 class="hero__title">{move || locale.t(title)}</h1>
                        <p class="hero__subtitle">{move || locale.t(subtitle)}</p>
                    </div>
                }
            }).collect_view()}

            <div class="hero__cta-group">
                <button class="hero__cta" on:click=move |_| router.navigate_to(ViewId::Services)>
                    {move || locale.t("hero.cta.services")}
                </button>
                <button class="hero__cta hero__cta--secondary" on:click=move |_| router.navigate_to(ViewId::Contact)>
                    {move || locale.t("hero.cta.contact")}
                </button>
            </div>

            <div class="hero__controls">
                <button class="hero__arrow" aria-label=move || locale.t("hero.prev") on:click=move |_| manual(CarouselState::prev)>
                    {"‹"}
                </button>
                {(0..SLIDES.len()).map(|i| view! {
                    <button
                        class="hero__dot"
                        class:hero__dot--active=move || slides.with(|s| s.index() == i)
                        on:click=move |_| {
                            epoch.update_value(|e| *e += 1);
                            slides.update(|s| s.go_to(i));
                        }
                    ></button>
                }).collect_view()}
                <button class="hero__arrow" aria-label=move || locale.t("hero.next") on:click=move |_| manual(CarouselState::next)>
                    {"›"}
                </button>
            </div>
        </section>
    }
}
