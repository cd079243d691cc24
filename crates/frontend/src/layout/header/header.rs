use crate::shared::components::LanguageToggle;
use crate::shared::i18n::use_locale;
use crate::shared::router::use_router;
use crate::shared::transition::use_transition;
use contracts::enums::ViewId;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let router = use_router();
    let locale = use_locale();
    let transition = use_transition();
    let menu_open = RwSignal::new(false);

    let go = move |view: ViewId| {
        menu_open.set(false);
        router.navigate_to(view);
    };

    view! {
        <header
            data-zone="header"
            class="header"
            class:header--transitioning=move || !transition.phase.get().is_idle()
        >
            <div class="header__content">
                <a class="header__brand" href="#" on:click=move |ev| {
                    ev.prevent_default();
                    go(ViewId::Home);
                }>
                    <span class="header__title">{move || locale.t("brand.name")}</span>
                    <span class="header__tagline">{move || locale.t("brand.tagline")}</span>
                </a>
                <button
                    class="button button--ghost header__menu-toggle"
                    aria-label=move || locale.t("nav.menu")
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {"☰"}
                </button>
                <nav class="header__nav" class:header__nav--open=move || menu_open.get()>
                    {ViewId::all().into_iter().map(|view| {
                        view! {
                            <a
                                href="#"
                                class="header__link"
                                class:header__link--active=move || router.is_current(view)
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    go(view);
                                }
                            >
                                {move || locale.t(view.label_key())}
                            </a>
                        }
                    }).collect_view()}
                </nav>
            </div>
            <div class="header__actions">
                <LanguageToggle />
            </div>
        </header>
    }
}
