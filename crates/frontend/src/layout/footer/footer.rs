use crate::shared::config::use_site_config;
use crate::shared::i18n::use_locale;
use crate::shared::router::use_router;
use contracts::enums::ViewId;
use leptos::prelude::*;

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer() -> impl IntoView {
    let router = use_router();
    let locale = use_locale();
    let contact = use_site_config().contact;
    let year = current_year();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__columns">
                <div class="footer__brand">
                    <span class="footer__title">{move || locale.t("brand.name")}</span>
                    <span class="footer__tagline">{move || locale.t("brand.tagline")}</span>
                </div>
                <nav class="footer__links">
                    <span class="footer__heading">{move || locale.t("footer.links")}</span>
                    {ViewId::all().into_iter().map(|view| view! {
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            router.navigate_to(view);
                        }>
                            {move || locale.t(view.label_key())}
                        </a>
                    }).collect_view()}
                </nav>
                <div class="footer__contact">
                    <a href=format!("mailto:{}", contact.email)>{contact.email.clone()}</a>
                    <a href=format!("tel:{}", contact.phone.replace(' ', ""))>{contact.phone.clone()}</a>
                </div>
            </div>
            <div class="footer__bottom">
                {move || format!("© {} {}. {}", year, locale.t("brand.name"), locale.t("footer.rights"))}
            </div>
        </footer>
    }
}
