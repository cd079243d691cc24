use crate::layout::Shell;
use crate::pages::contact::ContactPrefill;
use crate::shared::config::load_config_or_default;
use crate::shared::i18n::LocaleProvider;
use crate::shared::router::RouterContext;
use crate::shared::transition::TransitionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config_or_default();

    // Single writer of the route state, shared by header, footer, pages and the view host.
    provide_context(RouterContext::new(config.scroll.correction_delay_ms));
    provide_context(TransitionContext::new(config.transition));
    provide_context(ContactPrefill::new());
    provide_context(config.clone());

    view! {
        <LocaleProvider default_locale=config.i18n.default_locale>
            <Shell />
        </LocaleProvider>
    }
}
