use crate::shared::i18n::use_locale;
use leptos::prelude::*;

/// PageHeader component - title band at the top of the services and contact pages
#[component]
pub fn PageHeader(
    /// Translation key of the title
    title_key: &'static str,

    /// Translation key of the subtitle
    #[prop(optional)]
    subtitle_key: Option<&'static str>,

    /// Children content (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    let locale = use_locale();

    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{move || locale.t(title_key)}</h1>
                    {subtitle_key.map(|key| view! {
                        <div class="page-header__subtitle">{move || locale.t(key)}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
