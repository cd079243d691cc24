use crate::shared::i18n::use_locale;
use leptos::prelude::*;

/// Button that switches between the two site languages.
///
/// Shows the name of the language it switches *to*.
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let locale = use_locale();

    view! {
        <button
            class="language-toggle"
            title=move || locale.t("lang.switch")
            on:click=move |_| locale.toggle()
        >
            {move || locale.get().toggled().native_name()}
        </button>
    }
}
