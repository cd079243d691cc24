//! Locale context for the application.
//!
//! Holds the active language, keeps `<html dir lang>` in sync with it and
//! remembers the choice for the rest of the browser session.

use super::catalog;
use super::direction_sync::sync_html_element;
use contracts::enums::{Direction, Locale};
use leptos::prelude::*;
use web_sys::window;

const LOCALE_STORAGE_KEY: &str = "site-locale";

/// Load locale from sessionStorage.
fn load_locale_from_session() -> Option<Locale> {
    window()
        .and_then(|w| w.session_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
        .and_then(|tag| Locale::from_tag(&tag))
}

/// Save locale to sessionStorage.
fn save_locale_to_session(locale: Locale) {
    if let Some(storage) = window().and_then(|w| w.session_storage().ok().flatten()) {
        let _ = storage.set_item(LOCALE_STORAGE_KEY, locale.tag());
    }
}

#[derive(Clone, Copy)]
pub struct LocaleContext {
    pub locale: RwSignal<Locale>,
}

impl LocaleContext {
    /// Switch language. The document attributes are updated before this returns.
    pub fn set_locale(&self, locale: Locale) {
        self.locale.set(locale);
        sync_html_element(locale.tag());
        save_locale_to_session(locale);
        log::info!("locale changed to '{}'", locale.tag());
    }

    pub fn toggle(&self) {
        self.set_locale(self.locale.get_untracked().toggled());
    }

    /// Tracked.
    pub fn get(&self) -> Locale {
        self.locale.get()
    }

    /// Tracked.
    pub fn direction(&self) -> Direction {
        self.locale.get().direction()
    }

    /// Translate `key` in the current locale. Tracked.
    pub fn t(&self, key: &'static str) -> &'static str {
        catalog::translate(self.locale.get(), key)
    }
}

/// Provides locale context to children components.
#[component]
pub fn LocaleProvider(default_locale: Locale, children: Children) -> impl IntoView {
    let initial = load_locale_from_session().unwrap_or(default_locale);
    sync_html_element(initial.tag());

    provide_context(LocaleContext {
        locale: RwSignal::new(initial),
    });

    children()
}

/// Hook to use the locale context.
pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>()
        .expect("LocaleContext not found. Wrap your app with LocaleProvider.")
}
