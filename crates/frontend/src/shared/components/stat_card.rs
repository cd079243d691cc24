use crate::shared::i18n::use_locale;
use crate::shared::transition::timeline::Ease;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const COUNT_UP_MS: f64 = 1600.0;
const COUNT_UP_FRAME_MS: u32 = 32;

pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Value shown `elapsed_ms` into the count-up towards `target`.
pub fn count_up_value(target: u64, elapsed_ms: f64) -> u64 {
    let progress = Ease::OutCubic.apply(elapsed_ms / COUNT_UP_MS);
    (target as f64 * progress).round() as u64
}

/// Figure that counts up from zero when mounted.
#[component]
pub fn StatCard(
    /// Final value
    target: u64,
    /// Translation key of the label
    label_key: &'static str,
    /// Appended after the number, e.g. "+"
    #[prop(optional)]
    suffix: &'static str,
) -> impl IntoView {
    let locale = use_locale();
    let shown = RwSignal::new(0u64);

    spawn_local(async move {
        let started = js_sys::Date::now();
        loop {
            TimeoutFuture::new(COUNT_UP_FRAME_MS).await;
            let value = count_up_value(target, js_sys::Date::now() - started);
            // Disposed signal: the section was unmounted.
            if shown.try_set(value).is_some() || value >= target {
                break;
            }
        }
    });

    view! {
        <div class="stat-card">
            <div class="stat-card__value">
                {move || format!("{}{}", format_thousands(shown.get()), suffix)}
            </div>
            <div class="stat-card__label">{move || locale.t(label_key)}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1200), "1,200");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn count_up_reaches_target_exactly() {
        assert_eq!(count_up_value(350, 0.0), 0);
        assert!(count_up_value(350, COUNT_UP_MS / 2.0) > 175);
        assert_eq!(count_up_value(350, COUNT_UP_MS), 350);
        assert_eq!(count_up_value(350, COUNT_UP_MS * 5.0), 350);
    }
}
