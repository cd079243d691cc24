//! CardAnimated: a Thaw Card that plays an appear animation.
//!
//! The animation lives in `site.css` (`@keyframes card-appear`).
//! For a staggered grid pass a growing `delay_ms`:
//!
//! ```text
//! <CardAnimated delay_ms=0>   // card 1
//! <CardAnimated delay_ms=80>  // card 2
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Delay step between neighbouring cards in a grid.
pub const STAGGER_STEP_MS: u32 = 80;

/// Inline style for a card appearing after `delay_ms`.
pub fn appear_style(delay_ms: u32, extra: &str) -> String {
    let base = format!("animation: card-appear 0.28s ease-out {delay_ms}ms both;");
    if extra.is_empty() {
        base
    } else {
        format!("{base} {extra}")
    }
}

/// Delay of the `index`-th card in a staggered grid.
pub fn stagger_delay(index: usize) -> u32 {
    STAGGER_STEP_MS.saturating_mul(index as u32)
}

/// Thaw [`Card`] with the `card-appear` animation.
#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles.
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card attr:style=appear_style(delay_ms, &style)>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_style_is_appended() {
        assert_eq!(
            appear_style(80, "max-width: 400px;"),
            "animation: card-appear 0.28s ease-out 80ms both; max-width: 400px;"
        );
        assert_eq!(
            appear_style(0, ""),
            "animation: card-appear 0.28s ease-out 0ms both;"
        );
    }

    #[test]
    fn stagger_grows_linearly() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(3), 3 * STAGGER_STEP_MS);
    }
}
