use crate::shared::components::StatCard;
use crate::shared::i18n::use_locale;
use leptos::prelude::*;

#[component]
pub fn Stats() -> impl IntoView {
    let locale = use_locale();

    view! {
        <section class="section stats">
            <h2 class="section__title">{move || locale.t("stats.title")}</h2>
            <div class="stats__grid">
                <StatCard target=350 label_key="stats.buildings" suffix="+" />
                <StatCard target=1200 label_key="stats.clients" suffix="+" />
                <StatCard target=2500 label_key="stats.staff" />
                <StatCard target=15 label_key="stats.years" />
            </div>
        </section>
    }
}
