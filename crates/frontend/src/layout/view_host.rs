use crate::pages::{contact::ContactPage, home::HomePage, services::ServicesPage};
use crate::shared::router::use_router;
use crate::shared::transition::use_transition;
use contracts::enums::ViewId;
use leptos::prelude::*;

fn render_view(view: ViewId) -> AnyView {
    match view {
        ViewId::Home => view! { <HomePage /> }.into_any(),
        ViewId::Services => view! { <ServicesPage /> }.into_any(),
        ViewId::Contact => view! { <ContactPage /> }.into_any(),
    }
}

/// Mounts the current view, and the outgoing one while it fades out.
///
/// Layers are created transparent; the transition context fades them in.
#[component]
pub fn ViewHost() -> impl IntoView {
    let router = use_router();
    let transition = use_transition();

    Effect::new(move |_| {
        transition.begin(router.route());
    });

    on_cleanup(move || transition.cancel());

    view! {
        <div
            class="view-stack"
            aria-busy=move || (!transition.phase.get().is_idle()).to_string()
        >
            <For
                each=move || transition.mounted.get()
                key=|view| *view
                children=move |view: ViewId| {
                    view! {
                        <section
                            id=view.dom_id()
                            class="view-layer"
                            class:view-layer--leaving=move || router.current() != view
                            style="opacity: 0;"
                        >
                            {render_view(view)}
                        </section>
                    }
                }
            />
        </div>
    }
}
