use super::scroll;
use super::view_router::ViewRouter;
use contracts::enums::ViewId;
use contracts::shared::route::RouteState;
use leptos::prelude::*;

/// Router store shared through context.
///
/// `navigate_to` is the only writer of the route state.
#[derive(Clone, Copy)]
pub struct RouterContext {
    router: RwSignal<ViewRouter>,
}

impl RouterContext {
    pub fn new(correction_delay_ms: u32) -> Self {
        Self {
            router: RwSignal::new(ViewRouter::new(correction_delay_ms)),
        }
    }

    /// Current `(previous, current)` pair. Tracked.
    pub fn route(&self) -> RouteState {
        self.router.with(|r| r.route_state())
    }

    /// Current view. Tracked.
    pub fn current(&self) -> ViewId {
        self.router.with(|r| r.current())
    }

    pub fn is_current(&self, view: ViewId) -> bool {
        self.current() == view
    }

    pub fn navigate_to(&self, target: ViewId) {
        let mut navigation = None;
        self.router.maybe_update(|router| {
            let nav = router.navigate_to(target);
            let changed = nav.changed;
            navigation = Some(nav);
            changed
        });

        // Subscribers run on a later tick, so the immediate scroll still precedes
        // the first frame of the cross-fade.
        if let Some(nav) = navigation {
            scroll::execute(&nav.scrolls, &mut scroll::WindowScroll);
        }
    }
}

/// Hook to use the router context.
pub fn use_router() -> RouterContext {
    use_context::<RouterContext>().expect("RouterContext not found. Wrap your app with App.")
}
