use contracts::enums::ViewId;
use contracts::shared::route::{RouteState, ScrollInstruction};

/// Result of a single `navigate_to` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub state: RouteState,
    /// `false` when the target was already the current view.
    pub changed: bool,
    /// In execution order; the immediate scroll always comes first.
    pub scrolls: Vec<ScrollInstruction>,
}

/// Single source of truth for which view is showing.
///
/// Navigating to the view that is already current keeps the route state as it is
/// (the real previous view is not lost) and only asks for a smooth scroll to the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRouter {
    state: RouteState,
    correction_delay_ms: u32,
}

impl ViewRouter {
    pub fn new(correction_delay_ms: u32) -> Self {
        Self {
            state: RouteState::initial(),
            correction_delay_ms,
        }
    }

    pub fn route_state(&self) -> RouteState {
        self.state
    }

    pub fn current(&self) -> ViewId {
        self.state.current
    }

    pub fn navigate_to(&mut self, target: ViewId) -> Navigation {
        let mut scrolls = vec![ScrollInstruction::immediate()];

        if target == self.state.current {
            log::debug!("navigate_to: already on '{}'", target.code());
            return Navigation {
                state: self.state,
                changed: false,
                scrolls,
            };
        }

        self.state = self.state.advanced_to(target);
        log::debug!(
            "navigate_to: '{}' -> '{}'",
            self.state.previous.code(),
            self.state.current.code()
        );

        if target.needs_scroll_correction() {
            scrolls.push(ScrollInstruction::correction(self.correction_delay_ms));
        }

        Navigation {
            state: self.state,
            changed: true,
            scrolls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::route::ScrollBehavior;

    fn router() -> ViewRouter {
        ViewRouter::new(100)
    }

    #[test]
    fn starts_at_home_home() {
        assert_eq!(router().route_state(), RouteState::settled(ViewId::Home));
    }

    #[test]
    fn previous_tracks_the_last_view() {
        let mut router = router();
        let path = [
            ViewId::Services,
            ViewId::Contact,
            ViewId::Home,
            ViewId::Contact,
            ViewId::Services,
        ];
        let mut last = ViewId::Home;
        for target in path {
            let nav = router.navigate_to(target);
            assert!(nav.changed);
            assert_eq!(nav.state.previous, last);
            assert_eq!(nav.state.current, target);
            assert!(ViewId::all().contains(&router.current()));
            last = target;
        }
    }

    #[test]
    fn same_target_keeps_the_real_previous_view() {
        let mut router = router();
        router.navigate_to(ViewId::Services);
        let nav = router.navigate_to(ViewId::Services);

        assert!(!nav.changed);
        assert_eq!(
            router.route_state(),
            RouteState {
                previous: ViewId::Home,
                current: ViewId::Services
            }
        );
        assert_eq!(nav.scrolls, vec![ScrollInstruction::immediate()]);
    }

    #[test]
    fn contact_and_services_get_a_deferred_instant_correction() {
        for target in [ViewId::Contact, ViewId::Services] {
            let nav = router().navigate_to(target);
            assert_eq!(nav.scrolls.len(), 2);
            assert_eq!(nav.scrolls[0].behavior, ScrollBehavior::Smooth);
            assert!(!nav.scrolls[0].is_deferred());
            assert_eq!(nav.scrolls[1].behavior, ScrollBehavior::Instant);
            assert_eq!(nav.scrolls[1].delay_ms, 100);
        }
    }

    #[test]
    fn home_gets_only_the_immediate_scroll() {
        let mut router = router();
        router.navigate_to(ViewId::Contact);
        let nav = router.navigate_to(ViewId::Home);
        assert_eq!(nav.scrolls, vec![ScrollInstruction::immediate()]);
    }
}
