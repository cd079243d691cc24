use contracts::shared::route::{ScrollBehavior, ScrollInstruction};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Where scroll instructions end up.
pub trait ScrollSink {
    /// Scroll to the top right away.
    fn scroll_now(&mut self, behavior: ScrollBehavior);
    /// Scroll to the top once `instruction.delay_ms` has passed.
    fn schedule(&mut self, instruction: ScrollInstruction);
}

/// The browser window.
pub struct WindowScroll;

impl ScrollSink for WindowScroll {
    fn scroll_now(&mut self, behavior: ScrollBehavior) {
        scroll_to_top(behavior);
    }

    fn schedule(&mut self, instruction: ScrollInstruction) {
        spawn_local(async move {
            TimeoutFuture::new(instruction.delay_ms).await;
            scroll_to_top(instruction.behavior);
        });
    }
}

/// Scroll the window to the top.
pub fn scroll_to_top(behavior: ScrollBehavior) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_left(0.0);
    options.set_behavior(match behavior {
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
    });
    window.scroll_to_with_scroll_to_options(&options);
}

/// Run the instructions of one navigation.
///
/// Immediate ones run before this returns; deferred ones are fire-and-forget timers.
pub fn execute(instructions: &[ScrollInstruction], sink: &mut impl ScrollSink) {
    for instruction in instructions.iter().copied() {
        if instruction.is_deferred() {
            sink.schedule(instruction);
        } else {
            sink.scroll_now(instruction.behavior);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::router::ViewRouter;
    use contracts::enums::ViewId;

    #[derive(Debug, PartialEq)]
    enum Event {
        Now(ScrollBehavior),
        Scheduled(ScrollBehavior, u32),
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl ScrollSink for Recorder {
        fn scroll_now(&mut self, behavior: ScrollBehavior) {
            self.events.push(Event::Now(behavior));
        }

        fn schedule(&mut self, instruction: ScrollInstruction) {
            self.events
                .push(Event::Scheduled(instruction.behavior, instruction.delay_ms));
        }
    }

    #[test]
    fn smooth_scroll_runs_now_and_correction_is_scheduled_after_it() {
        let mut router = ViewRouter::new(100);
        let nav = router.navigate_to(ViewId::Contact);
        let mut rec = Recorder::default();

        execute(&nav.scrolls, &mut rec);

        assert_eq!(
            rec.events,
            vec![
                Event::Now(ScrollBehavior::Smooth),
                Event::Scheduled(ScrollBehavior::Instant, 100),
            ]
        );
    }

    #[test]
    fn nothing_is_scheduled_for_home() {
        let mut router = ViewRouter::new(100);
        router.navigate_to(ViewId::Services);
        let nav = router.navigate_to(ViewId::Home);
        let mut rec = Recorder::default();

        execute(&nav.scrolls, &mut rec);

        assert_eq!(rec.events, vec![Event::Now(ScrollBehavior::Smooth)]);
    }

    #[test]
    fn same_target_only_scrolls_now() {
        let mut router = ViewRouter::new(100);
        router.navigate_to(ViewId::Services);
        let nav = router.navigate_to(ViewId::Services);
        let mut rec = Recorder::default();

        execute(&nav.scrolls, &mut rec);

        assert_eq!(rec.events, vec![Event::Now(ScrollBehavior::Smooth)]);
    }
}
