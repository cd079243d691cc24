use super::surface::ViewSurfaces;
use super::timeline::Timeline;
use crate::shared::config::TransitionConfig;
use contracts::enums::ViewId;
use contracts::shared::route::{RouteState, TransitionPhase};
use std::collections::HashMap;

/// Cross-fade state machine between the previous and the current view.
///
/// Time is passed in explicitly (milliseconds on any monotonic clock), so the
/// coordinator has no timers of its own. A new `start` while a transition is in
/// flight kills the running timeline and replaces it (cancel-and-replace).
#[derive(Debug, Clone)]
pub struct TransitionCoordinator {
    config: TransitionConfig,
    phase: TransitionPhase,
    route: RouteState,
    timeline: Option<Timeline>,
    started_at_ms: f64,
    generation: u64,
    mounted: Vec<ViewId>,
    opacity: HashMap<ViewId, f64>,
}

impl TransitionCoordinator {
    pub fn new(config: TransitionConfig) -> Self {
        let route = RouteState::initial();
        Self {
            config,
            phase: TransitionPhase::Idle,
            route,
            timeline: None,
            started_at_ms: 0.0,
            generation: 0,
            mounted: vec![route.current],
            opacity: HashMap::new(),
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn route(&self) -> RouteState {
        self.route
    }

    /// Views whose subtree must stay mounted: the current one, plus the outgoing
    /// one while it is still fading out.
    pub fn mounted_views(&self) -> &[ViewId] {
        &self.mounted
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `true` while the transition started under `generation` is still running.
    pub fn is_running(&self, generation: u64) -> bool {
        self.generation == generation && self.timeline.is_some()
    }

    pub fn timeline(&self) -> Option<&Timeline> {
        self.timeline.as_ref()
    }

    /// Begin the transition for `route` and apply its first frame.
    ///
    /// Returns the generation that identifies this transition.
    pub fn start(&mut self, route: RouteState, now_ms: f64, surfaces: &mut impl ViewSurfaces) -> u64 {
        let replacing = self.timeline.take().is_some();
        if replacing {
            log::debug!(
                "transition: replacing in-flight transition to '{}'",
                self.route.current.code()
            );
        }

        let mut timeline = Timeline::new();
        if route.is_first_paint() {
            timeline.play_enter(route.current, 0.0, self.config.first_paint_ms);
            self.mounted = vec![route.current];
        } else {
            let exit_from = self.exit_from(route.previous, replacing);
            timeline
                .play_exit(route.previous, exit_from, 0.0, self.config.exit_ms)
                .play_enter(
                    route.current,
                    self.config.enter_offset_ms(),
                    self.config.enter_ms,
                );
            self.mounted = vec![route.previous, route.current];
        }
        self.forget_unmounted();

        log::debug!(
            "transition: '{}' -> '{}' ({} ms)",
            route.previous.code(),
            route.current.code(),
            timeline.duration_ms()
        );

        self.generation += 1;
        self.route = route;
        self.started_at_ms = now_ms;
        self.timeline = Some(timeline);
        self.tick(now_ms, surfaces);
        self.generation
    }

    /// Apply the frame for `now_ms` and advance the phase.
    pub fn tick(&mut self, now_ms: f64, surfaces: &mut impl ViewSurfaces) -> TransitionPhase {
        let Some(timeline) = &self.timeline else {
            self.phase = TransitionPhase::Idle;
            return self.phase;
        };

        let elapsed = (now_ms - self.started_at_ms).max(0.0);
        let complete = timeline.is_complete(elapsed);
        let enter_start = timeline.enter().map(|tw| tw.start_ms).unwrap_or(0.0);

        for (view, value) in timeline.sample(elapsed) {
            // A container that is not mounted yet keeps its initial inline opacity.
            if surfaces.set_opacity(view, value) {
                self.opacity.insert(view, value);
            }
        }

        self.phase = if complete {
            self.finish();
            TransitionPhase::Idle
        } else if !self.route.is_first_paint() && elapsed < enter_start {
            TransitionPhase::ExitingPrevious
        } else {
            TransitionPhase::EnteringCurrent
        };
        self.phase
    }

    /// Kill the running timeline. No further opacity writes happen for it.
    pub fn cancel(&mut self) {
        if self.timeline.take().is_some() {
            log::debug!(
                "transition: cancelled transition to '{}'",
                self.route.current.code()
            );
        }
        self.generation += 1;
        self.phase = TransitionPhase::Idle;
        self.mounted = vec![self.route.current];
        self.forget_unmounted();
    }

    fn finish(&mut self) {
        self.timeline = None;
        self.mounted = vec![self.route.current];
        self.forget_unmounted();
        log::debug!("transition: settled on '{}'", self.route.current.code());
    }

    /// Opacity the outgoing view is showing right now.
    ///
    /// A view never painted during a killed transition still has its inline
    /// `opacity: 0`; only a settled view is fully opaque.
    fn exit_from(&self, view: ViewId, replacing: bool) -> f64 {
        match self.opacity.get(&view) {
            Some(opacity) => *opacity,
            None if replacing => 0.0,
            None => 1.0,
        }
    }

    fn forget_unmounted(&mut self) {
        let mounted = &self.mounted;
        self.opacity.retain(|view, _| mounted.contains(view));
    }
}
