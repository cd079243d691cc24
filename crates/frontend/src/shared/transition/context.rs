use super::coordinator::TransitionCoordinator;
use super::surface::DomSurfaces;
use crate::shared::config::TransitionConfig;
use contracts::enums::ViewId;
use contracts::shared::route::{RouteState, TransitionPhase};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Drives the coordinator from the browser and mirrors its state into signals.
#[derive(Clone, Copy)]
pub struct TransitionContext {
    coordinator: StoredValue<TransitionCoordinator>,
    /// Current phase, for components that want to reflect an in-flight transition.
    pub phase: RwSignal<TransitionPhase>,
    /// Views the host must keep mounted.
    pub mounted: RwSignal<Vec<ViewId>>,
    frame_ms: u32,
}

impl TransitionContext {
    pub fn new(config: TransitionConfig) -> Self {
        let coordinator = TransitionCoordinator::new(config);
        let mounted = coordinator.mounted_views().to_vec();
        Self {
            coordinator: StoredValue::new(coordinator),
            phase: RwSignal::new(TransitionPhase::Idle),
            mounted: RwSignal::new(mounted),
            frame_ms: config.frame_ms.max(1),
        }
    }

    /// Start (or replace) the transition for `route` and keep ticking it each frame.
    pub fn begin(&self, route: RouteState) {
        let generation = self
            .coordinator
            .try_update_value(|c| c.start(route, now_ms(), &mut DomSurfaces));
        if let Some(generation) = generation {
            self.publish();
            self.run_frames(generation);
        }
    }

    /// Kill the running transition. Called when the host is torn down.
    pub fn cancel(&self) {
        self.coordinator.try_update_value(|c| c.cancel());
    }

    fn publish(&self) {
        let Some((phase, mounted)) = self
            .coordinator
            .try_with_value(|c| (c.phase(), c.mounted_views().to_vec()))
        else {
            return;
        };
        if self.phase.try_get_untracked() != Some(phase) {
            self.phase.try_set(phase);
        }
        if self.mounted.try_with_untracked(|m| *m != mounted).unwrap_or(false) {
            self.mounted.try_set(mounted);
        }
    }

    fn run_frames(&self, generation: u64) {
        let this = *self;
        spawn_local(async move {
            loop {
                TimeoutFuture::new(this.frame_ms).await;
                // Stops once the transition is replaced, cancelled, or the store is disposed.
                let step = this
                    .coordinator
                    .try_update_value(|c| {
                        c.is_running(generation)
                            .then(|| c.tick(now_ms(), &mut DomSurfaces))
                    })
                    .flatten();
                let Some(phase) = step else {
                    break;
                };
                this.publish();
                if phase.is_idle() {
                    break;
                }
            }
        });
    }
}

/// Hook to use the transition context.
pub fn use_transition() -> TransitionContext {
    use_context::<TransitionContext>()
        .expect("TransitionContext not found. Wrap your app with App.")
}
