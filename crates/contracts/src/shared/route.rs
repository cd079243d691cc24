use crate::enums::ViewId;
use serde::{Deserialize, Serialize};

/// One step of navigation history: the view that was showing and the one showing now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteState {
    pub previous: ViewId,
    pub current: ViewId,
}

impl RouteState {
    /// Application start: both sides point at `Home`.
    pub fn initial() -> Self {
        Self::settled(ViewId::Home)
    }

    pub fn settled(view: ViewId) -> Self {
        Self {
            previous: view,
            current: view,
        }
    }

    /// `previous == current`, i.e. nothing to fade out.
    pub fn is_first_paint(&self) -> bool {
        self.previous == self.current
    }

    /// State after moving to `target`.
    pub fn advanced_to(&self, target: ViewId) -> Self {
        Self {
            previous: self.current,
            current: target,
        }
    }
}

impl Default for RouteState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Phase of the cross-fade state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransitionPhase {
    #[default]
    Idle,
    ExitingPrevious,
    EnteringCurrent,
}

impl TransitionPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, TransitionPhase::Idle)
    }
}

/// How the viewport moves when scrolled to the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Scroll-to-top request emitted by a navigation.
///
/// `delay_ms == 0` means the caller must scroll synchronously, before returning
/// control to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollInstruction {
    pub behavior: ScrollBehavior,
    pub delay_ms: u32,
}

impl ScrollInstruction {
    pub fn immediate() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            delay_ms: 0,
        }
    }

    pub fn correction(delay_ms: u32) -> Self {
        Self {
            behavior: ScrollBehavior::Instant,
            delay_ms,
        }
    }

    pub fn is_deferred(&self) -> bool {
        self.delay_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_home_home() {
        let state = RouteState::default();
        assert_eq!(state.previous, ViewId::Home);
        assert_eq!(state.current, ViewId::Home);
        assert!(state.is_first_paint());
    }

    #[test]
    fn advancing_shifts_current_into_previous() {
        let state = RouteState::initial()
            .advanced_to(ViewId::Services)
            .advanced_to(ViewId::Contact);
        assert_eq!(
            state,
            RouteState {
                previous: ViewId::Services,
                current: ViewId::Contact
            }
        );
        assert!(!state.is_first_paint());
    }

    #[test]
    fn correction_is_instant_and_deferred() {
        let correction = ScrollInstruction::correction(100);
        assert_eq!(correction.behavior, ScrollBehavior::Instant);
        assert!(correction.is_deferred());
        assert!(!ScrollInstruction::immediate().is_deferred());
    }
}
