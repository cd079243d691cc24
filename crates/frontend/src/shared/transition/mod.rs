//! Cross-fade between the outgoing and the incoming view.

pub mod context;
pub mod coordinator;
pub mod surface;
pub mod timeline;

pub use context::{use_transition, TransitionContext};
pub use coordinator::TransitionCoordinator;
