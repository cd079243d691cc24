//! Page routing between the three top-level views.
//!
//! `view_router` holds the pure state machine; `context` exposes it to components
//! and `scroll` executes the scroll instructions it emits.

pub mod context;
pub mod scroll;
pub mod view_router;

pub use context::{use_router, RouterContext};
pub use view_router::{Navigation, ViewRouter};
