//! English/Arabic translations and document direction.

pub mod catalog;
pub mod context;
pub mod direction_sync;

pub use context::{use_locale, LocaleContext, LocaleProvider};
