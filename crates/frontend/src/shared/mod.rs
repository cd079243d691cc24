pub mod carousel;
pub mod components;
pub mod config;
pub mod i18n;
pub mod router;
pub mod transition;
