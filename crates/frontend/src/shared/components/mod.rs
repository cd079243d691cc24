pub mod card_animated;
pub mod language_toggle;
pub mod page_header;
pub mod stat_card;

pub use card_animated::CardAnimated;
pub use language_toggle::LanguageToggle;
pub use page_header::PageHeader;
pub use stat_card::StatCard;
