use serde::{Deserialize, Serialize};

/// Navigable pages of the site.
///
/// The set is closed: there is no "unknown" page, so an invalid navigation target
/// cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    #[default]
    Home,
    Contact,
    Services,
}

impl ViewId {
    /// Short code used in DOM ids and logs.
    pub fn code(&self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::Contact => "contact",
            ViewId::Services => "services",
        }
    }

    /// Translation key of the navigation label.
    pub fn label_key(&self) -> &'static str {
        match self {
            ViewId::Home => "nav.home",
            ViewId::Contact => "nav.contact",
            ViewId::Services => "nav.services",
        }
    }

    /// Id of the container element that hosts this view.
    pub fn dom_id(&self) -> String {
        format!("view-{}", self.code())
    }

    /// Views that mount late content and need a second scroll pass after layout settles.
    pub fn needs_scroll_correction(&self) -> bool {
        matches!(self, ViewId::Contact | ViewId::Services)
    }

    /// Order used by navigation menus.
    pub fn all() -> [ViewId; 3] {
        [ViewId::Home, ViewId::Services, ViewId::Contact]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "home" => Some(ViewId::Home),
            "contact" => Some(ViewId::Contact),
            "services" => Some(ViewId::Services),
            _ => None,
        }
    }
}
