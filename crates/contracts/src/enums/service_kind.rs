use serde::{Deserialize, Serialize};

/// Facilities-management services offered by the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Cleaning,
    Maintenance,
    Security,
    Landscaping,
    PestControl,
    Hvac,
}

impl ServiceKind {
    pub fn code(&self) -> &'static str {
        match self {
            ServiceKind::Cleaning => "cleaning",
            ServiceKind::Maintenance => "maintenance",
            ServiceKind::Security => "security",
            ServiceKind::Landscaping => "landscaping",
            ServiceKind::PestControl => "pest_control",
            ServiceKind::Hvac => "hvac",
        }
    }

    /// Translation key of the service title.
    pub fn title_key(&self) -> &'static str {
        match self {
            ServiceKind::Cleaning => "service.cleaning.title",
            ServiceKind::Maintenance => "service.maintenance.title",
            ServiceKind::Security => "service.security.title",
            ServiceKind::Landscaping => "service.landscaping.title",
            ServiceKind::PestControl => "service.pest_control.title",
            ServiceKind::Hvac => "service.hvac.title",
        }
    }

    /// Translation key of the one-paragraph description.
    pub fn summary_key(&self) -> &'static str {
        match self {
            ServiceKind::Cleaning => "service.cleaning.summary",
            ServiceKind::Maintenance => "service.maintenance.summary",
            ServiceKind::Security => "service.security.summary",
            ServiceKind::Landscaping => "service.landscaping.summary",
            ServiceKind::PestControl => "service.pest_control.summary",
            ServiceKind::Hvac => "service.hvac.summary",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ServiceKind::Cleaning => "🧹",
            ServiceKind::Maintenance => "🛠",
            ServiceKind::Security => "🛡",
            ServiceKind::Landscaping => "🌿",
            ServiceKind::PestControl => "🐜",
            ServiceKind::Hvac => "❄",
        }
    }

    pub fn all() -> Vec<ServiceKind> {
        vec![
            ServiceKind::Cleaning,
            ServiceKind::Maintenance,
            ServiceKind::Security,
            ServiceKind::Landscaping,
            ServiceKind::PestControl,
            ServiceKind::Hvac,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|kind| kind.code() == code)
    }
}
