use crate::enums::ServiceKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_MESSAGE_LEN: usize = 10;
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: Option<ServiceKind>,
    pub message: String,
}

/// Field-level validation failures, one per offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("phone number may only contain digits, spaces and + - ( )")]
    InvalidPhone,
    #[error("message must be at least {min} characters")]
    MessageTooShort { min: usize },
    #[error("message must be at most {max} characters")]
    MessageTooLong { max: usize },
}

impl ContactFormError {
    /// Name of the form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            ContactFormError::MissingName => "name",
            ContactFormError::MissingEmail | ContactFormError::InvalidEmail => "email",
            ContactFormError::InvalidPhone => "phone",
            ContactFormError::MessageTooShort { .. } | ContactFormError::MessageTooLong { .. } => {
                "message"
            }
        }
    }

    /// Translation key shown next to the field.
    pub fn message_key(&self) -> &'static str {
        match self {
            ContactFormError::MissingName => "contact.error.name",
            ContactFormError::MissingEmail => "contact.error.email_missing",
            ContactFormError::InvalidEmail => "contact.error.email_invalid",
            ContactFormError::InvalidPhone => "contact.error.phone",
            ContactFormError::MessageTooShort { .. } => "contact.error.message_short",
            ContactFormError::MessageTooLong { .. } => "contact.error.message_long",
        }
    }
}

impl ContactRequest {
    /// Trim all fields; empty optional fields become `None`.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self
                .phone
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            service: self.service,
            message: self.message.trim().to_string(),
        }
    }

    /// Validate the normalized request and collect every failure.
    pub fn validate(&self) -> Result<(), Vec<ContactFormError>> {
        let req = self.normalized();
        let mut errors = Vec::new();

        if req.name.is_empty() {
            errors.push(ContactFormError::MissingName);
        }

        if req.email.is_empty() {
            errors.push(ContactFormError::MissingEmail);
        } else if !looks_like_email(&req.email) {
            errors.push(ContactFormError::InvalidEmail);
        }

        if let Some(phone) = &req.phone {
            let allowed = |c: char| c.is_ascii_digit() || " +-()".contains(c);
            if !phone.chars().all(allowed) || !phone.chars().any(|c| c.is_ascii_digit()) {
                errors.push(ContactFormError::InvalidPhone);
            }
        }

        let len = req.message.chars().count();
        if len < MIN_MESSAGE_LEN {
            errors.push(ContactFormError::MessageTooShort {
                min: MIN_MESSAGE_LEN,
            });
        } else if len > MAX_MESSAGE_LEN {
            errors.push(ContactFormError::MessageTooLong {
                max: MAX_MESSAGE_LEN,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactRequest {
        ContactRequest {
            name: "Layla".into(),
            email: "layla@example.com".into(),
            phone: Some("+971 (4) 555-0100".into()),
            service: Some(ServiceKind::Cleaning),
            message: "Please quote weekly office cleaning.".into(),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn blank_form_reports_every_required_field() {
        let errors = ContactRequest::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ContactFormError::MissingName,
                ContactFormError::MissingEmail,
                ContactFormError::MessageTooShort {
                    min: MIN_MESSAGE_LEN
                },
            ]
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["layla", "layla@", "@example.com", "layla@example", "a b@c.d", "a@b@c.d"] {
            let req = ContactRequest {
                email: email.into(),
                ..valid()
            };
            assert_eq!(
                req.validate(),
                Err(vec![ContactFormError::InvalidEmail]),
                "email {email:?}"
            );
        }
    }

    #[test]
    fn whitespace_only_phone_is_treated_as_absent() {
        let req = ContactRequest {
            phone: Some("   ".into()),
            ..valid()
        };
        assert_eq!(req.normalized().phone, None);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn letters_in_phone_are_rejected() {
        let req = ContactRequest {
            phone: Some("call me".into()),
            ..valid()
        };
        assert_eq!(req.validate(), Err(vec![ContactFormError::InvalidPhone]));
    }

    #[test]
    fn overlong_message_is_rejected() {
        let req = ContactRequest {
            message: "x".repeat(MAX_MESSAGE_LEN + 1),
            ..valid()
        };
        assert_eq!(
            req.validate(),
            Err(vec![ContactFormError::MessageTooLong {
                max: MAX_MESSAGE_LEN
            }])
        );
    }
}
