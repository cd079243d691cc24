use crate::shared::components::PageHeader;
use crate::shared::config::use_site_config;
use crate::shared::i18n::use_locale;
use crate::shared::router::use_router;
use contracts::enums::{ServiceKind, ViewId};
use contracts::shared::contact::{ContactFormError, ContactRequest};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Input, Textarea};

/// Service chosen elsewhere on the site ("Request a quote") to preselect in the form.
#[derive(Clone, Copy)]
pub struct ContactPrefill {
    pub service: RwSignal<Option<ServiceKind>>,
}

impl ContactPrefill {
    pub fn new() -> Self {
        Self {
            service: RwSignal::new(None),
        }
    }

    /// Request the form preselect `kind`.
    pub fn request(&self, kind: ServiceKind) {
        self.service.set(Some(kind));
    }

    /// Hand out the pending service once. Untracked; clears only when something was pending.
    pub fn take(&self) -> Option<ServiceKind> {
        let kind = self.service.get_untracked()?;
        self.service.set(None);
        Some(kind)
    }
}

impl Default for ContactPrefill {
    fn default() -> Self {
        Self::new()
    }
}

/// `mailto:` link carrying the request as subject and body.
pub fn mailto_url(to: &str, req: &ContactRequest) -> String {
    let subject = match req.service {
        Some(kind) => format!("Quote request: {}", kind.code()),
        None => "Website enquiry".to_string(),
    };
    let mut body = format!("Name: {}\nEmail: {}\n", req.name, req.email);
    if let Some(phone) = &req.phone {
        body.push_str(&format!("Phone: {phone}\n"));
    }
    if let Some(kind) = req.service {
        body.push_str(&format!("Service: {}\n", kind.code()));
    }
    body.push('\n');
    body.push_str(&req.message);

    format!(
        "mailto:{}?subject={}&body={}",
        to,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let router = use_router();
    let locale = use_locale();
    let contact = use_site_config().contact;
    let mail_to = StoredValue::new(contact.email.clone());

    // Form fields using RwSignal for compatibility with Thaw
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let service = RwSignal::new(None::<ServiceKind>);
    let errors = RwSignal::new(Vec::<ContactFormError>::new());
    let sent = RwSignal::new(false);

    if let Some(prefill) = use_context::<ContactPrefill>() {
        // The page may already be mounted (still fading out) when a quote is
        // requested, so follow the prefill rather than reading it once.
        Effect::new(move |_| {
            prefill.service.track();
            if let Some(kind) = prefill.take() {
                service.set(Some(kind));
            }
        });
    }

    let submit = move || {
        let req = ContactRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: Some(phone.get_untracked()),
            service: service.get_untracked(),
            message: message.get_untracked(),
        }
        .normalized();

        match req.validate() {
            Ok(()) => {
                errors.set(Vec::new());
                let url = mail_to.with_value(|to| mailto_url(to, &req));
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&url);
                }
                sent.set(true);
                log::info!("contact form submitted");
            }
            Err(found) => {
                log::debug!("contact form rejected: {} error(s)", found.len());
                sent.set(false);
                errors.set(found);
            }
        }
    };

    let field_error = move |field: &'static str| {
        move || {
            errors.with(|errs| {
                errs.iter()
                    .find(|e| e.field() == field)
                    .map(|e| e.message_key())
            })
            .map(|key| view! { <div class="form__error">{locale.t(key)}</div> })
        }
    };

    view! {
        <div class="contact-page">
            <PageHeader title_key="contact.title" subtitle_key="contact.subtitle">
                <button class="button button--link" on:click=move |_| router.navigate_to(ViewId::Home)>
                    {move || locale.t("page.back_home")}
                </button>
            </PageHeader>

            <div class="page-content contact-page__grid">
                <div class="card contact-page__form">
                    <div class="form__group">
                        <label class="form__label">{move || locale.t("contact.name")}</label>
                        <Input value=name />
                        {field_error("name")}
                    </div>

                    <div class="form__group">
                        <label class="form__label">{move || locale.t("contact.email")}</label>
                        <Input value=email />
                        {field_error("email")}
                    </div>

                    <div class="form__group">
                        <label class="form__label">{move || locale.t("contact.phone")}</label>
                        <Input value=phone />
                        {field_error("phone")}
                    </div>

                    <div class="form__group">
                        <label class="form__label">{move || locale.t("contact.service")}</label>
                        <select
                            class="form__select"
                            on:change=move |ev| service.set(ServiceKind::from_code(&event_target_value(&ev)))
                        >
                            <option value="" prop:selected=move || service.get().is_none()>
                                {move || locale.t("contact.service.any")}
                            </option>
                            {ServiceKind::all().into_iter().map(|kind| view! {
                                <option value=kind.code() prop:selected=move || service.get() == Some(kind)>
                                    {move || locale.t(kind.title_key())}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <label class="form__label">{move || locale.t("contact.message")}</label>
                        <Textarea value=message attr:rows=5 />
                        {field_error("message")}
                    </div>

                    <Button appearance=ButtonAppearance::Primary on_click=move |_| submit()>
                        {move || locale.t("contact.submit")}
                    </Button>

                    <Show when=move || sent.get()>
                        <div class="form__success">{move || locale.t("contact.sent")}</div>
                    </Show>
                </div>

                <div class="card contact-page__info">
                    <h3>{move || locale.t("contact.reach")}</h3>
                    <a href=format!("mailto:{}", contact.email)>{contact.email.clone()}</a>
                    <a href=format!("tel:{}", contact.phone.replace(' ', ""))>{contact.phone.clone()}</a>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_subject_and_body() {
        let req = ContactRequest {
            name: "Omar".into(),
            email: "omar@example.com".into(),
            phone: None,
            service: Some(ServiceKind::Hvac),
            message: "Chiller service & inspection".into(),
        };
        let url = mailto_url("info@facilitypro.example", &req);
        assert!(url.starts_with("mailto:info@facilitypro.example?subject=Quote%20request%3A%20hvac&body="));
        assert!(url.contains("Name%3A%20Omar%0A"));
        assert!(url.contains("Service%3A%20hvac%0A"));
        assert!(url.contains("%26"));
        assert!(!url.contains("Phone"));
    }

    #[test]
    fn quote_request_is_handed_out_once() {
        let owner = Owner::new();
        owner.with(|| {
            let prefill = ContactPrefill::new();
            assert_eq!(prefill.take(), None);

            prefill.request(ServiceKind::Security);
            assert_eq!(prefill.take(), Some(ServiceKind::Security));
            // A later plain visit starts empty.
            assert_eq!(prefill.take(), None);

            prefill.request(ServiceKind::Cleaning);
            prefill.request(ServiceKind::Hvac);
            assert_eq!(prefill.take(), Some(ServiceKind::Hvac));
        });
    }

    #[test]
    fn general_enquiry_without_service() {
        let req = ContactRequest {
            name: "Omar".into(),
            email: "omar@example.com".into(),
            message: "Hello there, general question".into(),
            ..ContactRequest::default()
        };
        let url = mailto_url("a@b.c", &req);
        assert!(url.contains("subject=Website%20enquiry"));
    }
}
