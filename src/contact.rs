//! Contact form → `mailto:` draft.
//!
//! Submitting the form never leaves the page through a network request.
//! Instead the fields are turned into a pre-filled email draft and the browser
//! is pointed at its `mailto:` URL, which opens the user's mail client.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::config::FxConfig;
use crate::consts::STATUS_OPENING;

/// Why a submission did not produce a draft. `Display` is the status text
/// shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    #[error("Please write a message.")]
    MissingMessage,
    #[error("Email address missing.")]
    MissingRecipient,
}

/// Trimmed form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub reply_to: String,
    pub message: String,
}

impl ContactDraft {
    #[must_use]
    pub fn new(name: &str, reply_to: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_owned(),
            reply_to: reply_to.trim().to_owned(),
            message: message.trim().to_owned(),
        }
    }
}

/// A composed email, not yet encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailtoDraft {
    /// `mailto:` URL with percent-encoded subject and body.
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

/// Build the email for `draft`, addressed to `to`.
///
/// # Errors
///
/// [`ComposeError::MissingMessage`] when the message is blank (checked first),
/// [`ComposeError::MissingRecipient`] when no destination is configured.
pub fn compose(draft: &ContactDraft, to: Option<&str>, config: &FxConfig) -> Result<MailtoDraft, ComposeError> {
    if draft.message.is_empty() {
        return Err(ComposeError::MissingMessage);
    }

    let subject = format!("{} — {}", config.subject_prefix, draft.name).trim().to_owned();

    let mut body = format!("Hi {},\n\n{}\n\n— {}", config.recipient_label, draft.message, draft.name);
    if !draft.reply_to.is_empty() {
        body.push('\n');
        body.push_str(&draft.reply_to);
    }

    let to = to.filter(|addr| !addr.is_empty()).ok_or(ComposeError::MissingRecipient)?;
    Ok(MailtoDraft { to: to.to_owned(), subject, body })
}

/// What a submission does: the status to show and where to navigate, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub status: String,
    pub navigate_to: Option<String>,
}

/// Resolve a form submission into its visible effects.
#[must_use]
pub fn submit(draft: &ContactDraft, to: Option<&str>, config: &FxConfig) -> Submission {
    match compose(draft, to, config) {
        Ok(mail) => Submission { status: STATUS_OPENING.to_owned(), navigate_to: Some(mail.url()) },
        Err(err) => Submission { status: err.to_string(), navigate_to: None },
    }
}

#[cfg(feature = "hydrate")]
pub use browser::init_contact;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Document, Element, Event, Window};

    use super::{ContactDraft, submit};
    use crate::config::FxConfig;
    use crate::consts::{
        CONTACT_EMAIL_SELECTOR, CONTACT_FORM_SELECTOR, CONTACT_MESSAGE_SELECTOR, CONTACT_NAME_SELECTOR,
        CONTACT_STATUS_SELECTOR, CONTACT_TO_ATTR,
    };
    use crate::dom;
    use crate::error::FxError;

    /// Intercept contact form submission and open a mail draft instead.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Dom`] if a lookup or listener registration fails.
    pub fn init_contact(window: &Window, document: &Document, config: &FxConfig) -> Result<(), FxError> {
        let Some(form) = dom::query(document, CONTACT_FORM_SELECTOR)? else {
            return Ok(());
        };
        let status = dom::query(document, CONTACT_STATUS_SELECTOR)?;
        let to = form.get_attribute(CONTACT_TO_ATTR);
        if to.as_deref().is_none_or(str::is_empty) {
            log::warn!("contact: form has no {CONTACT_TO_ATTR} address");
        }

        let win = window.clone();
        let doc = document.clone();
        let config = config.clone();
        dom::listen(&form, "submit", false, move |e: Event| {
            e.prevent_default();
            dom::report("contact", on_submit(&win, &doc, status.as_ref(), to.as_deref(), &config));
        })?;

        log::debug!("contact: form wired");
        Ok(())
    }

    fn on_submit(
        window: &Window,
        document: &Document,
        status: Option<&Element>,
        to: Option<&str>,
        config: &FxConfig,
    ) -> Result<(), FxError> {
        let draft = ContactDraft::new(
            &dom::field_value(document, CONTACT_NAME_SELECTOR)?,
            &dom::field_value(document, CONTACT_EMAIL_SELECTOR)?,
            &dom::field_value(document, CONTACT_MESSAGE_SELECTOR)?,
        );
        let outcome = submit(&draft, to, config);
        if let Some(url) = outcome.navigate_to.as_deref() {
            window.location().set_href(url)?;
        }
        if let Some(status) = status {
            status.set_text_content(Some(&outcome.status));
        }
        Ok(())
    }
}
