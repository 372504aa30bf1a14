use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::i18n::{translate, translate_args, Language};

pub const SEND_EMAIL_PATH: &str = "/api/send-email";

/// A validated contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl ContactSubmission {
    /// Builds the payload the contact form sends, with the confirmation
    /// subject and body already rendered in `language`.
    pub fn localized(name: String, email: String, message: String, language: Language) -> Self {
        let subject = confirmation_subject(language, &name);
        let html = confirmation_fragment(language, &name, &subject);
        Self {
            name,
            email,
            message,
            language,
            subject: Some(subject),
            html: Some(html),
        }
    }

    /// The caller-supplied confirmation, only when both halves are present.
    pub fn provided_confirmation(&self) -> Option<(&str, &str)> {
        match (self.subject.as_deref(), self.html.as_deref()) {
            (Some(subject), Some(html)) => Some((subject, html)),
            _ => None,
        }
    }
}

/// The raw request body, before required fields are checked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_language")]
    pub language: Option<Language>,
    pub subject: Option<String>,
    pub html: Option<String>,
}

/// Any non-string `language` is treated as absent.
fn lenient_language<'de, D>(deserializer: D) -> Result<Option<Language>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_str).map(Language::from))
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Missing required fields")]
    MissingFields,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl TryFrom<ContactRequest> for ContactSubmission {
    type Error = SubmissionError;

    fn try_from(value: ContactRequest) -> Result<Self, Self::Error> {
        let (Some(name), Some(email), Some(message)) = (
            present(value.name),
            present(value.email),
            present(value.message),
        ) else {
            return Err(SubmissionError::MissingFields);
        };
        Ok(Self {
            name,
            email,
            message,
            language: value.language.unwrap_or_default(),
            subject: present(value.subject),
            html: present(value.html),
        })
    }
}

/// JSON body returned by the relay endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactResponse {
    Sent {
        success: bool,
        message: String,
    },
    Failed {
        error: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
}

impl ContactResponse {
    pub fn sent() -> Self {
        Self::Sent {
            success: true,
            message: "Emails sent successfully".to_string(),
        }
    }

    pub fn failed(error: impl Into<String>, details: Option<String>) -> Self {
        Self::Failed {
            error: error.into(),
            details,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Sent { success: true, .. })
    }

    pub fn error_message(&self) -> String {
        match self {
            Self::Sent { message, .. } => message.clone(),
            Self::Failed {
                error,
                details: Some(details),
            } => format!("{error}: {details}"),
            Self::Failed { error, .. } => error.clone(),
        }
    }
}

pub fn confirmation_subject(language: Language, name: &str) -> String {
    translate_args(language, "email.confirmationSubject", &[("name", name)])
}

/// Confirmation body as the browser renders it. It repeats the subject as a
/// heading; the relay strips that before wrapping it in the email shell.
pub fn confirmation_fragment(language: Language, name: &str, subject: &str) -> String {
    let owner = format!(
        "{} {}",
        translate(language, "hero.name"),
        translate(language, "hero.lastname")
    );
    format!(
        "<h2>{subject}</h2><p>{greeting}</p><p>{body}</p><p>{signoff}<br/><strong>{owner}</strong></p>",
        greeting = translate_args(language, "email.greeting", &[("name", name)]),
        body = translate(language, "email.body"),
        signoff = translate(language, "email.signoff"),
    )
}
