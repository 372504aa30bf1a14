mod sanitize;
mod templates;
mod transport;

pub use sanitize::{sanitize_fragment, strip_headings, strip_literal};
pub use templates::{
    confirmation, default_confirmation_body, interpolate, owner_notification, Letterhead,
};
pub use transport::{build_message, ConfigError, MailConfig, SmtpMailer};

use std::future::Future;

use thiserror::Error;

/// A fully rendered HTML email, ready for a [`Mailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Mail account is not configured: set MAIL_USER and MAIL_APP_PASSWORD")]
    NotConfigured,
    #[error("Invalid address '{address}': {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },
    #[error(transparent)]
    Build(#[from] lettre::error::Error),
    #[error(transparent)]
    Transport(#[from] lettre::transport::smtp::Error),
    #[error("Mail relay rejected the message: {0}")]
    Rejected(String),
}

pub trait Mailer: Send + Sync + 'static {
    fn send(&self, email: OutboundEmail) -> impl Future<Output = Result<(), MailError>> + Send;
}
