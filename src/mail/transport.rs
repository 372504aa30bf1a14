use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::{MailError, Mailer, OutboundEmail};

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_OWNER_NAME: &str = "Raphaël Martin";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Outbound mail settings. The account address is both the sender of every
/// email and the inbox that receives contact notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub user: String,
    pub app_password: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub owner_name: String,
}

impl MailConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let smtp_port = match get("MAIL_SMTP_PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "MAIL_SMTP_PORT",
                value,
            })?,
            None => DEFAULT_SMTP_PORT,
        };
        Ok(Self {
            user: get("MAIL_USER").unwrap_or_default(),
            app_password: get("MAIL_APP_PASSWORD").unwrap_or_default(),
            smtp_host: get("MAIL_SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port,
            owner_name: get("MAIL_OWNER_NAME").unwrap_or_else(|| DEFAULT_OWNER_NAME.to_string()),
        })
    }

    pub fn has_credentials(&self) -> bool {
        !self.user.is_empty() && !self.app_password.is_empty()
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|source| MailError::Address {
        address: address.to_string(),
        source,
    })
}

pub fn build_message(email: OutboundEmail) -> Result<Message, MailError> {
    let mut builder = Message::builder()
        .from(parse_mailbox(&email.from)?)
        .to(parse_mailbox(&email.to)?)
        .subject(email.subject)
        .header(ContentType::TEXT_HTML);
    if let Some(reply_to) = &email.reply_to {
        builder = builder.reply_to(parse_mailbox(reply_to)?);
    }
    Ok(builder.body(email.html)?)
}

/// SMTP relay client. Without credentials every send fails with
/// [`MailError::NotConfigured`] instead of refusing to start the server.
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        if !config.has_credentials() {
            warn!("mail credentials missing, contact emails will fail");
            return Ok(Self { transport: None });
        }
        let credentials = Credentials::new(config.user.clone(), config.app_password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();
        info!(
            smtp_host = %config.smtp_host,
            smtp_port = config.smtp_port,
            user = %config.user,
            "mail transport ready"
        );
        Ok(Self {
            transport: Some(transport),
        })
    }
}

impl Mailer for SmtpMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        let transport = self.transport.as_ref().ok_or(MailError::NotConfigured)?;
        let to = email.to.clone();
        let message = build_message(email)?;
        let response = transport.send(message).await?;
        if !response.is_positive() {
            return Err(MailError::Rejected(response.code().to_string()));
        }
        debug!(%to, "email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |name| map.get(name).cloned()
    }

    fn email() -> OutboundEmail {
        OutboundEmail {
            from: "owner@example.com".into(),
            to: "alice@example.com".into(),
            reply_to: Some("bob@example.com".into()),
            subject: "Portfolio Contact: Alice".into(),
            html: "<p>Hi</p>".into(),
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = MailConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.smtp_host, "smtp.gmail.com");
        assert_eq!(config.smtp_port, 587);
        assert_eq!(config.owner_name, "Raphaël Martin");
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_config_overrides() {
        let config = MailConfig::from_lookup(lookup(&[
            ("MAIL_USER", "owner@example.com"),
            ("MAIL_APP_PASSWORD", "secret"),
            ("MAIL_SMTP_HOST", "smtp.example.com"),
            ("MAIL_SMTP_PORT", "2525"),
        ]))
        .unwrap();
        assert!(config.has_credentials());
        assert_eq!(config.smtp_host, "smtp.example.com");
        assert_eq!(config.smtp_port, 2525);

        let err = MailConfig::from_lookup(lookup(&[("MAIL_SMTP_PORT", "smtp")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for MAIL_SMTP_PORT: smtp");
    }

    #[test]
    fn test_build_message_headers() {
        let message = build_message(email()).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Reply-To: bob@example.com"));
        assert!(raw.contains("Subject: Portfolio Contact: Alice"));
        assert!(raw.contains("Content-Type: text/html"));
    }

    #[test]
    fn test_build_message_bad_address() {
        let mut bad = email();
        bad.to = "not an address".into();
        let err = build_message(bad).unwrap_err();
        assert!(matches!(err, MailError::Address { .. }));
        assert!(err.to_string().starts_with("Invalid address 'not an address'"));
    }

    #[tokio::test]
    async fn test_send_without_credentials() {
        let config = MailConfig::from_lookup(lookup(&[])).unwrap();
        let mailer = SmtpMailer::new(&config).unwrap();
        let err = mailer.send(email()).await.unwrap_err();
        assert!(matches!(err, MailError::NotConfigured));
    }
}
