//! `POST /api/send-email`: validates a contact submission, then notifies the
//! site owner and sends the submitter a confirmation.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Local, TimeZone};
use futures::future::join;
use http::StatusCode;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    contact::{
        confirmation_subject, ContactRequest, ContactResponse, ContactSubmission, SubmissionError,
        SEND_EMAIL_PATH,
    },
    i18n::translate,
    mail::{self, Letterhead, MailConfig, MailError, Mailer, OutboundEmail},
};

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Missing required fields")]
    MissingFields,
    #[error("Failed to send email")]
    Dispatch(#[from] MailError),
}

impl From<SubmissionError> for RelayError {
    fn from(value: SubmissionError) -> Self {
        match value {
            SubmissionError::MissingFields => Self::MissingFields,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, details) = match &self {
            Self::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, None),
            Self::MissingFields => (StatusCode::BAD_REQUEST, None),
            Self::Dispatch(e) => (StatusCode::INTERNAL_SERVER_ERROR, Some(e.to_string())),
        };
        (status, Json(ContactResponse::failed(self.to_string(), details))).into_response()
    }
}

pub struct RelayState<M> {
    pub mailer: Arc<M>,
    pub config: Arc<MailConfig>,
}

impl<M> RelayState<M> {
    pub fn new(mailer: M, config: MailConfig) -> Self {
        Self {
            mailer: Arc::new(mailer),
            config: Arc::new(config),
        }
    }
}

impl<M> Clone for RelayState<M> {
    fn clone(&self) -> Self {
        Self {
            mailer: Arc::clone(&self.mailer),
            config: Arc::clone(&self.config),
        }
    }
}

/// Routes for the relay, already bound to their own state so they can be
/// merged into any application router.
pub fn router<M, S>(state: RelayState<M>) -> Router<S>
where
    M: Mailer,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            SEND_EMAIL_PATH,
            post(send_email::<M>).fallback(method_not_allowed),
        )
        .with_state(state)
}

async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}

async fn send_email<M: Mailer>(
    State(state): State<RelayState<M>>,
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, RelayError> {
    let Json(request) = body.map_err(|rejection| {
        warn!(%rejection, "unreadable contact request");
        RelayError::MissingFields
    })?;
    let submission = ContactSubmission::try_from(request)?;
    relay_submission(state.mailer.as_ref(), &state.config, &submission, &Local::now()).await?;
    Ok(Json(ContactResponse::sent()))
}

/// Sends both emails at once and waits for both. The first failure, owner
/// notification before confirmation, decides the error.
pub async fn relay_submission<M, Tz>(
    mailer: &M,
    config: &MailConfig,
    submission: &ContactSubmission,
    now: &DateTime<Tz>,
) -> Result<(), MailError>
where
    M: Mailer,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let letterhead = Letterhead::at(now);
    let to_owner = owner_notification_email(config, &letterhead, submission);
    let to_sender = sender_confirmation_email(config, &letterhead, submission);

    let (owner_res, sender_res) = join(mailer.send(to_owner), mailer.send(to_sender)).await;
    if let Err(e) = &owner_res {
        warn!(error = %e, "owner notification failed");
    }
    if let Err(e) = &sender_res {
        warn!(error = %e, to = %submission.email, "confirmation failed");
    }
    owner_res.and(sender_res)?;

    info!(
        name = %submission.name,
        language = %submission.language,
        "contact emails sent"
    );
    Ok(())
}

pub fn owner_notification_email(
    config: &MailConfig,
    letterhead: &Letterhead,
    submission: &ContactSubmission,
) -> OutboundEmail {
    OutboundEmail {
        from: config.user.clone(),
        to: config.user.clone(),
        reply_to: Some(submission.email.clone()),
        subject: format!("Portfolio Contact: {}", submission.name),
        html: mail::owner_notification(
            letterhead,
            &submission.name,
            &submission.email,
            &submission.message,
        ),
    }
}

pub fn sender_confirmation_email(
    config: &MailConfig,
    letterhead: &Letterhead,
    submission: &ContactSubmission,
) -> OutboundEmail {
    let language = submission.language;
    let (subject, html) = match submission.provided_confirmation() {
        Some((subject, fragment)) => {
            let body = mail::sanitize_fragment(fragment, subject);
            let html = mail::confirmation(letterhead, language, subject, &body);
            (subject.to_string(), html)
        }
        None => {
            let body = mail::default_confirmation_body(language, &submission.name, &config.owner_name);
            let title = translate(language, "email.confirmationTitle");
            let html = mail::confirmation(letterhead, language, &title, &body);
            (confirmation_subject(language, &submission.name), html)
        }
    };
    OutboundEmail {
        from: config.user.clone(),
        to: submission.email.clone(),
        reply_to: None,
        subject,
        html,
    }
}
