use std::time::Duration;

use http::StatusCode;
use leptos::{ev::SubmitEvent, html, prelude::*, task::spawn_local};
use thiserror::Error;

use super::use_language;
use crate::contact::{ContactResponse, ContactSubmission, SEND_EMAIL_PATH};

const TOAST_DURATION: Duration = Duration::from_secs(5);
const CONTACT_EMAIL: &str = "raphael.martin.2004@gmail.com";
const LINKEDIN_URL: &str = "https://www.linkedin.com/in/raphael-martin-10a17128a/";

#[derive(Error, Debug)]
pub enum ContactError {
    #[cfg(feature = "hydrate")]
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{0}")]
    Rejected(String),
}

/// Outcome shown to the user once a submission settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toast {
    Sent,
    Failed,
}

impl Toast {
    pub fn from_result<T, E>(result: &Result<T, E>) -> Self {
        if result.is_ok() {
            Self::Sent
        } else {
            Self::Failed
        }
    }

    fn keys(self) -> (&'static str, &'static str) {
        match self {
            Self::Sent => ("contact.messageSent", "contact.messageSentDesc"),
            Self::Failed => ("contact.messageFailed", "contact.messageFailedDesc"),
        }
    }
}

fn endpoint() -> String {
    window()
        .location()
        .origin()
        .map(|origin| format!("{origin}{SEND_EMAIL_PATH}"))
        .unwrap_or_else(|_| SEND_EMAIL_PATH.to_string())
}

/// Anything but a 2xx carrying `success: true` counts as a failure.
pub fn settle(status: StatusCode, body: ContactResponse) -> Result<ContactResponse, ContactError> {
    if status.is_success() && body.is_success() {
        Ok(body)
    } else {
        Err(ContactError::Rejected(body.error_message()))
    }
}

#[cfg(feature = "hydrate")]
pub async fn post_submission(
    url: &str,
    submission: &ContactSubmission,
) -> Result<ContactResponse, ContactError> {
    let response = reqwest::Client::new()
        .post(url)
        .json(submission)
        .send()
        .await?;
    let status = response.status();
    let body = response.json::<ContactResponse>().await?;
    settle(status, body)
}

#[cfg(not(feature = "hydrate"))]
pub async fn post_submission(
    _url: &str,
    _submission: &ContactSubmission,
) -> Result<ContactResponse, ContactError> {
    Err(ContactError::Rejected(
        "submissions are sent from the browser".to_string(),
    ))
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let ctx = use_language();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (submitting, set_submitting) = signal(false);
    let (toast, set_toast) = signal(None::<Toast>);
    let toast_generation = StoredValue::new(0_u64);

    let show_toast = move |next: Toast| {
        let generation = toast_generation.with_value(|g| g + 1);
        toast_generation.set_value(generation);
        set_toast(Some(next));
        set_timeout(
            move || {
                // a newer toast owns the slot
                if toast_generation.get_value() == generation {
                    set_toast(None);
                }
            },
            TOAST_DURATION,
        );
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let (Some(name), Some(email), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        let submission = ContactSubmission::localized(
            name.value(),
            email.value(),
            message.value(),
            ctx.get_untracked(),
        );

        set_submitting(true);
        spawn_local(async move {
            let result = post_submission(&endpoint(), &submission).await;
            match &result {
                Ok(_) => {
                    name.set_value("");
                    email.set_value("");
                    message.set_value("");
                }
                Err(e) => log::warn!("contact submission failed: {e}"),
            }
            show_toast(Toast::from_result(&result));
            set_submitting(false);
        });
    };

    let input_class = "w-full px-3 py-2 border border-brightBlack bg-background focus:outline-none focus:ring-2 focus:ring-blue";

    view! {
        <section id="contact" class="w-full">
            <div class="space-y-3">
                <div class="space-y-2">
                    <h3 class="text-xs font-semibold uppercase tracking-widest">
                        {move || ctx.t("contact.contactInfo")}
                    </h3>
                    <div class="flex items-center gap-2">
                        <span class="font-semibold text-xs">{move || ctx.t("contact.email")}</span>
                        <a href=format!("mailto:{CONTACT_EMAIL}") class="text-xs hover:text-blue">
                            {CONTACT_EMAIL}
                        </a>
                    </div>
                    <div class="flex items-center gap-2">
                        <span class="font-semibold text-xs">
                            {move || ctx.t("contact.connectWithMe")}
                        </span>
                        <a href=LINKEDIN_URL target="_blank" class="text-xs hover:text-blue">
                            "LinkedIn"
                        </a>
                    </div>
                </div>
                <form class="space-y-3" on:submit=on_submit>
                    <h3 class="text-xs font-semibold uppercase tracking-widest">
                        {move || ctx.t("contact.sendAMessage")}
                    </h3>
                    <label class="block text-xs font-semibold" for="name">
                        {move || ctx.t("contact.yourName")}
                    </label>
                    <input
                        node_ref=name_ref
                        id="name"
                        name="name"
                        type="text"
                        required
                        class=input_class
                        placeholder=move || ctx.t("contact.namePlaceholder")
                    />
                    <label class="block text-xs font-semibold" for="email">
                        {move || ctx.t("contact.yourEmail")}
                    </label>
                    <input
                        node_ref=email_ref
                        id="email"
                        name="email"
                        type="email"
                        required
                        class=input_class
                        placeholder=move || ctx.t("contact.emailPlaceholder")
                    />
                    <label class="block text-xs font-semibold" for="message">
                        {move || ctx.t("contact.yourMessage")}
                    </label>
                    <textarea
                        node_ref=message_ref
                        id="message"
                        name="message"
                        required
                        rows="4"
                        class=format!("{input_class} resize-none")
                        placeholder=move || ctx.t("contact.messagePlaceholder")
                    ></textarea>
                    <button
                        type="submit"
                        class="w-full px-4 py-2 bg-blue text-background font-semibold disabled:opacity-50"
                        disabled=move || submitting.get()
                    >
                        {move || {
                            if submitting.get() {
                                ctx.t("contact.sending")
                            } else {
                                ctx.t("contact.sendMessage")
                            }
                        }}
                    </button>
                </form>
            </div>
            {move || {
                toast
                    .get()
                    .map(|toast| {
                        let (title, description) = toast.keys();
                        let class = match toast {
                            Toast::Sent => "fixed bottom-6 right-6 z-[60] p-4 shadow-xl border-l-4 border-green bg-background animate-fade-in",
                            Toast::Failed => "fixed bottom-6 right-6 z-[60] p-4 shadow-xl border-l-4 border-red bg-background animate-fade-in",
                        };
                        view! {
                            <div class=class role="status" on:click=move |_| set_toast(None)>
                                <p class="font-semibold">{move || ctx.t(title)}</p>
                                <p class="text-sm text-muted">{move || ctx.t(description)}</p>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_follows_result() {
        let ok: Result<(), ContactError> = Ok(());
        assert_eq!(Toast::from_result(&ok), Toast::Sent);
        let err: Result<(), ContactError> = Err(ContactError::Rejected("boom".into()));
        assert_eq!(Toast::from_result(&err), Toast::Failed);
        assert_eq!(Toast::Failed.keys().0, "contact.messageFailed");
    }

    #[test]
    fn test_settle_needs_2xx_and_success() {
        let sent = ContactResponse::sent();
        let failed = ContactResponse::failed("Failed to send email", Some("boom".into()));
        let not_sent = ContactResponse::Sent {
            success: false,
            message: "nope".into(),
        };

        assert_eq!(settle(StatusCode::OK, sent.clone()).unwrap(), sent);
        assert!(matches!(
            settle(StatusCode::INTERNAL_SERVER_ERROR, sent),
            Err(ContactError::Rejected(_))
        ));
        assert!(matches!(
            settle(StatusCode::OK, not_sent),
            Err(ContactError::Rejected(msg)) if msg == "nope"
        ));
        assert!(matches!(
            settle(StatusCode::INTERNAL_SERVER_ERROR, failed),
            Err(ContactError::Rejected(msg)) if msg == "Failed to send email: boom"
        ));
    }
}
