#![cfg(feature = "ssr")]

use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use portfolio_site::{
    mail::{MailConfig, MailError, Mailer, OutboundEmail},
    relay::{self, RelayState},
};
use serde_json::{json, Value};
use tower::ServiceExt;

#[derive(Clone, Default)]
struct FakeMailer {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    fail: bool,
}

impl Mailer for FakeMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email);
        if self.fail {
            return Err(MailError::NotConfigured);
        }
        Ok(())
    }
}

fn config() -> MailConfig {
    MailConfig {
        user: "owner@example.com".into(),
        app_password: "secret".into(),
        smtp_host: "smtp.example.com".into(),
        smtp_port: 587,
        owner_name: "Raphaël Martin".into(),
    }
}

fn app(mailer: FakeMailer) -> Router {
    relay::router(RelayState::new(mailer, config()))
}

async fn call(app: Router, method: Method, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri("/api/send-email")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn alice() -> Value {
    json!({"name": "Alice", "email": "alice@example.com", "message": "Hello"})
}

#[tokio::test]
async fn test_other_methods_are_rejected() {
    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let mailer = FakeMailer::default();
        let (status, body) = call(app(mailer.clone()), method, json!("not even an object")).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({"error": "Method not allowed"}));
        assert!(mailer.sent.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_missing_fields() {
    for field in ["name", "email", "message"] {
        let mut payload = alice();
        payload.as_object_mut().unwrap().remove(field);
        let mailer = FakeMailer::default();
        let (status, body) = call(app(mailer.clone()), Method::POST, payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "without {field}");
        assert_eq!(body, json!({"error": "Missing required fields"}));
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    let (status, _) = call(app(FakeMailer::default()), Method::POST, json!([1, 2])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sends_both_emails() {
    let mailer = FakeMailer::default();
    let (status, body) = call(app(mailer.clone()), Method::POST, alice()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": "Emails sent successfully"})
    );

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert!(sent.iter().any(|e| e.subject == "Portfolio Contact: Alice"));
    assert!(sent
        .iter()
        .any(|e| e.subject == "Thank you for contacting me, Alice!"));
}

#[tokio::test]
async fn test_unsupported_language_uses_english() {
    let mailer = FakeMailer::default();
    let mut payload = alice();
    payload["language"] = json!("de");
    let (status, _) = call(app(mailer.clone()), Method::POST, payload).await;
    assert_eq!(status, StatusCode::OK);

    let sent = mailer.sent.lock().unwrap();
    let confirmation = sent.iter().find(|e| e.to == "alice@example.com").unwrap();
    assert_eq!(confirmation.subject, "Thank you for contacting me, Alice!");
    assert!(confirmation.html.contains("Hi Alice,"));
}

#[tokio::test]
async fn test_non_string_language_uses_english() {
    let mailer = FakeMailer::default();
    let mut payload = alice();
    payload["language"] = json!(5);
    let (status, body) = call(app(mailer.clone()), Method::POST, payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": "Emails sent successfully"})
    );

    let sent = mailer.sent.lock().unwrap();
    let confirmation = sent.iter().find(|e| e.to == "alice@example.com").unwrap();
    assert_eq!(confirmation.subject, "Thank you for contacting me, Alice!");
}

#[tokio::test]
async fn test_transport_failure() {
    let mailer = FakeMailer {
        fail: true,
        ..Default::default()
    };
    let (status, body) = call(app(mailer.clone()), Method::POST, alice()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to send email");
    assert_eq!(
        body["details"],
        MailError::NotConfigured.to_string().as_str()
    );
    assert_eq!(mailer.sent.lock().unwrap().len(), 2);
}
