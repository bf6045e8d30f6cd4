//! Contact form submission over an in-memory transport.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shfeet_commerce::contact::ContactMessage;
use shfeet_commerce::{CommerceError, NoticeLevel};
use shfeet_data::{FetchClient, FetchError, RequestBuilder, Response, StorefrontApi, Transport};

#[derive(Clone)]
struct CannedTransport {
    status: u16,
    body: &'static str,
    sent: Arc<Mutex<Vec<RequestBuilder>>>,
}

impl CannedTransport {
    fn new(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            sent: Arc::default(),
        }
    }
}

#[async_trait]
impl Transport for CannedTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        self.sent.lock().unwrap().push(request);
        Ok(Response::new(
            self.status,
            HashMap::new(),
            self.body.as_bytes().to_vec(),
        ))
    }
}

fn api(transport: &CannedTransport) -> StorefrontApi {
    StorefrontApi::new(
        FetchClient::with_transport(transport.clone()).with_base_url("https://api.test"),
    )
}

fn message() -> ContactMessage {
    ContactMessage {
        name: " Ada ".into(),
        email: "ada@example.com".into(),
        subject: "Sizing".into(),
        message: "Do the slides run small?".into(),
    }
}

#[tokio::test]
async fn sends_trimmed_message() {
    let transport = CannedTransport::new(200, r#"{"ok":true}"#);
    let notice = message().submit(&api(&transport)).await.unwrap();

    assert_eq!(notice.title, "Message sent!");
    assert_eq!(notice.level, NoticeLevel::Success);

    let sent = transport.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url, "https://api.test/api/contact");
    let body: serde_json::Value = serde_json::from_slice(sent[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["subject"], "Sizing");
}

#[tokio::test]
async fn invalid_message_is_not_sent() {
    let transport = CannedTransport::new(200, "{}");
    let bad = ContactMessage {
        email: "not-an-email".into(),
        ..message()
    };

    let result = bad.submit(&api(&transport)).await;
    assert!(matches!(result, Err(CommerceError::InvalidEmail(_))));
    assert!(transport.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn server_error_surfaces_message() {
    let transport = CannedTransport::new(500, r#"{"message":"mailbox full"}"#);
    let err = message().submit(&api(&transport)).await.unwrap_err();

    match err {
        CommerceError::ApiError(text) => assert!(text.contains("mailbox full"), "{}", text),
        other => panic!("unexpected error: {:?}", other),
    }
}
