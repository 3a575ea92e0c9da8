//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use folio_config::{AppConfig, FolioConfig};
use folio_types::NonEmptyString;
use folio_types::ui::{Typewriter, TypewriterTiming};

pub const SEND_PATH: &str = "/api/v1.0/email/send";

/// Start a mock server standing in for the email relay.
pub async fn start_relay_mock() -> MockServer {
    MockServer::start().await
}

/// Mount a success response on the send endpoint.
pub async fn mount_send_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(server)
        .await;
}

/// Mount a failure response on the send endpoint.
pub async fn mount_send_error(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string("rejected"))
        .mount(server)
        .await;
}

/// Built-in app config with the mailer pointed at a mock relay.
pub fn config_with_relay(endpoint: String) -> AppConfig {
    let mut config = FolioConfig::default().into_app_config().unwrap();
    config.mailer = Some(folio_config::MailerSettings {
        service_id: NonEmptyString::new("service_test").unwrap(),
        template_id: NonEmptyString::new("template_test").unwrap(),
        public_key: NonEmptyString::new("key_test").unwrap(),
        to_name: Some("Ada Quinn".to_string()),
        endpoint: Some(endpoint),
    });
    config
}

/// A typewriter over the given phrases with default timings.
pub fn typewriter(raw: &[&str]) -> Typewriter {
    let phrases = raw
        .iter()
        .map(|p| NonEmptyString::new(*p).unwrap())
        .collect();
    Typewriter::new(phrases, TypewriterTiming::default()).unwrap()
}
