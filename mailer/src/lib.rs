//! Contact form delivery.
//!
//! The page never talks SMTP: submissions are relayed through an
//! EmailJS-compatible HTTP endpoint (`POST /api/v1.0/email/send`) using
//! the account's service id, template id and public key. The surrounding
//! application only ever sees two outcomes - `Ok(())` or a
//! [`MailerError`] - and maps them to a confirmation or a generic retry
//! prompt.

use std::sync::OnceLock;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use folio_types::{EmptyStringError, NonEmptyString, truncate_with_ellipsis};

/// Canonical EmailJS send endpoint.
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 30;
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("mail relay returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Shared HTTP client: no redirects, bounded timeouts.
fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap_or_default()
    })
}

/// Relay account and routing. `endpoint` defaults to the public EmailJS
/// API; tests point it at a local mock server.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    pub service_id: NonEmptyString,
    pub template_id: NonEmptyString,
    pub public_key: NonEmptyString,
    pub to_name: Option<String>,
    pub endpoint: Option<String>,
}

impl MailerConfig {
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(EMAILJS_SEND_URL)
    }
}

/// A validated submission: every field is non-empty by construction.
#[derive(Debug, Clone)]
pub struct ContactRequest {
    from_name: NonEmptyString,
    from_email: NonEmptyString,
    subject: NonEmptyString,
    message: NonEmptyString,
}

impl ContactRequest {
    pub fn new(
        from_name: impl Into<String>,
        from_email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, EmptyStringError> {
        Ok(Self {
            from_name: NonEmptyString::new(from_name)?,
            from_email: NonEmptyString::new(from_email)?,
            subject: NonEmptyString::new(subject)?,
            message: NonEmptyString::new(message)?,
        })
    }

    #[must_use]
    pub fn from_name(&self) -> &str {
        self.from_name.as_str()
    }
}

#[derive(Serialize)]
struct SendPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    subject: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    to_name: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct Mailer {
    config: MailerConfig,
    client: reqwest::Client,
}

impl Mailer {
    #[must_use]
    pub fn new(config: MailerConfig) -> Self {
        Self {
            config,
            client: http_client().clone(),
        }
    }

    /// Relay one submission. Any non-success status is surfaced as
    /// [`MailerError::Status`] with a truncated body for the logs.
    pub async fn send(&self, request: &ContactRequest) -> Result<(), MailerError> {
        let payload = SendPayload {
            service_id: self.config.service_id.as_str(),
            template_id: self.config.template_id.as_str(),
            user_id: self.config.public_key.as_str(),
            template_params: TemplateParams {
                from_name: request.from_name.as_str(),
                from_email: request.from_email.as_str(),
                subject: request.subject.as_str(),
                message: request.message.as_str(),
                to_name: self.config.to_name.as_deref(),
            },
        };

        let response = self
            .client
            .post(self.config.endpoint())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(from = %request.from_name, "Contact message relayed");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let body = truncate_with_ellipsis(&body, MAX_ERROR_BODY_CHARS);
        tracing::warn!(status = status.as_u16(), "Mail relay rejected message");
        Err(MailerError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactRequest, EMAILJS_SEND_URL, Mailer, MailerConfig};
    use folio_types::NonEmptyString;

    fn config(endpoint: Option<String>) -> MailerConfig {
        MailerConfig {
            service_id: NonEmptyString::new("service_demo").unwrap(),
            template_id: NonEmptyString::new("template_demo").unwrap(),
            public_key: NonEmptyString::new("public_demo").unwrap(),
            to_name: Some("Ada Quinn".to_string()),
            endpoint,
        }
    }

    fn request() -> ContactRequest {
        ContactRequest::new("Grace", "grace@example.com", "Hello", "A question.").unwrap()
    }

    #[test]
    fn request_rejects_empty_fields() {
        assert!(ContactRequest::new("", "grace@example.com", "Hi", "Body").is_err());
        assert!(ContactRequest::new("Grace", "   ", "Hi", "Body").is_err());
        assert!(ContactRequest::new("Grace", "grace@example.com", "Hi", "").is_err());
    }

    #[test]
    fn endpoint_defaults_to_emailjs() {
        assert_eq!(config(None).endpoint(), EMAILJS_SEND_URL);
        assert_eq!(
            config(Some("http://127.0.0.1:9/send".to_string())).endpoint(),
            "http://127.0.0.1:9/send"
        );
    }

    #[tokio::test]
    async fn send_succeeds_on_200() {
        use wiremock::matchers::{body_partial_json, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1.0/email/send"))
            .and(body_partial_json(serde_json::json!({
                "service_id": "service_demo",
                "template_params": {
                    "from_name": "Grace",
                    "from_email": "grace@example.com",
                    "subject": "Hello",
                    "message": "A question.",
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&server)
            .await;

        let endpoint = format!("{}/api/v1.0/email/send", server.uri());
        let mailer = Mailer::new(config(Some(endpoint)));
        mailer.send(&request()).await.unwrap();
    }

    #[tokio::test]
    async fn send_maps_error_status() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1.0/email/send"))
            .respond_with(ResponseTemplate::new(403).set_body_string("bad key"))
            .mount(&server)
            .await;

        let endpoint = format!("{}/api/v1.0/email/send", server.uri());
        let mailer = Mailer::new(config(Some(endpoint)));
        let err = mailer.send(&request()).await.unwrap_err();
        match err {
            super::MailerError::Status { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "bad key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
