//! Contact submission tests: the mailer boundary against a mock relay,
//! and the full submit lifecycle through the app.

use std::time::Duration;

use folio_engine::{App, FAILURE_MESSAGE, SUCCESS_MESSAGE};
use folio_mailer::{ContactRequest, Mailer, MailerConfig};
use folio_types::NonEmptyString;
use folio_types::ui::{ContactField, SubmitStatus};

use crate::common::{SEND_PATH, config_with_relay, mount_send_error, mount_send_ok, start_relay_mock};

fn mailer_config(endpoint: String) -> MailerConfig {
    MailerConfig {
        service_id: NonEmptyString::new("service_test").unwrap(),
        template_id: NonEmptyString::new("template_test").unwrap(),
        public_key: NonEmptyString::new("key_test").unwrap(),
        to_name: None,
        endpoint: Some(endpoint),
    }
}

fn fill_form(app: &mut App) {
    for (field, text) in [
        (ContactField::Name, "Grace Hopper"),
        (ContactField::Email, "grace@example.com"),
        (ContactField::Subject, "Collaboration"),
        (ContactField::Message, "Let's build something."),
    ] {
        while app.form().focus() != field {
            app.form_mut().focus_next();
        }
        for c in text.chars() {
            app.form_mut().insert_char(c);
        }
    }
}

/// Poll the app until the submission settles or the deadline passes.
async fn wait_for_outcome(app: &mut App) -> SubmitStatus {
    for _ in 0..200 {
        app.process_submit_events();
        if !app.form().status().is_sending() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    app.form().status().clone()
}

#[tokio::test]
async fn mailer_posts_template_params() {
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_partial_json(serde_json::json!({
            "service_id": "service_test",
            "template_id": "template_test",
            "user_id": "key_test",
            "template_params": {
                "from_name": "Grace Hopper",
                "from_email": "grace@example.com",
                "subject": "Collaboration",
                "message": "Let's build something.",
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    let mailer = Mailer::new(mailer_config(format!("{}{SEND_PATH}", server.uri())));
    let request = ContactRequest::new(
        "Grace Hopper",
        "grace@example.com",
        "Collaboration",
        "Let's build something.",
    )
    .unwrap();
    mailer.send(&request).await.unwrap();
}

#[tokio::test]
async fn mailer_surfaces_relay_errors() {
    let server = start_relay_mock().await;
    mount_send_error(&server, 500).await;

    let mailer = Mailer::new(mailer_config(format!("{}{SEND_PATH}", server.uri())));
    let request = ContactRequest::new("Grace", "grace@example.com", "Hi", "Hello").unwrap();
    assert!(mailer.send(&request).await.is_err());
}

#[tokio::test]
async fn successful_submit_clears_form_and_confirms() {
    let server = start_relay_mock().await;
    mount_send_ok(&server).await;

    let config = config_with_relay(format!("{}{SEND_PATH}", server.uri()));
    let mut app = App::new(config).unwrap();
    fill_form(&mut app);

    app.submit_contact();
    assert!(app.form().status().is_sending());

    let status = wait_for_outcome(&mut app).await;
    assert_eq!(status, SubmitStatus::Sent(SUCCESS_MESSAGE.to_string()));
    assert_eq!(app.form().value(ContactField::Name), "");
    assert_eq!(app.form().value(ContactField::Message), "");
}

#[tokio::test]
async fn failed_submit_keeps_form_and_prompts_retry() {
    let server = start_relay_mock().await;
    mount_send_error(&server, 403).await;

    let config = config_with_relay(format!("{}{SEND_PATH}", server.uri()));
    let mut app = App::new(config).unwrap();
    fill_form(&mut app);

    app.submit_contact();
    let status = wait_for_outcome(&mut app).await;
    assert_eq!(status, SubmitStatus::Failed(FAILURE_MESSAGE.to_string()));
    // The draft is kept for a retry.
    assert_eq!(app.form().value(ContactField::Name), "Grace Hopper");
}

#[tokio::test]
async fn double_submit_while_sending_is_a_noop() {
    let server = start_relay_mock().await;
    mount_send_ok(&server).await;

    let config = config_with_relay(format!("{}{SEND_PATH}", server.uri()));
    let mut app = App::new(config).unwrap();
    fill_form(&mut app);

    app.submit_contact();
    app.submit_contact();

    let status = wait_for_outcome(&mut app).await;
    assert_eq!(status, SubmitStatus::Sent(SUCCESS_MESSAGE.to_string()));
}
