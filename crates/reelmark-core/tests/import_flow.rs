//! End-to-end flow tests: click → (prompt) → submit → notify, against a
//! local axum listener standing in for the cataloging service.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use pretty_assertions::assert_eq;
use tokio::net::TcpListener;

use reelmark_core::menu::{self, MENU_ASK, MENU_ROOT};
use reelmark_core::{ImportController, MenuClick, SettingsHub};
use reelmark_test_utils::config::TestConfigBuilder;
use reelmark_test_utils::fakes::{CannedPrompt, RecordingMenu, RecordingNotifier};
use reelmark_test_utils::tracing_setup::init_test_tracing;

/// Bodies received by the fixture service, in order.
#[derive(Clone, Default)]
struct Received {
    bodies: Arc<Mutex<Vec<String>>>,
}

impl Received {
    fn bodies(&self) -> Vec<String> {
        self.bodies.lock().unwrap().clone()
    }
}

async fn accept(State(state): State<Received>, body: String) -> StatusCode {
    state.bodies.lock().unwrap().push(body);
    StatusCode::OK
}

async fn reject() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "importer offline")
}

/// Spawn a one-route service on an ephemeral port; returns its URL.
async fn spawn_service(accepting: bool) -> (String, Received) {
    let received = Received::default();
    let app = if accepting {
        Router::new().route("/", post(accept)).with_state(received.clone())
    } else {
        Router::new().route("/", post(reject))
    };

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/"), received)
}

fn controller_for(
    hub: &SettingsHub,
    prompt: CannedPrompt,
) -> (ImportController, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let controller = ImportController::new(
        hub,
        Arc::new(RecordingMenu::new()),
        Arc::new(prompt),
        Arc::new(notifier.clone()),
    );
    (controller, notifier)
}

#[tokio::test]
async fn group_click_submits_exact_form_body() {
    init_test_tracing();
    let (service_url, received) = spawn_service(true).await;

    let hub = SettingsHub::new(
        TestConfigBuilder::new()
            .service_url(&service_url)
            .group("pair", &["a", "b"])
            .build(),
    );
    let group_id = {
        let rx = hub.subscribe();
        let snapshot = rx.borrow();
        snapshot.groups[0].id
    };
    let (controller, notifier) = controller_for(&hub, CannedPrompt::none());

    controller
        .handle_click(&MenuClick {
            node_id: menu::group_menu_id(group_id),
            link_url: Some("http://x/y?z=1".to_string()),
            page_url: "http://example.com/".to_string(),
        })
        .await;

    assert_eq!(
        received.bodies(),
        vec!["url=http%3A%2F%2Fx%2Fy%3Fz%3D1&tags=a%2Cb".to_string()]
    );

    let notifications = notifier.notifications();
    assert_eq!(notifications.len(), 1);
    assert!(notifications[0].is_success());
    assert_eq!(notifications[0].open_url, service_url);
}

#[tokio::test]
async fn prompted_tags_are_trimmed_and_submitted() {
    init_test_tracing();
    let (service_url, received) = spawn_service(true).await;

    let hub = SettingsHub::new(TestConfigBuilder::new().service_url(&service_url).build());
    let (controller, notifier) = controller_for(&hub, CannedPrompt::with_response(" a, b "));

    controller
        .handle_click(&MenuClick {
            node_id: MENU_ASK.to_string(),
            link_url: None,
            page_url: "http://example.com/watch".to_string(),
        })
        .await;

    assert_eq!(
        received.bodies(),
        vec!["url=http%3A%2F%2Fexample.com%2Fwatch&tags=a%2Cb".to_string()]
    );
    assert!(notifier.notifications()[0].is_success());
}

#[tokio::test]
async fn non_2xx_response_notifies_failure_only() {
    init_test_tracing();
    let (service_url, _received) = spawn_service(false).await;

    let hub = SettingsHub::new(TestConfigBuilder::new().service_url(&service_url).build());
    let (controller, notifier) = controller_for(&hub, CannedPrompt::none());

    controller
        .handle_click(&MenuClick {
            node_id: MENU_ROOT.to_string(),
            link_url: Some("http://example.com/v".to_string()),
            page_url: "http://example.com/".to_string(),
        })
        .await;

    let notifications = notifier.notifications();
    assert_eq!(notifications.len(), 1);
    assert!(!notifications[0].is_success());
    assert!(notifications[0].message.contains("500"));
    assert!(notifications[0].message.contains("importer offline"));
}

#[tokio::test]
async fn service_url_is_read_fresh_per_submission() {
    init_test_tracing();
    let (service_url, received) = spawn_service(true).await;

    // The controller is created while the settings still point at a dead
    // endpoint; the replacement must be honored by the next click.
    let hub = SettingsHub::new(
        TestConfigBuilder::new()
            .service_url("http://127.0.0.1:1/")
            .build(),
    );
    let (controller, notifier) = controller_for(&hub, CannedPrompt::none());

    hub.replace(TestConfigBuilder::new().service_url(&service_url).build());

    controller
        .handle_click(&MenuClick {
            node_id: MENU_ROOT.to_string(),
            link_url: None,
            page_url: "http://example.com/".to_string(),
        })
        .await;

    assert_eq!(received.bodies().len(), 1);
    assert!(notifier.notifications()[0].is_success());
}
