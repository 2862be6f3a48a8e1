//! Fake host surfaces for controller and flow tests.
//!
//! Each fake records what it was asked to do behind an `Arc<Mutex<_>>`, so a
//! test can hand a clone to the controller and inspect the recording after
//! the flow completes.

use std::sync::{Arc, Mutex};

use reelmark_core::menu::MenuNode;
use reelmark_core::notify::Notification;
use reelmark_core::surface::{MenuSurface, Notifier, PromptSurface};
use reelmark_core::BoxFuture;

/// A menu surface that records `clear` and `create:<id>` events in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingMenu {
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, in order.
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl MenuSurface for RecordingMenu {
    fn remove_all(&self) {
        self.events.lock().unwrap().push("clear".to_string());
    }

    fn create(&self, node: &MenuNode) {
        self.events.lock().unwrap().push(format!("create:{}", node.id));
    }
}

/// A prompt surface that always returns the same canned response.
#[derive(Debug, Clone)]
pub struct CannedPrompt {
    response: Option<String>,
}

impl CannedPrompt {
    /// A prompt that answers with `response`.
    pub fn with_response(response: &str) -> Self {
        Self {
            response: Some(response.to_string()),
        }
    }

    /// A prompt that never obtains a response.
    pub fn none() -> Self {
        Self { response: None }
    }
}

impl PromptSurface for CannedPrompt {
    fn prompt(&self, _page_url: &str) -> BoxFuture<'_, Option<String>> {
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

/// A notifier that records every notification it is handed.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded notifications, in order.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.notifications.lock().unwrap().push(notification.clone());
    }
}
