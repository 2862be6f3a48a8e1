//! User-facing notification model.
//!
//! One notification per submission: queued on success, failed (with the
//! underlying error text) otherwise. Clicking a notification opens the
//! configured service URL, so `open_url` always carries it.

/// Outcome class of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// A notification for the host's notification surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub outcome: Outcome,
    pub title: String,
    pub message: String,

    /// Opened in a new tab when the notification is clicked.
    pub open_url: String,
}

const TITLE: &str = "Reelmark";

impl Notification {
    /// The import was accepted by the cataloging service.
    pub fn queued(service_url: &str) -> Self {
        Self {
            outcome: Outcome::Success,
            title: TITLE.to_string(),
            message: "Import queued successfully!".to_string(),
            open_url: service_url.to_string(),
        }
    }

    /// The submission failed; `error` is shown to the user.
    pub fn failed(service_url: &str, error: &str) -> Self {
        Self {
            outcome: Outcome::Failure,
            title: TITLE.to_string(),
            message: format!("Error queueing import: {error}"),
            open_url: service_url.to_string(),
        }
    }

    /// Whether this notification reports a success.
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}
