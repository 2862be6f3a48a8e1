//! Host-surface seams.
//!
//! The embedding host (browser extension runtime, TUI, CLI) provides these
//! three collaborators. All are object-safe so the controller can hold them
//! as `Arc<dyn _>`.

use crate::BoxFuture;
use crate::menu::MenuNode;
use crate::notify::Notification;

/// The menu-rendering collaborator.
///
/// The controller only ever issues `remove_all` followed by a full batch of
/// `create` calls from a single logical flow, so implementations never see a
/// partial mix of old and new nodes.
pub trait MenuSurface: Send + Sync {
    /// Remove every node previously created by this crate.
    fn remove_all(&self);

    /// Create one node. Parents are always created before their children.
    fn create(&self, node: &MenuNode);
}

/// The interactive prompt collaborator.
pub trait PromptSurface: Send + Sync {
    /// Ask the user for free-text tags in the context of `page_url`.
    ///
    /// Returns `None` when no response could be obtained. There is no
    /// timeout; a surface that never resolves stalls only the one
    /// interaction that is waiting on it.
    fn prompt(&self, page_url: &str) -> BoxFuture<'_, Option<String>>;
}

/// The notification collaborator.
pub trait Notifier: Send + Sync {
    /// Show one notification to the user.
    fn notify(&self, notification: &Notification);
}
