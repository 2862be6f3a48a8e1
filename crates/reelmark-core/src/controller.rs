//! Import controller — the single owner of the current configuration,
//! driving menu sync and the click-to-submission flow.
//!
//! Settings changes flow through the [`SettingsHub`]: `replace` is the
//! explicit replace-and-notify step, and every subscriber always sees the
//! latest snapshot. Group ids are assigned once per replacement, when the
//! snapshot is built, so the menu tree and click resolution always agree on
//! them.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use reelmark_config::{AppConfig, TagGroupList};

use crate::client::CatalogClient;
use crate::menu::{self, ClickAction};
use crate::notify::Notification;
use crate::surface::{MenuSurface, Notifier, PromptSurface};

/// Immutable view of the resolved settings, shared through the hub.
#[derive(Debug, Clone)]
pub struct SettingsSnapshot {
    /// Import endpoint of the cataloging service.
    pub service_url: String,

    /// Normalized tag groups, ids assigned at snapshot creation.
    pub groups: TagGroupList,
}

impl From<AppConfig> for SettingsSnapshot {
    fn from(config: AppConfig) -> Self {
        Self {
            groups: config.tag_groups(),
            service_url: config.service.url,
        }
    }
}

/// Single owner of the current settings.
///
/// Replacing the settings notifies every subscriber; there is no other way
/// to mutate them, and no subscriber ever caches a snapshot across clicks.
pub struct SettingsHub {
    tx: watch::Sender<Arc<SettingsSnapshot>>,
}

impl SettingsHub {
    pub fn new(initial: AppConfig) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(SettingsSnapshot::from(initial)));
        Self { tx }
    }

    /// Replace the current settings and notify subscribers.
    pub fn replace(&self, config: AppConfig) {
        let snapshot = SettingsSnapshot::from(config);
        info!(groups = snapshot.groups.len(), "Settings replaced");
        let _ = self.tx.send(Arc::new(snapshot));
    }

    /// Subscribe to settings changes. `borrow` on the receiver is always
    /// the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Arc<SettingsSnapshot>> {
        self.tx.subscribe()
    }
}

/// A click event delivered by the menu-rendering surface.
#[derive(Debug, Clone)]
pub struct MenuClick {
    /// Id of the clicked node.
    pub node_id: String,

    /// URL of the link under the cursor, when the click was on a link.
    pub link_url: Option<String>,

    /// URL of the page the menu was opened on.
    pub page_url: String,
}

impl MenuClick {
    /// The URL to import: the link target when present, the page otherwise.
    pub fn target_url(&self) -> &str {
        self.link_url.as_deref().unwrap_or(&self.page_url)
    }
}

/// Wires the settings hub, the host surfaces, and the submission client.
pub struct ImportController {
    settings: watch::Receiver<Arc<SettingsSnapshot>>,
    menu: Arc<dyn MenuSurface>,
    prompt: Arc<dyn PromptSurface>,
    notifier: Arc<dyn Notifier>,
    client: CatalogClient,
}

impl ImportController {
    pub fn new(
        hub: &SettingsHub,
        menu: Arc<dyn MenuSurface>,
        prompt: Arc<dyn PromptSurface>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            settings: hub.subscribe(),
            menu,
            prompt,
            notifier,
            client: CatalogClient::new(),
        }
    }

    /// Rebuild the menu from the current settings: remove everything, then
    /// create the new tree in order. Issued as one batch from one flow, so
    /// the surface never observes a mix of old and new nodes.
    pub fn sync_menu(&self) {
        let snapshot = self.current();
        let nodes = menu::build_menu(&snapshot.groups);

        self.menu.remove_all();
        for node in &nodes {
            self.menu.create(node);
        }
        info!(nodes = nodes.len(), "Menu synced");
    }

    /// Run the change loop: sync once at startup, then once per settings
    /// replacement. Consuming `self` is the duplicate-registration guard —
    /// a second change listener cannot be registered for this controller.
    pub async fn run(mut self) {
        self.sync_menu();
        while self.settings.changed().await.is_ok() {
            self.sync_menu();
        }
        info!("Settings hub dropped, controller stopping");
    }

    /// Handle one click end to end: resolve the action against the current
    /// group list, obtain tags (awaiting the prompt when asked), read the
    /// service URL fresh, submit, and report the outcome.
    ///
    /// Each click is independent; nothing here is fatal.
    pub async fn handle_click(&self, click: &MenuClick) {
        let action = menu::resolve_click(&click.node_id, &self.current().groups);

        let tags = match action {
            ClickAction::Ignore => {
                warn!(node_id = %click.node_id, "Ignoring unrecognized menu click");
                return;
            }
            ClickAction::Submit(tags) => tags,
            ClickAction::AskTags => match self.prompt.prompt(&click.page_url).await {
                Some(response) => split_prompt_tags(&response),
                // No response from the prompt surface means "no tags".
                None => Vec::new(),
            },
        };

        // The prompt may have taken arbitrarily long; only now read the
        // service URL, so a settings change that happened meanwhile is
        // honored.
        let service_url = self.current().service_url.clone();
        let target_url = click.target_url();

        match self.client.submit(&service_url, target_url, &tags).await {
            Ok(()) => {
                info!(target = %target_url, "Import queued");
                self.notifier.notify(&Notification::queued(&service_url));
            }
            Err(e) => {
                warn!(target = %target_url, error = %e, "Import submission failed");
                self.notifier
                    .notify(&Notification::failed(&service_url, &e.to_string()));
            }
        }
    }

    fn current(&self) -> Arc<SettingsSnapshot> {
        Arc::clone(&self.settings.borrow())
    }
}

/// Split a free-text prompt response into tags: comma-separated, each entry
/// trimmed, order preserved.
pub fn split_prompt_tags(response: &str) -> Vec<String> {
    response.split(',').map(|t| t.trim().to_string()).collect()
}

// Tests for this module live in `tests/controller.rs`: they use the fake
// surfaces from `reelmark-test-utils`, whose trait impls only match the
// non-test build of this library (dev-dependency cycle), so they cannot
// compile as unit tests and run as integration tests instead.
