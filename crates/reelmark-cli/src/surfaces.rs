//! Terminal implementations of the core host-surface seams.

use std::io::{self, BufRead, Write};

use reelmark_core::BoxFuture;
use reelmark_core::menu::MenuNode;
use reelmark_core::notify::Notification;
use reelmark_core::surface::{MenuSurface, Notifier, PromptSurface};

/// A menu surface that renders nothing.
///
/// One-shot CLI imports never display a menu; the controller still requires
/// the seam.
pub struct SilentMenu;

impl MenuSurface for SilentMenu {
    fn remove_all(&self) {}
    fn create(&self, _node: &MenuNode) {}
}

/// Prompts for tags by reading one line from stdin.
pub struct StdinPrompt;

impl PromptSurface for StdinPrompt {
    fn prompt(&self, page_url: &str) -> BoxFuture<'_, Option<String>> {
        let page_url = page_url.to_string();
        Box::pin(async move {
            // Blocking terminal I/O stays off the async runtime threads.
            tokio::task::spawn_blocking(move || {
                eprint!("Tags for {page_url} (comma-separated): ");
                let _ = io::stderr().flush();

                let mut line = String::new();
                match io::stdin().lock().read_line(&mut line) {
                    Ok(0) => None,
                    Ok(_) => Some(line.trim_end_matches('\n').to_string()),
                    Err(_) => None,
                }
            })
            .await
            .ok()
            .flatten()
        })
    }
}

/// Answers the prompt with a fixed response (used for `--tags`).
pub struct FixedPrompt {
    response: String,
}

impl FixedPrompt {
    pub fn new(response: String) -> Self {
        Self { response }
    }
}

impl PromptSurface for FixedPrompt {
    fn prompt(&self, _page_url: &str) -> BoxFuture<'_, Option<String>> {
        let response = self.response.clone();
        Box::pin(async move { Some(response) })
    }
}

/// Prints notifications to the terminal.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: &Notification) {
        if notification.is_success() {
            println!("{} ({})", notification.message, notification.open_url);
        } else {
            eprintln!("{} ({})", notification.message, notification.open_url);
        }
    }
}
