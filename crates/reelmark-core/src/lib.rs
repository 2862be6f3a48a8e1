#![deny(unsafe_code)]

//! Reelmark core — menu derivation, click resolution, and import submission.
//!
//! The host surfaces (context-menu rendering, interactive prompt, user
//! notifications) are trait seams in [`surface`]; the [`controller`] wires
//! them to the settings hub and the HTTP submission client. Nothing here
//! talks to a browser directly — any host that can render a two-level menu
//! and deliver click events can embed this crate.

use std::future::Future;
use std::pin::Pin;

/// A type-erased, `Send`-safe, boxed future — the standard return type for async
/// trait methods that require dynamic dispatch (`dyn Trait`).
///
/// Native `async fn` in traits produces opaque return types that are **not**
/// object-safe. Traits consumed via `Box<dyn Trait>` or `&dyn Trait` must
/// return a concrete `Pin<Box<dyn Future>>` instead. This alias keeps those
/// signatures readable.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// HTTP submission client for the cataloging service.
pub mod client;
/// Import controller and settings hub.
pub mod controller;
/// Context-menu model — tree derivation and click resolution.
pub mod menu;
/// User-facing notification model.
pub mod notify;
/// Host-surface seams (menu rendering, prompt, notifications).
pub mod surface;

pub use client::{CatalogClient, SubmitError};
pub use controller::{ImportController, MenuClick, SettingsHub, SettingsSnapshot};
pub use menu::{ClickAction, MenuNode};
pub use notify::Notification;
pub use surface::{MenuSurface, Notifier, PromptSurface};
