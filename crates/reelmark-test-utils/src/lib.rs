#![deny(unsafe_code)]

//! Shared test utilities for the Reelmark workspace.
//!
//! Provides reusable fixtures, config builders, fake host surfaces, and
//! tracing helpers so that individual crate tests stay concise and
//! consistent.
//!
//! Add this crate as a `[dev-dependency]` in any workspace member:
//!
//! ```toml
//! [dev-dependencies]
//! reelmark-test-utils = { workspace = true }
//! ```

pub mod config;
pub mod fakes;
pub mod tracing_setup;
