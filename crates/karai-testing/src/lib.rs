//! Test utilities for the Karai workspace.
//!
//! Provides `MockBackend` — an in-process stand-in for the remote backend
//! API speaking its real envelope shapes — plus domain fixture constructors.
//! Import in `#[cfg(test)]` blocks and `tests/` targets only; never in
//! production code.

pub mod backend;
pub mod fixture;

pub use backend::{MockBackend, MockBackendHandle};
