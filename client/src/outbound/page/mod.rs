//! Page surface outbound adapters.
//!
//! This module provides the in-memory implementation of the `PageSurface`
//! port, modelling the host-page contract without a real page.

mod memory;

pub use memory::{ERROR_BANNER_DISMISS_AFTER, InMemoryPage};
