//! Graphgaze client library modules.

pub mod domain;
pub mod outbound;
pub mod presentation;
