//! Graph API outbound adapter.
//!
//! This module provides the reqwest-backed implementation of the
//! `GraphSource` port.

mod dto;
mod http_source;

pub use http_source::{
    DEFAULT_API_VERSION, DEFAULT_BASE_URL, GraphApiConfig, GraphHttpSource, GraphSourceBuildError,
};
