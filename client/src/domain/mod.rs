//! Domain primitives and the dashboard action layer.
//!
//! Purpose: Define the strongly typed entities fetched from the social-graph
//! API, the access-token input validation, the classified-error taxonomy, and
//! the ports through which the dashboard service drives the outside world.
//! Keep types immutable and document invariants in each type's Rustdoc.
//!
//! Public surface:
//! - `AccessToken` (alias to `token::AccessToken`) — validated token input.
//! - `Profile` / `Post` / `Photo` — fetched entities, rebuilt on every fetch.
//! - `GraphSourceError` — classified request outcomes with their fixed
//!   user-facing messages.
//! - `Dashboard` — the three user-triggered fetch actions.

pub mod dashboard;
pub mod error;
pub mod feed;
pub mod ports;
pub mod profile;
pub mod token;

pub use self::dashboard::Dashboard;
pub use self::error::GraphSourceError;
pub use self::feed::{ImageVariant, Photo, Post};
pub use self::ports::{GraphSource, PageSurface, Section};
pub use self::profile::{AgeRange, Profile};
pub use self::token::{AccessToken, TokenValidationError};
