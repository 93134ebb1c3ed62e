//! Domain ports defining the edges of the client.
//!
//! Ports describe how the dashboard expects to interact with driven adapters:
//! the remote graph API on one side and the host page on the other. Each
//! trait exposes strongly typed outcomes so adapters map their failures into
//! predictable variants, and so the action layer is exercisable against mocks
//! without a network or a real page.

use std::fmt;

use async_trait::async_trait;

use super::error::GraphSourceError;
use super::feed::{Photo, Post};
use super::profile::Profile;
use super::token::AccessToken;

/// The three page sections a user can populate.
///
/// Each section owns its trigger's busy indicator and its content region;
/// concurrent actions therefore never write to shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Profile details region.
    Profile,
    /// Posts feed region.
    Posts,
    /// Photos grid region.
    Photos,
}

impl Section {
    /// Element identifier of the section's togglable wrapper.
    #[must_use]
    pub fn wrapper_id(self) -> &'static str {
        match self {
            Self::Profile => "profileSection",
            Self::Posts => "postsSection",
            Self::Photos => "photosSection",
        }
    }

    /// Element identifier of the section's replaceable content slot.
    #[must_use]
    pub fn content_id(self) -> &'static str {
        match self {
            Self::Profile => "profileContent",
            Self::Posts => "postsContent",
            Self::Photos => "photosContent",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Profile => "profile",
            Self::Posts => "posts",
            Self::Photos => "photos",
        };
        f.write_str(name)
    }
}

/// Port for fetching resources from the remote social-graph API.
///
/// One call maps to exactly one network request; implementations perform no
/// retries and classify every outcome into [`GraphSourceError`]. Endpoint
/// paths, field lists, and page limits are transport details owned by the
/// adapter.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GraphSource: Send + Sync {
    /// Fetch the token owner's profile.
    async fn fetch_profile(&self, token: &AccessToken) -> Result<Profile, GraphSourceError>;

    /// Fetch the token owner's most recent posts (fixed page size).
    async fn fetch_posts(&self, token: &AccessToken) -> Result<Vec<Post>, GraphSourceError>;

    /// Fetch the token owner's most recent photos (fixed page size).
    async fn fetch_photos(&self, token: &AccessToken) -> Result<Vec<Photo>, GraphSourceError>;
}

/// Port for mutating the host page.
///
/// Operations are keyed by [`Section`] so racing actions touch disjoint
/// state. Content replacement is wholesale — a region is never patched
/// incrementally — and revealing an already-visible section is a no-op.
#[cfg_attr(test, mockall::automock)]
pub trait PageSurface: Send + Sync {
    /// Toggle the busy indicator of the section's trigger.
    fn set_busy(&self, section: Section, busy: bool);

    /// Show the error banner with the given message.
    fn show_error(&self, message: &str);

    /// Clear the error banner, if shown.
    fn clear_error(&self);

    /// Replace the entire content of the section's slot.
    fn replace_content(&self, section: Section, markup: &str);

    /// Make the section visible; idempotent.
    fn reveal_section(&self, section: Section);
}
