//! Dashboard action layer.
//!
//! One service with the three user-triggered actions. Each action validates
//! the raw token, toggles the section's busy indicator around a single
//! awaited request, and hands a successful payload to the matching renderer.
//! Failures surface on the banner and leave every other piece of page state
//! untouched.

use std::sync::Arc;

use crate::domain::error::GraphSourceError;
use crate::domain::ports::{GraphSource, PageSurface, Section};
use crate::domain::profile::Profile;
use crate::domain::token::AccessToken;
use crate::presentation::{render_photos, render_posts, render_profile};

const NO_PROFILE_DATA_MESSAGE: &str = "No profile data found";

/// Dashboard service implementing the user-triggered fetch actions.
///
/// Actions are independent: racing invocations own disjoint sections, and a
/// double-trigger on the same section resolves as last-write-wins because
/// content replacement is wholesale.
#[derive(Clone)]
pub struct Dashboard<S, P> {
    source: Arc<S>,
    page: Arc<P>,
}

impl<S, P> Dashboard<S, P> {
    /// Create a dashboard over a graph source and a page surface.
    pub fn new(source: Arc<S>, page: Arc<P>) -> Self {
        Self { source, page }
    }
}

impl<S, P> Dashboard<S, P>
where
    S: GraphSource,
    P: PageSurface,
{
    /// Fetch the token owner's profile and render it into the profile
    /// section.
    ///
    /// A payload carrying neither `id` nor `name` is reported as missing
    /// profile data and nothing is rendered.
    pub async fn fetch_profile(&self, raw_token: &str) {
        let Some(token) = self.validated_token(raw_token) else {
            return;
        };
        self.page.set_busy(Section::Profile, true);
        self.page.clear_error();
        let result = self.source.fetch_profile(&token).await;
        self.page.set_busy(Section::Profile, false);
        match result {
            Ok(profile) => self.show_profile(&profile),
            Err(error) => self.report_failure(Section::Profile, &error),
        }
    }

    /// Fetch the most recent posts and render them into the posts section.
    ///
    /// An empty result set renders the fixed empty-state placeholder.
    pub async fn fetch_posts(&self, raw_token: &str) {
        let Some(token) = self.validated_token(raw_token) else {
            return;
        };
        self.page.set_busy(Section::Posts, true);
        self.page.clear_error();
        let result = self.source.fetch_posts(&token).await;
        self.page.set_busy(Section::Posts, false);
        match result {
            Ok(posts) => {
                self.page
                    .replace_content(Section::Posts, &render_posts(&posts));
                self.page.reveal_section(Section::Posts);
            }
            Err(error) => self.report_failure(Section::Posts, &error),
        }
    }

    /// Fetch the most recent photos and render them into the photos section.
    ///
    /// An empty result set renders the fixed empty-state placeholder; photos
    /// without a usable image source contribute no card.
    pub async fn fetch_photos(&self, raw_token: &str) {
        let Some(token) = self.validated_token(raw_token) else {
            return;
        };
        self.page.set_busy(Section::Photos, true);
        self.page.clear_error();
        let result = self.source.fetch_photos(&token).await;
        self.page.set_busy(Section::Photos, false);
        match result {
            Ok(photos) => {
                self.page
                    .replace_content(Section::Photos, &render_photos(&photos));
                self.page.reveal_section(Section::Photos);
            }
            Err(error) => self.report_failure(Section::Photos, &error),
        }
    }

    fn validated_token(&self, raw_token: &str) -> Option<AccessToken> {
        match AccessToken::new(raw_token) {
            Ok(token) => Some(token),
            Err(error) => {
                tracing::debug!(%error, "token validation failed");
                self.page.show_error(&error.to_string());
                None
            }
        }
    }

    fn show_profile(&self, profile: &Profile) {
        if !profile.has_identity() {
            tracing::debug!("profile payload carries neither id nor name");
            self.page.show_error(NO_PROFILE_DATA_MESSAGE);
            return;
        }
        self.page
            .replace_content(Section::Profile, &render_profile(profile));
        self.page.reveal_section(Section::Profile);
    }

    fn report_failure(&self, section: Section, error: &GraphSourceError) {
        tracing::warn!(%section, ?error, "graph request failed");
        self.page.show_error(&error.to_string());
    }
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
