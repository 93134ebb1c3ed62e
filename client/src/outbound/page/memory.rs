//! In-memory page surface.
//!
//! Models the host-page contract: three sections with a togglable wrapper
//! and a replaceable content slot, per-section busy flags, an error banner
//! with a timed dismiss, and a token input whose value is trimmed in place.
//! One mutex guards the whole page state and every write is wholesale, so
//! racing actions resolve as last-write-wins with no torn state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use markup::Fragment;

use crate::domain::ports::{PageSurface, Section};

/// How long the error banner stays up before dismissing itself.
pub const ERROR_BANNER_DISMISS_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Default)]
struct SectionState {
    visible: bool,
    busy: bool,
    content: String,
}

#[derive(Debug, Default)]
struct PageState {
    profile: SectionState,
    posts: SectionState,
    photos: SectionState,
    banner: Option<String>,
    // Monotonic banner counter; a pending dismiss only fires if no newer
    // banner has been shown since it was scheduled.
    banner_generation: u64,
    token_input: String,
}

impl PageState {
    fn section(&self, section: Section) -> &SectionState {
        match section {
            Section::Profile => &self.profile,
            Section::Posts => &self.posts,
            Section::Photos => &self.photos,
        }
    }

    fn section_mut(&mut self, section: Section) -> &mut SectionState {
        match section {
            Section::Profile => &mut self.profile,
            Section::Posts => &mut self.posts,
            Section::Photos => &mut self.photos,
        }
    }
}

/// In-memory implementation of the `PageSurface` port.
///
/// Cloning shares the underlying page state, mirroring how every script on a
/// page sees the same document.
#[derive(Clone, Default)]
pub struct InMemoryPage {
    state: Arc<Mutex<PageState>>,
}

impl InMemoryPage {
    /// Create a page with all sections hidden and nothing rendered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set the token input's value; it is trimmed in place so surrounding
    /// whitespace never persists in the field.
    pub fn set_token_input(&self, raw: &str) {
        self.lock().token_input = raw.trim().to_owned();
    }

    /// Current value of the token input field.
    #[must_use]
    pub fn token_input(&self) -> String {
        self.lock().token_input.clone()
    }

    /// Message currently shown on the error banner, if any.
    #[must_use]
    pub fn banner_message(&self) -> Option<String> {
        self.lock().banner.clone()
    }

    /// Whether the section's trigger is marked busy.
    #[must_use]
    pub fn is_busy(&self, section: Section) -> bool {
        self.lock().section(section).busy
    }

    /// Whether the section's wrapper is visible.
    #[must_use]
    pub fn is_visible(&self, section: Section) -> bool {
        self.lock().section(section).visible
    }

    /// Current content of the section's slot.
    #[must_use]
    pub fn content(&self, section: Section) -> String {
        self.lock().section(section).content.clone()
    }

    /// Assemble the whole page as an HTML document.
    ///
    /// Section content was produced by the renderers and is inserted
    /// verbatim; the banner message is escaped here because classified API
    /// errors surface server-supplied text.
    #[must_use]
    pub fn to_document(&self) -> String {
        let state = self.lock();
        let mut body = Fragment::new();
        if let Some(message) = state.banner.as_deref() {
            body = body.div_with_id(
                "errorMessage",
                "gg-error-banner",
                Fragment::new().icon("exclamation-triangle").text(message),
            );
        }
        for section in [Section::Profile, Section::Posts, Section::Photos] {
            let region = state.section(section);
            let wrapper_class = if region.visible {
                "gg-section"
            } else {
                "gg-section gg-section-hidden"
            };
            body = body.div_with_id(
                section.wrapper_id(),
                wrapper_class,
                Fragment::new().div_with_id(
                    section.content_id(),
                    "gg-section-content",
                    Fragment::new().raw(&region.content),
                ),
            );
        }
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Graphgaze</title></head>\n<body>\n{}\n</body>\n</html>\n",
            body.into_html(),
        )
    }
}

impl PageSurface for InMemoryPage {
    fn set_busy(&self, section: Section, busy: bool) {
        self.lock().section_mut(section).busy = busy;
    }

    fn show_error(&self, message: &str) {
        let generation = {
            let mut state = self.lock();
            state.banner_generation += 1;
            state.banner = Some(message.to_owned());
            state.banner_generation
        };
        tracing::debug!(message, "error banner shown");
        // Timed dismiss needs a runtime; without one the banner simply stays
        // until the next action clears it.
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let state = Arc::clone(&self.state);
            handle.spawn(async move {
                tokio::time::sleep(ERROR_BANNER_DISMISS_AFTER).await;
                let mut page = state.lock().unwrap_or_else(PoisonError::into_inner);
                if page.banner_generation == generation {
                    page.banner = None;
                }
            });
        }
    }

    fn clear_error(&self) {
        self.lock().banner = None;
    }

    fn replace_content(&self, section: Section, markup: &str) {
        let mut state = self.lock();
        let region = state.section_mut(section);
        region.content.clear();
        region.content.push_str(markup);
    }

    fn reveal_section(&self, section: Section) {
        self.lock().section_mut(section).visible = true;
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
