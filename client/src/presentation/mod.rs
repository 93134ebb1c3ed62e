//! Pure renderers from domain data to markup fragments.
//!
//! Each renderer produces the full replacement content for its section; the
//! page surface swaps it in wholesale and reveals the section. Renderers are
//! synchronous and side-effect free so they are testable without a page.

pub mod dates;
mod photos;
mod posts;
mod profile;

pub use self::dates::display_date;
pub use self::photos::render_photos;
pub use self::posts::render_posts;
pub use self::profile::render_profile;

use markup::Fragment;

/// Fixed empty-state block shown when a list endpoint returns no items.
fn empty_state(text: &str) -> String {
    Fragment::new()
        .div(
            "gg-empty-state",
            Fragment::new()
                .icon("inbox")
                .div_text("gg-empty-state-text", text),
        )
        .into_html()
}
