//! Posts section renderer.

use markup::Fragment;

use super::dates::display_date;
use super::empty_state;
use crate::domain::feed::Post;

const PLACEHOLDER_TEXT: &str = "No message content";

/// Render posts into the replacement content for their section.
///
/// One card per post in input order; an empty list renders the fixed
/// empty-state placeholder instead.
#[must_use]
pub fn render_posts(posts: &[Post]) -> String {
    if posts.is_empty() {
        return empty_state("No posts found");
    }
    posts
        .iter()
        .fold(Fragment::new(), |fragment, post| {
            fragment.div("gg-post-card", post_card(post))
        })
        .into_html()
}

fn post_card(post: &Post) -> Fragment {
    let header = Fragment::new().div(
        "gg-post-header",
        Fragment::new().div(
            "gg-post-date",
            Fragment::new()
                .icon("calendar")
                .text(&display_date(&post.created_time)),
        ),
    );
    match post.display_text() {
        Some(text) => header.div_text("gg-post-message", text),
        None => header.div_text("gg-post-message gg-post-placeholder", PLACEHOLDER_TEXT),
    }
}
