//! Photos section renderer.

use markup::Fragment;

use super::dates::display_date;
use super::empty_state;
use crate::domain::feed::Photo;

/// Render photos into the replacement content for their section.
///
/// One card per photo with a usable first image source, in input order.
/// Photos without a usable source are dropped silently — no card, no
/// placeholder, no count adjustment. An empty input list renders the fixed
/// empty-state placeholder.
#[must_use]
pub fn render_photos(photos: &[Photo]) -> String {
    if photos.is_empty() {
        return empty_state("No photos found");
    }
    photos
        .iter()
        .filter_map(|photo| photo.primary_source().map(|source| (photo, source)))
        .fold(Fragment::new(), |fragment, (photo, source)| {
            fragment.div("gg-photo-card", photo_card(photo, source))
        })
        .into_html()
}

fn photo_card(photo: &Photo, source: &str) -> Fragment {
    Fragment::new().img("gg-photo-image", source, "Photo").div(
        "gg-photo-info",
        Fragment::new().div(
            "gg-photo-date",
            Fragment::new()
                .icon("calendar")
                .text(&display_date(&photo.created_time)),
        ),
    )
}
