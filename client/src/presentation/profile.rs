//! Profile section renderer.

use markup::Fragment;

use crate::domain::profile::{AgeRange, Profile};

/// Render a profile into the replacement content for its section.
///
/// Emits, in fixed order: an optional picture, then ID and Name (both with
/// an "N/A" fallback), then one labelled block per present optional field.
/// Absent fields are omitted entirely rather than rendered empty.
#[must_use]
pub fn render_profile(profile: &Profile) -> String {
    let mut fragment = Fragment::new();
    if let Some(url) = profile.picture_url.as_deref() {
        fragment = fragment.img("gg-profile-image", url, "Profile Picture");
    }

    fragment = labelled_item(fragment, "ID", profile.id.as_deref().unwrap_or("N/A"));
    fragment = labelled_item(fragment, "Name", profile.name.as_deref().unwrap_or("N/A"));

    if let Some(email) = profile.email.as_deref() {
        fragment = labelled_item(fragment, "Email", email);
    }
    if let Some(location) = profile.location.as_deref() {
        fragment = labelled_item(fragment, "Location", location);
    }
    if let Some(hometown) = profile.hometown.as_deref() {
        fragment = labelled_item(fragment, "Hometown", hometown);
    }
    if let Some(age_range) = profile.age_range {
        fragment = labelled_item(fragment, "Age Range", &format_age_range(age_range));
    }
    if let Some(birthday) = profile.birthday.as_deref() {
        fragment = labelled_item(fragment, "Birthday", birthday);
    }
    if let Some(gender) = profile.gender.as_deref() {
        fragment = labelled_item(fragment, "Gender", gender);
    }

    fragment.into_html()
}

fn labelled_item(fragment: Fragment, label: &str, value: &str) -> Fragment {
    fragment.div(
        "gg-profile-item",
        Fragment::new()
            .div_text("gg-profile-label", label)
            .div_text("gg-profile-value", value),
    )
}

fn format_age_range(age_range: AgeRange) -> String {
    match (age_range.min, age_range.max) {
        (Some(min), Some(max)) => format!("{min} - {max} years old"),
        (Some(min), None) => format!("{min}+ years old"),
        (None, _) => "N/A".to_owned(),
    }
}
