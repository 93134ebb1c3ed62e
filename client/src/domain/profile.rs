//! Profile entity fetched from the graph API.

/// A user profile as delivered by the `me` endpoint.
///
/// Every field is optional; the API omits whatever the token's permissions do
/// not cover. A payload is only considered renderable when at least one of
/// `id`/`name` is present — the profile action enforces that, not this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    /// Stable identifier assigned by the remote service.
    pub id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Primary email address.
    pub email: Option<String>,
    /// Current location place name.
    pub location: Option<String>,
    /// Hometown place name.
    pub hometown: Option<String>,
    /// Declared age bracket.
    pub age_range: Option<AgeRange>,
    /// Birthday as the API formats it; displayed verbatim.
    pub birthday: Option<String>,
    /// Self-reported gender.
    pub gender: Option<String>,
    /// URL of the profile picture, when one is available.
    pub picture_url: Option<String>,
}

impl Profile {
    /// Whether the payload carries enough identity to be worth rendering.
    #[must_use]
    pub fn has_identity(&self) -> bool {
        self.id.is_some() || self.name.is_some()
    }
}

/// Declared age bracket; either bound may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeRange {
    /// Inclusive lower bound in years.
    pub min: Option<u32>,
    /// Inclusive upper bound in years.
    pub max: Option<u32>,
}
