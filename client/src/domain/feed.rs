//! Post and photo entities fetched from the graph API.

/// A single feed post from the `me/posts` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Post {
    /// Stable identifier assigned by the remote service.
    pub id: String,
    /// User-authored message text.
    pub message: Option<String>,
    /// Generated story text ("X updated their profile picture").
    pub story: Option<String>,
    /// Creation timestamp as the API formats it.
    pub created_time: String,
}

impl Post {
    /// Text to display for this post: the message when present, else the
    /// story. `None` means the renderer shows its fixed placeholder.
    #[must_use]
    pub fn display_text(&self) -> Option<&str> {
        self.message.as_deref().or(self.story.as_deref())
    }
}

/// A single photo from the `me/photos` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Photo {
    /// Stable identifier assigned by the remote service.
    pub id: String,
    /// Creation timestamp as the API formats it.
    pub created_time: String,
    /// Rendered variants, largest first as delivered by the API.
    pub images: Vec<ImageVariant>,
}

impl Photo {
    /// Source URL of the first usable image variant, if any.
    ///
    /// Photos without a usable source are silently dropped from display.
    #[must_use]
    pub fn primary_source(&self) -> Option<&str> {
        self.images
            .first()
            .map(|variant| variant.source.as_str())
            .filter(|source| !source.is_empty())
    }
}

/// One rendered size of a photo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageVariant {
    /// Direct URL of this variant.
    pub source: String,
}
