//! HTML escaping and fragment-building primitives.
//!
//! Renderers assemble page regions from remote-origin data, so every piece of
//! text that crosses into markup must pass through the escaping rules in this
//! crate. The [`Fragment`] builder is the only place raw tags are
//! concatenated; callers describe blocks, images, and icons and never touch
//! angle brackets themselves.
//!
//! Escaping distinguishes two sinks:
//! - element text, where `&`, `<`, and `>` must be neutralised;
//! - quoted attribute values, where `"` and `'` must be neutralised as well.
//!
//! Structural class names and label text authored by this workspace are
//! emitted verbatim; they never originate from a remote payload.

/// Escape text for insertion as HTML element content.
///
/// # Examples
/// ```
/// assert_eq!(markup::escape_text("Hi <b> & bye"), "Hi &lt;b&gt; &amp; bye");
/// ```
#[must_use]
pub fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text for insertion into a quoted attribute value.
///
/// A superset of [`escape_text`]: quote characters are neutralised so a
/// remote-origin URL cannot terminate the attribute it is embedded in.
///
/// # Examples
/// ```
/// assert_eq!(
///     markup::escape_attr("https://example.test/a?b=1&c=\"2\""),
///     "https://example.test/a?b=1&amp;c=&quot;2&quot;",
/// );
/// ```
#[must_use]
pub fn escape_attr(raw: &str) -> String {
    escape_text(raw).replace('"', "&quot;").replace('\'', "&#39;")
}

/// Growable HTML fragment.
///
/// Builder methods consume and return the fragment so blocks compose by
/// chaining. The accumulated markup is retrieved with [`Fragment::into_html`];
/// an empty fragment yields the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct Fragment {
    html: String,
}

impl Fragment {
    /// Create an empty fragment.
    pub const fn new() -> Self {
        Self {
            html: String::new(),
        }
    }

    /// Whether any markup has been emitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }

    /// Borrow the accumulated markup.
    #[must_use]
    pub fn as_html(&self) -> &str {
        self.html.as_str()
    }

    /// Consume the fragment, yielding the accumulated markup.
    #[must_use]
    pub fn into_html(self) -> String {
        self.html
    }

    /// Append a `<div>` with the given class wrapping a nested fragment.
    pub fn div(mut self, class: &str, inner: Self) -> Self {
        self.html.push_str("<div class=\"");
        self.html.push_str(class);
        self.html.push_str("\">");
        self.html.push_str(&inner.into_html());
        self.html.push_str("</div>");
        self
    }

    /// Append a `<div>` with the given element id and class wrapping a
    /// nested fragment.
    pub fn div_with_id(mut self, id: &str, class: &str, inner: Self) -> Self {
        self.html.push_str("<div id=\"");
        self.html.push_str(id);
        self.html.push_str("\" class=\"");
        self.html.push_str(class);
        self.html.push_str("\">");
        self.html.push_str(&inner.into_html());
        self.html.push_str("</div>");
        self
    }

    /// Append a `<div>` with the given class containing escaped text.
    pub fn div_text(self, class: &str, text: &str) -> Self {
        let inner = Self::new().text(text);
        self.div(class, inner)
    }

    /// Append pre-rendered markup verbatim.
    ///
    /// The caller vouches that the input was produced by this crate (or is a
    /// literal authored in this workspace); remote-origin text must go
    /// through [`Fragment::text`] or the attribute helpers instead.
    pub fn raw(mut self, rendered: &str) -> Self {
        self.html.push_str(rendered);
        self
    }

    /// Append escaped text content.
    pub fn text(mut self, raw: &str) -> Self {
        self.html.push_str(&escape_text(raw));
        self
    }

    /// Append an `<img>` with the given class, source URL, and alt text.
    ///
    /// The source URL and alt text are attribute-escaped.
    pub fn img(mut self, class: &str, src: &str, alt: &str) -> Self {
        self.html.push_str("<img src=\"");
        self.html.push_str(&escape_attr(src));
        self.html.push_str("\" alt=\"");
        self.html.push_str(&escape_attr(alt));
        self.html.push_str("\" class=\"");
        self.html.push_str(class);
        self.html.push_str("\">");
        self
    }

    /// Append a Bootstrap icon, e.g. `icon("calendar")` emits
    /// `<i class="bi bi-calendar"></i>`.
    pub fn icon(mut self, name: &str) -> Self {
        self.html.push_str("<i class=\"bi bi-");
        self.html.push_str(name);
        self.html.push_str("\"></i>");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("hello", "hello")]
    #[case::angle_brackets("Hi <b>", "Hi &lt;b&gt;")]
    #[case::ampersand_first("a&b<c", "a&amp;b&lt;c")]
    #[case::already_escaped("&lt;", "&amp;lt;")]
    #[case::empty("", "")]
    fn escapes_element_text(#[case] raw: &str, #[case] escaped: &str) {
        assert_eq!(escape_text(raw), escaped);
    }

    #[rstest]
    #[case::double_quote("a\"b", "a&quot;b")]
    #[case::single_quote("a'b", "a&#39;b")]
    #[case::url_query("u?a=1&b=2", "u?a=1&amp;b=2")]
    fn escapes_attribute_values(#[case] raw: &str, #[case] escaped: &str) {
        assert_eq!(escape_attr(raw), escaped);
    }

    #[test]
    fn nests_blocks_in_emission_order() {
        let fragment = Fragment::new().div(
            "outer",
            Fragment::new()
                .div_text("label", "ID")
                .div_text("value", "42"),
        );
        assert_eq!(
            fragment.into_html(),
            "<div class=\"outer\"><div class=\"label\">ID</div><div class=\"value\">42</div></div>",
        );
    }

    #[test]
    fn escapes_text_inside_blocks() {
        let fragment = Fragment::new().div_text("value", "Hi <b>");
        assert_eq!(
            fragment.into_html(),
            "<div class=\"value\">Hi &lt;b&gt;</div>",
        );
    }

    #[test]
    fn emits_images_with_escaped_attributes() {
        let fragment = Fragment::new().img("photo", "https://x.test/a?b=1&c=2", "Photo");
        assert_eq!(
            fragment.into_html(),
            "<img src=\"https://x.test/a?b=1&amp;c=2\" alt=\"Photo\" class=\"photo\">",
        );
    }

    #[test]
    fn emits_icons_with_bootstrap_classes() {
        assert_eq!(
            Fragment::new().icon("calendar").into_html(),
            "<i class=\"bi bi-calendar\"></i>",
        );
    }

    #[test]
    fn emits_identified_blocks_and_verbatim_markup() {
        let fragment = Fragment::new().div_with_id(
            "profileContent",
            "content",
            Fragment::new().raw("<span>pre-rendered</span>"),
        );
        assert_eq!(
            fragment.into_html(),
            "<div id=\"profileContent\" class=\"content\"><span>pre-rendered</span></div>",
        );
    }

    #[test]
    fn empty_fragment_yields_empty_string() {
        let fragment = Fragment::new();
        assert!(fragment.is_empty());
        assert_eq!(fragment.into_html(), "");
    }
}
