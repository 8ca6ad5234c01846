//! Document head tags.
//!
//! The generator consumes head entries as heterogeneous arrays:
//! `[tag, attrs]` for void tags and `[tag, attrs, [content]]` for tags with
//! an inline body. [`HeadTag`] models that shape with a custom `Serialize`
//! so the emitted JSON matches it exactly, attribute order included.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// KaTeX stylesheet injected when math rendering is enabled.
pub const KATEX_STYLESHEET_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/KaTeX/0.5.1/katex.min.css";

/// Markdown body stylesheet injected alongside the theme.
pub const MARKDOWN_STYLESHEET_URL: &str =
    "https://cdn.jsdelivr.net/github-markdown-css/2.2.1/github-markdown.css";

/// An attribute value: text or a bare boolean flag (e.g. `async`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Text attribute value.
    Text(String),
    /// Boolean flag attribute.
    Flag(bool),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// One document head entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTag {
    tag: String,
    attrs: Vec<(String, AttrValue)>,
    content: Option<String>,
}

impl HeadTag {
    /// A `<meta name=... content=...>` tag.
    #[must_use]
    pub fn meta_name(name: &str, content: &str) -> Self {
        Self {
            tag: "meta".to_owned(),
            attrs: vec![
                ("name".to_owned(), name.into()),
                ("content".to_owned(), content.into()),
            ],
            content: None,
        }
    }

    /// A `<meta property=... content=...>` tag (open-graph style).
    #[must_use]
    pub fn meta_property(property: &str, content: &str) -> Self {
        Self {
            tag: "meta".to_owned(),
            attrs: vec![
                ("property".to_owned(), property.into()),
                ("content".to_owned(), content.into()),
            ],
            content: None,
        }
    }

    /// A `<link rel="stylesheet">` tag.
    #[must_use]
    pub fn stylesheet(href: &str) -> Self {
        Self {
            tag: "link".to_owned(),
            attrs: vec![
                ("rel".to_owned(), "stylesheet".into()),
                ("href".to_owned(), href.into()),
            ],
            content: None,
        }
    }

    /// An async `<script src=...>` tag.
    #[must_use]
    pub fn async_script(src: &str) -> Self {
        Self {
            tag: "script".to_owned(),
            attrs: vec![
                ("async".to_owned(), true.into()),
                ("src".to_owned(), src.into()),
            ],
            content: None,
        }
    }

    /// A `<script>` tag with an inline body and no attributes.
    #[must_use]
    pub fn inline_script(body: impl Into<String>) -> Self {
        Self {
            tag: "script".to_owned(),
            attrs: Vec::new(),
            content: Some(body.into()),
        }
    }
}

impl Serialize for HeadTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.content.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.tag)?;
        seq.serialize_element(&Attrs(&self.attrs))?;
        if let Some(ref content) = self.content {
            // Inline bodies are wrapped in a single-element array.
            seq.serialize_element(&[content])?;
        }
        seq.end()
    }
}

/// Serialize attributes as a map, preserving authored order.
struct Attrs<'a>(&'a [(String, AttrValue)]);

impl Serialize for Attrs<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Site identity used to build social-sharing meta tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteMeta {
    /// Content author.
    pub author: String,
    /// Canonical site URL.
    pub url: String,
    /// Short site name for og/twitter cards.
    pub short_name: String,
    /// Twitter handle (with `@`).
    pub twitter_handle: String,
    /// Social-sharing image path.
    pub og_image: String,
}

/// Build the open-graph and Twitter card meta tags for a site identity.
#[must_use]
pub fn social_meta_tags(meta: &SiteMeta) -> Vec<HeadTag> {
    vec![
        HeadTag::meta_name("twitter:card", &meta.og_image),
        HeadTag::meta_name("twitter:site", &meta.twitter_handle),
        HeadTag::meta_name("twitter:creator", &meta.twitter_handle),
        HeadTag::meta_property("og:type", "website"),
        HeadTag::meta_property("og:title", &meta.short_name),
        HeadTag::meta_property("og:site_name", &meta.short_name),
        HeadTag::meta_name("og:url", &meta.url),
        HeadTag::meta_name("og:image", &meta.og_image),
    ]
}

/// Build the analytics bootstrap tags for a measurement key.
///
/// Returns the async gtag loader plus the inline init script. No key means
/// no tags: analytics is disabled by default.
#[must_use]
pub fn analytics_tags(key: &str) -> Vec<HeadTag> {
    let loader = HeadTag::async_script(&format!(
        "https://www.googletagmanager.com/gtag/js?id=G-{key}"
    ));
    let init = HeadTag::inline_script(format!(
        "window.dataLayer = window.dataLayer || [];\n\
         function gtag(){{dataLayer.push(arguments);}}\n\
         gtag('js', new Date());\n\
         gtag('config', 'G-{key}');"
    ));
    vec![loader, init]
}
