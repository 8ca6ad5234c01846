//! Navigation node type and builder constructors.

/// One entry in the hierarchical sidebar declaration.
///
/// The tree has an implicit root: the top-level sections are a plain
/// `Vec<NavNode>` handed to the configuration builder. A node with children
/// is a section or group; a node with a path and no children is a leaf
/// pointing at one document or external link.
///
/// Deeply nested declarations are authored with the builder constructors
/// ([`section`](Self::section), [`page`](Self::page),
/// [`directory`](Self::directory), [`link`](Self::link)) rather than struct
/// literals.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NavNode {
    /// Display label shown in the sidebar.
    pub title: String,
    /// Link target: internal document path (leading `/`) or absolute
    /// external URL. `None` for pure grouping nodes.
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub path: Option<String>,
    /// Whether the entry represents a directory of documents the generator
    /// expands, rather than a single document. Only meaningful for internal
    /// paths.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_false"))]
    pub directory: bool,
    /// Child entries, in authored order.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<NavNode>,
}

#[cfg(feature = "serde")]
#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !value
}

impl NavNode {
    /// Create a grouping section with child entries and no destination of
    /// its own.
    #[must_use]
    pub fn section(title: impl Into<String>, children: Vec<NavNode>) -> Self {
        Self {
            title: title.into(),
            path: None,
            directory: false,
            children,
        }
    }

    /// Create a leaf pointing at a single document.
    #[must_use]
    pub fn page(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: Some(path.into()),
            directory: false,
            children: Vec::new(),
        }
    }

    /// Create an entry for a directory of documents.
    ///
    /// The generator expands the directory's contents under this entry at
    /// build time.
    #[must_use]
    pub fn directory(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: Some(path.into()),
            directory: true,
            children: Vec::new(),
        }
    }

    /// Create a leaf pointing at an external URL.
    #[must_use]
    pub fn link(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: Some(url.into()),
            directory: false,
            children: Vec::new(),
        }
    }

    /// Attach child entries, keeping their order.
    #[must_use]
    pub fn with_children(mut self, children: Vec<NavNode>) -> Self {
        self.children = children;
        self
    }

    /// Whether the node's path is an external URL.
    ///
    /// Recognized external schemes are `http://` and `https://`; everything
    /// else with a path is an internal document path.
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.path.as_deref().is_some_and(is_external_path)
    }

    /// The node's path when it is an internal document path.
    #[must_use]
    pub fn internal_path(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !is_external_path(p))
    }
}

/// Whether a path string points outside the site.
pub(crate) fn is_external_path(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}
