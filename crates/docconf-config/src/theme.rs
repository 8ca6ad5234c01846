//! Theme options.
//!
//! Flat named options merged at the top level of the generator's
//! `themeConfig`. Field names and nesting match the theme's expected shape
//! field-for-field; serde renames produce the camelCase keys it consumes.

use docconf_nav::NavNode;
use serde::Serialize;

/// Theme options independent of the navigation tree.
///
/// These are the static defaults of the site declaration; the build merges
/// environment and manifest overrides on top (override wins, field by
/// field) before attaching the sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOptions {
    /// Repository slug shown in the topbar (e.g. `org/project`).
    pub repo: String,
    /// Repository the "edit this page" links point at.
    pub docs_repo: String,
    /// Branch for edit links.
    pub docs_branch: String,
    /// Directory within the repo holding the documents.
    pub docs_dir: String,
    /// Whether "edit this page" links are rendered.
    pub edit_links: bool,
    /// Whether the theme's custom layer is enabled.
    pub custom: bool,
    /// Default social-sharing image.
    pub default_image: String,
    /// Site logo.
    pub logo: Logo,
    /// Topbar settings.
    pub topbar: Topbar,
    /// Help & support gutter panels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gutter: Option<Gutter>,
    /// Footer content.
    pub footer: Footer,
    /// Search provider credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algolia: Option<SearchConfig>,
}

/// Site logo reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Logo {
    /// Image source path.
    pub src: String,
}

/// Topbar settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Topbar {
    /// Whether the announcement banner is shown.
    pub banner: bool,
}

/// Help & support gutter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gutter {
    /// Gutter heading.
    pub title: String,
    /// Chat panel.
    pub chat: GutterPanel,
    /// Issue-reporting panel.
    pub github: GutterPanel,
    /// Forum panel.
    pub forum: GutterPanel,
}

/// One gutter panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GutterPanel {
    /// Panel heading.
    pub title: String,
    /// Panel body text.
    pub text: String,
    /// Link target.
    pub url: String,
    /// Background CSS value.
    pub bg: String,
    /// Optional panel logo name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Footer content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    /// Footer logo path.
    pub logo: String,
    /// Primary footer link.
    pub text_link: TextLink,
    /// Social/service icon links.
    pub services: Vec<ServiceLink>,
    /// Smallprint markdown.
    pub smallprint: String,
    /// Additional link columns.
    pub links: Vec<FooterColumn>,
}

/// A labelled link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextLink {
    /// Link label.
    pub text: String,
    /// Link target.
    pub url: String,
}

/// A service icon link (github, twitter, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceLink {
    /// Service identifier the theme maps to an icon.
    pub service: String,
    /// Link target.
    pub url: String,
}

/// A footer link column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    /// Column heading.
    pub title: String,
    /// Column links.
    pub items: Vec<TextLink>,
}

/// Search provider credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    /// Application identifier.
    pub app_id: String,
    /// Search-only API key.
    pub api_key: String,
    /// Index name.
    pub index_name: String,
    /// Whether results are scoped to the current locale/version context.
    pub contextual_search: bool,
}

/// Sidebar block: the validated navigation tree plus the auto-generation
/// toggle, which is always off because the tree is authored explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    /// Whether the generator derives the sidebar itself.
    pub auto: bool,
    /// Authored navigation tree, in declaration order.
    pub nav: Vec<NavNode>,
}

impl Sidebar {
    /// Wrap an authored navigation tree.
    #[must_use]
    pub fn authored(nav: Vec<NavNode>) -> Self {
        Self { auto: false, nav }
    }
}

/// Theme options with the sidebar attached, as serialized into the final
/// configuration's `themeConfig` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    /// Flat theme options.
    #[serde(flatten)]
    pub options: ThemeOptions,
    /// Sidebar navigation.
    pub sidebar: Sidebar,
}
