//! Site configuration assembly for docconf.
//!
//! Composes a locale table, theme options, head tags, and a validated
//! navigation tree into a single [`SiteConfig`] for the static-site
//! generator, via [`build_config`].
//!
//! Construction is a pure, synchronous transformation of a static
//! [`SiteDecl`] plus a [`BuildContext`] environment snapshot: no I/O beyond
//! the optional [`Manifest`], no global state, idempotent and safe to call
//! concurrently from multiple build processes.
//!
//! ## Override precedence
//!
//! Environment variable beats `docconf.toml` manifest value beats static
//! declaration default, field by field. Absent overrides never fail a
//! build; structural violations in the navigation tree always do.

mod context;
mod error;
mod expand;
mod explorer;
mod head;
mod locale;
mod manifest;
mod markdown;
mod theme;

use serde::Serialize;

use docconf_nav::NavNode;

pub use context::{
    BuildContext, ENV_ANALYTICS_KEY, ENV_BASE_PATH, ENV_EDIT_LINKS, ENV_SEARCH_API_KEY,
    ENV_SEARCH_APP_ID, ENV_SEARCH_INDEX,
};
pub use error::ConfigError;
pub use explorer::ExplorerConfig;
pub use head::{
    HeadTag, KATEX_STYLESHEET_URL, MARKDOWN_STYLESHEET_URL, SiteMeta, analytics_tags,
    social_meta_tags,
};
pub use locale::{LocaleSettings, LocaleTable};
pub use manifest::{MANIFEST_FILENAME, Manifest};
pub use markdown::MarkdownOptions;
pub use theme::{
    Footer, FooterColumn, Gutter, GutterPanel, Logo, SearchConfig, ServiceLink, Sidebar, TextLink,
    ThemeConfig, ThemeOptions, Topbar,
};

/// Static site declaration: everything authored in the source tree, before
/// environment overrides are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteDecl {
    /// Generator theme name.
    pub theme: String,
    /// Site title.
    pub title: String,
    /// Social-sharing image path.
    pub image: String,
    /// Locale table.
    pub locales: LocaleTable,
    /// Identity for social meta tags.
    pub meta: SiteMeta,
    /// Markdown pipeline options.
    pub markdown: MarkdownOptions,
    /// Theme option defaults.
    pub theme_options: ThemeOptions,
    /// Navigation tree declaration (top-level sections of the implicit
    /// root).
    pub nav: Vec<NavNode>,
}

/// The aggregate configuration object handed to the static-site generator.
///
/// Immutable for the lifetime of a build; guaranteed structurally valid by
/// [`build_config`]. Field names and nesting match the generator's expected
/// shape field-for-field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    /// Generator theme name.
    pub theme: String,
    /// Site title.
    pub title: String,
    /// Social-sharing image path.
    pub image: String,
    /// Locale table.
    pub locales: LocaleTable,
    /// Markdown pipeline options.
    pub markdown: MarkdownOptions,
    /// Document head entries.
    pub head: Vec<HeadTag>,
    /// Deployment base path.
    pub base: String,
    /// Theme options with the sidebar attached.
    #[serde(rename = "themeConfig")]
    pub theme_config: ThemeConfig,
}

/// Assemble and validate the full site configuration.
///
/// Validates the navigation tree first, then merges the declaration's theme
/// defaults with the context's overrides (override wins, field by field)
/// and builds the head tags, injecting analytics bootstrap scripts only
/// when a key is configured.
///
/// # Errors
///
/// Returns [`ConfigError::Nav`] for any structural violation in the
/// navigation tree; the whole configuration is rejected, never partially
/// emitted.
pub fn build_config(decl: &SiteDecl, ctx: &BuildContext) -> Result<SiteConfig, ConfigError> {
    docconf_nav::validate(&decl.nav)?;

    let mut options = decl.theme_options.clone();
    if let Some(edit_links) = ctx.edit_links {
        options.edit_links = edit_links;
    }
    if let Some(ref search) = ctx.search {
        options.algolia = Some(search.clone());
    }

    let base = ctx.base_path.clone().unwrap_or_else(|| "/".to_owned());

    let mut head = social_meta_tags(&decl.meta);
    if decl.markdown.math {
        head.push(HeadTag::stylesheet(KATEX_STYLESHEET_URL));
    }
    head.push(HeadTag::stylesheet(MARKDOWN_STYLESHEET_URL));
    if let Some(ref key) = ctx.analytics_key {
        head.extend(analytics_tags(key));
    }

    tracing::debug!(
        sections = decl.nav.len(),
        analytics = ctx.analytics_key.is_some(),
        %base,
        "site configuration assembled"
    );

    Ok(SiteConfig {
        theme: decl.theme.clone(),
        title: decl.title.clone(),
        image: decl.image.clone(),
        locales: decl.locales.clone(),
        markdown: decl.markdown.clone(),
        head,
        base,
        theme_config: ThemeConfig {
            options,
            sidebar: Sidebar::authored(decl.nav.clone()),
        },
    })
}
