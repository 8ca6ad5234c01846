//! Build context: the environment snapshot used during configuration
//! construction.
//!
//! Environment variables are read once into an explicit [`BuildContext`]
//! instead of ad hoc throughout assembly. This keeps `build_config` a pure
//! transformation that is trivially testable with synthetic contexts and
//! safe to call repeatedly.

use crate::manifest::Manifest;
use crate::theme::SearchConfig;

/// Environment variable supplying the analytics measurement key.
pub const ENV_ANALYTICS_KEY: &str = "DOCS_ANALYTICS_KEY";
/// Environment variable supplying the deployment base path.
pub const ENV_BASE_PATH: &str = "DOCS_BASE_PATH";
/// Environment variable toggling "edit this page" links.
pub const ENV_EDIT_LINKS: &str = "DOCS_EDIT_LINKS";
/// Environment variable supplying the search application identifier.
pub const ENV_SEARCH_APP_ID: &str = "DOCS_SEARCH_APP_ID";
/// Environment variable supplying the search-only API key.
pub const ENV_SEARCH_API_KEY: &str = "DOCS_SEARCH_API_KEY";
/// Environment variable supplying the search index name.
pub const ENV_SEARCH_INDEX: &str = "DOCS_SEARCH_INDEX";

/// Snapshot of environment-supplied overrides for a single build.
///
/// All fields are optional. Only `Some` values override manifest values and
/// static defaults; absent variables never fail the build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildContext {
    /// Analytics measurement key (e.g. a GA4 `G-` identifier suffix).
    pub analytics_key: Option<String>,
    /// Base path the site is deployed under (e.g. `/docs/`).
    pub base_path: Option<String>,
    /// Override for the "edit this page" link toggle.
    pub edit_links: Option<bool>,
    /// Search provider credentials, present only when all three variables
    /// are set.
    pub search: Option<SearchConfig>,
}

impl BuildContext {
    /// Capture the current process environment.
    ///
    /// Empty values are treated as unset so CI can pass through blank
    /// variables without clobbering manifest values.
    #[must_use]
    pub fn from_env() -> Self {
        let search = match (
            env_nonempty(ENV_SEARCH_APP_ID),
            env_nonempty(ENV_SEARCH_API_KEY),
            env_nonempty(ENV_SEARCH_INDEX),
        ) {
            (Some(app_id), Some(api_key), Some(index_name)) => Some(SearchConfig {
                app_id,
                api_key,
                index_name,
                contextual_search: true,
            }),
            (None, None, None) => None,
            _ => {
                tracing::warn!(
                    "incomplete search credentials in environment; search disabled"
                );
                None
            }
        };

        Self {
            analytics_key: env_nonempty(ENV_ANALYTICS_KEY),
            base_path: env_nonempty(ENV_BASE_PATH),
            edit_links: env_nonempty(ENV_EDIT_LINKS).and_then(|v| parse_bool(&v)),
            search,
        }
    }

    /// Fill absent fields from a loaded manifest.
    ///
    /// Environment values win on conflict; the manifest only supplies what
    /// the environment left unset.
    #[must_use]
    pub fn with_manifest(mut self, manifest: &Manifest) -> Self {
        if self.analytics_key.is_none() {
            self.analytics_key = manifest.analytics_key().map(str::to_owned);
        }
        if self.base_path.is_none() {
            self.base_path = manifest.base_path().map(str::to_owned);
        }
        if self.edit_links.is_none() {
            self.edit_links = manifest.edit_links();
        }
        if self.search.is_none() {
            self.search = manifest.search();
        }
        self
    }

    /// Check if all override fields are None (no overrides supplied).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.analytics_key.is_none()
            && self.base_path.is_none()
            && self.edit_links.is_none()
            && self.search.is_none()
    }
}

/// Read an environment variable, treating empty values as unset.
fn env_nonempty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Parse a boolean toggle value.
///
/// Unrecognized values are ignored (the default applies) rather than
/// failing the build.
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            tracing::warn!(value = other, "unrecognized boolean toggle; ignoring");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_context_is_empty() {
        assert!(BuildContext::default().is_empty());
    }

    #[test]
    fn test_parse_bool_values() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("ON"), Some(true));
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("no"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_from_env_reads_analytics_key() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var(ENV_ANALYTICS_KEY, "XJ3K9PQ2");
        }
        let ctx = BuildContext::from_env();
        assert_eq!(ctx.analytics_key.as_deref(), Some("XJ3K9PQ2"));
        unsafe {
            std::env::remove_var(ENV_ANALYTICS_KEY);
        }
    }

    #[test]
    fn test_from_env_empty_value_is_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var(ENV_BASE_PATH, "");
        }
        let ctx = BuildContext::from_env();
        assert_eq!(ctx.base_path, None);
        unsafe {
            std::env::remove_var(ENV_BASE_PATH);
        }
    }

    #[test]
    fn test_from_env_partial_search_credentials_ignored() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var(ENV_SEARCH_APP_ID, "APP123");
            std::env::remove_var(ENV_SEARCH_API_KEY);
            std::env::remove_var(ENV_SEARCH_INDEX);
        }
        let ctx = BuildContext::from_env();
        assert_eq!(ctx.search, None);
        unsafe {
            std::env::remove_var(ENV_SEARCH_APP_ID);
        }
    }

    #[test]
    fn test_with_manifest_fills_absent_fields_only() {
        let manifest: Manifest = toml::from_str(
            r#"
[site]
base = "/from-manifest/"

[analytics]
key = "MANIFEST-KEY"
"#,
        )
        .unwrap();

        let ctx = BuildContext {
            analytics_key: Some("ENV-KEY".to_owned()),
            ..Default::default()
        }
        .with_manifest(&manifest);

        // Environment wins where set, manifest fills the rest.
        assert_eq!(ctx.analytics_key.as_deref(), Some("ENV-KEY"));
        assert_eq!(ctx.base_path.as_deref(), Some("/from-manifest/"));
        assert_eq!(ctx.edit_links, None);
    }
}
