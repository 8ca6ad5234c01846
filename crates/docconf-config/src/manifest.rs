//! Optional `docconf.toml` manifest.
//!
//! The manifest is a file-based override layer between the static site
//! declaration and the process environment: environment variables beat
//! manifest values, manifest values beat declaration defaults. String
//! values support `${VAR}` / `${VAR:-default}` expansion.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::expand::expand_env;
use crate::theme::SearchConfig;

/// Manifest filename to search for.
pub const MANIFEST_FILENAME: &str = "docconf.toml";

/// Parsed `docconf.toml` contents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Site-level overrides.
    site: SiteSection,
    /// Analytics configuration.
    analytics: AnalyticsSection,
    /// Search provider credentials.
    search: Option<SearchSection>,

    /// Path to the manifest file (set after loading).
    #[serde(skip)]
    pub manifest_path: Option<PathBuf>,
}

/// `[site]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SiteSection {
    base: Option<String>,
    edit_links: Option<bool>,
}

/// `[analytics]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct AnalyticsSection {
    key: Option<String>,
}

/// `[search]` section. All three credentials are required when present.
#[derive(Debug, Clone, Deserialize)]
struct SearchSection {
    app_id: String,
    api_key: String,
    index_name: String,
    #[serde(default = "default_contextual_search")]
    contextual_search: bool,
}

fn default_contextual_search() -> bool {
    true
}

impl Manifest {
    /// Load the manifest.
    ///
    /// If `manifest_path` is provided, loads from that file. Otherwise,
    /// searches for `docconf.toml` in the current directory and parents,
    /// falling back to an empty manifest when none is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `manifest_path` doesn't exist,
    /// parsing fails, or a referenced environment variable is unset.
    pub fn load(manifest_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = manifest_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }
        match Self::discover() {
            Some(discovered) => Self::load_from_file(&discovered),
            None => Ok(Self::default()),
        }
    }

    /// Search for the manifest in the current directory and parents.
    #[must_use]
    pub fn discover() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(MANIFEST_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load the manifest from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut manifest: Self = toml::from_str(&content)?;
        manifest.expand_env_vars()?;
        manifest.manifest_path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), "loaded manifest");
        Ok(manifest)
    }

    /// Expand environment variable references in manifest strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref base) = self.site.base {
            self.site.base = Some(expand_env(base, "site.base")?);
        }
        if let Some(ref key) = self.analytics.key {
            self.analytics.key = Some(expand_env(key, "analytics.key")?);
        }
        if let Some(ref mut search) = self.search {
            search.app_id = expand_env(&search.app_id, "search.app_id")?;
            search.api_key = expand_env(&search.api_key, "search.api_key")?;
            search.index_name = expand_env(&search.index_name, "search.index_name")?;
        }
        Ok(())
    }

    /// Analytics key, if configured to a non-empty value.
    #[must_use]
    pub fn analytics_key(&self) -> Option<&str> {
        self.analytics.key.as_deref().filter(|k| !k.is_empty())
    }

    /// Deployment base path, if configured.
    #[must_use]
    pub fn base_path(&self) -> Option<&str> {
        self.site.base.as_deref().filter(|b| !b.is_empty())
    }

    /// Edit-link toggle, if configured.
    #[must_use]
    pub fn edit_links(&self) -> Option<bool> {
        self.site.edit_links
    }

    /// Search provider credentials, if configured.
    #[must_use]
    pub fn search(&self) -> Option<SearchConfig> {
        self.search.as_ref().map(|s| SearchConfig {
            app_id: s.app_id.clone(),
            api_key: s.api_key.clone(),
            index_name: s.index_name.clone(),
            contextual_search: s.contextual_search,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_empty_manifest() {
        let manifest: Manifest = toml::from_str("").unwrap();
        assert_eq!(manifest.analytics_key(), None);
        assert_eq!(manifest.base_path(), None);
        assert_eq!(manifest.edit_links(), None);
        assert!(manifest.search().is_none());
    }

    #[test]
    fn test_parse_full_manifest() {
        let manifest: Manifest = toml::from_str(
            r#"
[site]
base = "/docs/"
edit_links = false

[analytics]
key = "AB12CD34"

[search]
app_id = "APP123"
api_key = "key456"
index_name = "docs"
"#,
        )
        .unwrap();

        assert_eq!(manifest.base_path(), Some("/docs/"));
        assert_eq!(manifest.edit_links(), Some(false));
        assert_eq!(manifest.analytics_key(), Some("AB12CD34"));
        let search = manifest.search().unwrap();
        assert_eq!(search.app_id, "APP123");
        assert!(search.contextual_search);
    }

    #[test]
    fn test_empty_analytics_key_is_unset() {
        let manifest: Manifest = toml::from_str("[analytics]\nkey = \"\"").unwrap();
        assert_eq!(manifest.analytics_key(), None);
    }

    #[test]
    fn test_load_explicit_missing_file_errors() {
        let err = Manifest::load(Some(Path::new("/nonexistent/docconf.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_expands_env() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCCONF_MANIFEST_KEY_TEST", "FROM-ENV");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILENAME);
        std::fs::write(&path, "[analytics]\nkey = \"${DOCCONF_MANIFEST_KEY_TEST}\"").unwrap();

        let manifest = Manifest::load(Some(&path)).unwrap();
        assert_eq!(manifest.analytics_key(), Some("FROM-ENV"));
        assert_eq!(manifest.manifest_path, Some(path));

        unsafe {
            std::env::remove_var("DOCCONF_MANIFEST_KEY_TEST");
        }
    }

    #[test]
    fn test_load_reports_unset_env_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCCONF_MANIFEST_UNSET_TEST");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILENAME);
        std::fs::write(
            &path,
            "[search]\napp_id = \"a\"\napi_key = \"${DOCCONF_MANIFEST_UNSET_TEST}\"\nindex_name = \"docs\"",
        )
        .unwrap();

        let err = Manifest::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("search.api_key"));
    }

    #[test]
    fn test_parse_error_surfaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILENAME);
        std::fs::write(&path, "[site\nbase = ").unwrap();

        let err = Manifest::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
