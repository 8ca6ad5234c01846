//! API-explorer bootstrap configuration.
//!
//! The explorer UI bundle is an external collaborator initialized on page
//! load with a fixed configuration; the core only produces that object.

use serde::Serialize;

/// Fixed page-load configuration for the API-explorer bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerConfig {
    /// Location of the API spec document.
    pub url: String,
    /// Element the bundle mounts into.
    pub dom_id: String,
    /// Whether deep links into operations are enabled.
    pub deep_linking: bool,
    /// Layout name the bundle renders with.
    pub layout: String,
    /// Enabled explorer plugins.
    pub plugins: Vec<String>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            url: "/openapi.yml".to_owned(),
            dom_id: "#api-explorer".to_owned(),
            deep_linking: true,
            layout: "BaseLayout".to_owned(),
            plugins: vec!["DownloadUrl".to_owned()],
        }
    }
}

impl ExplorerConfig {
    /// Bootstrap configuration for a specific spec document location.
    #[must_use]
    pub fn for_spec(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}
