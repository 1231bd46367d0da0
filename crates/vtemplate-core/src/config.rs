use serde::{Deserialize, Serialize};
use std::path::Path;

use vtemplate_util::errors::{VtemplateError, VtemplateResult};

use crate::destination::DestinationConfig;
use crate::location::LocationConfig;

/// A complete build configuration, loaded from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub vsphere: ConnectionConfig,

    #[serde(default)]
    pub location: LocationConfig,

    #[serde(default)]
    pub content_library_destination: DestinationConfig,
}

/// vCenter connection settings from `[vsphere]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    #[serde(default)]
    pub vcenter_server: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub insecure_connection: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            vcenter_server: String::new(),
            username: String::new(),
            password: None,
            insecure_connection: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    300
}

impl ConnectionConfig {
    /// Validate the connection settings. Returns every problem found, in order.
    pub fn prepare(&self) -> Vec<VtemplateError> {
        let mut errs = Vec::new();

        if self.vcenter_server.is_empty() {
            errs.push(VtemplateError::Config {
                message: "'vcenter_server' is required".to_string(),
            });
        }
        if self.username.is_empty() {
            errs.push(VtemplateError::Config {
                message: "'username' is required".to_string(),
            });
        }

        errs
    }

    /// Base URL of the vCenter REST endpoint.
    ///
    /// A bare host name becomes `https://<host>`; an explicit URL is kept
    /// as-is minus any trailing slash.
    pub fn base_url(&self) -> String {
        let server = self.vcenter_server.trim_end_matches('/');
        if server.starts_with("http://") || server.starts_with("https://") {
            server.to_string()
        } else {
            format!("https://{server}")
        }
    }
}

impl BuildConfig {
    /// Load a build configuration from a TOML file.
    pub fn load(path: &Path) -> VtemplateResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| VtemplateError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse_toml(&content)
    }

    /// Parse a build configuration from TOML text.
    pub fn parse_toml(content: &str) -> VtemplateResult<Self> {
        toml::from_str(content).map_err(|e| {
            VtemplateError::Config {
                message: format!("Failed to parse build configuration: {e}"),
            }
            .into()
        })
    }

    /// Run every section's `prepare` pass.
    ///
    /// Returns the errors of all sections concatenated in document order; an
    /// empty vector means the configuration is ready for a build.
    pub fn prepare(&mut self) -> Vec<VtemplateError> {
        let mut errs = self.vsphere.prepare();
        errs.extend(self.location.prepare());
        errs.extend(self.content_library_destination.prepare(&self.location));

        tracing::debug!(
            errors = errs.len(),
            template = %self.content_library_destination.name,
            "prepared build configuration"
        );
        errs
    }
}
