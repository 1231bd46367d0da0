//! Content library destination: where, and under which name, the VM is
//! published as a template.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use vtemplate_util::errors::VtemplateError;

use crate::location::LocationConfig;

/// The `[content_library_destination]` section.
///
/// Empty strings mean "not set". After [`DestinationConfig::prepare`] the
/// library, name and description are always non-empty; placement fields may
/// stay empty, in which case vSphere picks its default placement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationConfig {
    #[serde(default)]
    pub library: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cluster: String,
    #[serde(default)]
    pub folder: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub resource_pool: String,
}

impl DestinationConfig {
    /// Validate and fill in defaults from `location`, using the system clock
    /// for the generated template name.
    ///
    /// Meant to run once per build: with an empty name every call in a new
    /// second yields a different name.
    pub fn prepare(&mut self, location: &LocationConfig) -> Vec<VtemplateError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.prepare_at(location, now)
    }

    /// Same as [`DestinationConfig::prepare`] with an explicit Unix timestamp.
    pub fn prepare_at(&mut self, location: &LocationConfig, unix_secs: u64) -> Vec<VtemplateError> {
        let mut errs = Vec::new();

        if self.library.is_empty() {
            errs.push(VtemplateError::Config {
                message: "a library name must be provided".to_string(),
            });
        }

        // vSphere refuses a template named like the VM it was cloned from.
        // One-second resolution: two builds of the same VM in the same second collide.
        if self.name.is_empty() {
            self.name = format!("{}{unix_secs}", location.vm_name);
        }
        fill(&mut self.cluster, &location.cluster);
        fill(&mut self.folder, &location.folder);
        fill(&mut self.host, &location.host);
        fill(&mut self.resource_pool, &location.resource_pool);

        if self.description.is_empty() {
            self.description = format!("Imported {} VM template", location.vm_name);
        }

        errs
    }
}

fn fill(field: &mut String, fallback: &str) {
    if field.is_empty() {
        *field = fallback.to_string();
    }
}
