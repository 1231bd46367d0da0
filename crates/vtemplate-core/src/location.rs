use serde::{Deserialize, Serialize};
use vtemplate_util::errors::VtemplateError;

/// Where the source VM lives, from `[location]`.
///
/// Its placement fields double as fallbacks for the content library
/// destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default)]
    pub vm_name: String,
    #[serde(default)]
    pub cluster: String,
    #[serde(default)]
    pub folder: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub resource_pool: String,
}

impl LocationConfig {
    /// Validate the location. Returns every problem found, in order.
    pub fn prepare(&self) -> Vec<VtemplateError> {
        let mut errs = Vec::new();

        if self.vm_name.is_empty() {
            errs.push(VtemplateError::Config {
                message: "'vm_name' is required".to_string(),
            });
        }

        errs
    }
}
