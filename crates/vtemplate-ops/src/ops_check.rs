//! Operation: load a build configuration and run its `prepare` passes.
//!
//! No network access. Every configuration problem is reported at once.

use std::path::Path;

use vtemplate_core::config::BuildConfig;
use vtemplate_util::errors::{VtemplateError, VtemplateResult};

/// Load `config_path` and return the prepared configuration.
pub fn check(config_path: &Path) -> VtemplateResult<BuildConfig> {
    let mut config = BuildConfig::load(config_path)?;

    if let Some(err) = VtemplateError::from_batch(config.prepare()) {
        return Err(err.into());
    }

    Ok(config)
}
