//! Step: publish the provisioned VM as a content library template.

use async_trait::async_trait;
use vtemplate_core::destination::DestinationConfig;
use vtemplate_util::errors::VtemplateError;
use vtemplate_vsphere::template::{Placement, Template};

use crate::pipeline::{Step, StepContext};

/// Imports the context's VM into the content library described by a
/// prepared [`DestinationConfig`].
///
/// Runs at most once per build: a second run would publish another template
/// (or be rejected by vCenter when the name is fixed).
#[derive(Debug, Clone)]
pub struct ImportStep {
    config: DestinationConfig,
}

impl ImportStep {
    pub fn new(config: DestinationConfig) -> Self {
        Self { config }
    }

    /// The publish request, copied verbatim from the configuration.
    pub fn template(&self) -> Template {
        Template {
            name: self.config.name.clone(),
            description: self.config.description.clone(),
            library: self.config.library.clone(),
            placement: Placement {
                cluster: self.config.cluster.clone(),
                folder: self.config.folder.clone(),
                host: self.config.host.clone(),
                resource_pool: self.config.resource_pool.clone(),
            },
        }
    }
}

#[async_trait]
impl Step for ImportStep {
    fn name(&self) -> &'static str {
        "import-to-content-library"
    }

    async fn run(&self, ctx: &StepContext<'_>) -> Result<(), VtemplateError> {
        let template = self.template();

        ctx.ui.say("Importing VM template to Content Library...");
        if let Err(e) = ctx
            .vm
            .import_to_content_library(&template, ctx.cancel)
            .await
        {
            tracing::error!("failed to import VM template: {e}");
            return Err(e);
        }

        Ok(())
    }
}
