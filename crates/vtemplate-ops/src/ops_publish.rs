//! Operation: publish the configured VM to its content library.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use vtemplate_core::config::BuildConfig;
use vtemplate_util::errors::{VtemplateError, VtemplateResult};
use vtemplate_util::progress::Ui;
use vtemplate_vsphere::client::VsphereClient;
use vtemplate_vsphere::vm::{VirtualMachine, VmHandle};

use crate::ops_import::ImportStep;
use crate::pipeline::{run_steps, Step, StepContext};

/// Upper bound on the closing logout, so a stalled vCenter cannot hold up an
/// interrupted build for the full request timeout.
const LOGOUT_GRACE: Duration = Duration::from_secs(3);

/// Pick the password: explicit argument first, then the config file.
pub fn resolve_password<'a>(explicit: Option<&'a str>, config: &'a BuildConfig) -> &'a str {
    explicit
        .or(config.vsphere.password.as_deref())
        .unwrap_or_default()
}

/// Connect to vCenter, locate the VM and run the import pipeline.
///
/// `config` must already be prepared. The session is logged out whatever the
/// outcome; a failed or stalled logout is only logged.
pub async fn publish(
    config: &BuildConfig,
    password: &str,
    ui: &dyn Ui,
    cancel: &CancellationToken,
) -> VtemplateResult<()> {
    ui.say(&format!("Connecting to {}", config.vsphere.base_url()));
    let client = VsphereClient::connect(&config.vsphere, password, cancel).await?;

    let result = run_pipeline(&client, config, ui, cancel).await;

    // A fresh token: the session should be closed even after a cancelled build.
    match tokio::time::timeout(LOGOUT_GRACE, client.logout(&CancellationToken::new())).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!("Failed to log out of {}: {e}", client.base_url()),
        Err(_) => tracing::warn!(
            "Gave up logging out of {} after {}s",
            client.base_url(),
            LOGOUT_GRACE.as_secs()
        ),
    }

    result.map_err(Into::into)
}

async fn run_pipeline(
    client: &VsphereClient,
    config: &BuildConfig,
    ui: &dyn Ui,
    cancel: &CancellationToken,
) -> Result<(), VtemplateError> {
    let vm = VirtualMachine::find(client, &config.location.vm_name, cancel).await?;
    ui.say(&format!("Found VM {} ({})", vm.name(), vm.id()));

    let steps: Vec<Box<dyn Step>> = vec![Box::new(ImportStep::new(
        config.content_library_destination.clone(),
    ))];
    let ctx = StepContext {
        ui,
        vm: &vm,
        cancel,
    };
    run_steps(&steps, &ctx).await?;

    let dest = &config.content_library_destination;
    ui.say(&format!(
        "Published template '{}' to library '{}'",
        dest.name, dest.library
    ));
    Ok(())
}
