//! Sequential step pipeline.
//!
//! Steps run strictly one after another. The first step that fails halts the
//! pipeline: no later step runs, and every step that did start is cleaned up
//! in reverse order. Cleanup also runs, in the same order, when all steps
//! succeed.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use vtemplate_util::errors::VtemplateError;
use vtemplate_util::progress::Ui;
use vtemplate_vsphere::vm::VmHandle;

/// Collaborators a step may use while it runs.
pub struct StepContext<'a> {
    pub ui: &'a dyn Ui,
    pub vm: &'a dyn VmHandle,
    pub cancel: &'a CancellationToken,
}

/// One unit of a build.
#[async_trait]
pub trait Step: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Run the step. `Err` halts the pipeline.
    async fn run(&self, ctx: &StepContext<'_>) -> Result<(), VtemplateError>;

    /// Release anything `run` acquired. Called whether `run` succeeded or
    /// not; steps that hold nothing keep the default.
    async fn cleanup(&self, _ctx: &StepContext<'_>) {}
}

/// Run `steps` in order and return the error of the step that halted, if any.
pub async fn run_steps(
    steps: &[Box<dyn Step>],
    ctx: &StepContext<'_>,
) -> Result<(), VtemplateError> {
    let mut started = 0;
    let mut outcome = Ok(());

    for step in steps {
        if ctx.cancel.is_cancelled() {
            tracing::info!("Cancelled before step {}", step.name());
            outcome = Err(VtemplateError::Cancelled);
            break;
        }

        tracing::info!("Running step {}", step.name());
        started += 1;
        if let Err(e) = step.run(ctx).await {
            tracing::info!("Step {} halted the pipeline: {e}", step.name());
            outcome = Err(e);
            break;
        }
    }

    for step in steps[..started].iter().rev() {
        tracing::debug!("Cleaning up step {}", step.name());
        step.cleanup(ctx).await;
    }

    outcome
}
