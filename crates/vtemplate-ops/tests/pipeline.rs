use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use vtemplate_ops::pipeline::{run_steps, Step, StepContext};
use vtemplate_util::errors::VtemplateError;
use vtemplate_util::progress::Ui;
use vtemplate_vsphere::template::Template;
use vtemplate_vsphere::vm::VmHandle;

struct SilentUi;

impl Ui for SilentUi {
    fn say(&self, _message: &str) {}
}

struct IdleVm;

#[async_trait]
impl VmHandle for IdleVm {
    fn name(&self) -> &str {
        "idle"
    }

    async fn import_to_content_library(
        &self,
        _template: &Template,
        _cancel: &CancellationToken,
    ) -> Result<(), VtemplateError> {
        Ok(())
    }
}

type Journal = Arc<Mutex<Vec<String>>>;

struct RecordingStep {
    name: &'static str,
    fail: bool,
    journal: Journal,
}

impl RecordingStep {
    fn boxed(name: &'static str, fail: bool, journal: &Journal) -> Box<dyn Step> {
        Box::new(Self {
            name,
            fail,
            journal: Arc::clone(journal),
        })
    }
}

#[async_trait]
impl Step for RecordingStep {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn run(&self, _ctx: &StepContext<'_>) -> Result<(), VtemplateError> {
        self.journal.lock().unwrap().push(format!("run {}", self.name));
        if self.fail {
            return Err(VtemplateError::Generic {
                message: format!("{} failed", self.name),
            });
        }
        Ok(())
    }

    async fn cleanup(&self, _ctx: &StepContext<'_>) {
        self.journal
            .lock()
            .unwrap()
            .push(format!("cleanup {}", self.name));
    }
}

/// Relies on the default no-op cleanup.
struct PlainStep;

#[async_trait]
impl Step for PlainStep {
    fn name(&self) -> &'static str {
        "plain"
    }

    async fn run(&self, _ctx: &StepContext<'_>) -> Result<(), VtemplateError> {
        Ok(())
    }
}

fn entries(journal: &Journal) -> Vec<String> {
    journal.lock().unwrap().clone()
}

#[tokio::test]
async fn test_all_steps_run_then_clean_up_in_reverse() {
    let journal = Journal::default();
    let steps = vec![
        RecordingStep::boxed("a", false, &journal),
        RecordingStep::boxed("b", false, &journal),
    ];
    let cancel = CancellationToken::new();
    let ctx = StepContext {
        ui: &SilentUi,
        vm: &IdleVm,
        cancel: &cancel,
    };

    run_steps(&steps, &ctx).await.unwrap();

    assert_eq!(
        entries(&journal),
        vec!["run a", "run b", "cleanup b", "cleanup a"]
    );
}

#[tokio::test]
async fn test_halt_skips_remaining_steps_but_cleans_up_started_ones() {
    let journal = Journal::default();
    let steps = vec![
        RecordingStep::boxed("a", false, &journal),
        RecordingStep::boxed("b", true, &journal),
        RecordingStep::boxed("c", false, &journal),
    ];
    let cancel = CancellationToken::new();
    let ctx = StepContext {
        ui: &SilentUi,
        vm: &IdleVm,
        cancel: &cancel,
    };

    let err = run_steps(&steps, &ctx).await.unwrap_err();

    assert_eq!(err.to_string(), "b failed");
    assert_eq!(
        entries(&journal),
        vec!["run a", "run b", "cleanup b", "cleanup a"]
    );
}

#[tokio::test]
async fn test_cancelled_pipeline_runs_nothing() {
    let journal = Journal::default();
    let steps = vec![RecordingStep::boxed("a", false, &journal)];
    let cancel = CancellationToken::new();
    cancel.cancel();
    let ctx = StepContext {
        ui: &SilentUi,
        vm: &IdleVm,
        cancel: &cancel,
    };

    let err = run_steps(&steps, &ctx).await.unwrap_err();

    assert!(matches!(err, VtemplateError::Cancelled));
    assert!(entries(&journal).is_empty());
}

#[tokio::test]
async fn test_step_without_cleanup_hook() {
    let steps: Vec<Box<dyn Step>> = vec![Box::new(PlainStep)];
    let cancel = CancellationToken::new();
    let ctx = StepContext {
        ui: &SilentUi,
        vm: &IdleVm,
        cancel: &cancel,
    };

    assert!(run_steps(&steps, &ctx).await.is_ok());
}

#[tokio::test]
async fn test_empty_pipeline_succeeds() {
    let cancel = CancellationToken::new();
    let ctx = StepContext {
        ui: &SilentUi,
        vm: &IdleVm,
        cancel: &cancel,
    };

    assert!(run_steps(&[], &ctx).await.is_ok());
}
