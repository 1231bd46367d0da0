//! Publish command implementation.

use std::path::Path;

use miette::Result;
use tokio_util::sync::CancellationToken;
use vtemplate_ops::ops_publish;
use vtemplate_util::progress::ConsoleUi;

pub async fn exec(config_path: &Path, password: Option<&str>) -> Result<()> {
    let config = vtemplate_ops::ops_check::check(config_path)?;
    let password = ops_publish::resolve_password(password, &config);

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, cancelling");
            on_interrupt.cancel();
        }
    });

    let ui = ConsoleUi::new("Publishing");
    ops_publish::publish(&config, password, &ui, &cancel).await
}
