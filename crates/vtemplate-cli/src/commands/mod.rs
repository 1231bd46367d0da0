//! Command dispatch and handler modules.

mod check;
mod publish;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Check { config } => check::exec(&config),
        Command::Publish { config, password } => publish::exec(&config, password.as_deref()).await,
    }
}
