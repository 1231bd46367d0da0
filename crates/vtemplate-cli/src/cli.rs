//! CLI argument definitions for vtemplate.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "vtemplate",
    version,
    about = "Publish a vSphere VM as a content library template",
    long_about = "vtemplate takes an already-provisioned vSphere virtual machine and registers it \
                  as a VM template in a named content library, with optional default placement."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging, on top of any `RUST_LOG` filter
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a build configuration and print the resolved destination
    Check {
        /// Build configuration file
        #[arg(short, long, default_value = "vtemplate.toml")]
        config: PathBuf,
    },

    /// Import the configured VM into its content library
    Publish {
        /// Build configuration file
        #[arg(short, long, default_value = "vtemplate.toml")]
        config: PathBuf,
        /// vCenter password (overrides the configuration file)
        #[arg(long, env = "VSPHERE_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
