use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all vtemplate operations.
#[derive(Debug, Error, Diagnostic)]
pub enum VtemplateError {
    /// A single configuration problem, reported by a `prepare` pass.
    #[error("{message}")]
    Config { message: String },

    /// One or more configuration problems collected in a single pass.
    #[error("Invalid configuration:{}", bullet_list(.messages))]
    #[diagnostic(help("Check your build configuration file"))]
    Validation { messages: Vec<String> },

    /// Network request could not be sent or its response could not be read.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The vSphere API answered with a non-success status.
    #[error("vSphere API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Login to vCenter was rejected.
    #[error("Authentication failed: {message}")]
    #[diagnostic(help("Check the vSphere username and password"))]
    Authentication { message: String },

    /// A named inventory object (VM, cluster, library, ...) does not exist.
    #[error("{kind} '{name}' not found")]
    NotFound { kind: String, name: String },

    /// The operation was aborted through its cancellation token.
    #[error("Operation cancelled")]
    Cancelled,

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

impl VtemplateError {
    /// Fold a batch of `prepare` errors into a single [`VtemplateError::Validation`].
    ///
    /// Returns `None` when the batch is empty.
    pub fn from_batch(errors: Vec<VtemplateError>) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }
        Some(Self::Validation {
            messages: errors.iter().map(|e| e.to_string()).collect(),
        })
    }
}

fn bullet_list(messages: &[String]) -> String {
    messages.iter().map(|m| format!("\n  - {m}")).collect()
}

/// Convenience alias for `miette::Result<T>`.
pub type VtemplateResult<T> = miette::Result<T>;
