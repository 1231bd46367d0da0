use std::io::Write;

use console::Style;

/// Print a Cargo-style status line: `   Importing ubuntu-base`
///
/// The `label` is right-padded to 12 characters and printed in bold green,
/// followed by the `message` in the default terminal colour.
pub fn status(label: &str, message: &str) {
    let green_bold = Style::new().green().bold();
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        green_bold.apply_to(label),
    );
}

/// Like [`status`] but uses bold cyan for informational (non-action) messages.
pub fn status_info(label: &str, message: &str) {
    let cyan_bold = Style::new().cyan().bold();
    let _ = writeln!(
        std::io::stderr(),
        "{:>12} {message}",
        cyan_bold.apply_to(label),
    );
}

/// Output sink for user-visible progress text.
///
/// Pipeline steps talk to the user only through this trait so they can run
/// under a terminal, a log collector, or a test recorder alike.
pub trait Ui: Send + Sync {
    /// Report progress.
    fn say(&self, message: &str);
}

/// [`Ui`] that writes status lines to stderr.
#[derive(Debug, Clone)]
pub struct ConsoleUi {
    label: String,
}

impl ConsoleUi {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Ui for ConsoleUi {
    fn say(&self, message: &str) {
        status(&self.label, message);
    }
}
