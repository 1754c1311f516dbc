use std::io::{BufRead, IsTerminal, Write};
use std::sync::OnceLock;

use deck_sync::Confirm;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let is_tty = std::io::stdout().is_terminal();
    let table_color = is_tty
        && flags.format == OutputFormat::Table
        && !flags.quiet
        && std::env::var_os("NO_COLOR").is_none();

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        table_color,
        term_width,
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        term_width: None,
    })
}

/// Confirmation on the terminal, or `--yes`.
///
/// Without `--yes`, a non-interactive stdin declines rather than blocking.
#[derive(Clone, Copy, Debug)]
pub struct TerminalConfirm {
    assume_yes: bool,
}

impl TerminalConfirm {
    #[must_use]
    pub const fn new(flags: &GlobalFlags) -> Self {
        Self {
            assume_yes: flags.yes,
        }
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            tracing::warn!("stdin is not a terminal; pass --yes to confirm");
            return false;
        }

        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "{prompt} [y/N] ");
        let _ = stderr.flush();

        let mut answer = String::new();
        if stdin.lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
