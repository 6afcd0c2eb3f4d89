//! Colored status output on stderr.
//!
//! Command results go to stdout; everything printed here is for the user
//! watching the terminal.

use console::{Style, Term};

/// Status line writer for the `lt` commands.
pub(crate) struct Output {
    term: Term,
    success: Style,
    warning: Style,
    error: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
        }
    }

    /// Plain status line, e.g. an empty field selection.
    pub(crate) fn info(&self, msg: &str) {
        self.line(&Style::new(), msg);
    }

    /// A saved configuration change.
    pub(crate) fn success(&self, msg: &str) {
        self.line(&self.success, msg);
    }

    /// Something the user asked for had no effect.
    pub(crate) fn warning(&self, msg: &str) {
        self.line(&self.warning, msg);
    }

    /// A failed command.
    pub(crate) fn error(&self, msg: &str) {
        self.line(&self.error, msg);
    }

    fn line(&self, style: &Style, msg: &str) {
        // Status lines are best effort; a closed stderr must not fail a command.
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }
}
