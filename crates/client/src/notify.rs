//! User-facing notices and confirmation prompts.
//!
//! Coordinators decide what to say; implementations decide how to present
//! it. The terminal implementation prompts on stdin and prints notices.

use dialoguer::Confirm;

/// Notices and confirmations surfaced during a workflow.
pub trait Notify {
    /// Ask a yes/no question; `false` means declined.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Neutral notice.
    fn info(&mut self, title: &str, text: &str);

    /// Positive outcome notice.
    fn success(&mut self, title: &str, text: &str);

    /// Failure notice.
    fn error(&mut self, title: &str, text: &str);
}

/// Terminal notifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotify {
    /// Answer every confirmation with yes (`--yes`).
    pub assume_yes: bool,
    /// Suppress info and success notices; errors always print.
    pub quiet: bool,
}

impl TerminalNotify {
    pub fn new(assume_yes: bool, quiet: bool) -> Self {
        Self { assume_yes, quiet }
    }
}

impl Notify for TerminalNotify {
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        // A prompt that cannot be shown (no tty) counts as declined.
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }

    fn info(&mut self, title: &str, text: &str) {
        if !self.quiet {
            println!("{title}: {text}");
        }
    }

    fn success(&mut self, title: &str, text: &str) {
        if !self.quiet {
            println!("{title} {text}");
        }
    }

    fn error(&mut self, title: &str, text: &str) {
        eprintln!("{title}: {text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assume_yes_skips_the_prompt() {
        let mut notify = TerminalNotify::new(true, false);
        assert!(notify.confirm("Do it?"));
    }
}
