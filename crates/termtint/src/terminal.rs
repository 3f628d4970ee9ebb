//! Terminal capability probing.
//!
//! Process-level facts (the `TERM` environment variable, whether stdout is
//! a TTY) behind a narrow trait, so color resolution can be tested against
//! canned answers instead of real process state.

use std::io::IsTerminal;

/// Read-only view of the terminal the process is attached to.
///
/// Every query is total: an unset variable or a failed probe resolves to
/// `None`/`false`, never to an error. Answers are recomputed on each call,
/// nothing is cached.
pub trait Terminal {
    /// Terminal type from the `TERM` environment variable, if set.
    fn terminal_type(&self) -> Option<String>;

    /// Whether stdout is attached to a terminal device.
    fn is_interactive(&self) -> bool;

    /// Whether the terminal type is `dumb`, compared case-insensitively.
    ///
    /// An unset terminal type is not dumb.
    fn is_dumb(&self) -> bool {
        self.terminal_type()
            .is_some_and(|t| t.eq_ignore_ascii_case("dumb"))
    }
}

/// Probe backed by the real process environment and stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessTerminal;

impl Terminal for ProcessTerminal {
    fn terminal_type(&self) -> Option<String> {
        // A non-unicode value is as good as an unset one.
        std::env::var("TERM").ok()
    }

    fn is_interactive(&self) -> bool {
        std::io::stdout().is_terminal()
    }
}

/// Fixture probe with canned answers.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct FakeTerminal {
    pub terminal_type: Option<&'static str>,
    pub interactive: bool,
}

#[cfg(test)]
impl Terminal for FakeTerminal {
    fn terminal_type(&self) -> Option<String> {
        self.terminal_type.map(str::to_owned)
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
