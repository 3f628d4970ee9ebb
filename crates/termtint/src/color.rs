//! Color intent parsing and resolution.
//!
//! The three-way `auto`/`never`/`always` choice is parsed at the option
//! boundary and resolved exactly once per invocation into a single
//! "colorful" boolean. `Always` and `Never` let the operator override
//! detection in either direction; `Auto` defers to the terminal probe.

use std::fmt;
use std::str::FromStr;

use clap::{Args, ValueEnum};
use thiserror::Error;

use crate::style::Formatting;
use crate::terminal::{ProcessTerminal, Terminal};

/// Error for a color keyword outside `auto`, `never`, `always`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color choice '{0}' (expected one of: auto, never, always)")]
pub struct ParseColorChoiceError(String);

/// User intent for colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color only when stdout is an interactive, non-dumb terminal
    #[default]
    Auto,
    /// Never color
    Never,
    /// Always color, even when piped
    Always,
}

impl ColorChoice {
    /// Resolve to a colorful decision against the real process terminal.
    pub fn is_colorful(self) -> bool {
        self.resolve(&ProcessTerminal)
    }

    /// Resolve to a colorful decision against an arbitrary probe.
    ///
    /// `Always` and `Never` ignore the probe entirely.
    pub fn resolve(self, terminal: &impl Terminal) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => terminal.is_interactive() && !terminal.is_dumb(),
        }
    }

    /// The keyword this choice parses from.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Never => "never",
            Self::Always => "always",
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorChoice {
    type Err = ParseColorChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else if s.eq_ignore_ascii_case("never") {
            Ok(Self::Never)
        } else if s.eq_ignore_ascii_case("always") {
            Ok(Self::Always)
        } else {
            Err(ParseColorChoiceError(s.to_owned()))
        }
    }
}

/// The `--color` option, ready to `flatten` into a clap parser.
#[derive(Debug, Clone, Copy, Args)]
pub struct ColorArgs {
    /// Apply terminal colors and formatting
    #[arg(
        long,
        value_name = "WHEN",
        value_enum,
        ignore_case = true,
        default_value_t = ColorChoice::Auto
    )]
    pub color: ColorChoice,
}

impl ColorArgs {
    /// Resolve the parsed intent into per-invocation color options.
    pub fn options(&self) -> ColorOptions {
        ColorOptions::resolve(self.color)
    }
}

/// Resolved color settings for one invocation.
///
/// Built once during option evaluation, immutable afterwards, and shared
/// read-only with every output-producing collaborator.
#[derive(Debug, Clone)]
pub struct ColorOptions {
    /// The intent the operator asked for.
    pub choice: ColorChoice,
    /// The single resolved decision.
    pub colorful: bool,
    /// The styling vocabulary derived from `colorful`.
    pub formatting: Formatting,
}

impl ColorOptions {
    /// Resolve `choice` against the real process terminal.
    pub fn resolve(choice: ColorChoice) -> Self {
        Self::resolve_with(choice, &ProcessTerminal)
    }

    /// Resolve `choice` against an arbitrary probe.
    pub fn resolve_with(choice: ColorChoice, terminal: &impl Terminal) -> Self {
        let colorful = choice.resolve(terminal);
        Self {
            choice,
            colorful,
            formatting: Formatting::new(colorful),
        }
    }
}
