//! Terminal color negotiation and output styling for CLI tools.
//!
//! This crate decides, once per invocation, whether output should carry
//! ANSI colors and emphasis, and provides a fixed vocabulary of named wrap
//! operations that apply that decision consistently:
//!
//! - **Terminal**: probes for the `TERM` variable and stdout TTY status
//! - **Color**: the `auto`/`never`/`always` intent and its resolution
//! - **Style**: the `Formatting` vocabulary (bulletin, URL, path, quote, ...)
//!
//! # Usage
//!
//! ```ignore
//! use clap::Parser;
//! use termtint::{ColorArgs, ColorOptions};
//!
//! #[derive(Parser)]
//! struct Cli {
//!     #[command(flatten)]
//!     color: ColorArgs,
//! }
//!
//! let cli = Cli::parse();
//! let options = cli.color.options();
//!
//! println!("{}", options.formatting.bulletin_title("Fetching dependencies"));
//! println!("cloning into {}", options.formatting.path("Checkouts/Alamofire"));
//! ```

pub mod color;
pub mod style;
pub mod terminal;

// Re-export core types at crate level
pub use color::{ColorArgs, ColorChoice, ColorOptions, ParseColorChoiceError};
pub use style::Formatting;
pub use terminal::{ProcessTerminal, Terminal};
