//! The styling vocabulary applied to command output.
//!
//! `Formatting` is built once from the resolved colorful decision. Every
//! operation either applies one fixed style or passes the string through
//! unchanged, so callers never branch on color support themselves.

use owo_colors::{OwoColorize, Style};

/// One style per vocabulary operation. Entries must stay pairwise distinct
/// so differently-styled runs never look alike.
mod styles {
    use owo_colors::Style;

    pub(super) fn bulletin() -> Style {
        Style::new().bold().blue()
    }

    pub(super) fn url() -> Style {
        Style::new().underline()
    }

    pub(super) fn project_name() -> Style {
        Style::new().bold()
    }

    pub(super) fn path() -> Style {
        Style::new().yellow()
    }

    pub(super) fn quote() -> Style {
        Style::new().green()
    }
}

/// Wrap `text` in `style` or pass it through, depending on `colorful`.
fn wrap(colorful: bool, style: Style, text: &str) -> String {
    if colorful {
        text.style(style).to_string()
    } else {
        text.to_owned()
    }
}

/// Named text decorations, resolved once per invocation.
///
/// Decorations do not nest: apply exactly one operation per logical run
/// of text.
#[derive(Debug, Clone)]
pub struct Formatting {
    colorful: bool,
    /// Bulletin-styled `"***"` with a trailing space.
    pub bullets: String,
}

impl Formatting {
    /// Default quotation mark for [`Formatting::quote`].
    pub const QUOTATION_MARK: &'static str = "\"";

    pub fn new(colorful: bool) -> Self {
        Self {
            colorful,
            bullets: format!("{} ", wrap(colorful, styles::bulletin(), "***")),
        }
    }

    /// Whether this vocabulary decorates at all.
    pub fn colorful(&self) -> bool {
        self.colorful
    }

    /// Bold blue emphasis for top-level announcements.
    pub fn bulletin(&self, text: &str) -> String {
        wrap(self.colorful, styles::bulletin(), text)
    }

    /// Wraps `text` in bullets, one space of padding, and bulletin emphasis.
    pub fn bulletin_title(&self, text: &str) -> String {
        self.bulletin(&format!("*** {text} ***"))
    }

    /// Underline emphasis for URLs.
    pub fn url(&self, text: &str) -> String {
        wrap(self.colorful, styles::url(), text)
    }

    /// Bold emphasis for project names.
    pub fn project_name(&self, text: &str) -> String {
        wrap(self.colorful, styles::project_name(), text)
    }

    /// Yellow emphasis for filesystem paths.
    pub fn path(&self, text: &str) -> String {
        wrap(self.colorful, styles::path(), text)
    }

    /// Wraps `text` in double quotes and green emphasis.
    pub fn quote(&self, text: &str) -> String {
        self.quote_with(text, Self::QUOTATION_MARK)
    }

    /// Wraps `text` in `mark` on both sides and green emphasis.
    ///
    /// `mark` may be any string, including empty or multi-character.
    pub fn quote_with(&self, text: &str, mark: &str) -> String {
        wrap(self.colorful, styles::quote(), &format!("{mark}{text}{mark}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Formatting {
        Formatting::new(false)
    }

    fn colorful() -> Formatting {
        Formatting::new(true)
    }

    #[test]
    fn test_plain_passes_strings_through() {
        let f = plain();
        assert_eq!(f.bulletin("hello"), "hello");
        assert_eq!(f.url("https://example.com"), "https://example.com");
        assert_eq!(f.project_name("Alamofire"), "Alamofire");
        assert_eq!(f.path("src/main"), "src/main");
    }

    #[test]
    fn test_plain_bullets_and_title() {
        let f = plain();
        assert_eq!(f.bullets, "*** ");
        assert_eq!(f.bulletin_title("Downloading"), "*** Downloading ***");
    }

    #[test]
    fn test_plain_quote_wraps_in_marks() {
        let f = plain();
        assert_eq!(f.quote("hello"), "\"hello\"");
        assert_eq!(f.quote(""), "\"\"");
        assert_eq!(f.quote_with("hello", ">"), ">hello>");
        assert_eq!(f.quote_with("", ">"), ">>");
        assert_eq!(f.quote_with("body", "''"), "''body''");
    }

    #[test]
    fn test_colorful_output_contains_input() {
        let f = colorful();
        for styled in [f.bulletin("x"), f.url("x"), f.project_name("x"), f.path("x")] {
            assert!(styled.contains('x'));
            assert_ne!(styled, "x");
        }
        let quoted = f.quote("x");
        assert!(quoted.contains("\"x\""));
        assert_ne!(quoted, "\"x\"");
    }

    #[test]
    fn test_colorful_styles_are_pairwise_distinct() {
        let f = colorful();
        let outputs = [
            f.bulletin("x"),
            f.url("x"),
            f.project_name("x"),
            f.path("x"),
            f.quote_with("x", ""),
        ];
        for (i, a) in outputs.iter().enumerate() {
            for b in &outputs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_bulletin_title_matches_bulletin_of_padded_text() {
        for colorful in [false, true] {
            let f = Formatting::new(colorful);
            assert_eq!(f.bulletin_title("title"), f.bulletin("*** title ***"));
        }
    }

    #[test]
    fn test_colorful_bullets_are_precomputed_bulletin() {
        let f = colorful();
        assert_eq!(f.bullets, format!("{} ", f.bulletin("***")));
    }

    #[test]
    fn test_styling_is_deterministic() {
        let f = colorful();
        assert_eq!(f.path("src/main"), f.path("src/main"));
        assert_eq!(f.quote("a"), f.quote("a"));
    }
}
