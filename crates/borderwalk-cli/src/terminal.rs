//! ANSI styling for the text output format.

const RESET: &str = "\x1b[0m";
const START_TAG: &str = "\x1b[1;7;32m";
const END_TAG: &str = "\x1b[1;7;35m";
const EMPHASIS: &str = "\x1b[1;97m";
const DIM: &str = "\x1b[90m";
const ACCEPTED: &str = "\x1b[32m";

/// Escape sequences used when printing routes. Every field is empty when
/// colour is switched off, so callers can interpolate unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    /// Tag in front of the first country.
    pub tag_start: &'static str,
    /// Tag in front of the last country.
    pub tag_end: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub green: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: RESET,
            tag_start: START_TAG,
            tag_end: END_TAG,
            white_bold: EMPHASIS,
            gray: DIM,
            green: ACCEPTED,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_start: "",
            tag_end: "",
            white_bold: "",
            gray: "",
            green: "",
        }
    }

    /// Coloured unless the environment asks otherwise.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

/// False when `NO_COLOR` is set (any value) or `TERM` is `dumb`.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    !matches!(std::env::var("TERM"), Ok(term) if term.eq_ignore_ascii_case("dumb"))
}
