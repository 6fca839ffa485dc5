//! SGR (Select Graphic Rendition) sequence builder.
//!
//! An [`SgrStyle`] is a resolved combination of text attributes and colors.
//! Colors are resolved against a [`ColorProfile`] when they are added, so a
//! built style is just the parameter list it will emit.
//!
//! ```rust
//! use termstyle::{Attrs, Color, ColorProfile, SgrStyle};
//!
//! let style = SgrStyle::new()
//!     .attrs(Attrs::BOLD)
//!     .foreground(&Color::from("1"), ColorProfile::Ansi, true);
//! assert_eq!(style.styled("hi"), "\x1b[1;31mhi\x1b[0m");
//! ```

use bitflags::bitflags;

use crate::color::{ColorProfile, TerminalColor};

/// Control sequence introducer.
pub const CSI: &str = "\x1b[";

/// Sequence resetting every attribute and color.
pub const RESET: &str = "\x1b[0m";

bitflags! {
    /// Text attributes, one bit per SGR attribute code.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attrs: u8 {
        const BOLD = 1 << 0;
        const FAINT = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const REVERSE = 1 << 5;
        const STRIKETHROUGH = 1 << 6;
    }
}

/// SGR codes in emission order.
const ATTR_CODES: [(Attrs, &str); 7] = [
    (Attrs::BOLD, "1"),
    (Attrs::FAINT, "2"),
    (Attrs::ITALIC, "3"),
    (Attrs::UNDERLINE, "4"),
    (Attrs::BLINK, "5"),
    (Attrs::REVERSE, "7"),
    (Attrs::STRIKETHROUGH, "9"),
];

/// A resolved set of attributes and colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SgrStyle {
    attrs: Attrs,
    fg: String,
    bg: String,
}

impl SgrStyle {
    /// An empty style; styling with it is the identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add text attributes.
    pub fn attrs(mut self, attrs: Attrs) -> Self {
        self.attrs |= attrs;
        self
    }

    /// Remove text attributes.
    pub fn without(mut self, attrs: Attrs) -> Self {
        self.attrs.remove(attrs);
        self
    }

    /// Set the foreground color. [`NoColor`](crate::NoColor) leaves it unset.
    pub fn foreground(
        mut self,
        color: &dyn TerminalColor,
        profile: ColorProfile,
        dark_bg: bool,
    ) -> Self {
        if !color.is_no_color() {
            self.fg = color.fg_params(profile, dark_bg);
        }
        self
    }

    /// Set the background color. [`NoColor`](crate::NoColor) leaves it unset.
    pub fn background(
        mut self,
        color: &dyn TerminalColor,
        profile: ColorProfile,
        dark_bg: bool,
    ) -> Self {
        if !color.is_no_color() {
            self.bg = color.bg_params(profile, dark_bg);
        }
        self
    }

    /// The active attributes.
    pub fn attributes(&self) -> Attrs {
        self.attrs
    }

    /// True if this style emits nothing.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty() && self.fg.is_empty() && self.bg.is_empty()
    }

    /// The opening sequence, or an empty string for an empty style.
    pub fn sequence(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut params: Vec<&str> = ATTR_CODES
            .iter()
            .filter(|(attr, _)| self.attrs.contains(*attr))
            .map(|(_, code)| *code)
            .collect();
        if !self.fg.is_empty() {
            params.push(&self.fg);
        }
        if !self.bg.is_empty() {
            params.push(&self.bg);
        }

        format!("{CSI}{}m", params.join(";"))
    }

    /// Wrap `s` in this style's sequence and a reset.
    pub fn styled(&self, s: &str) -> String {
        if self.is_empty() || s.is_empty() {
            return s.to_string();
        }
        format!("{}{s}{RESET}", self.sequence())
    }
}
