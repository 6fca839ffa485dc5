#![forbid(unsafe_code)]
// Allow these clippy lints for API ergonomics and terminal UI code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::enum_glob_use)]
#![allow(clippy::match_like_matches_macro)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::single_match_else)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::new_without_default)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]
#![allow(clippy::items_after_test_module)]

//! # Termstyle
//!
//! Declarative box-model styling for terminal text.
//!
//! A [`Style`] collects rules (colors, text attributes, padding, margins,
//! borders, alignment and size limits) and renders any string, including
//! multi-line, wide-glyph and already-escaped text, into a block of ANSI
//! styled lines:
//! - **Colors**: ANSI, 256-color, true color, and adaptive colors
//! - **Text formatting**: Bold, italic, underline, strikethrough, and more
//! - **Box model**: Padding, margins, borders, and alignment
//! - **Word wrapping** and escape-safe **truncation**
//!
//! ## Quick Start
//!
//! ```rust
//! use termstyle::{Border, Position, Style};
//!
//! let style = Style::new()
//!     .bold()
//!     .foreground("#ff00ff")
//!     .background("#1a1a1a")
//!     .padding([1, 2])
//!     .border(Border::rounded())
//!     .align(Position::Center);
//!
//! println!("{}", style.render("Hello, termstyle!"));
//! ```
//!
//! ## Shorthand
//!
//! Padding, margins, border sides and border colors take one to four values,
//! CSS style:
//!
//! ```rust
//! use termstyle::Style;
//!
//! // All sides
//! let style = Style::new().padding([2]);
//!
//! // Vertical, horizontal
//! let style = Style::new().padding([1, 2]);
//!
//! // Top, horizontal, bottom
//! let style = Style::new().padding([1, 2, 3]);
//!
//! // Top, right, bottom, left (clockwise)
//! let style = Style::new().padding([1, 2, 3, 4]);
//! ```
//!
//! ## Stylesheets
//!
//! Named styles can be loaded from JSON or TOML with [`StyleSheet`].

pub mod border;
pub mod color;
pub mod console;
pub mod position;
mod render;
pub mod renderer;
pub mod rules;
pub mod sgr;
pub mod style;
pub mod stylesheet;
pub mod text;

// Re-exports
pub use border::{Border, BorderEdges};
pub use color::{
    AdaptiveColor, AnsiColor, Color, ColorProfile, NoColor, RgbColor, TerminalColor,
};
pub use console::{ConsoleGate, enable_legacy_windows_ansi};
pub use position::{Position, Sides, which_sides};
pub use renderer::{Renderer, color_profile, default_renderer, has_dark_background};
pub use rules::{PropKey, RuleValue};
pub use sgr::{Attrs, SgrStyle};
pub use style::Style;
pub use stylesheet::{StyleDef, StyleSheet, StyleSheetError};
pub use text::visible_width;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::border::Border;
    pub use crate::color::{AdaptiveColor, Color, ColorProfile, NoColor};
    pub use crate::position::{Position, Sides};
    pub use crate::renderer::Renderer;
    pub use crate::style::Style;
    pub use crate::stylesheet::StyleSheet;
}

/// Create a new empty style.
///
/// This is equivalent to `Style::new()`.
pub fn new_style() -> Style {
    Style::new()
}

/// Get the width of the widest line in a string.
pub fn width(s: &str) -> usize {
    text::get_lines(s).1
}

/// Get the number of lines in a string.
pub fn height(s: &str) -> usize {
    s.split('\n').count()
}
