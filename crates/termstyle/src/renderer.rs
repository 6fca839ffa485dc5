//! Terminal renderer with color profile detection.

use std::sync::OnceLock;

use tracing::debug;

use crate::color::ColorProfile;

/// Global default renderer.
static DEFAULT_RENDERER: OnceLock<Renderer> = OnceLock::new();

/// Terminal capabilities a style renders against.
///
/// Styles without an explicit renderer use [`default_renderer`], which is
/// detected from the environment once per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    color_profile: ColorProfile,
    has_dark_background: bool,
}

impl Renderer {
    /// True color on a dark background.
    pub const DEFAULT: Renderer = Renderer {
        color_profile: ColorProfile::TrueColor,
        has_dark_background: true,
    };

    /// Create a new renderer with default settings.
    pub fn new() -> Self {
        Self::DEFAULT
    }

    /// Create a renderer with a fixed color profile.
    pub fn with_profile(color_profile: ColorProfile) -> Self {
        Self {
            color_profile,
            ..Self::DEFAULT
        }
    }

    /// Detect terminal capabilities from the environment.
    pub fn detect() -> Self {
        let color_profile = detect_color_profile();
        let has_dark_background = detect_dark_background();
        debug!(
            renderer.profile = ?color_profile,
            renderer.dark_background = has_dark_background,
            "Detected terminal capabilities"
        );

        Self {
            color_profile,
            has_dark_background,
        }
    }

    /// Get the color profile.
    pub fn color_profile(&self) -> ColorProfile {
        self.color_profile
    }

    /// Set the color profile.
    pub fn set_color_profile(&mut self, profile: ColorProfile) {
        self.color_profile = profile;
    }

    /// Check if the terminal has a dark background.
    pub fn has_dark_background(&self) -> bool {
        self.has_dark_background
    }

    /// Set the dark background flag.
    pub fn set_has_dark_background(&mut self, dark: bool) {
        self.has_dark_background = dark;
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the process-wide renderer, detecting capabilities on first use.
pub fn default_renderer() -> &'static Renderer {
    DEFAULT_RENDERER.get_or_init(Renderer::detect)
}

/// Detect the terminal's color profile from environment.
fn detect_color_profile() -> ColorProfile {
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return ColorProfile::Ascii;
    }

    if let Ok(colorterm) = std::env::var("COLORTERM") {
        if colorterm == "truecolor" || colorterm == "24bit" {
            return ColorProfile::TrueColor;
        }
    }

    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return ColorProfile::Ascii;
        }
        if term.contains("256color") || term.contains("256-color") {
            return ColorProfile::Ansi256;
        }
        if term.contains("color") || term.starts_with("xterm") || term.starts_with("screen") {
            return ColorProfile::Ansi;
        }
    }

    ColorProfile::TrueColor
}

/// Detect if the terminal has a dark background from `COLORFGBG` ("fg;bg").
fn detect_dark_background() -> bool {
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.rsplit(';').next().and_then(|s| s.parse::<u8>().ok()) {
            // ANSI 0-6 and 8 are the dark half of the palette.
            return bg < 7 || bg == 8;
        }
    }

    true
}

/// Get the current color profile.
pub fn color_profile() -> ColorProfile {
    default_renderer().color_profile()
}

/// Check if the terminal has a dark background.
pub fn has_dark_background() -> bool {
    default_renderer().has_dark_background()
}
