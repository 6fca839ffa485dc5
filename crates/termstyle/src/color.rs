//! Terminal color types and color profile handling.
//!
//! - [`NoColor`] - The explicit "no color" sentinel
//! - [`Color`] - Hex or ANSI color string
//! - [`AnsiColor`] - ANSI color by number
//! - [`RgbColor`] - 24-bit color
//! - [`AdaptiveColor`] - Light/dark background adaptive colors
//!
//! Every color resolves to an SGR parameter list for a given [`ColorProfile`],
//! downsampling true color to 256 and 16 colors as needed.
//!
//! # Example
//!
//! ```rust
//! use termstyle::{Color, ColorProfile, TerminalColor};
//!
//! let blue = Color::from("#0000ff");
//! assert_eq!(blue.fg_params(ColorProfile::TrueColor, true), "38;2;0;0;255");
//! assert_eq!(blue.fg_params(ColorProfile::Ascii, true), "");
//! ```

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Color profile indicating terminal color capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorProfile {
    /// No color support (1-bit).
    Ascii,
    /// 16 ANSI colors (4-bit).
    Ansi,
    /// 256 colors (8-bit).
    Ansi256,
    /// True color / 16 million colors (24-bit).
    #[default]
    TrueColor,
}

impl ColorProfile {
    /// Returns true if this profile supports the given color depth.
    pub fn supports(&self, other: ColorProfile) -> bool {
        use ColorProfile::*;
        match (self, other) {
            (TrueColor, _) => true,
            (Ansi256, Ansi256 | Ansi | Ascii) => true,
            (Ansi, Ansi | Ascii) => true,
            (Ascii, Ascii) => true,
            _ => false,
        }
    }
}

/// Which half of a cell a color paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Foreground,
    Background,
}

impl Layer {
    fn extended(self) -> u8 {
        match self {
            Layer::Foreground => 38,
            Layer::Background => 48,
        }
    }

    fn basic(self, n: u8) -> u8 {
        match (self, n < 8) {
            (Layer::Foreground, true) => 30 + n,
            (Layer::Foreground, false) => 90 + n - 8,
            (Layer::Background, true) => 40 + n,
            (Layer::Background, false) => 100 + n - 8,
        }
    }
}

/// Trait for types that can be rendered as terminal colors.
///
/// Implementations return bare SGR parameters (e.g. `"38;5;196"`), leaving
/// the escape framing to the styling builder so attributes and colors can share
/// a single sequence.
pub trait TerminalColor: fmt::Debug + Send + Sync {
    /// SGR parameters painting this color as the foreground.
    fn fg_params(&self, profile: ColorProfile, dark_bg: bool) -> String;

    /// SGR parameters painting this color as the background.
    fn bg_params(&self, profile: ColorProfile, dark_bg: bool) -> String;

    /// Whether this is the [`NoColor`] sentinel.
    fn is_no_color(&self) -> bool {
        false
    }

    /// Clone this color into a boxed trait object.
    fn clone_box(&self) -> Box<dyn TerminalColor>;
}

impl Clone for Box<dyn TerminalColor> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// No color - uses the terminal's default colors.
///
/// Distinct from every real color: setting it explicitly records "no color"
/// rather than leaving the rule unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoColor;

impl TerminalColor for NoColor {
    fn fg_params(&self, _profile: ColorProfile, _dark_bg: bool) -> String {
        String::new()
    }

    fn bg_params(&self, _profile: ColorProfile, _dark_bg: bool) -> String {
        String::new()
    }

    fn is_no_color(&self) -> bool {
        true
    }

    fn clone_box(&self) -> Box<dyn TerminalColor> {
        Box::new(*self)
    }
}

/// A color specified by hex string or ANSI number.
///
/// # Examples
///
/// ```rust
/// use termstyle::Color;
///
/// let hex = Color::from("#ff0000");
/// let ansi = Color::from("196");
/// assert!(hex.is_valid() && ansi.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color(pub String);

impl Color {
    /// Create a new color from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Parse as RGB if this is a hex color.
    pub fn as_rgb(&self) -> Option<(u8, u8, u8)> {
        let raw = self.0.trim();
        let s = raw.trim_start_matches('#');
        let has_hash = raw.starts_with('#');
        let has_hex_alpha = s
            .chars()
            .any(|c| c.is_ascii_hexdigit() && !c.is_ascii_digit());

        if !has_hash && !has_hex_alpha {
            return None;
        }
        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some((r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some((r, g, b))
        } else {
            None
        }
    }

    /// Parse as ANSI color number.
    pub fn as_ansi(&self) -> Option<u8> {
        self.0.trim().parse::<u8>().ok()
    }

    /// Returns true if this color is a valid ANSI or hex value.
    pub fn is_valid(&self) -> bool {
        if self.0.trim().is_empty() {
            return false;
        }
        self.as_rgb().is_some() || self.as_ansi().is_some()
    }

    fn params(&self, layer: Layer, profile: ColorProfile) -> String {
        if let Some((r, g, b)) = self.as_rgb() {
            rgb_params(layer, profile, r, g, b)
        } else if let Some(n) = self.as_ansi() {
            ansi_params(layer, profile, n)
        } else {
            String::new()
        }
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ColorVisitor)
    }
}

struct ColorVisitor;

impl<'de> Visitor<'de> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a hex string, ANSI number, or RGB map")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse_color_str(v).map_err(E::custom)
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        parse_color_str(&v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let value = u8::try_from(v)
            .map_err(|_| E::custom(format!("ANSI color must be 0-255, got {v}")))?;
        Ok(Color::new(value.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        if (0..=i64::from(u8::MAX)).contains(&v) {
            Ok(Color::new(v.to_string()))
        } else {
            Err(E::custom(format!("ANSI color must be 0-255, got {v}")))
        }
    }

    fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
        let mut r: Option<u8> = None;
        let mut g: Option<u8> = None;
        let mut b: Option<u8> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "r" | "red" => r = Some(map.next_value()?),
                "g" | "green" => g = Some(map.next_value()?),
                "b" | "blue" => b = Some(map.next_value()?),
                _ => {
                    let _ = map.next_value::<de::IgnoredAny>()?;
                }
            }
        }

        match (r, g, b) {
            (Some(r), Some(g), Some(b)) => Ok(Color::new(format!("#{:02x}{:02x}{:02x}", r, g, b))),
            _ => Err(de::Error::custom("RGB color requires r, g, b fields")),
        }
    }
}

fn parse_color_str(s: &str) -> Result<Color, String> {
    let raw = s.trim();
    if raw.is_empty() {
        return Err("color string is empty".to_string());
    }

    let has_hash = raw.starts_with('#');
    let has_hex_alpha = raw.chars().any(|c| matches!(c, 'a'..='f' | 'A'..='F'));

    if has_hash || has_hex_alpha {
        let hex = raw.trim_start_matches('#');
        let is_hex = hex.chars().all(|c| c.is_ascii_hexdigit());
        if !is_hex || !(hex.len() == 3 || hex.len() == 6) {
            return Err(format!("invalid hex color '{raw}'"));
        }
        let normalized = if has_hash {
            raw.to_string()
        } else {
            format!("#{hex}")
        };
        return Ok(Color::new(normalized));
    }

    if raw.chars().all(|c| c.is_ascii_digit()) {
        let value: u16 = raw
            .parse()
            .map_err(|_| format!("invalid ANSI color '{raw}'"))?;
        let value =
            u8::try_from(value).map_err(|_| format!("ANSI color must be 0-255, got {value}"))?;
        return Ok(Color::new(value.to_string()));
    }

    Err(format!("invalid color '{raw}'"))
}

impl TerminalColor for Color {
    fn fg_params(&self, profile: ColorProfile, _dark_bg: bool) -> String {
        self.params(Layer::Foreground, profile)
    }

    fn bg_params(&self, profile: ColorProfile, _dark_bg: bool) -> String {
        self.params(Layer::Background, profile)
    }

    fn clone_box(&self) -> Box<dyn TerminalColor> {
        Box::new(self.clone())
    }
}

/// An ANSI color by number (0-255).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiColor(pub u8);

impl From<u8> for AnsiColor {
    fn from(n: u8) -> Self {
        Self(n)
    }
}

impl TerminalColor for AnsiColor {
    fn fg_params(&self, profile: ColorProfile, _dark_bg: bool) -> String {
        ansi_params(Layer::Foreground, profile, self.0)
    }

    fn bg_params(&self, profile: ColorProfile, _dark_bg: bool) -> String {
        ansi_params(Layer::Background, profile, self.0)
    }

    fn clone_box(&self) -> Box<dyn TerminalColor> {
        Box::new(*self)
    }
}

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl TerminalColor for RgbColor {
    fn fg_params(&self, profile: ColorProfile, _dark_bg: bool) -> String {
        rgb_params(Layer::Foreground, profile, self.r, self.g, self.b)
    }

    fn bg_params(&self, profile: ColorProfile, _dark_bg: bool) -> String {
        rgb_params(Layer::Background, profile, self.r, self.g, self.b)
    }

    fn clone_box(&self) -> Box<dyn TerminalColor> {
        Box::new(*self)
    }
}

/// A color that adapts based on terminal background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptiveColor {
    /// Color to use on light backgrounds.
    pub light: Color,
    /// Color to use on dark backgrounds.
    pub dark: Color,
}

impl TerminalColor for AdaptiveColor {
    fn fg_params(&self, profile: ColorProfile, dark_bg: bool) -> String {
        if dark_bg {
            self.dark.fg_params(profile, dark_bg)
        } else {
            self.light.fg_params(profile, dark_bg)
        }
    }

    fn bg_params(&self, profile: ColorProfile, dark_bg: bool) -> String {
        if dark_bg {
            self.dark.bg_params(profile, dark_bg)
        } else {
            self.light.bg_params(profile, dark_bg)
        }
    }

    fn clone_box(&self) -> Box<dyn TerminalColor> {
        Box::new(self.clone())
    }
}

// Color conversion helpers

fn rgb_params(layer: Layer, profile: ColorProfile, r: u8, g: u8, b: u8) -> String {
    match profile {
        ColorProfile::Ascii => String::new(),
        ColorProfile::TrueColor => format!("{};2;{r};{g};{b}", layer.extended()),
        ColorProfile::Ansi256 => format!("{};5;{}", layer.extended(), rgb_to_ansi256(r, g, b)),
        ColorProfile::Ansi => layer.basic(rgb_to_ansi16(r, g, b)).to_string(),
    }
}

fn ansi_params(layer: Layer, profile: ColorProfile, n: u8) -> String {
    match profile {
        ColorProfile::Ascii => String::new(),
        ColorProfile::TrueColor | ColorProfile::Ansi256 => {
            format!("{};5;{n}", layer.extended())
        }
        ColorProfile::Ansi if n < 16 => layer.basic(n).to_string(),
        ColorProfile::Ansi => {
            let (r, g, b) = ansi256_to_rgb(n);
            layer.basic(rgb_to_ansi16(r, g, b)).to_string()
        }
    }
}

/// Convert RGB to ANSI 256 color.
pub fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    // Check for grayscale
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return ((r as f64 - 8.0) / 247.0 * 24.0).round() as u8 + 232;
    }

    // Convert to 6x6x6 color cube
    let r_idx = (r as f64 / 255.0 * 5.0).round() as u8;
    let g_idx = (g as f64 / 255.0 * 5.0).round() as u8;
    let b_idx = (b as f64 / 255.0 * 5.0).round() as u8;

    16 + 36 * r_idx + 6 * g_idx + b_idx
}

/// Convert ANSI 256 to RGB.
pub fn ansi256_to_rgb(n: u8) -> (u8, u8, u8) {
    if n < 16 {
        return ANSI_COLORS[n as usize];
    }

    if n >= 232 {
        let gray = (n - 232) * 10 + 8;
        return (gray, gray, gray);
    }

    // 6x6x6 color cube
    let n = n - 16;
    let r = (n / 36) * 51;
    let g = ((n % 36) / 6) * 51;
    let b = (n % 6) * 51;

    (r, g, b)
}

/// Convert RGB to ANSI 16 color by nearest distance.
pub fn rgb_to_ansi16(r: u8, g: u8, b: u8) -> u8 {
    let mut best = 0u8;
    let mut best_dist = u32::MAX;

    for (i, &(ar, ag, ab)) in ANSI_COLORS.iter().enumerate() {
        let dr = (r as i32 - ar as i32).unsigned_abs();
        let dg = (g as i32 - ag as i32).unsigned_abs();
        let db = (b as i32 - ab as i32).unsigned_abs();
        let dist = dr * dr + dg * dg + db * db;

        if dist < best_dist {
            best_dist = dist;
            best = i as u8;
        }
    }

    best
}

/// Standard ANSI 16 colors as RGB.
const ANSI_COLORS: [(u8, u8, u8); 16] = [
    (0, 0, 0),       // Black
    (128, 0, 0),     // Red
    (0, 128, 0),     // Green
    (128, 128, 0),   // Yellow
    (0, 0, 128),     // Blue
    (128, 0, 128),   // Magenta
    (0, 128, 128),   // Cyan
    (192, 192, 192), // White
    (128, 128, 128), // Bright Black
    (255, 0, 0),     // Bright Red
    (0, 255, 0),     // Bright Green
    (255, 255, 0),   // Bright Yellow
    (0, 0, 255),     // Bright Blue
    (255, 0, 255),   // Bright Magenta
    (0, 255, 255),   // Bright Cyan
    (255, 255, 255), // Bright White
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let c = Color::from("#ff0000");
        assert_eq!(c.as_rgb(), Some((255, 0, 0)));

        let c = Color::from("#0f0");
        assert_eq!(c.as_rgb(), Some((0, 255, 0)));
    }

    #[test]
    fn test_color_params_by_profile() {
        let c = Color::from("#ff0000");
        assert_eq!(c.fg_params(ColorProfile::TrueColor, true), "38;2;255;0;0");
        assert_eq!(c.bg_params(ColorProfile::Ansi256, true), "48;5;196");
        assert_eq!(c.fg_params(ColorProfile::Ansi, true), "91");
        assert_eq!(c.fg_params(ColorProfile::Ascii, true), "");
    }

    #[test]
    fn test_ansi_color_params() {
        assert_eq!(AnsiColor(1).fg_params(ColorProfile::Ansi, true), "31");
        assert_eq!(AnsiColor(9).bg_params(ColorProfile::Ansi, true), "101");
        assert_eq!(AnsiColor(200).fg_params(ColorProfile::TrueColor, true), "38;5;200");
    }

    #[test]
    fn test_no_color_sentinel() {
        assert!(NoColor.is_no_color());
        assert!(!Color::from("1").is_no_color());
        assert_eq!(NoColor.fg_params(ColorProfile::TrueColor, true), "");
    }

    #[test]
    fn test_adaptive_color_picks_variant() {
        let c = AdaptiveColor {
            light: Color::from("0"),
            dark: Color::from("15"),
        };
        assert_eq!(c.fg_params(ColorProfile::Ansi256, true), "38;5;15");
        assert_eq!(c.fg_params(ColorProfile::Ansi256, false), "38;5;0");
    }

    #[test]
    fn test_rgb_to_ansi256() {
        let n = rgb_to_ansi256(255, 0, 0);
        assert!((196..=197).contains(&n));

        let n = rgb_to_ansi256(128, 128, 128);
        assert!(n >= 232);
    }

    #[test]
    fn test_ansi256_to_rgb() {
        assert_eq!(ansi256_to_rgb(0), (0, 0, 0));
        assert_eq!(ansi256_to_rgb(15), (255, 255, 255));
    }

    #[test]
    fn test_color_serde_number() {
        let c: Color = serde_json::from_str("196").expect("parse ANSI number");
        assert_eq!(c.as_ansi(), Some(196));
        assert!(c.as_rgb().is_none());
    }

    #[test]
    fn test_color_serde_hex_without_hash() {
        let c: Color = serde_json::from_str("\"ff00ff\"").expect("parse hex string");
        assert_eq!(c.0, "#ff00ff");
    }

    #[test]
    fn test_color_serde_rgb_map() {
        let c: Color =
            serde_json::from_str("{\"r\":255,\"g\":0,\"b\":128}").expect("parse rgb map");
        assert_eq!(c.0, "#ff0080");
    }
}
