//! Style definition and builder.
//!
//! A [`Style`] is a sparse set of rules keyed by [`PropKey`]. Every setter
//! consumes the style and returns the updated value, so styles compose as
//! plain values:
//!
//! ```rust
//! use termstyle::{Border, Position, Style};
//!
//! let base = Style::new().bold().foreground("#ff0000");
//! let boxed = Style::new()
//!     .border(Border::rounded())
//!     .padding([0, 1])
//!     .align(Position::Center)
//!     .inherit(&base);
//!
//! assert!(boxed.get_as_bool(termstyle::PropKey::Bold));
//! assert_eq!(boxed.get_as_int(termstyle::PropKey::PaddingLeft), 1);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::border::Border;
use crate::color::{Color, NoColor, TerminalColor};
use crate::position::{Position, Sides, which_sides};
use crate::renderer::{Renderer, default_renderer};
use crate::rules::{PropKey, RuleValue};

const PADDING_KEYS: [PropKey; 4] = [
    PropKey::PaddingTop,
    PropKey::PaddingRight,
    PropKey::PaddingBottom,
    PropKey::PaddingLeft,
];

const MARGIN_KEYS: [PropKey; 4] = [
    PropKey::MarginTop,
    PropKey::MarginRight,
    PropKey::MarginBottom,
    PropKey::MarginLeft,
];

pub(crate) const BORDER_SIDE_KEYS: [PropKey; 4] = [
    PropKey::BorderTop,
    PropKey::BorderRight,
    PropKey::BorderBottom,
    PropKey::BorderLeft,
];

pub(crate) const BORDER_FG_KEYS: [PropKey; 4] = [
    PropKey::BorderTopForeground,
    PropKey::BorderRightForeground,
    PropKey::BorderBottomForeground,
    PropKey::BorderLeftForeground,
];

pub(crate) const BORDER_BG_KEYS: [PropKey; 4] = [
    PropKey::BorderTopBackground,
    PropKey::BorderRightBackground,
    PropKey::BorderBottomBackground,
    PropKey::BorderLeftBackground,
];

static NO_BORDER: Border = Border::none();

/// A terminal style definition.
#[derive(Debug, Clone, Default)]
pub struct Style {
    /// Explicitly set rules. Absent keys resolve to typed defaults.
    rules: HashMap<PropKey, RuleValue>,
    /// Underlying string value (for the Display impl).
    value: String,
    /// Renderer reference.
    renderer: Option<Arc<Renderer>>,
}

impl Style {
    /// Creates a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the underlying string value for this style.
    pub fn set_string(mut self, s: impl Into<String>) -> Self {
        self.value = s.into();
        self
    }

    /// Get the underlying string value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the renderer to use.
    pub fn renderer(mut self, r: Arc<Renderer>) -> Self {
        self.renderer = Some(r);
        self
    }

    /// The renderer this style resolves colors against.
    pub fn get_renderer(&self) -> &Renderer {
        match self.renderer.as_deref() {
            Some(r) => r,
            None => default_renderer(),
        }
    }

    // ==================== Rule Store ====================

    /// Store a rule. Integer values are clamped to zero.
    pub fn set(mut self, key: PropKey, value: impl Into<RuleValue>) -> Self {
        self.put(key, value.into());
        self
    }

    /// Remove a rule, returning it to its default.
    pub fn unset(mut self, key: PropKey) -> Self {
        self.rules.remove(&key);
        self
    }

    fn put(&mut self, key: PropKey, value: RuleValue) {
        self.rules.insert(key, value.clamped());
    }

    fn set_sides<T: Into<RuleValue>>(mut self, keys: [PropKey; 4], sides: Sides<T>) -> Self {
        let [top, right, bottom, left] = keys;
        self.put(top, sides.top.into());
        self.put(right, sides.right.into());
        self.put(bottom, sides.bottom.into());
        self.put(left, sides.left.into());
        self
    }

    /// Check if a rule is explicitly set.
    pub fn is_set(&self, key: PropKey) -> bool {
        self.rules.contains_key(&key)
    }

    /// Number of explicitly set rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// A boolean rule, `false` when unset.
    pub fn get_as_bool(&self, key: PropKey) -> bool {
        self.get_bool_or(key, false)
    }

    /// A boolean rule, `default` when unset.
    pub fn get_bool_or(&self, key: PropKey, default: bool) -> bool {
        match self.rules.get(&key) {
            Some(RuleValue::Bool(b)) => *b,
            _ => default,
        }
    }

    /// An integer rule, `0` when unset.
    pub fn get_as_int(&self, key: PropKey) -> usize {
        match self.rules.get(&key) {
            Some(RuleValue::Int(n)) => usize::try_from(*n).unwrap_or_default(),
            _ => 0,
        }
    }

    /// A color rule, [`NoColor`] when unset.
    pub fn get_as_color(&self, key: PropKey) -> &dyn TerminalColor {
        match self.rules.get(&key) {
            Some(RuleValue::Color(c)) => c.as_ref(),
            _ => &NoColor,
        }
    }

    /// A position rule, [`Position::Top`] when unset.
    pub fn get_as_position(&self, key: PropKey) -> Position {
        match self.rules.get(&key) {
            Some(RuleValue::Position(p)) => *p,
            _ => Position::default(),
        }
    }

    /// A border rule, [`Border::none`] when unset.
    pub fn get_as_border(&self, key: PropKey) -> &Border {
        match self.rules.get(&key) {
            Some(RuleValue::Border(b)) => b,
            _ => &NO_BORDER,
        }
    }

    // ==================== Composition ====================

    /// An independent copy of this style.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Take every rule from `other` that this style does not set itself.
    ///
    /// Padding and margins are never inherited. An inherited background also
    /// becomes the margin background unless either style already has one.
    /// A background this style sets itself is not inherited, so the margin
    /// background is left alone.
    pub fn inherit(mut self, other: &Style) -> Self {
        for (key, value) in &other.rules {
            if key.is_spacing() {
                continue;
            }

            if *key == PropKey::Background
                && !self.is_set(PropKey::Background)
                && !self.is_set(PropKey::MarginBackground)
                && !other.is_set(PropKey::MarginBackground)
            {
                self.rules.insert(PropKey::MarginBackground, value.clone());
            }

            self.rules.entry(*key).or_insert_with(|| value.clone());
        }
        self
    }

    // ==================== Boolean Attributes ====================

    /// Enable bold text.
    pub fn bold(self) -> Self {
        self.set(PropKey::Bold, true)
    }

    /// Enable italic text.
    pub fn italic(self) -> Self {
        self.set(PropKey::Italic, true)
    }

    /// Enable underlined text.
    pub fn underline(self) -> Self {
        self.set(PropKey::Underline, true)
    }

    /// Enable strikethrough text.
    pub fn strikethrough(self) -> Self {
        self.set(PropKey::Strikethrough, true)
    }

    /// Swap foreground and background colors.
    pub fn reverse(self) -> Self {
        self.set(PropKey::Reverse, true)
    }

    /// Enable blinking text.
    pub fn blink(self) -> Self {
        self.set(PropKey::Blink, true)
    }

    /// Enable faint (dim) text.
    pub fn faint(self) -> Self {
        self.set(PropKey::Faint, true)
    }

    /// Set whether to underline spaces. Defaults to on when underlining.
    pub fn underline_spaces(self, v: bool) -> Self {
        self.set(PropKey::UnderlineSpaces, v)
    }

    /// Set whether to strike through spaces. Defaults to on with strikethrough.
    pub fn strikethrough_spaces(self, v: bool) -> Self {
        self.set(PropKey::StrikethroughSpaces, v)
    }

    /// Set whether padding and alignment fill carry the background color.
    /// Defaults to on.
    pub fn color_whitespace(self, v: bool) -> Self {
        self.set(PropKey::ColorWhitespace, v)
    }

    // ==================== Colors ====================

    fn set_color(self, key: PropKey, color: impl TerminalColor + 'static) -> Self {
        let color: Box<dyn TerminalColor> = Box::new(color);
        self.set(key, color)
    }

    /// Set the foreground color.
    pub fn foreground(self, color: impl Into<String>) -> Self {
        self.set_color(PropKey::Foreground, Color::new(color))
    }

    /// Set the foreground to a specific color type.
    pub fn foreground_color(self, color: impl TerminalColor + 'static) -> Self {
        self.set_color(PropKey::Foreground, color)
    }

    /// Explicitly clear the foreground color.
    pub fn no_foreground(self) -> Self {
        self.set_color(PropKey::Foreground, NoColor)
    }

    /// Set the background color.
    pub fn background(self, color: impl Into<String>) -> Self {
        self.set_color(PropKey::Background, Color::new(color))
    }

    /// Set the background to a specific color type.
    pub fn background_color(self, color: impl TerminalColor + 'static) -> Self {
        self.set_color(PropKey::Background, color)
    }

    /// Explicitly clear the background color.
    pub fn no_background(self) -> Self {
        self.set_color(PropKey::Background, NoColor)
    }

    // ==================== Dimensions ====================

    /// Set the block width. Text wraps to fit inside the horizontal padding.
    pub fn width(self, w: i32) -> Self {
        self.set(PropKey::Width, w)
    }

    /// Set the minimum block height.
    pub fn height(self, h: i32) -> Self {
        self.set(PropKey::Height, h)
    }

    /// Truncate every rendered line to this many columns.
    pub fn max_width(self, w: i32) -> Self {
        self.set(PropKey::MaxWidth, w)
    }

    /// Keep at most this many rendered lines.
    pub fn max_height(self, h: i32) -> Self {
        self.set(PropKey::MaxHeight, h)
    }

    // ==================== Alignment ====================

    /// Set horizontal alignment.
    pub fn align(self, p: Position) -> Self {
        self.set(PropKey::Align, p)
    }

    /// Set horizontal alignment.
    pub fn align_horizontal(self, p: Position) -> Self {
        self.align(p)
    }

    /// Set where height fill goes relative to the content.
    pub fn align_vertical(self, p: Position) -> Self {
        self.set(PropKey::AlignVertical, p)
    }

    // ==================== Padding ====================

    /// Set padding with CSS shorthand (1 to 4 values).
    ///
    /// Any other count leaves the padding unchanged.
    pub fn padding(self, values: impl AsRef<[i32]>) -> Self {
        match which_sides(values.as_ref()) {
            Some(sides) => self.set_sides(PADDING_KEYS, sides),
            None => self,
        }
    }

    /// Set top padding.
    pub fn padding_top(self, n: i32) -> Self {
        self.set(PropKey::PaddingTop, n)
    }

    /// Set right padding.
    pub fn padding_right(self, n: i32) -> Self {
        self.set(PropKey::PaddingRight, n)
    }

    /// Set bottom padding.
    pub fn padding_bottom(self, n: i32) -> Self {
        self.set(PropKey::PaddingBottom, n)
    }

    /// Set left padding.
    pub fn padding_left(self, n: i32) -> Self {
        self.set(PropKey::PaddingLeft, n)
    }

    // ==================== Margin ====================

    /// Set margins with CSS shorthand (1 to 4 values).
    ///
    /// Any other count leaves the margins unchanged.
    pub fn margin(self, values: impl AsRef<[i32]>) -> Self {
        match which_sides(values.as_ref()) {
            Some(sides) => self.set_sides(MARGIN_KEYS, sides),
            None => self,
        }
    }

    /// Set top margin.
    pub fn margin_top(self, n: i32) -> Self {
        self.set(PropKey::MarginTop, n)
    }

    /// Set right margin.
    pub fn margin_right(self, n: i32) -> Self {
        self.set(PropKey::MarginRight, n)
    }

    /// Set bottom margin.
    pub fn margin_bottom(self, n: i32) -> Self {
        self.set(PropKey::MarginBottom, n)
    }

    /// Set left margin.
    pub fn margin_left(self, n: i32) -> Self {
        self.set(PropKey::MarginLeft, n)
    }

    /// Set the margin background color.
    pub fn margin_background(self, color: impl Into<String>) -> Self {
        self.set_color(PropKey::MarginBackground, Color::new(color))
    }

    /// Set the margin background to a specific color type.
    pub fn margin_background_color(self, color: impl TerminalColor + 'static) -> Self {
        self.set_color(PropKey::MarginBackground, color)
    }

    // ==================== Border ====================

    /// Set the border with all four sides visible.
    pub fn border(self, border: Border) -> Self {
        self.border_with_sides(border, &[])
    }

    /// Set the border and which sides are visible (CSS shorthand).
    ///
    /// A side count other than 1 to 4 turns on every side.
    pub fn border_with_sides(self, border: Border, sides: &[bool]) -> Self {
        let sides = which_sides(sides).unwrap_or(Sides::all(true));
        self.set(PropKey::BorderStyle, border)
            .set_sides(BORDER_SIDE_KEYS, sides)
    }

    /// Set the border glyphs only.
    ///
    /// With no side explicitly toggled, every side renders.
    pub fn border_style(self, border: Border) -> Self {
        self.set(PropKey::BorderStyle, border)
    }

    /// Set which border sides are visible (CSS shorthand).
    pub fn border_sides(self, sides: impl AsRef<[bool]>) -> Self {
        match which_sides(sides.as_ref()) {
            Some(sides) => self.set_sides(BORDER_SIDE_KEYS, sides),
            None => self,
        }
    }

    /// Show or hide the top border.
    pub fn border_top(self, v: bool) -> Self {
        self.set(PropKey::BorderTop, v)
    }

    /// Show or hide the right border.
    pub fn border_right(self, v: bool) -> Self {
        self.set(PropKey::BorderRight, v)
    }

    /// Show or hide the bottom border.
    pub fn border_bottom(self, v: bool) -> Self {
        self.set(PropKey::BorderBottom, v)
    }

    /// Show or hide the left border.
    pub fn border_left(self, v: bool) -> Self {
        self.set(PropKey::BorderLeft, v)
    }

    /// Set border foreground colors (CSS shorthand).
    pub fn border_foreground(self, colors: &[&str]) -> Self {
        self.border_foreground_colors(&boxed_colors(colors))
    }

    /// Set border foreground colors from any color type (CSS shorthand).
    pub fn border_foreground_colors(self, colors: &[Box<dyn TerminalColor>]) -> Self {
        match which_sides(colors) {
            Some(sides) => self.set_sides(BORDER_FG_KEYS, sides),
            None => self,
        }
    }

    /// Set border background colors (CSS shorthand).
    pub fn border_background(self, colors: &[&str]) -> Self {
        self.border_background_colors(&boxed_colors(colors))
    }

    /// Set border background colors from any color type (CSS shorthand).
    pub fn border_background_colors(self, colors: &[Box<dyn TerminalColor>]) -> Self {
        match which_sides(colors) {
            Some(sides) => self.set_sides(BORDER_BG_KEYS, sides),
            None => self,
        }
    }

    /// Set the top border foreground color.
    pub fn border_top_foreground(self, color: impl Into<String>) -> Self {
        self.set_color(PropKey::BorderTopForeground, Color::new(color))
    }

    /// Set the right border foreground color.
    pub fn border_right_foreground(self, color: impl Into<String>) -> Self {
        self.set_color(PropKey::BorderRightForeground, Color::new(color))
    }

    /// Set the bottom border foreground color.
    pub fn border_bottom_foreground(self, color: impl Into<String>) -> Self {
        self.set_color(PropKey::BorderBottomForeground, Color::new(color))
    }

    /// Set the left border foreground color.
    pub fn border_left_foreground(self, color: impl Into<String>) -> Self {
        self.set_color(PropKey::BorderLeftForeground, Color::new(color))
    }

    /// Set the top border background color.
    pub fn border_top_background(self, color: impl Into<String>) -> Self {
        self.set_color(PropKey::BorderTopBackground, Color::new(color))
    }

    /// Set the right border background color.
    pub fn border_right_background(self, color: impl Into<String>) -> Self {
        self.set_color(PropKey::BorderRightBackground, Color::new(color))
    }

    /// Set the bottom border background color.
    pub fn border_bottom_background(self, color: impl Into<String>) -> Self {
        self.set_color(PropKey::BorderBottomBackground, Color::new(color))
    }

    /// Set the left border background color.
    pub fn border_left_background(self, color: impl Into<String>) -> Self {
        self.set_color(PropKey::BorderLeftBackground, Color::new(color))
    }

    // ==================== Other ====================

    /// Enable inline mode (single line, no margins/padding/borders).
    pub fn inline(self) -> Self {
        self.set(PropKey::Inline, true)
    }
}

fn boxed_colors(colors: &[&str]) -> Vec<Box<dyn TerminalColor>> {
    colors
        .iter()
        .map(|c| Box::new(Color::new(*c)) as Box<dyn TerminalColor>)
        .collect()
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorProfile;

    fn fg_of(style: &Style, key: PropKey) -> String {
        style.get_as_color(key).fg_params(ColorProfile::Ansi, true)
    }

    #[test]
    fn test_unset_defaults() {
        let s = Style::new();
        assert!(!s.get_as_bool(PropKey::Bold));
        assert!(s.get_bool_or(PropKey::ColorWhitespace, true));
        assert_eq!(s.get_as_int(PropKey::Width), 0);
        assert!(s.get_as_color(PropKey::Foreground).is_no_color());
        assert_eq!(s.get_as_position(PropKey::Align), Position::Top);
        assert!(s.get_as_border(PropKey::BorderStyle).is_empty());
        assert_eq!(s.rule_count(), 0);
    }

    #[test]
    fn test_negative_values_clamp_to_zero() {
        let s = Style::new().width(-5).padding([-1, 3]).margin_left(-2);
        assert_eq!(s.get_as_int(PropKey::Width), 0);
        assert!(s.is_set(PropKey::Width));
        assert_eq!(s.get_as_int(PropKey::PaddingTop), 0);
        assert_eq!(s.get_as_int(PropKey::PaddingLeft), 3);
        assert_eq!(s.get_as_int(PropKey::MarginLeft), 0);
    }

    #[test]
    fn test_padding_shorthand_counts() {
        let p = |s: &Style| PADDING_KEYS.map(|k| s.get_as_int(k));

        assert_eq!(p(&Style::new().padding([1])), [1, 1, 1, 1]);
        assert_eq!(p(&Style::new().padding([1, 2])), [1, 2, 1, 2]);
        assert_eq!(p(&Style::new().padding([1, 2, 3])), [1, 2, 3, 2]);
        assert_eq!(p(&Style::new().padding([1, 2, 3, 4])), [1, 2, 3, 4]);
    }

    #[test]
    fn test_invalid_shorthand_counts_leave_priors() {
        let none: [i32; 0] = [];
        let base = Style::new().padding([7]).margin([2]);
        let s = base.copy().padding(none).margin([1, 2, 3, 4, 5]);
        assert_eq!(s.get_as_int(PropKey::PaddingLeft), 7);
        assert_eq!(s.get_as_int(PropKey::MarginRight), 2);

        let s = Style::new()
            .border_foreground(&["1"])
            .border_foreground(&["2", "3", "4", "5", "6"]);
        assert_eq!(fg_of(&s, PropKey::BorderLeftForeground), "31");
    }

    #[test]
    fn test_border_color_shorthand() {
        let s = Style::new().border_foreground(&["1", "2", "3"]);
        assert_eq!(fg_of(&s, PropKey::BorderTopForeground), "31");
        assert_eq!(fg_of(&s, PropKey::BorderRightForeground), "32");
        assert_eq!(fg_of(&s, PropKey::BorderBottomForeground), "33");
        assert_eq!(fg_of(&s, PropKey::BorderLeftForeground), "32");
    }

    #[test]
    fn test_border_color_shorthand_counts() {
        let sides = |s: &Style| -> Vec<String> {
            BORDER_FG_KEYS.iter().map(|&k| fg_of(s, k)).collect()
        };

        let s = Style::new().border_foreground(&["1", "2"]);
        assert_eq!(sides(&s), ["31", "32", "31", "32"]);

        let s = Style::new().border_foreground(&["1", "2", "3", "4"]);
        assert_eq!(sides(&s), ["31", "32", "33", "34"]);

        let s = Style::new().border_foreground(&[]);
        for key in BORDER_FG_KEYS {
            assert!(!s.is_set(key));
        }

        let s = Style::new()
            .border_foreground(&["5"])
            .border_foreground(&[]);
        assert_eq!(sides(&s), ["35", "35", "35", "35"]);
    }

    #[test]
    fn test_border_without_sides_turns_all_on() {
        let s = Style::new().border(Border::normal());
        for key in BORDER_SIDE_KEYS {
            assert!(s.get_as_bool(key));
        }

        let s = Style::new().border_with_sides(Border::normal(), &[true; 6]);
        for key in BORDER_SIDE_KEYS {
            assert!(s.get_as_bool(key));
        }

        let s = Style::new().border_with_sides(Border::normal(), &[true, false]);
        assert!(s.get_as_bool(PropKey::BorderTop));
        assert!(!s.get_as_bool(PropKey::BorderLeft));
    }

    #[test]
    fn test_copy_is_independent() {
        let base = Style::new().bold().set_string("hi");
        let copy = base.copy().italic().width(4);

        assert!(!base.is_set(PropKey::Italic));
        assert!(!base.is_set(PropKey::Width));
        assert!(copy.get_as_bool(PropKey::Bold));
        assert_eq!(copy.value(), "hi");
    }

    #[test]
    fn test_inherit_keeps_own_rules() {
        let parent = Style::new().bold().foreground("1").width(10);
        let child = Style::new().foreground("2").inherit(&parent);

        assert!(child.get_as_bool(PropKey::Bold));
        assert_eq!(child.get_as_int(PropKey::Width), 10);
        assert_eq!(fg_of(&child, PropKey::Foreground), "32");
    }

    #[test]
    fn test_inherit_skips_spacing() {
        let parent = Style::new().padding([1, 2]).margin([3]).bold();
        let child = Style::new().inherit(&parent);

        for key in PropKey::SPACING {
            assert!(!child.is_set(key), "{key:?} should not be inherited");
        }
        assert!(child.is_set(PropKey::Bold));
    }

    #[test]
    fn test_inherited_background_sets_margin_background() {
        let parent = Style::new().background("4");
        let child = Style::new().inherit(&parent);
        assert!(child.is_set(PropKey::MarginBackground));

        let parent = Style::new().background("4").margin_background("5");
        let child = Style::new().inherit(&parent);
        let bg = child
            .get_as_color(PropKey::MarginBackground)
            .bg_params(ColorProfile::Ansi, true);
        assert_eq!(bg, "45");

        let child = Style::new().margin_background("6").inherit(&Style::new().background("4"));
        let bg = child
            .get_as_color(PropKey::MarginBackground)
            .bg_params(ColorProfile::Ansi, true);
        assert_eq!(bg, "46");
    }

    #[test]
    fn test_inherit_never_overwrites_background() {
        let parent = Style::new().background("4");
        let child = Style::new().background("2").inherit(&parent);
        let bg = child
            .get_as_color(PropKey::Background)
            .bg_params(ColorProfile::Ansi, true);
        assert_eq!(bg, "42");
    }

    #[test]
    fn test_own_background_blocks_inherited_margin_background() {
        let parent = Style::new().background("4");
        let child = Style::new().background("2").inherit(&parent);
        assert!(!child.is_set(PropKey::MarginBackground));

        let child = Style::new()
            .background("2")
            .inherit(&Style::new().background("4").margin_background("5"));
        let bg = child
            .get_as_color(PropKey::MarginBackground)
            .bg_params(ColorProfile::Ansi, true);
        assert_eq!(bg, "45");
    }

    #[test]
    fn test_renderer_falls_back_to_default() {
        let s = Style::new();
        assert!(std::ptr::eq(s.get_renderer(), default_renderer()));

        let own = Arc::new(Renderer::with_profile(ColorProfile::Ascii));
        let s = Style::new().renderer(Arc::clone(&own));
        assert!(std::ptr::eq(s.get_renderer(), own.as_ref()));
    }

    #[test]
    fn test_explicit_no_color_is_set() {
        let s = Style::new().no_foreground();
        assert!(s.is_set(PropKey::Foreground));
        assert!(s.get_as_color(PropKey::Foreground).is_no_color());
    }

    #[test]
    fn test_unset_restores_default() {
        let s = Style::new().bold().unset(PropKey::Bold);
        assert!(!s.is_set(PropKey::Bold));
    }

    #[test]
    fn test_display_renders_value() {
        let s = Style::new().set_string("plain");
        assert_eq!(s.to_string(), "plain");
    }
}
