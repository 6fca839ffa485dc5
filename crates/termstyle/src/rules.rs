//! Rule keys and tagged rule values.

use crate::border::Border;
use crate::color::TerminalColor;
use crate::position::Position;

/// Identifies one style rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropKey {
    // Text attributes
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Reverse,
    Blink,
    Faint,

    Foreground,
    Background,
    Width,
    Height,
    Align,
    AlignVertical,

    // Padding
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,

    ColorWhitespace,

    // Margins
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    MarginBackground,

    // Border glyphs
    BorderStyle,

    // Border edge visibility
    BorderTop,
    BorderRight,
    BorderBottom,
    BorderLeft,

    // Border foreground colors
    BorderTopForeground,
    BorderRightForeground,
    BorderBottomForeground,
    BorderLeftForeground,

    // Border background colors
    BorderTopBackground,
    BorderRightBackground,
    BorderBottomBackground,
    BorderLeftBackground,

    Inline,
    MaxWidth,
    MaxHeight,
    UnderlineSpaces,
    StrikethroughSpaces,
}

impl PropKey {
    /// Padding and margin keys, which never pass through inheritance.
    pub const SPACING: [PropKey; 8] = [
        PropKey::PaddingTop,
        PropKey::PaddingRight,
        PropKey::PaddingBottom,
        PropKey::PaddingLeft,
        PropKey::MarginTop,
        PropKey::MarginRight,
        PropKey::MarginBottom,
        PropKey::MarginLeft,
    ];

    /// Whether this is a padding or margin key.
    pub fn is_spacing(self) -> bool {
        Self::SPACING.contains(&self)
    }
}

/// A rule value, tagged by kind.
#[derive(Debug, Clone)]
pub enum RuleValue {
    Bool(bool),
    Int(i64),
    Color(Box<dyn TerminalColor>),
    Position(Position),
    Border(Border),
}

impl RuleValue {
    /// Normalize a value before storage: integers never go below zero.
    pub(crate) fn clamped(self) -> Self {
        match self {
            RuleValue::Int(n) => RuleValue::Int(n.max(0)),
            other => other,
        }
    }
}

impl From<bool> for RuleValue {
    fn from(v: bool) -> Self {
        RuleValue::Bool(v)
    }
}

impl From<i64> for RuleValue {
    fn from(v: i64) -> Self {
        RuleValue::Int(v)
    }
}

impl From<i32> for RuleValue {
    fn from(v: i32) -> Self {
        RuleValue::Int(i64::from(v))
    }
}

impl From<Position> for RuleValue {
    fn from(v: Position) -> Self {
        RuleValue::Position(v)
    }
}

impl From<Border> for RuleValue {
    fn from(v: Border) -> Self {
        RuleValue::Border(v)
    }
}

impl From<Box<dyn TerminalColor>> for RuleValue {
    fn from(v: Box<dyn TerminalColor>) -> Self {
        RuleValue::Color(v)
    }
}
