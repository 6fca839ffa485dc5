//! Position and alignment types, plus CSS-style side shorthand resolution.

use serde::{Deserialize, Serialize};

/// Text alignment position.
///
/// A single anchor serves both axes: `Top`/`Left` anchor at the start,
/// `Bottom`/`Right` at the end and `Center` in the middle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Align to the top or left.
    #[default]
    Top,
    /// Align to the bottom or right.
    Bottom,
    /// Align to the center.
    Center,
    /// Alias for Top.
    Left,
    /// Alias for Bottom.
    Right,
}

impl Position {
    /// Split `extra` cells of slack into `(before, after)` for this anchor.
    ///
    /// Centered content gets the odd cell after it.
    pub fn split(&self, extra: usize) -> (usize, usize) {
        match self {
            Position::Top | Position::Left => (0, extra),
            Position::Bottom | Position::Right => (extra, 0),
            Position::Center => {
                let before = extra / 2;
                (before, extra - before)
            }
        }
    }
}

/// CSS-like sides specification for padding, margin, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> Sides<T> {
    /// Create sides with all values the same.
    pub const fn all(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create sides from individual values.
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Resolve CSS shorthand arguments into four sides.
///
/// - 1 value: all sides
/// - 2 values: vertical, horizontal
/// - 3 values: top, horizontal, bottom
/// - 4 values: top, right, bottom, left (clockwise)
///
/// Any other count returns `None` and callers leave their configuration alone.
pub fn which_sides<T: Clone>(values: &[T]) -> Option<Sides<T>> {
    match values {
        [all] => Some(Sides {
            top: all.clone(),
            right: all.clone(),
            bottom: all.clone(),
            left: all.clone(),
        }),
        [vertical, horizontal] => Some(Sides {
            top: vertical.clone(),
            right: horizontal.clone(),
            bottom: vertical.clone(),
            left: horizontal.clone(),
        }),
        [top, horizontal, bottom] => Some(Sides {
            top: top.clone(),
            right: horizontal.clone(),
            bottom: bottom.clone(),
            left: horizontal.clone(),
        }),
        [top, right, bottom, left] => Some(Sides {
            top: top.clone(),
            right: right.clone(),
            bottom: bottom.clone(),
            left: left.clone(),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_split() {
        assert_eq!(Position::Left.split(5), (0, 5));
        assert_eq!(Position::Right.split(5), (5, 0));
        assert_eq!(Position::Center.split(5), (2, 3));
        assert_eq!(Position::Center.split(4), (2, 2));
    }

    #[test]
    fn test_which_sides_int() {
        assert_eq!(which_sides::<i32>(&[]), None);
        assert_eq!(which_sides(&[5]), Some(Sides::all(5)));
        assert_eq!(which_sides(&[1, 2]), Some(Sides::new(1, 2, 1, 2)));
        assert_eq!(which_sides(&[1, 2, 3]), Some(Sides::new(1, 2, 3, 2)));
        assert_eq!(which_sides(&[1, 2, 3, 4]), Some(Sides::new(1, 2, 3, 4)));
        assert_eq!(which_sides(&[1, 2, 3, 4, 5]), None);
    }

    #[test]
    fn test_which_sides_bool_matches_int_shape() {
        assert_eq!(
            which_sides(&[true, false]),
            Some(Sides::new(true, false, true, false))
        );
        assert_eq!(
            which_sides(&[true, false, false]),
            Some(Sides::new(true, false, false, false))
        );
        assert_eq!(which_sides(&[true; 5]), None);
    }
}
