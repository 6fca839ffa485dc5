//! Border glyph sets and the border compositor.
//!
//! # Preset Borders
//!
//! - [`Border::normal()`] - Standard border (┌─┐)
//! - [`Border::rounded()`] - Rounded corners (╭─╮)
//! - [`Border::block()`] - Full block (█)
//! - [`Border::thick()`] - Thick lines (┏━┓)
//! - [`Border::double()`] - Double lines (╔═╗)
//! - [`Border::hidden()`] - Invisible (spaces)
//! - [`Border::ascii()`] - ASCII characters (+-|)
//!
//! # Example
//!
//! ```rust
//! use termstyle::Border;
//!
//! let border = Border::rounded();
//! assert_eq!(border.top_left, "╭");
//! assert!(Border::none().is_empty());
//! ```

use crate::position::Sides;
use crate::sgr::SgrStyle;
use crate::text::{get_lines, visible_width};

/// Border characters for all edges and corners.
///
/// An all-empty border is the "no border" value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Border {
    /// Top edge character(s).
    pub top: String,
    /// Bottom edge character(s).
    pub bottom: String,
    /// Left edge character(s).
    pub left: String,
    /// Right edge character(s).
    pub right: String,
    /// Top-left corner.
    pub top_left: String,
    /// Top-right corner.
    pub top_right: String,
    /// Bottom-left corner.
    pub bottom_left: String,
    /// Bottom-right corner.
    pub bottom_right: String,
}

impl Border {
    /// Creates an empty border (no characters).
    pub const fn none() -> Self {
        Self {
            top: String::new(),
            bottom: String::new(),
            left: String::new(),
            right: String::new(),
            top_left: String::new(),
            top_right: String::new(),
            bottom_left: String::new(),
            bottom_right: String::new(),
        }
    }

    /// Build a border from edge glyphs `[top, bottom, left, right]` and corner
    /// glyphs `[top_left, top_right, bottom_left, bottom_right]`.
    fn from_glyphs(edges: [&str; 4], corners: [&str; 4]) -> Self {
        let [top, bottom, left, right] = edges;
        let [top_left, top_right, bottom_left, bottom_right] = corners;
        Self {
            top: top.into(),
            bottom: bottom.into(),
            left: left.into(),
            right: right.into(),
            top_left: top_left.into(),
            top_right: top_right.into(),
            bottom_left: bottom_left.into(),
            bottom_right: bottom_right.into(),
        }
    }

    /// Standard border with 90-degree corners.
    ///
    /// ```text
    /// ┌───┐
    /// │   │
    /// └───┘
    /// ```
    pub fn normal() -> Self {
        Self::from_glyphs(["─", "─", "│", "│"], ["┌", "┐", "└", "┘"])
    }

    /// Border with rounded corners.
    ///
    /// ```text
    /// ╭───╮
    /// │   │
    /// ╰───╯
    /// ```
    pub fn rounded() -> Self {
        Self::from_glyphs(["─", "─", "│", "│"], ["╭", "╮", "╰", "╯"])
    }

    /// Full block border.
    pub fn block() -> Self {
        Self::from_glyphs(["█", "█", "█", "█"], ["█", "█", "█", "█"])
    }

    /// Half-block border (outer).
    pub fn outer_half_block() -> Self {
        Self::from_glyphs(["▀", "▄", "▌", "▐"], ["▛", "▜", "▙", "▟"])
    }

    /// Half-block border (inner).
    pub fn inner_half_block() -> Self {
        Self::from_glyphs(["▄", "▀", "▐", "▌"], ["▗", "▖", "▝", "▘"])
    }

    /// Thick border.
    ///
    /// ```text
    /// ┏━━━┓
    /// ┃   ┃
    /// ┗━━━┛
    /// ```
    pub fn thick() -> Self {
        Self::from_glyphs(["━", "━", "┃", "┃"], ["┏", "┓", "┗", "┛"])
    }

    /// Double-line border.
    ///
    /// ```text
    /// ╔═══╗
    /// ║   ║
    /// ╚═══╝
    /// ```
    pub fn double() -> Self {
        Self::from_glyphs(["═", "═", "║", "║"], ["╔", "╗", "╚", "╝"])
    }

    /// Hidden border (spaces for layout without visible border).
    pub fn hidden() -> Self {
        Self::from_glyphs([" ", " ", " ", " "], [" ", " ", " ", " "])
    }

    /// ASCII-only border.
    ///
    /// ```text
    /// +---+
    /// |   |
    /// +---+
    /// ```
    pub fn ascii() -> Self {
        Self::from_glyphs(["-", "-", "|", "|"], ["+", "+", "+", "+"])
    }

    /// Look up a preset by name (`"rounded"`, `"double"`, `"outer-half-block"`...).
    pub fn preset(name: &str) -> Option<Self> {
        let border = match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "none" => Self::none(),
            "normal" => Self::normal(),
            "rounded" => Self::rounded(),
            "block" => Self::block(),
            "outer-half-block" => Self::outer_half_block(),
            "inner-half-block" => Self::inner_half_block(),
            "thick" => Self::thick(),
            "double" => Self::double(),
            "hidden" => Self::hidden(),
            "ascii" => Self::ascii(),
            _ => return None,
        };
        Some(border)
    }

    /// Returns true if this border has no visible characters.
    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
            && self.bottom.is_empty()
            && self.left.is_empty()
            && self.right.is_empty()
            && self.top_left.is_empty()
            && self.top_right.is_empty()
            && self.bottom_left.is_empty()
            && self.bottom_right.is_empty()
    }

    /// Blank every corner whose two adjoining edges are not both drawn.
    fn suppress_corners(&mut self, edges: BorderEdges) {
        if !(edges.top && edges.left) {
            self.top_left.clear();
        }
        if !(edges.top && edges.right) {
            self.top_right.clear();
        }
        if !(edges.bottom && edges.left) {
            self.bottom_left.clear();
        }
        if !(edges.bottom && edges.right) {
            self.bottom_right.clear();
        }
    }
}

/// Which border edges should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderEdges {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl BorderEdges {
    /// All edges enabled.
    pub const fn all() -> Self {
        Self {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }

    /// No edges enabled.
    pub const fn none() -> Self {
        Self {
            top: false,
            right: false,
            bottom: false,
            left: false,
        }
    }

    /// Returns true if any edge is enabled.
    pub const fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}

/// Wrap `block` in the visible edges of `border`.
///
/// `styles` carries the per-edge coloring; the top and bottom styles also
/// cover their corners. Returns the block unchanged when the border is empty
/// or no edge is visible.
pub fn compose(
    block: &str,
    border: &Border,
    edges: BorderEdges,
    styles: &Sides<SgrStyle>,
) -> String {
    if border.is_empty() || !edges.any() {
        return block.to_string();
    }

    let (lines, mut width) = get_lines(block);
    if edges.left {
        width += visible_width(&border.left);
    }

    let mut border = border.clone();
    border.suppress_corners(edges);

    let mut out = Vec::with_capacity(lines.len() + 2);

    if edges.top {
        let top = render_horizontal_edge(&border.top_left, &border.top, &border.top_right, width);
        out.push(styles.top.styled(&top));
    }

    let left = styles.left.styled(&border.left);
    let right = styles.right.styled(&border.right);
    for line in lines {
        let mut row = String::with_capacity(left.len() + line.len() + right.len());
        if edges.left {
            row.push_str(&left);
        }
        row.push_str(line);
        if edges.right {
            row.push_str(&right);
        }
        out.push(row);
    }

    if edges.bottom {
        let bottom = render_horizontal_edge(
            &border.bottom_left,
            &border.bottom,
            &border.bottom_right,
            width,
        );
        out.push(styles.bottom.styled(&bottom));
    }

    out.join("\n")
}

/// Render the top or bottom run of a border.
///
/// `width` spans the content plus the left edge; the middle glyph repeats
/// until that is covered, then the right corner closes the run.
pub fn render_horizontal_edge(left: &str, middle: &str, right: &str, width: usize) -> String {
    if width < 1 {
        return String::new();
    }

    let middle = if middle.is_empty() { " " } else { middle };

    let left_width = visible_width(left);
    let mid_width = visible_width(middle).max(1);
    let right_width = visible_width(right);

    let mut out = String::from(left);
    let mut filled = left_width + right_width;
    while filled < width + right_width {
        out.push_str(middle);
        filled += mid_width;
    }
    out.push_str(right);

    out
}
