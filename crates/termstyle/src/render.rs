//! The render pipeline.
//!
//! Rendering applies, in order: inline newline stripping, word wrap, per-run
//! SGR styling, padding, height fill, alignment, border, margins, then
//! max-width and max-height truncation. Each step works on the output of the
//! previous one, so the order is part of the contract.

use tracing::trace;

use crate::border::{self, BorderEdges};
use crate::color::ColorProfile;
use crate::console::enable_legacy_windows_ansi;
use crate::position::{Position, Sides};
use crate::rules::PropKey;
use crate::sgr::{Attrs, SgrStyle};
use crate::style::{BORDER_BG_KEYS, BORDER_FG_KEYS, BORDER_SIDE_KEYS, Style};
use crate::text::{
    Segment, align_lines, get_lines, pad_left, pad_right, segments, truncate, wrap,
};

const ATTR_KEYS: [(PropKey, Attrs); 7] = [
    (PropKey::Bold, Attrs::BOLD),
    (PropKey::Faint, Attrs::FAINT),
    (PropKey::Italic, Attrs::ITALIC),
    (PropKey::Underline, Attrs::UNDERLINE),
    (PropKey::Blink, Attrs::BLINK),
    (PropKey::Reverse, Attrs::REVERSE),
    (PropKey::Strikethrough, Attrs::STRIKETHROUGH),
];

/// Styles resolved once per render.
struct Stylers {
    /// Attributes and colors for printable text.
    text: SgrStyle,
    /// Whitespace runes inside the text. `None` when they share `text`.
    space: Option<SgrStyle>,
    /// Padding and alignment fill.
    whitespace: SgrStyle,
}

impl Stylers {
    fn resolve(style: &Style, profile: ColorProfile, dark_bg: bool) -> Self {
        let attrs = ATTR_KEYS
            .iter()
            .filter(|(key, _)| style.get_as_bool(*key))
            .fold(Attrs::empty(), |acc, (_, attr)| acc | *attr);

        let fg = style.get_as_color(PropKey::Foreground);
        let bg = style.get_as_color(PropKey::Background);
        let reverse = attrs.contains(Attrs::REVERSE);
        let color_whitespace = style.get_bool_or(PropKey::ColorWhitespace, true);

        let text = SgrStyle::new()
            .attrs(attrs)
            .foreground(fg, profile, dark_bg)
            .background(bg, profile, dark_bg);

        let mut whitespace = SgrStyle::new();
        if reverse {
            whitespace = whitespace
                .attrs(Attrs::REVERSE)
                .foreground(fg, profile, dark_bg);
        }
        if color_whitespace {
            whitespace = whitespace.background(bg, profile, dark_bg);
        }

        // Spaces drop underline and strikethrough unless the matching
        // "spaces" rule (on by default) keeps them.
        let mut keep = Attrs::empty();
        if style.get_bool_or(PropKey::UnderlineSpaces, true) {
            keep |= Attrs::UNDERLINE;
        }
        if style.get_bool_or(PropKey::StrikethroughSpaces, true) {
            keep |= Attrs::STRIKETHROUGH;
        }
        let dropped = (Attrs::UNDERLINE | Attrs::STRIKETHROUGH).difference(keep);
        let space = text.clone().without(dropped);
        let space = (space != text).then_some(space);

        Self {
            text,
            space,
            whitespace,
        }
    }

    /// Style one line, switching styles between whitespace and printable runs.
    fn style_line(&self, line: &str) -> String {
        let Some(space) = &self.space else {
            return self.text.styled(line);
        };

        let mut out = String::with_capacity(line.len());
        let mut run = String::new();
        let mut run_is_space: Option<bool> = None;

        for seg in segments(line) {
            match seg {
                Segment::Escape(seq) => run.push_str(seq),
                Segment::Char(c) => {
                    let is_space = c.is_whitespace();
                    match run_is_space {
                        Some(current) if current != is_space => {
                            out.push_str(&self.pick(current, space).styled(&run));
                            run.clear();
                        }
                        _ => {}
                    }
                    run_is_space = Some(is_space);
                    run.push(c);
                }
            }
        }
        out.push_str(&self.pick(run_is_space.unwrap_or(false), space).styled(&run));

        out
    }

    fn pick<'a>(&'a self, is_space: bool, space: &'a SgrStyle) -> &'a SgrStyle {
        if is_space { space } else { &self.text }
    }
}

impl Style {
    /// Render `text` with this style applied.
    ///
    /// ```rust
    /// use termstyle::Style;
    ///
    /// let out = Style::new().padding([0, 1]).render("hi");
    /// assert_eq!(out, " hi ");
    /// ```
    pub fn render(&self, text: &str) -> String {
        let renderer = self.get_renderer();
        let profile = renderer.color_profile();
        let dark_bg = renderer.has_dark_background();

        trace!(
            render.rules = self.rule_count(),
            render.input_len = text.len(),
            render.profile = ?profile,
            "Rendering block"
        );

        enable_legacy_windows_ansi();

        let stylers = Stylers::resolve(self, profile, dark_bg);

        let width = self.get_as_int(PropKey::Width);
        let height = self.get_as_int(PropKey::Height);
        let pad = Sides::new(
            self.get_as_int(PropKey::PaddingTop),
            self.get_as_int(PropKey::PaddingRight),
            self.get_as_int(PropKey::PaddingBottom),
            self.get_as_int(PropKey::PaddingLeft),
        );
        let inline = self.get_as_bool(PropKey::Inline);
        let max_width = self.get_as_int(PropKey::MaxWidth);
        let max_height = self.get_as_int(PropKey::MaxHeight);

        let mut str = if inline {
            text.replace('\n', "")
        } else {
            text.to_string()
        };

        if !inline && width > 0 {
            let wrap_at = width.saturating_sub(pad.left).saturating_sub(pad.right);
            str = wrap(&str, wrap_at);
        }

        str = str
            .split('\n')
            .map(|line| stylers.style_line(line))
            .collect::<Vec<_>>()
            .join("\n");

        if !inline {
            str = pad_left(&str, pad.left, Some(&stylers.whitespace));
            str = pad_right(&str, pad.right, Some(&stylers.whitespace));
            if pad.top > 0 {
                str = format!("{}{str}", "\n".repeat(pad.top));
            }
            if pad.bottom > 0 {
                str.push_str(&"\n".repeat(pad.bottom));
            }
        }

        if height > 0 {
            str = fill_height(&str, height, self.get_as_position(PropKey::AlignVertical));
        }

        // Alignment also evens out ragged lines, so it runs for any
        // multi-line block even without a width.
        if str.contains('\n') || width > 0 {
            let align = self.get_as_position(PropKey::Align);
            str = align_lines(&str, align, width, Some(&stylers.whitespace));
        }

        if !inline {
            str = self.apply_border(&str, profile, dark_bg);
            str = self.apply_margins(&str, profile, dark_bg);
        }

        if max_width > 0 {
            str = str
                .split('\n')
                .map(|line| truncate(line, max_width))
                .collect::<Vec<_>>()
                .join("\n");
        }

        if max_height > 0 {
            str = str
                .split('\n')
                .take(max_height)
                .collect::<Vec<_>>()
                .join("\n");
        }

        str
    }

    /// Visible border edges. A border with no side toggled shows all four.
    fn border_edges(&self) -> BorderEdges {
        if !self.is_set(PropKey::BorderStyle) {
            return BorderEdges::none();
        }

        if !BORDER_SIDE_KEYS.iter().any(|k| self.is_set(*k)) {
            return BorderEdges::all();
        }

        let [top, right, bottom, left] = BORDER_SIDE_KEYS.map(|k| self.get_as_bool(k));
        BorderEdges {
            top,
            right,
            bottom,
            left,
        }
    }

    fn apply_border(&self, s: &str, profile: ColorProfile, dark_bg: bool) -> String {
        let border = self.get_as_border(PropKey::BorderStyle);
        let edges = self.border_edges();
        if border.is_empty() || !edges.any() {
            return s.to_string();
        }

        let [top, right, bottom, left] = [0, 1, 2, 3].map(|i| {
            SgrStyle::new()
                .foreground(self.get_as_color(BORDER_FG_KEYS[i]), profile, dark_bg)
                .background(self.get_as_color(BORDER_BG_KEYS[i]), profile, dark_bg)
        });
        let styles = Sides {
            top,
            right,
            bottom,
            left,
        };

        border::compose(s, border, edges, &styles)
    }

    fn apply_margins(&self, s: &str, profile: ColorProfile, dark_bg: bool) -> String {
        let top = self.get_as_int(PropKey::MarginTop);
        let right = self.get_as_int(PropKey::MarginRight);
        let bottom = self.get_as_int(PropKey::MarginBottom);
        let left = self.get_as_int(PropKey::MarginLeft);

        let styler = SgrStyle::new().background(
            self.get_as_color(PropKey::MarginBackground),
            profile,
            dark_bg,
        );

        let mut str = pad_left(s, left, Some(&styler));
        str = pad_right(&str, right, Some(&styler));

        if top > 0 || bottom > 0 {
            let (_, width) = get_lines(&str);
            let blank = styler.styled(&" ".repeat(width));

            let mut out = String::with_capacity(str.len() + (top + bottom) * (blank.len() + 1));
            for _ in 0..top {
                out.push_str(&blank);
                out.push('\n');
            }
            out.push_str(&str);
            for _ in 0..bottom {
                out.push('\n');
                out.push_str(&blank);
            }
            str = out;
        }

        str
    }
}

/// Add blank lines until the block is `height` lines tall. The anchor decides
/// whether they go below, above or around the content.
fn fill_height(s: &str, height: usize, anchor: Position) -> String {
    let lines = s.split('\n').count();
    if height <= lines {
        return s.to_string();
    }

    let (above, below) = anchor.split(height - lines);
    format!("{}{s}{}", "\n".repeat(above), "\n".repeat(below))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::Border;
    use crate::renderer::Renderer;
    use crate::text::visible_width;
    use std::sync::Arc;

    fn ansi() -> Arc<Renderer> {
        Arc::new(Renderer::with_profile(ColorProfile::Ansi))
    }

    #[test]
    fn test_empty_style_is_identity() {
        assert_eq!(Style::new().render("hello"), "hello");
        assert_eq!(Style::new().render(""), "");
    }

    #[test]
    fn test_ragged_lines_are_evened() {
        assert_eq!(Style::new().render("a\nbbb"), "a  \nbbb");
    }

    #[test]
    fn test_bold_text() {
        let out = Style::new().renderer(ansi()).bold().render("hi");
        assert_eq!(out, "\x1b[1mhi\x1b[0m");
    }

    #[test]
    fn test_foreground_each_line() {
        let out = Style::new().renderer(ansi()).foreground("1").render("a\nb");
        assert_eq!(out, "\x1b[31ma\x1b[0m\n\x1b[31mb\x1b[0m");
    }

    #[test]
    fn test_underline_spaces_default_on() {
        let out = Style::new().renderer(ansi()).underline().render("a b");
        assert_eq!(out, "\x1b[4ma b\x1b[0m");
    }

    #[test]
    fn test_underline_spaces_off_splits_runs() {
        let out = Style::new()
            .renderer(ansi())
            .underline()
            .underline_spaces(false)
            .render("a  b");
        assert_eq!(out, "\x1b[4ma\x1b[0m  \x1b[4mb\x1b[0m");
    }

    #[test]
    fn test_strikethrough_spaces_off_keeps_color_on_spaces() {
        let out = Style::new()
            .renderer(ansi())
            .strikethrough()
            .strikethrough_spaces(false)
            .foreground("2")
            .render("a b");
        assert_eq!(out, "\x1b[9;32ma\x1b[0m\x1b[32m \x1b[0m\x1b[9;32mb\x1b[0m");
    }

    #[test]
    fn test_embedded_escapes_pass_through() {
        let out = Style::new()
            .renderer(ansi())
            .underline()
            .underline_spaces(false)
            .render("\x1b[1mab\x1b[0m c");
        assert!(out.contains("\x1b[1mab\x1b[0m"));
        assert_eq!(visible_width(&out), 4);
    }

    #[test]
    fn test_padding_uses_background() {
        let out = Style::new()
            .renderer(ansi())
            .background("4")
            .padding_left(1)
            .render("x");
        assert_eq!(out, "\x1b[44m \x1b[0m\x1b[44mx\x1b[0m");
    }

    #[test]
    fn test_padding_without_color_whitespace() {
        let out = Style::new()
            .renderer(ansi())
            .background("4")
            .color_whitespace(false)
            .padding_left(1)
            .render("x");
        assert_eq!(out, " \x1b[44mx\x1b[0m");
    }

    #[test]
    fn test_reverse_styles_padding() {
        let out = Style::new()
            .renderer(ansi())
            .reverse()
            .foreground("1")
            .padding_right(1)
            .render("x");
        assert_eq!(out, "\x1b[7;31mx\x1b[0m\x1b[7;31m \x1b[0m");
    }

    #[test]
    fn test_vertical_padding() {
        let out = Style::new().padding([1, 2]).render("x");
        assert_eq!(out, "     \n  x  \n     ");
    }

    #[test]
    fn test_width_wraps_inside_padding() {
        let out = Style::new().width(8).padding([0, 1]).render("aa bbb cc");
        for line in out.lines() {
            assert_eq!(visible_width(line), 8);
        }
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn test_alignment() {
        let s = Style::new().width(5);
        assert_eq!(s.clone().render("ab"), "ab   ");
        assert_eq!(s.clone().align(Position::Right).render("ab"), "   ab");
        assert_eq!(s.align(Position::Center).render("ab"), " ab  ");
    }

    #[test]
    fn test_height_anchors() {
        let s = Style::new().height(3);
        assert_eq!(s.clone().render("x"), "x\n \n ");
        assert_eq!(s.clone().align_vertical(Position::Bottom).render("x"), " \n \nx");
        assert_eq!(s.align_vertical(Position::Center).render("x"), " \nx\n ");
    }

    #[test]
    fn test_height_smaller_than_content() {
        assert_eq!(Style::new().height(1).render("a\nb"), "a\nb");
    }

    #[test]
    fn test_border_all_sides() {
        let out = Style::new().border(Border::normal()).render("hi");
        assert_eq!(out, "┌──┐\n│hi│\n└──┘");
    }

    #[test]
    fn test_border_style_alone_shows_all_sides() {
        let out = Style::new().border_style(Border::ascii()).render("a");
        assert_eq!(out, "+-+\n|a|\n+-+");
    }

    #[test]
    fn test_border_sides_off() {
        let out = Style::new()
            .border(Border::normal())
            .border_sides([false])
            .render("hi");
        assert_eq!(out, "hi");
    }

    #[test]
    fn test_border_colors() {
        let out = Style::new()
            .renderer(ansi())
            .border(Border::ascii())
            .border_top_foreground("1")
            .render("a");
        assert_eq!(out, "\x1b[31m+-+\x1b[0m\n|a|\n+-+");
    }

    #[test]
    fn test_margins() {
        let out = Style::new().margin([1, 2]).render("x");
        assert_eq!(out, "     \n  x  \n     ");
    }

    #[test]
    fn test_margin_background() {
        let out = Style::new()
            .renderer(ansi())
            .margin_left(1)
            .margin_background("3")
            .render("x");
        assert_eq!(out, "\x1b[43m \x1b[0mx");
    }

    #[test]
    fn test_inline_skips_box_model() {
        let out = Style::new()
            .inline()
            .padding([1])
            .margin([1])
            .border(Border::normal())
            .render("a\nb");
        assert_eq!(out, "ab");
    }

    #[test]
    fn test_max_width_truncates_lines() {
        let out = Style::new().max_width(3).render("hello\nworld");
        assert_eq!(out, "hel\nwor");
    }

    #[test]
    fn test_max_height_keeps_first_lines() {
        let out = Style::new().max_height(2).render("a\nb\nc");
        assert_eq!(out, "a\nb");
    }

    #[test]
    fn test_fill_height() {
        assert_eq!(fill_height("a", 3, Position::Top), "a\n\n");
        assert_eq!(fill_height("a", 3, Position::Bottom), "\n\na");
        assert_eq!(fill_height("a", 4, Position::Center), "\na\n\n");
    }
}
