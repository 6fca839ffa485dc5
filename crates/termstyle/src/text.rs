//! Escape-aware text measurement and line transforms.
//!
//! Everything here treats embedded escape sequences (CSI, OSC and two-byte
//! escapes) as zero-width and never splits one.

use unicode_width::UnicodeWidthChar;

use crate::position::Position;
use crate::sgr::SgrStyle;

/// A piece of escaped text: either one printable char or a whole escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Char(char),
    Escape(&'a str),
}

/// Iterator splitting a string into [`Segment`]s.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

/// Split `s` into printable chars and escape sequences.
pub fn segments(s: &str) -> Segments<'_> {
    Segments { rest: s }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let first = self.rest.chars().next()?;
        if first != '\x1b' {
            self.rest = &self.rest[first.len_utf8()..];
            return Some(Segment::Char(first));
        }

        let (seq, rest) = self.rest.split_at(escape_len(self.rest));
        self.rest = rest;
        Some(Segment::Escape(seq))
    }
}

/// Byte length of the escape sequence at the start of `s` (which begins with ESC).
///
/// Unterminated sequences run to the end of the string.
fn escape_len(s: &str) -> usize {
    let mut chars = s.char_indices().skip(1);
    match chars.next() {
        None => s.len(),
        // CSI: parameters, intermediates, then a final byte in '@'..='~'.
        Some((_, '[')) => chars
            .find(|(_, c)| ('@'..='~').contains(c))
            .map_or(s.len(), |(i, c)| i + c.len_utf8()),
        // OSC: terminated by BEL or ST (ESC \).
        Some((_, ']')) => {
            let mut prev_esc = false;
            for (i, c) in chars {
                if c == '\x07' || (prev_esc && c == '\\') {
                    return i + 1;
                }
                prev_esc = c == '\x1b';
            }
            s.len()
        }
        Some((i, c)) => i + c.len_utf8(),
    }
}

/// Calculate the visible width of a string (excluding ANSI escapes).
pub fn visible_width(s: &str) -> usize {
    segments(s)
        .map(|seg| match seg {
            Segment::Char(c) => c.width().unwrap_or(0),
            Segment::Escape(_) => 0,
        })
        .sum()
}

/// Split into lines and measure the widest one.
pub fn get_lines(s: &str) -> (Vec<&str>, usize) {
    let lines: Vec<&str> = s.split('\n').collect();
    let widest = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
    (lines, widest)
}

/// Word-wrap to `width` columns.
///
/// Existing newlines are hard breaks, words longer than `width` are left
/// intact, and a width of zero disables wrapping.
pub fn wrap(s: &str, width: usize) -> String {
    if width == 0 {
        return s.to_string();
    }

    let options = textwrap::Options::new(width)
        .break_words(false)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    textwrap::wrap(s, options).join("\n")
}

/// Truncate a single line to `max_width` columns.
///
/// Escape sequences are always kept, so a trailing reset still closes any
/// style opened before the cut.
pub fn truncate(s: &str, max_width: usize) -> String {
    let mut out = String::with_capacity(s.len());
    let mut width = 0;
    let mut exhausted = false;

    for seg in segments(s) {
        match seg {
            Segment::Escape(seq) => out.push_str(seq),
            Segment::Char(c) if !exhausted => {
                let w = c.width().unwrap_or(0);
                if width + w > max_width {
                    exhausted = true;
                } else {
                    out.push(c);
                    width += w;
                }
            }
            Segment::Char(_) => {}
        }
    }

    out
}

fn spaces(n: usize, style: Option<&SgrStyle>) -> String {
    let sp = " ".repeat(n);
    match style {
        Some(st) => st.styled(&sp),
        None => sp,
    }
}

/// Prefix every line with `n` spaces.
pub fn pad_left(s: &str, n: usize, style: Option<&SgrStyle>) -> String {
    if n == 0 {
        return s.to_string();
    }

    let sp = spaces(n, style);
    s.split('\n')
        .map(|line| format!("{sp}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Suffix every line with `n` spaces. Empty input stays empty.
pub fn pad_right(s: &str, n: usize, style: Option<&SgrStyle>) -> String {
    if n == 0 || s.is_empty() {
        return s.to_string();
    }

    let sp = spaces(n, style);
    s.split('\n')
        .map(|line| format!("{line}{sp}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pad every line to a common width: the widest line, or `width` if larger.
///
/// Slack goes opposite the anchor; centered lines take the odd column on
/// the right.
pub fn align_lines(s: &str, pos: Position, width: usize, style: Option<&SgrStyle>) -> String {
    let (lines, widest) = get_lines(s);
    let target = widest.max(width);

    lines
        .iter()
        .map(|line| {
            let short = target.saturating_sub(visible_width(line));
            if short == 0 {
                return (*line).to_string();
            }
            let (left, right) = pos.split(short);
            let mut out = String::with_capacity(line.len() + short);
            if left > 0 {
                out.push_str(&spaces(left, style));
            }
            out.push_str(line);
            if right > 0 {
                out.push_str(&spaces(right, style));
            }
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}
