//! Named styles loaded from JSON, TOML or (with the `yaml` feature) YAML.
//!
//! A stylesheet maps style names to declarative [`StyleDef`]s. Every field is
//! optional and maps onto the matching [`Style`] setter, so shorthand and
//! clamping rules apply exactly as they do in code.
//!
//! ```rust
//! use termstyle::{PropKey, StyleSheet};
//!
//! let sheet = StyleSheet::from_toml(r##"
//!     [base]
//!     foreground = "#fafafa"
//!     bold = true
//!
//!     [panel]
//!     inherit = "base"
//!     border = "rounded"
//!     padding = [0, 1]
//! "##).unwrap();
//!
//! let panel = sheet.style("panel").unwrap();
//! assert!(panel.get_as_bool(PropKey::Bold));
//! assert_eq!(panel.get_as_int(PropKey::PaddingRight), 1);
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::border::Border;
use crate::color::Color;
use crate::position::Position;
use crate::rules::PropKey;
use crate::style::Style;

/// Error loading a stylesheet.
#[derive(Error, Debug)]
pub enum StyleSheetError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[cfg(feature = "yaml")]
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid color value '{value}' in style '{style}'")]
    InvalidColor { style: String, value: String },
}

/// Declarative form of a [`Style`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleDef {
    /// Name of the style this one inherits from.
    pub inherit: Option<String>,

    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub strikethrough: Option<bool>,
    pub reverse: Option<bool>,
    pub blink: Option<bool>,
    pub faint: Option<bool>,
    pub underline_spaces: Option<bool>,
    pub strikethrough_spaces: Option<bool>,
    pub color_whitespace: Option<bool>,
    pub inline: Option<bool>,

    pub foreground: Option<String>,
    pub background: Option<String>,

    pub width: Option<i32>,
    pub height: Option<i32>,
    pub max_width: Option<i32>,
    pub max_height: Option<i32>,

    pub align: Option<Position>,
    pub align_vertical: Option<Position>,

    /// CSS-style shorthand, 1 to 4 values.
    pub padding: Option<Vec<i32>>,
    /// CSS-style shorthand, 1 to 4 values.
    pub margin: Option<Vec<i32>>,
    pub margin_background: Option<String>,

    /// Border preset name (`"rounded"`, `"double"`...).
    pub border: Option<String>,
    pub border_sides: Option<Vec<bool>>,
    pub border_foreground: Option<Vec<String>>,
    pub border_background: Option<Vec<String>>,
}

impl StyleDef {
    /// Build the style this definition describes, ignoring `inherit`.
    pub fn to_style(&self) -> Style {
        let mut style = Style::new();

        let flags = [
            (PropKey::Bold, self.bold),
            (PropKey::Italic, self.italic),
            (PropKey::Underline, self.underline),
            (PropKey::Strikethrough, self.strikethrough),
            (PropKey::Reverse, self.reverse),
            (PropKey::Blink, self.blink),
            (PropKey::Faint, self.faint),
            (PropKey::UnderlineSpaces, self.underline_spaces),
            (PropKey::StrikethroughSpaces, self.strikethrough_spaces),
            (PropKey::ColorWhitespace, self.color_whitespace),
            (PropKey::Inline, self.inline),
        ];
        for (key, value) in flags {
            if let Some(v) = value {
                style = style.set(key, v);
            }
        }

        let sizes = [
            (PropKey::Width, self.width),
            (PropKey::Height, self.height),
            (PropKey::MaxWidth, self.max_width),
            (PropKey::MaxHeight, self.max_height),
        ];
        for (key, value) in sizes {
            if let Some(v) = value {
                style = style.set(key, v);
            }
        }

        if let Some(c) = &self.foreground {
            style = style.foreground(c.as_str());
        }
        if let Some(c) = &self.background {
            style = style.background(c.as_str());
        }
        if let Some(p) = self.align {
            style = style.align(p);
        }
        if let Some(p) = self.align_vertical {
            style = style.align_vertical(p);
        }
        if let Some(values) = &self.padding {
            style = style.padding(values);
        }
        if let Some(values) = &self.margin {
            style = style.margin(values);
        }
        if let Some(c) = &self.margin_background {
            style = style.margin_background(c.as_str());
        }

        if let Some(name) = &self.border {
            match Border::preset(name) {
                Some(border) => style = style.border_style(border),
                None => warn!(stylesheet.border = %name, "Unknown border preset, ignoring"),
            }
        }
        if let Some(sides) = &self.border_sides {
            style = style.border_sides(sides);
        }
        if let Some(colors) = &self.border_foreground {
            style = style.border_foreground(&as_strs(colors));
        }
        if let Some(colors) = &self.border_background {
            style = style.border_background(&as_strs(colors));
        }

        style
    }

    /// Every color string this definition mentions.
    fn colors(&self) -> impl Iterator<Item = &str> {
        [&self.foreground, &self.background, &self.margin_background]
            .into_iter()
            .flatten()
            .chain(self.border_foreground.iter().flatten())
            .chain(self.border_background.iter().flatten())
            .map(String::as_str)
    }
}

fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

/// A set of named style definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSheet {
    styles: BTreeMap<String, StyleDef>,
}

impl StyleSheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a stylesheet from JSON text.
    ///
    /// # Errors
    /// Returns `StyleSheetError` if parsing or color validation fails.
    pub fn from_json(json: &str) -> Result<Self, StyleSheetError> {
        let sheet: StyleSheet = serde_json::from_str(json)?;
        sheet.validate()?;
        Ok(sheet)
    }

    /// Load a stylesheet from TOML text.
    ///
    /// # Errors
    /// Returns `StyleSheetError` if parsing or color validation fails.
    pub fn from_toml(toml: &str) -> Result<Self, StyleSheetError> {
        let sheet: StyleSheet = toml::from_str(toml)?;
        sheet.validate()?;
        Ok(sheet)
    }

    /// Load a stylesheet from YAML text.
    ///
    /// # Errors
    /// Returns `StyleSheetError` if parsing or color validation fails.
    #[cfg(feature = "yaml")]
    pub fn from_yaml(yaml: &str) -> Result<Self, StyleSheetError> {
        let sheet: StyleSheet = serde_yaml::from_str(yaml)?;
        sheet.validate()?;
        Ok(sheet)
    }

    /// Load a stylesheet from a file (format inferred by extension).
    ///
    /// # Errors
    /// Returns `StyleSheetError` if reading, parsing, or validation fails.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StyleSheetError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        debug!(stylesheet.path = %path.display(), "Loading stylesheet");
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            Some("toml") => Self::from_toml(&content),
            Some("yaml" | "yml") => {
                #[cfg(feature = "yaml")]
                {
                    Self::from_yaml(&content)
                }
                #[cfg(not(feature = "yaml"))]
                {
                    Err(StyleSheetError::UnsupportedFormat("yaml".into()))
                }
            }
            Some(ext) => Err(StyleSheetError::UnsupportedFormat(ext.into())),
            None => Err(StyleSheetError::UnsupportedFormat("unknown".into())),
        }
    }

    fn validate(&self) -> Result<(), StyleSheetError> {
        for (name, def) in &self.styles {
            if let Some(bad) = def.colors().find(|c| !Color::new(*c).is_valid()) {
                return Err(StyleSheetError::InvalidColor {
                    style: name.clone(),
                    value: bad.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Add or replace a named definition.
    pub fn insert(&mut self, name: impl Into<String>, def: StyleDef) {
        self.styles.insert(name.into(), def);
    }

    /// The raw definition for `name`.
    pub fn get(&self, name: &str) -> Option<&StyleDef> {
        self.styles.get(name)
    }

    /// Style names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Resolve a named style, following its `inherit` chain.
    ///
    /// Rules set closer to `name` win. Inheritance follows [`Style::inherit`],
    /// so padding and margins stay with the style that declares them. A cycle
    /// or a missing parent ends the chain.
    pub fn style(&self, name: &str) -> Option<Style> {
        let mut def = self.styles.get(name)?;
        let mut style = def.to_style();
        let mut seen = vec![name];

        while let Some(parent) = def.inherit.as_deref() {
            if seen.contains(&parent) {
                debug!(stylesheet.style = name, stylesheet.parent = parent, "Inherit cycle, stopping");
                break;
            }
            let Some(parent_def) = self.styles.get(parent) else {
                warn!(stylesheet.style = name, stylesheet.parent = parent, "Unknown parent style");
                break;
            };
            style = style.inherit(&parent_def.to_style());
            seen.push(parent);
            def = parent_def;
        }

        debug!(stylesheet.style = name, stylesheet.depth = seen.len(), "Resolved style");
        Some(style)
    }
}
