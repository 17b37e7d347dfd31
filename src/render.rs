//! # Markup Renderer
//!
//! Turns a lyric sheet into HTML for a display surface that collapses
//! whitespace.
//!
//! ## Output conventions
//! - Chords are wrapped in `<span style="color:...; font-weight:bold;">`
//! - Every whitespace character becomes `&nbsp;`, so alignment spaces survive
//! - Words are HTML-escaped and otherwise unchanged
//! - A blank line becomes a single `&nbsp;` so it still takes vertical space
//! - Source lines are joined with `<br>`
//!
//! The renderer does not re-pad columns after transposition: a chord that gets
//! wider pushes the rest of its line to the right. See
//! [`Alignment`](crate::sheet::Alignment) for plain-text output that
//! compensates.
//!
//! ## Style
//! [`Style`] is an immutable value passed on every call. The color is opaque to
//! the engine and only escaped before being written into the `style` attribute.

use crate::classify::LineKind;
use crate::error::ChordError;
use crate::sheet::{analyze, analyze_line, SheetLine, TokenKind};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Non-collapsing space
pub const NBSP: &str = "&nbsp;";

/// Line separator in rendered markup
pub const LINE_BREAK: &str = "<br>";

/// Chord highlighting applied to every recognized chord
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Style {
    /// Any CSS color value (`#00FFCC`, `teal`, `rgb(0, 255, 204)`)
    pub color: String,
    pub bold: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: "#00FFCC".to_string(),
            bold: true,
        }
    }
}

impl Style {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            ..Self::default()
        }
    }

    /// Read a style from YAML. Missing keys keep their defaults.
    ///
    /// # Example
    /// ```
    /// use chordstage::Style;
    ///
    /// let style = Style::from_yaml("color: orange\nbold: false").unwrap();
    /// assert_eq!(style.color, "orange");
    /// assert!(!style.bold);
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self, ChordError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ChordError::StyleError(e.to_string()))
    }

    /// Read a YAML style file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChordError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ChordError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    fn css(&self) -> String {
        let mut css = format!("color:{};", escape_html(&self.color));
        if self.bold {
            css.push_str(" font-weight:bold;");
        }
        css
    }
}

/// Render one analyzed line
pub fn render_sheet_line(line: &SheetLine, style: &Style) -> String {
    if line.kind == LineKind::Blank {
        return NBSP.to_string();
    }

    let css = style.css();
    let mut html = String::new();
    for token in &line.tokens {
        match token.kind {
            TokenKind::Chord => {
                html.push_str(&format!(
                    "<span style=\"{}\">{}</span>",
                    css,
                    escape_html(&token.transposed)
                ));
            }
            TokenKind::Plain if token.is_whitespace() => {
                for _ in token.text.chars() {
                    html.push_str(NBSP);
                }
            }
            TokenKind::Plain => html.push_str(&escape_html(&token.transposed)),
        }
    }
    html
}

/// Render analyzed lines joined with `<br>`
pub fn render_sheet(lines: &[SheetLine], style: &Style) -> String {
    lines
        .iter()
        .map(|line| render_sheet_line(line, style))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

/// Transpose and render a single line.
///
/// # Example
/// ```
/// use chordstage::{render_line, Style};
///
/// let html = render_line("Do  Sol", 2, &Style::new("red"));
/// assert_eq!(
///     html,
///     "<span style=\"color:red; font-weight:bold;\">Re</span>&nbsp;&nbsp;\
///      <span style=\"color:red; font-weight:bold;\">La</span>"
/// );
/// ```
pub fn render_line(line: &str, semitones: i32, style: &Style) -> String {
    render_sheet_line(&analyze_line(line, semitones), style)
}

/// Transpose and render a whole text block
pub fn render_text(text: &str, semitones: i32, style: &Style) -> String {
    render_sheet(&analyze(text, semitones), style)
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
