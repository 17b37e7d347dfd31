//! # Song Documents
//!
//! A song is stored as raw text: an optional YAML header between two `---`
//! lines, then the lyric body with chords typed inline.
//!
//! ```text
//! ---
//! title: Pescador de Hombres
//! author: Cesáreo Gabaráin
//! category: Entrada
//! transpose: -2
//! ---
//! Do          Sol
//! Tú has venido a la orilla
//! ```
//!
//! Only the raw text is ever stored. Chords are recognized and transposed
//! again on every render, starting from the header's `transpose` offset.
//!
//! ## Header keys
//! - `title`, `author` - free text
//! - `category` - free text, `General` when missing
//! - `transpose` - default semitone offset, `0` when missing
//! - `notation` - `american` or `latin`; detected from the chords when missing

use crate::error::ChordError;
use crate::lexer::{tokenize_and_classify, Token};
use crate::notes::NotationSystem;
use crate::render::{escape_html, render_sheet, Style};
use crate::sheet::{analyze, SheetLine};
use crate::transpose::transpose_text;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const FRONT_MATTER_MARKER: &str = "---";

/// Song header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SongMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub category: String,
    pub transpose: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notation: Option<NotationSystem>,
}

impl Default for SongMetadata {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            category: "General".to_string(),
            transpose: 0,
            notation: None,
        }
    }
}

/// A song: header plus lyric body
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Song {
    pub metadata: SongMetadata,
    pub body: String,
}

impl Song {
    /// Parse a song source.
    ///
    /// # Example
    /// ```
    /// use chordstage::Song;
    ///
    /// let song = Song::parse("---\ntitle: Alma misionera\ntranspose: 2\n---\nDo   Sol\n").unwrap();
    /// assert_eq!(song.metadata.title.as_deref(), Some("Alma misionera"));
    /// assert_eq!(song.metadata.category, "General");
    /// assert_eq!(song.transposed_text(0), "Re   La");
    /// ```
    ///
    /// # Errors
    /// Returns [`ChordError::MetadataError`] when the header is not valid YAML
    /// or has a value of the wrong type.
    pub fn parse(source: &str) -> Result<Self, ChordError> {
        let (header, body) = extract_front_matter(source);

        let metadata = match header {
            Some(content) if !content.trim().is_empty() => serde_yaml::from_str(&content)
                .map_err(|e| ChordError::MetadataError(e.to_string()))?,
            _ => SongMetadata::default(),
        };

        log::debug!(
            "Parsed song {:?} ({} lines)",
            metadata.title,
            body.lines().count()
        );
        Ok(Self { metadata, body })
    }

    /// Read and parse a song file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChordError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ChordError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    /// Serialize back to the stored text form
    pub fn to_source(&self) -> Result<String, ChordError> {
        let header = serde_yaml::to_string(&self.metadata)
            .map_err(|e| ChordError::MetadataError(e.to_string()))?;
        Ok(format!(
            "{marker}\n{header}{marker}\n{body}",
            marker = FRONT_MATTER_MARKER,
            header = header,
            body = self.body
        ))
    }

    /// Header offset plus `extra` semitones
    pub fn offset(&self, extra: i32) -> i32 {
        self.metadata.transpose.saturating_add(extra)
    }

    /// Notation system from the header, or the one most chords in the body use
    pub fn notation(&self) -> NotationSystem {
        if let Some(notation) = self.metadata.notation {
            return notation;
        }

        let (mut latin, mut american) = (0usize, 0usize);
        for line in self.body.lines() {
            let (_, tokens) = tokenize_and_classify(line);
            for located in tokens {
                if let Token::Chord { chord, .. } = located.token {
                    match chord.root.system {
                        NotationSystem::Latin => latin += 1,
                        NotationSystem::American => american += 1,
                    }
                }
            }
        }

        if latin > american {
            NotationSystem::Latin
        } else {
            NotationSystem::American
        }
    }

    pub fn analyze(&self, extra: i32) -> Vec<SheetLine> {
        analyze(&self.body, self.offset(extra))
    }

    /// Body with every chord transposed, as plain text
    pub fn transposed_text(&self, extra: i32) -> String {
        transpose_text(&self.body, self.offset(extra))
    }

    /// HTML for the stage view: the title as a heading, then the body
    pub fn render(&self, extra: i32, style: &Style) -> String {
        let body = render_sheet(&self.analyze(extra), style);
        match &self.metadata.title {
            Some(title) => format!("<h1>{}</h1>\n{}", escape_html(title), body),
            None => body,
        }
    }
}

/// Split a YAML header off the top of `source`.
///
/// The header must start on the first line. Returns the header content (without
/// markers) and the remaining body.
pub(crate) fn extract_front_matter(source: &str) -> (Option<String>, String) {
    let lines: Vec<&str> = source.lines().collect();

    if lines.first().map(|l| l.trim()) != Some(FRONT_MATTER_MARKER) {
        return (None, source.to_string());
    }

    match lines
        .iter()
        .skip(1)
        .position(|l| l.trim() == FRONT_MATTER_MARKER)
    {
        Some(offset) => {
            let end = offset + 1;
            let header = lines[1..end].join("\n");
            let body = lines[end + 1..].join("\n");
            (Some(header), body)
        }
        None => {
            log::warn!("Song header is not closed with '---'; reading it as lyrics");
            (None, source.to_string())
        }
    }
}
