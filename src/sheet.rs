//! # Sheet Model
//!
//! Structured, serializable view of a transposed lyric sheet for callers that
//! render on their own (plain-text export, fixed-width PDF, a web front end).
//!
//! ## Types
//! - [`SheetLine`] - one source line with its [`LineKind`] and tokens
//! - [`SheetToken`] - `Plain` or `Chord`, with source text, transposed text and
//!   starting column
//!
//! For plain tokens `transposed == text`. Concatenating `text` over a line gives
//! back the source line; concatenating `transposed` gives the transposed line.
//!
//! ## Alignment
//! A transposed chord can be wider or narrower than the original (`B` → `C#`),
//! which shifts every later token on the line. [`Alignment::Drift`] leaves the
//! shift in place. [`Alignment::Compensate`] takes the difference out of the
//! following whitespace run so later chords stay above their syllables, as long
//! as the gap is wide enough; gaps between tokens never shrink below one space.
//! It is best effort and does not promise column-exact output.

use crate::classify::LineKind;
use crate::lexer::{tokenize_and_classify, Token};
use crate::transpose::transpose_token;
use serde::Serialize;

/// Token kind as seen by renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Words and whitespace, emitted unchanged
    Plain,
    /// A recognized chord
    Chord,
}

/// A token of a rendered line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetToken {
    pub kind: TokenKind,
    pub text: String,
    pub transposed: String,
    /// Character column of `text` in the source line
    pub column: usize,
}

impl SheetToken {
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Plain && self.text.chars().all(char::is_whitespace)
    }
}

/// A classified, tokenized and transposed source line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetLine {
    pub kind: LineKind,
    pub tokens: Vec<SheetToken>,
}

impl SheetLine {
    /// Source line as written
    pub fn source(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Transposed line, with column drift left in place
    pub fn transposed(&self) -> String {
        self.tokens.iter().map(|t| t.transposed.as_str()).collect()
    }

    /// Transposed line with later tokens pulled back to their source columns
    /// where the whitespace allows it.
    pub fn transposed_compensated(&self) -> String {
        let mut out = String::new();
        // Output width minus source width so far
        let mut drift: isize = 0;

        for (i, token) in self.tokens.iter().enumerate() {
            let source_width = token.text.chars().count() as isize;

            if token.is_whitespace() && drift != 0 {
                let is_leading = i == 0;
                let is_trailing = i + 1 == self.tokens.len();
                let min_width = if is_leading || is_trailing { 0 } else { 1 };
                let width = (source_width - drift).max(min_width);
                out.extend(std::iter::repeat(' ').take(width as usize));
                drift += width - source_width;
            } else {
                out.push_str(&token.transposed);
                drift += token.transposed.chars().count() as isize - source_width;
            }
        }

        out
    }

    pub fn chords(&self) -> impl Iterator<Item = &SheetToken> {
        self.tokens.iter().filter(|t| t.kind == TokenKind::Chord)
    }
}

/// How plain-text output treats width changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Leave later tokens where the wider or narrower chord pushes them
    #[default]
    Drift,
    /// Absorb width changes in the following whitespace
    Compensate,
}

/// Classify, tokenize and transpose one line.
///
/// # Example
/// ```
/// use chordstage::{analyze_line, LineKind, TokenKind};
///
/// let line = analyze_line("Do  Sol", 2);
/// assert_eq!(line.kind, LineKind::Chord);
/// assert_eq!(line.transposed(), "Re  La");
/// assert_eq!(line.tokens[2].kind, TokenKind::Chord);
/// assert_eq!(line.tokens[2].column, 4);
/// ```
pub fn analyze_line(line: &str, semitones: i32) -> SheetLine {
    let (kind, tokens) = tokenize_and_classify(line);

    let tokens = tokens
        .into_iter()
        .map(|located| {
            let text = located.token.text();
            let (kind, transposed) = match &located.token {
                Token::Chord {
                    text,
                    chord,
                    bracketed,
                } => (
                    TokenKind::Chord,
                    transpose_token(text, chord, *bracketed, semitones).into_owned(),
                ),
                Token::Space(text) | Token::Word(text) => (TokenKind::Plain, text.to_string()),
            };
            SheetToken {
                kind,
                text: text.to_string(),
                transposed,
                column: located.column,
            }
        })
        .collect();

    SheetLine { kind, tokens }
}

/// Analyze every line of a text block (`\n` or `\r\n` separated).
///
/// Every `\n` starts a new line, so a trailing newline yields a final blank
/// line and empty input yields one blank line.
pub fn analyze(text: &str, semitones: i32) -> Vec<SheetLine> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| analyze_line(line, semitones))
        .collect()
}

/// Join analyzed lines into plain text, one source line per output line
pub fn to_plain_text(lines: &[SheetLine], alignment: Alignment) -> String {
    lines
        .iter()
        .map(|line| match alignment {
            Alignment::Drift => line.transposed(),
            Alignment::Compensate => line.transposed_compensated(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
