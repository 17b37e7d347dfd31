//! # Line Classification
//!
//! Sorts each line of a lyric sheet into blank, chord or lyric lines.
//!
//! The decision is a density heuristic, not a proof. Chord lines are mostly
//! whitespace used to place symbols above syllables (`G       C        D`),
//! while lyric lines are words separated by single spaces. Nothing stops a
//! sparse lyric fragment from looking like a chord line, so the result is
//! approximate by nature.
//!
//! Classification is a pure function of the line's own text and is recomputed
//! on every render; it is never stored next to the song.

use serde::Serialize;

/// Lines of this many characters or fewer are always chord lines
pub const SHORT_LINE_MAX_CHARS: usize = 6;

/// A longer line is a chord line when more than one character in this many is
/// whitespace (ratio > 0.20; tabs count like spaces). Compared in integers so that a ratio of
/// exactly 0.20 is reliably a lyric line.
pub const CHORD_LINE_SPACE_DIVISOR: usize = 5;

/// Kind of a source line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Empty or whitespace only
    Blank,
    /// Chord symbols placed with whitespace
    Chord,
    /// Singable text
    Lyric,
}

/// Classify a single line (without its newline).
///
/// # Example
/// ```
/// use chordstage::{classify_line, LineKind};
///
/// assert_eq!(classify_line("G       C        D"), LineKind::Chord);
/// assert_eq!(classify_line("Tú has venido a la orilla"), LineKind::Lyric);
/// assert_eq!(classify_line("   "), LineKind::Blank);
/// ```
pub fn classify_line(line: &str) -> LineKind {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }

    let length = line.chars().count();
    if length <= SHORT_LINE_MAX_CHARS {
        return LineKind::Chord;
    }

    let spaces = line.chars().filter(|c| c.is_whitespace()).count();
    if spaces * CHORD_LINE_SPACE_DIVISOR > length {
        LineKind::Chord
    } else {
        LineKind::Lyric
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("    "), LineKind::Blank);
        assert_eq!(classify_line("\t \t"), LineKind::Blank);
    }

    #[test]
    fn test_spaced_chords() {
        assert_eq!(classify_line("G       C        D"), LineKind::Chord);
        assert_eq!(classify_line("Do          Sol"), LineKind::Chord);
        assert_eq!(classify_line("  Am    F    C    G"), LineKind::Chord);
    }

    #[test]
    fn test_lyrics() {
        assert_eq!(classify_line("Tú has venido a la orilla"), LineKind::Lyric);
        assert_eq!(classify_line("Señor, me has mirado a los ojos"), LineKind::Lyric);
        assert_eq!(classify_line("Amazing grace, how sweet the sound"), LineKind::Lyric);
    }

    #[test]
    fn test_short_lines_default_to_chords() {
        assert_eq!(classify_line("Am"), LineKind::Chord);
        assert_eq!(classify_line("Señor"), LineKind::Chord);
        assert_eq!(classify_line("abcdef"), LineKind::Chord);
        assert_eq!(classify_line("abcdefg"), LineKind::Lyric);
    }

    #[test]
    fn test_ratio_boundary() {
        // 2 spaces in 10 characters is exactly 0.20: lyric
        assert_eq!(classify_line("abc def gh"), LineKind::Lyric);
        // 3 spaces in 10 characters: chord
        assert_eq!(classify_line("ab cd ef g"), LineKind::Chord);
    }

    #[test]
    fn test_tab_aligned_chords() {
        assert_eq!(classify_line("G\t\t\tC\t\t\tD"), LineKind::Chord);
        assert_eq!(classify_line("Do\t\tSol\t\tLa"), LineKind::Chord);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 7 characters, 16 bytes: still past the short-line cutoff
        assert_eq!(classify_line("ñáéíóúü"), LineKind::Lyric);
    }

    #[test]
    fn test_is_deterministic() {
        let line = "Pescador de hombres";
        assert_eq!(classify_line(line), classify_line(line));
    }
}
