//! # Line Lexer
//!
//! Splits one line of a lyric sheet into tokens and decides which of them are
//! chords.
//!
//! ## Tokens
//! - `Space` - a maximal run of whitespace, kept so that reassembly is lossless
//! - `Word` - any other text (lyrics, punctuation, section labels)
//! - `Chord` - a word or `[...]` annotation that matches the chord grammar
//!
//! Concatenating the text of every token gives back the original line.
//!
//! ## Disambiguation
//! Some note names are also everyday words: Spanish `La`, `Si`, `Do`, `Re` and
//! English `A`. Written bare (no suffix, no bass), they are chords only on a
//! chord line; on a lyric line they stay words. `Am` or `Sim` are chords on
//! either kind of line. Bracketed annotations are explicit and always count.
//!
//! The rule only covers bare roots. Ordinary words that happen to be a root
//! plus suffix letters (`Dom`) are still read as chords; that false positive
//! is accepted.

use crate::chord::{parse_chord, ChordSymbol, Delimiting};
use crate::classify::{classify_line, LineKind};
use std::iter::Peekable;
use std::str::CharIndices;

/// Bare roots that double as common words
pub const AMBIGUOUS_BARE_ROOTS: [&str; 5] = ["A", "Do", "Re", "La", "Si"];

/// Token types for a line of text
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    Space(&'a str),
    Word(&'a str),
    Chord {
        /// Source text, brackets included
        text: &'a str,
        chord: ChordSymbol,
        bracketed: bool,
    },
}

impl<'a> Token<'a> {
    /// Source text of the token
    pub fn text(&self) -> &'a str {
        match *self {
            Token::Space(text) | Token::Word(text) => text,
            Token::Chord { text, .. } => text,
        }
    }

    pub fn is_chord(&self) -> bool {
        matches!(self, Token::Chord { .. })
    }
}

/// A token with its character column in the line
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedToken<'a> {
    pub token: Token<'a>,
    pub column: usize,
}

/// Lexer for a single line
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    column: usize,
    kind: LineKind,
}

impl<'a> Lexer<'a> {
    /// `kind` is the classification of `input`; it drives disambiguation.
    pub fn new(input: &'a str, kind: LineKind) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            column: 0,
            kind,
        }
    }

    fn advance(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        self.column += 1;
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Byte offset of the next unread character
    fn position(&mut self) -> usize {
        self.chars.peek().map_or(self.input.len(), |&(i, _)| i)
    }

    /// Byte length of a `[...]` span starting at `start`, if one closes on this
    /// line without whitespace or another `[` inside.
    fn bracket_span(&self, start: usize) -> Option<usize> {
        let rest = &self.input[start..];
        if !rest.starts_with('[') {
            return None;
        }
        for (i, c) in rest.char_indices().skip(1) {
            match c {
                ']' if i > 1 => return Some(i + 1),
                ']' | '[' => return None,
                c if c.is_whitespace() => return None,
                _ => {}
            }
        }
        None
    }

    /// Consume `len` bytes worth of characters
    fn consume(&mut self, len: usize) {
        let end = self.position() + len;
        while self.position() < end && self.advance().is_some() {}
    }

    pub fn tokenize(&mut self) -> Vec<LocatedToken<'a>> {
        let input = self.input;
        let mut tokens = Vec::new();

        while let Some(c) = self.peek() {
            let column = self.column;
            let start = self.position();

            let token = if c.is_whitespace() {
                while self.peek().is_some_and(char::is_whitespace) {
                    self.advance();
                }
                Token::Space(&input[start..self.position()])
            } else if let Some(len) = self.bracket_span(start) {
                self.consume(len);
                self.classify_bracket(&input[start..start + len])
            } else {
                // A word runs until whitespace or the start of an annotation
                self.advance();
                loop {
                    let position = self.position();
                    match self.peek() {
                        Some(c) if c.is_whitespace() => break,
                        Some('[') if self.bracket_span(position).is_some() => break,
                        Some(_) => {
                            self.advance();
                        }
                        None => break,
                    }
                }
                let end = self.position();
                self.classify_word(&input[start..end])
            };

            tokens.push(LocatedToken { token, column });
        }

        tokens
    }

    fn classify_word(&self, word: &'a str) -> Token<'a> {
        match parse_chord(word, Delimiting::Word) {
            Some(chord)
                if chord.is_bare()
                    && self.kind == LineKind::Lyric
                    && AMBIGUOUS_BARE_ROOTS.contains(&word) =>
            {
                log::trace!("'{}' on a lyric line kept as a word", word);
                Token::Word(word)
            }
            Some(chord) => Token::Chord {
                text: word,
                chord,
                bracketed: false,
            },
            None => Token::Word(word),
        }
    }

    fn classify_bracket(&self, text: &'a str) -> Token<'a> {
        let inner = &text[1..text.len() - 1];
        match parse_chord(inner, Delimiting::Bracketed) {
            Some(chord) => Token::Chord {
                text,
                chord,
                bracketed: true,
            },
            None => Token::Word(text),
        }
    }
}

/// Tokenize `line` as a line of the given kind
pub fn tokenize_line(line: &str, kind: LineKind) -> Vec<LocatedToken<'_>> {
    Lexer::new(line, kind).tokenize()
}

/// Classify `line`, then tokenize it accordingly.
///
/// # Example
/// ```
/// use chordstage::{tokenize_and_classify, LineKind};
///
/// let (kind, tokens) = tokenize_and_classify("A la orilla del mar sereno");
/// assert_eq!(kind, LineKind::Lyric);
/// assert!(tokens.iter().all(|t| !t.token.is_chord()));
///
/// let (kind, tokens) = tokenize_and_classify("A      La");
/// assert_eq!(kind, LineKind::Chord);
/// assert_eq!(tokens.iter().filter(|t| t.token.is_chord()).count(), 2);
/// ```
pub fn tokenize_and_classify(line: &str) -> (LineKind, Vec<LocatedToken<'_>>) {
    let kind = classify_line(line);
    log::debug!("{:?} line: '{}'", kind, line);
    (kind, tokenize_line(line, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &[LocatedToken<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.token.text()).collect()
    }

    fn chords<'a>(tokens: &[LocatedToken<'a>]) -> Vec<&'a str> {
        tokens
            .iter()
            .filter(|t| t.token.is_chord())
            .map(|t| t.token.text())
            .collect()
    }

    #[test]
    fn test_whitespace_runs_are_tokens() {
        let tokens = tokenize_line("G   C  D", LineKind::Chord);
        assert_eq!(texts(&tokens), vec!["G", "   ", "C", "  ", "D"]);
        assert!(matches!(tokens[1].token, Token::Space("   ")));
        assert_eq!(tokens[2].column, 4);
        assert_eq!(tokens[4].column, 7);
    }

    #[test]
    fn test_reassembly_is_lossless() {
        let lines = [
            "  Do          Sol   ",
            "Tú has venido a la orilla,",
            "[Am]Tú has ve[G]nido",
            "\tLam  [Coro]  Re7 ",
        ];
        for line in lines {
            let (_, tokens) = tokenize_and_classify(line);
            assert_eq!(texts(&tokens).concat(), line);
        }
    }

    #[test]
    fn test_bare_a_depends_on_line_kind() {
        let lyric = tokenize_line("A", LineKind::Lyric);
        assert!(matches!(lyric[0].token, Token::Word("A")));

        let chord = tokenize_line("A", LineKind::Chord);
        assert!(chord[0].token.is_chord());
    }

    #[test]
    fn test_suffixed_tokens_are_chords_everywhere() {
        for kind in [LineKind::Lyric, LineKind::Chord] {
            let tokens = tokenize_line("Am Sim", kind);
            assert_eq!(chords(&tokens), vec!["Am", "Sim"]);
        }
    }

    #[test]
    fn test_latin_common_words_on_lyric_line() {
        let tokens = tokenize_line("Si La Do Re Sol", LineKind::Lyric);
        // Sol is not in the ambiguous set
        assert_eq!(chords(&tokens), vec!["Sol"]);
    }

    #[test]
    fn test_lyric_words_are_plain() {
        let (kind, tokens) = tokenize_and_classify("Cuando El Señor me llamó");
        assert_eq!(kind, LineKind::Lyric);
        assert!(chords(&tokens).is_empty());
    }

    #[test]
    fn test_bracketed_chords() {
        let tokens = tokenize_line("[Am]Tú has ve[G7]nido", LineKind::Lyric);
        assert_eq!(
            texts(&tokens),
            vec!["[Am]", "Tú", " ", "has", " ", "ve", "[G7]", "nido"]
        );
        assert_eq!(chords(&tokens), vec!["[Am]", "[G7]"]);
        match &tokens[6].token {
            Token::Chord { chord, bracketed, .. } => {
                assert!(*bracketed);
                assert_eq!(chord.suffix, "7");
            }
            other => panic!("expected chord, got {:?}", other),
        }
        assert_eq!(tokens[6].column, 13);
    }

    #[test]
    fn test_bracketed_bare_root_on_lyric_line() {
        let tokens = tokenize_line("[A]mor", LineKind::Lyric);
        assert_eq!(chords(&tokens), vec!["[A]"]);
    }

    #[test]
    fn test_bracketed_labels_are_words() {
        let tokens = tokenize_line("[Coro] [Verse] [Estribillo]", LineKind::Lyric);
        assert!(chords(&tokens).is_empty());
    }

    #[test]
    fn test_unclosed_bracket_is_part_of_word() {
        let tokens = tokenize_line("[Am G", LineKind::Chord);
        assert_eq!(texts(&tokens), vec!["[Am", " ", "G"]);
        assert_eq!(chords(&tokens), vec!["G"]);

        let tokens = tokenize_line("[]", LineKind::Chord);
        assert_eq!(texts(&tokens), vec!["[]"]);
    }

    #[test]
    fn test_columns_count_characters() {
        let tokens = tokenize_line("canción Am", LineKind::Lyric);
        assert_eq!(tokens[2].column, 8);
    }

    #[test]
    fn test_letter_f_chords_on_both_line_kinds() {
        for kind in [LineKind::Chord, LineKind::Lyric] {
            let tokens = tokenize_line("Faug Fadd9 Fa", kind);
            assert_eq!(chords(&tokens), vec!["Faug", "Fadd9", "Fa"], "{:?}", kind);
        }
    }

    #[test]
    fn test_empty_line() {
        assert!(tokenize_line("", LineKind::Blank).is_empty());
    }
}
