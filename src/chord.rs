//! # Chord Grammar
//!
//! Decides whether a single token is a chord symbol and splits it into root,
//! suffix and optional slash bass.
//!
//! ## Grammar
//! ```text
//! chord    = root suffix [ "/" root ]
//! root     = ( "Do" | "Re" | "Mi" | "Fa" | "Sol" | "La" | "Si" | "A".."G" ) [ "#" | "b" ]
//! suffix   = { element } [ tail ]
//! element  = word [ digits ] | digits
//! word     = "maj" | "min" | "dim" | "aug" | "sus" | "add" | "m" | "M" | "+" | "°"
//! tail     = { element | "#" | "b" | "+" | "-" | "(" | ")" | "^" | "°" | "ø" | "/" }
//! ```
//!
//! Words are tried longest first, so `maj7` is `maj` + `7` and never `m` + `aj7`.
//! `add` needs digits. A tail is only accepted after at least one recognized
//! element (`C7b9`, `Am7(b5)`), except inside brackets where the annotation is
//! explicit (`[C(add9)]`). The tail is kept verbatim in the suffix and never
//! interpreted, so unusual voicings survive transposition untouched.

use crate::error::ChordError;
use crate::notes::NoteSpelling;
use std::fmt;
use std::str::FromStr;

/// Quality and extension words, longest first
const SUFFIX_WORDS: [(&str, SuffixWord); 10] = [
    ("maj", SuffixWord::Major),
    ("min", SuffixWord::Minor),
    ("dim", SuffixWord::Diminished),
    ("aug", SuffixWord::Augmented),
    ("sus", SuffixWord::Suspended),
    ("add", SuffixWord::Added),
    ("m", SuffixWord::Minor),
    ("M", SuffixWord::Major),
    ("+", SuffixWord::Augmented),
    ("°", SuffixWord::Diminished),
];

/// Longest run of digits accepted after a word (`13`, `11`)
const MAX_DEGREE_DIGITS: usize = 2;

/// Alteration characters tolerated in an uninterpreted suffix tail
const TAIL_CHARS: &[char] = &['#', 'b', '+', '-', '(', ')', '^', '°', 'ø', '/'];

/// A recognized suffix word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixWord {
    Major,
    Minor,
    Diminished,
    Augmented,
    Suspended,
    Added,
}

/// One element of a chord suffix: `m`, `7`, `maj7`, `sus4`, `add9`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixElement {
    pub word: Option<SuffixWord>,
    pub degree: Option<u8>,
}

/// How strictly the suffix tail is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiting {
    /// Free-standing word: a tail needs a recognized element before it
    Word,
    /// `[...]` annotation: a tail may follow the root directly
    Bracketed,
}

/// A parsed chord symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordSymbol {
    pub root: NoteSpelling,
    /// Everything between the root and the slash bass, verbatim
    pub suffix: String,
    pub bass: Option<NoteSpelling>,
}

impl ChordSymbol {
    /// Parse a free-standing chord symbol
    pub fn parse(symbol: &str) -> Option<Self> {
        parse_chord(symbol, Delimiting::Word)
    }

    /// True when the symbol is a root alone (`A`, `Si`, `F#`)
    pub fn is_bare(&self) -> bool {
        self.suffix.is_empty() && self.bass.is_none()
    }

    /// Recognized elements at the start of the suffix
    pub fn elements(&self) -> Vec<SuffixElement> {
        match_suffix(&self.suffix).0
    }
}

impl fmt::Display for ChordSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.suffix)?;
        if let Some(bass) = &self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}

impl FromStr for ChordSymbol {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ChordError::InvalidChord(s.to_string()))
    }
}

/// Match one suffix element at the start of `input`.
///
/// Returns the element and the number of bytes consumed.
///
/// # Example
/// ```
/// use chordstage::chord::{match_suffix_element, SuffixWord};
///
/// let (element, len) = match_suffix_element("maj7sus4").unwrap();
/// assert_eq!(element.word, Some(SuffixWord::Major));
/// assert_eq!(element.degree, Some(7));
/// assert_eq!(len, 4);
/// ```
pub fn match_suffix_element(input: &str) -> Option<(SuffixElement, usize)> {
    let (word, word_len) = SUFFIX_WORDS
        .iter()
        .find(|(text, _)| input.starts_with(*text))
        .map(|&(text, word)| (Some(word), text.len()))
        .unwrap_or((None, 0));

    let digits_len = input[word_len..]
        .bytes()
        .take(MAX_DEGREE_DIGITS)
        .take_while(u8::is_ascii_digit)
        .count();
    let degree = input[word_len..word_len + digits_len].parse::<u8>().ok();

    match (word, degree) {
        (None, None) => None,
        (Some(SuffixWord::Added), None) => None,
        _ => Some((SuffixElement { word, degree }, word_len + digits_len)),
    }
}

/// Match as many suffix elements as possible.
///
/// Returns the elements and the number of bytes they cover.
pub fn match_suffix(input: &str) -> (Vec<SuffixElement>, usize) {
    let mut elements = Vec::new();
    let mut consumed = 0;
    while let Some((element, len)) = match_suffix_element(&input[consumed..]) {
        elements.push(element);
        consumed += len;
    }
    (elements, consumed)
}

/// True when `tail` is made only of suffix elements and alteration characters
fn is_valid_tail(tail: &str) -> bool {
    let mut rest = tail;
    while let Some(c) = rest.chars().next() {
        if let Some((_, len)) = match_suffix_element(rest) {
            rest = &rest[len..];
        } else if TAIL_CHARS.contains(&c) {
            rest = &rest[c.len_utf8()..];
        } else {
            return false;
        }
    }
    true
}

/// Split an optional slash bass off the end of `rest`.
/// `/` only introduces a bass when exactly one root follows it.
fn split_bass(rest: &str) -> (&str, Option<NoteSpelling>) {
    if let Some((head, tail)) = rest.rsplit_once('/') {
        if let Ok(bass) = tail.parse::<NoteSpelling>() {
            return (head, Some(bass));
        }
    }
    (rest, None)
}

/// Parse `token` as a chord symbol.
///
/// Returns `None` for anything that does not match the grammar; callers treat
/// that as plain text.
///
/// # Example
/// ```
/// use chordstage::chord::{parse_chord, Delimiting};
///
/// let chord = parse_chord("Sim7", Delimiting::Word).unwrap();
/// assert_eq!(chord.root.name(), "Si");
/// assert_eq!(chord.suffix, "m7");
///
/// assert!(parse_chord("Dame", Delimiting::Word).is_none());
/// assert!(parse_chord("C(add9)", Delimiting::Word).is_none());
/// assert!(parse_chord("C(add9)", Delimiting::Bracketed).is_some());
///
/// // `Fa` + `ug` fails, so the letter root is tried next
/// assert_eq!(parse_chord("Faug", Delimiting::Word).unwrap().root.name(), "F");
/// ```
pub fn parse_chord(token: &str, delimiting: Delimiting) -> Option<ChordSymbol> {
    NoteSpelling::prefix_candidates(token)
        .find_map(|(root, root_len)| parse_after_root(root, &token[root_len..], delimiting))
}

/// Parse what follows `root`: suffix, tail and slash bass
fn parse_after_root(root: NoteSpelling, rest: &str, delimiting: Delimiting) -> Option<ChordSymbol> {
    let (suffix, bass) = split_bass(rest);

    let (elements, recognized) = match_suffix(suffix);
    let tail = &suffix[recognized..];
    if !tail.is_empty() {
        let tail_allowed = !elements.is_empty() || delimiting == Delimiting::Bracketed;
        if !(tail_allowed && is_valid_tail(tail)) {
            return None;
        }
    }

    Some(ChordSymbol {
        root,
        suffix: suffix.to_string(),
        bass,
    })
}
