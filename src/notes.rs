//! # Note Table
//!
//! Static mapping between the 12 pitch classes and their spellings in the two
//! notation systems found in lyric sheets:
//!
//! ```text
//! index     0   1    2   3    4   5   6    7    8    9   10   11
//! American  C   C#   D   D#   E   F   F#   G    G#   A   A#   B
//! Latin     Do  Do#  Re  Re#  Mi  Fa  Fa#  Sol  Sol# La  La#  Si
//! ```
//!
//! ## Enharmonic normalization
//! Flat spellings (`Bb`, `Eb`, `Sib`, `Mib`, ...) are accepted on input and
//! normalized to the sharp spelling of the same pitch class. Flats are never
//! produced as output: `normalize("Bb")` is `"A#"`, and nothing maps back.
//! The same arithmetic also accepts `Cb`, `Fb`, `E#` and `B#`.
//!
//! ## Notation systems never mix
//! A spelling keeps its system through normalization and transposition:
//! `transpose("Do", 2)` is `"Re"`, never `"D"`. Only [`NoteSpelling::in_system`]
//! crosses systems, and only the chord guide uses it.

use crate::error::ChordError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical American spellings, indexed by pitch class
pub const AMERICAN_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Canonical Latin (solfège) spellings, indexed by pitch class
pub const LATIN_NAMES: [&str; 12] = [
    "Do", "Do#", "Re", "Re#", "Mi", "Fa", "Fa#", "Sol", "Sol#", "La", "La#", "Si",
];

/// Natural note names and their pitch class, longest name first
const LATIN_NATURALS: [(&str, i32); 7] = [
    ("Sol", 7),
    ("Do", 0),
    ("Re", 2),
    ("Mi", 4),
    ("Fa", 5),
    ("La", 9),
    ("Si", 11),
];

const AMERICAN_NATURALS: [(&str, i32); 7] = [
    ("C", 0),
    ("D", 2),
    ("E", 4),
    ("F", 5),
    ("G", 7),
    ("A", 9),
    ("B", 11),
];

/// One of the 12 equal-tempered pitches, 0 = C/Do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Build a pitch class from any semitone count, reduced mod 12.
    /// Negative values wrap upwards: `-1` is B/Si.
    pub fn new(semitone: i32) -> Self {
        Self(semitone.rem_euclid(12) as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Shift by any number of semitones
    pub fn shift(self, semitones: i32) -> Self {
        Self::new(self.0 as i32 + semitones.rem_euclid(12))
    }
}

/// Naming system used for a root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotationSystem {
    /// Letter names: C D E F G A B
    #[default]
    American,
    /// Solfège syllables: Do Re Mi Fa Sol La Si
    Latin,
}

impl NotationSystem {
    /// The 12 canonical sharp spellings of this system
    pub fn names(self) -> &'static [&'static str; 12] {
        match self {
            NotationSystem::American => &AMERICAN_NAMES,
            NotationSystem::Latin => &LATIN_NAMES,
        }
    }

    fn naturals(self) -> &'static [(&'static str, i32); 7] {
        match self {
            NotationSystem::American => &AMERICAN_NATURALS,
            NotationSystem::Latin => &LATIN_NATURALS,
        }
    }
}

/// A pitch class spelled in one notation system.
///
/// Always displayed with the canonical sharp spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteSpelling {
    pub system: NotationSystem,
    pub pitch: PitchClass,
}

impl NoteSpelling {
    pub fn new(system: NotationSystem, pitch: PitchClass) -> Self {
        Self { system, pitch }
    }

    /// Canonical (sharp) name of this spelling
    pub fn name(&self) -> &'static str {
        self.system.names()[self.pitch.index()]
    }

    /// Move by `semitones`, staying in the same notation system
    pub fn transpose(self, semitones: i32) -> Self {
        Self {
            system: self.system,
            pitch: self.pitch.shift(semitones),
        }
    }

    /// Same pitch class, spelled in `system`
    pub fn in_system(self, system: NotationSystem) -> Self {
        Self {
            system,
            pitch: self.pitch,
        }
    }

    /// Match a root at the start of `input`.
    ///
    /// Latin syllables are tried before letters so that `Do` is never read as
    /// `D` followed by `o`. A single `#` or `b` directly after the natural name
    /// is taken as an accidental. Matching is case-sensitive.
    ///
    /// Returns the spelling and the number of bytes consumed.
    ///
    /// # Example
    /// ```
    /// use chordstage::notes::{NoteSpelling, NotationSystem};
    ///
    /// let (note, len) = NoteSpelling::parse_prefix("Sibm7").unwrap();
    /// assert_eq!(note.system, NotationSystem::Latin);
    /// assert_eq!(note.name(), "La#");
    /// assert_eq!(len, 3);
    /// ```
    pub fn parse_prefix(input: &str) -> Option<(Self, usize)> {
        Self::prefix_candidates(input).next()
    }

    /// Every root that matches at the start of `input`, Latin first.
    ///
    /// `Faug` yields both `Fa` (followed by `ug`) and `F` (followed by `aug`);
    /// callers pick the first one whose remainder makes sense.
    pub fn prefix_candidates(input: &str) -> impl Iterator<Item = (Self, usize)> + '_ {
        [NotationSystem::Latin, NotationSystem::American]
            .into_iter()
            .flat_map(|system| {
                system
                    .naturals()
                    .iter()
                    .map(move |&(natural, semitone)| (system, natural, semitone))
            })
            .filter_map(move |(system, natural, semitone)| {
                let rest = input.strip_prefix(natural)?;
                let (accidental, accidental_len) = match rest.as_bytes().first() {
                    Some(b'#') => (1, 1),
                    Some(b'b') => (-1, 1),
                    _ => (0, 0),
                };
                let pitch = PitchClass::new(semitone + accidental);
                Some((Self::new(system, pitch), natural.len() + accidental_len))
            })
    }
}

impl fmt::Display for NoteSpelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NoteSpelling {
    type Err = ChordError;

    /// Parse exactly one root, sharp or flat, in either system
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::prefix_candidates(s)
            .find(|&(_, len)| len == s.len())
            .map(|(note, _)| note)
            .ok_or_else(|| ChordError::UnknownNote(s.to_string()))
    }
}

/// Map any accepted spelling to the canonical sharp spelling of the same system.
///
/// # Example
/// ```
/// use chordstage::notes::normalize;
///
/// assert_eq!(normalize("Bb"), Some("A#"));
/// assert_eq!(normalize("Mib"), Some("Re#"));
/// assert_eq!(normalize("F#"), Some("F#"));
/// assert_eq!(normalize("H"), None);
/// ```
pub fn normalize(raw: &str) -> Option<&'static str> {
    raw.parse::<NoteSpelling>().ok().map(|note| note.name())
}

/// Normalize `root` and move it by `semitones` (any integer, reduced mod 12).
///
/// # Example
/// ```
/// use chordstage::notes::transpose;
///
/// assert_eq!(transpose("Do", 2), Some("Re"));
/// assert_eq!(transpose("B", 1), Some("C"));
/// assert_eq!(transpose("C", -1), Some("B"));
/// assert_eq!(transpose("Eb", 0), Some("D#"));
/// ```
pub fn transpose(root: &str, semitones: i32) -> Option<&'static str> {
    root.parse::<NoteSpelling>()
        .ok()
        .map(|note| note.transpose(semitones).name())
}
