//! # Chord Guide
//!
//! Spells out the notes of a chord for players who do not know the shape
//! (`Am` → `La-Do-Mi`). Informational only; transposition never uses it.
//!
//! Tones come from the recognized suffix elements:
//!
//! | Element | Effect |
//! |---------|--------|
//! | `m`, `min` | minor third |
//! | `dim`, `°` | minor third, flat fifth (`dim7` adds a diminished seventh) |
//! | `aug`, `+` | sharp fifth |
//! | `sus2`, `sus4`, `sus` | second or fourth instead of the third |
//! | `6` | sixth |
//! | `7` | minor seventh (`maj7`, `M7` major seventh) |
//! | `9` | seventh and ninth |
//! | `add9`, `add2`, `add4` | the added tone |
//!
//! Anything else (alterations, `11`, `13`) leaves the plain triad.

use crate::chord::{ChordSymbol, SuffixElement, SuffixWord};
use crate::notes::{NotationSystem, NoteSpelling};

/// Semitones above the root for a scale degree usable with `add`
fn added_degree(degree: u8) -> Option<i32> {
    match degree {
        2 => Some(2),
        4 => Some(5),
        9 => Some(14),
        _ => None,
    }
}

/// Semitone offsets of every chord tone above the root, lowest first
fn intervals(chord: &ChordSymbol) -> Vec<i32> {
    let mut third = 4;
    let mut fifth = 7;
    let mut extensions = Vec::new();

    for SuffixElement { word, degree } in chord.elements() {
        match word {
            Some(SuffixWord::Minor) => third = 3,
            Some(SuffixWord::Diminished) => {
                third = 3;
                fifth = 6;
            }
            Some(SuffixWord::Augmented) => fifth = 8,
            Some(SuffixWord::Suspended) => third = if degree == Some(2) { 2 } else { 5 },
            Some(SuffixWord::Major) | Some(SuffixWord::Added) | None => {}
        }

        match (word, degree) {
            (_, None) | (Some(SuffixWord::Suspended), _) => {}
            (Some(SuffixWord::Added), Some(d)) => extensions.extend(added_degree(d)),
            (Some(SuffixWord::Major), Some(7)) => extensions.push(11),
            (Some(SuffixWord::Major), Some(9)) => extensions.extend([11, 14]),
            (Some(SuffixWord::Diminished), Some(7)) => extensions.push(9),
            (_, Some(6)) => extensions.push(9),
            (_, Some(7)) => extensions.push(10),
            (_, Some(9)) => extensions.extend([10, 14]),
            _ => {}
        }
    }

    let mut intervals = vec![0, third, fifth];
    intervals.extend(extensions);
    intervals.sort_unstable();
    intervals.dedup();
    intervals
}

/// Tones of `chord`, root first, spelled in the root's notation system.
///
/// A slash bass that is not already a chord tone is listed first.
pub fn chord_tones(chord: &ChordSymbol) -> Vec<NoteSpelling> {
    let mut tones: Vec<NoteSpelling> = intervals(chord)
        .into_iter()
        .map(|interval| chord.root.transpose(interval))
        .collect();

    if let Some(bass) = chord.bass {
        let bass = bass.in_system(chord.root.system);
        if !tones.contains(&bass) {
            tones.insert(0, bass);
        }
    }
    tones
}

/// Tones of a chord symbol joined with `-`, spelled in `system`.
///
/// Returns `None` when `symbol` is not a chord.
///
/// # Example
/// ```
/// use chordstage::{describe_chord, NotationSystem};
///
/// assert_eq!(describe_chord("C", NotationSystem::Latin).as_deref(), Some("Do-Mi-Sol"));
/// assert_eq!(describe_chord("Lam", NotationSystem::American).as_deref(), Some("A-C-E"));
/// assert_eq!(describe_chord("Gloria", NotationSystem::American), None);
/// ```
pub fn describe_chord(symbol: &str, system: NotationSystem) -> Option<String> {
    let chord = ChordSymbol::parse(symbol)?;
    let names: Vec<&str> = chord_tones(&chord)
        .into_iter()
        .map(|tone| tone.in_system(system).name())
        .collect();
    Some(names.join("-"))
}
