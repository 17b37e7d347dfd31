use crate::chord::ChordSymbol;
use crate::sheet::{analyze, to_plain_text, Alignment};
use std::borrow::Cow;

/// Transpose a chord's root and slash bass, keeping its suffix as written
pub fn transpose_chord(chord: &ChordSymbol, semitones: i32) -> ChordSymbol {
    ChordSymbol {
        root: chord.root.transpose(semitones),
        suffix: chord.suffix.clone(),
        bass: chord.bass.map(|bass| bass.transpose(semitones)),
    }
}

/// Text of a chord token after transposition.
///
/// With `semitones == 0` the source text is returned untouched, so flat
/// spellings survive a zero offset. Any other offset (including multiples of
/// 12) goes through the note table and comes out in sharp spelling.
///
/// # Example
/// ```
/// use chordstage::{transpose_token, ChordSymbol};
///
/// let chord = ChordSymbol::parse("Bbm7").unwrap();
/// assert_eq!(transpose_token("Bbm7", &chord, false, 0), "Bbm7");
/// assert_eq!(transpose_token("Bbm7", &chord, false, 2), "Cm7");
/// assert_eq!(transpose_token("Bbm7", &chord, false, 12), "A#m7");
/// ```
pub fn transpose_token<'a>(
    text: &'a str,
    chord: &ChordSymbol,
    bracketed: bool,
    semitones: i32,
) -> Cow<'a, str> {
    if semitones == 0 {
        return Cow::Borrowed(text);
    }

    let shifted = transpose_chord(chord, semitones);
    log::trace!("{} -> {} ({:+})", text, shifted, semitones);
    if bracketed {
        Cow::Owned(format!("[{}]", shifted))
    } else {
        Cow::Owned(shifted.to_string())
    }
}

/// Transpose every chord in a text block and return plain text.
///
/// Lines, words and whitespace are kept as they are; column drift caused by
/// longer or shorter chord names is not corrected. Use
/// [`to_plain_text`] with [`Alignment::Compensate`] for that.
///
/// # Example
/// ```
/// use chordstage::transpose_text;
///
/// let song = "Do          Sol\nTú has venido a la orilla";
/// assert_eq!(
///     transpose_text(song, 2),
///     "Re          La\nTú has venido a la orilla"
/// );
/// ```
pub fn transpose_text(text: &str, semitones: i32) -> String {
    to_plain_text(&analyze(text, semitones), Alignment::Drift)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord(s: &str) -> ChordSymbol {
        ChordSymbol::parse(s).unwrap()
    }

    #[test]
    fn test_suffix_is_preserved() {
        let cases = [
            ("Am", 2, "Bm"),
            ("G7", 5, "C7"),
            ("Cmaj7", -1, "Bmaj7"),
            ("Dsus4", 1, "D#sus4"),
            ("Em7b5", 3, "Gm7b5"),
            ("Solm", 2, "Lam"),
            ("Si7", 1, "Do7"),
        ];
        for (input, semitones, expected) in cases {
            assert_eq!(
                transpose_chord(&chord(input), semitones).to_string(),
                expected,
                "{} by {}",
                input,
                semitones
            );
        }
    }

    #[test]
    fn test_slash_bass_moves_with_root() {
        assert_eq!(transpose_chord(&chord("D/F#"), 2).to_string(), "E/G#");
        assert_eq!(transpose_chord(&chord("Rem/Do"), -2).to_string(), "Dom/La#");
    }

    #[test]
    fn test_full_octave_is_identity_on_pitch() {
        for symbol in ["C", "Dm", "G7"] {
            let c = chord(symbol);
            assert_eq!(transpose_chord(&c, -12), c);
            assert_eq!(transpose_chord(&c, 24), c);
        }
    }

    #[test]
    fn test_zero_keeps_source_text() {
        let c = chord("Eb");
        assert!(matches!(transpose_token("Eb", &c, false, 0), Cow::Borrowed("Eb")));
    }

    #[test]
    fn test_bracketed_token_keeps_brackets() {
        let c = chord("Am");
        assert_eq!(transpose_token("[Am]", &c, true, 3), "[Cm]");
    }

    #[test]
    fn test_transpose_text_keeps_lyrics() {
        let text = "A      La\nA la orilla del mar sereno";
        assert_eq!(
            transpose_text(text, 1),
            "A#      La#\nA la orilla del mar sereno"
        );
    }
}
