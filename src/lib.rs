//! # chordstage
//!
//! Chord recognition and transposition for lyric sheets with chords typed
//! inline, in American (`C D E`) or Latin (`Do Re Mi`) notation.
//!
//! Songs are stored as raw text. Every render classifies each line, picks out
//! the chord tokens, shifts them by a semitone offset and emits either HTML
//! markup for a stage display or a structured [`SheetLine`] model.
//!
//! ```
//! use chordstage::{render_text, transpose_text, Style};
//!
//! let song = "Do          Sol\nTú has venido a la orilla";
//! assert_eq!(transpose_text(song, 2), "Re          La\nTú has venido a la orilla");
//!
//! let html = render_text(song, 2, &Style::default());
//! assert!(html.contains(">Re</span>"));
//! ```

pub mod chord;
pub mod classify;
pub mod error;
pub mod guide;
pub mod lexer;
pub mod notes;
pub mod render;
pub mod sanitize;
pub mod sheet;
pub mod song;
pub mod transpose;

pub use chord::{parse_chord, ChordSymbol, Delimiting};
pub use classify::{classify_line, LineKind};
pub use error::ChordError;
pub use guide::{chord_tones, describe_chord};
pub use lexer::{tokenize_and_classify, tokenize_line, LocatedToken, Token};
pub use notes::{NotationSystem, NoteSpelling, PitchClass};
pub use render::{render_line, render_sheet, render_text, Style};
pub use sanitize::sanitize;
pub use sheet::{analyze, analyze_line, to_plain_text, Alignment, SheetLine, SheetToken, TokenKind};
pub use song::{Song, SongMetadata};
pub use transpose::{transpose_chord, transpose_text, transpose_token};
