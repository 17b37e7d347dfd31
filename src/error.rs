//! # Error Types
//!
//! The engine itself never fails on lyric text: anything that is not a chord is
//! passed through as plain text. Errors only come from the edges around it:
//! parsing a single note or chord on request, reading song front matter, loading
//! style files and touching the filesystem.
//!
//! ## Usage
//! ```rust
//! use chordstage::{ChordError, Song};
//!
//! match Song::parse("---\ntitle: [unclosed\n---\nDo Sol") {
//!     Ok(song) => println!("{}", song.body),
//!     Err(ChordError::MetadataError(message)) => eprintln!("Bad header: {}", message),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordError {
    /// The input is not exactly one note name in either notation system.
    ///
    /// # Example
    /// ```
    /// # use chordstage::ChordError;
    /// let err = ChordError::UnknownNote("H".to_string());
    /// assert_eq!(err.to_string(), "Unknown note name: H");
    /// ```
    #[error("Unknown note name: {0}")]
    UnknownNote(String),

    /// The input does not match the chord grammar.
    #[error("Invalid chord symbol: {0}")]
    InvalidChord(String),

    /// The YAML front matter of a song could not be read.
    ///
    /// # Example
    /// ```
    /// # use chordstage::ChordError;
    /// let err = ChordError::MetadataError("transpose must be an integer".to_string());
    /// assert_eq!(err.to_string(), "Invalid metadata: transpose must be an integer");
    /// ```
    #[error("Invalid metadata: {0}")]
    MetadataError(String),

    /// A style file could not be read.
    #[error("Invalid style: {0}")]
    StyleError(String),

    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
