//! Input cleanup for song bodies pasted from web pages and chat apps.

/// Accented Spanish letters kept besides ASCII
const SPANISH_LETTERS: &str = "áéíóúÁÉÍÓÚñÑüÜ";

/// Symbols that can be part of a chord or annotation
const CHORD_SYMBOLS: &[char] = &['#', '+', '/', '[', ']', '°'];

fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c.is_whitespace()
        || CHORD_SYMBOLS.contains(&c)
        || SPANISH_LETTERS.contains(c)
}

/// Drop every character that cannot appear in a chord or a Spanish lyric.
///
/// Whitespace (line breaks included) is kept as is, so chord columns do not
/// move unless a dropped character sat in front of them.
///
/// # Example
/// ```
/// use chordstage::sanitize;
///
/// assert_eq!(sanitize("Do* Sol!"), "Do Sol");
/// assert_eq!(sanitize("Señor, ¿a quién iremos?"), "Señor a quién iremos");
/// ```
pub fn sanitize(text: &str) -> String {
    let cleaned: String = text.chars().filter(|&c| is_kept(c)).collect();
    let dropped = text.chars().count() - cleaned.chars().count();
    if dropped > 0 {
        log::debug!("Sanitizer dropped {} characters", dropped);
    }
    cleaned
}
