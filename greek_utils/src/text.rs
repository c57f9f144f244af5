//! Greek text normalization for case and accent insensitive comparison.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Uppercase `text` with all diacritics removed.
///
/// Accents, diaeresis and combined marks (`ΰ`, `Ϊ́`) are stripped after
/// canonical decomposition, and final sigma folds to `Σ`.
///
/// # Example
/// ```
/// use greek_utils::text::grup;
///
/// assert_eq!(grup("Δοϊράνη special"), "ΔΟΙΡΑΝΗ SPECIAL");
/// ```
pub fn grup(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_uppercase()
}

/// Compare two strings ignoring case and Greek accents.
pub fn are_texts_equal(text1: &str, text2: &str) -> bool {
    grup(text1) == grup(text2)
}
