// Text normalization, the shared first step of every analyzer.
//
// Normalization is a pure string transformation: NFC fold, lowercase,
// strip punctuation and digits, collapse whitespace. It is idempotent:
// normalizing already-normalized text returns the same result.

use unicode_normalization::UnicodeNormalization;

/// Normalize text for keyword matching.
///
/// Applies, in order:
///
/// 1. NFC unicode normalization (composed/decomposed Vietnamese spellings
///    agree with the keyword tables)
/// 2. lowercasing
/// 3. removal of every character that is neither alphabetic nor whitespace
///    (drops punctuation and digits in one pass)
/// 4. whitespace-run collapse and trim
///
/// Total over all inputs; empty in, empty out.
pub fn normalize(text: &str) -> String {
    let folded: String = text.nfc().collect();
    folded
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercased alphanumeric words of a text, in order.
///
/// Unlike [`normalize`], digits are kept: the summarizer's frequency and
/// redundancy logic treats "2024" as a word.
pub fn word_list(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(|s| s.to_string())
        .collect()
}

/// Distinct lowercased alphanumeric words of a text.
pub fn word_set(text: &str) -> std::collections::HashSet<String> {
    word_list(text).into_iter().collect()
}
