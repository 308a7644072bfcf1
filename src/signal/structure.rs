// Copyright 2026 The Kiemtin Project
// SPDX-License-Identifier: Apache-2.0

// Structural feature extraction, measured over the ORIGINAL text.
//
// Normalization strips exactly the characters these features count
// (punctuation, digits, case), so the extractor takes both forms: the
// original for ratios and flags, the normalized for text_length.

use std::sync::OnceLock;

use regex::Regex;

use super::StructuralFeatures;
use crate::lexicon::Lexicon;

/// Date-like pattern: 20/05/2024, 1-1-99, 20/05/24.
pub(crate) fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\d{1,2}[/-]\d{1,2}[/-]\d{2,4}").expect("date pattern is invalid")
    })
}

/// Measure structural features. Total; zero/false defaults on empty input.
pub fn extract_structural_features(
    original: &str,
    normalized: &str,
    lexicon: &Lexicon,
) -> StructuralFeatures {
    let char_count = original.chars().count();
    if char_count == 0 {
        return StructuralFeatures::default();
    }

    let exclamations = original.chars().filter(|c| *c == '!').count();
    let uppercase = original.chars().filter(|c| c.is_uppercase()).count();
    let lowered = original.to_lowercase();

    StructuralFeatures {
        text_length: normalized.chars().count(),
        exclamation_ratio: exclamations as f64 / char_count as f64,
        upper_ratio: uppercase as f64 / char_count as f64,
        has_numbers: original.chars().any(|c| c.is_ascii_digit()),
        has_dates: date_pattern().is_match(original),
        has_specific_info: lexicon
            .specific_info
            .iter()
            .any(|phrase| lowered.contains(phrase.as_str())),
    }
}
