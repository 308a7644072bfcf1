// Copyright 2026 The Kiemtin Project
// SPDX-License-Identifier: Apache-2.0

// Keyword signal extraction: substring containment over normalized text.
//
// Matching is deliberately substring-level, not tokenized: a keyword may
// match inside a longer word. Scorer weights were tuned against this
// behavior, so it is part of the contract.

use super::KeywordMatches;

/// Count distinct keywords contained in `normalized`.
///
/// The matched list preserves the keyword list's declaration order; a
/// keyword repeated in the text still counts once.
pub fn match_keywords(normalized: &str, keywords: &[String]) -> KeywordMatches {
    let matched: Vec<String> = keywords
        .iter()
        .filter(|kw| normalized.contains(kw.as_str()))
        .cloned()
        .collect();
    KeywordMatches {
        count: matched.len(),
        matched,
    }
}

/// Frequency-weighted variant used by topic classification:
/// `total = match_count + 0.5 × total_occurrences`, where occurrences are
/// non-overlapping substring hits.
pub fn match_keywords_weighted(normalized: &str, keywords: &[String]) -> (f64, Vec<String>) {
    let mut match_count = 0usize;
    let mut total_occurrences = 0usize;
    let mut matched = Vec::new();

    for kw in keywords {
        let occurrences = normalized.matches(kw.as_str()).count();
        if occurrences > 0 {
            match_count += 1;
            total_occurrences += occurrences;
            matched.push(kw.clone());
        }
    }

    (match_count as f64 + 0.5 * total_occurrences as f64, matched)
}
