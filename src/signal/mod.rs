// Copyright 2026 The Kiemtin Project
// SPDX-License-Identifier: Apache-2.0

// Signal types for the analyzers.
//
// Extractors measure raw features of a text (keyword hits, ratios,
// boolean flags) as Signals; scorers combine them into verdicts. Every
// type here is a plain value: derived once per call, immutable, owned by
// the caller.

pub mod keywords;
pub mod structure;

use serde::Serialize;

/// Keyword hits against one keyword list.
///
/// `count` is the number of DISTINCT keywords found; `matched` preserves
/// the list's declaration order. Repeats of the same keyword in the text
/// do not raise `count` (the frequency-weighted variant in
/// [`keywords::match_keywords_weighted`] is the exception).
#[derive(Debug, Clone, Default, Serialize)]
pub struct KeywordMatches {
    pub count: usize,
    pub matched: Vec<String>,
}

impl KeywordMatches {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Features measured over the ORIGINAL (non-normalized) text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StructuralFeatures {
    /// Character count of the normalized text.
    pub text_length: usize,
    /// `!` count over original char count; 0.0 for empty input.
    pub exclamation_ratio: f64,
    /// Uppercase char count over original char count; 0.0 for empty input.
    pub upper_ratio: f64,
    /// Any ASCII digit present.
    pub has_numbers: bool,
    /// A `\d{1,2}[/-]\d{1,2}[/-]\d{2,4}` date present.
    pub has_dates: bool,
    /// Any data-citing phrase present (case-insensitive).
    pub has_specific_info: bool,
}

/// The full signal breakdown feeding the fake-news risk score.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignalSet {
    pub suspicious: KeywordMatches,
    pub reliable: KeywordMatches,
    pub emotional: KeywordMatches,
    pub structure: StructuralFeatures,
}

impl SignalSet {
    /// True when no keyword list matched at all. Used by the confidence
    /// discount for short, signal-free texts.
    pub fn no_keyword_evidence(&self) -> bool {
        self.suspicious.is_empty() && self.reliable.is_empty() && self.emotional.is_empty()
    }
}
