// Extractive summarization: score sentences, pick the best distinct
// ones, keep document order.
//
// The summarizer is total: every input yields a well-formed result. Texts
// too short to summarize come back verbatim at ratio 1.0, and the
// degenerate-selection path is an explicit fallback branch, never a
// failure.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::lexicon::{default_lexicon, Lexicon};
use crate::normalize::{word_list, word_set};
use crate::signal::structure::date_pattern;

// ---------------------------------------------------------------------------
// Tuning constants
// ---------------------------------------------------------------------------

/// Trimmed texts under this many chars are returned verbatim.
const MIN_INPUT_CHARS: usize = 80;

/// Split segments under this many chars are discarded (keeps meaningful
/// clauses only).
const MIN_SENTENCE_CHARS: usize = 10;

/// Position bonuses, mutually exclusive in this order.
const FIRST_SENTENCE_BONUS: f64 = 3.0;
const LAST_SENTENCE_BONUS: f64 = 2.0;
const EARLY_BONUS: f64 = 1.5;
const LATE_BONUS: f64 = 1.0;

/// Word-count bonuses, mutually exclusive in this order.
const IDEAL_LENGTH_BONUS: f64 = 2.0; // 10–25 words
const GOOD_LENGTH_BONUS: f64 = 1.5; // 8–30 words
const TOO_SHORT_PENALTY: f64 = -1.0; // under 5 words
const TOO_LONG_PENALTY: f64 = -0.5; // over 40 words

/// Per distinct importance keyword, capped.
const KEYWORD_BONUS: f64 = 0.5;
const KEYWORD_BONUS_CAP: f64 = 2.0;

/// Per sentence word (over 3 chars) whose whole-text frequency exceeds
/// one, capped.
const FREQUENCY_BONUS: f64 = 0.1;
const FREQUENCY_BONUS_CAP: f64 = 1.0;

/// Numeric content bonuses.
const DIGIT_BONUS: f64 = 0.5;
const DATE_BONUS: f64 = 0.3;

/// A candidate sharing more than this fraction of its own words with an
/// already-selected sentence is redundant.
const REDUNDANCY_THRESHOLD: f64 = 0.6;

/// Fallback truncation: texts over 50 words are cut to the first 40.
const FALLBACK_TRIGGER_WORDS: usize = 50;
const FALLBACK_KEPT_WORDS: usize = 40;

/// Sentence boundary: runs of terminal punctuation.
fn sentence_splitter() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence splitter is invalid"))
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// How the summarizer disposed of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStatus {
    /// Sentences were scored and selected.
    Summarized,
    /// Input under the minimum length; returned verbatim.
    TooShort,
    /// Two or fewer usable sentences; returned verbatim.
    FewSentences,
    /// Selection degenerated; first words returned instead.
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResult {
    pub summary_text: String,
    /// Summary chars over source chars; 1.0 when nothing was condensed.
    pub compression_ratio: f64,
    /// Scores of the selected sentences, in summary order.
    pub selected_scores: Vec<f64>,
    pub status: SummaryStatus,
    pub message: String,
}

impl SummaryResult {
    fn verbatim(text: &str, status: SummaryStatus, message: &str) -> Self {
        Self {
            summary_text: text.trim().to_string(),
            compression_ratio: 1.0,
            selected_scores: Vec::new(),
            status,
            message: message.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Summarizer
// ---------------------------------------------------------------------------

pub struct Summarizer {
    lexicon: &'static Lexicon,
}

struct ScoredSentence {
    index: usize,
    text: String,
    score: f64,
}

impl Summarizer {
    pub fn new() -> Self {
        Self {
            lexicon: default_lexicon(),
        }
    }

    /// Summarize a text. Total; never fails.
    pub fn summarize(&self, text: &str) -> SummaryResult {
        let trimmed = text.trim();
        if trimmed.chars().count() < MIN_INPUT_CHARS {
            return SummaryResult::verbatim(text, SummaryStatus::TooShort, "too short to summarize");
        }

        let sentences: Vec<String> = sentence_splitter()
            .split(trimmed)
            .map(str::trim)
            .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
            .map(str::to_string)
            .collect();

        if sentences.len() <= 2 {
            return SummaryResult::verbatim(
                text,
                SummaryStatus::FewSentences,
                "already condensed",
            );
        }

        match self.select(trimmed, &sentences) {
            Some(selected) => {
                let summary_text = selected
                    .iter()
                    .map(|s| s.text.as_str())
                    .collect::<Vec<_>>()
                    .join(". ")
                    + ".";
                let compression_ratio =
                    summary_text.chars().count() as f64 / text.chars().count() as f64;
                let message =
                    format!("condensed {} sentences to {}", sentences.len(), selected.len());

                tracing::debug!(
                    sentences = sentences.len(),
                    selected = selected.len(),
                    compression_ratio,
                    "summary produced"
                );

                SummaryResult {
                    summary_text,
                    compression_ratio,
                    selected_scores: selected.iter().map(|s| s.score).collect(),
                    status: SummaryStatus::Summarized,
                    message,
                }
            }
            None => fallback_truncate(text),
        }
    }

    /// Score every sentence, greedily pick the top distinct ones, restore
    /// document order. None when selection degenerates.
    fn select(&self, full_text: &str, sentences: &[String]) -> Option<Vec<ScoredSentence>> {
        let frequencies = word_frequencies(full_text);
        let total = sentences.len();

        let mut scored: Vec<ScoredSentence> = sentences
            .iter()
            .enumerate()
            .map(|(index, sentence)| ScoredSentence {
                index,
                text: sentence.clone(),
                score: self.score_sentence(sentence, index, total, &frequencies),
            })
            .collect();

        // Stable sort: ties keep document order.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        let target = target_count(total);
        let mut selected: Vec<ScoredSentence> = Vec::with_capacity(target);
        let mut selected_words: Vec<std::collections::HashSet<String>> = Vec::new();

        for candidate in scored {
            if selected.len() == target {
                break;
            }
            let candidate_words = word_set(&candidate.text);
            if candidate_words.is_empty() {
                continue;
            }
            let redundant = selected_words.iter().any(|chosen| {
                let shared = candidate_words.intersection(chosen).count();
                shared as f64 / candidate_words.len() as f64 > REDUNDANCY_THRESHOLD
            });
            if redundant {
                continue;
            }
            selected_words.push(candidate_words);
            selected.push(candidate);
        }

        if selected.is_empty() {
            return None;
        }
        selected.sort_by_key(|s| s.index);
        Some(selected)
    }

    fn score_sentence(
        &self,
        sentence: &str,
        index: usize,
        total: usize,
        frequencies: &HashMap<String, usize>,
    ) -> f64 {
        let mut score = 0.0;

        // Position
        if index == 0 {
            score += FIRST_SENTENCE_BONUS;
        } else if index == total - 1 {
            score += LAST_SENTENCE_BONUS;
        } else if (index as f64) < total as f64 * 0.3 {
            score += EARLY_BONUS;
        } else if index as f64 >= total as f64 * 0.7 {
            score += LATE_BONUS;
        }

        // Length
        let words = word_list(sentence);
        let word_count = words.len();
        if (10..=25).contains(&word_count) {
            score += IDEAL_LENGTH_BONUS;
        } else if (8..=30).contains(&word_count) {
            score += GOOD_LENGTH_BONUS;
        } else if word_count < 5 {
            score += TOO_SHORT_PENALTY;
        } else if word_count > 40 {
            score += TOO_LONG_PENALTY;
        }

        // Importance keywords
        let lowered = sentence.to_lowercase();
        let keyword_hits = self
            .lexicon
            .importance
            .iter()
            .filter(|kw| lowered.contains(kw.as_str()))
            .count();
        score += (keyword_hits as f64 * KEYWORD_BONUS).min(KEYWORD_BONUS_CAP);

        // Term frequency
        let mut frequency_bonus = 0.0;
        for word in &words {
            if word.chars().count() > 3 && frequencies.get(word).copied().unwrap_or(0) > 1 {
                frequency_bonus += FREQUENCY_BONUS;
            }
        }
        score += frequency_bonus.min(FREQUENCY_BONUS_CAP);

        // Numeric content
        if sentence.chars().any(|c| c.is_ascii_digit()) {
            score += DIGIT_BONUS;
            if date_pattern().is_match(sentence) {
                score += DATE_BONUS;
            }
        }

        score
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

/// How many sentences a summary should keep.
fn target_count(total: usize) -> usize {
    if total <= 4 {
        2
    } else if total <= 8 {
        3
    } else {
        (total / 3).clamp(2, 4)
    }
}

fn word_frequencies(text: &str) -> HashMap<String, usize> {
    let mut frequencies = HashMap::new();
    for word in word_list(text) {
        *frequencies.entry(word).or_insert(0) += 1;
    }
    frequencies
}

/// Last-resort summary: the first words of the text.
fn fallback_truncate(text: &str) -> SummaryResult {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > FALLBACK_TRIGGER_WORDS {
        let summary_text = words[..FALLBACK_KEPT_WORDS].join(" ") + "...";
        let compression_ratio = summary_text.chars().count() as f64 / text.chars().count() as f64;
        SummaryResult {
            summary_text,
            compression_ratio,
            selected_scores: Vec::new(),
            status: SummaryStatus::Fallback,
            message: "truncated to leading words".to_string(),
        }
    } else {
        SummaryResult::verbatim(text, SummaryStatus::Fallback, "kept unchanged")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
