// Copyright 2026 The Kiemtin Project
// SPDX-License-Identifier: Apache-2.0

// Fake-news risk scoring: weighted multi-signal scoring with sigmoid
// squashing and a bounded confidence remap.
//
// The scorer is total: every string input, including empty and
// arbitrarily malformed text, yields a well-formed verdict. Invalid
// input is a status on the result, never an error.

use rand::Rng;
use serde::Serialize;

use crate::lexicon::{default_lexicon, Lexicon};
use crate::normalize::normalize;
use crate::signal::keywords::match_keywords;
use crate::signal::structure::extract_structural_features;
use crate::signal::SignalSet;

// ---------------------------------------------------------------------------
// Weights and thresholds
// ---------------------------------------------------------------------------

/// Starting score before any signal is applied.
const BASE_SCORE: f64 = 0.4;

/// Per distinct suspicious/clickbait keyword.
const SUSPICIOUS_WEIGHT: f64 = 0.08;

/// Per distinct reliable-source keyword (subtracted).
const RELIABLE_WEIGHT: f64 = 0.12;

/// Per distinct emotional-language keyword.
const EMOTIONAL_WEIGHT: f64 = 0.05;

/// Added when normalized text is under 50 chars. Stacks with the
/// under-100 bonus.
const VERY_SHORT_BONUS: f64 = 0.15;

/// Added when normalized text is under 100 chars.
const SHORT_BONUS: f64 = 0.08;

/// Subtracted when normalized text exceeds 2000 chars.
const LONG_RELIEF: f64 = 0.05;

/// Exclamation ratio above which the ratio contributes, scaled ×5 and
/// capped at 0.2.
const EXCLAMATION_THRESHOLD: f64 = 0.02;
const EXCLAMATION_SCALE: f64 = 5.0;
const EXCLAMATION_CAP: f64 = 0.2;

/// Uppercase ratio above which the ratio contributes, scaled ×2 and
/// capped at 0.15.
const UPPER_THRESHOLD: f64 = 0.05;
const UPPER_SCALE: f64 = 2.0;
const UPPER_CAP: f64 = 0.15;

/// Specific/quantified claims reduce risk.
const NUMBERS_RELIEF: f64 = 0.05;
const DATES_RELIEF: f64 = 0.08;
const SPECIFIC_INFO_RELIEF: f64 = 0.1;

/// Half-width of the uniform jitter added to the raw total.
const JITTER_RANGE: f64 = 0.05;

/// Sigmoid centering and steepness: total = 0.5 maps to risk 0.5.
const SIGMOID_CENTER: f64 = 0.5;
const SIGMOID_SCALE: f64 = 6.0;

/// Risk above which the verdict is fake.
const FAKE_THRESHOLD: f64 = 0.55;

/// Normalized texts shorter than this are not scored at all.
const MIN_SCORED_CHARS: usize = 10;

/// Confidence never leaves [0.5, 0.89]: the cap keeps the engine from
/// claiming certainty it cannot have.
const CONFIDENCE_FLOOR: f64 = 0.5;
const CONFIDENCE_CAP: f64 = 0.89;

/// Below this normalized length, a verdict with zero keyword evidence has
/// its confidence discounted ×0.7 (floored at 0.5).
const LOW_EVIDENCE_CHARS: usize = 100;
const LOW_EVIDENCE_DISCOUNT: f64 = 0.7;

// ---------------------------------------------------------------------------
// Jitter source
// ---------------------------------------------------------------------------

/// Source of the per-call jitter draw, in [-1.0, 1.0] (scaled by
/// [`JITTER_RANGE`] at the use site).
///
/// The production scorer intentionally denies bit-exact reproducibility;
/// the seam exists so tests and reproducible runs can pin the draw.
pub trait JitterSource: Send + Sync {
    fn draw(&self) -> f64;
}

/// Default source: a fresh draw from the thread-local RNG per call. No
/// state is shared between calls.
pub struct UniformJitter;

impl JitterSource for UniformJitter {
    fn draw(&self) -> f64 {
        rand::thread_rng().gen_range(-1.0..=1.0)
    }
}

/// Fixed draw. `PinnedJitter(0.0)` makes the scorer deterministic.
pub struct PinnedJitter(pub f64);

impl JitterSource for PinnedJitter {
    fn draw(&self) -> f64 {
        self.0.clamp(-1.0, 1.0)
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// How the scorer disposed of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    /// Full pipeline ran.
    Completed,
    /// Empty or whitespace-only input; neutral verdict returned.
    EmptyInput,
    /// Under the minimum scorable length; weak-real verdict returned.
    TooShort,
}

/// Per-component contributions to the raw total, for explainability.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub suspicious_score: f64,
    pub reliable_score: f64,
    pub structure_score: f64,
    pub emotional_score: f64,
    pub specificity_score: f64,
    pub jitter: f64,
    /// Raw weighted sum before the sigmoid.
    pub total: f64,
}

/// The scorer's verdict. Always well-formed: `confidence` in
/// [0.5, 0.89], `risk_score` in (0, 1).
#[derive(Debug, Clone, Serialize)]
pub struct FakeNewsVerdict {
    pub is_fake: bool,
    pub confidence: f64,
    pub risk_score: f64,
    pub signals: SignalSet,
    pub breakdown: ScoreBreakdown,
    pub status: ScoreStatus,
    pub message: String,
}

impl FakeNewsVerdict {
    fn degraded(status: ScoreStatus, confidence: f64, message: &str) -> Self {
        Self {
            is_fake: false,
            confidence,
            risk_score: 0.5,
            signals: SignalSet::default(),
            breakdown: ScoreBreakdown::default(),
            status,
            message: message.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Scorer
// ---------------------------------------------------------------------------

pub struct FakeNewsScorer {
    lexicon: &'static Lexicon,
    jitter: Box<dyn JitterSource>,
}

impl FakeNewsScorer {
    pub fn new() -> Self {
        Self::with_jitter(Box::new(UniformJitter))
    }

    pub fn with_jitter(jitter: Box<dyn JitterSource>) -> Self {
        Self {
            lexicon: default_lexicon(),
            jitter,
        }
    }

    /// Score a text for fake-news risk.
    pub fn score(&self, text: &str) -> FakeNewsVerdict {
        if text.trim().is_empty() {
            return FakeNewsVerdict::degraded(ScoreStatus::EmptyInput, 0.5, "empty input");
        }

        let normalized = normalize(text);
        let normalized_len = normalized.chars().count();
        if normalized_len < MIN_SCORED_CHARS {
            return FakeNewsVerdict::degraded(ScoreStatus::TooShort, 0.6, "too short to score");
        }

        let signals = SignalSet {
            suspicious: match_keywords(&normalized, &self.lexicon.suspicious),
            reliable: match_keywords(&normalized, &self.lexicon.reliable),
            emotional: match_keywords(&normalized, &self.lexicon.emotional),
            structure: extract_structural_features(text, &normalized, self.lexicon),
        };

        let suspicious_score = SUSPICIOUS_WEIGHT * signals.suspicious.count as f64;
        let reliable_score = RELIABLE_WEIGHT * signals.reliable.count as f64;
        let emotional_score = EMOTIONAL_WEIGHT * signals.emotional.count as f64;

        let mut structure_score = 0.0;
        if normalized_len < 50 {
            structure_score += VERY_SHORT_BONUS;
        }
        if normalized_len < 100 {
            structure_score += SHORT_BONUS;
        }
        if normalized_len > 2000 {
            structure_score -= LONG_RELIEF;
        }
        if signals.structure.exclamation_ratio > EXCLAMATION_THRESHOLD {
            structure_score +=
                (signals.structure.exclamation_ratio * EXCLAMATION_SCALE).min(EXCLAMATION_CAP);
        }
        if signals.structure.upper_ratio > UPPER_THRESHOLD {
            structure_score += (signals.structure.upper_ratio * UPPER_SCALE).min(UPPER_CAP);
        }

        let mut specificity_score = 0.0;
        if signals.structure.has_numbers {
            specificity_score -= NUMBERS_RELIEF;
        }
        if signals.structure.has_dates {
            specificity_score -= DATES_RELIEF;
        }
        if signals.structure.has_specific_info {
            specificity_score -= SPECIFIC_INFO_RELIEF;
        }

        let jitter = self.jitter.draw() * JITTER_RANGE;
        let total = BASE_SCORE + suspicious_score + structure_score + emotional_score
            + specificity_score
            - reliable_score
            + jitter;

        let risk_score = sigmoid((total - SIGMOID_CENTER) * SIGMOID_SCALE);
        let is_fake = risk_score > FAKE_THRESHOLD;

        let mut confidence = remap_confidence(risk_score);
        if normalized_len < LOW_EVIDENCE_CHARS && signals.no_keyword_evidence() {
            confidence = (confidence * LOW_EVIDENCE_DISCOUNT).max(CONFIDENCE_FLOOR);
        }

        tracing::debug!(
            is_fake,
            risk_score,
            confidence,
            suspicious = signals.suspicious.count,
            reliable = signals.reliable.count,
            "fake-news score computed"
        );

        FakeNewsVerdict {
            is_fake,
            confidence,
            risk_score,
            signals,
            breakdown: ScoreBreakdown {
                base: BASE_SCORE,
                suspicious_score,
                reliable_score,
                structure_score,
                emotional_score,
                specificity_score,
                jitter,
                total,
            },
            status: ScoreStatus::Completed,
            message: "analysis complete".to_string(),
        }
    }
}

impl Default for FakeNewsScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Map the squashed risk score to a bounded confidence.
///
/// Piecewise-linear and asymmetric: the fake side climbs fast out of the
/// threshold then flattens; the real side climbs gently then flattens.
/// Both sides land exactly on the 0.89 cap at the extremes, so extreme
/// raw scores earn diminishing marginal confidence.
fn remap_confidence(risk_score: f64) -> f64 {
    let confidence = if risk_score > FAKE_THRESHOLD {
        if risk_score <= 0.75 {
            0.60 + (risk_score - FAKE_THRESHOLD) * 1.2
        } else {
            0.84 + (risk_score - 0.75) * 0.2
        }
    } else {
        let distance = FAKE_THRESHOLD - risk_score;
        if distance <= 0.25 {
            0.55 + distance
        } else {
            0.80 + (distance - 0.25) * 0.3
        }
    };
    confidence.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CAP)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
