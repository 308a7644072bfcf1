// Copyright 2026 The Kiemtin Project
// SPDX-License-Identifier: Apache-2.0

// Sentiment classification: positive/negative keyword balance.

use serde::Serialize;

use crate::lexicon::{default_lexicon, Lexicon};
use crate::normalize::normalize;
use crate::signal::keywords::match_keywords;

/// Ratio margin one polarity must win by to decide the label.
const DECISION_MARGIN: f64 = 0.15;

/// Trimmed texts under this many chars get the undetermined-neutral
/// result.
const MIN_INPUT_CHARS: usize = 10;

/// At most this many matched keywords are reported back.
const MAX_REPORTED_KEYWORDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Negative => write!(f, "negative"),
            SentimentLabel::Neutral => write!(f, "neutral"),
        }
    }
}

/// Probability vector over the three labels; sums to ~1.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentProbabilities {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentimentVerdict {
    pub label: SentimentLabel,
    pub confidence: f64,
    pub probabilities: SentimentProbabilities,
    pub matched_keywords: Vec<String>,
}

pub struct SentimentAnalyzer {
    lexicon: &'static Lexicon,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: default_lexicon(),
        }
    }

    /// Classify the sentiment of a text. Total and deterministic.
    pub fn analyze(&self, text: &str) -> SentimentVerdict {
        if text.trim().chars().count() < MIN_INPUT_CHARS {
            return SentimentVerdict {
                label: SentimentLabel::Neutral,
                confidence: 0.5,
                probabilities: SentimentProbabilities {
                    positive: 0.33,
                    negative: 0.33,
                    neutral: 0.34,
                },
                matched_keywords: Vec::new(),
            };
        }

        let normalized = normalize(text);
        let positive = match_keywords(&normalized, &self.lexicon.sentiment.positive);
        let negative = match_keywords(&normalized, &self.lexicon.sentiment.negative);
        let total = positive.count + negative.count;

        if total == 0 {
            // No clear sentiment keywords: weakly neutral.
            return SentimentVerdict {
                label: SentimentLabel::Neutral,
                confidence: 0.55,
                probabilities: SentimentProbabilities {
                    positive: 0.25,
                    negative: 0.25,
                    neutral: 0.5,
                },
                matched_keywords: Vec::new(),
            };
        }

        let pos_ratio = positive.count as f64 / total as f64;
        let neg_ratio = negative.count as f64 / total as f64;

        let (label, confidence) = if pos_ratio - neg_ratio > DECISION_MARGIN {
            (SentimentLabel::Positive, 0.65 + pos_ratio * 0.3)
        } else if neg_ratio - pos_ratio > DECISION_MARGIN {
            (SentimentLabel::Negative, 0.65 + neg_ratio * 0.3)
        } else {
            (
                SentimentLabel::Neutral,
                0.5 + (pos_ratio - neg_ratio).abs() * 0.3,
            )
        };

        let raw = match label {
            SentimentLabel::Positive => (confidence, (1.0 - confidence) * 0.35, 0.0),
            SentimentLabel::Negative => ((1.0 - confidence) * 0.35, confidence, 0.0),
            SentimentLabel::Neutral => (
                (1.0 - confidence) * 0.5,
                (1.0 - confidence) * 0.5,
                confidence,
            ),
        };
        let sum = raw.0 + raw.1 + raw.2;
        let probabilities = SentimentProbabilities {
            positive: raw.0 / sum,
            negative: raw.1 / sum,
            neutral: raw.2 / sum,
        };

        let matched_keywords: Vec<String> = positive
            .matched
            .into_iter()
            .chain(negative.matched)
            .take(MAX_REPORTED_KEYWORDS)
            .collect();

        SentimentVerdict {
            label,
            confidence,
            probabilities,
            matched_keywords,
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> SentimentAnalyzer {
        SentimentAnalyzer::new()
    }

    #[test]
    fn short_text_is_undetermined_neutral() {
        let verdict = analyzer().analyze("ngắn quá");
        assert_eq!(verdict.label, SentimentLabel::Neutral);
        assert!((verdict.confidence - 0.5).abs() < f64::EPSILON);
        assert!(verdict.matched_keywords.is_empty());
    }

    #[test]
    fn no_sentiment_keywords_is_weakly_neutral() {
        let verdict = analyzer().analyze("bản tin về lịch cắt điện tại khu vực trung tâm");
        assert_eq!(verdict.label, SentimentLabel::Neutral);
        assert!((verdict.confidence - 0.55).abs() < f64::EPSILON);
        assert!((verdict.probabilities.neutral - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn clearly_positive_text() {
        let verdict = analyzer().analyze("bộ phim thật tuyệt vời, diễn xuất ấn tượng và xuất sắc");
        assert_eq!(verdict.label, SentimentLabel::Positive);
        // 3 positive, 0 negative: confidence = 0.65 + 1.0 * 0.3
        assert!((verdict.confidence - 0.95).abs() < 1e-9);
        assert!(verdict.probabilities.positive > 0.9);
    }

    #[test]
    fn clearly_negative_text() {
        let verdict = analyzer().analyze("dịch vụ tồi tệ, nhân viên khiến khách thất vọng");
        assert_eq!(verdict.label, SentimentLabel::Negative);
        assert!(verdict.confidence > 0.65);
        assert!(verdict.probabilities.negative > verdict.probabilities.positive);
    }

    #[test]
    fn balanced_text_is_neutral() {
        // One positive (đẹp), one negative (tệ): ratios tie at 0.5.
        let verdict = analyzer().analyze("bộ phim có cảnh quay đẹp nhưng kịch bản thì tệ");
        assert_eq!(verdict.label, SentimentLabel::Neutral);
        assert!((verdict.confidence - 0.5).abs() < 1e-9);
    }

    #[test]
    fn probabilities_sum_to_one() {
        for text in [
            "bộ phim thật tuyệt vời và thú vị",
            "kết quả thất bại gây tức giận",
            "một bản tin thường ngày không có gì nổi bật",
        ] {
            let p = analyzer().analyze(text).probabilities;
            assert!((p.positive + p.negative + p.neutral - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn matched_keywords_capped_at_five() {
        let verdict = analyzer()
            .analyze("tuyệt vời xuất sắc tốt hay thích yêu hạnh phúc vui thú vị tích cực");
        assert_eq!(verdict.matched_keywords.len(), 5);
    }

    #[test]
    fn deterministic_across_calls() {
        let a = analyzer();
        let text = "sản phẩm tốt, thiết kế đẹp, ai cũng thích";
        let first = a.analyze(text);
        for _ in 0..10 {
            let again = a.analyze(text);
            assert_eq!(again.label, first.label);
            assert!((again.confidence - first.confidence).abs() < f64::EPSILON);
        }
    }
}
