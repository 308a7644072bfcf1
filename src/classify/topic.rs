// Copyright 2026 The Kiemtin Project
// SPDX-License-Identifier: Apache-2.0

// Topic classification: frequency-weighted keyword totals, argmax over
// the fixed category list.

use serde::Serialize;

use crate::lexicon::{default_lexicon, Lexicon};
use crate::normalize::normalize;
use crate::signal::keywords::match_keywords_weighted;

/// Label returned when no category scores above zero.
pub const UNDETERMINED: &str = "Không xác định";

/// Trimmed texts under this many chars get the undetermined result.
const MIN_INPUT_CHARS: usize = 12;

/// Weighted total treated as saturating evidence; confidence is
/// `total / NORMALIZING_TOTAL`, capped.
const NORMALIZING_TOTAL: f64 = 6.0;
const CONFIDENCE_CAP: f64 = 0.9;

/// Fixed confidences for the two undetermined paths.
const SHORT_INPUT_CONFIDENCE: f64 = 0.3;
const NO_MATCH_CONFIDENCE: f64 = 0.35;

/// At most this many matched keywords are reported back.
const MAX_REPORTED_KEYWORDS: usize = 5;

/// One category's share of the grand weighted total.
#[derive(Debug, Clone, Serialize)]
pub struct TopicScore {
    pub name: String,
    pub probability: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicVerdict {
    pub topic: String,
    pub description: String,
    pub confidence: f64,
    /// All categories, strongest first.
    pub probabilities: Vec<TopicScore>,
    pub matched_keywords: Vec<String>,
}

impl TopicVerdict {
    fn undetermined(confidence: f64, probabilities: Vec<TopicScore>) -> Self {
        Self {
            topic: UNDETERMINED.to_string(),
            description: "Không đủ thông tin để phân loại".to_string(),
            confidence,
            probabilities,
            matched_keywords: Vec::new(),
        }
    }
}

pub struct TopicClassifier {
    lexicon: &'static Lexicon,
}

impl TopicClassifier {
    pub fn new() -> Self {
        Self {
            lexicon: default_lexicon(),
        }
    }

    /// Classify the topic of a text. Total and deterministic: the same
    /// input always yields the same label, and ties break toward the
    /// earlier-declared category.
    pub fn analyze(&self, text: &str) -> TopicVerdict {
        if text.trim().chars().count() < MIN_INPUT_CHARS {
            return TopicVerdict::undetermined(SHORT_INPUT_CONFIDENCE, Vec::new());
        }

        let normalized = normalize(text);

        let scored: Vec<(&str, &str, f64, Vec<String>)> = self
            .lexicon
            .topics
            .iter()
            .map(|topic| {
                let (total, matched) = match_keywords_weighted(&normalized, &topic.keywords);
                (topic.name.as_str(), topic.description.as_str(), total, matched)
            })
            .collect();

        let grand_total: f64 = scored.iter().map(|(_, _, total, _)| total).sum();
        if grand_total == 0.0 {
            // Uniform probabilities over the fixed category list.
            let base = 1.0 / scored.len() as f64;
            let probabilities = scored
                .iter()
                .map(|(name, _, _, _)| TopicScore {
                    name: name.to_string(),
                    probability: base,
                })
                .collect();
            return TopicVerdict::undetermined(NO_MATCH_CONFIDENCE, probabilities);
        }

        // Argmax; strictly-greater keeps the first-declared winner on ties.
        let mut best = &scored[0];
        for entry in &scored[1..] {
            if entry.2 > best.2 {
                best = entry;
            }
        }
        let (name, description, total, matched) = best;

        let mut probabilities: Vec<TopicScore> = scored
            .iter()
            .map(|(name, _, total, _)| TopicScore {
                name: name.to_string(),
                probability: total / grand_total,
            })
            .collect();
        probabilities.sort_by(|a, b| b.probability.total_cmp(&a.probability));

        TopicVerdict {
            topic: name.to_string(),
            description: description.to_string(),
            confidence: (total / NORMALIZING_TOTAL).min(CONFIDENCE_CAP),
            probabilities,
            matched_keywords: matched.iter().take(MAX_REPORTED_KEYWORDS).cloned().collect(),
        }
    }
}

impl Default for TopicClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> TopicClassifier {
        TopicClassifier::new()
    }

    #[test]
    fn short_text_is_undetermined() {
        let verdict = classifier().analyze("tin ngắn");
        assert_eq!(verdict.topic, UNDETERMINED);
        assert!((verdict.confidence - 0.3).abs() < f64::EPSILON);
        assert!(verdict.probabilities.is_empty());
    }

    #[test]
    fn no_match_is_undetermined_with_uniform_probabilities() {
        let verdict = classifier().analyze("một đoạn văn nói về chuyện vặt hằng ngày");
        assert_eq!(verdict.topic, UNDETERMINED);
        assert!((verdict.confidence - 0.35).abs() < f64::EPSILON);
        assert_eq!(verdict.probabilities.len(), 8);
        for score in &verdict.probabilities {
            assert!((score.probability - 0.125).abs() < 1e-9);
        }
    }

    #[test]
    fn technology_article_classified() {
        let verdict = classifier().analyze(
            "công nghệ blockchain và robot đang thay đổi cách doanh nghiệp vận hành phần mềm",
        );
        assert_eq!(verdict.topic, "Công nghệ");
        assert!(verdict.confidence > 0.5);
        assert!(verdict.matched_keywords.contains(&"robot".to_string()));
    }

    #[test]
    fn repeated_keywords_raise_confidence() {
        let once = classifier().analyze("trận đấu bóng đá diễn ra tối nay trên sân nhà");
        let thrice = classifier().analyze(
            "bóng đá là bóng đá, người hâm mộ bóng đá chờ trận đấu và giải đấu tối nay",
        );
        assert_eq!(once.topic, "Thể thao");
        assert_eq!(thrice.topic, "Thể thao");
        assert!(thrice.confidence > once.confidence);
    }

    #[test]
    fn confidence_capped() {
        let text = "bóng đá ".repeat(30) + "trận đấu giải đấu vận động viên huấn luyện thể thao";
        let verdict = classifier().analyze(&text);
        assert!((verdict.confidence - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn tie_breaks_to_earlier_declared_category() {
        // "kinh tế" (category 2) and "thể thao" (category 5) each score
        // 1 + 0.5; the earlier declaration wins.
        let verdict = classifier().analyze("bàn về kinh tế và thể thao trong tuần");
        assert_eq!(verdict.topic, "Kinh tế");
    }

    #[test]
    fn probabilities_sorted_and_sum_to_one() {
        let verdict = classifier()
            .analyze("ngân hàng công bố lãi suất mới, thị trường chứng khoán phản ứng tích cực");
        let sum: f64 = verdict.probabilities.iter().map(|s| s.probability).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        for pair in verdict.probabilities.windows(2) {
            assert!(pair[0].probability >= pair[1].probability);
        }
    }

    #[test]
    fn deterministic_across_calls() {
        let c = classifier();
        let text = "bác sĩ tại bệnh viện khuyến cáo tiêm vaccine đầy đủ để bảo vệ sức khỏe";
        let first = c.analyze(text);
        for _ in 0..10 {
            let again = c.analyze(text);
            assert_eq!(again.topic, first.topic);
            assert!((again.confidence - first.confidence).abs() < f64::EPSILON);
        }
    }
}
