// Copyright 2026 The Kiemtin Project
// SPDX-License-Identifier: Apache-2.0

// Keyword tables: the fixed configuration every analyzer reads.
//
// The tables are embedded at compile time and parsed once into an
// immutable Lexicon shared for the lifetime of the process. Declaration
// order is semantic: matched-keyword lists preserve it, and topic ties
// break toward the earlier entry.

use std::sync::OnceLock;

use serde::Deserialize;

/// The default keyword tables YAML, embedded at compile time.
const DEFAULT_LEXICON_YAML: &str = include_str!("../../data/lexicon.yaml");

/// All errors that can occur while loading and validating keyword tables.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to parse lexicon YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// A topic category: display name, one-line description, keyword list.
#[derive(Debug, Clone, Deserialize)]
pub struct TopicEntry {
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// Positive/negative word lists for the sentiment classifier.
#[derive(Debug, Clone, Deserialize)]
pub struct SentimentLexicon {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// The full keyword configuration. Immutable after load.
#[derive(Debug, Clone, Deserialize)]
pub struct Lexicon {
    /// Clickbait/sensational terms; raise fake-news risk.
    pub suspicious: Vec<String>,
    /// Sourcing/attribution terms; lower fake-news risk.
    pub reliable: Vec<String>,
    /// Emotional-language terms; raise fake-news risk.
    pub emotional: Vec<String>,
    /// Data-citing phrases, matched case-insensitively against the
    /// ORIGINAL text (they may contain characters normalization strips).
    pub specific_info: Vec<String>,
    /// Importance terms for summary sentence scoring.
    pub importance: Vec<String>,
    pub sentiment: SentimentLexicon,
    /// Ordered topic categories; ties break toward the earlier entry.
    pub topics: Vec<TopicEntry>,
}

impl Lexicon {
    /// Parse and validate a lexicon from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, LexiconError> {
        let lexicon: Lexicon = serde_yaml::from_str(yaml)?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    fn validate(&self) -> Result<(), LexiconError> {
        let lists: [(&str, &[String]); 7] = [
            ("suspicious", &self.suspicious),
            ("reliable", &self.reliable),
            ("emotional", &self.emotional),
            ("specific_info", &self.specific_info),
            ("importance", &self.importance),
            ("sentiment.positive", &self.sentiment.positive),
            ("sentiment.negative", &self.sentiment.negative),
        ];
        for (name, list) in lists {
            if list.is_empty() {
                return Err(LexiconError::Validation(format!(
                    "keyword list {name:?} is empty"
                )));
            }
            if list.iter().any(|k| k.trim().is_empty()) {
                return Err(LexiconError::Validation(format!(
                    "keyword list {name:?} contains a blank entry"
                )));
            }
        }

        if self.topics.is_empty() {
            return Err(LexiconError::Validation("no topic categories".to_string()));
        }
        let mut seen = std::collections::HashSet::new();
        for topic in &self.topics {
            if topic.keywords.is_empty() {
                return Err(LexiconError::Validation(format!(
                    "topic {:?} has no keywords",
                    topic.name
                )));
            }
            if !seen.insert(topic.name.as_str()) {
                return Err(LexiconError::Validation(format!(
                    "duplicate topic name {:?}",
                    topic.name
                )));
            }
        }
        Ok(())
    }
}

/// The embedded default lexicon, parsed once per process.
/// Panics on invalid YAML (these are our own tables).
pub fn default_lexicon() -> &'static Lexicon {
    static LEXICON: OnceLock<Lexicon> = OnceLock::new();
    LEXICON.get_or_init(|| {
        Lexicon::from_yaml(DEFAULT_LEXICON_YAML).expect("default lexicon YAML is invalid")
    })
}
