// Combined analysis: run all four analyzers over one text.
//
// The analyzers are independent: none consumes another's output, and the
// bundle holds no mutable state, so one shared instance serves concurrent
// callers.

use std::sync::OnceLock;
use std::time::Instant;

use serde::Serialize;

use crate::classify::{SentimentAnalyzer, SentimentVerdict, TopicClassifier, TopicVerdict};
use crate::risk::{FakeNewsScorer, FakeNewsVerdict, JitterSource};
use crate::summarize::{Summarizer, SummaryResult};

/// Caller-side minimum input length. The analyzers themselves accept any
/// string; this is the policy a request-handling layer applies before
/// rendering results.
pub const MIN_ANALYZE_CHARS: usize = 50;

/// Input rejected by the caller-side policy.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("no text provided")]
    Empty,

    #[error("text must be at least {min} characters, got {got}")]
    TooShort { min: usize, got: usize },
}

/// Validate a text against the caller-side minimum-length policy.
pub fn validate_input(text: &str) -> Result<(), InputError> {
    let len = text.trim().chars().count();
    if len == 0 {
        return Err(InputError::Empty);
    }
    if len < MIN_ANALYZE_CHARS {
        return Err(InputError::TooShort {
            min: MIN_ANALYZE_CHARS,
            got: len,
        });
    }
    Ok(())
}

/// Results of all four analyzers over one text.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub fake_news: FakeNewsVerdict,
    pub summary: SummaryResult,
    pub sentiment: SentimentVerdict,
    pub topic: TopicVerdict,
    pub word_count: usize,
    pub text_length: usize,
    pub elapsed_ms: f64,
}

/// The four analyzers, bundled.
pub struct Analyzers {
    pub risk: FakeNewsScorer,
    pub summarizer: Summarizer,
    pub sentiment: SentimentAnalyzer,
    pub topic: TopicClassifier,
}

impl Analyzers {
    pub fn new() -> Self {
        Self {
            risk: FakeNewsScorer::new(),
            summarizer: Summarizer::new(),
            sentiment: SentimentAnalyzer::new(),
            topic: TopicClassifier::new(),
        }
    }

    /// Bundle with an injected jitter source for the risk scorer; the
    /// other analyzers are deterministic already.
    pub fn with_jitter(jitter: Box<dyn JitterSource>) -> Self {
        Self {
            risk: FakeNewsScorer::with_jitter(jitter),
            ..Self::new()
        }
    }

    /// The process-wide shared instance, built on first use.
    pub fn shared() -> &'static Analyzers {
        static SHARED: OnceLock<Analyzers> = OnceLock::new();
        SHARED.get_or_init(Analyzers::new)
    }

    /// Run all four analyzers. Total: inherits each analyzer's graceful
    /// degradation, so any string input yields a full report.
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let start = Instant::now();

        let fake_news = self.risk.score(text);
        let summary = self.summarizer.summarize(text);
        let sentiment = self.sentiment.analyze(text);
        let topic = self.topic.analyze(text);

        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(
            is_fake = fake_news.is_fake,
            topic = %topic.topic,
            sentiment = %sentiment.label,
            compression_ratio = summary.compression_ratio,
            elapsed_ms,
            "analysis complete"
        );

        AnalysisReport {
            fake_news,
            summary,
            sentiment,
            topic,
            word_count: text.split_whitespace().count(),
            text_length: text.chars().count(),
            elapsed_ms,
        }
    }
}

impl Default for Analyzers {
    fn default() -> Self {
        Self::new()
    }
}
