// Copyright 2026 The Kiemtin Project
// SPDX-License-Identifier: Apache-2.0

// Single-dimension classifiers over weighted keyword counts.
//
// Both classifiers follow the same pattern as the risk scorer's keyword
// signals (count matches per category, pick the strongest) but reduce to
// one label instead of a composite score. Both are fully deterministic.

pub mod sentiment;
pub mod topic;

pub use sentiment::{SentimentAnalyzer, SentimentLabel, SentimentVerdict};
pub use topic::{TopicClassifier, TopicVerdict};
