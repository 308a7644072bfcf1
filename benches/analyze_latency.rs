// Copyright 2026 The Kiemtin Project
// SPDX-License-Identifier: Apache-2.0

//! Latency benchmarks for the analysis hot paths.
//!
//! Measures:
//! - normalization (the shared first step of every analyzer)
//! - fake-news risk scoring (keyword scan + structural features)
//! - extractive summarization (sentence scoring + selection)
//! - the combined four-analyzer report
//!
//! Run: cargo bench --bench analyze_latency

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kiemtin::normalize::normalize;
use kiemtin::report::Analyzers;
use kiemtin::risk::{FakeNewsScorer, PinnedJitter};
use kiemtin::summarize::Summarizer;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn fixture_article() -> String {
    let paragraph = "Theo báo cáo chính thức được công bố sáng nay, các chuyên gia cho biết \
                     tình hình kinh tế tiếp tục ổn định trong quý một với mức tăng trưởng \
                     đạt 5,6% so với cùng kỳ. Thị trường chứng khoán phản ứng tích cực và \
                     các ngân hàng lớn đồng loạt công bố kết quả kinh doanh khả quan. \
                     Phát ngôn viên của bộ khẳng định các chính sách điều hành sẽ được duy \
                     trì trong thời gian tới. ";
    paragraph.repeat(8)
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_normalize(c: &mut Criterion) {
    let article = fixture_article();
    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box(&article)));
    });
}

fn bench_risk_score(c: &mut Criterion) {
    let article = fixture_article();
    let scorer = FakeNewsScorer::with_jitter(Box::new(PinnedJitter(0.0)));
    c.bench_function("risk_score", |b| {
        b.iter(|| scorer.score(black_box(&article)));
    });
}

fn bench_summarize(c: &mut Criterion) {
    let article = fixture_article();
    let summarizer = Summarizer::new();
    c.bench_function("summarize", |b| {
        b.iter(|| summarizer.summarize(black_box(&article)));
    });
}

fn bench_full_report(c: &mut Criterion) {
    let article = fixture_article();
    let analyzers = Analyzers::new();
    c.bench_function("full_report", |b| {
        b.iter(|| analyzers.analyze(black_box(&article)));
    });
}

criterion_group!(
    benches,
    bench_normalize,
    bench_risk_score,
    bench_summarize,
    bench_full_report
);
criterion_main!(benches);
