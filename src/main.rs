// Copyright 2026 The Kiemtin Project
// SPDX-License-Identifier: Apache-2.0

// kiemtin: analyze a Vietnamese news text from a file or stdin.
//
// Usage:
//   kiemtin --file article.txt
//   cat article.txt | kiemtin --json
//   kiemtin --file article.txt --pin-jitter

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use kiemtin::report::{self, Analyzers};
use kiemtin::risk::PinnedJitter;

#[derive(Parser)]
#[command(name = "kiemtin", about = "Vietnamese news analysis engine")]
struct Cli {
    /// Read the article from a file instead of stdin
    #[arg(long, env = "KIEMTIN_FILE")]
    file: Option<PathBuf>,

    /// Output the full report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Zero the risk-score jitter for reproducible output
    #[arg(long, default_value_t = false)]
    pin_jitter: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .json()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let text = match read_input(cli.file.as_deref()) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("failed to read input: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = report::validate_input(&text) {
        eprintln!("invalid input: {e}");
        std::process::exit(2);
    }

    let analyzers = if cli.pin_jitter {
        Analyzers::with_jitter(Box::new(PinnedJitter(0.0)))
    } else {
        Analyzers::new()
    };
    let report = analyzers.analyze(&text);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report).expect("report serializes"));
        return;
    }

    println!();
    println!("Kiemtin Analysis Report");
    println!("=======================");
    println!();
    println!(
        "Fake news:  {} (confidence {:.1}%, risk {:.3})",
        if report.fake_news.is_fake { "LIKELY FAKE" } else { "likely real" },
        report.fake_news.confidence * 100.0,
        report.fake_news.risk_score
    );
    if !report.fake_news.signals.suspicious.matched.is_empty() {
        println!(
            "  suspicious: {}",
            report.fake_news.signals.suspicious.matched.join(", ")
        );
    }
    if !report.fake_news.signals.reliable.matched.is_empty() {
        println!(
            "  reliable:   {}",
            report.fake_news.signals.reliable.matched.join(", ")
        );
    }
    println!();
    println!(
        "Topic:      {} (confidence {:.1}%)",
        report.topic.topic,
        report.topic.confidence * 100.0
    );
    println!(
        "Sentiment:  {} (confidence {:.1}%)",
        report.sentiment.label,
        report.sentiment.confidence * 100.0
    );
    println!();
    println!(
        "Summary ({:.0}% of original):",
        report.summary.compression_ratio * 100.0
    );
    println!("  {}", report.summary.summary_text);
    println!();
    println!(
        "{} words, {} chars, analyzed in {:.1} ms",
        report.word_count, report.text_length, report.elapsed_ms
    );
}

fn read_input(file: Option<&std::path::Path>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
