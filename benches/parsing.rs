//! Benchmarks for chatlyze parsing, labelling and aggregation.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- whatsapp`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatlyze::Message;
use chatlyze::analysis::{
    UserSelection, activity_heatmap, create_wordcloud, emoji_helper, fetch_stats,
    monthly_timeline, most_busy_users,
};
use chatlyze::config::{AnalysisConfig, SessionConfig};
use chatlyze::core::output::{OutputConfig, to_csv, to_jsonl};
use chatlyze::core::{FilterConfig, apply_filters};
use chatlyze::dashboard::Dashboard;
use chatlyze::parsers::WhatsAppParser;
use chatlyze::sentiment::{SentimentScorer, VaderScorer, annotate};
use chatlyze::session::Session;

// =============================================================================
// Test Data Generators
// =============================================================================

const TEXTS: &[&str] = &[
    "Good morning everyone, have a great day",
    "I hate this traffic 😡",
    "Meeting moved to 5",
    "check https://example.com/doc",
    "<Media omitted>",
    "haha 😂😂 that is hilarious",
];

fn generate_android_txt(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = ["Alice", "Bob", "Charlie"][i % 3];
        let day = (i / 200) % 28 + 1;
        let month = (i / 5_600) % 12 + 1;
        lines.push(format!(
            "{:02}/{:02}/2024, {:02}:{:02} - {}: {}",
            day,
            month,
            i % 24,
            i % 60,
            sender,
            TEXTS[i % TEXTS.len()]
        ));
        if i % 50 == 0 {
            lines.push("a continuation line".to_string());
        }
    }
    lines.join("\n")
}

fn generate_ios_txt(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        let hour = i % 12 + 1;
        let marker = if i % 24 < 12 { "AM" } else { "PM" };
        lines.push(format!(
            "[1/{}/24, {}:{:02}:00 {}] {}: {}",
            i % 28 + 1,
            hour,
            i % 60,
            marker,
            sender,
            TEXTS[i % TEXTS.len()]
        ));
    }
    lines.join("\n")
}

fn labelled_messages(count: usize) -> Vec<Message> {
    let text = generate_android_txt(count);
    let messages = WhatsAppParser::new().parse_str(&text).unwrap();
    annotate(messages, &VaderScorer::new())
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_whatsapp_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("whatsapp_parsing");
    let parser = WhatsAppParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_android_txt(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("android", size), &txt, |b, txt| {
            b.iter(|| {
                let messages = parser.parse_str(black_box(txt)).unwrap();
                black_box(messages)
            });
        });

        let txt = generate_ios_txt(size);
        group.bench_with_input(BenchmarkId::new("ios", size), &txt, |b, txt| {
            b.iter(|| {
                let messages = parser.parse_str(black_box(txt)).unwrap();
                black_box(messages)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Sentiment Benchmarks
// =============================================================================

fn bench_sentiment(c: &mut Criterion) {
    let mut group = c.benchmark_group("sentiment");
    let scorer = VaderScorer::new();

    group.bench_function("polarity_scores", |b| {
        b.iter(|| {
            for text in TEXTS {
                black_box(scorer.polarity_scores(black_box(text)));
            }
        });
    });

    for size in [1_000_usize, 10_000] {
        let messages = WhatsAppParser::new()
            .parse_str(&generate_android_txt(size))
            .unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("annotate", size), &messages, |b, messages| {
            b.iter(|| black_box(annotate(messages.clone(), &scorer)));
        });
    }
    group.finish();
}

// =============================================================================
// Aggregation Benchmarks
// =============================================================================

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");
    let config = AnalysisConfig::default();
    let overall = UserSelection::Overall;

    for size in [1_000_usize, 10_000, 100_000] {
        let messages = labelled_messages(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("fetch_stats", size), &messages, |b, m| {
            b.iter(|| black_box(fetch_stats(black_box(m), &overall, &config)));
        });
        group.bench_with_input(BenchmarkId::new("monthly_timeline", size), &messages, |b, m| {
            b.iter(|| black_box(monthly_timeline(black_box(m), &overall, None)));
        });
        group.bench_with_input(BenchmarkId::new("heatmap", size), &messages, |b, m| {
            b.iter(|| black_box(activity_heatmap(black_box(m), &overall, None)));
        });
        group.bench_with_input(BenchmarkId::new("busy_users", size), &messages, |b, m| {
            b.iter(|| black_box(most_busy_users(black_box(m), config.top_users)));
        });
        group.bench_with_input(BenchmarkId::new("wordcloud", size), &messages, |b, m| {
            b.iter(|| black_box(create_wordcloud(black_box(m), &overall, None, &config)));
        });
        group.bench_with_input(BenchmarkId::new("emoji", size), &messages, |b, m| {
            b.iter(|| black_box(emoji_helper(black_box(m), &overall)));
        });
    }
    group.finish();
}

fn bench_filter_by_user(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_user");
    let filter = FilterConfig::new().with_user("Alice");

    for size in [1_000_usize, 10_000, 100_000] {
        let messages = labelled_messages(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &messages, |b, m| {
            b.iter(|| black_box(apply_filters(black_box(m), &filter)));
        });
    }
    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let config = OutputConfig::full();

    for size in [1_000_usize, 10_000] {
        let messages = labelled_messages(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("csv", size), &messages, |b, m| {
            b.iter(|| black_box(to_csv(black_box(m), &config).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("jsonl", size), &messages, |b, m| {
            b.iter(|| black_box(to_jsonl(black_box(m), &config).unwrap()));
        });
    }
    group.finish();
}

// =============================================================================
// End-to-End Benchmark
// =============================================================================

fn bench_full_dashboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_dashboard");
    let config = SessionConfig::default();

    for size in [1_000_usize, 10_000] {
        let txt = generate_android_txt(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                // parse -> label -> every view
                let session = Session::from_text(black_box(txt), &config).unwrap();
                let dashboard: Dashboard = session.dashboard(&UserSelection::Overall);
                black_box(dashboard)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_whatsapp_parsing,
    bench_sentiment,
    bench_aggregation,
    bench_filter_by_user,
    bench_output,
    bench_full_dashboard,
);

criterion_main!(benches);
