//! Synthetic WhatsApp export generator for stress testing chatlyze.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output] [layout]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_chat.txt android
//!
//! Layouts: `android` (`15/01/2024, 10:30 - `), `ios` (`[1/15/24, 10:30:00 AM] `),
//! `dot` (`[15.01.24, 10:30:00] `), `dashed-dot` (`15.01.2024, 10:30 - `).

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use rand::seq::SliceRandom;

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Charlie Kumar",
    "Priya",
    "+91 98765 43210",
    "Мария",
    "村上",
    "🔥Ravi🔥",
];

const POSITIVE: &[&str] = &[
    "This is great, thanks!",
    "Love it 😍",
    "Awesome work everyone",
    "Happy birthday!! 🎉🎂",
    "bahut badhiya yaar",
];

const NEGATIVE: &[&str] = &[
    "This is terrible",
    "I hate waiting in traffic 😡",
    "Worst day ever",
    "so sad about the news 😢",
    "the build is broken again",
];

const NEUTRAL: &[&str] = &[
    "Meeting at 5",
    "Where is the file?",
    "ok",
    "Reached home",
    "kal milte hain",
];

const NOTICES: &[&str] = &[
    "Alice added Bob",
    "Priya left",
    "Charlie Kumar changed the subject to \"Weekend plans\"",
    "Messages and calls are end-to-end encrypted. No one outside of this chat, including WhatsApp, can read or listen to them.",
];

const EMOJIS: &[&str] = &["😀", "😂", "👍", "❤️", "🙏", "🔥", "👨‍👩‍👧‍👦", "🏳️‍🌈"];

#[derive(Clone, Copy)]
enum Layout {
    Android,
    Ios,
    Dot,
    DashedDot,
}

impl Layout {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "android" => Some(Layout::Android),
            "ios" => Some(Layout::Ios),
            "dot" => Some(Layout::Dot),
            "dashed-dot" => Some(Layout::DashedDot),
            _ => None,
        }
    }

    fn prefix(self, ts: NaiveDateTime) -> String {
        match self {
            Layout::Android => ts.format("%d/%m/%Y, %H:%M - ").to_string(),
            Layout::Ios => ts.format("[%-m/%-d/%y, %-I:%M:%S %p] ").to_string(),
            Layout::Dot => ts.format("[%d.%m.%y, %H:%M:%S] ").to_string(),
            Layout::DashedDot => ts.format("%d.%m.%Y, %H:%M - ").to_string(),
        }
    }

    fn media_placeholder(self) -> &'static str {
        match self {
            Layout::Ios => "image omitted",
            _ => "<Media omitted>",
        }
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map_or("heavy_chat.txt", String::as_str);
    let layout_name = args.get(3).map_or("android", String::as_str);

    let Some(layout) = Layout::parse(layout_name) else {
        eprintln!("Unknown layout: {layout_name}. Use android, ios, dot or dashed-dot");
        std::process::exit(1);
    };

    println!("🧪 WhatsApp export generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {count}");
    println!("   Output:   {output}");
    println!("   Layout:   {layout_name}");
    println!();

    generate(count, output, layout)
}

fn generate(count: usize, output: &str, layout: Layout) -> io::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);
    let mut rng = rand::thread_rng();

    let start = Instant::now();
    let mut bytes_written: usize = 0;
    let mut ts = NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .unwrap_or_default();

    for i in 0..count {
        ts += Duration::seconds(rng.gen_range(20..3_600));
        let line = entry(&mut rng, layout, ts, i);
        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        if (i + 1) % 10_000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                bytes_written as f64 / 1_000_000.0,
                (i + 1) as f64 / elapsed
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    Ok(())
}

fn entry(rng: &mut impl Rng, layout: Layout, ts: NaiveDateTime, index: usize) -> String {
    let prefix = layout.prefix(ts);
    let sender = SENDERS.choose(rng).copied().unwrap_or("Alice");

    match index % 25 {
        0 => {
            let notice = NOTICES.choose(rng).copied().unwrap_or("Alice left");
            format!("{prefix}{notice}\n")
        }
        1 => format!("{prefix}{sender}: {}\n", layout.media_placeholder()),
        2 => format!("{prefix}{sender}: check https://example.com/item/{index} and www.example.org\n"),
        3 => format!("{prefix}{sender}: first line\nsecond line #{index}\nthird line\n"),
        4 => {
            let burst: String = (0..rng.gen_range(1..8))
                .filter_map(|_| EMOJIS.choose(rng).copied())
                .collect();
            format!("{prefix}{sender}: {burst}\n")
        }
        5 => format!("{prefix}{sender}: ok\nThis line has no timestamp\n"),
        6 => format!("{prefix}{sender}: see below\n[Invalid date] - : garbage\n"),
        _ => {
            let pool = match rng.gen_range(0..3) {
                0 => POSITIVE,
                1 => NEGATIVE,
                _ => NEUTRAL,
            };
            let text = pool.choose(rng).copied().unwrap_or("ok");
            format!("{prefix}{sender}: {text}\n")
        }
    }
}
