//! # chatlyze CLI
//!
//! Command-line interface for the chatlyze library. Summaries go to stderr
//! so JSON on stdout can be piped.

use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chatlyze::ChatlyzeError;
use chatlyze::cli::{Cli, Command, DateRange, FormatArg, SentimentArg, selection};
use chatlyze::config::SessionConfig;
use chatlyze::core::{
    FilterConfig, OutputConfig, apply_filters, dashboard_to_json, write_dashboard,
};
use chatlyze::format::{OutputFormat, write_to_format};
use chatlyze::session::Session;

fn main() {
    let cli = <Cli as ClapParser>::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Command) -> Result<(), ChatlyzeError> {
    match command {
        Command::Users { input } => users(&input),
        Command::Report {
            input,
            user,
            output,
            dates,
            config,
            top_words,
            top_users,
        } => report(ReportArgs {
            input,
            user,
            output,
            dates,
            config,
            top_words,
            top_users,
        }),
        Command::Export {
            input,
            format,
            output,
            user,
            sentiment,
            dates,
        } => export(&input, format, output, user.as_deref(), sentiment, &dates),
    }
}

fn load(input: &Path, config: &SessionConfig) -> Result<Session, ChatlyzeError> {
    eprintln!("📂 Input:   {}", input.display());
    let start = Instant::now();
    let session = Session::from_path(input, config)?;
    let report = session.report();

    eprintln!(
        "   Parsed {} records ({} skipped, {:.2}s)",
        report.parsed,
        report.skipped,
        start.elapsed().as_secs_f64()
    );
    if let Some(format) = report.format {
        info!(%format, "detected export layout");
    }
    Ok(session)
}

fn users(input: &Path) -> Result<(), ChatlyzeError> {
    let session = load(input, &SessionConfig::default())?;
    for user in session.users() {
        println!("{user}");
    }
    Ok(())
}

struct ReportArgs {
    input: PathBuf,
    user: Option<String>,
    output: Option<PathBuf>,
    dates: DateRange,
    config: Option<PathBuf>,
    top_words: Option<usize>,
    top_users: Option<usize>,
}

fn report(args: ReportArgs) -> Result<(), ChatlyzeError> {
    let mut config = match &args.config {
        Some(path) => SessionConfig::from_json_file(path)?,
        None => SessionConfig::default(),
    };
    if let Some(n) = args.top_words {
        config.analysis.top_words = n;
    }
    if let Some(n) = args.top_users {
        config.analysis.top_users = n;
    }

    let selection = selection(args.user.as_deref());
    let filter = args.dates.apply(FilterConfig::new())?;

    let session = load(&args.input, &config)?;
    if !session.has_user(&selection) {
        return Err(ChatlyzeError::unknown_user(selection.as_str()));
    }

    let scoped = if filter.is_active() {
        let scoped = session.filtered(&filter);
        eprintln!("🔍 {} records in date range", scoped.messages().len());
        scoped
    } else {
        session
    };
    eprintln!("👤 Selection: {selection}");

    let dashboard = scoped.dashboard(&selection);
    match &args.output {
        Some(path) => {
            write_dashboard(&dashboard, path)?;
            eprintln!("✅ Report saved to {}", path.display());
        }
        None => println!("{}", dashboard_to_json(&dashboard)?),
    }
    Ok(())
}

fn export(
    input: &Path,
    format: FormatArg,
    output: Option<PathBuf>,
    user: Option<&str>,
    sentiment: Option<SentimentArg>,
    dates: &DateRange,
) -> Result<(), ChatlyzeError> {
    let format: OutputFormat = format.into();
    let output = output.unwrap_or_else(|| PathBuf::from(format!("records.{}", format.extension())));

    let mut filter = dates.apply(FilterConfig::new().with_selection(selection(user)))?;
    if let Some(sentiment) = sentiment {
        filter = filter.with_sentiment(sentiment.into());
    }

    let session = load(input, &SessionConfig::default())?;
    let records = apply_filters(session.messages(), &filter);
    if filter.is_active() {
        eprintln!("🔍 {} records after filtering", records.len());
    }

    eprintln!("💾 Writing {format} to {}", output.display());
    write_to_format(&records, &output, format, &OutputConfig::full())?;
    eprintln!("✅ Done");
    Ok(())
}
