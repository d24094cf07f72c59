//! CSV output writer.

use std::borrow::Borrow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::OutputConfig;
use crate::Message;
use crate::error::Result;

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: Depends on OutputConfig
///   - Basic: `User`, `Message`
///   - Full: `Timestamp`, `User`, `Message`, `Period`, `Sentiment`
/// - Encoding: UTF-8
pub fn write_csv<M: Borrow<Message>>(
    messages: &[M],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    write_csv_to(messages, file, config)
}

/// Converts records to a CSV string.
///
/// Same format as `write_csv`, but returns a String instead of writing to file.
pub fn to_csv<M: Borrow<Message>>(messages: &[M], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv_to(messages, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_csv_to<M: Borrow<Message>, W: Write>(
    messages: &[M],
    out: W,
    config: &OutputConfig,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(build_header(config))?;
    for msg in messages {
        writer.write_record(build_record(msg.borrow(), config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_timestamps {
        header.push("Timestamp");
    }

    header.push("User");
    header.push("Message");

    if config.include_period {
        header.push("Period");
    }
    if config.include_sentiment {
        header.push("Sentiment");
    }

    header
}

/// Build CSV record for a single message.
fn build_record(msg: &Message, config: &OutputConfig) -> Vec<String> {
    let mut record = Vec::new();

    if config.include_timestamps {
        record.push(msg.timestamp.format("%Y-%m-%d %H:%M:%S").to_string());
    }

    record.push(msg.user.clone());
    record.push(msg.message.clone());

    if config.include_period {
        record.push(msg.period.clone());
    }
    if config.include_sentiment {
        record.push(msg.sentiment.value().to_string());
    }

    record
}
