//! JSON Lines (JSONL) output writer.
//!
//! One record per line, convenient for `jq`, log pipelines and loading
//! into dataframes line by line.

use std::borrow::Borrow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{OutputConfig, OutputRecord};
use crate::Message;
use crate::error::Result;

/// Writes records to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"user":"Alice","message":"Hello"}
/// {"user":"Bob","message":"Hi"}
/// ```
pub fn write_jsonl<M: Borrow<Message>>(
    messages: &[M],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_jsonl_to(messages, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl<M: Borrow<Message>>(messages: &[M], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_jsonl_to(messages, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_jsonl_to<M: Borrow<Message>, W: Write>(
    messages: &[M],
    writer: &mut W,
    config: &OutputConfig,
) -> Result<()> {
    for msg in messages {
        let record = OutputRecord::new(msg.borrow(), config);
        serde_json::to_writer(&mut *writer, &record)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
