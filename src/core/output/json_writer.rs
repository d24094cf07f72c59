//! JSON output writer for records and dashboards.

use std::borrow::Borrow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::{OutputConfig, OutputRecord};
use crate::Message;
use crate::dashboard::Dashboard;
use crate::error::Result;

/// Writes records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"user": "Alice", "message": "Hello"},
///   {"user": "Bob", "message": "Hi"}
/// ]
/// ```
pub fn write_json<M: Borrow<Message>>(
    messages: &[M],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json(messages, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a pretty JSON array.
pub fn to_json<M: Borrow<Message>>(messages: &[M], config: &OutputConfig) -> Result<String> {
    let records: Vec<OutputRecord<'_>> = messages
        .iter()
        .map(|m| OutputRecord::new(m.borrow(), config))
        .collect();

    Ok(serde_json::to_string_pretty(&records)?)
}

/// Converts a dashboard to pretty JSON.
pub fn dashboard_to_json(dashboard: &Dashboard) -> Result<String> {
    Ok(serde_json::to_string_pretty(dashboard)?)
}

/// Writes a dashboard to a JSON file.
pub fn write_dashboard(dashboard: &Dashboard, output_path: impl AsRef<Path>) -> Result<()> {
    let json = dashboard_to_json(dashboard)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::UserSelection;
    use crate::config::AnalysisConfig;
    use crate::sentiment::Sentiment;
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    fn msg(user: &str, text: &str) -> Message {
        let ts = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        Message::new(ts, user, text)
    }

    #[test]
    fn test_to_json_basic() {
        let messages = vec![msg("Alice", "Hello"), msg("Bob", "Hi")];
        let json = to_json(&messages, &OutputConfig::new()).unwrap();

        assert!(json.contains(r#""user": "Alice""#));
        assert!(json.contains(r#""message": "Hello""#));
        assert!(!json.contains("timestamp"));
        assert!(!json.contains("sentiment"));
    }

    #[test]
    fn test_write_json_full() {
        let messages = vec![msg("Alice", "Hello").with_sentiment(Sentiment::Positive)];

        let temp_file = NamedTempFile::new().unwrap();
        write_json(&messages, temp_file.path(), &OutputConfig::full()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed[0]["timestamp"], "2024-06-15T12:30:00");
        assert_eq!(parsed[0]["period"], "12-13");
        assert_eq!(parsed[0]["sentiment"], 1);
    }

    #[test]
    fn test_write_dashboard() {
        let messages = vec![msg("Alice", "Hello").with_sentiment(Sentiment::Positive)];
        let dashboard =
            Dashboard::build(&messages, &UserSelection::Overall, &AnalysisConfig::default());

        let temp_file = NamedTempFile::new().unwrap();
        write_dashboard(&dashboard, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["selection"], "Overall");
        assert_eq!(parsed["stats"]["status"], "ready");
        assert_eq!(parsed["stats"]["data"]["messages"], 1);
        assert_eq!(parsed["monthly_timeline"]["negative"]["status"], "no_data");
    }
}
