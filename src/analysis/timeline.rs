//! Message counts over calendar time.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{UserSelection, select};
use crate::Message;
use crate::message::month_name;
use crate::sentiment::Sentiment;

/// Messages in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month_num: u32,
    pub month: String,
    /// Axis label such as `"January-2024"`
    pub label: String,
    pub count: usize,
}

/// Messages on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub count: usize,
}

/// Counts messages per (year, month), in chronological order.
///
/// Months without messages are absent.
pub fn monthly_timeline(
    messages: &[Message],
    selection: &UserSelection,
    sentiment: Option<Sentiment>,
) -> Vec<MonthlyPoint> {
    let mut counts: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for msg in select(messages, selection, sentiment) {
        *counts.entry((msg.year, msg.month_num)).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|((year, month_num), count)| {
            let month = month_name(month_num);
            MonthlyPoint {
                year,
                month_num,
                month: month.to_string(),
                label: format!("{month}-{year}"),
                count,
            }
        })
        .collect()
}

/// Counts messages per calendar date, in chronological order.
///
/// Dates without messages are absent.
pub fn daily_timeline(
    messages: &[Message],
    selection: &UserSelection,
    sentiment: Option<Sentiment>,
) -> Vec<DailyPoint> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for msg in select(messages, selection, sentiment) {
        *counts.entry(msg.only_date).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(date, count)| DailyPoint { date, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(y: i32, m: u32, d: u32, user: &str) -> Message {
        let ts = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Message::new(ts, user, "x")
    }

    #[test]
    fn test_monthly_timeline_chronological() {
        let messages = vec![
            msg(2024, 2, 1, "Alice"),
            msg(2023, 12, 31, "Alice"),
            msg(2024, 1, 5, "Bob"),
            msg(2024, 2, 9, "Bob"),
        ];
        let timeline = monthly_timeline(&messages, &UserSelection::Overall, None);
        let labels: Vec<&str> = timeline.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["December-2023", "January-2024", "February-2024"]);
        assert_eq!(timeline[2].count, 2);
        assert_eq!(timeline[2].month, "February");
        assert_eq!(timeline[2].month_num, 2);
    }

    #[test]
    fn test_monthly_timeline_sentiment_filter() {
        let messages = vec![
            msg(2024, 1, 1, "Alice").with_sentiment(Sentiment::Negative),
            msg(2024, 1, 2, "Alice").with_sentiment(Sentiment::Positive),
        ];
        let timeline =
            monthly_timeline(&messages, &UserSelection::Overall, Some(Sentiment::Negative));
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].count, 1);

        let none = monthly_timeline(&messages, &UserSelection::Overall, Some(Sentiment::Neutral));
        assert!(none.is_empty());
    }

    #[test]
    fn test_daily_timeline() {
        let messages = vec![
            msg(2024, 1, 2, "Alice"),
            msg(2024, 1, 1, "Alice"),
            msg(2024, 1, 2, "Bob"),
        ];
        let timeline = daily_timeline(&messages, &UserSelection::from("Alice"), None);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(timeline[1].count, 1);

        let overall = daily_timeline(&messages, &UserSelection::Overall, None);
        assert_eq!(overall[1].count, 2);
    }
}
