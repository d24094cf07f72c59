//! Weekday, month and hour-of-week activity.

use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};

use super::{UserSelection, select};
use crate::Message;
use crate::message::{MONTHS, WEEKDAYS, period_label};
use crate::sentiment::Sentiment;

/// Messages under one label (weekday or month name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCount {
    pub label: String,
    pub count: usize,
}

/// Weekday x hour-bucket message counts.
///
/// `counts[i][j]` is the number of messages on `days[i]` in `periods[j]`.
/// Only weekdays and buckets with at least one message appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    /// Weekday names, Monday first
    pub days: Vec<String>,
    /// Hour buckets such as `"14-15"`, in hour order
    pub periods: Vec<String>,
    pub counts: Vec<Vec<usize>>,
}

impl Heatmap {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns the count for a weekday and bucket, if both are present.
    pub fn get(&self, day: &str, period: &str) -> Option<usize> {
        let row = self.days.iter().position(|d| d == day)?;
        let col = self.periods.iter().position(|p| p == period)?;
        Some(self.counts[row][col])
    }

    /// Returns the sum of all cells.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

/// Counts messages per weekday, busiest first.
///
/// Weekdays with equal counts stay in calendar order; weekdays without
/// messages are absent.
pub fn day_activity_map(messages: &[Message], selection: &UserSelection) -> Vec<ActivityCount> {
    let mut counts = [0usize; 7];
    for msg in select(messages, selection, None) {
        counts[msg.timestamp.weekday().num_days_from_monday() as usize] += 1;
    }
    ranked(&WEEKDAYS, &counts)
}

/// Counts messages per month name across all years, busiest first.
///
/// Months with equal counts stay in calendar order; months without
/// messages are absent.
pub fn month_activity_map(messages: &[Message], selection: &UserSelection) -> Vec<ActivityCount> {
    let mut counts = [0usize; 12];
    for msg in select(messages, selection, None) {
        counts[msg.timestamp.month0() as usize] += 1;
    }
    ranked(&MONTHS, &counts)
}

fn ranked(labels: &[&str], counts: &[usize]) -> Vec<ActivityCount> {
    let mut rows: Vec<ActivityCount> = labels
        .iter()
        .zip(counts)
        .filter(|&(_, &count)| count > 0)
        .map(|(label, &count)| ActivityCount {
            label: (*label).to_string(),
            count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Builds the weekday x hour-bucket table.
pub fn activity_heatmap(
    messages: &[Message],
    selection: &UserSelection,
    sentiment: Option<Sentiment>,
) -> Heatmap {
    let mut grid = [[0usize; 24]; 7];
    for msg in select(messages, selection, sentiment) {
        let day = msg.timestamp.weekday().num_days_from_monday() as usize;
        grid[day][msg.timestamp.hour() as usize] += 1;
    }

    let rows: Vec<usize> = (0..7).filter(|&d| grid[d].iter().any(|&n| n > 0)).collect();
    let cols: Vec<usize> = (0..24).filter(|&h| grid.iter().any(|row| row[h] > 0)).collect();

    Heatmap {
        days: rows.iter().map(|&d| WEEKDAYS[d].to_string()).collect(),
        periods: cols.iter().map(|&h| period_label(h as u32)).collect(),
        counts: rows
            .iter()
            .map(|&d| cols.iter().map(|&h| grid[d][h]).collect())
            .collect(),
    }
}
