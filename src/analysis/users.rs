//! User rankings and contribution shares.

use serde::{Deserialize, Serialize};

use super::{Tally, round2};
use crate::Message;
use crate::core::filter::OVERALL;
use crate::message::GROUP_NOTIFICATION;
use crate::sentiment::Sentiment;

/// Messages sent by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCount {
    pub user: String,
    pub count: usize,
}

/// One user's share of a message set, in percent (two decimals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserShare {
    pub user: String,
    pub percent: f64,
}

/// Busiest users of the whole chat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusyUsers {
    /// The first `top_n` users by message count
    pub top: Vec<UserCount>,
    /// Every user's share of all messages
    pub shares: Vec<UserShare>,
}

impl BusyUsers {
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

/// Ranks all users by message count.
///
/// Ties keep first-appearance order. The notification sentinel counts as a
/// user so that the shares cover every record and sum to 100.
pub fn most_busy_users(messages: &[Message], top_n: usize) -> BusyUsers {
    let tally: Tally<&str> = messages.iter().map(Message::user).collect();
    let total = tally.total();
    let ranked = tally.into_ranked();

    BusyUsers {
        top: ranked
            .iter()
            .take(top_n)
            .map(|&(user, count)| UserCount {
                user: user.to_string(),
                count,
            })
            .collect(),
        shares: shares(ranked, total),
    }
}

/// Returns each user's share of the messages carrying `sentiment`.
pub fn percentage_by_sentiment(messages: &[Message], sentiment: Sentiment) -> Vec<UserShare> {
    let tally: Tally<&str> = messages
        .iter()
        .filter(|m| m.sentiment == sentiment)
        .map(Message::user)
        .collect();
    let total = tally.total();
    shares(tally.into_ranked(), total)
}

fn shares(ranked: Vec<(&str, usize)>, total: usize) -> Vec<UserShare> {
    if total == 0 {
        return Vec::new();
    }
    ranked
        .into_iter()
        .map(|(user, count)| UserShare {
            user: user.to_string(),
            percent: round2(count as f64 / total as f64 * 100.0),
        })
        .collect()
}

/// Lists the selectable users: `"Overall"` first, then every sender in
/// sorted order, without the notification sentinel.
pub fn user_list(messages: &[Message]) -> Vec<String> {
    let mut users: Vec<&str> = messages
        .iter()
        .map(Message::user)
        .filter(|u| *u != GROUP_NOTIFICATION)
        .collect();
    users.sort_unstable();
    users.dedup();

    std::iter::once(OVERALL)
        .chain(users)
        .map(str::to_string)
        .collect()
}
