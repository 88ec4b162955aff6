//! Expiry Classification
//!
//! Maps a signed day count to an expiry status and formats the
//! human-readable "days left" text shown next to each ingredient.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Last day count (inclusive) that counts as expiring soon
pub const SOON_MAX_DAYS: i64 = 3;

/// Last day count (inclusive) that counts as expiring this week
pub const WEEK_MAX_DAYS: i64 = 7;

/// Date format used by the pantry API
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Expiry status, ordered from least to most fresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpiryStatus {
    Expired,
    ExpiringSoon,
    ExpiringWeek,
    Fresh,
}

impl ExpiryStatus {
    /// CSS class used for status styling
    pub fn css_class(self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "expired",
            ExpiryStatus::ExpiringSoon => "expiring-soon",
            ExpiryStatus::ExpiringWeek => "expiring-week",
            ExpiryStatus::Fresh => "fresh",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "Expired",
            ExpiryStatus::ExpiringSoon => "Expiring soon",
            ExpiryStatus::ExpiringWeek => "Expiring this week",
            ExpiryStatus::Fresh => "Fresh",
        }
    }
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Classify a day count. Defined for every `i64`.
pub fn classify(days: i64) -> ExpiryStatus {
    if days < 0 {
        ExpiryStatus::Expired
    } else if days <= SOON_MAX_DAYS {
        ExpiryStatus::ExpiringSoon
    } else if days <= WEEK_MAX_DAYS {
        ExpiryStatus::ExpiringWeek
    } else {
        ExpiryStatus::Fresh
    }
}

/// Format the "days left" text for a day count and its status.
///
/// The status is taken as given: a negative count paired with a
/// non-expired status is rendered verbatim ("-2 days left").
pub fn format_days_left(days: i64, status: ExpiryStatus) -> String {
    if status == ExpiryStatus::Expired {
        let ago = days.unsigned_abs();
        if ago == 1 {
            return "Expired 1 day ago".to_string();
        }
        return format!("Expired {} days ago", ago);
    }

    match days {
        0 => "Expires today".to_string(),
        1 => "1 day left".to_string(),
        n => format!("{} days left", n),
    }
}

/// Whole days from `today` until `expiry` (negative once past)
pub fn days_until(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

/// Parse an API date string
pub fn parse_expiry_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}
