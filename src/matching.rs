//! Recipe Match Scoring
//!
//! Turns the used/missed ingredient counts of a recipe into a
//! percentage, a quality bucket and the match text shown on cards.

use std::fmt;

/// Minimum rounded percentage for a high-quality match
pub const HIGH_MATCH_PERCENT: u32 = 80;

/// Minimum rounded percentage for a medium-quality match
pub const MEDIUM_MATCH_PERCENT: u32 = 50;

/// Match quality bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchQuality {
    Low,
    Medium,
    High,
}

impl MatchQuality {
    pub fn css_class(self) -> &'static str {
        match self {
            MatchQuality::Low => "low",
            MatchQuality::Medium => "medium",
            MatchQuality::High => "high",
        }
    }
}

/// Scored ingredient match for one recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchScore {
    used: u32,
    total: u64,
    percentage: Option<u32>,
    quality: MatchQuality,
}

impl MatchScore {
    pub fn used(&self) -> u32 {
        self.used
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Rounded match percentage; `None` when the recipe lists no ingredients
    pub fn percentage(&self) -> Option<u32> {
        self.percentage
    }

    pub fn quality(&self) -> MatchQuality {
        self.quality
    }

    /// Display text, e.g. "8/10 ingredients (80% match)"
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percentage {
            None => f.write_str("No ingredient info"),
            Some(percentage) => write!(
                f,
                "{}/{} ingredients ({}% match)",
                self.used, self.total, percentage
            ),
        }
    }
}

/// Score a recipe from its used and missed ingredient counts.
///
/// The percentage is `100 * used / total` rounded half up, computed
/// exactly in integers. Quality thresholds apply to the rounded value.
pub fn score(used: u32, missed: u32) -> MatchScore {
    let total = u64::from(used) + u64::from(missed);

    if total == 0 {
        return MatchScore {
            used,
            total,
            percentage: None,
            quality: MatchQuality::Low,
        };
    }

    // round(100u/t) == floor((200u + t) / 2t) for non-negative integers
    let percentage = ((200 * u64::from(used) + total) / (2 * total)) as u32;

    let quality = if percentage >= HIGH_MATCH_PERCENT {
        MatchQuality::High
    } else if percentage >= MEDIUM_MATCH_PERCENT {
        MatchQuality::Medium
    } else {
        MatchQuality::Low
    };

    MatchScore {
        used,
        total,
        percentage: Some(percentage),
        quality,
    }
}
