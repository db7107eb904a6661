// ⏰ Temporal Model - year ranges and tolerant date input
//
// Team identities, overrides, rules and logos are all authoritative over
// inclusive year spans. Caller-supplied dates are never trusted: anything that
// does not parse falls back to today instead of failing.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::league::League;

/// Bare-year input outside this window is treated as malformed; validation sweeps stay inside it too
pub const MIN_YEAR: i32 = 1850;
pub const MAX_YEAR: i32 = 2200;

// ============================================================================
// YEAR RANGE
// ============================================================================

/// Inclusive span of years; `end: None` means still active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i32>,
}

impl YearRange {
    /// Open-ended range starting at `start`
    pub const fn since(start: i32) -> Self {
        YearRange { start, end: None }
    }

    /// Closed range, both ends inclusive
    pub const fn between(start: i32, end: i32) -> Self {
        YearRange {
            start,
            end: Some(end),
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && self.end.map_or(true, |end| year <= end)
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    pub fn overlaps(&self, other: &YearRange) -> bool {
        let self_end = self.end.unwrap_or(i32::MAX);
        let other_end = other.end.unwrap_or(i32::MAX);
        self.start <= other_end && other.start <= self_end
    }

    /// Last covered year, with open ranges capped at `current`
    pub fn last_year(&self, current: i32) -> i32 {
        self.end.unwrap_or(current)
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) if end == self.start => write!(f, "{}", self.start),
            Some(end) => write!(f, "{}-{}", self.start, end),
            None => write!(f, "{}-present", self.start),
        }
    }
}

// ============================================================================
// WHEN
// ============================================================================

/// The point in time a lookup is asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum When {
    /// A specific calendar date
    Date(NaiveDate),

    /// A bare season year
    Year(i32),

    /// No usable date given
    Today,
}

impl When {
    /// Parse caller input, accepting `YYYY-MM-DD`, an ISO timestamp, or a bare year.
    ///
    /// Never fails: empty input means today, malformed input logs a warning and means today.
    pub fn parse(input: &str) -> When {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return When::Today;
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return When::Date(date);
        }

        // Timestamps: only the calendar part matters
        if let Some(prefix) = trimmed.get(..10) {
            if let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
                return When::Date(date);
            }
        }

        if let Ok(year) = trimmed.parse::<i32>() {
            if (MIN_YEAR..=MAX_YEAR).contains(&year) {
                return When::Year(year);
            }
        }

        tracing::warn!(input = trimmed, "unparseable date input, falling back to today");
        When::Today
    }

    pub fn from_option(input: Option<&str>) -> When {
        input.map_or(When::Today, When::parse)
    }

    /// Season this point in time falls in for `league`
    pub fn season(&self, league: League) -> i32 {
        match self {
            When::Date(date) => league.season_of(*date),
            When::Year(year) => *year,
            When::Today => league.season_of(today()),
        }
    }

    /// Concrete date; a bare year becomes the league's mid-season date
    pub fn date(&self, league: League) -> NaiveDate {
        match self {
            When::Date(date) => *date,
            When::Year(year) => league.mid_season(*year),
            When::Today => today(),
        }
    }
}

impl From<NaiveDate> for When {
    fn from(date: NaiveDate) -> Self {
        When::Date(date)
    }
}

impl From<i32> for When {
    fn from(year: i32) -> Self {
        When::Year(year)
    }
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn current_season(league: League) -> i32 {
    league.season_of(today())
}

// ============================================================================
// TESTS
// ============================================================================
