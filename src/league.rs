// 🏟️ Leagues - every code table is partitioned by league
//
// A league decides how a calendar date maps to a season and where its
// reference site lives. Nothing else in the crate branches on league directly.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LineageError;

/// Basketball seasons straddle New Year; games from this month on belong to the next season.
const NBA_SEASON_ROLLOVER_MONTH: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum League {
    Mlb,
    Nba,
}

impl League {
    pub const ALL: [League; 2] = [League::Mlb, League::Nba];

    pub fn as_str(&self) -> &'static str {
        match self {
            League::Mlb => "mlb",
            League::Nba => "nba",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            League::Mlb => "Major League Baseball",
            League::Nba => "National Basketball Association",
        }
    }

    /// Season a calendar date belongs to.
    ///
    /// MLB seasons are calendar years. NBA seasons are named by the year they end,
    /// so a game on 2003-11-02 is part of the 2004 season.
    pub fn season_of(&self, date: NaiveDate) -> i32 {
        match self {
            League::Mlb => date.year(),
            League::Nba if date.month() >= NBA_SEASON_ROLLOVER_MONTH => date.year() + 1,
            League::Nba => date.year(),
        }
    }

    /// A representative regular-season date for `season`.
    pub fn mid_season(&self, season: i32) -> NaiveDate {
        let (month, day) = match self {
            League::Mlb => (7, 1),
            League::Nba => (1, 15),
        };
        NaiveDate::from_ymd_opt(season, month, day).unwrap_or(NaiveDate::MIN)
    }

    /// Default boxscore reference site, used unless configuration overrides it
    pub fn default_reference_site(&self) -> &'static str {
        match self {
            League::Mlb => "https://www.baseball-reference.com",
            League::Nba => "https://www.basketball-reference.com",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for League {
    type Err = LineageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mlb" | "baseball" => Ok(League::Mlb),
            "nba" | "basketball" => Ok(League::Nba),
            _ => Err(LineageError::UnknownLeague(s.to_string())),
        }
    }
}
