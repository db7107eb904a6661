// 🎟️ Game Records - one tagged type at the data-access boundary
//
// The two leagues' game tables come from different historical sources and
// name their columns differently (game_date vs date, away_team vs visitor).
// Those differences are resolved here, once; everything downstream uses the
// accessors on GameRecord.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::TeamView;
use crate::league::League;
use crate::resolver::GameNumber;

// ============================================================================
// PER-LEAGUE PAYLOADS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MlbGame {
    pub id: String,
    pub game_date: NaiveDate,
    pub home_team: String,
    pub away_team: String,

    #[serde(default)]
    pub home_score: Option<u32>,

    #[serde(default)]
    pub away_score: Option<u32>,

    #[serde(default)]
    pub venue: Option<String>,

    /// 1 or 2 for the games of a doubleheader
    #[serde(default)]
    pub game_number: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NbaGame {
    pub id: String,
    pub date: NaiveDate,
    pub home: String,
    pub visitor: String,

    #[serde(default)]
    pub home_points: Option<u32>,

    #[serde(default)]
    pub visitor_points: Option<u32>,

    #[serde(default)]
    pub arena: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "league", rename_all = "lowercase")]
pub enum GameRecord {
    Mlb(MlbGame),
    Nba(NbaGame),
}

impl GameRecord {
    pub fn league(&self) -> League {
        match self {
            GameRecord::Mlb(_) => League::Mlb,
            GameRecord::Nba(_) => League::Nba,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            GameRecord::Mlb(g) => &g.id,
            GameRecord::Nba(g) => &g.id,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            GameRecord::Mlb(g) => g.game_date,
            GameRecord::Nba(g) => g.date,
        }
    }

    pub fn season(&self) -> i32 {
        self.league().season_of(self.date())
    }

    pub fn home_team(&self) -> &str {
        match self {
            GameRecord::Mlb(g) => &g.home_team,
            GameRecord::Nba(g) => &g.home,
        }
    }

    pub fn away_team(&self) -> &str {
        match self {
            GameRecord::Mlb(g) => &g.away_team,
            GameRecord::Nba(g) => &g.visitor,
        }
    }

    pub fn home_score(&self) -> Option<u32> {
        match self {
            GameRecord::Mlb(g) => g.home_score,
            GameRecord::Nba(g) => g.home_points,
        }
    }

    pub fn away_score(&self) -> Option<u32> {
        match self {
            GameRecord::Mlb(g) => g.away_score,
            GameRecord::Nba(g) => g.visitor_points,
        }
    }

    pub fn venue(&self) -> Option<&str> {
        match self {
            GameRecord::Mlb(g) => g.venue.as_deref(),
            GameRecord::Nba(g) => g.arena.as_deref(),
        }
    }

    /// Position within the day. Unknown digits count as a single game.
    pub fn game_number(&self) -> GameNumber {
        match self {
            GameRecord::Mlb(g) => g
                .game_number
                .and_then(GameNumber::from_digit)
                .unwrap_or_default(),
            GameRecord::Nba(_) => GameNumber::Single,
        }
    }

    /// Winning side, once both scores are in and differ
    pub fn winner(&self) -> Option<Side> {
        let (home, away) = (self.home_score()?, self.away_score()?);
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

// ============================================================================
// RESOLVED GAME
// ============================================================================

/// A game with both teams resolved as of the game date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedGame {
    pub id: String,
    pub league: League,
    pub date: NaiveDate,
    pub season: i32,
    pub home: TeamView,
    pub away: TeamView,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub venue: Option<String>,
    pub game_number: GameNumber,
    pub boxscore_url: String,
    pub winner: Option<Side>,
}

impl ResolvedGame {
    pub fn team(&self, side: Side) -> &TeamView {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// "Seattle Mariners 3 @ Anaheim Angels 6"; scores are left out until both are known
    pub fn headline(&self) -> String {
        match (self.away_score, self.home_score) {
            (Some(away), Some(home)) => format!(
                "{} {} @ {} {}",
                self.away.display_name, away, self.home.display_name, home
            ),
            _ => format!("{} @ {}", self.away.display_name, self.home.display_name),
        }
    }
}
