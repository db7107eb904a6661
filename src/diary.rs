// 📓 Diary - games a user attended or watched, and what they add up to
//
// Counting is by franchise, not by code: a fan of the Marlins who saw games in
// 2010 and 2015 saw one team, labelled with its latest name.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::games::{GameRecord, ResolvedGame, Side};
use crate::league::League;
use crate::temporal::When;

// ============================================================================
// ENTRIES
// ============================================================================

/// One line of a diary file, pointing at a stored game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryRecord {
    pub game_id: String,
    pub league: League,

    /// Free text: a code, a name, a nickname
    #[serde(default)]
    pub rooting_for: Option<String>,

    #[serde(default)]
    pub attended: bool,
}

pub fn load_diary(path: &Path) -> Result<Vec<DiaryRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Loss,
    /// Tie, no final score, or the rooted team did not play
    Undecided,
    NoRooting,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiaryEntry {
    pub game: ResolvedGame,

    /// Franchise the user was rooting for, resolved as of the game date
    pub rooting_franchise: Option<String>,

    pub attended: bool,
}

impl DiaryEntry {
    pub fn new(catalog: &Catalog, game: &GameRecord, rooting_for: Option<&str>, attended: bool) -> Self {
        let resolved = catalog.resolve_game(game);
        let rooting_franchise = rooting_for.and_then(|team| {
            let franchise = catalog
                .league(game.league())
                .record_for(team, When::Date(game.date()))
                .map(|r| r.franchise.clone());
            if franchise.is_none() {
                tracing::warn!(game = game.id(), team, "rooting interest did not resolve to a team");
            }
            franchise
        });

        DiaryEntry {
            game: resolved,
            rooting_franchise,
            attended,
        }
    }

    /// Side the rooted franchise played on, if it played
    pub fn rooting_side(&self) -> Option<Side> {
        let franchise = self.rooting_franchise.as_deref()?;
        [Side::Home, Side::Away]
            .into_iter()
            .find(|&side| self.game.team(side).franchise.as_deref() == Some(franchise))
    }

    pub fn outcome(&self) -> Outcome {
        if self.rooting_franchise.is_none() {
            return Outcome::NoRooting;
        }
        match (self.rooting_side(), self.game.winner) {
            (Some(side), Some(winner)) if side == winner => Outcome::Win,
            (Some(_), Some(_)) => Outcome::Loss,
            _ => Outcome::Undecided,
        }
    }
}

/// Join diary lines with stored games; lines naming an unknown game are skipped
pub fn build_entries(catalog: &Catalog, games: &[GameRecord], records: &[DiaryRecord]) -> Vec<DiaryEntry> {
    let index: HashMap<(League, &str), &GameRecord> = games.iter().map(|g| ((g.league(), g.id()), g)).collect();

    records
        .iter()
        .filter_map(|record| match index.get(&(record.league, record.game_id.as_str())) {
            Some(game) => Some(DiaryEntry::new(catalog, game, record.rooting_for.as_deref(), record.attended)),
            None => {
                tracing::warn!(league = %record.league, game_id = record.game_id.as_str(), "diary entry references unknown game");
                None
            }
        })
        .collect()
}

// ============================================================================
// STATISTICS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FranchiseCount {
    pub league: League,
    pub franchise: String,

    /// Name of the franchise's most recent incarnation
    pub display_name: String,

    pub games: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueCount {
    pub venue: String,
    pub games: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiaryStats {
    pub games: usize,
    pub attended: usize,
    pub watched: usize,
    pub wins: usize,
    pub losses: usize,
    pub undecided: usize,

    /// Most seen first
    pub franchises: Vec<FranchiseCount>,
    pub venues: Vec<VenueCount>,
}

impl DiaryStats {
    pub fn compute(catalog: &Catalog, entries: &[DiaryEntry]) -> Self {
        let mut stats = DiaryStats {
            games: entries.len(),
            ..Default::default()
        };

        let mut franchises: BTreeMap<(League, String), usize> = BTreeMap::new();
        let mut venues: BTreeMap<String, usize> = BTreeMap::new();

        for entry in entries {
            if entry.attended {
                stats.attended += 1;
            } else {
                stats.watched += 1;
            }

            match entry.outcome() {
                Outcome::Win => stats.wins += 1,
                Outcome::Loss => stats.losses += 1,
                Outcome::Undecided => stats.undecided += 1,
                Outcome::NoRooting => {}
            }

            for team in [&entry.game.home, &entry.game.away] {
                if let Some(franchise) = &team.franchise {
                    *franchises.entry((team.league, franchise.clone())).or_default() += 1;
                }
            }

            if let Some(venue) = entry.game.venue.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                *venues.entry(venue.to_string()).or_default() += 1;
            }
        }

        stats.franchises = franchises
            .into_iter()
            .map(|((league, franchise), games)| FranchiseCount {
                league,
                display_name: latest_name(catalog, league, &franchise),
                franchise,
                games,
            })
            .collect();
        stats
            .franchises
            .sort_by(|a, b| b.games.cmp(&a.games).then_with(|| a.display_name.cmp(&b.display_name)));

        stats.venues = venues
            .into_iter()
            .map(|(venue, games)| VenueCount { venue, games })
            .collect();
        stats
            .venues
            .sort_by(|a, b| b.games.cmp(&a.games).then_with(|| a.venue.cmp(&b.venue)));

        stats
    }

    /// Wins over decided games
    pub fn win_pct(&self) -> Option<f64> {
        let decided = self.wins + self.losses;
        if decided == 0 {
            None
        } else {
            Some(self.wins as f64 / decided as f64)
        }
    }

    pub fn record(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }
}

fn latest_name(catalog: &Catalog, league: League, franchise: &str) -> String {
    catalog
        .league(league)
        .registry()
        .lineage(franchise)
        .last()
        .map_or_else(|| franchise.to_string(), |r| r.display_name.clone())
}
