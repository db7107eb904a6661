// 🧢 Team Entity - one incarnation of a franchise
//
// "Florida Marlins" and "Miami Marlins" are two VALUES of one franchise
// IDENTITY. Each incarnation carries the codes that were authoritative while
// it existed, and the registry answers "who was FLA in 2005?".

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;

use crate::league::League;
use crate::temporal::YearRange;

// ============================================================================
// TEAM RECORD
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    /// Lineage identity shared by every incarnation of one franchise
    pub franchise: String,

    /// Registry key for this incarnation (e.g. "FLA", "MIA")
    pub canonical_code: String,

    /// Full name while this incarnation was active
    pub display_name: String,

    /// Team code the boxscore reference site uses in its URLs
    pub reference_site_code: String,

    /// Key into the logo table
    pub logo_asset_code: String,

    pub active_range: YearRange,
}

impl TeamRecord {
    pub fn new(
        franchise: impl Into<String>,
        canonical_code: impl Into<String>,
        display_name: impl Into<String>,
        reference_site_code: impl Into<String>,
        logo_asset_code: impl Into<String>,
        active_range: YearRange,
    ) -> Self {
        TeamRecord {
            franchise: franchise.into(),
            canonical_code: canonical_code.into(),
            display_name: display_name.into(),
            reference_site_code: reference_site_code.into(),
            logo_asset_code: logo_asset_code.into(),
            active_range,
        }
    }

    pub fn is_active(&self, year: i32) -> bool {
        self.active_range.contains(year)
    }

    pub fn has_reference_code(&self) -> bool {
        !self.reference_site_code.trim().is_empty()
    }

    pub fn has_logo_code(&self) -> bool {
        !self.logo_asset_code.trim().is_empty()
    }
}

// ============================================================================
// TEAM REGISTRY
// ============================================================================

/// Every known incarnation for one league. Immutable once built.
#[derive(Debug, Clone)]
pub struct TeamRegistry {
    league: League,
    records: Vec<TeamRecord>,
}

impl TeamRegistry {
    pub fn new(league: League, records: Vec<TeamRecord>) -> Self {
        TeamRegistry { league, records }
    }

    pub fn league(&self) -> League {
        self.league
    }

    pub fn records(&self) -> &[TeamRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The incarnation keyed by `code` that was authoritative in `year`.
    ///
    /// Overlapping entries are a data defect the validator reports. Here the first
    /// match is returned and the overlap is logged, so lookups keep working.
    pub fn lookup(&self, code: &str, year: i32) -> Option<&TeamRecord> {
        let mut matches = self
            .records
            .iter()
            .filter(|r| r.canonical_code == code && r.is_active(year));

        let first = matches.next()?;
        if matches.next().is_some() {
            tracing::warn!(
                league = %self.league,
                code,
                year,
                "overlapping registry entries, returning first match"
            );
        }
        Some(first)
    }

    /// Every incarnation keyed by `code` active in `year` (more than one is a defect)
    pub fn lookup_all(&self, code: &str, year: i32) -> Vec<&TeamRecord> {
        self.records
            .iter()
            .filter(|r| r.canonical_code == code && r.is_active(year))
            .collect()
    }

    /// Whether `code` is a canonical code in any year (case-sensitive)
    pub fn is_canonical_code(&self, code: &str) -> bool {
        self.records.iter().any(|r| r.canonical_code == code)
    }

    pub fn active_in(&self, year: i32) -> Vec<&TeamRecord> {
        self.records.iter().filter(|r| r.is_active(year)).collect()
    }

    /// All incarnations of one franchise, oldest first
    pub fn lineage(&self, franchise: &str) -> Vec<&TeamRecord> {
        let mut lineage: Vec<&TeamRecord> = self
            .records
            .iter()
            .filter(|r| r.franchise == franchise)
            .collect();
        lineage.sort_by_key(|r| r.active_range.start);
        lineage
    }

    pub fn franchises(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.franchise.as_str()).collect();
        set.into_iter().collect()
    }

    pub fn canonical_codes(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self
            .records
            .iter()
            .map(|r| r.canonical_code.as_str())
            .collect();
        set.into_iter().collect()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.records.iter().map(|r| r.active_range.start).min()
    }

    /// Years where some incarnation starts or has just ended, ascending
    pub fn transition_years(&self) -> Vec<i32> {
        let mut years = BTreeSet::new();
        for record in &self.records {
            years.insert(record.active_range.start);
            if let Some(end) = record.active_range.end {
                years.insert(end + 1);
            }
        }
        years.into_iter().collect()
    }

    /// SHA-256 over every record, so reports can name the table build they checked
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.league.as_str());
        for r in &self.records {
            hasher.update(format!(
                "|{}|{}|{}|{}|{}|{}",
                r.franchise,
                r.canonical_code,
                r.display_name,
                r.reference_site_code,
                r.logo_asset_code,
                r.active_range
            ));
        }
        format!("{:x}", hasher.finalize())
    }
}

// ============================================================================
// TESTS
// ============================================================================
