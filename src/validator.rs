// ✅ Mapping Validator - sweep the registry, report what is missing
//
// Batch and side-effect free: builds a report for a human to read, fixes
// nothing. Problems never abort the sweep; each one becomes an issue row.
//
// Per sampled year:
//   - registry integrity (duplicate codes, overlapping or gapped lineages)
//   - every active team has a reference-site code and a logo code
//   - the resolved boxscore URL for a mid-season date names the team's code
//   - a logo resolves for the year (warning only, the placeholder covers it)
//   - overrides that shadow an active canonical code (warning)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::Write;

use crate::catalog::LeagueCatalog;
use crate::entities::TeamRecord;
use crate::error::Result;
use crate::league::League;
use crate::logos::LogoLookup;
use crate::resolver::GameNumber;
use crate::temporal::{MAX_YEAR, MIN_YEAR};

// ============================================================================
// ISSUES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,   // A mapping is missing or produces a broken link
    Warning, // Degraded but usable (placeholder logo, shadowed code)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCheck {
    MissingReferenceCode,
    MissingLogoCode,
    BoxscoreUrl,
    LogoMissing,
    LogoAmbiguous,
    DuplicateCode,
    FranchiseOverlap,
    FranchiseGap,
    OverrideShadowing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub league: League,
    pub team_code: String,
    pub team_name: String,
    pub year: i32,
    pub kind: Severity,
    pub check: IssueCheck,
    pub message: String,
}

impl ValidationIssue {
    fn for_record(record: &TeamRecord, league: League, year: i32, kind: Severity, check: IssueCheck, message: String) -> Self {
        ValidationIssue {
            league,
            team_code: record.canonical_code.clone(),
            team_name: record.display_name.clone(),
            year,
            kind,
            check,
            message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == Severity::Error
    }
}

// ============================================================================
// REPORT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: i32,
    pub teams_checked: usize,
    pub clean_teams: usize,
    pub teams_with_errors: usize,
    pub teams_with_warnings: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub years_checked: usize,

    /// One per (team, year) pair swept
    pub team_seasons_checked: usize,
    pub clean_team_seasons: usize,

    /// Distinct team codes with at least one error anywhere in the report
    pub teams_with_errors: usize,
    pub teams_with_warnings: usize,

    pub error_count: usize,
    pub warning_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub report_id: String,
    pub generated_at: DateTime<Utc>,
    pub league: League,

    /// SHA-256 of the registry the report was computed against
    pub registry_digest: String,

    pub years: Vec<YearSummary>,
    pub issues: Vec<ValidationIssue>,
    pub summary: ReportSummary,
}

const CSV_COLUMNS: [&str; 7] = ["league", "team_code", "team_name", "year", "kind", "check", "message"];

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(ValidationIssue::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.kind == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.kind == Severity::Warning)
    }

    /// Issues grouped by year, then team code, for the admin table
    pub fn grouped(&self) -> BTreeMap<i32, BTreeMap<&str, Vec<&ValidationIssue>>> {
        let mut grouped: BTreeMap<i32, BTreeMap<&str, Vec<&ValidationIssue>>> = BTreeMap::new();
        for issue in &self.issues {
            grouped
                .entry(issue.year)
                .or_default()
                .entry(issue.team_code.as_str())
                .or_default()
                .push(issue);
        }
        grouped
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: {} years, {} team-seasons ({} clean) | {} errors across {} teams, {} warnings across {} teams",
            self.league,
            self.summary.years_checked,
            self.summary.team_seasons_checked,
            self.summary.clean_team_seasons,
            self.summary.error_count,
            self.summary.teams_with_errors,
            self.summary.warning_count,
            self.summary.teams_with_warnings
        )
    }

    /// One CSV row per issue
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        Self::write_csv_all(std::slice::from_ref(self), writer)
    }

    /// Several reports (one per league, say) as a single CSV with one header row
    pub fn write_csv_all<W: Write>(reports: &[ValidationReport], writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        if reports.iter().all(|r| r.issues.is_empty()) {
            wtr.write_record(CSV_COLUMNS)?;
        }
        for issue in reports.iter().flat_map(|r| &r.issues) {
            wtr.serialize(issue)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

pub struct MappingValidator<'a> {
    catalog: &'a LeagueCatalog,
}

impl<'a> MappingValidator<'a> {
    pub fn new(catalog: &'a LeagueCatalog) -> Self {
        MappingValidator { catalog }
    }

    pub fn validate_year(&self, year: i32) -> ValidationReport {
        self.validate_years(&[year])
    }

    /// Inclusive; an inverted range sweeps nothing. Bounds are clamped to the
    /// registry's first season and `MAX_YEAR`.
    pub fn validate_range(&self, start: i32, end: i32) -> ValidationReport {
        let first = self.catalog.registry().first_year().unwrap_or(MIN_YEAR).max(MIN_YEAR);
        let years: Vec<i32> = (start.max(first)..=end.min(MAX_YEAR)).collect();
        self.validate_years(&years)
    }

    pub fn validate_sampled(&self) -> ValidationReport {
        self.validate_years(&self.catalog.sample_years())
    }

    pub fn validate_years(&self, years: &[i32]) -> ValidationReport {
        let unique: BTreeSet<i32> = years.iter().copied().collect();

        let mut issues = Vec::new();
        let mut year_summaries = Vec::new();

        for year in unique {
            let (summary, mut year_issues) = self.sweep_year(year);
            year_summaries.push(summary);
            issues.append(&mut year_issues);
        }

        let summary = summarize(&year_summaries, &issues);
        tracing::debug!(
            league = %self.catalog.league(),
            years = summary.years_checked,
            errors = summary.error_count,
            warnings = summary.warning_count,
            "validation sweep finished"
        );

        ValidationReport {
            report_id: uuid::Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            league: self.catalog.league(),
            registry_digest: self.catalog.registry().digest(),
            years: year_summaries,
            issues,
            summary,
        }
    }

    fn sweep_year(&self, year: i32) -> (YearSummary, Vec<ValidationIssue>) {
        let active = self.catalog.registry().active_in(year);

        let mut issues = self.check_integrity(year, &active);
        for record in &active {
            issues.extend(self.check_record(record, year));
        }
        issues.extend(self.check_overrides(year));

        let mut errors: BTreeSet<&str> = BTreeSet::new();
        let mut warnings: BTreeSet<&str> = BTreeSet::new();
        for issue in &issues {
            match issue.kind {
                Severity::Error => errors.insert(issue.team_code.as_str()),
                Severity::Warning => warnings.insert(issue.team_code.as_str()),
            };
        }

        let clean_teams = active
            .iter()
            .filter(|r| {
                let code = r.canonical_code.as_str();
                !errors.contains(code) && !warnings.contains(code)
            })
            .count();

        let summary = YearSummary {
            year,
            teams_checked: active.len(),
            clean_teams,
            teams_with_errors: active.iter().filter(|r| errors.contains(r.canonical_code.as_str())).count(),
            teams_with_warnings: active.iter().filter(|r| warnings.contains(r.canonical_code.as_str())).count(),
        };

        (summary, issues)
    }

    // ========================================================================
    // CHECKS
    // ========================================================================

    fn check_record(&self, record: &TeamRecord, year: i32) -> Vec<ValidationIssue> {
        let league = self.catalog.league();
        let mut issues = Vec::new();

        if !record.has_reference_code() {
            issues.push(ValidationIssue::for_record(
                record,
                league,
                year,
                Severity::Error,
                IssueCheck::MissingReferenceCode,
                "no reference-site code".to_string(),
            ));
        } else {
            let date = league.mid_season(year);
            let url = self
                .catalog
                .resolver()
                .boxscore_url_for(&record.canonical_code, date, GameNumber::Single);
            if !url_path(&url).contains(record.reference_site_code.as_str()) {
                issues.push(ValidationIssue::for_record(
                    record,
                    league,
                    year,
                    Severity::Error,
                    IssueCheck::BoxscoreUrl,
                    format!("boxscore URL {} does not name {}", url, record.reference_site_code),
                ));
            }
        }

        if !record.has_logo_code() {
            issues.push(ValidationIssue::for_record(
                record,
                league,
                year,
                Severity::Error,
                IssueCheck::MissingLogoCode,
                "no logo asset code".to_string(),
            ));
        } else {
            match self.catalog.logos().find(&record.logo_asset_code, year) {
                LogoLookup::Found(_) => {}
                LogoLookup::Missing => issues.push(ValidationIssue::for_record(
                    record,
                    league,
                    year,
                    Severity::Warning,
                    IssueCheck::LogoMissing,
                    format!("no logo for '{}' in {}, placeholder will be shown", record.logo_asset_code, year),
                )),
                LogoLookup::Ambiguous(entries) => issues.push(ValidationIssue::for_record(
                    record,
                    league,
                    year,
                    Severity::Warning,
                    IssueCheck::LogoAmbiguous,
                    format!("{} logo ranges for '{}' cover {}", entries.len(), record.logo_asset_code, year),
                )),
            }
        }

        issues
    }

    fn check_integrity(&self, year: i32, active: &[&TeamRecord]) -> Vec<ValidationIssue> {
        let league = self.catalog.league();
        let mut issues = Vec::new();

        let mut by_code: BTreeMap<&str, Vec<&TeamRecord>> = BTreeMap::new();
        let mut by_franchise: BTreeMap<&str, Vec<&TeamRecord>> = BTreeMap::new();
        for record in active {
            by_code.entry(record.canonical_code.as_str()).or_default().push(record);
            by_franchise.entry(record.franchise.as_str()).or_default().push(record);
        }

        for (code, records) in &by_code {
            if records.len() > 1 {
                issues.push(ValidationIssue::for_record(
                    records[0],
                    league,
                    year,
                    Severity::Error,
                    IssueCheck::DuplicateCode,
                    format!("{} registry entries claim {} in {}", records.len(), code, year),
                ));
            }
        }

        for (franchise, records) in &by_franchise {
            if records.len() > 1 {
                let names: Vec<&str> = records.iter().map(|r| r.display_name.as_str()).collect();
                for record in records {
                    issues.push(ValidationIssue::for_record(
                        record,
                        league,
                        year,
                        Severity::Error,
                        IssueCheck::FranchiseOverlap,
                        format!("franchise '{}' has overlapping incarnations: {}", franchise, names.join(", ")),
                    ));
                }
            }
        }

        let current = crate::temporal::current_season(league);
        let registry = self.catalog.registry();
        for franchise in registry.franchises() {
            if by_franchise.contains_key(franchise) {
                continue;
            }
            let lineage = registry.lineage(franchise);
            let before = lineage
                .iter()
                .filter(|r| r.active_range.last_year(current) < year)
                .max_by_key(|r| r.active_range.start);
            let after = lineage.iter().any(|r| r.active_range.start > year);

            if let (Some(before), true) = (before, after) {
                issues.push(ValidationIssue::for_record(
                    before,
                    league,
                    year,
                    Severity::Error,
                    IssueCheck::FranchiseGap,
                    format!("franchise '{}' has no incarnation in {}", franchise, year),
                ));
            }
        }

        issues
    }

    fn check_overrides(&self, year: i32) -> Vec<ValidationIssue> {
        let league = self.catalog.league();
        let registry = self.catalog.registry();

        self.catalog
            .overrides()
            .active_in(year)
            .flat_map(|o| {
                registry
                    .lookup_all(&o.code, year)
                    .into_iter()
                    .filter(move |r| r.reference_site_code != o.reference_site_code)
                    .map(move |r| {
                        ValidationIssue::for_record(
                            r,
                            league,
                            year,
                            Severity::Warning,
                            IssueCheck::OverrideShadowing,
                            format!(
                                "override sends {} to {}, registry says {}",
                                o.code, o.reference_site_code, r.reference_site_code
                            ),
                        )
                    })
            })
            .collect()
    }
}

/// Path portion of a URL, without scheme and host
fn url_path(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    rest.split_once('/').map_or("", |(_, path)| path)
}

fn summarize(years: &[YearSummary], issues: &[ValidationIssue]) -> ReportSummary {
    let mut teams: HashMap<Severity, BTreeSet<&str>> = HashMap::new();
    for issue in issues {
        teams.entry(issue.kind).or_default().insert(issue.team_code.as_str());
    }
    let distinct = |kind: Severity| teams.get(&kind).map_or(0, BTreeSet::len);

    ReportSummary {
        years_checked: years.len(),
        team_seasons_checked: years.iter().map(|y| y.teams_checked).sum(),
        clean_team_seasons: years.iter().map(|y| y.clean_teams).sum(),
        teams_with_errors: distinct(Severity::Error),
        teams_with_warnings: distinct(Severity::Warning),
        error_count: issues.iter().filter(|i| i.kind == Severity::Error).count(),
        warning_count: issues.iter().filter(|i| i.kind == Severity::Warning).count(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
