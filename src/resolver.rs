// 🔗 Temporal Code Resolver - team + date → reference-site code
//
// Order of precedence, documented and fixed:
//   1. override table, keyed on the raw input
//   2. override table, keyed on the normalized canonical code
//   3. the registry incarnation active that season
//   4. the input, unchanged
// Overrides always win. They exist because the reference site spells some
// teams differently from the stats source even when nothing about the team changed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::TeamRegistry;
use crate::league::League;
use crate::normalize::NameNormalizer;
use crate::temporal::{When, YearRange};

// ============================================================================
// OVERRIDES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeOverride {
    /// Code as it arrives from the stats source
    pub code: String,

    pub years: YearRange,

    pub reference_site_code: String,
}

impl CodeOverride {
    pub fn new(code: impl Into<String>, years: YearRange, reference_site_code: impl Into<String>) -> Self {
        CodeOverride {
            code: code.into(),
            years,
            reference_site_code: reference_site_code.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    overrides: Vec<CodeOverride>,
}

impl OverrideTable {
    pub fn new(overrides: Vec<CodeOverride>) -> Self {
        OverrideTable { overrides }
    }

    /// First override for `code` (case-sensitive) covering `year`
    pub fn find(&self, code: &str, year: i32) -> Option<&CodeOverride> {
        self.overrides
            .iter()
            .find(|o| o.code == code && o.years.contains(year))
    }

    pub fn active_in(&self, year: i32) -> impl Iterator<Item = &CodeOverride> {
        self.overrides.iter().filter(move |o| o.years.contains(year))
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

// ============================================================================
// GAME NUMBER
// ============================================================================

/// Position of a game within the day, encoded as the trailing digit of a boxscore URL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameNumber {
    #[default]
    Single,
    First,
    Second,
}

impl GameNumber {
    pub fn digit(&self) -> u8 {
        match self {
            GameNumber::Single => 0,
            GameNumber::First => 1,
            GameNumber::Second => 2,
        }
    }

    pub fn from_digit(digit: u8) -> Option<GameNumber> {
        match digit {
            0 => Some(GameNumber::Single),
            1 => Some(GameNumber::First),
            2 => Some(GameNumber::Second),
            _ => None,
        }
    }
}

/// Boxscore page for a game hosted by `reference_code` on `date`.
///
/// MLB: `{base}/boxes/ANA/ANA200306150.shtml`. NBA: `{base}/boxscores/200306150SAS.html`.
pub fn boxscore_url(league: League, base: &str, reference_code: &str, date: NaiveDate, game: GameNumber) -> String {
    let base = base.trim_end_matches('/');
    let stamp = date.format("%Y%m%d");
    let digit = game.digit();

    match league {
        League::Mlb => format!("{base}/boxes/{reference_code}/{reference_code}{stamp}{digit}.shtml"),
        League::Nba => format!("{base}/boxscores/{stamp}{digit}{reference_code}.html"),
    }
}

// ============================================================================
// RESOLVER
// ============================================================================

/// Borrowed view over one league's tables. Cheap to build, pure to call.
pub struct CodeResolver<'a> {
    league: League,
    registry: &'a TeamRegistry,
    normalizer: &'a NameNormalizer,
    overrides: &'a OverrideTable,
    reference_site: &'a str,
}

impl<'a> CodeResolver<'a> {
    pub fn new(
        registry: &'a TeamRegistry,
        normalizer: &'a NameNormalizer,
        overrides: &'a OverrideTable,
        reference_site: &'a str,
    ) -> Self {
        CodeResolver {
            league: registry.league(),
            registry,
            normalizer,
            overrides,
            reference_site,
        }
    }

    pub fn resolve(&self, input: &str, when: When) -> String {
        self.resolve_season(input, when.season(self.league))
    }

    /// Reference-site code for `input` in `season`; `input` itself when unresolvable
    pub fn resolve_season(&self, input: &str, season: i32) -> String {
        let raw = input.trim();

        if let Some(hit) = self.overrides.find(raw, season) {
            return hit.reference_site_code.clone();
        }

        let code = match self.normalizer.identify(raw, season) {
            Some(normalized) => normalized.canonical_code,
            None => {
                tracing::warn!(league = %self.league, input, season, "unresolved team identifier, keeping input as reference code");
                return input.to_string();
            }
        };

        if code != raw {
            if let Some(hit) = self.overrides.find(&code, season) {
                return hit.reference_site_code.clone();
            }
        }

        match self.registry.lookup(&code, season) {
            Some(record) if record.has_reference_code() => record.reference_site_code.clone(),
            _ => {
                tracing::warn!(league = %self.league, input, code = code.as_str(), season, "no reference code for season, keeping input");
                input.to_string()
            }
        }
    }

    pub fn boxscore_url(&self, reference_code: &str, date: NaiveDate, game: GameNumber) -> String {
        boxscore_url(self.league, self.reference_site, reference_code, date, game)
    }

    /// Resolve the home team for the game's season, then build its boxscore URL
    pub fn boxscore_url_for(&self, home_team: &str, date: NaiveDate, game: GameNumber) -> String {
        let season = self.league.season_of(date);
        let reference_code = self.resolve_season(home_team, season);
        self.boxscore_url(&reference_code, date, game)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{AliasTable, NameAlias, TeamRecord};
    use crate::rules::{DisambiguationRule, RuleEngine};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct Fixture {
        registry: TeamRegistry,
        normalizer: NameNormalizer,
        overrides: OverrideTable,
    }

    impl Fixture {
        fn new() -> Self {
            let registry = TeamRegistry::new(
                League::Mlb,
                vec![
                    TeamRecord::new("marlins", "FLA", "Florida Marlins", "FLO", "fla", YearRange::between(1993, 2011)),
                    TeamRecord::new("marlins", "MIA", "Miami Marlins", "MIA", "mia", YearRange::since(2012)),
                    TeamRecord::new("white-sox", "CHW", "Chicago White Sox", "CHA", "chw", YearRange::since(1901)),
                    TeamRecord::new("twins", "WSH", "Washington Senators", "WS1", "wsh", YearRange::between(1901, 1960)),
                    TeamRecord::new("nationals", "WSN", "Washington Nationals", "WAS", "wsn", YearRange::since(2005)),
                    TeamRecord::new("mets", "NYM", "New York Mets", "", "nym", YearRange::since(1962)),
                ],
            );
            let rules = RuleEngine::from_rules(vec![
                DisambiguationRule::new("marlins-florida", &["Marlins"], YearRange::between(1993, 2011), "FLA"),
                DisambiguationRule::new("marlins-miami", &["Marlins"], YearRange::since(2012), "MIA"),
            ]);
            let aliases = AliasTable::build(&registry, &[NameAlias::new("White Sox", "CHW"), NameAlias::new("CWS", "CHW")]);
            let normalizer = NameNormalizer::new(&registry, rules, aliases);
            let overrides = OverrideTable::new(vec![
                CodeOverride::new("CWS", YearRange::since(1901), "CHA"),
                CodeOverride::new("WSH", YearRange::since(2005), "WAS"),
            ]);
            Fixture {
                registry,
                normalizer,
                overrides,
            }
        }

        fn resolver(&self) -> CodeResolver<'_> {
            CodeResolver::new(&self.registry, &self.normalizer, &self.overrides, "https://www.baseball-reference.com/")
        }
    }

    #[test]
    fn test_canonical_code_resolves_to_era_reference_code() {
        let f = Fixture::new();
        let r = f.resolver();

        assert_eq!(r.resolve_season("FLA", 2005), "FLO");
        assert_eq!(r.resolve_season("MIA", 2012), "MIA");
        assert_eq!(r.resolve("FLA", When::parse("2011-09-28")), "FLO");
    }

    #[test]
    fn test_names_resolve_through_normalizer() {
        let f = Fixture::new();
        let r = f.resolver();

        assert_eq!(r.resolve_season("Marlins", 2011), "FLO");
        assert_eq!(r.resolve_season("Marlins", 2012), "MIA");
        assert_eq!(r.resolve_season("Chicago White Sox", 1959), "CHA");
    }

    #[test]
    fn test_override_wins_for_stats_source_codes() {
        let f = Fixture::new();
        let r = f.resolver();

        assert_eq!(r.resolve_season("CWS", 2005), "CHA");
        // WSH is the Senators' canonical code, but the stats source uses it for the Nationals
        assert_eq!(r.resolve_season("WSH", 1955), "WS1");
        assert_eq!(r.resolve_season("WSH", 2010), "WAS");
    }

    #[test]
    fn test_unresolvable_input_is_returned_unchanged() {
        let f = Fixture::new();
        let r = f.resolver();

        assert_eq!(r.resolve_season("Homestead Grays", 1940), "Homestead Grays");
        // Known code outside its active range
        assert_eq!(r.resolve_season("MIA", 2005), "MIA");
        // Known record with no reference code
        assert_eq!(r.resolve_season("NYM", 1986), "NYM");
    }

    #[test]
    fn test_doubleheader_boxscore_urls() {
        let f = Fixture::new();
        let r = f.resolver();
        let day = date(2003, 6, 15);

        assert_eq!(
            r.boxscore_url("ANA", day, GameNumber::Second),
            "https://www.baseball-reference.com/boxes/ANA/ANA200306152.shtml"
        );
        assert_eq!(
            r.boxscore_url("ANA", day, GameNumber::default()),
            "https://www.baseball-reference.com/boxes/ANA/ANA200306150.shtml"
        );
        assert!(r.boxscore_url("ANA", day, GameNumber::First).ends_with("/ANA/ANA200306151.shtml"));
    }

    #[test]
    fn test_boxscore_url_for_resolves_home_team() {
        let f = Fixture::new();
        let r = f.resolver();

        assert_eq!(
            r.boxscore_url_for("Marlins", date(2008, 5, 1), GameNumber::Single),
            "https://www.baseball-reference.com/boxes/FLO/FLO200805010.shtml"
        );
    }

    #[test]
    fn test_nba_boxscore_template() {
        let url = boxscore_url(
            League::Nba,
            "https://www.basketball-reference.com",
            "SAS",
            date(2003, 6, 15),
            GameNumber::Single,
        );
        assert_eq!(url, "https://www.basketball-reference.com/boxscores/200306150SAS.html");
    }

    #[test]
    fn test_game_number_digits() {
        assert_eq!(GameNumber::from_digit(0), Some(GameNumber::Single));
        assert_eq!(GameNumber::from_digit(2).map(|g| g.digit()), Some(2));
        assert_eq!(GameNumber::from_digit(3), None);
    }
}
