// 📚 Catalog - every table for a league, built once and lent out
//
// The resolvers are borrowed views over a LeagueCatalog. Nothing here is
// mutated after construction, so a Catalog can sit behind an Arc and be shared
// by the CLI, the server and the tests alike.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::config::Config;
use crate::entities::{AliasTable, LogoTable, TeamRecord, TeamRegistry};
use crate::error::Result;
use crate::games::{GameRecord, ResolvedGame};
use crate::league::League;
use crate::logos::LogoResolver;
use crate::normalize::{MatchSource, NameNormalizer, Normalized};
use crate::resolver::{CodeResolver, GameNumber, OverrideTable};
use crate::rules::{RuleEngine, RuleFile};
use crate::tables::{self, LeagueTables};
use crate::temporal::{current_season, When};

// ============================================================================
// TEAM VIEW
// ============================================================================

/// What a consumer needs to show one team at one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamView {
    pub league: League,

    /// The identifier as given
    pub input: String,

    /// Season the lookup was made for
    pub season: i32,

    pub canonical_code: String,

    /// None when the input did not resolve to an incarnation active that season
    pub franchise: Option<String>,

    pub display_name: String,
    pub abbreviation: String,
    pub reference_site_code: String,

    /// Logo for the season, or the placeholder
    pub logo_url: String,

    pub matched: Option<MatchSource>,
}

impl TeamView {
    pub fn is_resolved(&self) -> bool {
        self.franchise.is_some()
    }
}

// ============================================================================
// LEAGUE CATALOG
// ============================================================================

#[derive(Debug, Clone)]
pub struct LeagueCatalog {
    league: League,
    registry: TeamRegistry,
    normalizer: NameNormalizer,
    overrides: OverrideTable,
    logos: LogoTable,
    reference_site: String,
    placeholder_logo: String,
    sample_years: Vec<i32>,
}

impl LeagueCatalog {
    /// Compiled-in tables for `league`, configured by `config`
    pub fn builtin(league: League, config: &Config) -> Self {
        Self::from_tables(league, tables::builtin(league, &config.logo_cdn), RuleEngine::new(), config)
    }

    /// Build from explicit tables. `extra_rules` are evaluated before the tables' own rules.
    pub fn from_tables(league: League, tables: LeagueTables, extra_rules: RuleEngine, config: &Config) -> Self {
        let registry = TeamRegistry::new(league, tables.records);

        let mut rules = RuleEngine::from_rules(tables.rules);
        rules.prepend(extra_rules);

        let aliases = AliasTable::build(&registry, &tables.aliases);
        let normalizer = NameNormalizer::new(&registry, rules, aliases);

        LeagueCatalog {
            league,
            normalizer,
            registry,
            overrides: OverrideTable::new(tables.overrides),
            logos: LogoTable::new(tables.logos),
            reference_site: config.reference_site(league).to_string(),
            placeholder_logo: config.placeholder_logo.clone(),
            sample_years: config.sample_years(league).to_vec(),
        }
    }

    pub fn league(&self) -> League {
        self.league
    }

    pub fn registry(&self) -> &TeamRegistry {
        &self.registry
    }

    pub fn normalizer(&self) -> &NameNormalizer {
        &self.normalizer
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    pub fn logo_table(&self) -> &LogoTable {
        &self.logos
    }

    pub fn reference_site(&self) -> &str {
        &self.reference_site
    }

    pub fn placeholder_logo(&self) -> &str {
        &self.placeholder_logo
    }

    pub fn resolver(&self) -> CodeResolver<'_> {
        CodeResolver::new(&self.registry, &self.normalizer, &self.overrides, &self.reference_site)
    }

    pub fn logos(&self) -> LogoResolver<'_> {
        LogoResolver::new(&self.logos, &self.placeholder_logo)
    }

    // ------------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------------

    pub fn identify(&self, team: &str, when: When) -> Option<Normalized> {
        self.normalizer.identify(team, when.season(self.league))
    }

    pub fn normalize(&self, team: &str, when: When) -> String {
        self.normalizer.normalize(team, when.season(self.league))
    }

    pub fn resolve(&self, team: &str, when: When) -> String {
        self.resolver().resolve(team, when)
    }

    /// The incarnation `team` names in the season of `when`
    pub fn record_for(&self, team: &str, when: When) -> Option<&TeamRecord> {
        let season = when.season(self.league);
        let normalized = self.normalizer.identify(team, season)?;
        self.registry.lookup(&normalized.canonical_code, season)
    }

    pub fn team_view(&self, team: &str, when: When) -> TeamView {
        self.team_view_for_season(team, when.season(self.league))
    }

    fn team_view_for_season(&self, team: &str, season: i32) -> TeamView {
        let normalized = self.normalizer.identify(team, season);
        let record = normalized
            .as_ref()
            .and_then(|n| self.registry.lookup(&n.canonical_code, season));
        let reference_site_code = self.resolver().resolve_season(team, season);

        match record {
            Some(record) => TeamView {
                league: self.league,
                input: team.to_string(),
                season,
                canonical_code: record.canonical_code.clone(),
                franchise: Some(record.franchise.clone()),
                display_name: record.display_name.clone(),
                abbreviation: record.canonical_code.clone(),
                reference_site_code,
                logo_url: self.logos().url_or_placeholder(&record.logo_asset_code, season),
                matched: normalized.map(|n| n.source),
            },
            None => {
                let code = normalized
                    .as_ref()
                    .map_or_else(|| team.trim().to_string(), |n| n.canonical_code.clone());
                TeamView {
                    league: self.league,
                    input: team.to_string(),
                    season,
                    canonical_code: code.clone(),
                    franchise: None,
                    display_name: team.trim().to_string(),
                    abbreviation: code,
                    reference_site_code,
                    logo_url: self.placeholder_logo.clone(),
                    matched: normalized.map(|n| n.source),
                }
            }
        }
    }

    pub fn boxscore_url(&self, home_team: &str, date: NaiveDate, game: GameNumber) -> String {
        self.resolver().boxscore_url_for(home_team, date, game)
    }

    /// Distinct logo URLs to prefetch: every team's logos, or only those in use during `season`
    pub fn preload_manifest(&self, season: Option<i32>) -> Vec<String> {
        let mut urls = BTreeSet::new();

        match season {
            Some(season) => {
                let logos = self.logos();
                for record in self.registry.active_in(season) {
                    if let Some(entry) = logos.resolve(&record.logo_asset_code, season) {
                        urls.insert(entry.url.clone());
                    }
                }
            }
            None => {
                for record in self.registry.records() {
                    for entry in self.logos.entries_for(&record.logo_asset_code) {
                        urls.insert(entry.url.clone());
                    }
                }
            }
        }

        urls.into_iter().collect()
    }

    /// Seasons the validator sweeps by default: configured years, else every
    /// transition year plus the current season
    pub fn sample_years(&self) -> Vec<i32> {
        if !self.sample_years.is_empty() {
            return self.sample_years.clone();
        }

        let current = current_season(self.league);
        let mut years: BTreeSet<i32> = self
            .registry
            .transition_years()
            .into_iter()
            .filter(|&year| year <= current)
            .collect();
        years.insert(current);
        years.into_iter().collect()
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Both leagues' catalogs
#[derive(Debug, Clone)]
pub struct Catalog {
    mlb: LeagueCatalog,
    nba: LeagueCatalog,
}

impl Catalog {
    /// Built-in tables with default configuration
    pub fn builtin() -> Self {
        let config = Config::default();
        Catalog {
            mlb: LeagueCatalog::builtin(League::Mlb, &config),
            nba: LeagueCatalog::builtin(League::Nba, &config),
        }
    }

    /// Built-in tables configured by `config`, plus its rules file if one is named
    pub fn from_config(config: &Config) -> Result<Self> {
        let extra = match &config.rules_file {
            Some(path) => RuleFile::load(path)?,
            None => RuleFile::default(),
        };

        let build = |league: League| {
            LeagueCatalog::from_tables(
                league,
                tables::builtin(league, &config.logo_cdn),
                extra.engine(league),
                config,
            )
        };

        Ok(Catalog {
            mlb: build(League::Mlb),
            nba: build(League::Nba),
        })
    }

    pub fn league(&self, league: League) -> &LeagueCatalog {
        match league {
            League::Mlb => &self.mlb,
            League::Nba => &self.nba,
        }
    }

    /// Both teams as of the game date, plus the boxscore link
    pub fn resolve_game(&self, game: &GameRecord) -> ResolvedGame {
        let catalog = self.league(game.league());
        let season = game.season();
        let home = catalog.team_view_for_season(game.home_team(), season);
        let away = catalog.team_view_for_season(game.away_team(), season);
        let boxscore_url = catalog
            .resolver()
            .boxscore_url(&home.reference_site_code, game.date(), game.game_number());

        ResolvedGame {
            id: game.id().to_string(),
            league: game.league(),
            date: game.date(),
            season,
            home,
            away,
            home_score: game.home_score(),
            away_score: game.away_score(),
            venue: game.venue().map(str::to_string),
            game_number: game.game_number(),
            boxscore_url,
            winner: game.winner(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{MlbGame, NbaGame, Side};
    use std::io::Write;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_every_record_round_trips_through_the_resolver() {
        let catalog = Catalog::builtin();

        for league in League::ALL {
            let league_catalog = catalog.league(league);
            let resolver = league_catalog.resolver();
            let current = current_season(league);

            for record in league_catalog.registry().records() {
                for year in record.active_range.start..=record.active_range.last_year(current) {
                    assert_eq!(
                        resolver.resolve_season(&record.canonical_code, year),
                        record.reference_site_code,
                        "{} {} in {}",
                        league,
                        record.canonical_code,
                        year
                    );
                }
            }
        }
    }

    #[test]
    fn test_marlins_boundary() {
        let mlb = Catalog::builtin();
        let mlb = mlb.league(League::Mlb);

        for name in ["Marlins", "Miami Marlins", "Florida Marlins"] {
            let before = mlb.team_view(name, When::Year(2011));
            let after = mlb.team_view(name, When::Year(2012));

            assert_eq!(before.canonical_code, "FLA", "{name}");
            assert_eq!(before.display_name, "Florida Marlins");
            assert_eq!(before.reference_site_code, "FLO");
            assert_eq!(after.canonical_code, "MIA", "{name}");
            assert_eq!(after.display_name, "Miami Marlins");
            assert_eq!(after.reference_site_code, "MIA");
            assert_eq!(before.franchise, after.franchise);
        }

        assert_eq!(mlb.resolve("FLA", When::parse("2005-07-04")), "FLO");
    }

    #[test]
    fn test_canonical_codes_and_aliases_normalize_stably() {
        let catalog = Catalog::builtin();

        for league in League::ALL {
            let league_catalog = catalog.league(league);
            let registry = league_catalog.registry();
            let normalizer = league_catalog.normalizer();
            let current = current_season(league);

            for code in registry.canonical_codes() {
                for year in [1950, 2000, current] {
                    assert_eq!(normalizer.normalize(code, year), code);
                }
            }

            let tables = tables::builtin(league, "https://cdn.example");
            for alias in &tables.aliases {
                if registry.is_canonical_code(&alias.alias.to_uppercase()) {
                    continue;
                }
                for year in [1980, 2010, current] {
                    let as_given = normalizer.normalize(&alias.alias, year);
                    assert_eq!(normalizer.normalize(&alias.alias.to_uppercase(), year), as_given, "{}", alias.alias);
                    assert_eq!(normalizer.normalize(&alias.alias.to_lowercase(), year), as_given, "{}", alias.alias);
                }
            }
        }
    }

    #[test]
    fn test_unknown_team_degrades_to_input_and_placeholder() {
        let catalog = Catalog::builtin();
        let mlb = catalog.league(League::Mlb);

        let view = mlb.team_view("Homestead Grays", When::Year(1940));
        assert!(!view.is_resolved());
        assert_eq!(view.display_name, "Homestead Grays");
        assert_eq!(view.reference_site_code, "Homestead Grays");
        assert_eq!(view.logo_url, mlb.placeholder_logo());
        assert_eq!(view.matched, None);
        assert_eq!(mlb.normalize("Homestead Grays", When::Year(1940)), "Homestead Grays");
    }

    #[test]
    fn test_known_code_outside_its_years_is_unresolved() {
        let catalog = Catalog::builtin();
        let view = catalog.league(League::Mlb).team_view("MIA", When::Year(2005));

        assert!(!view.is_resolved());
        assert_eq!(view.canonical_code, "MIA");
        assert_eq!(view.matched, Some(MatchSource::CanonicalCode));
    }

    #[test]
    fn test_team_view_through_a_rule() {
        let catalog = Catalog::builtin();
        let view = catalog.league(League::Mlb).team_view("Angels", When::parse("2003-06-15"));

        assert_eq!(view.canonical_code, "ANA");
        assert_eq!(view.display_name, "Anaheim Angels");
        assert_eq!(view.franchise.as_deref(), Some("angels"));
        assert_eq!(view.reference_site_code, "ANA");
        assert_eq!(view.logo_url, "https://cdn.team-lineage.dev/logos/mlb/ana_2002.svg");
        assert_eq!(
            view.matched,
            Some(MatchSource::Rule {
                rule_id: "angels-anaheim".to_string()
            })
        );
    }

    #[test]
    fn test_nba_stats_codes_hit_overrides() {
        let catalog = Catalog::builtin();
        let nba = catalog.league(League::Nba);

        let nets = nba.team_view("BKN", When::parse("2019-03-01"));
        assert_eq!(nets.canonical_code, "BRK");
        assert_eq!(nets.reference_site_code, "BRK");
        assert_eq!(nets.display_name, "Brooklyn Nets");

        assert_eq!(nba.resolve("PHX", When::Year(2010)), "PHO");
        assert_eq!(nba.resolve("CHA", When::Year(2010)), "CHA");
        assert_eq!(nba.resolve("CHA", When::Year(2016)), "CHO");
        // December belongs to the season that ends the following year
        assert_eq!(nba.team_view("Nets", When::parse("2012-12-01")).display_name, "Brooklyn Nets");
        assert_eq!(nba.team_view("Nets", When::parse("2012-05-01")).display_name, "New Jersey Nets");
    }

    #[test]
    fn test_every_override_key_names_a_team() {
        let catalog = Catalog::builtin();

        for league in League::ALL {
            let league_catalog = catalog.league(league);
            let registry = league_catalog.registry();
            let current = current_season(league);

            for o in &tables::builtin(league, "https://cdn.example").overrides {
                // Canonical codes are taken as given, even outside their own years
                if registry.is_canonical_code(&o.code) {
                    continue;
                }
                for year in o.years.start..=o.years.last_year(current) {
                    let view = league_catalog.team_view_for_season(&o.code, year);
                    assert!(view.is_resolved(), "{} {} in {}", league, o.code, year);
                    assert_eq!(view.reference_site_code, o.reference_site_code, "{} {} in {}", league, o.code, year);
                }
            }
        }
    }

    #[test]
    fn test_nba_stats_codes_resolve_to_teams() {
        let catalog = Catalog::builtin();
        let nba = catalog.league(League::Nba);

        let wizards = nba.team_view("WSH", When::Year(2010));
        assert_eq!(wizards.display_name, "Washington Wizards");
        assert_eq!(wizards.reference_site_code, "WAS");
        assert_eq!(wizards.logo_url, "https://cdn.team-lineage.dev/logos/nba/was_1998.svg");

        let hornets = nba.team_view("NO", When::Year(2010));
        assert_eq!(hornets.canonical_code, "NOH");
        assert_eq!(hornets.display_name, "New Orleans Hornets");
        assert_eq!(hornets.reference_site_code, "NOH");

        assert_eq!(nba.team_view("NO", When::Year(2007)).canonical_code, "NOK");
        assert_eq!(nba.team_view("NO", When::Year(2004)).canonical_code, "NOH");
        assert_eq!(nba.team_view("NO", When::Year(2020)).display_name, "New Orleans Pelicans");
        assert_eq!(nba.resolve("NO", When::Year(2020)), "NOP");
    }

    #[test]
    fn test_malformed_date_means_today() {
        let catalog = Catalog::builtin();
        let view = catalog.league(League::Mlb).team_view("NYY", When::parse("sometime in June"));

        assert_eq!(view.season, current_season(League::Mlb));
        assert_eq!(view.display_name, "New York Yankees");
    }

    #[test]
    fn test_preload_manifest() {
        let catalog = Catalog::builtin();
        let mlb = catalog.league(League::Mlb);

        let season = mlb.preload_manifest(Some(2012));
        assert_eq!(season.len(), mlb.registry().active_in(2012).len());
        assert!(season.iter().any(|url| url.ends_with("/mlb/mia_2012.svg")));
        assert!(!season.iter().any(|url| url.contains("/fla_")));

        let everything = mlb.preload_manifest(None);
        assert_eq!(everything.len(), mlb.logo_table().len());
        assert!(!everything.iter().any(|url| url == mlb.placeholder_logo()));
    }

    #[test]
    fn test_default_sample_years() {
        let catalog = Catalog::builtin();
        let mlb = catalog.league(League::Mlb);
        let years = mlb.sample_years();

        assert!(years.contains(&2012));
        assert!(years.contains(&2005));
        assert!(years.contains(&current_season(League::Mlb)));
        assert!(years.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_configured_sample_years_win() {
        let mut config = Config::default();
        config.validation.nba_sample_years = vec![1990, 2013];

        let catalog = Catalog::from_config(&config).unwrap();
        assert_eq!(catalog.league(League::Nba).sample_years(), vec![1990, 2013]);
    }

    #[test]
    fn test_rules_file_rules_come_first() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"mlb": [
                {{"id": "fish", "names": ["Fish"], "years": {{"start": 1993, "end": 2011}}, "canonical_code": "FLA"}},
                {{"id": "rally-monkey", "names": ["Angels"], "years": {{"start": 2002, "end": 2002}}, "canonical_code": "ANA"}}
            ]}}"#
        )
        .unwrap();

        let mut config = Config::default();
        config.rules_file = Some(file.path().to_path_buf());
        let catalog = Catalog::from_config(&config).unwrap();
        let mlb = catalog.league(League::Mlb);

        assert_eq!(mlb.normalize("fish", When::Year(2003)), "FLA");
        assert_eq!(
            mlb.identify("Angels", When::Year(2002)).unwrap().source,
            MatchSource::Rule {
                rule_id: "rally-monkey".to_string()
            }
        );
        assert_eq!(catalog.league(League::Nba).normalize("Fish", When::Year(2003)), "Fish");
    }

    #[test]
    fn test_missing_rules_file_is_an_error() {
        let mut config = Config::default();
        config.rules_file = Some("/definitely/not/rules.json".into());

        assert!(Catalog::from_config(&config).is_err());
    }

    #[test]
    fn test_resolve_mlb_doubleheader() {
        let catalog = Catalog::builtin();
        let game = GameRecord::Mlb(MlbGame {
            id: "2003-06-15-2".to_string(),
            game_date: date(2003, 6, 15),
            home_team: "Angels".to_string(),
            away_team: "Mariners".to_string(),
            home_score: Some(6),
            away_score: Some(3),
            venue: Some("Edison International Field".to_string()),
            game_number: Some(2),
        });

        let resolved = catalog.resolve_game(&game);
        assert_eq!(resolved.home.display_name, "Anaheim Angels");
        assert_eq!(resolved.away.canonical_code, "SEA");
        assert_eq!(resolved.boxscore_url, "https://www.baseball-reference.com/boxes/ANA/ANA200306152.shtml");
        assert_eq!(resolved.winner, Some(Side::Home));
        assert_eq!(resolved.team(Side::Home).abbreviation, "ANA");
        assert_eq!(resolved.headline(), "Seattle Mariners 3 @ Anaheim Angels 6");
    }

    #[test]
    fn test_resolve_nba_game_uses_game_season() {
        let catalog = Catalog::builtin();
        let game = GameRecord::Nba(NbaGame {
            id: "n1".to_string(),
            date: date(2008, 11, 12),
            home: "OKC".to_string(),
            visitor: "Hornets".to_string(),
            home_points: Some(95),
            visitor_points: Some(100),
            arena: Some("Ford Center".to_string()),
        });

        let resolved = catalog.resolve_game(&game);
        assert_eq!(resolved.season, 2009);
        assert_eq!(resolved.home.display_name, "Oklahoma City Thunder");
        assert_eq!(resolved.away.canonical_code, "NOH");
        assert_eq!(resolved.boxscore_url, "https://www.basketball-reference.com/boxscores/200811120OKC.html");
        assert_eq!(resolved.winner, Some(Side::Away));
    }
}
