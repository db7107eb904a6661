// Built-in reference tables
//
// Compiled-in data, one module per league. Rows are compact tuples so the
// tables read like the spreadsheets they were transcribed from; the helpers
// below expand them into entity types.

pub mod mlb;
pub mod nba;

use crate::entities::{LogoEntry, NameAlias, TeamRecord};
use crate::league::League;
use crate::resolver::CodeOverride;
use crate::rules::DisambiguationRule;
use crate::temporal::YearRange;

/// franchise, canonical code, display name, reference-site code, logo code, first season, last season
type TeamRow = (&'static str, &'static str, &'static str, &'static str, &'static str, i32, Option<i32>);

/// rule id, names, years, canonical code
type RuleRow = (&'static str, &'static [&'static str], YearRange, &'static str);

/// alias, canonical code
type AliasRow = (&'static str, &'static str);

/// stats-source code, years, reference-site code
type OverrideRow = (&'static str, YearRange, &'static str);

/// logo code, years, file stem
type LogoRow = (&'static str, YearRange, &'static str);

/// Everything one league contributes to a catalog
#[derive(Debug, Clone)]
pub struct LeagueTables {
    pub records: Vec<TeamRecord>,
    pub rules: Vec<DisambiguationRule>,
    pub aliases: Vec<NameAlias>,
    pub overrides: Vec<CodeOverride>,
    pub logos: Vec<LogoEntry>,
}

/// Built-in tables for `league`, with logo URLs rooted at `logo_cdn`
pub fn builtin(league: League, logo_cdn: &str) -> LeagueTables {
    let (teams, rules, aliases, overrides, logos) = match league {
        League::Mlb => (mlb::TEAMS, mlb::RULES, mlb::ALIASES, mlb::OVERRIDES, mlb::LOGOS),
        League::Nba => (nba::TEAMS, nba::RULES, nba::ALIASES, nba::OVERRIDES, nba::LOGOS),
    };

    LeagueTables {
        records: teams
            .iter()
            .map(|&(franchise, code, name, reference, logo, start, end)| {
                let years = match end {
                    Some(end) => YearRange::between(start, end),
                    None => YearRange::since(start),
                };
                TeamRecord::new(franchise, code, name, reference, logo, years)
            })
            .collect(),
        rules: rules
            .iter()
            .map(|&(id, names, years, code)| DisambiguationRule::new(id, names, years, code))
            .collect(),
        aliases: aliases
            .iter()
            .map(|&(alias, code)| NameAlias::new(alias, code))
            .collect(),
        overrides: overrides
            .iter()
            .map(|&(code, years, reference)| CodeOverride::new(code, years, reference))
            .collect(),
        logos: logos
            .iter()
            .map(|&(code, years, file)| LogoEntry::new(code, years, logo_url(logo_cdn, league, file)))
            .collect(),
    }
}

fn logo_url(cdn: &str, league: League, file: &str) -> String {
    format!("{}/{}/{}.svg", cdn.trim_end_matches('/'), league.as_str(), file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_logo_urls_rooted_at_cdn() {
        let tables = builtin(League::Mlb, "https://cdn.example/logos/");
        let nyy = tables
            .logos
            .iter()
            .find(|l| l.logo_asset_code == "nyy" && l.years.is_open())
            .unwrap();

        assert_eq!(nyy.url, "https://cdn.example/logos/mlb/nyy_1947.svg");
    }

    #[test]
    fn test_every_rule_and_alias_targets_a_known_code() {
        for league in League::ALL {
            let tables = builtin(league, "https://cdn.example");
            let codes: HashSet<&str> = tables.records.iter().map(|r| r.canonical_code.as_str()).collect();

            for rule in &tables.rules {
                assert!(codes.contains(rule.canonical_code.as_str()), "{} rule {} -> {}", league, rule.id, rule.canonical_code);
            }
            for alias in &tables.aliases {
                assert!(codes.contains(alias.canonical_code.as_str()), "{} alias {} -> {}", league, alias.alias, alias.canonical_code);
            }
        }
    }

    #[test]
    fn test_rules_only_fire_while_their_target_exists() {
        for league in League::ALL {
            let tables = builtin(league, "https://cdn.example");
            for rule in &tables.rules {
                let target: Vec<&TeamRecord> = tables
                    .records
                    .iter()
                    .filter(|r| r.canonical_code == rule.canonical_code)
                    .collect();
                let end = rule.years.last_year(2100);
                for year in rule.years.start..=end {
                    assert!(
                        target.iter().any(|r| r.is_active(year)),
                        "{} rule {} points at {} in {}",
                        league,
                        rule.id,
                        rule.canonical_code,
                        year
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_record_year_has_exactly_one_logo() {
        for league in League::ALL {
            let tables = builtin(league, "https://cdn.example");
            for record in &tables.records {
                for year in record.active_range.start..=record.active_range.last_year(2100) {
                    let hits = tables
                        .logos
                        .iter()
                        .filter(|l| l.logo_asset_code == record.logo_asset_code && l.years.contains(year))
                        .count();
                    assert_eq!(hits, 1, "{} {} {} in {}", league, record.canonical_code, record.logo_asset_code, year);
                }
            }
        }
    }
}
