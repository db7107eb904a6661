// 🧭 Name Normalizer - free text + year → canonical code
//
// Precedence, first hit wins:
//   1. the input is already a canonical code (case-sensitive) → unchanged
//   2. a disambiguation rule claims the name for that year
//   3. the alias table (exact, then case-insensitive)
// A miss returns the input untouched and logs a warning. It never fails.

use serde::Serialize;
use std::collections::HashSet;

use crate::entities::{AliasMatch, AliasTable, TeamRegistry};
use crate::league::League;
use crate::rules::RuleEngine;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "via", rename_all = "snake_case")]
pub enum MatchSource {
    CanonicalCode,
    Rule { rule_id: String },
    Alias,
    AliasCaseInsensitive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Normalized {
    pub canonical_code: String,
    pub source: MatchSource,
}

#[derive(Debug, Clone)]
pub struct NameNormalizer {
    league: League,
    canonical: HashSet<String>,
    rules: RuleEngine,
    aliases: AliasTable,
}

impl NameNormalizer {
    pub fn new(registry: &TeamRegistry, rules: RuleEngine, aliases: AliasTable) -> Self {
        NameNormalizer {
            league: registry.league(),
            canonical: registry
                .records()
                .iter()
                .map(|r| r.canonical_code.clone())
                .collect(),
            rules,
            aliases,
        }
    }

    pub fn rules(&self) -> &RuleEngine {
        &self.rules
    }

    /// Resolve `input` for `year`, reporting how it matched. Silent on a miss.
    pub fn identify(&self, input: &str, year: i32) -> Option<Normalized> {
        let name = input.trim();
        if name.is_empty() {
            return None;
        }

        if self.canonical.contains(name) {
            return Some(Normalized {
                canonical_code: name.to_string(),
                source: MatchSource::CanonicalCode,
            });
        }

        if let Some(rule) = self.rules.evaluate(name, year) {
            return Some(Normalized {
                canonical_code: rule.canonical_code.clone(),
                source: MatchSource::Rule {
                    rule_id: rule.id.clone(),
                },
            });
        }

        self.aliases.lookup(name).map(|(code, matched)| Normalized {
            canonical_code: code.to_string(),
            source: match matched {
                AliasMatch::Exact => MatchSource::Alias,
                AliasMatch::CaseInsensitive => MatchSource::AliasCaseInsensitive,
            },
        })
    }

    /// Canonical code for `input` in `year`, or `input` itself when nothing matches
    pub fn normalize(&self, input: &str, year: i32) -> String {
        match self.identify(input, year) {
            Some(normalized) => normalized.canonical_code,
            None => {
                tracing::warn!(league = %self.league, input, year, "unresolved team identifier");
                input.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{NameAlias, TeamRecord};
    use crate::rules::DisambiguationRule;
    use crate::temporal::YearRange;

    fn normalizer() -> NameNormalizer {
        let registry = TeamRegistry::new(
            League::Mlb,
            vec![
                TeamRecord::new("nationals", "MON", "Montreal Expos", "MON", "mon", YearRange::between(1969, 2004)),
                TeamRecord::new("nationals", "WSN", "Washington Nationals", "WAS", "wsn", YearRange::since(2005)),
                TeamRecord::new("twins", "WSH", "Washington Senators", "WS1", "wsh", YearRange::between(1901, 1960)),
            ],
        );
        let rules = RuleEngine::from_rules(vec![
            DisambiguationRule::new("expos", &["Washington Nationals", "Nationals"], YearRange::between(1969, 2004), "MON"),
            DisambiguationRule::new("nationals", &["Washington Nationals", "Nationals"], YearRange::since(2005), "WSN"),
        ]);
        let aliases = AliasTable::build(&registry, &[NameAlias::new("Expos", "MON")]);
        NameNormalizer::new(&registry, rules, aliases)
    }

    #[test]
    fn test_canonical_code_is_returned_unchanged() {
        let n = normalizer();

        let hit = n.identify("WSH", 2010).unwrap();
        assert_eq!(hit.canonical_code, "WSH");
        assert_eq!(hit.source, MatchSource::CanonicalCode);
    }

    #[test]
    fn test_rule_beats_alias_table() {
        let n = normalizer();

        // The alias table alone would say WSN for the display name
        let hit = n.identify("Washington Nationals", 2003).unwrap();
        assert_eq!(hit.canonical_code, "MON");
        assert_eq!(
            hit.source,
            MatchSource::Rule {
                rule_id: "expos".to_string()
            }
        );
        assert_eq!(n.normalize("Washington Nationals", 2005), "WSN");
    }

    #[test]
    fn test_alias_lookup_ignores_case() {
        let n = normalizer();

        assert_eq!(n.identify("Expos", 1990).unwrap().source, MatchSource::Alias);
        assert_eq!(n.normalize("EXPOS", 1990), "MON");
        assert_eq!(n.normalize("montreal expos", 1990), "MON");
        assert_eq!(n.normalize("mon", 1990), "MON");
    }

    #[test]
    fn test_unknown_input_comes_back_untouched() {
        let n = normalizer();

        assert_eq!(n.normalize("Homestead Grays", 1940), "Homestead Grays");
        assert_eq!(n.normalize("  ", 1940), "  ");
        assert!(n.identify("Homestead Grays", 1940).is_none());
    }
}
