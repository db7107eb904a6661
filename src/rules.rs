// 🏷️ Disambiguation Rules - Rules as Data
// Franchise-specific knowledge a flat alias table cannot hold: the same name
// means different teams depending on the year ("Angels" in 1970 vs 2000).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::league::League;
use crate::temporal::YearRange;

// ============================================================================
// RULE DEFINITION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisambiguationRule {
    /// Rule ID for tracking
    pub id: String,

    /// Names this rule claims (compared case-insensitively)
    pub names: Vec<String>,

    /// Years the rule applies to
    pub years: YearRange,

    /// Canonical code to assign
    pub canonical_code: String,

    /// Description/notes about this rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DisambiguationRule {
    pub fn new(id: impl Into<String>, names: &[&str], years: YearRange, canonical_code: impl Into<String>) -> Self {
        DisambiguationRule {
            id: id.into(),
            names: names.iter().map(|n| n.to_string()).collect(),
            years,
            canonical_code: canonical_code.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn matches(&self, name: &str, year: i32) -> bool {
        if !self.years.contains(year) {
            return false;
        }
        let name = name.trim().to_lowercase();
        self.names.iter().any(|n| n.to_lowercase() == name)
    }
}

// ============================================================================
// RULE ENGINE
// ============================================================================

/// Ordered rule list. The first matching rule wins; order is the precedence.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    rules: Vec<DisambiguationRule>,
}

impl RuleEngine {
    /// Create a new empty rule engine
    pub fn new() -> Self {
        RuleEngine { rules: Vec::new() }
    }

    /// Create engine from a list of rules, keeping their order
    pub fn from_rules(rules: Vec<DisambiguationRule>) -> Self {
        RuleEngine { rules }
    }

    /// Append a rule with the lowest precedence
    pub fn add_rule(&mut self, rule: DisambiguationRule) {
        self.rules.push(rule);
    }

    /// Put `other`'s rules ahead of this engine's
    pub fn prepend(&mut self, other: RuleEngine) {
        let mut rules = other.rules;
        rules.append(&mut self.rules);
        self.rules = rules;
    }

    /// First rule claiming `name` in `year`
    pub fn evaluate(&self, name: &str, year: i32) -> Option<&DisambiguationRule> {
        let rule = self.rules.iter().find(|rule| rule.matches(name, year))?;
        tracing::debug!(rule = rule.id.as_str(), name, year, code = rule.canonical_code.as_str(), "disambiguation rule matched");
        Some(rule)
    }

    pub fn rules(&self) -> &[DisambiguationRule] {
        &self.rules
    }

    /// Get number of rules loaded
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

// ============================================================================
// RULE FILE
// ============================================================================

/// Site-local rules, one JSON array per league:
/// `{"mlb": [{"id": ..., "names": [...], "years": {...}, "canonical_code": ...}], "nba": []}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFile {
    #[serde(default)]
    pub mlb: Vec<DisambiguationRule>,

    #[serde(default)]
    pub nba: Vec<DisambiguationRule>,
}

impl RuleFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let file: RuleFile = serde_json::from_str(&content)?;
        tracing::debug!(mlb = file.mlb.len(), nba = file.nba.len(), "loaded disambiguation rules file");
        Ok(file)
    }

    pub fn engine(&self, league: League) -> RuleEngine {
        let rules = match league {
            League::Mlb => &self.mlb,
            League::Nba => &self.nba,
        };
        RuleEngine::from_rules(rules.clone())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn angels() -> RuleEngine {
        RuleEngine::from_rules(vec![
            DisambiguationRule::new("angels-california", &["Angels"], YearRange::between(1965, 1996), "CAL"),
            DisambiguationRule::new("angels-anaheim", &["Angels"], YearRange::between(1997, 2004), "ANA"),
            DisambiguationRule::new("angels-los-angeles", &["Angels"], YearRange::since(2005), "LAA"),
        ])
    }

    #[test]
    fn test_rule_matches_name_and_year() {
        let rule = DisambiguationRule::new("marlins-florida", &["Marlins", "Florida Marlins"], YearRange::between(1993, 2011), "FLA");

        assert!(rule.matches("Marlins", 2011));
        assert!(rule.matches("  florida marlins ", 1993));
        assert!(!rule.matches("Marlins", 2012));
        assert!(!rule.matches("Marlin", 2000));
    }

    #[test]
    fn test_engine_picks_rule_for_year() {
        let engine = angels();

        assert_eq!(engine.evaluate("Angels", 1970).unwrap().canonical_code, "CAL");
        assert_eq!(engine.evaluate("angels", 2002).unwrap().canonical_code, "ANA");
        assert_eq!(engine.evaluate("ANGELS", 2020).unwrap().canonical_code, "LAA");
        assert!(engine.evaluate("Angels", 1950).is_none());
    }

    #[test]
    fn test_first_rule_wins() {
        let mut engine = angels();
        engine.add_rule(DisambiguationRule::new("late", &["Angels"], YearRange::since(1900), "XXX"));

        assert_eq!(engine.evaluate("Angels", 2002).unwrap().id, "angels-anaheim");
        assert_eq!(engine.evaluate("Angels", 1950).unwrap().id, "late");
    }

    #[test]
    fn test_prepend_takes_precedence() {
        let mut engine = angels();
        engine.prepend(RuleEngine::from_rules(vec![DisambiguationRule::new(
            "local-fix",
            &["Angels"],
            YearRange::between(2002, 2002),
            "ANA",
        )
        .with_note("World Series season")]));

        assert_eq!(engine.rule_count(), 4);
        assert_eq!(engine.evaluate("Angels", 2002).unwrap().id, "local-fix");
        assert_eq!(engine.evaluate("Angels", 2003).unwrap().id, "angels-anaheim");
    }

    #[test]
    fn test_load_rule_file_per_league() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"mlb": [{{"id": "pilots", "names": ["Pilots"], "years": {{"start": 1969, "end": 1969}}, "canonical_code": "SEP"}}]}}"#
        )
        .unwrap();

        let rules = RuleFile::load(file.path()).unwrap();
        let mlb = rules.engine(League::Mlb);

        assert_eq!(mlb.rule_count(), 1);
        assert_eq!(mlb.evaluate("pilots", 1969).unwrap().canonical_code, "SEP");
        assert!(mlb.evaluate("pilots", 1970).is_none());
        assert_eq!(rules.engine(League::Nba).rule_count(), 0);
    }

    #[test]
    fn test_load_rules_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(RuleFile::load(file.path()).is_err());
    }
}
