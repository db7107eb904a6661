// 🔤 Name Aliases - free text → canonical code
//
// "Florida Marlins", "Fish"... many strings, one code. Aliases that mean
// different teams in different years do not belong here: those are
// disambiguation rules, checked before this table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::team::TeamRegistry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameAlias {
    pub alias: String,
    pub canonical_code: String,
}

impl NameAlias {
    pub fn new(alias: impl Into<String>, canonical_code: impl Into<String>) -> Self {
        NameAlias {
            alias: alias.into(),
            canonical_code: canonical_code.into(),
        }
    }
}

/// How an alias lookup matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasMatch {
    Exact,
    CaseInsensitive,
}

/// Flat alias index with a case-sensitive pass and a case-folded fallback.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    exact: HashMap<String, String>,
    folded: HashMap<String, String>,
}

fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index explicit aliases, then every display name in the registry, then the
    /// canonical codes themselves (case-folded only, so "fla" finds "FLA").
    pub fn build(registry: &TeamRegistry, aliases: &[NameAlias]) -> Self {
        let mut table = AliasTable::new();

        for alias in aliases {
            table.insert(&alias.alias, &alias.canonical_code);
        }

        for record in registry.records() {
            table.insert(&record.display_name, &record.canonical_code);
        }

        for record in registry.records() {
            table
                .folded
                .entry(fold(&record.canonical_code))
                .or_insert_with(|| record.canonical_code.clone());
        }

        table
    }

    /// Register an alias. The first registration of a string wins; a later one pointing
    /// elsewhere is dropped and returns false.
    pub fn insert(&mut self, alias: &str, canonical_code: &str) -> bool {
        let key = alias.trim();
        if key.is_empty() {
            return false;
        }

        if let Some(existing) = self.exact.get(key) {
            if existing != canonical_code {
                tracing::debug!(
                    alias = key,
                    kept = existing.as_str(),
                    dropped = canonical_code,
                    "alias already registered, keeping first"
                );
            }
            return existing == canonical_code;
        }

        self.exact.insert(key.to_string(), canonical_code.to_string());
        self.folded
            .entry(fold(key))
            .or_insert_with(|| canonical_code.to_string());
        true
    }

    pub fn lookup(&self, name: &str) -> Option<(&str, AliasMatch)> {
        if let Some(code) = self.exact.get(name.trim()) {
            return Some((code.as_str(), AliasMatch::Exact));
        }

        self.folded
            .get(&fold(name))
            .map(|code| (code.as_str(), AliasMatch::CaseInsensitive))
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::team::TeamRecord;
    use crate::league::League;
    use crate::temporal::YearRange;

    fn registry() -> TeamRegistry {
        TeamRegistry::new(
            League::Mlb,
            vec![
                TeamRecord::new("yankees", "NYY", "New York Yankees", "NYA", "nyy", YearRange::since(1913)),
                TeamRecord::new("mets", "NYM", "New York Mets", "NYN", "nym", YearRange::since(1962)),
            ],
        )
    }

    #[test]
    fn test_exact_then_case_insensitive() {
        let table = AliasTable::build(&registry(), &[NameAlias::new("Yankees", "NYY")]);

        assert_eq!(table.lookup("Yankees"), Some(("NYY", AliasMatch::Exact)));
        assert_eq!(table.lookup("YANKEES"), Some(("NYY", AliasMatch::CaseInsensitive)));
        assert_eq!(table.lookup("new york mets"), Some(("NYM", AliasMatch::CaseInsensitive)));
        assert_eq!(table.lookup("Red Sox"), None);
    }

    #[test]
    fn test_codes_are_folded_aliases() {
        let table = AliasTable::build(&registry(), &[]);
        assert_eq!(table.lookup("nym"), Some(("NYM", AliasMatch::CaseInsensitive)));
    }

    #[test]
    fn test_first_registration_wins() {
        let mut table = AliasTable::new();

        assert!(table.insert("Senators", "WSH"));
        assert!(!table.insert("Senators", "WSA"));
        assert!(table.insert("Senators", "WSH"));
        assert!(!table.insert("   ", "WSH"));

        assert_eq!(table.lookup("Senators"), Some(("WSH", AliasMatch::Exact)));
        assert_eq!(table.len(), 1);
    }
}
