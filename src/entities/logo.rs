// 🖼️ Logo Entries - year-keyed asset URLs
//
// Logo redesigns do not line up with franchise identity changes, so one team
// incarnation can span several entries here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::temporal::YearRange;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoEntry {
    pub logo_asset_code: String,
    pub years: YearRange,
    pub url: String,
}

impl LogoEntry {
    pub fn new(logo_asset_code: impl Into<String>, years: YearRange, url: impl Into<String>) -> Self {
        LogoEntry {
            logo_asset_code: logo_asset_code.into(),
            years,
            url: url.into(),
        }
    }
}

/// Logo entries grouped by asset code, in registration order
#[derive(Debug, Clone, Default)]
pub struct LogoTable {
    entries: BTreeMap<String, Vec<LogoEntry>>,
}

impl LogoTable {
    pub fn new(entries: Vec<LogoEntry>) -> Self {
        let mut table = LogoTable::default();
        for entry in entries {
            table
                .entries
                .entry(entry.logo_asset_code.clone())
                .or_default()
                .push(entry);
        }
        table
    }

    pub fn entries_for(&self, logo_asset_code: &str) -> &[LogoEntry] {
        self.entries
            .get(logo_asset_code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_grouped_by_code() {
        let table = LogoTable::new(vec![
            LogoEntry::new("nyy", YearRange::between(1913, 1946), "https://cdn/nyy_1913.svg"),
            LogoEntry::new("mia", YearRange::since(2012), "https://cdn/mia_2012.svg"),
            LogoEntry::new("nyy", YearRange::since(1947), "https://cdn/nyy_1947.svg"),
        ]);

        assert_eq!(table.entries_for("nyy").len(), 2);
        assert_eq!(table.entries_for("mia").len(), 1);
        assert!(table.entries_for("fla").is_empty());
        assert_eq!(table.len(), 3);
        assert_eq!(table.codes().collect::<Vec<_>>(), vec!["mia", "nyy"]);
    }
}
