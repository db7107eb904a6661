// 🖼️ Year-Keyed Asset Resolver - logo code + year → logo URL
//
// Independent of the code resolver: a team can change logos without changing
// any code. No match and multiple matches are both "not found"; callers
// always have the placeholder to fall back on.

use crate::entities::{LogoEntry, LogoTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoLookup<'a> {
    Found(&'a LogoEntry),
    Missing,
    /// More than one range covers the year (data error)
    Ambiguous(Vec<&'a LogoEntry>),
}

pub struct LogoResolver<'a> {
    table: &'a LogoTable,
    placeholder: &'a str,
}

impl<'a> LogoResolver<'a> {
    pub fn new(table: &'a LogoTable, placeholder: &'a str) -> Self {
        LogoResolver { table, placeholder }
    }

    pub fn find(&self, logo_asset_code: &str, year: i32) -> LogoLookup<'a> {
        let mut matches: Vec<&'a LogoEntry> = self
            .table
            .entries_for(logo_asset_code)
            .iter()
            .filter(|entry| entry.years.contains(year))
            .collect();

        match matches.len() {
            0 => LogoLookup::Missing,
            1 => LogoLookup::Found(matches.remove(0)),
            _ => LogoLookup::Ambiguous(matches),
        }
    }

    /// The single entry covering `year`, if exactly one does
    pub fn resolve(&self, logo_asset_code: &str, year: i32) -> Option<&'a LogoEntry> {
        match self.find(logo_asset_code, year) {
            LogoLookup::Found(entry) => Some(entry),
            LogoLookup::Missing => None,
            LogoLookup::Ambiguous(entries) => {
                tracing::warn!(logo_asset_code, year, candidates = entries.len(), "overlapping logo ranges, refusing to guess");
                None
            }
        }
    }

    pub fn url_or_placeholder(&self, logo_asset_code: &str, year: i32) -> String {
        self.resolve(logo_asset_code, year)
            .map(|entry| entry.url.clone())
            .unwrap_or_else(|| self.placeholder.to_string())
    }

    pub fn placeholder(&self) -> &str {
        self.placeholder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temporal::YearRange;

    const PLACEHOLDER: &str = "https://cdn.example/placeholder.svg";

    fn table() -> LogoTable {
        LogoTable::new(vec![
            LogoEntry::new("nyy", YearRange::between(1913, 1946), "https://cdn.example/nyy_1913.svg"),
            LogoEntry::new("nyy", YearRange::since(1947), "https://cdn.example/nyy_1947.svg"),
            LogoEntry::new("bad", YearRange::between(2000, 2010), "https://cdn.example/bad_a.svg"),
            LogoEntry::new("bad", YearRange::since(2005), "https://cdn.example/bad_b.svg"),
        ])
    }

    #[test]
    fn test_closed_and_open_ranges() {
        let table = table();
        let logos = LogoResolver::new(&table, PLACEHOLDER);

        assert_eq!(logos.resolve("nyy", 1946).unwrap().url, "https://cdn.example/nyy_1913.svg");
        assert_eq!(logos.resolve("nyy", 1947).unwrap().url, "https://cdn.example/nyy_1947.svg");
        assert_eq!(logos.resolve("nyy", 2024).unwrap().url, "https://cdn.example/nyy_1947.svg");
    }

    #[test]
    fn test_missing_falls_back_to_placeholder() {
        let table = table();
        let logos = LogoResolver::new(&table, PLACEHOLDER);

        assert_eq!(logos.find("nyy", 1912), LogoLookup::Missing);
        assert_eq!(logos.url_or_placeholder("nyy", 1912), PLACEHOLDER);
        assert_eq!(logos.url_or_placeholder("zzz", 2000), PLACEHOLDER);
    }

    #[test]
    fn test_overlapping_ranges_are_not_guessed() {
        let table = table();
        let logos = LogoResolver::new(&table, PLACEHOLDER);

        assert!(matches!(logos.find("bad", 2007), LogoLookup::Ambiguous(ref e) if e.len() == 2));
        assert!(logos.resolve("bad", 2007).is_none());
        assert_eq!(logos.url_or_placeholder("bad", 2007), PLACEHOLDER);
        assert_eq!(logos.url_or_placeholder("bad", 2002), "https://cdn.example/bad_a.svg");
    }
}
