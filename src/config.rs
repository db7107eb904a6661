use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LineageError, Result};
use crate::league::League;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "TEAM_LINEAGE_CONFIG";

/// Config file picked up from the working directory when nothing else is given
pub const DEFAULT_CONFIG_FILE: &str = "team-lineage.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Image shown whenever no logo resolves
    pub placeholder_logo: String,

    /// Base URL logo files are served from
    pub logo_cdn: String,

    pub reference_sites: ReferenceSites,

    pub validation: ValidationConfig,

    /// Extra disambiguation rules (JSON), evaluated before the built-in ones
    pub rules_file: Option<PathBuf>,

    /// SQLite file holding game records
    pub database: Option<PathBuf>,

    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceSites {
    pub mlb: String,
    pub nba: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Seasons swept by default; empty means derive them from the registry
    pub mlb_sample_years: Vec<i32>,
    pub nba_sample_years: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            placeholder_logo: "https://cdn.team-lineage.dev/logos/placeholder.svg".to_string(),
            logo_cdn: "https://cdn.team-lineage.dev/logos".to_string(),
            reference_sites: ReferenceSites::default(),
            validation: ValidationConfig::default(),
            rules_file: None,
            database: None,
            server: ServerConfig::default(),
        }
    }
}

impl Default for ReferenceSites {
    fn default() -> Self {
        ReferenceSites {
            mlb: League::Mlb.default_reference_site().to_string(),
            nba: League::Nba.default_reference_site().to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: "0.0.0.0:3000".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LineageError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Explicit path, then `TEAM_LINEAGE_CONFIG`, then `team-lineage.toml`, then defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Ok(path) = env::var(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::load(local);
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Config::default())
    }

    pub fn reference_site(&self, league: League) -> &str {
        match league {
            League::Mlb => &self.reference_sites.mlb,
            League::Nba => &self.reference_sites.nba,
        }
    }

    pub fn sample_years(&self, league: League) -> &[i32] {
        match league {
            League::Mlb => &self.validation.mlb_sample_years,
            League::Nba => &self.validation.nba_sample_years,
        }
    }

    fn check(&self) -> Result<()> {
        for league in League::ALL {
            let site = self.reference_site(league);
            if !site.starts_with("http://") && !site.starts_with("https://") {
                return Err(LineageError::Config(format!(
                    "reference site for {} must be an http(s) URL, got '{}'",
                    league, site
                )));
            }
        }
        if self.placeholder_logo.trim().is_empty() {
            return Err(LineageError::Config("placeholder_logo must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.reference_site(League::Mlb), "https://www.baseball-reference.com");
        assert_eq!(config.reference_site(League::Nba), "https://www.basketball-reference.com");
        assert!(config.sample_years(League::Mlb).is_empty());
        assert!(config.rules_file.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            placeholder_logo = "https://img.example/none.png"

            [validation]
            mlb_sample_years = [1961, 2005, 2012]
            "#,
        )
        .unwrap();

        assert_eq!(config.placeholder_logo, "https://img.example/none.png");
        assert_eq!(config.sample_years(League::Mlb), &[1961, 2005, 2012]);
        assert!(config.sample_years(League::Nba).is_empty());
        assert_eq!(config.logo_cdn, Config::default().logo_cdn);
        assert_eq!(config.server.addr, "0.0.0.0:3000");
    }

    #[test]
    fn test_rejects_non_http_reference_site() {
        let err = Config::from_toml_str(
            r#"
            [reference_sites]
            mlb = "ftp://example.com"
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("mlb"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "logo_cdn = \"https://logos.example\"").unwrap();
        writeln!(file, "database = \"games.db\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.logo_cdn, "https://logos.example");
        assert_eq!(config.database, Some(PathBuf::from("games.db")));
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let err = Config::discover(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, LineageError::Config(_)));
    }
}
