// Team Lineage - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod catalog;
pub mod config;
pub mod db;
pub mod diary;
pub mod entities;
pub mod error;
pub mod games;
pub mod league;
pub mod logging;
pub mod logos;
pub mod normalize;
pub mod resolver;
pub mod rules;
pub mod tables;
pub mod temporal;
pub mod validator;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use catalog::{Catalog, LeagueCatalog, TeamView};
pub use config::Config;
pub use db::{load_games_csv, setup_database, GameStore};
pub use diary::{build_entries, load_diary, DiaryEntry, DiaryRecord, DiaryStats, Outcome};
pub use entities::{AliasTable, LogoEntry, LogoTable, NameAlias, TeamRecord, TeamRegistry};
pub use error::{LineageError, Result};
pub use games::{GameRecord, MlbGame, NbaGame, ResolvedGame, Side};
pub use league::League;
pub use logos::{LogoLookup, LogoResolver};
pub use normalize::{MatchSource, NameNormalizer, Normalized};
pub use resolver::{boxscore_url, CodeOverride, CodeResolver, GameNumber, OverrideTable};
pub use rules::{DisambiguationRule, RuleEngine, RuleFile};
pub use temporal::{When, YearRange};
pub use validator::{
    IssueCheck, MappingValidator, ReportSummary, Severity, ValidationIssue, ValidationReport, YearSummary,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
