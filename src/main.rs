use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};

use team_lineage::logging::init_logging;
use team_lineage::temporal::{MAX_YEAR, MIN_YEAR};
use team_lineage::{
    build_entries, load_diary, load_games_csv, Catalog, Config, DiaryStats, GameNumber, GameRecord, GameStore,
    League, MappingValidator, Severity, ValidationReport, When,
};

#[derive(Parser)]
#[command(name = "team-lineage")]
#[command(about = "Historical team names, reference-site codes and logos by season")]
#[command(version)]
struct Cli {
    /// Config file (default: $TEAM_LINEAGE_CONFIG, then ./team-lineage.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a team name or code as of a date
    Resolve {
        league: League,
        team: String,
        /// YYYY-MM-DD, a timestamp, or a bare season year (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Print the full view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build the boxscore URL for a home team's game
    Boxscore {
        league: League,
        home_team: String,
        date: String,
        /// 0 for a single game, 1 or 2 for a doubleheader
        #[arg(long, default_value_t = 0)]
        game: u8,
    },
    /// Sweep the registry and report missing or broken mappings
    Validate {
        /// One league; both when omitted
        league: Option<League>,
        #[arg(long, conflicts_with_all = ["from", "to"], value_parser = season_year)]
        year: Option<i32>,
        #[arg(long, requires = "to", value_parser = season_year)]
        from: Option<i32>,
        #[arg(long, requires = "from", value_parser = season_year)]
        to: Option<i32>,
        /// Write issues as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Write the full report as JSON
        #[arg(long)]
        json: Option<PathBuf>,
        /// Exit non-zero when any error is reported
        #[arg(long)]
        strict: bool,
    },
    /// List logo URLs to prefetch
    Preload {
        league: Option<League>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// Import a league's game CSV into the games database
    Import {
        league: League,
        csv: PathBuf,
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// List stored games with resolved team names
    Games {
        league: Option<League>,
        #[arg(long)]
        db: Option<PathBuf>,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Diary statistics from a JSON diary file
    Stats {
        diary: PathBuf,
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let config = Config::discover(cli.config.as_deref()).context("Failed to load configuration")?;
    let catalog = Catalog::from_config(&config).context("Failed to build team catalog")?;

    match cli.command {
        Commands::Resolve { league, team, date, json } => run_resolve(&catalog, league, &team, date.as_deref(), json),
        Commands::Boxscore {
            league,
            home_team,
            date,
            game,
        } => run_boxscore(&catalog, league, &home_team, &date, game),
        Commands::Validate {
            league,
            year,
            from,
            to,
            csv,
            json,
            strict,
        } => run_validate(&catalog, league, year, from.zip(to), csv.as_deref(), json.as_deref(), strict),
        Commands::Preload { league, year } => run_preload(&catalog, league, year),
        Commands::Import { league, csv, db } => run_import(&config, league, &csv, db),
        Commands::Games { league, db, limit } => run_games(&config, &catalog, league, db, limit),
        Commands::Stats { diary, db } => run_stats(&config, &catalog, &diary, db),
    }
}

fn season_year(value: &str) -> std::result::Result<i32, String> {
    let year: i32 = value.parse().map_err(|_| format!("'{}' is not a year", value))?;
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(format!("years must be between {} and {}", MIN_YEAR, MAX_YEAR))
    }
}

fn leagues(league: Option<League>) -> Vec<League> {
    league.map_or_else(|| League::ALL.to_vec(), |l| vec![l])
}

fn open_store(config: &Config, db: Option<PathBuf>) -> Result<GameStore> {
    let path = match db.or_else(|| config.database.clone()) {
        Some(path) => path,
        None => bail!("No games database given: pass --db or set `database` in the config file"),
    };
    GameStore::open(&path).with_context(|| format!("Failed to open games database {}", path.display()))
}

fn run_resolve(catalog: &Catalog, league: League, team: &str, date: Option<&str>, json: bool) -> Result<()> {
    let view = catalog.league(league).team_view(team, When::from_option(date));

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let mark = if view.is_resolved() { "✓" } else { "⚠️ " };
    println!("{} {} ({} {})", mark, view.display_name, league, view.season);
    println!("   Canonical code: {}", view.canonical_code);
    println!("   Reference code: {}", view.reference_site_code);
    println!("   Logo:           {}", view.logo_url);
    if let Some(franchise) = &view.franchise {
        println!("   Franchise:      {}", franchise);
    }
    Ok(())
}

fn run_boxscore(catalog: &Catalog, league: League, home_team: &str, date: &str, game: u8) -> Result<()> {
    let game = match GameNumber::from_digit(game) {
        Some(game) => game,
        None => bail!("Game number must be 0, 1 or 2 (got {})", game),
    };
    let date = When::parse(date).date(league);

    println!("{}", catalog.league(league).boxscore_url(home_team, date, game));
    Ok(())
}

fn run_validate(
    catalog: &Catalog,
    league: Option<League>,
    year: Option<i32>,
    range: Option<(i32, i32)>,
    csv: Option<&Path>,
    json: Option<&Path>,
    strict: bool,
) -> Result<()> {
    let mut reports: Vec<ValidationReport> = Vec::new();

    for league in leagues(league) {
        let validator = MappingValidator::new(catalog.league(league));
        let report = match (year, range) {
            (Some(year), _) => validator.validate_year(year),
            (None, Some((from, to))) => validator.validate_range(from, to),
            (None, None) => validator.validate_sampled(),
        };
        print_report(&report);
        reports.push(report);
    }

    if let Some(path) = csv {
        let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        ValidationReport::write_csv_all(&reports, file)?;
        println!("\n📄 Issues written to {}", path.display());
    }

    if let Some(path) = json {
        let body = serde_json::to_string_pretty(&reports)?;
        std::fs::write(path, body).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("📄 Report written to {}", path.display());
    }

    if strict && reports.iter().any(ValidationReport::has_errors) {
        bail!("Validation reported errors");
    }
    Ok(())
}

fn print_report(report: &ValidationReport) {
    println!("\n🔍 {} mapping validation", report.league.full_name());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{}", report.summary());
    println!("Registry digest: {}", &report.registry_digest[..12.min(report.registry_digest.len())]);

    for (year, teams) in report.grouped() {
        println!("\n{}", year);
        for (code, issues) in teams {
            for issue in issues {
                let badge = match issue.kind {
                    Severity::Error => "❌",
                    Severity::Warning => "⚠️ ",
                };
                println!("  {} {:<4} {:<32} {}", badge, code, issue.team_name, issue.message);
            }
        }
    }

    if report.issues.is_empty() {
        println!("✅ No issues");
    }
}

fn run_preload(catalog: &Catalog, league: Option<League>, year: Option<i32>) -> Result<()> {
    for league in leagues(league) {
        for url in catalog.league(league).preload_manifest(year) {
            println!("{}", url);
        }
    }
    Ok(())
}

fn run_import(config: &Config, league: League, csv: &Path, db: Option<PathBuf>) -> Result<()> {
    println!("🗄️  Importing {} games from {}", league, csv.display());

    let games = load_games_csv(csv, league).with_context(|| format!("Failed to read {}", csv.display()))?;
    println!("✓ Loaded {} games from CSV", games.len());

    let mut store = open_store(config, db)?;
    let inserted = store.insert_games(&games)?;
    let total = store.count(league)?;

    println!("✓ Wrote {} games ({} {} games stored)", inserted, total, league);
    Ok(())
}

fn run_games(config: &Config, catalog: &Catalog, league: Option<League>, db: Option<PathBuf>, limit: usize) -> Result<()> {
    let store = open_store(config, db)?;
    let games: Vec<GameRecord> = match league {
        Some(league) => store.load_games(league)?,
        None => store.load_all_games()?,
    };

    println!("📅 {} games (showing {})", games.len(), limit.min(games.len()));
    for game in games.iter().rev().take(limit) {
        let resolved = catalog.resolve_game(game);
        println!("  {} [{}] {}", resolved.date, resolved.league, resolved.headline());
        println!("      {}", resolved.boxscore_url);
    }
    Ok(())
}

fn run_stats(config: &Config, catalog: &Catalog, diary: &Path, db: Option<PathBuf>) -> Result<()> {
    let records = load_diary(diary).with_context(|| format!("Failed to read diary {}", diary.display()))?;
    let store = open_store(config, db)?;
    let games = store.load_all_games()?;

    let entries = build_entries(catalog, &games, &records);
    let stats = DiaryStats::compute(catalog, &entries);

    println!("📓 Diary: {} games ({} attended, {} watched)", stats.games, stats.attended, stats.watched);
    match stats.win_pct() {
        Some(pct) => println!("🏆 Record: {} ({:.1}%), {} undecided", stats.record(), pct * 100.0, stats.undecided),
        None => println!("🏆 Record: no decided games"),
    }

    println!("\nMost seen:");
    for team in stats.franchises.iter().take(5) {
        println!("  {:>3}  {} ({})", team.games, team.display_name, team.league);
    }

    println!("\nVenues:");
    for venue in stats.venues.iter().take(5) {
        println!("  {:>3}  {}", venue.games, venue.venue);
    }
    Ok(())
}
