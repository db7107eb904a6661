// 🗄️ Game Store - SQLite stand-in for the hosted game tables
//
// Two tables, one per league, with each league's own column names. Rows are
// turned into GameRecord on the way out; a row whose date does not parse is
// skipped with a warning rather than failing the whole load.

use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::path::Path;

use crate::error::Result;
use crate::games::{GameRecord, MlbGame, NbaGame};
use crate::league::League;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct GameStore {
    conn: Connection,
}

impl GameStore {
    /// Open (or create) a store file and make sure both tables exist
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        setup_database(&conn)?;
        Ok(GameStore { conn })
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        setup_database(&conn)?;
        Ok(GameStore { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn insert_game(&self, game: &GameRecord) -> Result<()> {
        insert_game(&self.conn, game)
    }

    /// Insert many games in one transaction; returns how many were written
    pub fn insert_games(&mut self, games: &[GameRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        for game in games {
            insert_game(&tx, game)?;
        }
        tx.commit()?;
        Ok(games.len())
    }

    pub fn load_games(&self, league: League) -> Result<Vec<GameRecord>> {
        load_games(&self.conn, league)
    }

    /// Every game in both tables, oldest first
    pub fn load_all_games(&self) -> Result<Vec<GameRecord>> {
        let mut games = Vec::new();
        for league in League::ALL {
            games.extend(load_games(&self.conn, league)?);
        }
        games.sort_by(|a, b| a.date().cmp(&b.date()).then_with(|| a.id().cmp(b.id())));
        Ok(games)
    }

    pub fn count(&self, league: League) -> Result<i64> {
        let sql = match league {
            League::Mlb => "SELECT COUNT(*) FROM mlb_games",
            League::Nba => "SELECT COUNT(*) FROM nba_games",
        };
        let count: i64 = self.conn.query_row(sql, [], |row| row.get(0))?;
        Ok(count)
    }
}

pub fn setup_database(conn: &Connection) -> Result<()> {
    // ==========================================================================
    // MLB games (stats-source column names)
    // ==========================================================================
    conn.execute(
        "CREATE TABLE IF NOT EXISTS mlb_games (
            id TEXT PRIMARY KEY,
            game_date TEXT NOT NULL,
            home_team TEXT NOT NULL,
            away_team TEXT NOT NULL,
            home_score INTEGER,
            away_score INTEGER,
            venue TEXT,
            game_number INTEGER,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    // ==========================================================================
    // NBA games
    // ==========================================================================
    conn.execute(
        "CREATE TABLE IF NOT EXISTS nba_games (
            id TEXT PRIMARY KEY,
            date TEXT NOT NULL,
            home TEXT NOT NULL,
            visitor TEXT NOT NULL,
            home_points INTEGER,
            visitor_points INTEGER,
            arena TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )?;

    conn.execute("CREATE INDEX IF NOT EXISTS idx_mlb_games_date ON mlb_games(game_date)", [])?;
    conn.execute("CREATE INDEX IF NOT EXISTS idx_nba_games_date ON nba_games(date)", [])?;

    Ok(())
}

/// Insert or replace by id, so re-importing a file is idempotent
pub fn insert_game(conn: &Connection, game: &GameRecord) -> Result<()> {
    match game {
        GameRecord::Mlb(g) => {
            conn.execute(
                "INSERT OR REPLACE INTO mlb_games
                    (id, game_date, home_team, away_team, home_score, away_score, venue, game_number)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    g.id,
                    g.game_date.format(DATE_FORMAT).to_string(),
                    g.home_team,
                    g.away_team,
                    g.home_score,
                    g.away_score,
                    g.venue,
                    g.game_number,
                ],
            )?;
        }
        GameRecord::Nba(g) => {
            conn.execute(
                "INSERT OR REPLACE INTO nba_games
                    (id, date, home, visitor, home_points, visitor_points, arena)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    g.id,
                    g.date.format(DATE_FORMAT).to_string(),
                    g.home,
                    g.visitor,
                    g.home_points,
                    g.visitor_points,
                    g.arena,
                ],
            )?;
        }
    }
    Ok(())
}

/// Raw row shared by both tables, before the date is trusted
struct GameRow {
    id: String,
    date: String,
    home: String,
    away: String,
    home_score: Option<u32>,
    away_score: Option<u32>,
    venue: Option<String>,
    game_number: Option<u8>,
}

pub fn load_games(conn: &Connection, league: League) -> Result<Vec<GameRecord>> {
    let sql = match league {
        League::Mlb => {
            "SELECT id, game_date, home_team, away_team, home_score, away_score, venue, game_number
             FROM mlb_games
             ORDER BY game_date, id"
        }
        League::Nba => {
            "SELECT id, date, home, visitor, home_points, visitor_points, arena, NULL
             FROM nba_games
             ORDER BY date, id"
        }
    };

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(GameRow {
                id: row.get(0)?,
                date: row.get(1)?,
                home: row.get(2)?,
                away: row.get(3)?,
                home_score: row.get(4)?,
                away_score: row.get(5)?,
                venue: row.get(6)?,
                game_number: row.get(7)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut games = Vec::with_capacity(rows.len());
    for row in rows {
        let date = match NaiveDate::parse_from_str(row.date.trim(), DATE_FORMAT) {
            Ok(date) => date,
            Err(_) => {
                tracing::warn!(league = %league, id = row.id.as_str(), date = row.date.as_str(), "skipping game with malformed date");
                continue;
            }
        };

        games.push(match league {
            League::Mlb => GameRecord::Mlb(MlbGame {
                id: row.id,
                game_date: date,
                home_team: row.home,
                away_team: row.away,
                home_score: row.home_score,
                away_score: row.away_score,
                venue: row.venue,
                game_number: row.game_number,
            }),
            League::Nba => GameRecord::Nba(NbaGame {
                id: row.id,
                date,
                home: row.home,
                visitor: row.away,
                home_points: row.home_score,
                visitor_points: row.away_score,
                arena: row.venue,
            }),
        });
    }

    Ok(games)
}

/// Read a league's game export. Columns follow that league's table; rows that
/// fail to parse are skipped with a warning.
pub fn load_games_csv(csv_path: &Path, league: League) -> Result<Vec<GameRecord>> {
    let mut rdr = csv::Reader::from_path(csv_path)?;
    let rows: Vec<csv::Result<GameRecord>> = match league {
        League::Mlb => rdr.deserialize().map(|r| r.map(GameRecord::Mlb)).collect(),
        League::Nba => rdr.deserialize().map(|r| r.map(GameRecord::Nba)).collect(),
    };

    let mut games = Vec::new();
    for (index, result) in rows.into_iter().enumerate() {
        match result {
            Ok(game) => games.push(game),
            Err(e) => {
                // Header is line 1
                tracing::warn!(league = %league, line = index + 2, error = %e, "skipping unreadable game row");
            }
        }
    }

    Ok(games)
}
