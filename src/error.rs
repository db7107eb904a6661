use thiserror::Error;

/// Errors from the edges of the library: configuration, files and the game store.
///
/// Name, code and logo resolution never produce these. They degrade to fallback values instead.
#[derive(Error, Debug)]
pub enum LineageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown league: {0}")]
    UnknownLeague(String),

    #[error("Invalid game row: {0}")]
    InvalidGame(String),
}

pub type Result<T> = std::result::Result<T, LineageError>;
