use schema::StatKind;
use std::path::PathBuf;

/// Main error type for the battle simulator
#[derive(Debug, thiserror::Error)]
pub enum BattleEngineError {
    /// A creature record could not be turned into a battle-ready creature
    #[error("Creature data error: {0}")]
    CreatureData(#[from] CreatureDataError),
    /// A roster file could not be loaded
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),
    /// A configuration file could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// A level outside 1..=100 was supplied to the upstream validator
    #[error("Invalid level: {0} (expected 1-100)")]
    InvalidLevel(u16),
}

/// Errors raised while validating a creature record.
///
/// A record missing any stat is rejected outright; defaulting the missing
/// values to zero would silently bias the outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreatureDataError {
    #[error("creature record has an empty name")]
    EmptyName,
    #[error("{name} is missing stat fields: {}", format_fields(.fields))]
    MissingStats { name: String, fields: Vec<StatKind> },
    #[error("{name} declares no types")]
    NoTypes { name: String },
    #[error("{name} declares {count} types (at most 2 allowed)")]
    TooManyTypes { name: String, count: usize },
    #[error("{name} has an explicit moveset with no moves")]
    EmptyMoveset { name: String },
    #[error("{name} knows {count} moves (at most 4 allowed)")]
    TooManyMoves { name: String, count: usize },
    #[error("{name} knows unknown move '{move_name}'")]
    UnknownMove { name: String, move_name: String },
}

/// Errors related to loading a creature roster
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to read roster {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed RON roster: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("malformed JSON roster: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported roster format: {0}")]
    UnsupportedFormat(PathBuf),
    #[error("invalid roster entry: {0}")]
    InvalidCreature(#[from] CreatureDataError),
    #[error("duplicate roster entry: {0}")]
    DuplicateCreature(String),
}

/// Errors related to loading a battle configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("default_level must be within 1-100, got {0}")]
    DefaultLevel(u8),
    #[error("turn_cap must be at least 1")]
    ZeroTurnCap,
    #[error("turn_cap must be at most {max}, got {got}")]
    TurnCapTooLarge { got: u32, max: u32 },
}

fn format_fields(fields: &[StatKind]) -> String {
    fields
        .iter()
        .map(|field| field.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Type alias for Results using BattleEngineError
pub type EngineResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using CreatureDataError
pub type CreatureDataResult<T> = Result<T, CreatureDataError>;
