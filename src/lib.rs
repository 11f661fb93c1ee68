//! Pokemon Battle Simulator
//!
//! A deterministic single-creature battle engine: stat scaling by level,
//! speed-based turn order, a scriptable move-selection AI, accuracy and
//! critical rolls, type effectiveness and same-type bonus. All randomness
//! comes from an injected `BattleRng`, so every battle can be replayed.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod creature;
pub mod errors;
pub mod move_data;
pub mod movesets;
pub mod roster;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    BaseStats, CreatureType, MoveCategory, MoveId, PokemonType, StatKind, StatusEffect,
};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::ai::{MoveSelector, OpeningAggression};
pub use battle::engine::{run_battle, BattleEngine, BattleResult, FinalHp};
pub use battle::predictor::{predict_simple_outcome, SimpleOutcome};
pub use battle::rng::{BattleRng, SeededRng, TurnRng};
pub use battle::state::{BattleEvent, BattleOutcome, BattlePhase, BattleState, Side};
pub use battle::stats::{scale_stats, validate_level, EffectiveStats};

// Data and configuration.
pub use config::{BattleConfig, StatusMode};
pub use creature::{Creature, CreatureRecord, StatRecord};
pub use move_data::{MoveCatalog, MoveData};
pub use movesets::resolve_moveset;
pub use roster::{CreatureSource, Roster};

// Crate-specific error and result types.
pub use errors::{
    BattleEngineError, ConfigError, CreatureDataError, CreatureDataResult, EngineResult,
    RosterError,
};
