// Battle Simulator Schema - Shared type definitions
// This crate contains the core enums and plain data records shared by the
// battle engine, its roster loader and the command-line front end.

// Re-export the main types
pub use move_types::*;
pub use pokemon_types::*;
pub use stats::*;

pub mod move_types;
pub mod pokemon_types;
pub mod stats;
