use schema::BaseStats;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimpleOutcome {
    AWins,
    BWins,
    Draw,
}

impl fmt::Display for SimpleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimpleOutcome::AWins => write!(f, "Creature A wins"),
            SimpleOutcome::BWins => write!(f, "Creature B wins"),
            SimpleOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Stat-total comparison for when only raw stat arrays are available.
pub fn predict_simple_outcome(a: &BaseStats, b: &BaseStats) -> SimpleOutcome {
    match a.total().cmp(&b.total()) {
        Ordering::Greater => SimpleOutcome::AWins,
        Ordering::Less => SimpleOutcome::BWins,
        Ordering::Equal => SimpleOutcome::Draw,
    }
}
