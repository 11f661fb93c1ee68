use crate::errors::{BattleEngineError, EngineResult};
use schema::{BaseStats, MoveCategory, StatusEffect};
use serde::{Deserialize, Serialize};

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 100;

/// Fixed individual-value contribution applied to every stat.
const IV: u32 = 31;

/// Per-battle stats derived from base stats and level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

impl EffectiveStats {
    /// Attacking stat used by a move of this category, or `None` for status
    /// moves.
    pub fn offense_for(&self, category: MoveCategory) -> Option<u16> {
        match category {
            MoveCategory::Physical => Some(self.attack),
            MoveCategory::Special => Some(self.special_attack),
            MoveCategory::Status => None,
        }
    }

    pub fn defense_for(&self, category: MoveCategory) -> Option<u16> {
        match category {
            MoveCategory::Physical => Some(self.defense),
            MoveCategory::Special => Some(self.special_defense),
            MoveCategory::Status => None,
        }
    }
}

fn scale_hp(base: u16, level: u32) -> u16 {
    let value = (2 * u32::from(base) + IV) * level / 100 + level + 10;
    value.min(u32::from(u16::MAX)) as u16
}

fn scale_other(base: u16, level: u32) -> u16 {
    let value = (2 * u32::from(base) + IV) * level / 100 + 5;
    value.min(u32::from(u16::MAX)) as u16
}

/// Scale base stats to a level. Integer truncation throughout.
///
/// Every non-HP stat is at least 5, so a defense stat is never zero.
pub fn scale_stats(base: &BaseStats, level: u8) -> EffectiveStats {
    let level = u32::from(level);
    EffectiveStats {
        hp: scale_hp(base.hp, level),
        attack: scale_other(base.attack, level),
        defense: scale_other(base.defense, level),
        special_attack: scale_other(base.special_attack, level),
        special_defense: scale_other(base.special_defense, level),
        speed: scale_other(base.speed, level),
    }
}

/// Upstream level check for callers that want to reject bad input.
pub fn validate_level(level: u16) -> EngineResult<u8> {
    if (u16::from(MIN_LEVEL)..=u16::from(MAX_LEVEL)).contains(&level) {
        Ok(level as u8)
    } else {
        Err(BattleEngineError::InvalidLevel(level))
    }
}

/// The engine never fails on a level: out-of-range values are clamped.
pub fn clamp_level(level: u8) -> u8 {
    let clamped = level.clamp(MIN_LEVEL, MAX_LEVEL);
    if clamped != level {
        tracing::warn!(level, clamped, "level out of range, clamping");
    }
    clamped
}

/// Calculate effective speed including the status speed multiplier
pub fn effective_speed(stats: &EffectiveStats, status: Option<StatusEffect>) -> f64 {
    let multiplier = status.map_or(1.0, |effect| effect.speed_multiplier());
    f64::from(stats.speed) * multiplier
}
