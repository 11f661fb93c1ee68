use crate::battle::rng::BattleRng;
use crate::battle::stats::EffectiveStats;
use crate::battle::type_chart::{effectiveness, has_stab};
use crate::move_data::MoveData;
use schema::CreatureType;

/// Base chance of a critical hit before the move's crit ratio is applied.
pub const BASE_CRIT_CHANCE: f64 = 0.0625;
pub const CRIT_MULTIPLIER: f64 = 1.5;
pub const STAB_MULTIPLIER: f64 = 1.5;
pub const MIN_VARIANCE: f64 = 0.85;
pub const MAX_VARIANCE: f64 = 1.0;

/// What the damage calculation needs to know about one side.
#[derive(Debug, Clone, Copy)]
pub struct Combatant<'a> {
    pub stats: &'a EffectiveStats,
    pub types: &'a [CreatureType],
    pub level: u8,
}

/// Result of a damage computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageRoll {
    pub damage: u16,
    /// Type-effectiveness product against the defender.
    pub effectiveness: f64,
    pub critical: bool,
    pub stab: bool,
}

/// Outcome of one attack attempt, before it is applied to battle state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttackOutcome {
    Missed,
    /// The move connected. `damage` is `None` for status moves.
    Hit {
        damage: Option<DamageRoll>,
        effectiveness: f64,
    },
}

/// Accuracy check: a percent roll at or under the move's accuracy hits.
pub fn move_hits(move_data: &MoveData, rng: &mut dyn BattleRng) -> bool {
    let roll = rng.roll_percent("accuracy");
    roll <= move_data.accuracy
}

pub fn roll_critical(move_data: &MoveData, rng: &mut dyn BattleRng) -> bool {
    let chance = (BASE_CRIT_CHANCE * f64::from(move_data.crit_ratio)).min(1.0);
    rng.chance(chance, "critical hit")
}

/// Clamp for a critical hit's defense stat. Stat stages do not exist in
/// these battles, so the current stat always equals the unboosted one.
fn ignore_defense_boosts(current: u16, unboosted: u16) -> u16 {
    current.min(unboosted)
}

/// Pure damage formula. `variance` is the random factor in `[0.85, 1.0]`
/// drawn by the caller. Status moves deal no damage.
pub fn calculate_damage(
    attacker: Combatant<'_>,
    defender: Combatant<'_>,
    move_data: &MoveData,
    critical: bool,
    variance: f64,
) -> DamageRoll {
    let effectiveness = effectiveness(move_data.move_type, defender.types);
    let stab = has_stab(move_data.move_type, attacker.types);

    let (Some(power), Some(attack), Some(defense)) = (
        move_data.power,
        attacker.stats.offense_for(move_data.category),
        defender.stats.defense_for(move_data.category),
    ) else {
        return DamageRoll {
            damage: 0,
            effectiveness,
            critical: false,
            stab,
        };
    };

    let defense = if critical {
        ignore_defense_boosts(defense, defense)
    } else {
        defense
    };
    // Scaled stats are always at least 5; guard anyway for hand-built stats.
    let defense = f64::from(defense.max(1));

    let level = f64::from(attacker.level);
    let mut damage =
        ((2.0 * level / 5.0 + 2.0) * f64::from(power) * f64::from(attack) / defense) / 50.0 + 2.0;

    if critical {
        damage *= CRIT_MULTIPLIER;
    }
    if stab {
        damage *= STAB_MULTIPLIER;
    }
    damage *= effectiveness;
    damage *= variance;

    DamageRoll {
        damage: damage.floor().clamp(0.0, f64::from(u16::MAX)) as u16,
        effectiveness,
        critical,
        stab,
    }
}

/// Calculate the outcome of an attack attempt
///
/// Consumes randomness in a fixed order: accuracy, then (damaging moves that
/// hit only) critical hit and damage variance.
pub fn calculate_attack_outcome(
    attacker: Combatant<'_>,
    defender: Combatant<'_>,
    move_data: &MoveData,
    rng: &mut dyn BattleRng,
) -> AttackOutcome {
    if !move_hits(move_data, rng) {
        return AttackOutcome::Missed;
    }

    if !move_data.is_damaging() {
        return AttackOutcome::Hit {
            damage: None,
            effectiveness: effectiveness(move_data.move_type, defender.types),
        };
    }

    let critical = roll_critical(move_data, rng);
    let variance = rng.uniform(MIN_VARIANCE, MAX_VARIANCE, "damage variance");
    let roll = calculate_damage(attacker, defender, move_data, critical, variance);
    AttackOutcome::Hit {
        damage: Some(roll),
        effectiveness: roll.effectiveness,
    }
}
