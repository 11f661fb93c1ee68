use crate::battle::ai::{MoveSelector, OpeningAggression};
use crate::battle::calculators::{calculate_attack_outcome, AttackOutcome, Combatant};
use crate::battle::rng::BattleRng;
use crate::battle::state::{
    ActionFailureReason, BattleEvent, BattleOutcome, BattleState, EventBus, Side, SideState,
};
use crate::battle::stats::{clamp_level, effective_speed, scale_stats, EffectiveStats};
use crate::config::{BattleConfig, StatusMode};
use crate::creature::Creature;
use crate::move_data::{MoveCatalog, MoveData};
use crate::movesets::resolve_moveset;
use serde::Serialize;

/// HP left on each side when the battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinalHp {
    pub a: u16,
    pub b: u16,
}

/// Everything a caller needs to render one finished battle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattleResult {
    pub creature_a: String,
    pub creature_b: String,
    pub outcome: BattleOutcome,
    pub log: Vec<String>,
    pub events: Vec<BattleEvent>,
    pub final_hp: FinalHp,
    /// Number of completed turns.
    pub turns: u32,
    pub turn_cap: u32,
}

impl BattleResult {
    pub fn winner_name(&self) -> Option<&str> {
        self.outcome.winner().map(|side| match side {
            Side::A => self.creature_a.as_str(),
            Side::B => self.creature_b.as_str(),
        })
    }

    /// One-line verdict.
    pub fn summary(&self) -> String {
        match (self.outcome, self.winner_name()) {
            (BattleOutcome::Victory(_), Some(name)) => format!("{} wins!", name),
            (BattleOutcome::Draw, _) => "Draw! Both creatures fainted!".to_string(),
            _ => format!("Battle timed out ({} turns reached)", self.turn_cap),
        }
    }
}

/// One creature as it enters a battle: level, scaled stats and moves.
struct Fighter<'a, 'c> {
    creature: &'a Creature,
    level: u8,
    stats: EffectiveStats,
    moveset: Vec<&'c MoveData>,
}

impl<'a, 'c> Fighter<'a, 'c> {
    fn prepare(creature: &'a Creature, level: u8, catalog: &'c MoveCatalog) -> Self {
        let level = clamp_level(level);
        let stats = scale_stats(creature.base_stats(), level);
        let moveset = resolve_moveset(creature, &stats, catalog);
        Self {
            creature,
            level,
            stats,
            moveset,
        }
    }

    fn combatant(&self) -> Combatant<'_> {
        Combatant {
            stats: &self.stats,
            types: self.creature.types(),
            level: self.level,
        }
    }
}

/// Runs complete battles between two creatures.
///
/// The engine borrows an immutable catalog and owns no per-battle state,
/// so one engine can serve any number of battles, including concurrently
/// from several threads.
#[derive(Debug, Clone)]
pub struct BattleEngine<'c, S: MoveSelector = OpeningAggression> {
    catalog: &'c MoveCatalog,
    config: BattleConfig,
    selector: S,
}

impl<'c> BattleEngine<'c, OpeningAggression> {
    pub fn new(catalog: &'c MoveCatalog) -> Self {
        Self {
            catalog,
            config: BattleConfig::default(),
            selector: OpeningAggression,
        }
    }
}

impl<'c, S: MoveSelector> BattleEngine<'c, S> {
    pub fn with_config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_selector<T: MoveSelector>(self, selector: T) -> BattleEngine<'c, T> {
        BattleEngine {
            catalog: self.catalog,
            config: self.config,
            selector,
        }
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// The moves `creature` would fight with at `level`.
    pub fn moveset_for(&self, creature: &Creature, level: u8) -> Vec<&'c MoveData> {
        let stats = scale_stats(creature.base_stats(), clamp_level(level));
        resolve_moveset(creature, &stats, self.catalog)
    }

    /// Run a battle with both creatures at the configured default level.
    pub fn run_at_default_level(
        &self,
        a: &Creature,
        b: &Creature,
        rng: &mut dyn BattleRng,
    ) -> BattleResult {
        let level = self.config.default_level;
        self.run(a, b, level, level, rng)
    }

    /// Run one battle to completion. Levels outside 1-100 are clamped.
    pub fn run(
        &self,
        a: &Creature,
        b: &Creature,
        level_a: u8,
        level_b: u8,
        rng: &mut dyn BattleRng,
    ) -> BattleResult {
        let fighters = [
            Fighter::prepare(a, level_a, self.catalog),
            Fighter::prepare(b, level_b, self.catalog),
        ];
        let mut state = BattleState::new(
            SideState::new(a.name(), fighters[0].stats.hp),
            SideState::new(b.name(), fighters[1].stats.hp),
            self.config.turn_cap,
        );
        let mut bus = EventBus::new();

        tracing::debug!(
            a = a.name(),
            b = b.name(),
            level_a = fighters[0].level,
            level_b = fighters[1].level,
            "battle starting"
        );

        bus.push(BattleEvent::BattleStarted);
        for side in [Side::A, Side::B] {
            let fighter = &fighters[side.index()];
            bus.push(BattleEvent::CreatureIntroduced {
                side,
                hp: fighter.stats.hp,
                types: fighter.creature.type_label(),
            });
        }

        state.start();
        while state.in_progress() {
            let turn = state.turn_number();
            tracing::debug!(turn, hp_a = state.hp(Side::A), hp_b = state.hp(Side::B), "turn start");
            bus.push(BattleEvent::TurnStarted { turn_number: turn });

            let [first, second] = self.turn_order(&fighters, &state);

            self.resolve_action(first, &fighters, &mut state, &mut bus, rng);
            if state.any_fainted() {
                break;
            }
            self.resolve_action(second, &fighters, &mut state, &mut bus, rng);

            if self.config.status_mode == StatusMode::Persistent && !state.any_fainted() {
                Self::apply_residual_damage(&mut state, &mut bus);
            }

            state.advance_turn();
        }

        let outcome = state.finish();
        bus.push(BattleEvent::BattleEnded { outcome });
        tracing::debug!(?outcome, turns = state.completed_turns(), "battle finished");

        BattleResult {
            creature_a: a.name().to_string(),
            creature_b: b.name().to_string(),
            outcome,
            log: bus.format_log(&state),
            final_hp: FinalHp {
                a: state.hp(Side::A),
                b: state.hp(Side::B),
            },
            turns: state.completed_turns(),
            turn_cap: state.turn_cap(),
            events: bus.into_events(),
        }
    }

    /// Faster side first; side A on a tie.
    fn turn_order(&self, fighters: &[Fighter<'_, 'c>; 2], state: &BattleState) -> [Side; 2] {
        let speed = |side: Side| {
            let stats = &fighters[side.index()].stats;
            match self.config.status_mode {
                StatusMode::Cosmetic => f64::from(stats.speed),
                StatusMode::Persistent => effective_speed(stats, state.status(side)),
            }
        };

        if speed(Side::B) > speed(Side::A) {
            [Side::B, Side::A]
        } else {
            [Side::A, Side::B]
        }
    }

    fn resolve_action(
        &self,
        attacker: Side,
        fighters: &[Fighter<'_, 'c>; 2],
        state: &mut BattleState,
        bus: &mut EventBus,
        rng: &mut dyn BattleRng,
    ) {
        let defender = attacker.opponent();
        let attacking = &fighters[attacker.index()];
        let defending = &fighters[defender.index()];

        let Some(move_data) =
            self.selector
                .select_move(&attacking.moveset, state.turn_number(), rng)
        else {
            bus.push(BattleEvent::ActionFailed {
                side: attacker,
                reason: ActionFailureReason::NoMovesAvailable,
            });
            return;
        };

        bus.push(BattleEvent::MoveUsed {
            side: attacker,
            move_used: move_data.id,
        });

        let outcome = calculate_attack_outcome(
            attacking.combatant(),
            defending.combatant(),
            move_data,
            rng,
        );
        tracing::debug!(
            attacker = state.name(attacker),
            move_name = move_data.name,
            ?outcome,
            "action resolved"
        );

        match outcome {
            AttackOutcome::Missed => {
                bus.push(BattleEvent::MoveMissed {
                    attacker,
                    move_used: move_data.id,
                });
            }
            AttackOutcome::Hit {
                damage: Some(roll),
                effectiveness,
            } => {
                if roll.critical {
                    bus.push(BattleEvent::CriticalHit { attacker });
                }
                let remaining_hp = state.apply_damage(defender, roll.damage);
                bus.push(BattleEvent::DamageDealt {
                    target: defender,
                    damage: roll.damage,
                    remaining_hp,
                });
                bus.push(BattleEvent::TypeEffectiveness {
                    multiplier: effectiveness,
                });
                bus.push(BattleEvent::HpRemaining {
                    side: defender,
                    hp: remaining_hp,
                    max_hp: state.side(defender).max_hp,
                });
                if remaining_hp == 0 {
                    bus.push(BattleEvent::CreatureFainted { side: defender });
                }
                Self::try_secondary_effect(move_data, defender, effectiveness, state, bus, rng);
            }
            AttackOutcome::Hit {
                damage: None,
                effectiveness,
            } => {
                if effectiveness == 0.0 {
                    bus.push(BattleEvent::ActionFailed {
                        side: attacker,
                        reason: ActionFailureReason::TargetImmune,
                    });
                } else if state.status(defender).is_some() {
                    bus.push(BattleEvent::ActionFailed {
                        side: attacker,
                        reason: ActionFailureReason::AlreadyAfflicted,
                    });
                } else {
                    Self::try_secondary_effect(move_data, defender, effectiveness, state, bus, rng);
                }
            }
        }
    }

    /// Roll for the move's status effect. No roll is made when there is
    /// nothing that could be applied.
    fn try_secondary_effect(
        move_data: &MoveData,
        defender: Side,
        effectiveness: f64,
        state: &mut BattleState,
        bus: &mut EventBus,
        rng: &mut dyn BattleRng,
    ) {
        let Some(effect) = move_data.effect else {
            return;
        };
        if state.is_fainted(defender) || effectiveness == 0.0 || state.status(defender).is_some() {
            return;
        }

        let probability = f64::from(move_data.effect_chance) / 100.0;
        if rng.chance(probability, "secondary effect") && state.apply_status(defender, effect) {
            bus.push(BattleEvent::StatusApplied {
                target: defender,
                status: effect,
            });
        }
    }

    fn apply_residual_damage(state: &mut BattleState, bus: &mut EventBus) {
        for side in [Side::A, Side::B] {
            let Some(status) = state.status(side) else {
                continue;
            };
            let fraction = status.residual_damage_fraction();
            if fraction <= 0.0 || state.is_fainted(side) {
                continue;
            }

            let max_hp = state.side(side).max_hp;
            let damage = ((f64::from(max_hp) * fraction).floor() as u16).max(1);
            let remaining_hp = state.apply_damage(side, damage);
            bus.push(BattleEvent::StatusDamage {
                target: side,
                status,
                damage,
                remaining_hp,
            });
            if remaining_hp == 0 {
                bus.push(BattleEvent::CreatureFainted { side });
            }
        }
    }
}

/// Run a battle with the shared standard catalog and default configuration.
pub fn run_battle(
    a: &Creature,
    b: &Creature,
    level_a: u8,
    level_b: u8,
    rng: &mut dyn BattleRng,
) -> BattleResult {
    BattleEngine::new(MoveCatalog::standard()).run(a, b, level_a, level_b, rng)
}
