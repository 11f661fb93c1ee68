use crate::move_data::MoveCatalog;
use schema::{MoveId, StatusEffect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two combatants. Side A wins speed ties.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Victory(Side),
    /// Both creatures fainted.
    Draw,
    /// Neither creature fainted before the turn cap.
    Timeout,
}

impl BattleOutcome {
    pub fn winner(&self) -> Option<Side> {
        match self {
            BattleOutcome::Victory(side) => Some(*side),
            BattleOutcome::Draw | BattleOutcome::Timeout => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    NotStarted,
    InProgress,
    Finished(BattleOutcome),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionFailureReason {
    NoMovesAvailable,
    TargetImmune,
    AlreadyAfflicted,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    BattleStarted,
    CreatureIntroduced {
        side: Side,
        hp: u16,
        types: String,
    },

    // Turn Management
    TurnStarted {
        turn_number: u32,
    },

    // Actions
    MoveUsed {
        side: Side,
        move_used: MoveId,
    },
    MoveMissed {
        attacker: Side,
        move_used: MoveId,
    },
    CriticalHit {
        attacker: Side,
    },
    DamageDealt {
        target: Side,
        damage: u16,
        remaining_hp: u16,
    },
    TypeEffectiveness {
        multiplier: f64,
    },
    HpRemaining {
        side: Side,
        hp: u16,
        max_hp: u16,
    },

    // Status Effects
    StatusApplied {
        target: Side,
        status: StatusEffect,
    },
    StatusDamage {
        target: Side,
        status: StatusEffect,
        damage: u16,
        remaining_hp: u16,
    },

    ActionFailed {
        side: Side,
        reason: ActionFailureReason,
    },
    CreatureFainted {
        side: Side,
    },
    BattleEnded {
        outcome: BattleOutcome,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable log line using battle context.
    /// Returns `None` for events that do not produce a line.
    pub fn format(&self, state: &BattleState) -> Option<String> {
        match self {
            BattleEvent::BattleStarted => Some(format!(
                "{} vs {} - Battle begins!",
                state.name(Side::A),
                state.name(Side::B)
            )),
            BattleEvent::CreatureIntroduced { side, hp, types } => {
                Some(format!("{}: {} HP ({} type)", state.name(*side), hp, types))
            }
            BattleEvent::TurnStarted { turn_number } => Some(format!("--- Turn {} ---", turn_number)),
            BattleEvent::MoveUsed { side, move_used } => Some(format!(
                "{} used {}!",
                state.name(*side),
                Self::format_move_name(*move_used)
            )),
            BattleEvent::MoveMissed { attacker, .. } => {
                Some(format!("{}'s attack missed!", state.name(*attacker)))
            }
            BattleEvent::CriticalHit { .. } => Some("A critical hit!".to_string()),
            BattleEvent::DamageDealt { target, damage, .. } => {
                Some(format!("{} took {} damage!", state.name(*target), damage))
            }
            BattleEvent::TypeEffectiveness { multiplier } => {
                if *multiplier == 0.0 {
                    Some("It had no effect!".to_string())
                } else if *multiplier > 1.0 {
                    Some("It's super effective!".to_string())
                } else if *multiplier < 1.0 {
                    Some("It's not very effective...".to_string())
                } else {
                    None
                }
            }
            BattleEvent::HpRemaining { side, hp, max_hp } => Some(format!(
                "{}: {}/{} HP remaining",
                state.name(*side),
                hp,
                max_hp
            )),
            BattleEvent::StatusApplied { target, status } => Some(format!(
                "{} {}",
                state.name(*target),
                Self::format_status_applied(*status)
            )),
            BattleEvent::StatusDamage {
                target,
                status,
                damage,
                ..
            } => Some(format!(
                "{} is hurt by its {}! ({} damage)",
                state.name(*target),
                status,
                damage
            )),
            BattleEvent::ActionFailed { side, reason } => {
                Some(Self::format_action_failure(state, *side, *reason))
            }
            BattleEvent::CreatureFainted { side } => Some(format!("{} fainted!", state.name(*side))),
            BattleEvent::BattleEnded { outcome } => Some(match outcome {
                BattleOutcome::Victory(side) => format!("{} wins the battle!", state.name(*side)),
                BattleOutcome::Draw => "It's a draw! Both creatures fainted!".to_string(),
                BattleOutcome::Timeout => {
                    format!("Battle timed out after {} turns!", state.turn_cap())
                }
            }),
        }
    }

    fn format_move_name(move_used: MoveId) -> &'static str {
        MoveCatalog::standard().get(move_used).name
    }

    fn format_status_applied(status: StatusEffect) -> &'static str {
        match status {
            StatusEffect::Paralysis => "was paralyzed!",
            StatusEffect::Burn => "was burned!",
            StatusEffect::Freeze => "was frozen solid!",
            StatusEffect::Confusion => "became confused!",
        }
    }

    fn format_action_failure(state: &BattleState, side: Side, reason: ActionFailureReason) -> String {
        match reason {
            ActionFailureReason::NoMovesAvailable => {
                format!("{} has no moves to use!", state.name(side))
            }
            ActionFailureReason::TargetImmune => {
                format!("It doesn't affect {}...", state.name(side.opponent()))
            }
            ActionFailureReason::AlreadyAfflicted => "But it failed!".to_string(),
        }
    }
}

/// Event bus for collecting battle events in the order they happen.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }

    /// Every formatted line, skipping silent events.
    pub fn format_log(&self, state: &BattleState) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| event.format(state))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

/// Mutable per-side battle data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SideState {
    pub name: String,
    pub hp: u16,
    pub max_hp: u16,
    pub status: Option<StatusEffect>,
}

impl SideState {
    pub fn new(name: impl Into<String>, max_hp: u16) -> Self {
        Self {
            name: name.into(),
            hp: max_hp,
            max_hp,
            status: None,
        }
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }
}

/// Ephemeral state of a single battle run.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BattleState {
    sides: [SideState; 2],
    turn_number: u32,
    turn_cap: u32,
    phase: BattlePhase,
}

impl BattleState {
    pub fn new(side_a: SideState, side_b: SideState, turn_cap: u32) -> Self {
        Self {
            sides: [side_a, side_b],
            turn_number: 1,
            turn_cap,
            phase: BattlePhase::NotStarted,
        }
    }

    pub fn side(&self, side: Side) -> &SideState {
        &self.sides[side.index()]
    }

    pub fn name(&self, side: Side) -> &str {
        &self.side(side).name
    }

    pub fn hp(&self, side: Side) -> u16 {
        self.side(side).hp
    }

    pub fn status(&self, side: Side) -> Option<StatusEffect> {
        self.side(side).status
    }

    pub fn is_fainted(&self, side: Side) -> bool {
        self.side(side).is_fainted()
    }

    pub fn any_fainted(&self) -> bool {
        self.sides.iter().any(SideState::is_fainted)
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn turn_cap(&self) -> u32 {
        self.turn_cap
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Turns fully resolved so far.
    pub fn completed_turns(&self) -> u32 {
        self.turn_number.saturating_sub(1)
    }

    pub fn start(&mut self) {
        if self.phase == BattlePhase::NotStarted {
            self.phase = BattlePhase::InProgress;
        }
    }

    pub fn in_progress(&self) -> bool {
        self.phase == BattlePhase::InProgress
            && self.turn_number <= self.turn_cap
            && !self.any_fainted()
    }

    pub fn advance_turn(&mut self) {
        self.turn_number = self.turn_number.saturating_add(1);
    }

    /// Subtract damage, clamping at zero. Returns the remaining HP.
    pub fn apply_damage(&mut self, target: Side, damage: u16) -> u16 {
        let side = &mut self.sides[target.index()];
        side.hp = side.hp.saturating_sub(damage);
        side.hp
    }

    /// Give a side a status. A side holds at most one; returns false if one
    /// was already present.
    pub fn apply_status(&mut self, target: Side, status: StatusEffect) -> bool {
        let side = &mut self.sides[target.index()];
        if side.status.is_some() {
            return false;
        }
        side.status = Some(status);
        true
    }

    /// Outcome implied by the current HP values.
    pub fn current_outcome(&self) -> BattleOutcome {
        match (self.is_fainted(Side::A), self.is_fainted(Side::B)) {
            (true, true) => BattleOutcome::Draw,
            (true, false) => BattleOutcome::Victory(Side::B),
            (false, true) => BattleOutcome::Victory(Side::A),
            (false, false) => BattleOutcome::Timeout,
        }
    }

    pub fn finish(&mut self) -> BattleOutcome {
        let outcome = self.current_outcome();
        self.phase = BattlePhase::Finished(outcome);
        outcome
    }
}
