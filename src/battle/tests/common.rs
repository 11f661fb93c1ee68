use crate::battle::engine::BattleResult;
use crate::battle::rng::TurnRng;
use crate::battle::state::{BattleEvent, Side};
use crate::creature::Creature;
use schema::{BaseStats, CreatureType, MoveId};

/// A builder for creating test creatures with common defaults.
///
/// # Example
/// ```ignore
/// let creature = TestCreatureBuilder::new("Sparky", [35, 55, 40, 50, 50, 90])
///     .with_types(&["electric"])
///     .with_moves(vec![MoveId::Thunderbolt])
///     .build();
/// ```
pub struct TestCreatureBuilder {
    name: String,
    stats: BaseStats,
    types: Vec<CreatureType>,
    moves: Option<Vec<MoveId>>,
}

impl TestCreatureBuilder {
    /// Creates a new normal-type builder with the given base stats.
    pub fn new(name: &str, stats: [u16; 6]) -> Self {
        Self {
            name: name.to_string(),
            stats: BaseStats::from(stats),
            types: vec![CreatureType::parse("normal")],
            moves: None,
        }
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| CreatureType::parse(t)).collect();
        self
    }

    pub fn with_moves(mut self, moves: Vec<MoveId>) -> Self {
        self.moves = Some(moves);
        self
    }

    pub fn build(self) -> Creature {
        let creature = match Creature::new(self.name.clone(), self.stats, self.types) {
            Ok(creature) => creature,
            Err(err) => panic!("Failed to build test creature {}: {}", self.name, err),
        };
        match self.moves {
            Some(moves) => creature
                .with_moveset(moves)
                .unwrap_or_else(|err| panic!("Invalid test moveset: {}", err)),
            None => creature,
        }
    }
}

/// Fast special attacker from the reference scenario.
pub fn blaze() -> Creature {
    TestCreatureBuilder::new("Blaze", [78, 84, 78, 109, 85, 100])
        .with_types(&["fire"])
        .build()
}

/// Slower, weaker creature of the same type.
pub fn ember() -> Creature {
    TestCreatureBuilder::new("Ember", [39, 52, 43, 60, 50, 65])
        .with_types(&["fire"])
        .build()
}

/// RNG that always yields 0.5: no misses, no crits, 92.5% variance.
pub fn predictable_rng() -> TurnRng {
    TurnRng::midpoint()
}

/// HP of `side` after every change, in event order, starting from max HP.
pub fn hp_trace(result: &BattleResult, side: Side, max_hp: u16) -> Vec<u16> {
    let mut trace = vec![max_hp];
    for event in &result.events {
        match event {
            BattleEvent::DamageDealt {
                target,
                remaining_hp,
                ..
            }
            | BattleEvent::StatusDamage {
                target,
                remaining_hp,
                ..
            } if *target == side => trace.push(*remaining_hp),
            _ => {}
        }
    }
    trace
}

/// The side that acted first on each turn, in turn order.
pub fn first_movers(result: &BattleResult) -> Vec<Side> {
    let mut movers = Vec::new();
    let mut awaiting_first = false;
    for event in &result.events {
        match event {
            BattleEvent::TurnStarted { .. } => awaiting_first = true,
            BattleEvent::MoveUsed { side, .. } if awaiting_first => {
                movers.push(*side);
                awaiting_first = false;
            }
            _ => {}
        }
    }
    movers
}
