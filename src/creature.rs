//! Creature records and the validated, battle-ready `Creature`.
//!
//! Records arrive from the roster service in a loose shape (every stat is
//! optional, types and moves are plain strings). `Creature::try_from` is the
//! single gate between that shape and the engine: once a `Creature` exists,
//! the engine can rely on all six stats, one or two types, and a moveset of
//! known moves.

use crate::errors::{CreatureDataError, CreatureDataResult};
use schema::{BaseStats, CreatureType, MoveId, StatKind};
use serde::{Deserialize, Serialize};

/// Six optional stat fields, as stored by the roster service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRecord {
    #[serde(default)]
    pub hp: Option<u16>,
    #[serde(default)]
    pub attack: Option<u16>,
    #[serde(default)]
    pub defense: Option<u16>,
    #[serde(default)]
    pub special_attack: Option<u16>,
    #[serde(default)]
    pub special_defense: Option<u16>,
    #[serde(default)]
    pub speed: Option<u16>,
}

impl StatRecord {
    fn field(&self, stat: StatKind) -> Option<u16> {
        match stat {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpecialAttack => self.special_attack,
            StatKind::SpecialDefense => self.special_defense,
            StatKind::Speed => self.speed,
        }
    }

    /// Converts to `BaseStats`, listing every missing field on failure.
    pub fn to_base_stats(&self, name: &str) -> CreatureDataResult<BaseStats> {
        let (
            Some(hp),
            Some(attack),
            Some(defense),
            Some(special_attack),
            Some(special_defense),
            Some(speed),
        ) = (
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        )
        else {
            use strum::IntoEnumIterator;

            return Err(CreatureDataError::MissingStats {
                name: name.to_string(),
                fields: StatKind::iter()
                    .filter(|&stat| self.field(stat).is_none())
                    .collect(),
            });
        };

        Ok(BaseStats {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        })
    }
}

impl From<BaseStats> for StatRecord {
    fn from(stats: BaseStats) -> Self {
        Self {
            hp: Some(stats.hp),
            attack: Some(stats.attack),
            defense: Some(stats.defense),
            special_attack: Some(stats.special_attack),
            special_defense: Some(stats.special_defense),
            speed: Some(stats.speed),
        }
    }
}

/// The raw shape of a creature as returned by the lookup service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stats: StatRecord,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moves: Option<Vec<String>>,
}

/// An immutable, validated creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Creature {
    name: String,
    base_stats: BaseStats,
    types: Vec<CreatureType>,
    moveset: Option<Vec<MoveId>>,
}

impl Creature {
    pub const MAX_TYPES: usize = 2;
    pub const MAX_MOVES: usize = 4;

    /// Create a creature with no fixed moveset.
    pub fn new(
        name: impl Into<String>,
        base_stats: BaseStats,
        types: Vec<CreatureType>,
    ) -> CreatureDataResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(CreatureDataError::EmptyName);
        }
        if types.is_empty() {
            return Err(CreatureDataError::NoTypes { name });
        }
        if types.len() > Self::MAX_TYPES {
            return Err(CreatureDataError::TooManyTypes {
                count: types.len(),
                name,
            });
        }

        Ok(Self {
            name,
            base_stats,
            types,
            moveset: None,
        })
    }

    /// Attach a fixed moveset, which takes priority over every other
    /// moveset source during resolution.
    pub fn with_moveset(mut self, moves: Vec<MoveId>) -> CreatureDataResult<Self> {
        if moves.is_empty() {
            return Err(CreatureDataError::EmptyMoveset { name: self.name });
        }
        if moves.len() > Self::MAX_MOVES {
            return Err(CreatureDataError::TooManyMoves {
                count: moves.len(),
                name: self.name,
            });
        }
        self.moveset = Some(moves);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_stats(&self) -> &BaseStats {
        &self.base_stats
    }

    pub fn types(&self) -> &[CreatureType] {
        &self.types
    }

    pub fn primary_type(&self) -> &CreatureType {
        // Construction guarantees at least one type.
        &self.types[0]
    }

    pub fn secondary_type(&self) -> Option<&CreatureType> {
        self.types.get(1)
    }

    pub fn moveset(&self) -> Option<&[MoveId]> {
        self.moveset.as_deref()
    }

    /// "fire/flying", as rendered in the battle log.
    pub fn type_label(&self) -> String {
        self.types
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl TryFrom<CreatureRecord> for Creature {
    type Error = CreatureDataError;

    fn try_from(record: CreatureRecord) -> Result<Self, Self::Error> {
        let name = record.name.trim().to_string();
        if name.is_empty() {
            return Err(CreatureDataError::EmptyName);
        }

        let base_stats = record.stats.to_base_stats(&name)?;
        let types = record
            .types
            .iter()
            .map(|t| CreatureType::parse(t))
            .collect();
        let creature = Creature::new(name, base_stats, types)?;

        match record.moves {
            None => Ok(creature),
            Some(move_names) => {
                let mut moves = Vec::with_capacity(move_names.len());
                for move_name in move_names {
                    let move_id = MoveId::from_name(&move_name).ok_or_else(|| {
                        CreatureDataError::UnknownMove {
                            name: creature.name.clone(),
                            move_name: move_name.clone(),
                        }
                    })?;
                    moves.push(move_id);
                }
                creature.with_moveset(moves)
            }
        }
    }
}

impl From<&Creature> for CreatureRecord {
    fn from(creature: &Creature) -> Self {
        Self {
            name: creature.name.clone(),
            stats: StatRecord::from(creature.base_stats),
            types: creature.types.iter().map(|t| t.to_string()).collect(),
            moves: creature
                .moveset
                .as_ref()
                .map(|moves| moves.iter().map(|m| m.key().to_string()).collect()),
        }
    }
}
