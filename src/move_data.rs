use crate::errors::{CreatureDataError, CreatureDataResult};
use crate::movesets::AUTHORED_MOVESETS;
use schema::{MoveCategory, MoveId, PokemonType, StatusEffect};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use strum::{EnumCount, IntoEnumIterator};

// Process-wide catalog - built once on first use and never mutated afterwards
static STANDARD_CATALOG: LazyLock<MoveCatalog> = LazyLock::new(MoveCatalog::new);

/// Static description of a single move.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveData {
    pub id: MoveId,
    pub name: &'static str,
    pub move_type: PokemonType,
    pub category: MoveCategory,
    /// `None` for status moves
    pub power: Option<u16>,
    /// Percent chance to hit (1-100)
    pub accuracy: u8,
    /// Multiplier on the base critical-hit chance
    pub crit_ratio: u8,
    pub effect: Option<StatusEffect>,
    /// Percent chance for `effect` to trigger on a hit (0-100)
    pub effect_chance: u8,
}

impl MoveData {
    fn attack(
        id: MoveId,
        name: &'static str,
        move_type: PokemonType,
        category: MoveCategory,
        power: u16,
        accuracy: u8,
    ) -> Self {
        Self {
            id,
            name,
            move_type,
            category,
            power: Some(power),
            accuracy,
            crit_ratio: 1,
            effect: None,
            effect_chance: 0,
        }
    }

    fn physical(id: MoveId, name: &'static str, move_type: PokemonType, power: u16, accuracy: u8) -> Self {
        Self::attack(id, name, move_type, MoveCategory::Physical, power, accuracy)
    }

    fn special(id: MoveId, name: &'static str, move_type: PokemonType, power: u16, accuracy: u8) -> Self {
        Self::attack(id, name, move_type, MoveCategory::Special, power, accuracy)
    }

    fn status(
        id: MoveId,
        name: &'static str,
        move_type: PokemonType,
        accuracy: u8,
        effect: StatusEffect,
    ) -> Self {
        Self {
            id,
            name,
            move_type,
            category: MoveCategory::Status,
            power: None,
            accuracy,
            crit_ratio: 1,
            effect: Some(effect),
            effect_chance: 100,
        }
    }

    fn with_effect(mut self, effect: StatusEffect, chance: u8) -> Self {
        self.effect = Some(effect);
        self.effect_chance = chance;
        self
    }

    fn with_crit_ratio(mut self, crit_ratio: u8) -> Self {
        self.crit_ratio = crit_ratio;
        self
    }

    pub fn is_damaging(&self) -> bool {
        self.category != MoveCategory::Status
    }

    /// Built-in data for a move. Exhaustive over `MoveId`, so every
    /// identifier is guaranteed an entry.
    pub fn standard(id: MoveId) -> MoveData {
        use MoveId::*;
        use PokemonType as T;
        use StatusEffect::*;

        match id {
            // Normal
            Tackle => Self::physical(id, "Tackle", T::Normal, 40, 100),
            Headbutt => Self::physical(id, "Headbutt", T::Normal, 70, 100),
            BodySlam => Self::physical(id, "Body Slam", T::Normal, 85, 100).with_effect(Paralysis, 30),
            Slash => Self::physical(id, "Slash", T::Normal, 70, 100).with_crit_ratio(2),
            HyperVoice => Self::special(id, "Hyper Voice", T::Normal, 90, 100),

            // Fire
            FirePunch => Self::physical(id, "Fire Punch", T::Fire, 75, 100).with_effect(Burn, 10),
            Flamethrower => Self::special(id, "Flamethrower", T::Fire, 90, 100).with_effect(Burn, 10),
            FireBlast => Self::special(id, "Fire Blast", T::Fire, 110, 85).with_effect(Burn, 10),
            WillOWisp => Self::status(id, "Will-O-Wisp", T::Fire, 85, Burn),

            // Water
            Waterfall => Self::physical(id, "Waterfall", T::Water, 80, 100),
            Surf => Self::special(id, "Surf", T::Water, 90, 100),
            HydroPump => Self::special(id, "Hydro Pump", T::Water, 110, 80),

            // Electric
            ThunderPunch => {
                Self::physical(id, "Thunder Punch", T::Electric, 75, 100).with_effect(Paralysis, 10)
            }
            Thunderbolt => {
                Self::special(id, "Thunderbolt", T::Electric, 90, 100).with_effect(Paralysis, 10)
            }
            Thunder => Self::special(id, "Thunder", T::Electric, 110, 70).with_effect(Paralysis, 30),
            ThunderWave => Self::status(id, "Thunder Wave", T::Electric, 90, Paralysis),

            // Grass
            SeedBomb => Self::physical(id, "Seed Bomb", T::Grass, 80, 100),
            EnergyBall => Self::special(id, "Energy Ball", T::Grass, 90, 100),

            // Ice
            IcePunch => Self::physical(id, "Ice Punch", T::Ice, 75, 100).with_effect(Freeze, 10),
            IceBeam => Self::special(id, "Ice Beam", T::Ice, 90, 100).with_effect(Freeze, 10),
            Blizzard => Self::special(id, "Blizzard", T::Ice, 110, 70).with_effect(Freeze, 10),

            // Fighting
            CrossChop => Self::physical(id, "Cross Chop", T::Fighting, 100, 80).with_crit_ratio(2),
            FocusBlast => Self::special(id, "Focus Blast", T::Fighting, 120, 70),

            // Poison
            PoisonJab => Self::physical(id, "Poison Jab", T::Poison, 80, 100),
            SludgeBomb => Self::special(id, "Sludge Bomb", T::Poison, 90, 100),

            // Ground
            Earthquake => Self::physical(id, "Earthquake", T::Ground, 100, 100),
            EarthPower => Self::special(id, "Earth Power", T::Ground, 90, 100),

            // Flying
            DrillPeck => Self::physical(id, "Drill Peck", T::Flying, 80, 100),
            AirSlash => Self::special(id, "Air Slash", T::Flying, 75, 95),

            // Psychic
            ZenHeadbutt => Self::physical(id, "Zen Headbutt", T::Psychic, 80, 90),
            Psychic => Self::special(id, "Psychic", T::Psychic, 90, 100).with_effect(Confusion, 10),

            // Bug
            XScissor => Self::physical(id, "X-Scissor", T::Bug, 80, 100),
            BugBuzz => Self::special(id, "Bug Buzz", T::Bug, 90, 100),

            // Rock
            RockSlide => Self::physical(id, "Rock Slide", T::Rock, 75, 90),
            PowerGem => Self::special(id, "Power Gem", T::Rock, 80, 100),

            // Ghost
            ShadowClaw => Self::physical(id, "Shadow Claw", T::Ghost, 70, 100).with_crit_ratio(2),
            ShadowBall => Self::special(id, "Shadow Ball", T::Ghost, 80, 100),
            ConfuseRay => Self::status(id, "Confuse Ray", T::Ghost, 100, Confusion),

            // Dragon
            DragonClaw => Self::physical(id, "Dragon Claw", T::Dragon, 80, 100),
            DragonPulse => Self::special(id, "Dragon Pulse", T::Dragon, 85, 100),

            // Dark
            Crunch => Self::physical(id, "Crunch", T::Dark, 80, 100),
            DarkPulse => Self::special(id, "Dark Pulse", T::Dark, 80, 100),

            // Steel
            IronHead => Self::physical(id, "Iron Head", T::Steel, 80, 100),
            FlashCannon => Self::special(id, "Flash Cannon", T::Steel, 80, 100),

            // Fairy
            PlayRough => Self::physical(id, "Play Rough", T::Fairy, 90, 90),
            Moonblast => Self::special(id, "Moonblast", T::Fairy, 95, 100),
        }
    }
}

/// Immutable move registry plus the authored per-creature movesets.
///
/// Built once and shared by reference between any number of concurrent
/// battles.
#[derive(Debug, Clone)]
pub struct MoveCatalog {
    // Indexed by `MoveId` discriminant.
    moves: Vec<MoveData>,
    // Keyed by lowercase creature name.
    authored: HashMap<String, Vec<MoveId>>,
}

impl MoveCatalog {
    /// Build a fresh catalog from the built-in move table and authored movesets.
    pub fn new() -> Self {
        let moves: Vec<MoveData> = MoveId::iter().map(MoveData::standard).collect();
        debug_assert_eq!(moves.len(), MoveId::COUNT);

        let authored = AUTHORED_MOVESETS
            .iter()
            .map(|(name, moves)| (name.to_lowercase(), moves.to_vec()))
            .collect();

        Self { moves, authored }
    }

    /// The shared process-wide catalog.
    pub fn standard() -> &'static MoveCatalog {
        &STANDARD_CATALOG
    }

    /// Add or replace an authored moveset. Intended for building custom
    /// catalogs before any battle borrows them.
    pub fn with_authored_moveset(
        mut self,
        name: &str,
        moves: Vec<MoveId>,
    ) -> CreatureDataResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CreatureDataError::EmptyName);
        }
        if moves.is_empty() {
            return Err(CreatureDataError::EmptyMoveset {
                name: name.to_string(),
            });
        }
        if moves.len() > crate::creature::Creature::MAX_MOVES {
            return Err(CreatureDataError::TooManyMoves {
                name: name.to_string(),
                count: moves.len(),
            });
        }
        self.authored.insert(name.to_lowercase(), moves);
        Ok(self)
    }

    /// Get move data for a specific move
    pub fn get(&self, move_id: MoveId) -> &MoveData {
        &self.moves[move_id as usize]
    }

    /// Case-insensitive lookup of an authored moveset.
    pub fn authored_moveset(&self, creature_name: &str) -> Option<&[MoveId]> {
        self.authored
            .get(&creature_name.trim().to_lowercase())
            .map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveData> {
        self.moves.iter()
    }
}

impl Default for MoveCatalog {
    fn default() -> Self {
        Self::new()
    }
}
