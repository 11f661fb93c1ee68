//! Authored movesets and the type-based fallback used for everything else.

use crate::battle::stats::EffectiveStats;
use crate::creature::Creature;
use crate::move_data::{MoveCatalog, MoveData};
use schema::{CreatureType, MoveId, PokemonType};

/// Hand-picked movesets for well-known creatures, keyed by name.
pub const AUTHORED_MOVESETS: &[(&str, [MoveId; 4])] = &[
    (
        "pikachu",
        [MoveId::Thunderbolt, MoveId::Thunder, MoveId::ThunderWave, MoveId::Slash],
    ),
    (
        "blastoise",
        [MoveId::Surf, MoveId::HydroPump, MoveId::IceBeam, MoveId::Crunch],
    ),
    (
        "venusaur",
        [MoveId::EnergyBall, MoveId::SludgeBomb, MoveId::Earthquake, MoveId::BodySlam],
    ),
    (
        "charizard",
        [MoveId::Flamethrower, MoveId::FireBlast, MoveId::AirSlash, MoveId::DragonClaw],
    ),
    (
        "gengar",
        [MoveId::ShadowBall, MoveId::SludgeBomb, MoveId::ConfuseRay, MoveId::Thunderbolt],
    ),
    (
        "snorlax",
        [MoveId::BodySlam, MoveId::Crunch, MoveId::Earthquake, MoveId::Headbutt],
    ),
    (
        "dragonite",
        [MoveId::DragonClaw, MoveId::Earthquake, MoveId::Thunderbolt, MoveId::FirePunch],
    ),
    (
        "gyarados",
        [MoveId::Waterfall, MoveId::Crunch, MoveId::Earthquake, MoveId::IceBeam],
    ),
    (
        "alakazam",
        [MoveId::Psychic, MoveId::ShadowBall, MoveId::FocusBlast, MoveId::ThunderWave],
    ),
    (
        "machamp",
        [MoveId::CrossChop, MoveId::RockSlide, MoveId::Earthquake, MoveId::IcePunch],
    ),
    (
        "lapras",
        [MoveId::IceBeam, MoveId::Surf, MoveId::Thunderbolt, MoveId::ConfuseRay],
    ),
];

/// Filler moves appended to every synthesized moveset: one general-purpose
/// hitter and one high-critical-ratio move.
const FILLER_MOVES: [MoveId; 2] = [MoveId::BodySlam, MoveId::Slash];

const PHYSICAL_COVERAGE: MoveId = MoveId::Earthquake;
const SPECIAL_COVERAGE: MoveId = MoveId::IceBeam;

/// The (physical, special) signature pair for each type.
fn type_moves(pokemon_type: PokemonType) -> (MoveId, MoveId) {
    use MoveId::*;
    match pokemon_type {
        PokemonType::Normal => (Headbutt, HyperVoice),
        PokemonType::Fire => (FirePunch, Flamethrower),
        PokemonType::Water => (Waterfall, Surf),
        PokemonType::Electric => (ThunderPunch, Thunderbolt),
        PokemonType::Grass => (SeedBomb, EnergyBall),
        PokemonType::Ice => (IcePunch, IceBeam),
        PokemonType::Fighting => (CrossChop, FocusBlast),
        PokemonType::Poison => (PoisonJab, SludgeBomb),
        PokemonType::Ground => (Earthquake, EarthPower),
        PokemonType::Flying => (DrillPeck, AirSlash),
        PokemonType::Psychic => (ZenHeadbutt, Psychic),
        PokemonType::Bug => (XScissor, BugBuzz),
        PokemonType::Rock => (RockSlide, PowerGem),
        PokemonType::Ghost => (ShadowClaw, ShadowBall),
        PokemonType::Dragon => (DragonClaw, DragonPulse),
        PokemonType::Dark => (Crunch, DarkPulse),
        PokemonType::Steel => (IronHead, FlashCannon),
        PokemonType::Fairy => (PlayRough, Moonblast),
    }
}

fn prefers_physical(stats: &EffectiveStats) -> bool {
    stats.attack > stats.special_attack
}

fn signature_move(creature_type: &CreatureType, physical: bool) -> Option<MoveId> {
    creature_type.known().map(|known| {
        let (physical_move, special_move) = type_moves(known);
        if physical {
            physical_move
        } else {
            special_move
        }
    })
}

/// Deterministic four-move set built from types and effective stats.
pub fn synthesize_moveset(creature: &Creature, stats: &EffectiveStats) -> Vec<MoveId> {
    let physical = prefers_physical(stats);

    let primary = signature_move(creature.primary_type(), physical).unwrap_or(MoveId::Tackle);

    let stat_coverage = if physical {
        PHYSICAL_COVERAGE
    } else {
        SPECIAL_COVERAGE
    };
    let other_coverage = if physical {
        SPECIAL_COVERAGE
    } else {
        PHYSICAL_COVERAGE
    };
    let coverage = creature
        .secondary_type()
        .and_then(|secondary| signature_move(secondary, physical))
        .into_iter()
        .chain([stat_coverage, other_coverage])
        .find(|&candidate| candidate != primary)
        .unwrap_or(other_coverage);

    let mut moves = vec![primary, coverage];
    moves.extend(FILLER_MOVES);
    moves
}

/// Resolve the moves a creature fights with.
///
/// Priority: the creature's own explicit moveset, then the catalog's
/// authored moveset for its name, then a synthesized one.
pub fn resolve_moveset<'c>(
    creature: &Creature,
    stats: &EffectiveStats,
    catalog: &'c MoveCatalog,
) -> Vec<&'c MoveData> {
    let ids: Vec<MoveId> = match creature.moveset() {
        Some(explicit) => explicit.to_vec(),
        None => match catalog.authored_moveset(creature.name()) {
            Some(authored) => authored.to_vec(),
            None => synthesize_moveset(creature, stats),
        },
    };

    ids.into_iter()
        .take(Creature::MAX_MOVES)
        .map(|id| catalog.get(id))
        .collect()
}
