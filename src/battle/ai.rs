//! Move-selection policies for the automated combatants.

use crate::battle::rng::BattleRng;
use crate::move_data::MoveData;

/// Turns on which `OpeningAggression` plays its strongest move.
pub const OPENING_TURNS: u32 = 2;

/// A trait for any policy that picks a move for the acting creature.
///
/// Implementations must draw from `rng` (never ambient randomness) so a
/// battle can be replayed exactly.
pub trait MoveSelector {
    /// Choose a move from `moveset` on the given 1-based turn. Returns `None`
    /// only for an empty moveset.
    fn select_move<'m>(
        &self,
        moveset: &[&'m MoveData],
        turn: u32,
        rng: &mut dyn BattleRng,
    ) -> Option<&'m MoveData>;
}

/// Two-phase policy: the highest-power move for the opening turns, then a
/// uniformly random move every turn after.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpeningAggression;

impl OpeningAggression {
    /// Highest power wins; status moves (no power) rank below every
    /// damaging move; ties go to the earliest move.
    fn strongest<'m>(moveset: &[&'m MoveData]) -> Option<&'m MoveData> {
        moveset.iter().copied().fold(None, |best, candidate| match best {
            Some(current) if candidate.power <= current.power => Some(current),
            _ => Some(candidate),
        })
    }
}

impl MoveSelector for OpeningAggression {
    fn select_move<'m>(
        &self,
        moveset: &[&'m MoveData],
        turn: u32,
        rng: &mut dyn BattleRng,
    ) -> Option<&'m MoveData> {
        if moveset.is_empty() {
            return None;
        }
        if turn <= OPENING_TURNS {
            Self::strongest(moveset)
        } else {
            let index = rng.pick_index(moveset.len(), "move selection");
            moveset.get(index).copied()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::rng::TurnRng;
    use crate::move_data::MoveCatalog;
    use schema::MoveId;

    fn moveset(ids: &[MoveId]) -> Vec<&'static MoveData> {
        ids.iter().map(|&id| MoveCatalog::standard().get(id)).collect()
    }

    #[test]
    fn test_opening_turns_pick_highest_power() {
        let moves = moveset(&[MoveId::Slash, MoveId::ThunderWave, MoveId::Thunder, MoveId::Thunderbolt]);
        let mut rng = TurnRng::new_for_test(vec![0.0]);
        for turn in 1..=OPENING_TURNS {
            let chosen = OpeningAggression.select_move(&moves, turn, &mut rng).unwrap();
            assert_eq!(chosen.id, MoveId::Thunder);
        }
        assert_eq!(rng.consumed(), 0, "opening turns must not draw randomness");
    }

    #[test]
    fn test_status_moves_rank_lowest() {
        let moves = moveset(&[MoveId::ThunderWave, MoveId::Tackle]);
        let mut rng = TurnRng::midpoint();
        let chosen = OpeningAggression.select_move(&moves, 1, &mut rng).unwrap();
        assert_eq!(chosen.id, MoveId::Tackle);
    }

    #[test]
    fn test_power_ties_resolve_to_earliest() {
        let moves = moveset(&[MoveId::Flamethrower, MoveId::IceBeam, MoveId::Surf]);
        let mut rng = TurnRng::midpoint();
        let chosen = OpeningAggression.select_move(&moves, 2, &mut rng).unwrap();
        assert_eq!(chosen.id, MoveId::Flamethrower);
    }

    #[test]
    fn test_only_status_moves_still_selects() {
        let moves = moveset(&[MoveId::ThunderWave, MoveId::ConfuseRay]);
        let mut rng = TurnRng::midpoint();
        let chosen = OpeningAggression.select_move(&moves, 1, &mut rng).unwrap();
        assert_eq!(chosen.id, MoveId::ThunderWave);
    }

    #[test]
    fn test_later_turns_pick_by_rng() {
        let moves = moveset(&[MoveId::Tackle, MoveId::Slash, MoveId::BodySlam, MoveId::Headbutt]);
        let mut rng = TurnRng::new_for_test(vec![0.0, 0.3, 0.6, 0.9]);
        let picks: Vec<MoveId> = (3..7)
            .map(|turn| OpeningAggression.select_move(&moves, turn, &mut rng).unwrap().id)
            .collect();
        assert_eq!(
            picks,
            vec![MoveId::Tackle, MoveId::Slash, MoveId::BodySlam, MoveId::Headbutt]
        );
    }

    #[test]
    fn test_empty_moveset_selects_nothing() {
        let mut rng = TurnRng::midpoint();
        assert!(OpeningAggression.select_move(&[], 5, &mut rng).is_none());
    }
}
