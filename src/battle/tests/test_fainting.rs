#[cfg(test)]
mod tests {
    use crate::battle::engine::run_battle;
    use crate::battle::state::{BattleEvent, BattleOutcome, BattlePhase, BattleState, Side, SideState};
    use crate::battle::tests::common::{predictable_rng, TestCreatureBuilder};
    use crate::creature::Creature;
    use pretty_assertions::assert_eq;
    use schema::MoveId;

    fn gnat() -> Creature {
        TestCreatureBuilder::new("Gnat", [1, 10, 1, 10, 1, 200])
            .with_moves(vec![MoveId::Tackle])
            .build()
    }

    fn brute(speed: u16) -> Creature {
        TestCreatureBuilder::new("Brute", [100, 150, 100, 10, 100, speed])
            .with_moves(vec![MoveId::BodySlam])
            .build()
    }

    #[test]
    fn test_second_actor_knockout_counts_the_turn() {
        // Act
        let result = run_battle(&gnat(), &brute(10), 50, 50, &mut predictable_rng());

        // Assert
        assert_eq!(result.outcome, BattleOutcome::Victory(Side::B));
        assert_eq!(result.turns, 1);
        assert_eq!(result.final_hp.a, 0);
        assert_eq!(
            &result.events[result.events.len() - 2..],
            &[
                BattleEvent::CreatureFainted { side: Side::A },
                BattleEvent::BattleEnded {
                    outcome: BattleOutcome::Victory(Side::B)
                },
            ]
        );
        assert_eq!(result.log.last().unwrap(), "Brute wins the battle!");
    }

    #[test]
    fn test_first_actor_knockout_ends_turn_immediately() {
        // Act
        let result = run_battle(&gnat(), &brute(250), 50, 50, &mut predictable_rng());

        // Assert
        assert_eq!(result.outcome, BattleOutcome::Victory(Side::B));
        assert_eq!(result.turns, 0);
        // Gnat never got to act
        assert!(!result.events.iter().any(|e| matches!(
            e,
            BattleEvent::MoveUsed { side: Side::A, .. }
        )));
    }

    #[test]
    fn test_fainted_side_reports_zero_hp() {
        let result = run_battle(&gnat(), &brute(10), 50, 50, &mut predictable_rng());
        assert!(result.log.contains(&"Gnat: 0/76 HP remaining".to_string()));
        assert!(result.log.contains(&"Gnat fainted!".to_string()));
    }

    #[test]
    fn test_finished_state_rejects_further_turns() {
        let mut state = BattleState::new(SideState::new("Gnat", 76), SideState::new("Brute", 225), 20);
        state.start();
        state.apply_damage(Side::A, 76);
        assert_eq!(state.finish(), BattleOutcome::Victory(Side::B));
        assert_eq!(state.phase(), BattlePhase::Finished(BattleOutcome::Victory(Side::B)));
        assert!(!state.in_progress());
    }
}
