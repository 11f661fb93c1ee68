#[cfg(test)]
mod tests {
    use crate::battle::engine::{run_battle, BattleEngine};
    use crate::battle::rng::TurnRng;
    use crate::battle::state::{ActionFailureReason, BattleEvent, BattleOutcome, Side};
    use crate::battle::tests::common::{hp_trace, predictable_rng, TestCreatureBuilder};
    use crate::config::{BattleConfig, StatusMode};
    use crate::creature::Creature;
    use crate::move_data::MoveCatalog;
    use pretty_assertions::assert_eq;
    use schema::{MoveId, StatusEffect};

    fn persistent_engine() -> BattleEngine<'static> {
        BattleEngine::new(MoveCatalog::standard())
            .with_config(BattleConfig::default().with_status_mode(StatusMode::Persistent))
    }

    fn arsonist(name: &str) -> Creature {
        // 114 max HP at level 50, so burn deals 7 per turn
        TestCreatureBuilder::new(name, [39, 52, 43, 60, 50, 65])
            .with_moves(vec![MoveId::WillOWisp])
            .build()
    }

    fn count_events(events: &[BattleEvent], predicate: impl Fn(&BattleEvent) -> bool) -> usize {
        events.iter().filter(|event| predicate(event)).count()
    }

    #[test]
    fn test_mutual_burn_ends_in_a_draw() {
        // Arrange
        let (a, b) = (arsonist("Cinder"), arsonist("Ash"));

        // Act
        let result = persistent_engine().run(&a, &b, 50, 50, &mut predictable_rng());

        // Assert
        assert_eq!(result.outcome, BattleOutcome::Draw);
        assert_eq!(result.turns, 17);
        assert_eq!(result.final_hp.a, 0);
        assert_eq!(result.final_hp.b, 0);
        assert_eq!(result.log.last().unwrap(), "It's a draw! Both creatures fainted!");
        assert_eq!(result.summary(), "Draw! Both creatures fainted!");

        let trace = hp_trace(&result, Side::A, 114);
        assert_eq!(&trace[..4], &[114, 107, 100, 93]);
        assert!(result.log.contains(&"Cinder is hurt by its burn! (7 damage)".to_string()));
    }

    #[test]
    fn test_cosmetic_burn_never_deals_damage() {
        let (a, b) = (arsonist("Cinder"), arsonist("Ash"));

        let result = run_battle(&a, &b, 50, 50, &mut predictable_rng());

        assert_eq!(result.outcome, BattleOutcome::Timeout);
        assert_eq!(result.turns, 20);
        assert_eq!((result.final_hp.a, result.final_hp.b), (114, 114));
        assert_eq!(
            count_events(&result.events, |e| matches!(e, BattleEvent::StatusDamage { .. })),
            0
        );
        assert!(result.log.contains(&"Cinder was burned!".to_string()));
        assert!(result.log.contains(&"Ash was burned!".to_string()));
    }

    #[test]
    fn test_status_does_not_stack() {
        let (a, b) = (arsonist("Cinder"), arsonist("Ash"));

        let result = run_battle(&a, &b, 50, 50, &mut predictable_rng());

        // One application per side, every later attempt fails
        assert_eq!(
            count_events(&result.events, |e| matches!(e, BattleEvent::StatusApplied { .. })),
            2
        );
        assert_eq!(
            count_events(&result.events, |e| matches!(
                e,
                BattleEvent::ActionFailed {
                    reason: ActionFailureReason::AlreadyAfflicted,
                    ..
                }
            )),
            38
        );
        assert!(result.log.contains(&"But it failed!".to_string()));
    }

    #[test]
    fn test_status_move_respects_immunity() {
        // Arrange
        let zapper = TestCreatureBuilder::new("Zapper", [60, 50, 60, 50, 60, 90])
            .with_types(&["electric"])
            .with_moves(vec![MoveId::ThunderWave])
            .build();
        let mole = TestCreatureBuilder::new("Mole", [60, 50, 60, 50, 60, 30])
            .with_types(&["ground"])
            .with_moves(vec![MoveId::ThunderWave])
            .build();

        // Act
        let result = run_battle(&zapper, &mole, 50, 50, &mut predictable_rng());

        // Assert
        assert!(result.events.contains(&BattleEvent::ActionFailed {
            side: Side::A,
            reason: ActionFailureReason::TargetImmune,
        }));
        assert!(result.log.contains(&"It doesn't affect Mole...".to_string()));
        // Mole's own Thunder Wave still lands on Zapper
        assert!(result.events.contains(&BattleEvent::StatusApplied {
            target: Side::A,
            status: StatusEffect::Paralysis,
        }));
        assert!(!result.events.contains(&BattleEvent::StatusApplied {
            target: Side::B,
            status: StatusEffect::Paralysis,
        }));
    }

    #[test]
    fn test_secondary_effect_roll() {
        // Arrange: Body Slam (30% paralysis) against a sturdy target
        let slammer = TestCreatureBuilder::new("Slammer", [80, 80, 80, 80, 80, 90])
            .with_moves(vec![MoveId::BodySlam])
            .build();
        let target = TestCreatureBuilder::new("Target", [250, 10, 250, 10, 250, 10])
            .with_types(&["water"])
            .with_moves(vec![MoveId::Surf])
            .build();
        // accuracy, crit, variance, effect (0.2 < 0.3 triggers)
        let mut rng = TurnRng::new_for_test(vec![0.5, 0.5, 0.5, 0.2, 0.5, 0.5, 0.5, 0.5]);

        // Act
        let result = run_battle(&slammer, &target, 50, 50, &mut rng);

        // Assert
        let applied: Vec<&BattleEvent> = result
            .events
            .iter()
            .filter(|e| matches!(e, BattleEvent::StatusApplied { .. }))
            .collect();
        assert_eq!(
            applied.first(),
            Some(&&BattleEvent::StatusApplied {
                target: Side::B,
                status: StatusEffect::Paralysis,
            })
        );
        assert!(result.log.contains(&"Target was paralyzed!".to_string()));
    }

    #[test]
    fn test_no_effect_roll_on_fainted_target() {
        // Arrange: one Body Slam knocks the target out
        let slammer = TestCreatureBuilder::new("Slammer", [80, 150, 80, 80, 80, 90])
            .with_moves(vec![MoveId::BodySlam])
            .build();
        let fragile = TestCreatureBuilder::new("Fragile", [1, 10, 1, 10, 1, 10]).build();
        let mut rng = TurnRng::new_for_test(vec![0.5, 0.5, 0.5, 0.0]);

        // Act
        let result = run_battle(&slammer, &fragile, 50, 50, &mut rng);

        // Assert
        assert_eq!(result.outcome, BattleOutcome::Victory(Side::A));
        assert_eq!(result.turns, 0);
        assert_eq!(
            count_events(&result.events, |e| matches!(e, BattleEvent::StatusApplied { .. })),
            0
        );
        assert_eq!(rng.consumed(), 3);
    }
}
