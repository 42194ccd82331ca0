use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Plays a whole random match and checks every transition.
    #[test]
    fn random_match_keeps_invariants(seed in any::<u64>(), length in 5usize..=12, width in 5usize..=12) {
        let size = BoardSize::new(length, width).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        let Ok(mut game) = Game::new(size, "A", "B", &mut rng) else {
            return Ok(());
        };
        let mut targeters = [
            RandomTargeter::new(&mut rng, &game.players()[0]),
            RandomTargeter::new(&mut rng, &game.players()[1]),
        ];

        let mut shots = 0;
        while !game.is_finished() {
            shots += 1;
            prop_assert!(shots <= 2 * size.area(), "match did not terminate");
            let shooter = game.turn();
            let target = 1 - shooter;
            let alive_before = game.players()[target].ships_alive();
            let hits_before = game.players()[shooter].hits_made();
            let (x, y) = targeters[shooter].next_target(game.current_player()).unwrap();

            let report = game.shoot(x, y).unwrap();
            prop_assert!(report.accepted);
            let alive_after = game.players()[target].ships_alive();
            match report.outcome.unwrap() {
                ShotOutcome::Miss => {
                    prop_assert!(report.turn_passed);
                    prop_assert_eq!(game.turn(), target);
                    prop_assert_eq!(alive_after, alive_before);
                    prop_assert_eq!(game.players()[shooter].hits_made(), hits_before);
                }
                ShotOutcome::Hit => {
                    prop_assert!(!report.turn_passed);
                    prop_assert_eq!(game.turn(), shooter);
                    prop_assert_eq!(alive_after, alive_before);
                }
                ShotOutcome::Kill(i) => {
                    prop_assert!(!report.turn_passed);
                    prop_assert_eq!(alive_after, alive_before - 1);
                    let ship = game.players()[target].ship(i).unwrap();
                    prop_assert!(ship.is_destroyed());
                    let radar = game.players()[shooter].board().radar();
                    for (hx, hy) in ship.halo(size) {
                        prop_assert_ne!(radar.get(hx, hy).unwrap(), Cell::Empty);
                    }
                }
            }
            prop_assert_eq!(report.winner.is_some(), alive_after == 0);
        }

        let winner = game.winner().unwrap();
        prop_assert_eq!(game.status(), GameStatus::Finished { winner });
        prop_assert_eq!(game.players()[1 - winner].ships_alive(), 0);
        prop_assert!(game.players()[winner].ships_alive() > 0);
        prop_assert_eq!(game.turn(), game.host());

        let frozen = game.clone();
        for (x, y) in size.cells().take(10) {
            let report = game.shoot(x, y).unwrap();
            prop_assert!(!report.accepted);
            prop_assert_eq!(&game, &frozen);
        }
    }
}
