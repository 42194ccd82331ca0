use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{fleet_sizes, generate_fleet, place_fleet, BoardError, BoardSize, Ship};

fn assert_valid_fleet(size: BoardSize, ships: &[Ship]) {
    for ship in ships {
        for (x, y) in ship.cells() {
            assert!(size.contains(x, y), "{:?} leaves the board", ship);
        }
    }
    for (i, a) in ships.iter().enumerate() {
        let halo = a.halo(size);
        for b in ships.iter().skip(i + 1) {
            for cell in b.cells() {
                assert!(!halo.contains(&cell), "{:?} touches {:?}", a, b);
            }
        }
    }
}

#[test]
fn test_five_by_five_fleet() {
    let size = BoardSize::new(5, 5).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    let ships = generate_fleet(size, &mut rng).unwrap();
    let sizes: Vec<usize> = ships.iter().map(|s| s.size()).collect();
    assert_eq!(sizes, vec![2, 1, 1]);
    assert_eq!(ships.iter().map(|s| s.cells().count()).sum::<usize>(), 4);
    assert_valid_fleet(size, &ships);
}

#[test]
fn test_same_seed_same_fleet() {
    let size = BoardSize::new(12, 9).unwrap();
    let a = generate_fleet(size, &mut SmallRng::seed_from_u64(99));
    let b = generate_fleet(size, &mut SmallRng::seed_from_u64(99));
    assert_eq!(a, b);
}

#[test]
fn test_sizes_placed_largest_first() {
    let size = BoardSize::new(8, 8).unwrap();
    let mut rng = SmallRng::seed_from_u64(3);
    let ships = place_fleet(size, &[1, 3, 2], &mut rng).unwrap();
    let sizes: Vec<usize> = ships.iter().map(|s| s.size()).collect();
    assert_eq!(sizes, vec![3, 2, 1]);
}

#[test]
fn test_exhaustion_is_reported() {
    // a 6-long ship fits nowhere on a 5x5 board
    let size = BoardSize::new(5, 5).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        place_fleet(size, &[6], &mut rng).unwrap_err(),
        BoardError::PlacementExhausted { size: 6 }
    );
    // at most nine isolated cells fit on a 5x5 board
    let crowded = place_fleet(size, &[1; 10], &mut rng);
    assert_eq!(crowded.unwrap_err(), BoardError::PlacementExhausted { size: 1 });
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn generated_fleets_are_valid(seed in any::<u64>(), length in 5usize..=26, width in 5usize..=26) {
        let size = BoardSize::new(length, width).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        match generate_fleet(size, &mut rng) {
            Ok(ships) => {
                let mut sizes: Vec<usize> = ships.iter().map(|s| s.size()).collect();
                sizes.sort_unstable_by(|a, b| b.cmp(a));
                prop_assert_eq!(sizes, fleet_sizes(size));
                for ship in &ships {
                    prop_assert_eq!(ship.hit_points(), ship.size());
                }
                assert_valid_fleet(size, &ships);
            }
            Err(e) => {
                let is_exhausted = matches!(e, BoardError::PlacementExhausted { .. });
                prop_assert!(is_exhausted);
            }
        }
    }
}
