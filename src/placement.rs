//! Random fleet generation.
//!
//! Every `(x, y, orientation)` triple on the board is shuffled once; ships are
//! then placed largest first, each taking the first remaining candidate that
//! fits on the board and keeps a one-cell gap (diagonals included) to every
//! ship already placed. The candidate cursor is shared and never rewound.

use alloc::vec;
use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::common::BoardError;
use crate::config::{fleet_sizes, BoardSize};
use crate::ship::{Orientation, Ship};

/// Per-cell index of the ship occupying it.
pub(crate) type Layout = Vec<Option<usize>>;

/// Generate a random fleet for `size` using the fleet composition rule.
pub fn generate_fleet<R: Rng + ?Sized>(
    size: BoardSize,
    rng: &mut R,
) -> Result<Vec<Ship>, BoardError> {
    place_fleet(size, &fleet_sizes(size), rng)
}

/// Place ships of the given sizes. Sizes are processed largest first
/// regardless of input order.
pub fn place_fleet<R: Rng + ?Sized>(
    size: BoardSize,
    ship_sizes: &[usize],
    rng: &mut R,
) -> Result<Vec<Ship>, BoardError> {
    let mut candidates: Vec<(usize, usize, Orientation)> = size
        .cells()
        .flat_map(|(x, y)| Orientation::ALL.into_iter().map(move |o| (x, y, o)))
        .collect();
    candidates.shuffle(rng);

    let mut sizes = ship_sizes.to_vec();
    sizes.sort_unstable_by(|a, b| b.cmp(a));

    let mut layout: Layout = vec![None; size.area()];
    let mut ships = Vec::with_capacity(sizes.len());
    let mut cursor = candidates.into_iter();

    for ship_size in sizes {
        let ship = loop {
            let (x, y, orientation) = cursor
                .next()
                .ok_or(BoardError::PlacementExhausted { size: ship_size })?;
            let ship = match Ship::new(ship_size, x, y, orientation, size) {
                Ok(ship) => ship,
                Err(_) => continue,
            };
            if has_clearance(&ship, size, &layout) {
                break ship;
            }
        };
        occupy(&mut layout, size, &ship, ships.len())?;
        ships.push(ship);
    }
    log::debug!("placed fleet of {} ships", ships.len());
    Ok(ships)
}

/// Returns `true` if no cell of the ship's halo is occupied in `layout`.
pub(crate) fn has_clearance(ship: &Ship, size: BoardSize, layout: &Layout) -> bool {
    ship.halo(size)
        .into_iter()
        .all(|(x, y)| size.index(x, y).map_or(false, |i| layout[i].is_none()))
}

/// Record ship `index` on every cell it covers.
pub(crate) fn occupy(
    layout: &mut Layout,
    size: BoardSize,
    ship: &Ship,
    index: usize,
) -> Result<(), BoardError> {
    for (x, y) in ship.cells() {
        layout[size.index(x, y)?] = Some(index);
    }
    Ok(())
}
