//! Ship geometry and damage tracking.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;
use crate::config::BoardSize;

/// Direction a ship extends from its anchor cell.
///
/// `x` grows to the east and `y` grows to the south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    fn step(self) -> (isize, isize) {
        match self {
            Orientation::North => (0, -1),
            Orientation::East => (1, 0),
            Orientation::South => (0, 1),
            Orientation::West => (-1, 0),
        }
    }
}

/// A placed ship: immutable geometry plus a hit point counter.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    size: usize,
    hit_points: usize,
    x: usize,
    y: usize,
    orientation: Orientation,
}

impl Ship {
    /// Place a ship of `size` cells at (`x`, `y`) extending along `orientation`.
    /// Fails with [`BoardError::ShipOutOfBounds`] if any cell leaves `bounds`.
    pub fn new(
        size: usize,
        x: usize,
        y: usize,
        orientation: Orientation,
        bounds: BoardSize,
    ) -> Result<Self, BoardError> {
        if size == 0 || !bounds.contains(x, y) {
            return Err(BoardError::ShipOutOfBounds);
        }
        let (dx, dy) = orientation.step();
        let reach = size as isize - 1;
        let end_x = x as isize + dx * reach;
        let end_y = y as isize + dy * reach;
        if end_x < 0 || end_y < 0 || !bounds.contains(end_x as usize, end_y as usize) {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Ship {
            size,
            hit_points: size,
            x,
            y,
            orientation,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn hit_points(&self) -> usize {
        self.hit_points
    }

    /// Anchor cell (x, y).
    pub fn anchor(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells covered by the ship, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (dx, dy) = self.orientation.step();
        let (x, y) = (self.x as isize, self.y as isize);
        (0..self.size as isize).map(move |i| ((x + dx * i) as usize, (y + dy * i) as usize))
    }

    /// Returns `true` if the ship covers (`x`, `y`).
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.cells().any(|c| c == (x, y))
    }

    /// Occupied cells plus their 8-neighbourhoods, clipped to `bounds`.
    pub fn halo(&self, bounds: BoardSize) -> Vec<(usize, usize)> {
        let mut cells = BTreeSet::new();
        for (x, y) in self.cells() {
            for nx in x.saturating_sub(1)..=x + 1 {
                for ny in y.saturating_sub(1)..=y + 1 {
                    if bounds.contains(nx, ny) {
                        cells.insert((nx, ny));
                    }
                }
            }
        }
        cells.into_iter().collect()
    }

    /// Returns `true` if the geometry fits `bounds` and the hit points are
    /// no more than the size.
    pub(crate) fn is_within(&self, bounds: BoardSize) -> bool {
        self.hit_points <= self.size
            && Ship::new(self.size, self.x, self.y, self.orientation, bounds).is_ok()
    }

    /// Take one point of damage.
    pub fn receive_shot(&mut self) -> Result<(), BoardError> {
        if self.hit_points == 0 {
            return Err(BoardError::ShipDestroyed);
        }
        self.hit_points -= 1;
        Ok(())
    }

    pub fn is_destroyed(&self) -> bool {
        self.hit_points == 0
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ size: {}, anchor: ({}, {}), orientation: {:?}, hit_points: {} }}",
            self.size, self.x, self.y, self.orientation, self.hit_points,
        )
    }
}
