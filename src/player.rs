//! One side of a match: board, fleet and shot counters.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, ShotOutcome};
use crate::config::BoardSize;
use crate::placement::{self, Layout};
use crate::ship::Ship;

/// A player owns its board and fleet exclusively.
///
/// `layout` maps every map cell to the index of the live ship segment on it,
/// so incoming shots resolve without scanning the fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    name: String,
    board: Board,
    ships: Vec<Ship>,
    layout: Layout,
    ships_alive: usize,
    shots_made: usize,
    hits_made: usize,
}

impl Player {
    /// Create a player with a randomly generated fleet.
    pub fn generate<R: Rng + ?Sized>(
        name: impl Into<String>,
        size: BoardSize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let ships = placement::generate_fleet(size, rng)?;
        Self::from_fleet(name, size, ships)
    }

    /// Create a player from an explicit fleet. Every ship must be undamaged,
    /// lie on the board and keep a one-cell gap to every other ship.
    pub fn from_fleet(
        name: impl Into<String>,
        size: BoardSize,
        ships: Vec<Ship>,
    ) -> Result<Self, BoardError> {
        let mut board = Board::new(size);
        let mut layout: Layout = vec![None; size.area()];
        for (i, ship) in ships.iter().enumerate() {
            if ship.hit_points() != ship.size() {
                return Err(BoardError::ShipDamaged);
            }
            if ship.cells().any(|(x, y)| !size.contains(x, y)) {
                return Err(BoardError::ShipOutOfBounds);
            }
            if !placement::has_clearance(ship, size, &layout) {
                return Err(BoardError::ShipTooClose);
            }
            placement::occupy(&mut layout, size, ship, i)?;
            for (x, y) in ship.cells() {
                board.map_mut().set_ship(x, y)?;
            }
        }
        let ships_alive = ships.len();
        Ok(Player {
            name: name.into(),
            board,
            ships,
            layout,
            ships_alive,
            shots_made: 0,
            hits_made: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Ship by fleet index.
    pub fn ship(&self, index: usize) -> Result<&Ship, BoardError> {
        self.ships.get(index).ok_or(BoardError::InvalidShipIndex(index))
    }

    pub fn ships_alive(&self) -> usize {
        self.ships_alive
    }

    pub fn shots_made(&self) -> usize {
        self.shots_made
    }

    pub fn hits_made(&self) -> usize {
        self.hits_made
    }

    pub fn is_defeated(&self) -> bool {
        self.ships_alive == 0
    }

    /// Index of the live ship segment at (x, y), if any.
    pub fn ship_at(&self, x: usize, y: usize) -> Option<usize> {
        let idx = self.board.size().index(x, y).ok()?;
        self.layout[idx]
    }

    /// A legal target is on the board and not yet resolved on the radar.
    pub fn check_point(&self, x: usize, y: usize) -> bool {
        self.board.is_on_board(x, y) && self.board.radar().is_empty(x, y).unwrap_or(false)
    }

    /// Record the outcome of a shot this player fired at (x, y).
    ///
    /// On a kill every still-empty radar cell in the destroyed ship's halo
    /// is revealed as water.
    pub fn mark_shot(
        &mut self,
        x: usize,
        y: usize,
        outcome: ShotOutcome,
        destroyed: Option<&Ship>,
    ) -> Result<(), BoardError> {
        if let (ShotOutcome::Kill(i), None) = (outcome, destroyed) {
            return Err(BoardError::InvalidShipIndex(i));
        }
        if !self.board.radar().is_empty(x, y)? {
            return Err(BoardError::AlreadyShot { x, y });
        }
        self.shots_made += 1;
        match outcome {
            ShotOutcome::Miss => self.board.radar_mut().set_water(x, y)?,
            ShotOutcome::Hit => {
                self.hits_made += 1;
                self.board.radar_mut().set_hit(x, y)?;
            }
            ShotOutcome::Kill(_) => {
                self.hits_made += 1;
                self.board.radar_mut().set_hit(x, y)?;
                let size = self.board.size();
                for (hx, hy) in destroyed.map(|s| s.halo(size)).unwrap_or_default() {
                    if self.board.radar().is_empty(hx, hy)? {
                        self.board.radar_mut().set_water(hx, hy)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Resolve an incoming shot against this player's fleet.
    ///
    /// Nothing is written if the ship under (x, y) cannot take the damage.
    pub fn receive_shot(&mut self, x: usize, y: usize) -> Result<ShotOutcome, BoardError> {
        let idx = self.board.size().index(x, y)?;
        let Some(ship_index) = self.layout[idx] else {
            self.board.map_mut().set_water(x, y)?;
            return Ok(ShotOutcome::Miss);
        };
        let ship = self
            .ships
            .get_mut(ship_index)
            .ok_or(BoardError::InvalidShipIndex(ship_index))?;
        ship.receive_shot()?;
        let destroyed = ship.is_destroyed();
        self.layout[idx] = None;
        self.board.map_mut().set_hit(x, y)?;
        if destroyed {
            self.ships_alive -= 1;
            Ok(ShotOutcome::Kill(ship_index))
        } else {
            Ok(ShotOutcome::Hit)
        }
    }

    /// Check the invariants of a player restored from outside, such as a
    /// save file, against the board size of its match.
    pub(crate) fn validate(&self, size: BoardSize) -> Result<(), BoardError> {
        let board = &self.board;
        if board.size() != size
            || !board.map().is_consistent(size)
            || !board.radar().is_consistent(size)
        {
            return Err(BoardError::CorruptState("grid does not match board size"));
        }
        if self.layout.len() != size.area() {
            return Err(BoardError::CorruptState("layout does not match board size"));
        }
        let longest = size.length().max(size.width());
        if self.ships.iter().any(|s| s.size() > longest || !s.is_within(size)) {
            return Err(BoardError::CorruptState("ship outside the board"));
        }

        let mut segments = vec![0usize; self.ships.len()];
        for ((x, y), slot) in size.cells().zip(self.layout.iter()) {
            let Some(i) = *slot else { continue };
            let ship = self
                .ships
                .get(i)
                .ok_or(BoardError::CorruptState("layout points past the fleet"))?;
            if !ship.contains(x, y) {
                return Err(BoardError::CorruptState("layout disagrees with ship geometry"));
            }
            segments[i] += 1;
        }
        if self.ships.iter().zip(&segments).any(|(s, &n)| s.hit_points() != n) {
            return Err(BoardError::CorruptState("hit points disagree with live segments"));
        }
        if self.ships.iter().filter(|s| !s.is_destroyed()).count() != self.ships_alive {
            return Err(BoardError::CorruptState("ships alive disagrees with fleet"));
        }
        Ok(())
    }
}
