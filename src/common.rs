//! Common types for the game core: errors and shot outcomes.

/// Result of a shot resolved against a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot damaged a ship that is still afloat.
    Hit,
    /// Shot destroyed a ship, carrying its index in the owner's fleet.
    Kill(usize),
}

impl ShotOutcome {
    /// Returns `true` for hits and kills.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by board, player and game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board dimensions outside the supported range.
    InvalidDimensions { length: usize, width: usize },
    /// Coordinate is outside the board.
    IndexOutOfBounds { x: usize, y: usize },
    /// Ship does not fit inside the board.
    ShipOutOfBounds,
    /// Ship touches or overlaps another ship.
    ShipTooClose,
    /// Ran out of placement candidates before the fleet was complete.
    PlacementExhausted { size: usize },
    /// Damage applied to a ship that is already destroyed.
    ShipDestroyed,
    /// Fleet handed over with a ship that has already taken damage.
    ShipDamaged,
    /// Match started with a player who has no ships afloat.
    PlayerDefeated(usize),
    /// Restored state breaks a board or match invariant.
    CorruptState(&'static str),
    /// Shot recorded twice on the same radar cell.
    AlreadyShot { x: usize, y: usize },
    /// Ship index does not exist in the fleet.
    InvalidShipIndex(usize),
    /// Player index is neither 0 nor 1.
    InvalidPlayer(usize),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use crate::config::{MAX_LENGTH, MAX_WIDTH, MIN_LENGTH, MIN_WIDTH};
        match self {
            BoardError::InvalidDimensions { length, width } => write!(
                f,
                "Field length must be in range [{}; {}] and width in range [{}; {}], actually: {}x{}",
                MIN_LENGTH, MAX_LENGTH, MIN_WIDTH, MAX_WIDTH, length, width
            ),
            BoardError::IndexOutOfBounds { x, y } => {
                write!(f, "IndexOutOfBounds: x={}, y={}", x, y)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipTooClose => write!(f, "Ship touches or overlaps another ship"),
            BoardError::PlacementExhausted { size } => {
                write!(f, "Unable to place ship of size {}: no candidates left", size)
            }
            BoardError::ShipDestroyed => write!(f, "Ship is already destroyed"),
            BoardError::ShipDamaged => write!(f, "Ship has already taken damage"),
            BoardError::PlayerDefeated(i) => write!(f, "Player {} has no ships afloat", i),
            BoardError::CorruptState(what) => write!(f, "Corrupt game state: {}", what),
            BoardError::AlreadyShot { x, y } => {
                write!(f, "Shot was already made at x={}, y={}", x, y)
            }
            BoardError::InvalidShipIndex(i) => write!(f, "Ship index {} is out of range", i),
            BoardError::InvalidPlayer(i) => write!(f, "Player index {} is out of range", i),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
