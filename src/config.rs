//! Board dimension limits and the fleet composition rule.

use alloc::vec::Vec;

use crate::common::BoardError;

pub const MIN_LENGTH: usize = 5;
pub const MAX_LENGTH: usize = 26;
pub const MIN_WIDTH: usize = 5;
pub const MAX_WIDTH: usize = 26;

pub const PLAYER_COUNT: usize = 2;
/// Index of the locally controlled player.
pub const HOST_INDEX: usize = 0;

/// Validated board dimensions shared by both players.
///
/// `x` runs along the length (`0..length`), `y` along the width (`0..width`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSize {
    length: usize,
    width: usize,
}

impl BoardSize {
    /// Fails with [`BoardError::InvalidDimensions`] outside `5..=26` on either axis.
    pub fn new(length: usize, width: usize) -> Result<Self, BoardError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) || !(MIN_WIDTH..=MAX_WIDTH).contains(&width)
        {
            return Err(BoardError::InvalidDimensions { length, width });
        }
        Ok(Self { length, width })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells on the board.
    pub fn area(&self) -> usize {
        self.length * self.width
    }

    /// Bounds check for a coordinate.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.length && y < self.width
    }

    /// Row-major offset of an on-board coordinate.
    pub(crate) fn index(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if self.contains(x, y) {
            Ok(x * self.width + y)
        } else {
            Err(BoardError::IndexOutOfBounds { x, y })
        }
    }

    /// Every coordinate on the board.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let width = self.width;
        (0..self.length).flat_map(move |x| (0..width).map(move |y| (x, y)))
    }
}

/// Ship sizes for a board, largest first.
///
/// With `m = 3 + 2 * (min(length, width) / 10)` there are `m - k` ships of each
/// size `k` in `1..m`.
pub fn fleet_sizes(size: BoardSize) -> Vec<usize> {
    let m = 3 + 2 * (size.length.min(size.width) / 10);
    (1..m).rev().flat_map(|k| core::iter::repeat(k).take(m - k)).collect()
}
