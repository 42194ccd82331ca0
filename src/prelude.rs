//! Commonly used types and utilities for ease of import.

pub use crate::{
    BoardError, BoardSize, Cell, Game, GameStatus, Player, RandomTargeter, Ship, ShotOutcome,
    ShotReport,
};
