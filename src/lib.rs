#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod persistence;
mod placement;
pub mod prelude;
mod player;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LogFilter, LOG_ENV};
pub use placement::{generate_fleet, place_fleet};
pub use player::*;
pub use ship::*;
