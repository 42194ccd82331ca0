// Uniform random targeting for the automated opponent.
// The coordinate space is shuffled once and consumed in order, so no cell is
// ever fired at twice.

use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::player::Player;

/// Pre-shuffled queue of targets for one shooter.
#[derive(Debug, Clone)]
pub struct RandomTargeter {
    queue: Vec<(usize, usize)>,
}

impl RandomTargeter {
    /// Shuffle every cell `shooter` has not resolved on its radar yet.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, shooter: &Player) -> Self {
        let mut queue: Vec<(usize, usize)> = shooter
            .board()
            .size()
            .cells()
            .filter(|&(x, y)| shooter.check_point(x, y))
            .collect();
        queue.shuffle(rng);
        Self { queue }
    }

    /// Next target still open on `shooter`'s radar. Cells revealed in the
    /// meantime (kill halos) are dropped.
    pub fn next_target(&mut self, shooter: &Player) -> Option<(usize, usize)> {
        while let Some((x, y)) = self.queue.pop() {
            if shooter.check_point(x, y) {
                return Some((x, y));
            }
        }
        None
    }

    /// Targets left in the queue, including ones that may since have been revealed.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}
