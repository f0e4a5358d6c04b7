use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

use crate::error::SnekError;
use crate::grid::{Cell, Grid};
use crate::snek::Snek;

/// Picks apple cells uniformly among the cells the snake does not cover.
#[derive(Debug)]
pub struct AppleSpawner {
    rng: StdRng,
}

impl AppleSpawner {
    pub fn new() -> Self {
        AppleSpawner {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible placement, for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        AppleSpawner {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn spawn(&mut self, grid: &Grid, snek: &Snek) -> Result<Cell, SnekError> {
        // Choose among free cells so a nearly full board still terminates
        grid.cells()
            .filter(|cell| !snek.occupies(*cell))
            .choose(&mut self.rng)
            .ok_or(SnekError::BoardFull)
    }
}

impl Default for AppleSpawner {
    fn default() -> Self {
        Self::new()
    }
}
