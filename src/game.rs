use log::{debug, error, info, warn};

use crate::apple::AppleSpawner;
use crate::config::GameConfig;
use crate::error::SnekError;
use crate::grid::{Cell, Grid};
use crate::rules::{self, Outcome};
use crate::score::{HighScores, ScoreTracker};
use crate::snek::{Direction, Snek};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Retry,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Dead,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub grid: Grid,
    pub snek: Vec<Cell>,
    pub apple: Cell,
    pub score: u32,
    pub high_scores: Vec<u32>,
    pub phase: Phase,
    pub message: String,
}

pub struct Game {
    grid: Grid,
    initial_length: usize,
    snek: Snek,
    apple: Cell,
    score: ScoreTracker,
    phase: Phase,
    pending: Option<Direction>,
    spawner: AppleSpawner,
}

impl Game {
    /// Starts the first game of the run. `high_scores` outlives every retry.
    ///
    /// An `initial_length` too long to fit left of centre is cut down.
    pub fn new(
        config: &GameConfig,
        high_scores: HighScores,
        mut spawner: AppleSpawner,
    ) -> Result<Self, SnekError> {
        let grid = Grid::new(config.width, config.height);
        let snek = starting_snek(&grid, config.initial_length);
        if snek.len() < config.initial_length {
            warn!(
                "Initial length {} does not fit, starting at {}",
                config.initial_length,
                snek.len()
            );
        }
        let apple = spawner.spawn(&grid, &snek)?;

        info!("New game on a {}x{} grid", grid.width(), grid.height());

        Ok(Game {
            grid,
            initial_length: config.initial_length,
            snek,
            apple,
            score: ScoreTracker::new(high_scores),
            phase: Phase::Playing,
            pending: None,
            spawner,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score.current()
    }

    pub fn snek(&self) -> &Snek {
        &self.snek
    }

    pub fn apple(&self) -> Cell {
        self.apple
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn high_scores(&self) -> &HighScores {
        self.score.high_scores()
    }

    /// Quit is left to the caller's loop.
    pub fn handle(&mut self, command: Command) -> Result<(), SnekError> {
        match (self.phase, command) {
            // Buffered until the next tick, latest wins
            (Phase::Playing, Command::Move(dir)) => self.pending = Some(dir),
            (Phase::Dead, Command::Retry) => self.restart()?,
            _ => {}
        }
        Ok(())
    }

    /// Returns `None` while dead.
    pub fn tick(&mut self) -> Result<Option<Outcome>, SnekError> {
        if self.phase == Phase::Dead {
            return Ok(None);
        }

        if let Some(dir) = self.pending.take() {
            self.snek.set_direction(dir);
        }

        // Classify the move before touching the snake
        let next = self.snek.next_head();
        let outcome = rules::evaluate(next, &self.grid, &self.snek, self.apple);

        match outcome {
            Outcome::Collide(crash) => {
                // The snake stays where it was
                self.phase = Phase::Dead;
                self.score.commit();
                info!(
                    "Crashed into {:?} at {:?}, final score {}",
                    crash,
                    next,
                    self.score.current()
                );
            }
            Outcome::Eat => {
                self.snek.advance(true);
                self.score.increment();
                debug!("Ate apple at {:?}, score {}", next, self.score.current());

                // Only fails once the snake covers the whole grid
                self.apple = match self.spawner.spawn(&self.grid, &self.snek) {
                    Ok(apple) => apple,
                    Err(e) => {
                        error!("Snek of length {} fills the grid", self.snek.len());
                        return Err(e);
                    }
                };
            }
            Outcome::Continue => {
                self.snek.advance(false);
            }
        }

        Ok(Some(outcome))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid,
            snek: self.snek.body().collect(),
            apple: self.apple,
            score: self.score.current(),
            high_scores: self.score.high_scores().top().to_vec(),
            phase: self.phase,
            message: phase_message(self.phase, self.score.current()).to_string(),
        }
    }

    fn restart(&mut self) -> Result<(), SnekError> {
        // Fresh snake, apple and score; the high scores carry over
        self.snek = starting_snek(&self.grid, self.initial_length);
        self.apple = self.spawner.spawn(&self.grid, &self.snek)?;
        self.score.reset();
        self.pending = None;
        self.phase = Phase::Playing;

        let played = self.high_scores().len();
        info!("Retrying, {} games played so far", played);
        Ok(())
    }
}

fn starting_snek(grid: &Grid, length: usize) -> Snek {
    let head = Cell::new(i32::from(grid.height() / 2), i32::from(grid.width() / 2));

    // The body trails left of the head and must stay on the grid
    let room = usize::from(grid.width() / 2) + 1;
    Snek::new(head, Direction::Right, length.min(room))
}

pub fn phase_message(phase: Phase, score: u32) -> &'static str {
    match (phase, score) {
        (Phase::Playing, _) => "Arrows/WASD to steer, Q to quit",
        (Phase::Dead, 0) => "Ouch! Press R to retry or Q to quit",
        (Phase::Dead, 1..=4) => "Not bad! Press R to retry or Q to quit",
        (Phase::Dead, 5..=14) => "Great run! Press R to retry or Q to quit",
        (Phase::Dead, _) => "Legendary! Press R to retry or Q to quit",
    }
}
