use std::io;
use std::thread;
use std::time::{Duration, Instant};

use log::info;

use crate::config::GameConfig;
use crate::error::SnekError;
use crate::game::{Command, Game, Snapshot};

/// Where commands come from. Must never block.
pub trait InputSource {
    /// The most recent unread command, if any.
    fn poll_command(&mut self) -> io::Result<Option<Command>>;
}

pub trait RenderSink {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()>;
}

pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&mut self, duration: Duration);
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Fixed-rate frame loop: poll, maybe tick, render, then wait out the rest
/// of the frame budget.
pub struct FrameScheduler {
    frame_budget: Duration,
    frames_per_tick: u64,
    frame_count: u64,
}

impl FrameScheduler {
    pub fn new(config: &GameConfig) -> Self {
        FrameScheduler {
            frame_budget: config.frame_budget,
            frames_per_tick: u64::from(config.frames_per_tick.max(1)),
            frame_count: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frame_count
    }

    pub fn run(
        &mut self,
        game: &mut Game,
        input: &mut impl InputSource,
        sink: &mut impl RenderSink,
        clock: &mut impl Clock,
    ) -> Result<(), SnekError> {
        while self.frame(game, input, sink, clock)? {}
        info!("Quit after {} frames", self.frame_count);
        Ok(())
    }

    /// One frame. Returns `false` once the player has quit; nothing is
    /// ticked or drawn in that frame.
    pub fn frame(
        &mut self,
        game: &mut Game,
        input: &mut impl InputSource,
        sink: &mut impl RenderSink,
        clock: &mut impl Clock,
    ) -> Result<bool, SnekError> {
        let started = clock.now();

        // At most one command per frame
        match input.poll_command()? {
            Some(Command::Quit) => return Ok(false),
            Some(command) => game.handle(command)?,
            None => {}
        }

        // The snake only moves every K frames
        if self.frame_count % self.frames_per_tick == 0 {
            game.tick()?;
        }

        sink.render(&game.snapshot())?;

        // Wait out the rest of the budget, never a negative sleep
        let elapsed = clock.now().saturating_duration_since(started);
        if let Some(rest) = self.frame_budget.checked_sub(elapsed) {
            if !rest.is_zero() {
                clock.sleep(rest);
            }
        }

        self.frame_count += 1;
        Ok(true)
    }
}
