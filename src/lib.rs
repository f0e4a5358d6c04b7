//! Terminal snake: the game-loop core plus thin crossterm/ratatui adapters.
//!
//! The core (`grid`, `snek`, `apple`, `rules`, `score`, `game`, `scheduler`)
//! never touches the terminal. It consumes commands through
//! [`scheduler::InputSource`] and hands snapshots to [`scheduler::RenderSink`].

pub mod apple;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;
pub mod rules;
pub mod scheduler;
pub mod score;
pub mod snek;

pub use config::GameConfig;
pub use error::SnekError;
pub use game::{Command, Game, Phase, Snapshot};
pub use grid::{Cell, Grid};
pub use snek::{Direction, Snek};
