use std::time::Duration;

const GAME_WIDTH: u16 = 15;
const GAME_HEIGHT: u16 = 10;
const INITIAL_LENGTH: usize = 3;
const FPS: u32 = 60;
// The snake moves once every this many frames
const FRAMES_PER_TICK: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub initial_length: usize,
    pub frame_budget: Duration,
    pub frames_per_tick: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
            initial_length: INITIAL_LENGTH,
            frame_budget: Duration::from_secs(1) / FPS,
            frames_per_tick: FRAMES_PER_TICK,
        }
    }
}

impl GameConfig {
    pub fn with_grid(width: u16, height: u16) -> Self {
        GameConfig {
            width,
            height,
            ..Default::default()
        }
    }
}
