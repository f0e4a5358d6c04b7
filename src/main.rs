use std::fs::File;
use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{Config, LevelFilter, WriteLogger};

use snek::apple::AppleSpawner;
use snek::input::TerminalInput;
use snek::render::TerminalRenderer;
use snek::scheduler::{FrameScheduler, SystemClock};
use snek::score::HighScores;
use snek::error::session_result;
use snek::{Game, GameConfig, SnekError};

const LOG_FILE: &str = "snek.log";

fn main() -> Result<(), SnekError> {
    // Set up logging before anything else
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create(LOG_FILE)?,
    )?;

    info!("Starting snek");

    let config = GameConfig::default();
    // Scores only live as long as this process
    let high_scores = HighScores::new();
    let mut game = Game::new(&config, high_scores, AppleSpawner::new())?;

    let mut renderer = TerminalRenderer::new(setup_terminal()?);
    let result = FrameScheduler::new(&config).run(
        &mut game,
        &mut TerminalInput::new(),
        &mut renderer,
        &mut SystemClock,
    );
    match &result {
        Ok(()) => info!("Bye, best score {:?}", game.high_scores().top().first()),
        Err(e) => error!("Game loop failed: {}", e),
    }

    // Always hand the terminal back, even when the loop failed
    let restored = restore_terminal(renderer.terminal_mut());
    session_result(result, restored)
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
