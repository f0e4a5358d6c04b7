use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Command;
use crate::scheduler::InputSource;
use crate::snek::Direction;

pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    // Ctrl+C first, a plain 'c' is unbound
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Command::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Command::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Command::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Command::Move(Direction::Right),
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Retry,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        TerminalInput
    }
}

impl InputSource for TerminalInput {
    fn poll_command(&mut self) -> io::Result<Option<Command>> {
        let mut latest = None;

        // Drain everything queued since the last frame, never waiting
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                // Only key presses, not repeats or releases
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                latest = merge(latest, command_for_key(key));
            }
        }
        Ok(latest)
    }
}

/// Latest command wins, except that a quit is never overwritten and a
/// retry is never overwritten by a move.
fn merge(current: Option<Command>, incoming: Option<Command>) -> Option<Command> {
    match (current, incoming) {
        (Some(Command::Quit), _) => Some(Command::Quit),
        (Some(Command::Retry), Some(Command::Move(_))) => Some(Command::Retry),
        (current, None) => current,
        (_, incoming) => incoming,
    }
}
