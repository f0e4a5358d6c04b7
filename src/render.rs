use std::io;

use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame, Terminal,
};

use crate::game::{Phase, Snapshot};
use crate::scheduler::RenderSink;

const SCORE_HEIGHT: u16 = 3;
const SIDE_WIDTH: u16 = 14;
const BLINK_FRAMES: u64 = 30;

/// Generic over the backend so tests can draw into a `TestBackend`.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    last_phase: Option<Phase>,
    frames_in_phase: u64,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        TerminalRenderer {
            terminal,
            last_phase: None,
            frames_in_phase: 0,
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn frames_in_phase(&self) -> u64 {
        self.frames_in_phase
    }
}

impl<B: Backend> RenderSink for TerminalRenderer<B> {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        if self.last_phase == Some(snapshot.phase) {
            self.frames_in_phase += 1;
        } else {
            self.last_phase = Some(snapshot.phase);
            self.frames_in_phase = 0;
        }

        // Blink the game-over banner every BLINK_FRAMES frames
        let blink_on = (self.frames_in_phase / BLINK_FRAMES) % 2 == 0;
        let banner = snapshot.phase == Phase::Dead && blink_on;
        self.terminal.draw(|frame| draw(frame, snapshot, banner))?;
        Ok(())
    }
}

fn draw(frame: &mut Frame, snapshot: &Snapshot, banner: bool) {
    let area = frame.area();
    let field_width = snapshot.grid.width() * 2 + 2;
    let field_height = snapshot.grid.height() + 2;
    let total_width = field_width + SIDE_WIDTH;
    let total_height = SCORE_HEIGHT + field_height + 1;

    // Centre everything, clipped to the screen so small terminals don't panic
    let x = area.x + area.width.saturating_sub(total_width) / 2;
    let y = area.y + area.height.saturating_sub(total_height) / 2;
    let below = y + SCORE_HEIGHT;
    let side_x = x + field_width;

    let score_area = area.intersection(Rect::new(x, y, field_width, SCORE_HEIGHT));
    let field_area = area.intersection(Rect::new(x, below, field_width, field_height));
    let side_area = area.intersection(Rect::new(side_x, below, SIDE_WIDTH, field_height));
    let message_area = area.intersection(Rect::new(x, below + field_height, total_width, 1));

    let score_line = Line::from(vec![
        Span::raw("SCORE").bold(),
        Span::raw("  |  "),
        Span::raw(snapshot.score.to_string()),
    ]);
    frame.render_widget(
        Paragraph::new(score_line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        score_area,
    );

    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(field_area);
    frame.render_widget(block, field_area);
    frame.render_widget(Playfield(snapshot), inner);

    if banner {
        let mid_row = inner.y + inner.height / 2;
        let mid = inner.intersection(Rect::new(inner.x, mid_row, inner.width, 1));
        frame.render_widget(
            Paragraph::new("GAME OVER")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow).bold()),
            mid,
        );
    }

    let lines: Vec<Line> = snapshot
        .high_scores
        .iter()
        .enumerate()
        .map(|(i, score)| Line::from(format!("{:>2}. {:>4}", i + 1, score)))
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().title("Best").borders(Borders::ALL)),
        side_area,
    );

    frame.render_widget(
        Paragraph::new(snapshot.message.as_str()).alignment(Alignment::Center),
        message_area,
    );
}

// Each grid cell is two terminal columns wide
struct Playfield<'a>(&'a Snapshot);

impl Widget for Playfield<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut paint = |row: i32, col: i32, color: Color| {
            let (Ok(row), Ok(col)) = (u16::try_from(row), u16::try_from(col)) else {
                return;
            };
            for dx in 0..2 {
                let x = area.x.saturating_add(col.saturating_mul(2) + dx);
                let y = area.y.saturating_add(row);
                if x >= area.right() || y >= area.bottom() {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ").set_bg(color);
                }
            }
        };

        for cell in &self.0.snek {
            paint(cell.row, cell.col, Color::Green);
        }
        paint(self.0.apple.row, self.0.apple.col, Color::Red);
    }
}
