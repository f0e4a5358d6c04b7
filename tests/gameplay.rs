use std::io;
use std::time::{Duration, Instant};

use snek::apple::AppleSpawner;
use snek::rules::{self, Crash, Outcome};
use snek::scheduler::{Clock, FrameScheduler, InputSource, RenderSink};
use snek::score::HighScores;
use snek::{Cell, Command, Direction, Game, GameConfig, Grid, Phase, Snapshot, Snek};

struct Script(Vec<Option<Command>>);

impl InputSource for Script {
    fn poll_command(&mut self) -> io::Result<Option<Command>> {
        if self.0.is_empty() {
            return Ok(Some(Command::Quit));
        }
        Ok(self.0.remove(0))
    }
}

#[derive(Default)]
struct LastFrame(Option<Snapshot>, usize);

impl RenderSink for LastFrame {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        self.0 = Some(snapshot.clone());
        self.1 += 1;
        Ok(())
    }
}

struct NoTime(Instant);

impl Clock for NoTime {
    fn now(&self) -> Instant {
        self.0
    }

    fn sleep(&mut self, duration: Duration) {
        self.0 += duration;
    }
}

fn config() -> GameConfig {
    GameConfig {
        frames_per_tick: 1,
        ..GameConfig::with_grid(10, 10)
    }
}

#[test]
fn test_die_retry_die_keeps_history() {
    let config = config();
    let mut game = Game::new(&config, HighScores::new(), AppleSpawner::seeded(2024)).unwrap();

    for round in 0..12 {
        while game.phase() == Phase::Playing {
            game.tick().unwrap();
        }
        assert!(game.high_scores().top().len() <= 10);
        assert_eq!(game.high_scores().len(), round + 1);
        game.handle(Command::Retry).unwrap();
        assert_eq!(game.score(), 0);
    }

    let top = game.high_scores().top();
    assert_eq!(top.len(), 10);
    assert!(top.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_scheduler_runs_a_whole_game() {
    let config = config();
    let mut game = Game::new(&config, HighScores::new(), AppleSpawner::seeded(8)).unwrap();

    // Straight into the right wall from (5,5): four moves, then a crash
    let mut input = Script(vec![None; 8]);
    let mut sink = LastFrame::default();
    let mut clock = NoTime(Instant::now());

    FrameScheduler::new(&config)
        .run(&mut game, &mut input, &mut sink, &mut clock)
        .unwrap();

    let last = sink.0.unwrap();
    assert_eq!(sink.1, 8);
    assert_eq!(last.phase, Phase::Dead);
    assert_eq!(last.high_scores.len(), 1);
    assert_eq!(last.snek[0].col, 9);
}

#[test]
fn test_snek_chases_its_tail_forever() {
    let grid = Grid::new(10, 10);
    let mut snek = Snek::from_cells(
        [
            Cell::new(5, 5),
            Cell::new(6, 5),
            Cell::new(6, 4),
            Cell::new(5, 4),
        ],
        Direction::Left,
    );
    let turns = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];

    for step in 0..32 {
        snek.set_direction(turns[step % 4]);
        let outcome = rules::evaluate(snek.next_head(), &grid, &snek, Cell::new(0, 0));
        assert_eq!(outcome, Outcome::Continue, "step {}", step);
        snek.advance(false);
        assert_eq!(snek.len(), 4);
    }
}

#[test]
fn test_wall_on_every_side() {
    let config = config();
    for dir in Direction::ALL {
        let mut game = Game::new(&config, HighScores::new(), AppleSpawner::seeded(3)).unwrap();
        if dir == Direction::Left {
            // Can't reverse straight away; go round first
            game.handle(Command::Move(Direction::Up)).unwrap();
            game.tick().unwrap();
        }
        game.handle(Command::Move(dir)).unwrap();

        let mut last = None;
        while game.phase() == Phase::Playing {
            last = game.tick().unwrap();
        }
        let crashed = Some(Outcome::Collide(Crash::Wall));
        assert_eq!(last, crashed, "heading {:?}", dir);
        assert!(!game.snek().body().any(|c: Cell| c.row < 0 || c.col < 0));
    }
}
