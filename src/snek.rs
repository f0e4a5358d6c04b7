use std::collections::VecDeque;

use crate::grid::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// (row, column) step for one move.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Body cells head-first, plus the heading.
#[derive(Clone, Debug, PartialEq)]
pub struct Snek {
    body: VecDeque<Cell>,
    direction: Direction,
}

impl Snek {
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        // Straight line trailing behind the head
        let (d_row, d_col) = direction.opposite().delta();
        let mut body = VecDeque::with_capacity(length.max(1));
        let mut cell = head;
        for _ in 0..length.max(1) {
            body.push_back(cell);
            cell = cell.offset(d_row, d_col);
        }

        Snek { body, direction }
    }

    /// Builds a snake from explicit cells, head first.
    ///
    /// Panics if `cells` is empty.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>, direction: Direction) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        assert!(!body.is_empty(), "a snek needs at least a head");
        Snek { body, direction }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn body(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn set_direction(&mut self, requested: Direction) {
        // Turning straight back is silently ignored
        if requested != self.direction.opposite() {
            self.direction = requested;
        }
    }

    /// Where the head lands on the next move, without moving.
    pub fn next_head(&self) -> Cell {
        let (d_row, d_col) = self.direction.delta();
        self.head().offset(d_row, d_col)
    }

    pub fn advance(&mut self, grow: bool) -> Cell {
        let new_head = self.next_head();
        self.body.push_front(new_head);

        // Remove tail unless growing
        if !grow {
            self.body.pop_back();
        }
        new_head
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }
}
