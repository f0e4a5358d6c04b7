use crate::grid::{Cell, Grid};
use crate::snek::Snek;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crash {
    Wall,
    Body,
}

/// What happens if the head moves to a given cell this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Eat,
    Collide(Crash),
}

/// Classifies a prospective head before the snake is moved.
///
/// The current tail is a legal destination: it moves away on a
/// non-growing step, and a growing step can only happen onto the apple,
/// which never sits on the body. A one-cell snake therefore never hits
/// itself.
pub fn evaluate(new_head: Cell, grid: &Grid, snek: &Snek, apple: Cell) -> Outcome {
    if !grid.is_in_bounds(new_head) {
        return Outcome::Collide(Crash::Wall);
    }

    if new_head != snek.tail() && snek.occupies(new_head) {
        return Outcome::Collide(Crash::Body);
    }

    if new_head == apple {
        return Outcome::Eat;
    }

    Outcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snek::Direction;

    fn grid() -> Grid {
        Grid::new(10, 10)
    }

    #[test]
    fn test_plain_move_continues() {
        let snek = Snek::new(Cell::new(5, 5), Direction::Right, 3);
        let outcome = evaluate(snek.next_head(), &grid(), &snek, Cell::new(0, 0));
        assert_eq!(outcome, Outcome::Continue);
    }

    #[test]
    fn test_apple_is_eaten() {
        let snek = Snek::new(Cell::new(5, 5), Direction::Right, 3);
        let outcome = evaluate(snek.next_head(), &grid(), &snek, Cell::new(5, 6));
        assert_eq!(outcome, Outcome::Eat);
    }

    #[test]
    fn test_every_wall_collides() {
        let grid = grid();
        let cases = [
            (Cell::new(0, 4), Direction::Up),
            (Cell::new(9, 4), Direction::Down),
            (Cell::new(4, 0), Direction::Left),
            (Cell::new(4, 9), Direction::Right),
        ];

        for (head, dir) in cases {
            let snek = Snek::new(head, dir, 1);
            assert_eq!(
                evaluate(snek.next_head(), &grid, &snek, Cell::new(5, 5)),
                Outcome::Collide(Crash::Wall),
                "heading {:?} from {:?}",
                dir,
                head
            );
        }
    }

    #[test]
    fn test_body_collides() {
        // Head at (5,5) turning down into its own second ring.
        let snek = Snek::from_cells(
            [
                Cell::new(5, 5),
                Cell::new(5, 4),
                Cell::new(6, 4),
                Cell::new(6, 5),
                Cell::new(6, 6),
            ],
            Direction::Down,
        );

        assert_eq!(
            evaluate(snek.next_head(), &grid(), &snek, Cell::new(0, 0)),
            Outcome::Collide(Crash::Body)
        );
    }

    #[test]
    fn test_moving_into_vacating_tail_is_legal() {
        // A 2x2 loop: the head chases its own tail.
        let snek = Snek::from_cells(
            [
                Cell::new(5, 5),
                Cell::new(6, 5),
                Cell::new(6, 4),
                Cell::new(5, 4),
            ],
            Direction::Left,
        );

        assert_eq!(snek.next_head(), snek.tail());
        assert_eq!(
            evaluate(snek.next_head(), &grid(), &snek, Cell::new(0, 0)),
            Outcome::Continue
        );
    }

    #[test]
    fn test_wall_checked_before_apple() {
        let snek = Snek::new(Cell::new(0, 0), Direction::Up, 1);
        let outside = snek.next_head();
        assert_eq!(
            evaluate(outside, &grid(), &snek, outside),
            Outcome::Collide(Crash::Wall)
        );
    }

    #[test]
    fn test_single_cell_snek_never_hits_itself() {
        let snek = Snek::new(Cell::new(3, 3), Direction::Right, 1);
        assert_eq!(
            evaluate(snek.head(), &grid(), &snek, Cell::new(0, 0)),
            Outcome::Continue
        );
    }
}
