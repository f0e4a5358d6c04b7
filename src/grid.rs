/// Rows grow downwards, columns to the right. Signed so a head one step
/// past a wall can still be represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Cell { row, col }
    }

    pub fn offset(&self, d_row: i32, d_col: i32) -> Cell {
        Cell {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Self {
        Grid { width, height }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        (0..i32::from(self.height)).contains(&cell.row)
            && (0..i32::from(self.width)).contains(&cell.col)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (width, height) = (i32::from(self.width), i32::from(self.height));
        // Row by row
        (0..height).flat_map(move |row| (0..width).map(move |col| Cell::new(row, col)))
    }

    pub fn area(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}
