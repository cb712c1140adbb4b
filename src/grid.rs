use std::ops::Add;

/// Side length of one cell in the pixel coordinates the board was laid out in.
pub const CELL_PIXELS: i32 = 20;

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    #[cfg(test)]
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    pub fn opposite(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    pub fn is_opposite(&self, other: Dir) -> bool {
        self.opposite() == other
    }
}

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub fn new(col: i32, row: i32) -> Self {
        Cell { col, row }
    }

    /// Cell containing the top-left pixel `(x, y)`.
    pub fn from_pixel(x: i32, y: i32) -> Self {
        Cell {
            col: x.div_euclid(CELL_PIXELS),
            row: y.div_euclid(CELL_PIXELS),
        }
    }

    #[cfg(test)]
    pub fn to_pixel(self) -> (i32, i32) {
        (self.col * CELL_PIXELS, self.row * CELL_PIXELS)
    }
}

impl Add<Dir> for Cell {
    type Output = Self;
    fn add(self, rhs: Dir) -> Self::Output {
        match rhs {
            Dir::Up => Self {
                col: self.col,
                row: self.row - 1,
            },
            Dir::Down => Self {
                col: self.col,
                row: self.row + 1,
            },
            Dir::Left => Self {
                col: self.col - 1,
                row: self.row,
            },
            Dir::Right => Self {
                col: self.col + 1,
                row: self.row,
            },
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Board {
    pub cols: i32,
    pub rows: i32,
}

impl Board {
    pub fn new(cols: i32, rows: i32) -> Self {
        Board { cols, rows }
    }

    pub fn from_pixels(width: i32, height: i32) -> Self {
        Board {
            cols: width / CELL_PIXELS,
            rows: height / CELL_PIXELS,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.cols).contains(&cell.col) && (0..self.rows).contains(&cell.row)
    }

    pub fn area(&self) -> usize {
        (self.cols.max(0) as usize) * (self.rows.max(0) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_grid_maps_onto_cells() {
        let board = Board::from_pixels(600, 600);
        assert_eq!(board, Board::new(30, 30));
        assert_eq!(Cell::from_pixel(60, 60), Cell::new(3, 3));
        assert_eq!(Cell::new(4, 3).to_pixel(), (80, 60));
        assert_eq!(Cell::from_pixel(-20, 0), Cell::new(-1, 0));
    }

    #[test]
    fn stepping_moves_one_cell() {
        let cell = Cell::new(3, 3);
        assert_eq!(cell + Dir::Up, Cell::new(3, 2));
        assert_eq!(cell + Dir::Down, Cell::new(3, 4));
        assert_eq!(cell + Dir::Left, Cell::new(2, 3));
        assert_eq!(cell + Dir::Right, Cell::new(4, 3));
    }

    #[test]
    fn opposites_pair_up() {
        for dir in Dir::ALL {
            assert!(dir.is_opposite(dir.opposite()));
            assert!(!dir.is_opposite(dir));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn board_bounds_are_half_open() {
        let board = Board::new(5, 4);
        assert!(board.contains(Cell::new(0, 0)));
        assert!(board.contains(Cell::new(4, 3)));
        assert!(!board.contains(Cell::new(5, 0)));
        assert!(!board.contains(Cell::new(0, 4)));
        assert!(!board.contains(Cell::new(-1, 2)));
        assert_eq!(board.area(), 20);
    }
}
