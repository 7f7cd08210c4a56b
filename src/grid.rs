use crate::error::{WgResult, WordGridError};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Default number of columns a flat letter list is wrapped into.
pub const DEFAULT_COLUMNS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// King-move directions. Iteration order is fixed: orthogonals first, then diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    North,
    South,
    West,
    East,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// (row delta, col delta)
    pub fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::South => (1, 0),
            Self::West => (0, -1),
            Self::East => (0, 1),
            Self::NorthWest => (-1, -1),
            Self::NorthEast => (-1, 1),
            Self::SouthWest => (1, -1),
            Self::SouthEast => (1, 1),
        }
    }
}

/// Fixed-width letter grid, stored row-major. `None` cells are padding and never match a letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Option<char>>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Wraps `cells` into rows of `cols`, padding the last row with empty cells.
    pub fn new(mut cells: Vec<Option<char>>, cols: usize) -> WgResult<Self> {
        if cols == 0 {
            return Err(WordGridError::Config(
                "grid column width must be positive".to_string(),
            ));
        }
        if cells.is_empty() {
            return Err(WordGridError::Config(
                "grid needs at least one cell".to_string(),
            ));
        }

        let remainder = cells.len() % cols;
        if remainder != 0 {
            cells.resize(cells.len() + (cols - remainder), None);
        }
        let rows = cells.len() / cols;

        Ok(Self { cells, rows, cols })
    }

    /// Parses a letter string such as `"DIFUE TIDON"` or `"A,B,.,C"`.
    ///
    /// ASCII letters become upper-cased cells, `.` and `_` are explicit padding cells,
    /// whitespace and commas separate tokens.
    pub fn parse(text: &str, cols: usize) -> WgResult<Self> {
        let mut cells = Vec::with_capacity(text.len());
        for c in text.chars() {
            match c {
                c if c.is_whitespace() || c == ',' => continue,
                '.' | '_' => cells.push(None),
                c if c.is_ascii_alphabetic() => cells.push(Some(c.to_ascii_uppercase())),
                other => {
                    return Err(WordGridError::Config(format!(
                        "invalid grid character '{}' (expected A-Z, '.' or '_')",
                        other
                    )))
                }
            }
        }
        Self::new(cells, cols)
    }

    /// Fills `count` cells with uniformly random uppercase letters.
    pub fn random(rng: &mut fastrand::Rng, count: usize, cols: usize) -> WgResult<Self> {
        let cells = (0..count).map(|_| Some(rng.uppercase())).collect();
        Self::new(cells, cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_valid_position(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    #[inline]
    pub fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    #[inline]
    pub fn letter(&self, pos: Position) -> Option<char> {
        self.cells[self.index(pos)]
    }

    /// Neighbours of `pos` in [`Direction`] order, clipped to the grid.
    pub fn adjacent_positions(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::iter().filter_map(move |dir| {
            let (dr, dc) = dir.offset();
            let row = pos.row as isize + dr;
            let col = pos.col as isize + dc;
            if self.is_valid_position(row, col) {
                Some(Position::new(row as usize, col as usize))
            } else {
                None
            }
        })
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// Rows as owned strings, padding rendered as an empty string.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.cells
            .chunks(self.cols)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(String::from).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_rows() {
            writeln!(f, "{}", row.join(" ").trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_order_is_stable() {
        let offsets: Vec<_> = Direction::iter().map(Direction::offset).collect();
        assert_eq!(
            offsets,
            vec![(-1, 0), (1, 0), (0, -1), (0, 1), (-1, -1), (-1, 1), (1, -1), (1, 1)]
        );
    }

    #[test]
    fn display_trims_padding() {
        let grid = Grid::parse("ABCDEF", 5).unwrap();
        assert_eq!(grid.to_string(), "A B C D E\nF\n");
    }
}
