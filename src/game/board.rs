use crate::{error::SolverError, models::Position};

/// Row/column offsets of the 8 neighbouring cells
const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),   // right
    (0, -1),  // left
    (1, 0),   // down
    (-1, 0),  // up
    (1, 1),   // down-right
    (-1, 1),  // up-right
    (1, -1),  // down-left
    (-1, -1), // up-left
];

/// A rectangular letter grid stored in row-major order
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    letters: Vec<char>,
}

impl Board {
    /// Build a board from its dimensions and a flat letter sequence.
    ///
    /// Only the first `width * height` letters are used; any extra input is
    /// ignored.
    pub fn new(width: i32, height: i32, letters: Option<&str>) -> Result<Self, SolverError> {
        if width <= 0 || height <= 0 {
            return Err(SolverError::InvalidArgument { width, height });
        }

        let letters = letters.ok_or(SolverError::NullArgument { name: "letters" })?;

        let width = width as usize;
        let height = height as usize;
        let required = width * height;
        let letters: Vec<char> = letters.chars().take(required).collect();
        if letters.len() < required {
            return Err(SolverError::OutOfRange {
                required,
                actual: letters.len(),
            });
        }

        Ok(Self {
            width,
            height,
            letters,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.letters.len()
    }

    pub fn index(&self, pos: Position) -> usize {
        pos.row * self.width + pos.col
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    pub fn letter_at(&self, pos: Position) -> char {
        self.letters[self.index(pos)]
    }

    /// Every cell in row-major scan order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Position { row, col }))
    }

    /// In-bounds cells adjacent to `pos`, diagonals included
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS.into_iter().filter_map(move |(dr, dc)| {
            let row = pos.row.checked_add_signed(dr)?;
            let col = pos.col.checked_add_signed(dc)?;
            let next = Position { row, col };
            self.contains(next).then_some(next)
        })
    }

    /// Whether two cells touch horizontally, vertically or diagonally
    pub fn are_adjacent(a: Position, b: Position) -> bool {
        let row_diff = a.row.abs_diff(b.row);
        let col_diff = a.col.abs_diff(b.col);

        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }
}
