use std::fmt;

use crate::{geometry::GridSize, shape::Shape};

/// A rectangular grid of cells, each either empty or holding a letter.
///
/// Cells are stored row-major. Displaying a grid prints one line per row with
/// `.` standing in for empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Creates an empty grid of the given size.
    pub fn new(size: GridSize) -> Self {
        let width = size.width as usize;
        let height = size.height as usize;

        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        GridSize::new(self.width as u32, self.height as u32)
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        assert!(row < self.height);
        assert!(col < self.width);

        self.cells[row * self.width + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: Option<char>) {
        assert!(row < self.height);
        assert!(col < self.width);

        self.cells[row * self.width + col] = value;
    }

    /// The number of cells holding a letter.
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Copies the grid out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Option<char>>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Tells whether `shape` can be placed with its origin at `(row, col)`
    /// without leaving the grid or covering an occupied cell.
    pub fn fits(&self, shape: &Shape, row: usize, col: usize) -> bool {
        shape.positions().all(|(d_row, d_col)| {
            let (target_row, target_col) = (row + d_row, col + d_col);

            target_row < self.height
                && target_col < self.width
                && self.cells[target_row * self.width + target_col].is_none()
        })
    }

    pub(crate) fn place(&mut self, shape: &Shape, row: usize, col: usize, letter: char) {
        for (d_row, d_col) in shape.positions() {
            self.cells[(row + d_row) * self.width + col + d_col] = Some(letter);
        }
    }

    pub(crate) fn remove(&mut self, shape: &Shape, row: usize, col: usize) {
        for (d_row, d_col) in shape.positions() {
            self.cells[(row + d_row) * self.width + col + d_col] = None;
        }
    }

    /// Every origin at which `shape` stays inside the grid, in row-major
    /// order. Occupancy is not checked.
    pub(crate) fn origins(&self, shape: &Shape) -> impl Iterator<Item = (usize, usize)> {
        let rows = (self.height + 1).saturating_sub(shape.height());
        let cols = (self.width + 1).saturating_sub(shape.width());

        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    /// Returns the smallest sub-grid that still contains every filled cell.
    ///
    /// A grid without any filled cells trims down to a 0x0 grid.
    pub fn trimmed(&self) -> Grid {
        let row_is_empty = |row: usize| (0..self.width).all(|col| self.get(row, col).is_none());
        let col_is_empty = |col: usize| (0..self.height).all(|row| self.get(row, col).is_none());

        let mut top = 0;
        let mut bottom = self.height;
        while top < bottom && row_is_empty(top) {
            top += 1;
        }
        while bottom > top && row_is_empty(bottom - 1) {
            bottom -= 1;
        }

        let mut left = 0;
        let mut right = self.width;
        while left < right && col_is_empty(left) {
            left += 1;
        }
        while right > left && col_is_empty(right - 1) {
            right -= 1;
        }

        if top == bottom || left == right {
            return Grid::new(GridSize::new(0, 0));
        }

        let mut cells = Vec::with_capacity((bottom - top) * (right - left));
        for row in top..bottom {
            let start = row * self.width;
            cells.extend_from_slice(&self.cells[start + left..start + right]);
        }

        Grid {
            width: right - left,
            height: bottom - top,
            cells,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for (index, row) in self.rows().enumerate() {
            if index > 0 {
                writeln!(formatter)?;
            }

            for cell in row {
                write!(formatter, "{}", cell.unwrap_or('.'))?;
            }
        }

        Ok(())
    }
}
