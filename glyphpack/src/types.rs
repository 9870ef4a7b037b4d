use crate::{geometry::GridSize, grid::Grid};

/// Which placement strategy filled a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Greedy first-fit placement, without revisiting any choice.
    Deterministic,

    /// Exhaustive depth-first search, used after greedy placement failed for
    /// the same grid size.
    Backtracking,
}

/// The best packing found for a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub(crate) grid: Grid,
    pub(crate) candidate: GridSize,
    pub(crate) strategy: Strategy,
    pub(crate) total_cells: u32,
}

impl Solution {
    /// The packed letters, trimmed down to their bounding box.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// The untrimmed grid size that the letters were placed into.
    #[inline]
    pub fn candidate(&self) -> GridSize {
        self.candidate
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The number of cells covered by all of the word's letters.
    #[inline]
    pub fn total_cells(&self) -> u32 {
        self.total_cells
    }

    /// Whether the grid has no empty cells at all. No smaller packing can
    /// exist in that case.
    pub fn is_perfect(&self) -> bool {
        self.grid.area() == self.total_cells as usize
    }
}
