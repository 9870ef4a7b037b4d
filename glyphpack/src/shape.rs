use crate::geometry::Offset;

/// A set of occupied cells, normalized so that the smallest row and the
/// smallest column are both zero.
///
/// Cells are kept sorted and deduplicated, which makes the derived equality
/// a set equality: two shapes compare equal exactly when they cover the same
/// cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: Vec<Offset>,
}

impl Shape {
    /// Creates a shape from any collection of offsets, translating it so that
    /// it touches row 0 and column 0.
    ///
    /// Panics if `cells` is empty.
    pub fn new<I: IntoIterator<Item = Offset>>(cells: I) -> Self {
        let mut cells: Vec<Offset> = cells.into_iter().collect();
        assert!(!cells.is_empty(), "A shape must cover at least one cell.");

        let min_row = cells.iter().map(|&(row, _)| row).min().unwrap_or(0);
        let min_col = cells.iter().map(|&(_, col)| col).min().unwrap_or(0);

        for cell in &mut cells {
            cell.0 -= min_row;
            cell.1 -= min_col;
        }

        cells.sort_unstable();
        cells.dedup();

        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[Offset] {
        &self.cells
    }

    /// The number of cells this shape covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, since a shape covers at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of rows spanned by the shape's bounding box.
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(row, _)| row as usize + 1).max().unwrap_or(0)
    }

    /// Number of columns spanned by the shape's bounding box.
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, col)| col as usize + 1).max().unwrap_or(0)
    }

    /// Iterates over the covered cells as unsigned `(row, col)` pairs.
    pub(crate) fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .map(|&(row, col)| (row as usize, col as usize))
    }
}
