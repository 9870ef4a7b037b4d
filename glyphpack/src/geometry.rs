use std::fmt;

/// A `(row, col)` offset of a single cell.
///
/// Offsets are signed so that shapes can be rotated without first being
/// translated back into the positive quadrant.
pub type Offset = (i32, i32);

/// The dimensions of a rectangular grid, measured in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    /// How far this size is from being square. Smaller is more square.
    #[inline]
    pub fn skew(&self) -> u32 {
        if self.width > self.height {
            self.width - self.height
        } else {
            self.height - self.width
        }
    }

    #[inline]
    pub fn transposed(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    pub(crate) fn fits_within(&self, max_side: u32) -> bool {
        self.width <= max_side && self.height <= max_side
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}x{}", self.width, self.height)
    }
}
