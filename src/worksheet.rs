//! Draws a puzzle worksheet: the shape of every letter in a word, and below
//! them the grid those letters have to be packed into.

use std::convert::TryFrom;

use anyhow::Context;
use glyphpack::{letter_shape, Grid, Shape};

use crate::{
    config::RenderConfig,
    image::{Image, Pixel},
    palette::ColorSource,
};

/// Largest worksheet, in pixels, that will be drawn.
const MAX_PIXELS: u64 = 1 << 28;

const EMPTY_CELL: Pixel = Pixel::new(225, 225, 225, 255);

pub(crate) struct Worksheet<'a> {
    letters: Vec<(char, &'static Shape)>,
    grid: &'a Grid,
    solved: bool,
}

impl<'a> Worksheet<'a> {
    /// Collects the distinct drawable letters of `word`, in the order they
    /// first appear.
    pub fn new(word: &str, grid: &'a Grid) -> Self {
        let mut letters: Vec<(char, &'static Shape)> = Vec::new();

        for letter in word.to_uppercase().chars() {
            if letters.iter().any(|(seen, _)| *seen == letter) {
                continue;
            }

            if let Some(shape) = letter_shape(letter) {
                letters.push((letter, shape));
            }
        }

        Self {
            letters,
            grid,
            solved: false,
        }
    }

    /// Draws the packed letters into the grid instead of leaving it blank.
    pub fn solved(self, solved: bool) -> Self {
        Self { solved, ..self }
    }

    pub fn render(
        &self,
        config: &RenderConfig,
        palette: &mut dyn ColorSource,
    ) -> anyhow::Result<Image> {
        let cell = config.cell_size;
        let margin = config.margin;

        // Shapes sit side by side with one empty cell between neighbors.
        let shapes_cols: usize = self.letters.iter().map(|(_, shape)| shape.width()).sum::<usize>()
            + self.letters.len().saturating_sub(1);
        let shapes_rows = self
            .letters
            .iter()
            .map(|(_, shape)| shape.height())
            .max()
            .unwrap_or(0);

        let (grid_top, width, height) = layout_size(
            cell,
            margin,
            (shapes_cols.max(self.grid.width()), shapes_rows),
            self.grid.height(),
        )
        .with_context(|| {
            format!(
                "Worksheet with {} pixel cells and a {} pixel margin is too large to draw",
                cell, margin
            )
        })?;

        log::trace!(
            "Drawing worksheet for {} letters at {}x{} pixels",
            self.letters.len(),
            width,
            height
        );

        let mut image = Image::new_filled((width, height), Pixel::WHITE);

        let mut left = margin;
        for &(letter, shape) in &self.letters {
            let color = palette.color_for(letter);

            for &(row, col) in shape.cells() {
                let pos = (left + col as u32 * cell, margin + row as u32 * cell);
                fill_cell(&mut image, pos, cell, color);
            }

            left += (shape.width() as u32 + 1) * cell;
        }

        for (row, cells) in self.grid.rows().enumerate() {
            for (col, value) in cells.iter().enumerate() {
                let color = match value {
                    Some(letter) if self.solved => palette.color_for(*letter),
                    _ => EMPTY_CELL,
                };

                let pos = (margin + col as u32 * cell, grid_top + row as u32 * cell);
                fill_cell(&mut image, pos, cell, color);
            }
        }

        Ok(image)
    }
}

/// Computes the grid's top edge and the full image size in pixels, or None
/// if any of them overflows.
fn layout_size(
    cell: u32,
    margin: u32,
    (cols, shapes_rows): (usize, usize),
    grid_rows: usize,
) -> Option<(u32, u32, u32)> {
    let cols = u32::try_from(cols).ok()?;
    let shapes_rows = u32::try_from(shapes_rows).ok()?;
    let grid_rows = u32::try_from(grid_rows).ok()?;

    let grid_top = margin.checked_add(shapes_rows.checked_add(1)?.checked_mul(cell)?)?;
    let width = margin.checked_mul(2)?.checked_add(cols.checked_mul(cell)?)?;
    let height = grid_top
        .checked_add(margin)?
        .checked_add(grid_rows.checked_mul(cell)?)?;

    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        return None;
    }

    Some((grid_top, width, height))
}

/// Fills one cell, leaving a one pixel gutter on its right and bottom edges
/// when the cell is big enough to spare it.
fn fill_cell(image: &mut Image, pos: (u32, u32), cell: u32, color: Pixel) {
    let inner = if cell > 2 { cell - 1 } else { cell };
    image.fill_rect(pos, (inner, inner), color);
}

#[cfg(test)]
mod test {
    use super::*;

    use glyphpack::pack_word;

    struct FixedColor(Pixel);

    impl ColorSource for FixedColor {
        fn color_for(&mut self, _letter: char) -> Pixel {
            self.0
        }
    }

    const INK: Pixel = Pixel::new(10, 20, 30, 255);

    fn layout() -> RenderConfig {
        RenderConfig {
            cell_size: 10,
            margin: 5,
            palette_seed: 0,
        }
    }

    #[test]
    fn single_letter_layout() {
        let grid = pack_word("A", 20).unwrap().into_grid();
        let image = Worksheet::new("a", &grid)
            .render(&layout(), &mut FixedColor(INK))
            .unwrap();

        // 3 columns wide; 4 rows of shape, a spacer row, then 4 rows of grid.
        assert_eq!(image.size(), (40, 100));

        // Shape cell (0, 0) and the hole at (1, 1).
        assert_eq!(image.get_pixel((5, 5)), INK);
        assert_eq!(image.get_pixel((15, 15)), Pixel::WHITE);

        // The unsolved grid is all empty cells, holes included.
        assert_eq!(image.get_pixel((5, 55)), EMPTY_CELL);
        assert_eq!(image.get_pixel((15, 65)), EMPTY_CELL);

        // Gutter between cells.
        assert_eq!(image.get_pixel((14, 55)), Pixel::WHITE);
    }

    #[test]
    fn solved_grid_is_colored() {
        let grid = pack_word("A", 20).unwrap().into_grid();
        let image = Worksheet::new("A", &grid)
            .solved(true)
            .render(&layout(), &mut FixedColor(INK))
            .unwrap();

        assert_eq!(image.get_pixel((5, 55)), INK);
        assert_eq!(image.get_pixel((15, 65)), EMPTY_CELL);
    }

    #[test]
    fn repeated_letters_are_drawn_once() {
        let grid = pack_word("LL", 20).unwrap().into_grid();
        let worksheet = Worksheet::new("L-l", &grid);

        assert_eq!(worksheet.letters.len(), 1);

        // The 6x3 grid is wider than the single 3 column shape.
        let image = worksheet
            .render(&layout(), &mut FixedColor(INK))
            .unwrap();
        assert_eq!(image.size(), (70, 5 + 60 + 5 + 30));
    }

    #[test]
    fn oversized_layout_is_an_error() {
        let grid = pack_word("A", 20).unwrap().into_grid();
        let config = RenderConfig {
            cell_size: 70_000,
            margin: 5,
            palette_seed: 0,
        };

        let result = Worksheet::new("A", &grid).render(&config, &mut FixedColor(INK));
        assert!(result.is_err());

        assert_eq!(layout_size(u32::MAX, 0, (1, 1), 1), None);
        assert_eq!(layout_size(10, 5, (3, 4), 4), Some((55, 40, 100)));
    }
}
