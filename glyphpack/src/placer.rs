//! The two strategies used to fill a fixed-size grid with a word's letters.
//!
//! Both expect pieces ordered largest first and try each piece's rotations
//! in order, scanning origins row by row. The greedy placer commits to the
//! first fit it sees; the backtracking placer explores every combination.

use crate::{grid::Grid, shape::Shape};

/// One letter to place, along with the rotations it may be placed in.
#[derive(Debug, Clone, Copy)]
pub struct Piece<'a> {
    pub letter: char,
    pub rotations: &'a [Shape],
}

/// Places every piece at its first fitting rotation and origin, never
/// revisiting a decision.
///
/// Returns `false` as soon as a piece has nowhere to go. The grid is left
/// partially filled in that case and should be thrown away.
pub fn place_deterministic(grid: &mut Grid, pieces: &[Piece<'_>]) -> bool {
    for piece in pieces {
        let fit = piece.rotations.iter().find_map(|shape| {
            grid.origins(shape)
                .find(|&(row, col)| grid.fits(shape, row, col))
                .map(|(row, col)| (shape, row, col))
        });

        match fit {
            Some((shape, row, col)) => grid.place(shape, row, col, piece.letter),
            None => {
                log::trace!("Greedy placement found no spot for {}", piece.letter);
                return false;
            }
        }
    }

    true
}

/// Searches every rotation and origin of every piece depth-first, undoing
/// placements that lead to a dead end.
///
/// Expects an empty grid. On success the grid holds the first complete
/// arrangement found; on failure it is left empty again.
pub fn place_backtracking(grid: &mut Grid, pieces: &[Piece<'_>]) -> bool {
    let mut placements = 0u64;
    let found = place_from(grid, pieces, 0, &mut placements);

    log::trace!(
        "Backtracking tried {} placements in a {} grid, found: {}",
        placements,
        grid.size(),
        found
    );

    found
}

fn place_from(grid: &mut Grid, pieces: &[Piece<'_>], index: usize, placements: &mut u64) -> bool {
    let piece = match pieces.get(index) {
        Some(piece) => piece,
        None => return true,
    };

    for shape in piece.rotations {
        let origins: Vec<(usize, usize)> = grid.origins(shape).collect();

        for (row, col) in origins {
            if !grid.fits(shape, row, col) {
                continue;
            }

            grid.place(shape, row, col, piece.letter);
            *placements += 1;

            if place_from(grid, pieces, index + 1, placements) {
                return true;
            }

            grid.remove(shape, row, col);
        }
    }

    false
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::{geometry::GridSize, letters::letter_shape, rotation::rotations};

    fn rotations_of(letter: char) -> Vec<Shape> {
        rotations(letter_shape(letter).unwrap())
    }

    #[test]
    fn greedy_takes_first_fit() {
        let a = rotations_of('A');
        let v = rotations_of('V');
        let pieces = [
            Piece {
                letter: 'A',
                rotations: &a,
            },
            Piece {
                letter: 'V',
                rotations: &v,
            },
        ];

        let mut grid = Grid::new(GridSize::new(4, 5));
        assert!(place_deterministic(&mut grid, &pieces));

        assert_eq!(grid.to_string(), "AAA.\nA.AV\nAAAV\nA.AV\nVVVV");
    }

    #[test]
    fn greedy_gives_up_where_search_succeeds() {
        // In a 7x5 grid the greedy placer parks the first letters where the
        // last one can no longer fit.
        let a = rotations_of('A');
        let c = rotations_of('C');
        let t = rotations_of('T');
        let pieces = [
            Piece {
                letter: 'A',
                rotations: &a,
            },
            Piece {
                letter: 'C',
                rotations: &c,
            },
            Piece {
                letter: 'T',
                rotations: &t,
            },
        ];

        let mut greedy = Grid::new(GridSize::new(7, 5));
        assert!(!place_deterministic(&mut greedy, &pieces));

        let mut grid = Grid::new(GridSize::new(7, 5));
        assert!(place_backtracking(&mut grid, &pieces));
        assert_eq!(grid.filled_cells(), 10 + 8 + 7);
        assert_eq!(
            grid.to_string(),
            "AAATCCC\nA.ATC..\nAAATC..\nA.ATCCC\n..TTT.."
        );
    }

    #[test]
    fn backtracking_failure_leaves_grid_empty() {
        let l = rotations_of('L');
        let pieces = [
            Piece {
                letter: 'L',
                rotations: &l,
            },
            Piece {
                letter: 'L',
                rotations: &l,
            },
        ];

        let mut grid = Grid::new(GridSize::new(3, 5));
        assert!(!place_backtracking(&mut grid, &pieces));
        assert_eq!(grid.filled_cells(), 0);
    }

    #[test]
    fn no_pieces_always_fit() {
        let mut grid = Grid::new(GridSize::new(1, 1));

        assert!(place_deterministic(&mut grid, &[]));
        assert!(place_backtracking(&mut grid, &[]));
    }
}
