//! The built-in table of letter shapes.
//!
//! Every letter is drawn on a small pixel grid. Offsets are `(row, col)` and
//! are normalized when the table is first used.

use std::collections::HashMap;

use crate::{geometry::Offset, shape::Shape};

#[rustfmt::skip]
static LETTER_CELLS: &[(char, &[Offset])] = &[
    ('A', &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2), (3, 0), (3, 2)]),
    ('B', &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2), (3, 0), (3, 2), (4, 0), (4, 1), (4, 2)]),
    ('C', &[(0, 0), (1, 0), (2, 0), (3, 0), (0, 1), (0, 2), (3, 1), (3, 2)]),
    ('D', &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (0, 1), (1, 1), (1, 2), (2, 2), (3, 2), (3, 1), (4, 1)]),
    ('E', &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (0, 1), (2, 1), (4, 1)]),
    ('F', &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (0, 1), (0, 2), (2, 1)]),
    ('G', &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 0), (2, 0), (3, 0), (4, 0), (4, 1), (4, 2), (4, 3), (3, 3), (2, 2), (2, 3)]),
    ('H', &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (0, 2), (1, 2), (2, 2), (3, 2), (4, 2), (2, 1)]),
    ('I', &[(0, 0), (0, 1), (0, 2), (1, 1), (2, 1), (3, 1), (4, 0), (4, 1), (4, 2)]),
    ('J', &[(0, 2), (1, 2), (2, 2), (3, 2), (4, 0), (4, 1), (4, 2), (3, 0)]),
    ('K', &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (0, 2), (1, 2), (3, 2), (4, 2), (1, 1), (2, 1), (3, 1)]),
    ('L', &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (4, 1), (4, 2)]),
    ('M', &[(0, 0), (1, 0), (2, 0), (3, 0), (0, 4), (1, 4), (2, 4), (3, 4), (0, 1), (0, 2), (0, 3), (1, 2), (2, 2)]),
    ('N', &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (0, 2), (1, 2), (2, 2), (3, 2), (4, 2), (0, 1)]),
    ('O', &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (0, 2), (1, 2), (2, 2), (3, 2), (4, 2), (0, 1), (4, 1)]),
    ('P', &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (0, 1), (0, 2), (0, 3), (2, 1), (2, 2), (2, 3), (1, 3)]),
    ('Q', &[(0, 0), (1, 0), (2, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (3, 2)]),
    ('R', &[(0, 0), (1, 0), (2, 0), (3, 0), (0, 1), (0, 2)]),
    ('S', &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 0), (2, 1), (2, 2), (3, 2), (4, 0), (4, 1), (4, 2)]),
    ('T', &[(0, 0), (0, 1), (0, 2), (1, 1), (2, 1), (3, 1), (4, 1)]),
    ('U', &[(0, 0), (1, 0), (2, 0), (3, 0), (0, 2), (1, 2), (2, 2), (3, 2), (4, 0), (4, 1), (4, 2)]),
    ('V', &[(0, 0), (1, 0), (2, 0), (3, 0), (0, 1), (0, 2), (0, 3)]),
    ('W', &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (3, 2), (4, 2), (4, 3), (4, 4)]),
    ('X', &[(0, 2), (1, 2), (2, 0), (2, 1), (2, 2), (2, 3), (2, 4), (3, 2), (4, 2)]),
    ('Y', &[(1, 1), (2, 1), (3, 1), (4, 1), (5, 1), (1, 0), (1, 2), (0, 0), (0, 2)]),
    ('Z', &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (3, 2), (3, 3), (3, 4)]),
];

lazy_static::lazy_static! {
    static ref LETTER_TABLE: HashMap<char, Shape> = LETTER_CELLS
        .iter()
        .map(|&(letter, cells)| (letter, Shape::new(cells.iter().copied())))
        .collect();
}

/// Looks up the shape registered for an uppercase letter.
///
/// Anything without a shape, including lowercase letters, returns `None`.
pub fn letter_shape(letter: char) -> Option<&'static Shape> {
    LETTER_TABLE.get(&letter)
}

pub fn is_supported(letter: char) -> bool {
    LETTER_TABLE.contains_key(&letter)
}

/// All letters with a registered shape, in alphabetical order.
pub fn supported_letters() -> impl Iterator<Item = char> {
    LETTER_CELLS.iter().map(|&(letter, _)| letter)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn a_matches_source_cells() {
        let shape = letter_shape('A').unwrap();

        assert_eq!(shape.len(), 10);
        assert_eq!(shape.height(), 4);
        assert_eq!(shape.width(), 3);
        assert!(!shape.cells().contains(&(1, 1)));
        assert!(!shape.cells().contains(&(3, 1)));
    }

    #[test]
    fn only_uppercase_letters_are_supported() {
        assert!(is_supported('Q'));
        assert!(!is_supported('q'));
        assert!(!is_supported('7'));
        assert!(!is_supported(' '));
        assert!(letter_shape('-').is_none());
    }

    #[test]
    fn table_is_sorted_and_unique() {
        let letters: Vec<char> = supported_letters().collect();
        let mut sorted = letters.clone();
        sorted.sort_unstable();
        sorted.dedup();

        assert_eq!(letters, sorted);
    }

    #[test]
    fn source_cells_have_no_duplicates() {
        for &(letter, cells) in LETTER_CELLS {
            let shape = letter_shape(letter).unwrap();
            assert_eq!(shape.len(), cells.len(), "duplicate cell in {}", letter);
        }
    }
}
