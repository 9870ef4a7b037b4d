use std::collections::HashMap;

use crate::{
    cache::{CacheKey, ResultCache},
    geometry::GridSize,
    grid::Grid,
    letters::letter_shape,
    placer::{place_backtracking, place_deterministic, Piece},
    rotation::rotations,
    shape::Shape,
    sizes::candidate_sizes,
    types::{Solution, Strategy},
};

/// The largest grid side tried when none is configured.
pub const DEFAULT_MAX_GRID: u32 = 20;

/// Packs words into grids, remembering every result it has produced.
///
/// A `WordPacker` is meant to live as long as the application does. It can be
/// shared between threads; the result cache is the only state it holds.
#[derive(Debug)]
pub struct WordPacker {
    max_grid: u32,
    cache: ResultCache,
}

impl WordPacker {
    pub fn new() -> Self {
        Self {
            max_grid: DEFAULT_MAX_GRID,
            cache: ResultCache::default(),
        }
    }

    /// Sets the largest grid side that `pack` will try.
    pub fn max_grid(self, max_grid: u32) -> Self {
        Self { max_grid, ..self }
    }

    /// Packs `word` using this packer's configured grid bound.
    ///
    /// Returns `None` when the word has no supported letters or when no grid
    /// within the bound could hold them.
    pub fn pack(&self, word: &str) -> Option<Grid> {
        self.pack_within(word, self.max_grid)
    }

    /// Packs `word` into grids no larger than `max_grid` on either side.
    ///
    /// Words are matched case-insensitively against earlier calls with the
    /// same bound, in which case the stored result is returned without
    /// searching again.
    pub fn pack_within(&self, word: &str, max_grid: u32) -> Option<Grid> {
        let key = CacheKey {
            word: word.to_uppercase(),
            max_side: max_grid,
        };

        if let Some(outcome) = self.cache.get(&key) {
            log::debug!("Reusing cached packing for {:?}", key.word);
            return outcome;
        }

        let outcome = pack_word(&key.word, max_grid).map(Solution::into_grid);
        self.cache.insert(key, outcome.clone());

        outcome
    }

    /// The number of words with a remembered result.
    pub fn cached_words(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

impl Default for WordPacker {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs a full search for `word` without consulting any cache.
///
/// Characters without a letter shape are ignored. Letters are placed largest
/// first; candidate sizes are tried from smallest to largest area, and the
/// search stops early once a packing leaves no cell empty.
pub fn pack_word(word: &str, max_grid: u32) -> Option<Solution> {
    let mut letters: Vec<(char, &'static Shape)> = word
        .to_uppercase()
        .chars()
        .filter_map(|letter| letter_shape(letter).map(|shape| (letter, shape)))
        .collect();

    if letters.is_empty() {
        log::debug!("{:?} has no letters that can be packed", word);
        return None;
    }

    let total_cells: u32 = letters.iter().map(|(_, shape)| shape.len() as u32).sum();

    // Stable, so equally sized letters keep their order from the word.
    letters.sort_by(|(_, a), (_, b)| b.len().cmp(&a.len()));

    let mut rotation_sets: HashMap<char, Vec<Shape>> = HashMap::new();
    for &(letter, shape) in &letters {
        rotation_sets
            .entry(letter)
            .or_insert_with(|| rotations(shape));
    }

    let pieces: Vec<Piece<'_>> = letters
        .iter()
        .map(|&(letter, _)| Piece {
            letter,
            rotations: &rotation_sets[&letter],
        })
        .collect();

    let candidates = candidate_sizes(total_cells, max_grid);
    log::trace!(
        "Packing {} letters ({} cells) with {} candidate sizes",
        pieces.len(),
        total_cells,
        candidates.len()
    );

    let mut best: Option<Solution> = None;

    for candidate in candidates {
        if let Some(best) = &best {
            if candidate.area() as usize >= best.grid.area() {
                continue;
            }
        }

        let (grid, strategy) = match fill(candidate, &pieces) {
            Some(filled) => filled,
            None => continue,
        };

        let grid = grid.trimmed();
        let improves = best
            .as_ref()
            .map_or(true, |best| grid.area() < best.grid.area());

        if improves {
            log::trace!(
                "{:?} placement fit {} into {}",
                strategy,
                word,
                grid.size()
            );

            let solution = Solution {
                grid,
                candidate,
                strategy,
                total_cells,
            };
            let perfect = solution.is_perfect();
            best = Some(solution);

            if perfect {
                break;
            }
        }
    }

    match &best {
        Some(solution) => log::debug!(
            "Packed {:?} into {} (area {}, {} cells)",
            word,
            solution.grid.size(),
            solution.grid.area(),
            total_cells
        ),
        None => log::debug!("No grid up to {0}x{0} fits {1:?}", max_grid, word),
    }

    best
}

/// Tries the greedy placer and then, on a fresh grid, the exhaustive one.
fn fill(size: GridSize, pieces: &[Piece<'_>]) -> Option<(Grid, Strategy)> {
    let mut grid = Grid::new(size);
    if place_deterministic(&mut grid, pieces) {
        return Some((grid, Strategy::Deterministic));
    }

    let mut grid = Grid::new(size);
    if place_backtracking(&mut grid, pieces) {
        return Some((grid, Strategy::Backtracking));
    }

    None
}
