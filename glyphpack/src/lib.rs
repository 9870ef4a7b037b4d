//! Glyphpack packs the letters of a word into the smallest rectangular grid it
//! can find. It was built for lettergrid, a tool that turns words into
//! letter-packing puzzles.
//!
//! Every supported letter has a fixed pixel shape. Letters may be rotated in
//! quarter turns but never mirrored, and no two letters may share a cell.
//!
//! The search tries grid sizes from the smallest area upward. For each size it
//! first places letters greedily and only falls back to an exhaustive search
//! when the greedy pass gets stuck. It is a heuristic: the result is small,
//! but not guaranteed to be the smallest possible.
//!
//! ## Example
//! ```
//! use glyphpack::WordPacker;
//!
//! // A packer remembers everything it has packed, so keep one around.
//! let packer = WordPacker::new().max_grid(20);
//!
//! let grid = packer.pack("a").expect("a single letter always fits");
//! assert_eq!(grid.to_string(), "AAA\nA.A\nAAA\nA.A");
//!
//! // Characters without a shape are skipped.
//! assert!(packer.pack("123").is_none());
//! ```

mod cache;
mod geometry;
mod grid;
mod letters;
mod packer;
mod placer;
mod rotation;
mod shape;
mod sizes;
mod types;

pub use geometry::*;
pub use grid::*;
pub use letters::*;
pub use packer::*;
pub use placer::*;
pub use rotation::*;
pub use shape::*;
pub use sizes::*;
pub use types::*;
