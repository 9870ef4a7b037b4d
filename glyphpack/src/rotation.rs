use crate::{geometry::Offset, shape::Shape};

/// Computes the distinct quarter-turn rotations of a shape.
///
/// The result always starts with the shape itself and continues in
/// 90° steps. Rotations that land on an already-collected shape are skipped,
/// so symmetric letters produce two or even one variant. Placement tries the
/// variants in this order.
pub fn rotations(shape: &Shape) -> Vec<Shape> {
    let mut distinct: Vec<Shape> = Vec::with_capacity(4);
    let mut current: Vec<Offset> = shape.cells().to_vec();

    for _ in 0..4 {
        let normalized = Shape::new(current.iter().copied());

        if !distinct.contains(&normalized) {
            distinct.push(normalized);
        }

        current = current.iter().map(|&(row, col)| (col, -row)).collect();
    }

    distinct
}
