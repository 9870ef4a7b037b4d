use crate::geometry::GridSize;

/// Lists the grid sizes worth trying for `total_cells` cells of letters,
/// with neither side larger than `max_side`.
///
/// Two passes contribute sizes: one around the square that barely fits the
/// cells, and one over slightly larger areas with aspect ratios up to 2:1.
/// The list is ordered by area, then by how square the size is, so the first
/// size that a placer can fill is also close to the smallest one.
pub fn candidate_sizes(total_cells: u32, max_side: u32) -> Vec<GridSize> {
    let mut sizes: Vec<GridSize> = Vec::new();

    if total_cells == 0 {
        return sizes;
    }

    let min_side = ceil_sqrt(total_cells);

    let mut push = |size: GridSize| {
        if !sizes.contains(&size) {
            sizes.push(size);
        }
    };

    for base in min_side..=min_side + 1 {
        for width in base - 1..=base + 1 {
            if width == 0 {
                continue;
            }

            let height = min_side.max(ceil_div(total_cells, width));
            let size = GridSize::new(width, height);

            if size.area() >= total_cells && size.fits_within(max_side) {
                push(size);
                push(size.transposed());
            }
        }
    }

    let largest_area = (min_side + 2) * (min_side + 2);

    for area in min_side * min_side..=largest_area {
        if area < total_cells {
            continue;
        }

        let widest = max_side.min(ceil_sqrt(area * 2));

        for width in min_side..=widest {
            let height = ceil_div(area, width);
            if height > max_side {
                continue;
            }

            let (short, long) = if width < height {
                (width, height)
            } else {
                (height, width)
            };

            if long <= short * 2 {
                push(GridSize::new(width, height));
            }
        }
    }

    sizes.sort_by_key(|size| (size.area(), size.skew()));
    sizes
}

fn ceil_div(numerator: u32, denominator: u32) -> u32 {
    (numerator + denominator - 1) / denominator
}

fn ceil_sqrt(value: u32) -> u32 {
    let mut root = (value as f64).sqrt() as u32;

    while root > 0 && (root - 1) * (root - 1) >= value {
        root -= 1;
    }

    while root * root < value {
        root += 1;
    }

    root
}

#[cfg(test)]
mod test {
    use super::*;

    fn pairs(sizes: &[GridSize]) -> Vec<(u32, u32)> {
        sizes.iter().map(|size| (size.width, size.height)).collect()
    }

    #[test]
    fn integer_helpers() {
        assert_eq!(ceil_sqrt(1), 1);
        assert_eq!(ceil_sqrt(9), 3);
        assert_eq!(ceil_sqrt(10), 4);
        assert_eq!(ceil_sqrt(16), 4);
        assert_eq!(ceil_sqrt(17), 5);
        assert_eq!(ceil_div(10, 3), 4);
        assert_eq!(ceil_div(9, 3), 3);
    }

    #[test]
    fn small_demand_ordering() {
        let sizes = candidate_sizes(6, 20);

        assert_eq!(
            &pairs(&sizes)[..8],
            &[(2, 3), (3, 2), (3, 3), (4, 3), (3, 4), (5, 3), (3, 5), (4, 4)]
        );
    }

    #[test]
    fn single_letter_a() {
        let sizes = candidate_sizes(10, 20);

        assert_eq!(
            &pairs(&sizes)[..4],
            &[(3, 4), (4, 3), (4, 4), (6, 3)]
        );
    }

    #[test]
    fn every_size_is_valid() {
        for &(total, max_side) in &[(6, 20), (14, 20), (45, 20), (30, 6), (100, 12)] {
            let sizes = candidate_sizes(total, max_side);
            assert!(!sizes.is_empty());

            for size in &sizes {
                assert!(size.area() >= total, "{} too small for {}", size, total);
                assert!(size.fits_within(max_side), "{} exceeds {}", size, max_side);
            }
        }
    }

    #[test]
    fn ordered_and_deduplicated() {
        let sizes = candidate_sizes(45, 20);

        for window in sizes.windows(2) {
            let key = |size: &GridSize| (size.area(), size.skew());
            assert!(key(&window[0]) <= key(&window[1]));
        }

        for (index, size) in sizes.iter().enumerate() {
            assert!(!sizes[index + 1..].contains(size));
        }
    }

    #[test]
    fn tight_bound() {
        assert_eq!(pairs(&candidate_sizes(100, 10)), &[(10, 10)]);
    }

    #[test]
    fn nothing_fits() {
        assert!(candidate_sizes(10, 3).is_empty());
        assert!(candidate_sizes(0, 20).is_empty());
    }
}
