//! Brute force nearest seed fill.
//!
//! Every pixel is compared against every seed, `O(width * height * seeds)`. Ties go to the seed
//! with the lowest index: a later seed only replaces the current winner when it is strictly closer.

use rayon::prelude::*;

use crate::{
    color::{coordinate_to_color, Color},
    pixel_buffer::PixelBuffer,
    seeds::SeedSet,
    utils::dist2,
};

/// Returns the index of the seed closest to pixel `(x, y)`, the lowest index on ties.
#[inline]
pub fn nearest_seed(seeds: &SeedSet, x: usize, y: usize) -> usize {
    let (x, y) = (x as i64, y as i64);
    let mut nearest = 0;
    let mut nearest_dist = dist2(x, y, &seeds[0]);

    for (i, seed) in seeds.iter().enumerate().skip(1) {
        let d = dist2(x, y, seed);
        if d < nearest_dist {
            nearest = i;
            nearest_dist = d;
        }
    }

    nearest
}

fn fill_row(row: &mut [Color], y: usize, seeds: &SeedSet, colors: &[Color]) {
    for (x, pixel) in row.iter_mut().enumerate() {
        *pixel = colors[nearest_seed(seeds, x, y)];
    }
}

fn seed_colors(seeds: &SeedSet) -> Vec<Color> {
    seeds.iter().map(coordinate_to_color).collect()
}

/// Overwrites every pixel of `buffer` with the color of its nearest seed.
pub fn rasterize(buffer: &mut PixelBuffer, seeds: &SeedSet) {
    let colors = seed_colors(seeds);
    for (y, row) in buffer.rows_mut().enumerate() {
        fill_row(row, y, seeds, &colors);
    }
}

/// Same output as [`rasterize`], with rows spread across the rayon thread pool.
pub fn rasterize_parallel(buffer: &mut PixelBuffer, seeds: &SeedSet) {
    let colors = seed_colors(seeds);
    let width = buffer.width().max(1);
    buffer
        .pixels_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| fill_row(row, y, seeds, &colors));
}

#[cfg(test)]
mod test {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::seeds::Coordinate;

    fn seed_set(coordinates: &[(u16, u16)]) -> SeedSet {
        SeedSet::new(coordinates.iter().map(|&(x, y)| Coordinate::new(x, y)).collect()).expect("Seeds expected")
    }

    #[test]
    fn every_pixel_gets_a_seed_color_test() {
        let mut rng = StdRng::seed_from_u64(3);
        let seeds = SeedSet::generate(12, 40, 30, &mut rng).expect("Seeds expected");
        let colors = seed_colors(&seeds);
        // a fill that no coordinate of this raster can map to
        let unset = Color::from_u32(0xDEAD_BEEF);
        assert!(!colors.contains(&unset));

        let mut buffer = PixelBuffer::new(40, 30, unset);
        rasterize(&mut buffer, &seeds);

        for &pixel in buffer.pixels() {
            assert!(colors.contains(&pixel), "pixel color {:?} is not a seed color", pixel);
        }
    }

    #[test]
    fn tie_goes_to_lower_index_test() {
        // (5, 5) is exactly 2 away from both seeds
        let seeds = seed_set(&[(3, 5), (7, 5)]);
        assert_eq!(nearest_seed(&seeds, 5, 5), 0);

        let seeds = seed_set(&[(7, 5), (3, 5)]);
        assert_eq!(nearest_seed(&seeds, 5, 5), 0);

        let mut buffer = PixelBuffer::new(10, 10, Color::WHITE);
        rasterize(&mut buffer, &seeds);
        assert_eq!(buffer.get(5, 5), Some(coordinate_to_color(&Coordinate::new(7, 5))));
    }

    #[test]
    fn duplicate_seeds_resolve_to_first_test() {
        let seeds = seed_set(&[(1, 1), (4, 4), (4, 4)]);
        assert_eq!(nearest_seed(&seeds, 4, 4), 1);
        assert_eq!(nearest_seed(&seeds, 9, 9), 1);
    }

    #[test]
    fn two_seeds_small_raster_test() {
        let seeds = seed_set(&[(2, 2), (7, 6)]);
        let mut buffer = PixelBuffer::new(10, 10, Color::WHITE);
        rasterize(&mut buffer, &seeds);

        let first = coordinate_to_color(&seeds[0]);
        let second = coordinate_to_color(&seeds[1]);

        // (0, 0): 8 vs 85
        assert_eq!(buffer.get(0, 0), Some(first));
        // (9, 9): 98 vs 13
        assert_eq!(buffer.get(9, 9), Some(second));
        // (5, 3): 10 vs 13
        assert_eq!(buffer.get(5, 3), Some(first));
        // (5, 5): 18 vs 5
        assert_eq!(buffer.get(5, 5), Some(second));
        // (9, 0): 53 vs 40
        assert_eq!(buffer.get(9, 0), Some(second));
        // (0, 9): 53 vs 58
        assert_eq!(buffer.get(0, 9), Some(first));
    }

    #[test]
    fn corner_seeds_split_along_anti_diagonal_test() {
        let seeds = seed_set(&[(0, 0), (9, 9)]);
        let mut buffer = PixelBuffer::new(10, 10, Color::WHITE);
        rasterize(&mut buffer, &seeds);

        let first = coordinate_to_color(&seeds[0]);
        let second = coordinate_to_color(&seeds[1]);

        // (0, 0) wins wherever x + y < 9, and on x + y = 9 both are equally far so index 0 wins too
        for y in 0..10 {
            for x in 0..10 {
                let expected = if x + y <= 9 { first } else { second };
                assert_eq!(buffer.get(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }

        // (3, 2): 13 vs 85, (9, 0): 81 vs 81, (6, 7): 85 vs 13
        assert_eq!(buffer.get(3, 2), Some(first));
        assert_eq!(buffer.get(9, 0), Some(first));
        assert_eq!(buffer.get(6, 7), Some(second));
    }

    #[test]
    fn parallel_matches_sequential_test() {
        let mut rng = StdRng::seed_from_u64(11);
        let seeds = SeedSet::generate(25, 97, 61, &mut rng).expect("Seeds expected");

        let mut sequential = PixelBuffer::new(97, 61, Color::WHITE);
        rasterize(&mut sequential, &seeds);

        let mut parallel = PixelBuffer::new(97, 61, Color::BLACK);
        rasterize_parallel(&mut parallel, &seeds);

        assert_eq!(sequential, parallel);
    }
}
