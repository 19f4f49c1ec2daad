use criterion::{BatchSize, Bencher};
use rand::{rngs::StdRng, SeedableRng};
use voronoi_raster::{rasterize, Color, PixelBuffer, SeedSet};

pub fn create_random_seeds(size: usize, width: u16, height: u16) -> SeedSet {
    let mut rng = StdRng::seed_from_u64(size as u64);
    SeedSet::generate(size, width, height, &mut rng).expect("Seeds expected")
}

pub fn create_benchmark_fn(b: &mut Bencher, size: usize, width: u16, height: u16) {
    b.iter_batched(
        || (create_random_seeds(size, width, height), PixelBuffer::new(width as usize, height as usize, Color::default())),
        |(seeds, mut buffer)| {
            rasterize(&mut buffer, &seeds);
            buffer
        },
        BatchSize::LargeInput);
}
