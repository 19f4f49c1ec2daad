use std::time::{SystemTime, UNIX_EPOCH};

use rand::{rngs::StdRng, SeedableRng};

use crate::{
    color::Color,
    error::{ConfigError, Error},
    pipeline::VoronoiRaster,
    seeds::{Coordinate, SeedSet},
};

pub const DEFAULT_WIDTH: usize = 1920;
pub const DEFAULT_HEIGHT: usize = 1080;
pub const DEFAULT_SEED_COUNT: usize = 30;
pub const DEFAULT_SEED_RADIUS: u16 = 5;
pub const DEFAULT_OUTPUT_PATH: &str = "output.ppm";

/// Upper bound of each raster side, coordinates are stored as `u16`.
pub const MAX_DIMENSION: usize = u16::MAX as usize;

/// Collects the raster configuration and validates it before any rendering work.
///
/// Sites are either given through [`VoronoiRasterBuilder::set_seeds`] or sampled at build time.
/// Sampling uses a [`StdRng`] seeded from [`VoronoiRasterBuilder::set_rng_seed`], or from the
/// current time when none is set.
#[derive(Debug, Clone)]
pub struct VoronoiRasterBuilder {
    width: usize,
    height: usize,
    seed_count: usize,
    seed_radius: u16,
    marker_color: Color,
    seeds: Option<Vec<Coordinate>>,
    rng_seed: Option<u64>,
    parallel: bool,
}

impl Default for VoronoiRasterBuilder {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed_count: DEFAULT_SEED_COUNT,
            seed_radius: DEFAULT_SEED_RADIUS,
            marker_color: Color::BLACK,
            seeds: None,
            rng_seed: None,
            parallel: false,
        }
    }
}

impl VoronoiRasterBuilder {
    /// Raster width and height in pixels, each in `1..=65535`.
    pub fn set_dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Number of sites to sample. Ignored when sites are set explicitly.
    pub fn set_seed_count(mut self, seed_count: usize) -> Self {
        self.seed_count = seed_count;
        self
    }

    /// Radius of the disc stamped over each site. Zero marks the site pixel only.
    pub fn set_seed_radius(mut self, seed_radius: u16) -> Self {
        self.seed_radius = seed_radius;
        self
    }

    /// Color of the site markers, black by default.
    pub fn set_marker_color(mut self, marker_color: Color) -> Self {
        self.marker_color = marker_color;
        self
    }

    /// Uses these sites instead of sampling random ones.
    pub fn set_seeds(mut self, seeds: Vec<Coordinate>) -> Self {
        self.seeds.replace(seeds);
        self
    }

    /// Seeds site sampling so the same value yields the same sites.
    pub fn set_rng_seed(mut self, rng_seed: u64) -> Self {
        self.rng_seed.replace(rng_seed);
        self
    }

    /// Rasterizes rows on the rayon thread pool. Output is the same either way.
    pub fn set_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration and places the sites, sampling them if none were set.
    pub fn build(self) -> Result<VoronoiRaster, Error> {
        if !(1..=MAX_DIMENSION).contains(&self.width) || !(1..=MAX_DIMENSION).contains(&self.height) {
            return Err(ConfigError::InvalidDimensions { width: self.width, height: self.height }.into());
        }

        let seeds = match self.seeds {
            Some(seeds) => {
                let seeds = SeedSet::new(seeds)?;
                seeds.check_bounds(self.width, self.height)?;
                seeds
            }
            None => {
                if self.seed_count == 0 {
                    return Err(ConfigError::NoSeeds.into());
                }

                let rng_seed = self.rng_seed.unwrap_or_else(time_seed);
                log::debug!("Sampling {} sites with rng seed {}", self.seed_count, rng_seed);
                let mut rng = StdRng::seed_from_u64(rng_seed);
                SeedSet::generate(self.seed_count, self.width as u16, self.height as u16, &mut rng)?
            }
        };

        Ok(VoronoiRaster::new(self.width, self.height, seeds, self.seed_radius, self.marker_color, self.parallel))
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
