use std::ops::Index;

use rand::Rng;

use crate::error::ConfigError;

/// A pixel position. Both components are within the raster that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: u16,
    pub y: u16,
}

impl Coordinate {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Ordered Voronoi sites. The order only matters when two sites are equally close to a pixel, in
/// which case the one with the lower index wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSet {
    seeds: Vec<Coordinate>,
}

impl SeedSet {
    /// Wraps a list of sites, rejecting an empty one.
    pub fn new(seeds: Vec<Coordinate>) -> Result<Self, ConfigError> {
        if seeds.is_empty() {
            return Err(ConfigError::NoSeeds);
        }

        Ok(Self { seeds })
    }

    /// Samples `count` sites uniformly within `[0, width) x [0, height)`.
    ///
    /// Sites are not deduplicated, two of them may land on the same pixel.
    pub fn generate<R: Rng + ?Sized>(count: usize, width: u16, height: u16, rng: &mut R) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::NoSeeds);
        }

        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width: width as usize, height: height as usize });
        }

        let x_range = rand::distributions::Uniform::new(0, width);
        let y_range = rand::distributions::Uniform::new(0, height);
        let seeds = (0..count)
            .map(|_| Coordinate { x: rng.sample(x_range), y: rng.sample(y_range) })
            .collect();

        Ok(Self { seeds })
    }

    /// Checks every site lies within a `width` x `height` raster.
    pub fn check_bounds(&self, width: usize, height: usize) -> Result<(), ConfigError> {
        match self.seeds.iter().enumerate().find(|(_, s)| s.x as usize >= width || s.y as usize >= height) {
            Some((index, s)) => Err(ConfigError::SeedOutOfBounds { index, x: s.x, y: s.y }),
            None => Ok(()),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    /// A constructed set always holds at least one seed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.seeds.iter()
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.seeds
    }
}

impl Index<usize> for SeedSet {
    type Output = Coordinate;

    fn index(&self, index: usize) -> &Self::Output {
        &self.seeds[index]
    }
}

impl<'a> IntoIterator for &'a SeedSet {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.seeds.iter()
    }
}
