use std::{path::Path, time::Instant};

use crate::{
    circle::stamp_seeds,
    color::Color,
    error::Error,
    pixel_buffer::PixelBuffer,
    ppm::save_ppm,
    rasterizer::{rasterize, rasterize_parallel},
    seeds::SeedSet,
};

/// A validated raster ready to render. Created by [`crate::VoronoiRasterBuilder`].
///
/// Rendering runs the stages strictly one after another: fill every pixel with its nearest seed
/// color, then stamp a marker disc over each seed.
pub struct VoronoiRaster {
    width: usize,
    height: usize,
    seeds: SeedSet,
    seed_radius: u16,
    marker_color: Color,
    parallel: bool,
}

impl VoronoiRaster {
    pub(crate) fn new(width: usize, height: usize, seeds: SeedSet, seed_radius: u16, marker_color: Color, parallel: bool) -> Self {
        Self { width, height, seeds, seed_radius, marker_color, parallel }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn seeds(&self) -> &SeedSet {
        &self.seeds
    }

    pub fn seed_radius(&self) -> u16 {
        self.seed_radius
    }

    pub fn render(&self) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(self.width, self.height, Color::default());

        let start = Instant::now();
        if self.parallel {
            rasterize_parallel(&mut buffer, &self.seeds);
        } else {
            rasterize(&mut buffer, &self.seeds);
        }
        log::info!(
            "Rasterized {}x{} pixels against {} seeds in {:?}",
            self.width,
            self.height,
            self.seeds.len(),
            start.elapsed()
        );

        let start = Instant::now();
        stamp_seeds(&mut buffer, &self.seeds, self.seed_radius, self.marker_color);
        log::info!("Stamped {} seed markers in {:?}", self.seeds.len(), start.elapsed());

        buffer
    }

    /// Renders and writes the result to `path` as a binary PPM.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<PixelBuffer, Error> {
        let buffer = self.render();

        let start = Instant::now();
        save_ppm(&buffer, &path)?;
        log::info!("Saved '{}' in {:?}", path.as_ref().display(), start.elapsed());

        Ok(buffer)
    }
}
