//! Discrete Voronoi diagrams on a pixel grid.
//!
//! Every pixel takes the color of its nearest seed (squared Euclidean distance, lowest index on
//! ties), seeds are marked with small discs, and the result is written as a binary PPM.
//!
//! ```no_run
//! use voronoi_raster::VoronoiRasterBuilder;
//!
//! let raster = VoronoiRasterBuilder::default()
//!     .set_dimensions(640, 480)
//!     .set_seed_count(12)
//!     .build()?;
//! raster.save("output.ppm")?;
//! # Ok::<(), voronoi_raster::Error>(())
//! ```

mod circle;
mod color;
mod error;
mod pipeline;
mod pixel_buffer;
mod ppm;
mod raster_builder;
mod rasterizer;
mod seeds;
mod utils;

pub use circle::{stamp_circle, stamp_seeds};
pub use color::{coordinate_to_color, Color};
pub use error::{ConfigError, Error};
pub use pipeline::VoronoiRaster;
pub use pixel_buffer::PixelBuffer;
pub use ppm::{save_ppm, write_ppm, MAX_CHANNEL_VALUE};
pub use raster_builder::*;
pub use rasterizer::{nearest_seed, rasterize, rasterize_parallel};
pub use seeds::{Coordinate, SeedSet};
pub use utils::dist2;
