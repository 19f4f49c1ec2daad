use std::{io, path::PathBuf};
use thiserror::Error;

/// Reasons a raster configuration is rejected before any rendering starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Nearest seed queries are undefined without at least one seed.
    #[error("at least one seed is required")]
    NoSeeds,

    #[error("invalid raster dimensions {width}x{height}, each side must be in 1..=65535")]
    InvalidDimensions { width: usize, height: usize },

    #[error("seed {index} at ({x}, {y}) lies outside the raster")]
    SeedOutOfBounds { index: usize, x: u16, y: u16 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to write image to '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
