use crate::{color::Color, pixel_buffer::PixelBuffer, seeds::{Coordinate, SeedSet}, utils::dist2};

/// Fills a disc of `radius` around `center`, boundary included.
///
/// Pixels falling outside the buffer are skipped. Covered pixels are overwritten, no blending.
pub fn stamp_circle(buffer: &mut PixelBuffer, center: &Coordinate, radius: u16, color: Color) {
    let r = radius as i64;
    let (cx, cy) = (center.x as i64, center.y as i64);
    let (width, height) = (buffer.width() as i64, buffer.height() as i64);

    // clip the bounding square up front rather than testing each pixel
    let y_range = (cy - r).max(0)..=(cy + r).min(height - 1);
    let x_range = (cx - r).max(0)..=(cx + r).min(width - 1);

    for y in y_range {
        for x in x_range.clone() {
            if dist2(x, y, center) <= r * r {
                buffer.set(x as usize, y as usize, color);
            }
        }
    }
}

/// Marks every seed with a disc, so markers end up on top of the Voronoi fill.
pub fn stamp_seeds(buffer: &mut PixelBuffer, seeds: &SeedSet, radius: u16, color: Color) {
    for seed in seeds {
        stamp_circle(buffer, seed, radius, color);
    }
}
