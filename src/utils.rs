use crate::seeds::Coordinate;

/// Calculates the squared distance between pixel `(x, y)` and `c`.
///
/// Signed 64 bit math, so any pair of 16 bit coordinates fits.
#[inline]
pub fn dist2(x: i64, y: i64, c: &Coordinate) -> i64 {
    let dx = x - c.x as i64;
    let dy = y - c.y as i64;
    (dx * dx) + (dy * dy)
}
