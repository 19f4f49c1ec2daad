use std::fmt;

use crate::seeds::Coordinate;

/// A packed 32 bit color.
///
/// Byte 0 holds blue, byte 1 green, byte 2 red and byte 3 alpha. Alpha is kept in memory but never
/// written out by the encoder.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const RED: Color = Color(0xFFFF_0000);

    #[inline]
    pub const fn from_u32(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self((alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Channels in output order, alpha dropped.
    #[inline]
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{:08X})", self.0)
    }
}

/// Maps a coordinate to the color of its Voronoi region.
///
/// The inverted `x` fills the low half word (blue and green) and `y` fills the high half word (red
/// and alpha), so every distinct 16 bit coordinate gets a distinct color without a palette.
#[inline]
pub fn coordinate_to_color(coordinate: &Coordinate) -> Color {
    let x = !coordinate.x;
    Color((coordinate.y as u32) << 16 | x as u32)
}
