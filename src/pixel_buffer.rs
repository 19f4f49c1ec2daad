use crate::color::Color;

/// A row-major grid of colors with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn is_inside(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Color at `(x, y)`, or None if outside the buffer.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if self.is_inside(x, y) {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Sets the color at `(x, y)`. Returns false, leaving the buffer untouched, if outside.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Color) -> bool {
        if self.is_inside(x, y) {
            self.pixels[y * self.width + x] = color;
            true
        } else {
            false
        }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, Color> {
        self.pixels.chunks(self.width.max(1))
    }

    pub fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, Color> {
        self.pixels.chunks_mut(self.width.max(1))
    }

    /// Mutable access to the backing storage, one row after another.
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }
}
