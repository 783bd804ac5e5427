//! In-memory surface for tests and headless use.

use crate::{Color, PixelGrid, Surface, SurfaceSize};

/// A [`Surface`] backed by an owned [`PixelGrid`].
///
/// Everything drawn can be read back, which is what the test suites
/// assert against.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    grid: PixelGrid,
    background: Color,
}

impl MemorySurface {
    /// Create a surface filled with `background`.
    pub fn new(size: SurfaceSize, background: Color) -> Self {
        Self {
            grid: PixelGrid::new(size, background),
            background,
        }
    }

    /// Read back the color at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.grid.get(x, y)
    }

    /// The backing grid.
    #[inline]
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// The background color the surface clears to.
    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }
}

impl Surface for MemorySurface {
    fn size(&self) -> SurfaceSize {
        self.grid.size()
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color, size: u32) {
        for dy in 0..size as i32 {
            for dx in 0..size as i32 {
                self.grid.set(x + dx, y + dy, color);
            }
        }
    }

    fn clear(&mut self) {
        self.grid.fill(self.background);
    }
}
