//! Raster scan-line display simulator.
//!
//! Models a framebuffer display: segments are rasterized into a color
//! grid once, then an electron-beam sweep reads the grid back in raster
//! order (row-major, left to right, top to bottom), painting one cell
//! per tick. Reaching the bottom clears the screen and wraps to the top;
//! a raster display never stops refreshing.

use rasterlab_surface::{Color, PixelGrid, Surface, SurfaceSize};

use crate::{DisplayConfig, LineSegment};

/// What one sweep tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepTick {
    /// Painted the framebuffer cell at `(x, y)`
    Cell { x: i32, y: i32, color: Color },
    /// Cleared and wrapped to the top-left; `frame` counts completed sweeps
    FrameCompleted { frame: u64 },
}

/// The framebuffer sweep state machine.
///
/// The cursor invariant: `scanline < height` and `column < width` while
/// cells remain in the current frame; `scanline == height` is the wrap
/// position handled by the next tick. `rebuild` atomically replaces the
/// frame content and rewinds the cursor, so a sweep never mixes cells
/// from two generations of the segment list.
#[derive(Debug, Clone)]
pub struct RasterScanDisplay {
    config: DisplayConfig,
    framebuffer: PixelGrid,
    scanline: u32,
    column: u32,
    frames: u64,
}

impl RasterScanDisplay {
    /// Create a simulator with an empty framebuffer of `size`.
    pub fn new(config: DisplayConfig, size: SurfaceSize) -> Self {
        Self {
            config,
            framebuffer: PixelGrid::new(size, config.background),
            scanline: 0,
            column: 0,
            frames: 0,
        }
    }

    /// Rasterize `segments` into a fresh framebuffer and rewind the sweep.
    ///
    /// Segments are written in list order, so the last segment wins on
    /// overlapping pixels. Safe to call mid-sweep: the next tick reads
    /// only the new frame, starting at the top-left.
    pub fn rebuild(&mut self, segments: &[LineSegment], size: SurfaceSize) {
        let mut framebuffer = PixelGrid::new(size, self.config.background);
        for segment in segments {
            for pixel in segment.pixels() {
                framebuffer.set(pixel.x, pixel.y, self.config.foreground);
            }
        }
        self.framebuffer = framebuffer;
        self.scanline = 0;
        self.column = 0;
        tracing::debug!(
            "raster framebuffer rebuilt: {} segments on {}x{}",
            segments.len(),
            size.width,
            size.height
        );
    }

    /// The current frame content.
    pub fn framebuffer(&self) -> &PixelGrid {
        &self.framebuffer
    }

    /// Sweep cursor as `(scanline, column)`.
    pub fn cursor(&self) -> (u32, u32) {
        (self.scanline, self.column)
    }

    /// Number of completed sweeps.
    pub fn frames_completed(&self) -> u64 {
        self.frames
    }

    /// Advance the sweep by one cell.
    ///
    /// Draws the cell under the cursor through `surface`, or, past the
    /// last scanline, clears the surface, wraps to `(0, 0)` and reports
    /// the completed frame. A zero-area framebuffer only ever reports
    /// completion.
    pub fn tick(&mut self, surface: &mut dyn Surface) -> SweepTick {
        let size = self.framebuffer.size();
        if size.area() == 0 {
            return SweepTick::FrameCompleted { frame: self.frames };
        }

        if self.scanline < size.height {
            let x = self.column as i32;
            let y = self.scanline as i32;
            let color = self
                .framebuffer
                .get(x, y)
                .unwrap_or(self.config.background);
            surface.set_pixel(x, y, color, self.config.cell_size);

            self.column += 1;
            if self.column == size.width {
                self.column = 0;
                self.scanline += 1;
            }
            SweepTick::Cell { x, y, color }
        } else {
            surface.clear();
            self.scanline = 0;
            self.column = 0;
            self.frames += 1;
            tracing::debug!("raster frame {} complete", self.frames);
            SweepTick::FrameCompleted { frame: self.frames }
        }
    }
}
