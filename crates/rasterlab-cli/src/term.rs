//! ANSI terminal drawing surface.
//!
//! Renders the pixel grid with truecolor escape sequences, one pixel as
//! a two-column block so cells come out roughly square. Draws are
//! immediate (cursor addressing per block), which is exactly what the
//! one-cell-per-tick animations want.

use std::io::{self, Write};

use rasterlab_surface::{Color, Surface, SurfaceSize};

/// A [`Surface`] writing straight to stdout.
pub struct TermSurface {
    size: SurfaceSize,
    background: Color,
}

impl TermSurface {
    /// Take over the terminal: clear it, hide the cursor, paint the
    /// background.
    pub fn new(size: SurfaceSize, background: Color) -> Self {
        let mut surface = Self { size, background };
        let mut out = io::stdout();
        let _ = write!(out, "\x1b[2J\x1b[?25l");
        let _ = out.flush();
        surface.clear();
        surface
    }

    /// Print a one-line status message below the grid.
    pub fn status(&self, text: &str) {
        let mut out = io::stdout();
        let row = self.size.height + 2;
        let _ = write!(out, "\x1b[{row};1H\x1b[2K{text}");
        let _ = out.flush();
    }

    fn paint_block(&self, out: &mut impl Write, x: i32, y: i32, color: Color) {
        // Terminal rows/columns are 1-based; each pixel is two columns.
        let row = y + 1;
        let col = x * 2 + 1;
        let _ = write!(
            out,
            "\x1b[{row};{col}H\x1b[38;2;{};{};{}m██\x1b[0m",
            color.r, color.g, color.b
        );
    }
}

impl Surface for TermSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color, size: u32) {
        let mut out = io::stdout();
        for dy in 0..size as i32 {
            for dx in 0..size as i32 {
                if self.size.contains(x + dx, y + dy) {
                    self.paint_block(&mut out, x + dx, y + dy, color);
                }
            }
        }
        let _ = out.flush();
    }

    fn clear(&mut self) {
        let mut out = io::stdout();
        for y in 0..self.size.height as i32 {
            for x in 0..self.size.width as i32 {
                self.paint_block(&mut out, x, y, self.background);
            }
        }
        let _ = out.flush();
    }
}

impl Drop for TermSurface {
    fn drop(&mut self) {
        // Give the terminal back: cursor visible, parked below the grid.
        let mut out = io::stdout();
        let row = self.size.height + 3;
        let _ = write!(out, "\x1b[?25h\x1b[{row};1H");
        let _ = out.flush();
    }
}
