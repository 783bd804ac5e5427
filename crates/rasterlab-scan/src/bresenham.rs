//! Bresenham's integer line algorithm.
//!
//! Integer-only error-term walk. `err` starts at `dx - dy`; each step
//! doubles it and compares against `-dy` and `dx` to decide which axes
//! advance. Terminates exactly at the far endpoint, so both endpoints
//! are always emitted and every consecutive pair of pixels is
//! 8-connected.

use crate::{PixelStep, Point};

/// Rasterize a line with Bresenham's algorithm.
///
/// Total for all `i32` endpoints: the error arithmetic runs on `i64`, so
/// the doubled error term cannot overflow. Output is duplicate-free and
/// inclusive of both endpoints; a degenerate line emits one pixel.
pub fn bresenham_line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<PixelStep> {
    let dx = i64::from(x1) - i64::from(x0);
    let dy = i64::from(y1) - i64::from(y0);
    let dx = dx.abs();
    let dy = dy.abs();
    let sx: i64 = if x0 < x1 { 1 } else { -1 };
    let sy: i64 = if y0 < y1 { 1 } else { -1 };

    let mut err = dx - dy;
    let mut x = i64::from(x0);
    let mut y = i64::from(y0);
    let mut sequence = Vec::with_capacity((dx.max(dy) + 1) as usize);

    loop {
        sequence.push(PixelStep::new(
            Point::new(x as i32, y as i32),
            format!("plot ({x}, {y}), err = {err}"),
        ));
        if x == i64::from(x1) && y == i64::from(y1) {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    sequence
}
