//! Midpoint circle algorithm.
//!
//! Walks the second octant from `(0, r)` toward the 45° diagonal, using
//! the integer decision parameter `p` to pick between east and
//! south-east moves. Every `(x, y)` pair is mirrored into all eight
//! octants before the next update, initial position included.

use crate::{PixelStep, Point, Result, ScanError};

/// Number of symmetric mirror points emitted per octant step.
pub const OCTANT_MIRRORS: usize = 8;

/// Rasterize a circle with the midpoint algorithm.
///
/// Requires `radius > 0`; anything else is an [`ScanError::InvalidParameter`].
/// Mirror points can coincide at octant boundaries (on the axes and the
/// diagonal); coincident points are kept, not deduplicated.
pub fn midpoint_circle(center: Point, radius: i32) -> Result<Vec<PixelStep>> {
    if radius <= 0 {
        return Err(ScanError::InvalidParameter(format!(
            "circle radius must be positive, got {radius}"
        )));
    }

    let mut x = 0i32;
    let mut y = radius;
    let mut p = 1 - radius;

    // Roughly 8 mirrors per step, r/sqrt(2) + 1 steps.
    let mut sequence = Vec::with_capacity(OCTANT_MIRRORS * (radius as usize + 1));
    emit_mirrors(&mut sequence, center, x, y, p);

    while x < y {
        x += 1;
        if p < 0 {
            p += 2 * x + 1;
        } else {
            y -= 1;
            p += 2 * x + 1 - 2 * y;
        }
        emit_mirrors(&mut sequence, center, x, y, p);
    }

    Ok(sequence)
}

/// Push the eight symmetric mirrors of `(x, y)` around `center`.
fn emit_mirrors(sequence: &mut Vec<PixelStep>, center: Point, x: i32, y: i32, p: i32) {
    let mirrors = [
        (x, y),
        (y, x),
        (y, -x),
        (x, -y),
        (-x, -y),
        (-y, -x),
        (-y, x),
        (-x, y),
    ];
    for (ox, oy) in mirrors {
        let px = center.x + ox;
        let py = center.y + oy;
        sequence.push(PixelStep::new(
            Point::new(px, py),
            format!("x = {x}, y = {y}, p = {p}, plot ({px}, {py})"),
        ));
    }
}
