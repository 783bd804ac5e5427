//! Digital differential analyzer line drawing.
//!
//! The naive textbook form: divide the line into `max(|dx|, |dy|)` equal
//! steps, accumulate fractional increments, round each time. The floating
//! accumulators are carried into the step descriptions so the rounding
//! drift is visible during playback.

use crate::{PixelStep, Point};

/// Rasterize a line with the DDA algorithm.
///
/// Emits exactly `max(|dx|, |dy|) + 1` steps, inclusive of both
/// endpoints. A degenerate line (both endpoints equal) emits a single
/// step. Rounding can revisit an already-emitted pixel on shallow
/// slopes; revisits are kept.
pub fn dda_line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<PixelStep> {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        return vec![PixelStep::new(
            Point::new(x0, y0),
            format!("dx = 0, dy = 0: single point ({x0}, {y0})"),
        )];
    }

    let x_inc = f64::from(dx) / f64::from(steps);
    let y_inc = f64::from(dy) / f64::from(steps);

    let mut x = f64::from(x0);
    let mut y = f64::from(y0);
    let mut sequence = Vec::with_capacity(steps as usize + 1);

    for i in 0..=steps {
        let px = x.round() as i32;
        let py = y.round() as i32;
        sequence.push(PixelStep::new(
            Point::new(px, py),
            format!("i = {i}: x = {x:.2}, y = {y:.2}, plot ({px}, {py})"),
        ));
        x += x_inc;
        y += y_inc;
    }

    sequence
}
