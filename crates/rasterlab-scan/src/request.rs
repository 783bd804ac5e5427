//! Validated input boundary.
//!
//! UI input arrives as raw floating-point numbers. A [`ScanRequest`]
//! checks them once (finite, representable on the pixel grid, circle
//! radius positive) and only then dispatches to an algorithm, so no
//! partial sequence can ever be produced from bad input.

use crate::{bresenham_line, dda_line, midpoint_circle, PixelStep, Point, Result, ScanError};

/// An algorithm run requested by the caller, parameters as entered.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "algorithm", rename_all = "snake_case")
)]
pub enum ScanRequest {
    /// DDA line from (x0, y0) to (x1, y1).
    Dda { x0: f64, y0: f64, x1: f64, y1: f64 },
    /// Bresenham line from (x0, y0) to (x1, y1).
    Bresenham { x0: f64, y0: f64, x1: f64, y1: f64 },
    /// Midpoint circle centered on (cx, cy) with radius r.
    MidpointCircle { cx: f64, cy: f64, r: f64 },
}

impl ScanRequest {
    /// Validate the parameters and run the selected algorithm.
    pub fn trace(&self) -> Result<Vec<PixelStep>> {
        match *self {
            ScanRequest::Dda { x0, y0, x1, y1 } => {
                let (x0, y0) = (coordinate("x0", x0)?, coordinate("y0", y0)?);
                let (x1, y1) = (coordinate("x1", x1)?, coordinate("y1", y1)?);
                Ok(dda_line(x0, y0, x1, y1))
            }
            ScanRequest::Bresenham { x0, y0, x1, y1 } => {
                let (x0, y0) = (coordinate("x0", x0)?, coordinate("y0", y0)?);
                let (x1, y1) = (coordinate("x1", x1)?, coordinate("y1", y1)?);
                Ok(bresenham_line(x0, y0, x1, y1))
            }
            ScanRequest::MidpointCircle { cx, cy, r } => {
                let center = Point::new(coordinate("cx", cx)?, coordinate("cy", cy)?);
                let radius = coordinate("r", r)?;
                midpoint_circle(center, radius)
            }
        }
    }

    /// Short display name of the selected algorithm.
    pub fn algorithm_name(&self) -> &'static str {
        match self {
            ScanRequest::Dda { .. } => "dda",
            ScanRequest::Bresenham { .. } => "bresenham",
            ScanRequest::MidpointCircle { .. } => "midpoint_circle",
        }
    }
}

/// Check one raw parameter and round it onto the integer grid.
fn coordinate(name: &str, value: f64) -> Result<i32> {
    if !value.is_finite() {
        return Err(ScanError::InvalidParameter(format!(
            "{name} must be a finite number, got {value}"
        )));
    }
    let rounded = value.round();
    if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
        return Err(ScanError::InvalidParameter(format!(
            "{name} is outside the pixel grid range: {value}"
        )));
    }
    Ok(rounded as i32)
}
