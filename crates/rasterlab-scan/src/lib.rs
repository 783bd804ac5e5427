//! Rasterlab Scan Conversion
//!
//! Converts continuous geometric primitives (lines, circles) into ordered
//! sequences of discrete pixels, one [`PixelStep`] per emitted pixel. Each
//! step carries a human-readable description of the algorithm's internal
//! state at that point (floating accumulators, error term, decision
//! parameter), so a caller can replay the algorithm pixel by pixel.
//!
//! # Algorithms
//!
//! - [`dda_line`]: naive digital differential analyzer. Floating-point
//!   accumulators, one emission per major-axis step, rounding drift and all.
//! - [`bresenham_line`]: integer-only error-term line walk. Exact,
//!   duplicate-free, 8-connected.
//! - [`midpoint_circle`]: decision-parameter circle walk over one octant,
//!   mirrored 8 ways per step.
//!
//! # Ordering
//!
//! Sequences are in generation order, not spatial order, and are never
//! deduplicated. The contrast between DDA's rounding revisits and
//! Bresenham's exactness is the point of keeping them raw.
//!
//! # Input boundary
//!
//! UI-facing input arrives as floating-point numbers. [`ScanRequest`]
//! validates those (finite, in range, circle radius positive) once, before
//! any algorithm runs; the algorithms themselves are total over their
//! integer domains.

mod bresenham;
mod circle;
mod dda;
mod error;
mod point;
mod request;
mod step;

pub use bresenham::bresenham_line;
pub use circle::{midpoint_circle, OCTANT_MIRRORS};
pub use dda::dda_line;
pub use error::{Result, ScanError};
pub use point::Point;
pub use request::ScanRequest;
pub use step::PixelStep;
