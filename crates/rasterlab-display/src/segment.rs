//! User-drawn line segments.

use rasterlab_scan::{bresenham_line, Point};

/// One stroke of the user's pen, immutable after creation.
///
/// Segments live in an ordered list (the "display file" of a vector
/// display); insertion order is replay order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    /// Create a segment.
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// The pixels this segment covers, in stroke order.
    ///
    /// Display replay wants pixels, not diagnostics, so the Bresenham
    /// trace is reduced to positions here.
    pub fn pixels(&self) -> Vec<Point> {
        bresenham_line(self.start.x, self.start.y, self.end.x, self.end.y)
            .into_iter()
            .map(|step| step.position)
            .collect()
    }
}
