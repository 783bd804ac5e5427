//! Per-pixel trace output.

use crate::Point;

/// One unit of rasterizer output: a pixel plus the algorithm state that
/// produced it.
///
/// The description is display text for step-by-step readout, e.g. the
/// current error term or decision parameter. Sequence order is the
/// algorithm's generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelStep {
    pub position: Point,
    pub description: String,
}

impl PixelStep {
    /// Create a new step.
    pub fn new(position: Point, description: impl Into<String>) -> Self {
        Self {
            position,
            description: description.into(),
        }
    }
}
