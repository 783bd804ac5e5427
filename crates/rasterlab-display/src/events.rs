//! Display events for UI readout.

use rasterlab_surface::Color;
use serde::{Deserialize, Serialize};

/// What a simulator or trace playback did on one tick.
///
/// This is the engine's outward-facing stream: a UI renders the readout
/// from it, tests assert against it. Draw calls themselves go through
/// the surface; events describe them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DisplayEvent {
    /// The raster sweep drew one framebuffer cell
    CellDrawn { x: i32, y: i32, color: Color, frame: u64 },

    /// The raster sweep finished a frame and wrapped to the top
    FrameCompleted { frame: u64 },

    /// The random-scan beam highlighted one segment
    SegmentTraced { index: usize, cycle: u64 },

    /// The random-scan beam wrapped past the end of the display file
    RefreshCompleted { cycle: u64 },

    /// Algorithm playback drew one pixel; carries the per-step readout
    StepTraced {
        x: i32,
        y: i32,
        index: usize,
        description: String,
    },

    /// Algorithm playback delivered every step
    TraceCompleted { total: usize },
}

impl DisplayEvent {
    /// Whether this event marks the end of a frame, cycle or trace.
    pub fn is_completion(&self) -> bool {
        matches!(
            self,
            DisplayEvent::FrameCompleted { .. }
                | DisplayEvent::RefreshCompleted { .. }
                | DisplayEvent::TraceCompleted { .. }
        )
    }
}
