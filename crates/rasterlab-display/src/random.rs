//! Random-scan (vector) display simulator.
//!
//! Models a calligraphic display: no framebuffer, just an ordered
//! "display file" of segments that the beam re-strokes on every refresh.
//! Each tick redraws the whole file at normal intensity, then overdraws
//! one segment highlighted to mark the beam position, cycling through
//! the file in insertion order.

use rasterlab_surface::{Color, Surface};

use crate::{DisplayConfig, LineSegment};

/// Status shown while there is nothing to refresh.
pub const EMPTY_DISPLAY_FILE_STATUS: &str = "display file is empty; beam idle";

/// What one refresh tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTick {
    /// Empty display file; nothing drawn
    Idle,
    /// Highlighted the segment at `index`
    SegmentTraced { index: usize },
    /// Highlighted the last segment and wrapped; `cycle` counts refreshes
    CycleCompleted { index: usize, cycle: u64 },
}

/// The display-file replay state machine.
///
/// `segment_index` always satisfies `index < len` for a non-empty file
/// and stays 0 for an empty one. Replacing the display file rewinds the
/// beam to the first segment.
#[derive(Debug, Clone)]
pub struct RandomScanDisplay {
    config: DisplayConfig,
    display_file: Vec<LineSegment>,
    segment_index: usize,
    cycles: u64,
}

impl RandomScanDisplay {
    /// Create a simulator with an empty display file.
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            config,
            display_file: Vec::new(),
            segment_index: 0,
            cycles: 0,
        }
    }

    /// The display file, in replay order.
    pub fn display_file(&self) -> &[LineSegment] {
        &self.display_file
    }

    /// Append a segment; replay order is insertion order.
    pub fn push_segment(&mut self, segment: LineSegment) {
        self.display_file.push(segment);
    }

    /// Replace the display file and rewind the beam.
    pub fn set_display_file(&mut self, segments: Vec<LineSegment>) {
        self.display_file = segments;
        self.segment_index = 0;
    }

    /// Drop every segment and rewind the beam.
    pub fn clear_display_file(&mut self) {
        self.display_file.clear();
        self.segment_index = 0;
    }

    /// Index of the segment the beam will highlight next.
    pub fn segment_index(&self) -> usize {
        self.segment_index
    }

    /// Number of completed refresh cycles.
    pub fn cycles_completed(&self) -> u64 {
        self.cycles
    }

    /// Run one refresh.
    ///
    /// Clears the surface, re-strokes every segment at normal intensity
    /// (persistence-of-vision emulation), overdraws the segment under
    /// the beam highlighted, then advances the beam, wrapping past the
    /// end of the file. An empty file is a no-op.
    pub fn tick(&mut self, surface: &mut dyn Surface) -> RefreshTick {
        if self.display_file.is_empty() {
            return RefreshTick::Idle;
        }

        surface.clear();
        for segment in &self.display_file {
            stroke(surface, segment, self.config.foreground, self.config.cell_size);
        }

        let index = self.segment_index;
        stroke(
            surface,
            &self.display_file[index],
            self.config.highlight,
            self.config.cell_size,
        );

        self.segment_index = (index + 1) % self.display_file.len();
        if self.segment_index == 0 {
            self.cycles += 1;
            tracing::debug!("random-scan refresh cycle {} complete", self.cycles);
            RefreshTick::CycleCompleted {
                index,
                cycle: self.cycles,
            }
        } else {
            RefreshTick::SegmentTraced { index }
        }
    }
}

/// Draw one segment through the surface adapter.
fn stroke(surface: &mut dyn Surface, segment: &LineSegment, color: Color, cell_size: u32) {
    for pixel in segment.pixels() {
        surface.set_pixel(pixel.x, pixel.y, color, cell_size);
    }
}
