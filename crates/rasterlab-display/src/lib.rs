//! Rasterlab Display Simulation
//!
//! Replays a list of user-drawn line segments through the two historical
//! display architectures, one discrete unit per timer tick.
//!
//! # Architecture
//!
//! - **Raster scan**: rasterize every segment into a framebuffer, then
//!   sweep it in row-major order, one cell per tick, clearing and
//!   wrapping at the bottom. Refresh cost scales with resolution.
//! - **Random scan**: keep the segments as an ordered "display file" and
//!   re-stroke all of them each refresh, highlighting one per tick to
//!   mark the beam. Refresh cost scales with segment count.
//! - **Runners**: own a simulator plus a shared surface, tick it on a
//!   cancellable timer at the model's pace, and forward a serializable
//!   [`DisplayEvent`] stream for UI readout.
//!
//! # Single-writer rule
//!
//! Exactly one runner drives a given surface at a time; starting a new
//! run or changing input cancels the stale run first, so pixels from an
//! old generation are never drawn over a fresh rebuild.

mod config;
mod events;
mod random;
mod raster;
mod runner;
mod segment;

pub use config::DisplayConfig;
pub use events::DisplayEvent;
pub use random::{RandomScanDisplay, RefreshTick, EMPTY_DISPLAY_FILE_STATUS};
pub use raster::{RasterScanDisplay, SweepTick};
pub use runner::{play_trace, RasterRunner, VectorRunner};
pub use segment::LineSegment;
