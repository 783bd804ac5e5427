//! Rasterlab Playback
//!
//! Paces a precomputed sequence through a draw callback, one step per
//! tick, with pause, resume and hard cancellation.
//!
//! # Architecture
//!
//! - [`Playback`]: the pure cursor state machine (no timers, no I/O)
//! - [`pace`]: interval clamping and the speed-to-delay formulas for the
//!   two display models
//! - [`spawn_ticker`]: a cancellable cooperative timer; the liveness flag
//!   is re-checked inside every tick, so a tick that was already queued
//!   when `cancel()` returned does nothing
//! - [`StepPlayer`]: single-flight playback; starting a new run
//!   implicitly cancels the one in flight and hands back a
//!   [`PlaybackHandle`] carrying its own cancellation token
//!
//! # Scheduling model
//!
//! Cooperative and single-writer: one timer per player instance, steps
//! delivered strictly in generation order, suspension only between
//! ticks. "Concurrency" is the interleaving of independently paced
//! timers, never parallel mutation.

mod pace;
mod playback;
mod player;
mod ticker;

pub use pace::{
    clamp_interval, raster_cell_interval, vector_refresh_interval, MAX_INTERVAL_MS,
    MIN_INTERVAL_MS, SWEEP_FRAME_FACTOR, VECTOR_REFRESH_FACTOR,
};
pub use playback::{Playback, PlaybackState};
pub use player::{PlaybackHandle, StepPlayer};
pub use ticker::{spawn_ticker, TickerHandle, TickerToken};
