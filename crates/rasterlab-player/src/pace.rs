//! Speed-to-delay formulas.
//!
//! The UI hands the engine one base speed in milliseconds. How that
//! becomes a per-tick delay differs per display model:
//!
//! - A raster sweep touches every pixel each frame, so the per-cell
//!   delay divides by surface area; one full frame then takes
//!   `base_ms * SWEEP_FRAME_FACTOR` regardless of resolution.
//! - A vector refresh re-strokes the display file, so its cost scales
//!   with segment count and the per-refresh delay ignores resolution
//!   entirely.

use std::time::Duration;

/// Smallest accepted base speed, in milliseconds.
pub const MIN_INTERVAL_MS: u64 = 10;

/// Largest accepted base speed, in milliseconds.
pub const MAX_INTERVAL_MS: u64 = 500;

/// One raster frame takes `base_ms * SWEEP_FRAME_FACTOR` in total.
pub const SWEEP_FRAME_FACTOR: u64 = 100;

/// A vector refresh tick is `base_ms * VECTOR_REFRESH_FACTOR`.
pub const VECTOR_REFRESH_FACTOR: u64 = 2;

const _: () = assert!(MIN_INTERVAL_MS > 0 && MIN_INTERVAL_MS <= MAX_INTERVAL_MS);

/// Clamp a requested base speed into the supported range.
///
/// The range is a responsiveness choice, not a hard contract: below it
/// the UI cannot keep up with the readout, above it the animation reads
/// as frozen.
pub fn clamp_interval(interval_ms: u64) -> Duration {
    Duration::from_millis(interval_ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS))
}

/// Per-cell delay for a raster sweep over `area` pixels.
///
/// `base_ms * SWEEP_FRAME_FACTOR / area`, floored at 1 ms so large
/// surfaces still animate visibly. The total sweep time for one frame
/// stays `base_ms * SWEEP_FRAME_FACTOR` whatever the resolution.
pub fn raster_cell_interval(base_ms: u64, area: u32) -> Duration {
    let base = base_ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
    let area = u64::from(area.max(1));
    let micros = (base * SWEEP_FRAME_FACTOR * 1_000 / area).max(1_000);
    Duration::from_micros(micros)
}

/// Per-refresh delay for a random-scan replay.
pub fn vector_refresh_interval(base_ms: u64) -> Duration {
    let base = base_ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
    Duration::from_millis(base * VECTOR_REFRESH_FACTOR)
}
