//! Async runners driving the simulators.
//!
//! A runner owns its simulator behind a mutex, shares a surface with the
//! embedder (single-writer: only the runner draws while it is active),
//! ticks on a cancellable timer at the display model's pace and forwards
//! a [`DisplayEvent`] stream over a channel. When the receiver goes
//! away, the run winds down at the next tick boundary.

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::UnboundedSender;

use rasterlab_player::{
    raster_cell_interval, spawn_ticker, vector_refresh_interval, PlaybackHandle, StepPlayer,
    TickerHandle, TickerToken,
};
use rasterlab_scan::ScanRequest;
use rasterlab_surface::{Surface, SurfaceSize};

use crate::{
    DisplayConfig, DisplayEvent, LineSegment, RandomScanDisplay, RasterScanDisplay, RefreshTick,
    SweepTick, EMPTY_DISPLAY_FILE_STATUS,
};

/// Drives a [`RasterScanDisplay`] sweep.
pub struct RasterRunner {
    config: DisplayConfig,
    display: Arc<Mutex<RasterScanDisplay>>,
    active: Option<TickerToken>,
}

impl RasterRunner {
    /// Create a runner with an empty framebuffer of `size`.
    pub fn new(config: DisplayConfig, size: SurfaceSize) -> Self {
        Self {
            config,
            display: Arc::new(Mutex::new(RasterScanDisplay::new(config, size))),
            active: None,
        }
    }

    /// Re-rasterize the segment list, atomically between ticks.
    ///
    /// The running sweep, if any, continues on the new frame from the
    /// top-left; no cell of the old frame is drawn again.
    pub fn rebuild(&self, segments: &[LineSegment], size: SurfaceSize) {
        if let Ok(mut display) = self.display.lock() {
            display.rebuild(segments, size);
        }
    }

    /// Number of sweeps completed so far.
    pub fn frames_completed(&self) -> u64 {
        self.display
            .lock()
            .map(|display| display.frames_completed())
            .unwrap_or(0)
    }

    /// Whether a run was started and not yet stopped.
    pub fn is_running(&self) -> bool {
        self.active
            .as_ref()
            .map(|token| !token.is_cancelled())
            .unwrap_or(false)
    }

    /// Cancel the in-flight sweep, if any.
    pub fn stop(&mut self) {
        if let Some(token) = self.active.take() {
            token.cancel();
        }
    }

    /// Start sweeping onto `surface`, one cell per paced tick.
    ///
    /// Any previous run on this runner is cancelled first. The per-cell
    /// interval comes from [`raster_cell_interval`], so one full frame
    /// takes the same wall time whatever the resolution.
    pub fn start<S>(
        &mut self,
        surface: Arc<Mutex<S>>,
        events: UnboundedSender<DisplayEvent>,
    ) -> TickerHandle
    where
        S: Surface + Send + 'static,
    {
        self.stop();

        let area = self
            .display
            .lock()
            .map(|display| display.framebuffer().size().area())
            .unwrap_or(0);
        let interval = raster_cell_interval(self.config.base_interval_ms, area);
        tracing::info!(
            "raster sweep starting: {} cells, {} us per cell",
            area,
            interval.as_micros()
        );

        let display = self.display.clone();
        let ticker = spawn_ticker(interval, move || {
            let Ok(mut display) = display.lock() else {
                return ControlFlow::Break(());
            };
            let Ok(mut surface) = surface.lock() else {
                return ControlFlow::Break(());
            };
            let event = match display.tick(&mut *surface) {
                SweepTick::Cell { x, y, color } => DisplayEvent::CellDrawn {
                    x,
                    y,
                    color,
                    frame: display.frames_completed(),
                },
                SweepTick::FrameCompleted { frame } => DisplayEvent::FrameCompleted { frame },
            };
            if events.send(event).is_err() {
                return ControlFlow::Break(());
            }
            ControlFlow::Continue(())
        });

        self.active = Some(ticker.token());
        ticker
    }
}

/// Drives a [`RandomScanDisplay`] replay.
pub struct VectorRunner {
    config: DisplayConfig,
    display: Arc<Mutex<RandomScanDisplay>>,
    active: Option<TickerToken>,
}

impl VectorRunner {
    /// Create a runner with an empty display file.
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            config,
            display: Arc::new(Mutex::new(RandomScanDisplay::new(config))),
            active: None,
        }
    }

    /// Append a segment to the display file.
    pub fn push_segment(&self, segment: LineSegment) {
        if let Ok(mut display) = self.display.lock() {
            display.push_segment(segment);
        }
    }

    /// Replace the display file, rewinding the beam.
    pub fn set_display_file(&self, segments: Vec<LineSegment>) {
        if let Ok(mut display) = self.display.lock() {
            display.set_display_file(segments);
        }
    }

    /// Drop every segment.
    pub fn clear_display_file(&self) {
        if let Ok(mut display) = self.display.lock() {
            display.clear_display_file();
        }
    }

    /// Number of refresh cycles completed so far.
    pub fn cycles_completed(&self) -> u64 {
        self.display
            .lock()
            .map(|display| display.cycles_completed())
            .unwrap_or(0)
    }

    /// Whether a run was started and not yet stopped.
    pub fn is_running(&self) -> bool {
        self.active
            .as_ref()
            .map(|token| !token.is_cancelled())
            .unwrap_or(false)
    }

    /// Cancel the in-flight replay, if any.
    pub fn stop(&mut self) {
        if let Some(token) = self.active.take() {
            token.cancel();
        }
    }

    /// Start replaying onto `surface`, one refresh per paced tick.
    ///
    /// An empty display file keeps the run alive but idle; segments
    /// pushed later are picked up on the next tick.
    pub fn start<S>(
        &mut self,
        surface: Arc<Mutex<S>>,
        events: UnboundedSender<DisplayEvent>,
    ) -> TickerHandle
    where
        S: Surface + Send + 'static,
    {
        self.stop();

        let interval = vector_refresh_interval(self.config.base_interval_ms);
        tracing::info!(
            "random-scan replay starting: {} ms per refresh",
            interval.as_millis()
        );

        let display = self.display.clone();
        let ticker = spawn_ticker(interval, move || {
            let Ok(mut display) = display.lock() else {
                return ControlFlow::Break(());
            };
            let Ok(mut surface) = surface.lock() else {
                return ControlFlow::Break(());
            };
            let sent = match display.tick(&mut *surface) {
                RefreshTick::Idle => {
                    tracing::debug!("{}", EMPTY_DISPLAY_FILE_STATUS);
                    Ok(())
                }
                RefreshTick::SegmentTraced { index } => events.send(DisplayEvent::SegmentTraced {
                    index,
                    cycle: display.cycles_completed(),
                }),
                RefreshTick::CycleCompleted { index, cycle } => events
                    .send(DisplayEvent::SegmentTraced { index, cycle })
                    .and_then(|_| events.send(DisplayEvent::RefreshCompleted { cycle })),
            };
            if sent.is_err() {
                return ControlFlow::Break(());
            }
            ControlFlow::Continue(())
        });

        self.active = Some(ticker.token());
        ticker
    }
}

/// Validate a request and animate its trace onto `surface`.
///
/// The single-algorithm visualization pipeline: `request.trace()` runs
/// up front, so invalid parameters fail here with nothing drawn; the
/// resulting sequence then plays through `player` one pixel per tick,
/// emitting a [`DisplayEvent::StepTraced`] readout per step and
/// [`DisplayEvent::TraceCompleted`] at the end. Starting a new trace on
/// the same player cancels the previous one.
pub fn play_trace<S>(
    player: &mut StepPlayer,
    request: &ScanRequest,
    surface: Arc<Mutex<S>>,
    config: DisplayConfig,
    interval_ms: u64,
    events: UnboundedSender<DisplayEvent>,
) -> rasterlab_scan::Result<PlaybackHandle>
where
    S: Surface + Send + 'static,
{
    let steps = request.trace()?;
    let total = steps.len();
    tracing::info!(
        "tracing {}: {} steps at {} ms",
        request.algorithm_name(),
        total,
        interval_ms
    );

    let done_events = events.clone();
    let handle = player.start(
        steps,
        interval_ms,
        move |step, index| {
            if let Ok(mut surface) = surface.lock() {
                surface.set_pixel(
                    step.position.x,
                    step.position.y,
                    config.foreground,
                    config.cell_size,
                );
            }
            let _ = events.send(DisplayEvent::StepTraced {
                x: step.position.x,
                y: step.position.y,
                index,
                description: step.description.clone(),
            });
        },
        move || {
            let _ = done_events.send(DisplayEvent::TraceCompleted { total });
        },
    );
    Ok(handle)
}
