//! The two display architectures driven end to end through their
//! runners, observed through the event stream.

use std::sync::{Arc, Mutex};

use rasterlab_display::{
    DisplayConfig, DisplayEvent, LineSegment, RasterRunner, VectorRunner,
};
use rasterlab_scan::Point;
use rasterlab_surface::{MemorySurface, SurfaceSize};
use tokio::sync::mpsc;

fn surface(size: SurfaceSize) -> Arc<Mutex<MemorySurface>> {
    Arc::new(Mutex::new(MemorySurface::new(
        size,
        DisplayConfig::default().background,
    )))
}

fn scene() -> Vec<LineSegment> {
    vec![
        LineSegment::new(Point::new(0, 0), Point::new(7, 0)),
        LineSegment::new(Point::new(7, 0), Point::new(0, 5)),
        LineSegment::new(Point::new(0, 5), Point::new(0, 0)),
    ]
}

#[tokio::test(start_paused = true)]
async fn raster_sweep_visits_exactly_area_cells_per_frame() {
    let size = SurfaceSize::new(8, 6);
    let mut runner = RasterRunner::new(DisplayConfig::default(), size);
    runner.rebuild(&scene(), size);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _ticker = runner.start(surface(size), tx);

    let mut cells_this_frame = 0u32;
    let mut frames = 0u64;
    while frames < 3 {
        match rx.recv().await.expect("stream open") {
            DisplayEvent::CellDrawn { .. } => cells_this_frame += 1,
            DisplayEvent::FrameCompleted { frame } => {
                assert_eq!(cells_this_frame, size.area());
                cells_this_frame = 0;
                frames = frame;
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
    runner.stop();
}

#[tokio::test(start_paused = true)]
async fn surface_matches_framebuffer_at_wrap_time() {
    let size = SurfaceSize::new(8, 6);
    let config = DisplayConfig::default();
    let mut runner = RasterRunner::new(config, size);
    runner.rebuild(&scene(), size);
    let shared = surface(size);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _ticker = runner.start(shared.clone(), tx);

    // The number of distinct lit pixels in the scene, counted from the
    // segments themselves.
    let mut lit = std::collections::HashSet::new();
    for segment in scene() {
        for pixel in segment.pixels() {
            lit.insert(pixel);
        }
    }

    let mut cells = 0u32;
    loop {
        match rx.recv().await.expect("stream open") {
            DisplayEvent::CellDrawn { .. } => {
                cells += 1;
                if cells == size.area() {
                    // Every framebuffer cell has been copied to the
                    // surface; the lit sets agree just before the wrap.
                    let surface = shared.lock().unwrap();
                    assert_eq!(
                        surface.grid().lit_count(config.background),
                        lit.len()
                    );
                    for pixel in &lit {
                        assert_eq!(
                            surface.pixel(pixel.x, pixel.y),
                            Some(config.foreground)
                        );
                    }
                }
            }
            DisplayEvent::FrameCompleted { .. } => break,
            other => panic!("unexpected event {other:?}"),
        }
    }

    // The wrap clears the surface for the next sweep.
    let surface = shared.lock().unwrap();
    assert_eq!(surface.grid().lit_count(config.background), 0);
    runner.stop();
}

#[tokio::test(start_paused = true)]
async fn rebuild_mid_run_swaps_the_frame_atomically() {
    let size = SurfaceSize::new(8, 4);
    let config = DisplayConfig::default();
    let mut runner = RasterRunner::new(config, size);
    runner.rebuild(
        &[LineSegment::new(Point::new(0, 0), Point::new(7, 0))],
        size,
    );
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _ticker = runner.start(surface(size), tx);

    // Frame 1 carries the segment.
    let mut lit_cells = 0;
    loop {
        match rx.recv().await.expect("stream open") {
            DisplayEvent::CellDrawn { color, .. } => {
                if color == config.foreground {
                    lit_cells += 1;
                }
            }
            DisplayEvent::FrameCompleted { frame: 1 } => break,
            DisplayEvent::FrameCompleted { .. } => unreachable!(),
            other => panic!("unexpected event {other:?}"),
        }
    }
    assert_eq!(lit_cells, 8);

    // Swap in an empty segment list between ticks; the entire next
    // frame comes from the new framebuffer.
    runner.rebuild(&[], size);
    let mut lit_cells = 0;
    loop {
        match rx.recv().await.expect("stream open") {
            DisplayEvent::CellDrawn { color, .. } => {
                if color == config.foreground {
                    lit_cells += 1;
                }
            }
            DisplayEvent::FrameCompleted { .. } => break,
            other => panic!("unexpected event {other:?}"),
        }
    }
    assert_eq!(lit_cells, 0);
    runner.stop();
}

#[tokio::test(start_paused = true)]
async fn vector_beam_cycles_through_the_display_file() {
    let mut runner = VectorRunner::new(DisplayConfig::default());
    runner.set_display_file(scene());
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _ticker = runner.start(surface(SurfaceSize::new(16, 16)), tx);

    let mut highlighted = Vec::new();
    let mut cycles = 0u64;
    while cycles < 2 {
        match rx.recv().await.expect("stream open") {
            DisplayEvent::SegmentTraced { index, .. } => highlighted.push(index),
            DisplayEvent::RefreshCompleted { cycle } => cycles = cycle,
            other => panic!("unexpected event {other:?}"),
        }
    }
    runner.stop();

    // Period equals file length; every segment highlighted once per cycle.
    assert_eq!(highlighted, vec![0, 1, 2, 0, 1, 2]);
}

#[tokio::test(start_paused = true)]
async fn empty_display_file_stays_idle() {
    let mut runner = VectorRunner::new(DisplayConfig::default());
    let size = SurfaceSize::new(8, 8);
    let shared = surface(size);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _ticker = runner.start(shared.clone(), tx);

    tokio::time::sleep(std::time::Duration::from_secs(5)).await;
    assert!(rx.try_recv().is_err());
    {
        let surface = shared.lock().unwrap();
        assert_eq!(surface.grid().lit_count(surface.background()), 0);
    }

    // Segments pushed later wake the replay up.
    runner.push_segment(LineSegment::new(Point::new(0, 0), Point::new(4, 4)));
    let event = rx.recv().await.expect("stream open");
    assert!(matches!(event, DisplayEvent::SegmentTraced { .. } | DisplayEvent::RefreshCompleted { .. }));
    runner.stop();
}
