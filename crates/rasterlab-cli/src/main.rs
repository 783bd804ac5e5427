//! Rasterlab demo binary
//!
//! Animates the scan-conversion algorithms and both display
//! architectures on an ANSI terminal.
//!
//! Usage:
//!   rasterlab trace dda <x0> <y0> <x1> <y1>
//!   rasterlab trace bresenham <x0> <y0> <x1> <y1>
//!   rasterlab trace circle <cx> <cy> <r>
//!   rasterlab raster
//!   rasterlab vector
//!   rasterlab ambient

mod ambient;
mod term;

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rasterlab_display::{
    play_trace, DisplayConfig, DisplayEvent, LineSegment, RasterRunner, VectorRunner,
};
use rasterlab_player::{spawn_ticker, StepPlayer};
use rasterlab_scan::{Point, ScanRequest};
use rasterlab_surface::{Color, SurfaceSize};

use ambient::AmbientField;
use term::TermSurface;

/// Grid for algorithm traces; roomy enough for the usage examples.
const TRACE_SURFACE: SurfaceSize = SurfaceSize::new(64, 24);

/// Grid for the display-architecture demos.
const DISPLAY_SURFACE: SurfaceSize = SurfaceSize::new(48, 20);

type CommandResult = Result<(), Box<dyn std::error::Error>>;

fn print_usage() {
    eprintln!("rasterlab - scan conversion and display architecture demos");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  rasterlab trace dda <x0> <y0> <x1> <y1>        Animate a DDA line trace");
    eprintln!("  rasterlab trace bresenham <x0> <y0> <x1> <y1>  Animate a Bresenham line trace");
    eprintln!("  rasterlab trace circle <cx> <cy> <r>           Animate a midpoint circle trace");
    eprintln!("  rasterlab raster                               Sweep the demo scene, raster style");
    eprintln!("  rasterlab vector                               Replay the demo scene, vector style");
    eprintln!("  rasterlab ambient                              Background particle field");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --speed <ms>   Base speed in milliseconds, clamped to 10..=500 (default 60)");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  rasterlab trace circle 24 12 9 --speed 30");
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rasterlab=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let speed = match take_speed(&mut args) {
        Ok(speed) => speed,
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            std::process::exit(2);
        }
    };

    let outcome = match args.first().map(String::as_str) {
        Some("trace") => trace_command(&args[1..], speed).await,
        Some("raster") => raster_command(speed).await,
        Some("vector") => vector_command(speed).await,
        Some("ambient") => ambient_command().await,
        _ => {
            print_usage();
            std::process::exit(2);
        }
    };

    if let Err(error) = outcome {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

/// Pull `--speed <ms>` out of the argument list, if present.
fn take_speed(args: &mut Vec<String>) -> Result<u64, String> {
    let Some(index) = args.iter().position(|arg| arg == "--speed") else {
        return Ok(DisplayConfig::default().base_interval_ms);
    };
    if index + 1 >= args.len() {
        return Err("--speed needs a value".into());
    }
    let value = args.remove(index + 1);
    args.remove(index);
    value
        .parse()
        .map_err(|_| format!("--speed wants milliseconds, got '{value}'"))
}

fn number(arg: &str) -> Result<f64, Box<dyn std::error::Error>> {
    arg.parse::<f64>()
        .map_err(|_| format!("'{arg}' is not a number").into())
}

async fn trace_command(args: &[String], speed: u64) -> CommandResult {
    let request = match args.first().map(String::as_str) {
        Some("dda") if args.len() == 5 => ScanRequest::Dda {
            x0: number(&args[1])?,
            y0: number(&args[2])?,
            x1: number(&args[3])?,
            y1: number(&args[4])?,
        },
        Some("bresenham") if args.len() == 5 => ScanRequest::Bresenham {
            x0: number(&args[1])?,
            y0: number(&args[2])?,
            x1: number(&args[3])?,
            y1: number(&args[4])?,
        },
        Some("circle") if args.len() == 4 => ScanRequest::MidpointCircle {
            cx: number(&args[1])?,
            cy: number(&args[2])?,
            r: number(&args[3])?,
        },
        _ => {
            print_usage();
            std::process::exit(2);
        }
    };

    let config = DisplayConfig {
        base_interval_ms: speed,
        ..Default::default()
    };
    let surface = Arc::new(Mutex::new(TermSurface::new(TRACE_SURFACE, config.background)));
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut player = StepPlayer::new();

    let handle = play_trace(&mut player, &request, surface.clone(), config, speed, tx)?;

    while let Some(event) = rx.recv().await {
        match event {
            DisplayEvent::StepTraced {
                index, description, ..
            } => {
                if let Ok(surface) = surface.lock() {
                    surface.status(&format!("step {index}: {description}"));
                }
            }
            DisplayEvent::TraceCompleted { total } => {
                if let Ok(surface) = surface.lock() {
                    surface.status(&format!("trace complete: {total} steps"));
                }
                break;
            }
            _ => {}
        }
    }
    handle.finished().await;
    Ok(())
}

async fn raster_command(speed: u64) -> CommandResult {
    let config = DisplayConfig {
        base_interval_ms: speed,
        ..Default::default()
    };
    let size = DISPLAY_SURFACE;
    let surface = Arc::new(Mutex::new(TermSurface::new(size, config.background)));
    let mut runner = RasterRunner::new(config, size);
    runner.rebuild(&demo_scene(size), size);

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let ticker = runner.start(surface.clone(), tx);

    while let Some(event) = rx.recv().await {
        if let DisplayEvent::FrameCompleted { frame } = event {
            if let Ok(surface) = surface.lock() {
                surface.status(&format!("frame {frame} swept"));
            }
            if frame >= 2 {
                break;
            }
        }
    }
    runner.stop();
    ticker.finished().await;
    Ok(())
}

async fn vector_command(speed: u64) -> CommandResult {
    let config = DisplayConfig {
        base_interval_ms: speed,
        ..Default::default()
    };
    let size = DISPLAY_SURFACE;
    let surface = Arc::new(Mutex::new(TermSurface::new(size, config.background)));
    let mut runner = VectorRunner::new(config);
    runner.set_display_file(demo_scene(size));

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let ticker = runner.start(surface.clone(), tx);

    while let Some(event) = rx.recv().await {
        match event {
            DisplayEvent::SegmentTraced { index, .. } => {
                if let Ok(surface) = surface.lock() {
                    surface.status(&format!("beam on segment {index}"));
                }
            }
            DisplayEvent::RefreshCompleted { cycle } => {
                if cycle >= 6 {
                    break;
                }
            }
            _ => {}
        }
    }
    runner.stop();
    ticker.finished().await;
    Ok(())
}

async fn ambient_command() -> CommandResult {
    let size = DISPLAY_SURFACE;
    let mut surface = TermSurface::new(size, Color::from_hex(0x10_1018));
    let mut field = AmbientField::new(24, size, 42, Color::from_hex(0x5a_6a8a));

    let mut ticks = 0u32;
    let ticker = spawn_ticker(Duration::from_millis(50), move || {
        field.advance();
        field.draw(&mut surface);
        ticks += 1;
        if ticks >= 200 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    ticker.finished().await;
    Ok(())
}

/// The shared demo scene: a capital A built from four strokes.
fn demo_scene(size: SurfaceSize) -> Vec<LineSegment> {
    let w = size.width as i32;
    let h = size.height as i32;
    vec![
        LineSegment::new(Point::new(2, h - 3), Point::new(w - 3, h - 3)),
        LineSegment::new(Point::new(w / 2, 2), Point::new(2, h - 3)),
        LineSegment::new(Point::new(w / 2, 2), Point::new(w - 3, h - 3)),
        LineSegment::new(Point::new(w / 4, h / 2), Point::new(3 * w / 4, h / 2)),
    ]
}
