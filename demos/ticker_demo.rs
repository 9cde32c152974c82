//! Ticker demo: scrolls synthetic content tiles across a terminal-emulated
//! LED panel, then runs one transition of each kind.
//!
//! Run with: `cargo run --example ticker_demo`
//! Logging: `RUST_LOG=marquee=debug cargo run --example ticker_demo`

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use marquee::{
    CaptureSink, DisplaySink, PerformanceProfile, PixelBuffer, Rgb, Scroller, ScrollerConfig,
    TransitionConfig, TransitionEngine, TransitionKind, TransitionTiming,
};
use tracing_subscriber::EnvFilter;

const PANEL_WIDTH: u32 = 96;
const PANEL_HEIGHT: u32 = 32;

/// A tile of diagonal stripes in the given color.
fn striped_tile(width: u32, height: u32, color: Rgb) -> PixelBuffer {
    let mut tile = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            if (x + y) % 8 < 4 {
                tile.set(x, y, color);
            } else {
                tile.set(x, y, color.dim(0.25));
            }
        }
    }
    tile
}

/// A solid tile with a bright border.
fn framed_tile(width: u32, height: u32, color: Rgb) -> PixelBuffer {
    let mut tile = PixelBuffer::filled(width, height, color.dim(0.4));
    for x in 0..width {
        tile.set(x, 0, color);
        tile.set(x, height - 1, color);
    }
    for y in 0..height {
        tile.set(0, y, color);
        tile.set(width - 1, y, color);
    }
    tile
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let tiles = vec![
        striped_tile(72, 24, Rgb::from_u32(0xE04040)),
        framed_tile(56, 28, Rgb::from_u32(0x40C060)),
        striped_tile(96, 20, Rgb::from_u32(0x4060E0)),
    ];

    let config = ScrollerConfig {
        speed_px_per_sec: 120.0,
        ..ScrollerConfig::default()
    };
    let mut scroller = Scroller::new(PANEL_WIDTH, PANEL_HEIGHT, config);
    scroller.set_content(&tiles);

    let mut sink = marquee::sink::TerminalSink::new()?;

    // Continuous scroll: the core never sleeps here, the driver loop
    // picks its own cadence.
    let mut wraps = 0;
    while wraps < 2 {
        scroller.advance(Instant::now());
        if scroller.is_wrap_complete() {
            wraps += 1;
        }
        if let Some(frame) = scroller.visible_window() {
            if sink.emit(&frame).is_err() {
                break;
            }
        }
        thread::sleep(Duration::from_millis(8));
    }

    // One transition per kind between two distinct panels.
    let mut engine = TransitionEngine::new(PerformanceProfile::balanced());
    let from = striped_tile(PANEL_WIDTH, PANEL_HEIGHT, Rgb::from_u32(0xC04080));
    let to = framed_tile(PANEL_WIDTH, PANEL_HEIGHT, Rgb::from_u32(0x40A0C0));

    let kinds = [
        TransitionKind::ScrollLeft,
        TransitionKind::ScrollRight,
        TransitionKind::ScrollUp,
        TransitionKind::ScrollDown,
        TransitionKind::Redraw,
    ];
    let mut current = from.clone();
    for kind in kinds {
        let next = if current == to { &from } else { &to };
        let config = TransitionConfig {
            kind,
            enabled: true,
            timing: TransitionTiming::Duration { seconds: 0.8 },
        };
        engine.run(&current, next, &config, &mut sink);
        current = next.clone();
        thread::sleep(Duration::from_millis(400));
    }

    drop(sink);

    // Headless rerun of one transition so there are numbers to print
    // after the terminal is restored.
    let mut capture = CaptureSink::new();
    let config = TransitionConfig::default();
    let emitted = engine.run(&current, &from, &config, &mut capture);
    println!(
        "emitted {emitted} frames at ~{:.1} fps average (profile target {} fps)",
        engine.stats().average_fps(),
        engine.profile().target_fps()
    );
    Ok(())
}
