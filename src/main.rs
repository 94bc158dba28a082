//! Terminal zen garden (default binary).
//!
//! Click a tile to place a stone, click it again to grow it; a fully grown
//! stone is cleared on the next click. Press up to start, `p` to pause, `q` to
//! quit. Losing terminal focus pauses the garden.
//!
//! Configuration comes from `ZEN_GARDEN_*` environment variables, see
//! `zen_garden::core::config`. Logs go to `ZEN_GARDEN_LOG_PATH` when set
//! (filtered by `RUST_LOG`), since the terminal itself is busy drawing.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use zen_garden::core::{Garden, GardenConfig, GridGeometry};
use zen_garden::input::{handle_event, should_quit};
use zen_garden::term::{FrameBuffer, GardenView, TerminalRenderer, Viewport};
use zen_garden::types::IDLE_POLL_MS;

fn main() -> Result<()> {
    let config = GardenConfig::from_env()?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &GardenConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: GardenConfig) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let geometry = GridGeometry::fit(w, h, config.tile_width, config.tile_height, config.max_tiles)
        .with_context(|| format!("a {w}x{h} terminal is too small for the garden"))?;
    info!(
        "garden {}x{} tiles at offset {:?}",
        geometry.width(),
        geometry.height(),
        geometry.offset()
    );

    let mut garden = Garden::launch(geometry, config, None);
    let view = GardenView::new();
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);
    let mut snap = garden.snapshot();
    let mut dirty = true;

    loop {
        // Render.
        if dirty {
            garden.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until the pending redraw tick.
        let timeout = garden
            .time_until_redraw(now_ms())
            .unwrap_or(u64::from(IDLE_POLL_MS));

        if event::poll(Duration::from_millis(timeout))? {
            let ev = event::read()?;

            if let Event::Key(key) = ev {
                if key.kind == KeyEventKind::Press && should_quit(key) {
                    return Ok(());
                }
            }
            if let Event::Resize(w, h) = ev {
                viewport = Viewport::new(w, h);
                term.invalidate();
                dirty = true;
            }

            // Status line changes are painted along with the input that caused them.
            if let Some(input) = handle_event(&ev) {
                dirty |= garden.apply_input(input, now_ms());
            }
        }

        // Tick.
        if garden.tick(now_ms()) {
            dirty = true;
        }
    }
}
