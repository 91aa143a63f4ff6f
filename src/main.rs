//! Terminal 3D animation demo (default binary).
//!
//! Polls crossterm input until the next frame deadline, then animates the
//! active scene, rasterizes it and flushes the changed cells.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_orrery::core::Demo;
use tui_orrery::engine::Rasterizer;
use tui_orrery::input::{handle_key_event, should_quit};
use tui_orrery::term::{DemoView, FpsCounter, FrameBuffer, Hud, TerminalRenderer, Viewport};
use tui_orrery::types::FRAME_MS;

const LOG_FILE: &str = "tui-orrery.log";

fn main() {
    if let Err(err) = try_main() {
        eprintln!("tui-orrery: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    init_logging()?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file in the temp dir; anything on stdout/stderr would tear the
/// alternate screen.
fn init_logging() -> Result<()> {
    let path = std::env::temp_dir().join(LOG_FILE);
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let (cols, rows) = terminal::size().context("querying terminal size")?;
    let mut viewport = Viewport::new(cols, rows);
    let (width, height) = viewport.image_size();

    let mut demo = Demo::new(StdRng::from_os_rng());
    demo.set_viewport(width, height);
    let mut rasterizer = Rasterizer::new(width, height);
    rasterizer.set_supersampling(demo.supersampling());
    log::info!("starting at {cols}x{rows} cells with '{}'", demo.title());

    let view = DemoView::default();
    let mut fb = FrameBuffer::new(cols, rows);
    let mut fps = FpsCounter::default();

    let started = Instant::now();
    let frame_interval = Duration::from_millis(u64::from(FRAME_MS));
    let mut last_frame = Instant::now();

    loop {
        // Input with timeout until next frame.
        let timeout = frame_interval
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout).context("polling terminal events")? {
            match event::read().context("reading terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        log::info!("quit after {:.1}s", demo.time());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        demo.apply(action);
                        rasterizer.set_supersampling(demo.supersampling());
                    }
                }
                Event::Resize(cols, rows) => {
                    viewport = Viewport::new(cols, rows);
                    let (width, height) = viewport.image_size();
                    rasterizer.resize(width, height);
                    demo.set_viewport(width, height);
                    term.invalidate();
                    log::debug!("terminal resized to {cols}x{rows}");
                }
                _ => {}
            }
        }

        if last_frame.elapsed() < frame_interval {
            continue;
        }
        let now = Instant::now();
        let delta = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        demo.frame(delta);
        let image = rasterizer.render(demo.scene(), demo.camera());
        let hud = Hud {
            title: demo.title(),
            scene_index: demo.active_index(),
            scene_count: demo.scene_count(),
            fps: fps.fps(),
            supersampling: demo.supersampling(),
        };
        view.render_into(image, &hud, viewport, &mut fb);
        term.present(&mut fb)?;
        fps.tick(u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX));
    }
}
