//! Terminal runner (default binary).
//!
//! Polls crossterm for key presses, queues the resulting commands, and once
//! per frame hands them to the engine together with the elapsed time. The
//! engine's snapshot is then drawn through the framebuffer renderer.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{handle_key_event, is_restart, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::GameAction;
use blockfall::RunConfig;

fn main() -> Result<()> {
    let config = RunConfig::from_env()?;
    init_logging(&config)?;
    info!("starting with seed {} at {}ms frames", config.seed, config.frame_ms);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to a file only; stderr would tear the raw-mode screen.
fn init_logging(config: &RunConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let mut game_state = GameState::new(config.seed);
    game_state.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut pending: Vec<GameAction> = Vec::with_capacity(8);

    let frame = Duration::from_millis(config.frame_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        game_state.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next frame is due.
        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit after {} pieces", game_state.piece_id());
                        return Ok(());
                    }
                    if game_state.game_over() {
                        if is_restart(key) {
                            game_state.restart();
                            pending.clear();
                        }
                    } else if let Some(action) = handle_key_event(key) {
                        pending.push(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                // Terminal auto-repeat and releases are ignored: one command per press.
                _ => {}
            }
        }

        // Frame: queued commands in arrival order, then gravity.
        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            game_state.step(&pending, elapsed.as_millis() as u32);
            pending.clear();

            if let Some(ev) = game_state.take_last_event() {
                if ev.topped_out {
                    info!("game over after {} pieces", ev.piece_id);
                }
            }
        }
    }
}
