//! Terminal runner (default binary).
//!
//! One thread, one loop: draw if needed, wait for input until the next frame
//! is due, then run the frame. Keys and mouse gestures are applied as soon as
//! they arrive; gravity only advances inside [`Game::frame`].

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::{debug, info};

use blockfall::config::Config;
use blockfall::core::GameSnapshot;
use blockfall::engine::Game;
use blockfall::input::{handle_key_event, is_actionable, should_quit, GestureRecognizer};
use blockfall::logging;
use blockfall::summary::SessionSummary;
use blockfall::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use blockfall::types::GameAction;

fn main() -> Result<()> {
    let config = Config::from_env_args();
    if let Some(path) = &config.log_file {
        logging::init(path, config.log_level)?;
    }
    info!("seed {} frame {}ms", config.seed, config.frame_ms);

    let mut term = TerminalRenderer::new();
    let result = term
        .enter()
        .context("failed to initialise terminal")
        .and_then(|()| run(&mut term, &config));

    // Always try to restore terminal state.
    let _ = term.exit();
    let summary = result?;

    info!("session ended: {summary}");
    if config.json {
        println!("{}", summary.to_json()?);
    } else {
        println!("{summary}");
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<SessionSummary> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut game = Game::new(config.seed);
    let mut gestures = GestureRecognizer::new();
    let mut throttle = RenderThrottle::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame_period = Duration::from_millis(config.frame_ms as u64);
    let mut next_frame = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        if throttle.should_render(now_ms(), fingerprint(&snap, viewport), !game.is_running()) {
            GameView::for_viewport(viewport).render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until the next frame.
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_actionable(&key) => {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply(&mut game, action, now_ms());
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = gestures.handle_mouse_event(mouse) {
                        apply(&mut game, action, now_ms());
                    }
                    if !game.state().accepts_input() {
                        gestures.cancel();
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Frame.
        let now = Instant::now();
        if now >= next_frame {
            next_frame += frame_period;
            if next_frame < now {
                // Fell behind (e.g. suspended); don't replay missed frames.
                next_frame = now + frame_period;
            }
            game.frame(now_ms());
            log_lock_event(&mut game);
        }
    }

    Ok(SessionSummary::from_state(game.state()))
}

fn apply(game: &mut Game, action: GameAction, now_ms: u64) {
    if !game.apply(action, now_ms) {
        debug!("ignored {} while {}", action.as_str(), game.phase().as_str());
    }
    log_lock_event(game);
}

fn log_lock_event(game: &mut Game) {
    if let Some(event) = game.take_last_event() {
        if event.lines_cleared > 0 {
            info!(
                "cleared {} line(s) for {} points; score {} level {}",
                event.lines_cleared,
                event.points,
                game.state().score(),
                game.state().level()
            );
        }
        if event.topped_out {
            info!("topped out with score {}", game.state().score());
        }
    }
}

fn fingerprint(snap: &GameSnapshot, viewport: Viewport) -> u64 {
    let mut hasher = DefaultHasher::new();
    snap.hash(&mut hasher);
    viewport.width.hash(&mut hasher);
    viewport.height.hash(&mut hasher);
    hasher.finish()
}
