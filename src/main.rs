//! Terminal Snake runner (default binary).
//!
//! The driver owns everything the core deliberately does not: the tick
//! timer, the pause flag, the RNG, and the terminal. The core only sees
//! `queue_direction` and `step` calls.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{Config, GameState, SimpleRng};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{GameView, TerminalRenderer, Viewport};
use tui_snake::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let config = Config::default();
    let mut rng = SimpleRng::new(clock_seed());
    let mut state = GameState::new(config, &mut rng);
    let mut paused = false;

    let view = GameView::default();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&state, paused, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }

                    match handle_key_event(key) {
                        Some(GameAction::Turn(direction)) => {
                            state.queue_direction(direction);
                        }
                        Some(GameAction::Pause) => {
                            // Pausing a finished game would just hide the
                            // game-over frame.
                            if !state.game_over() {
                                paused = !paused;
                            }
                        }
                        Some(GameAction::Restart) => {
                            state = GameState::new(config, &mut rng);
                            paused = false;
                        }
                        None => {}
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if !paused {
                state.step(&mut rng);
            }
        }
    }
}
