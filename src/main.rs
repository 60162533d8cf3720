//! Terminal Pong runner (default binary).
//!
//! Setup prompts run in cooked mode; raw mode is scoped to the game loop and
//! released on every exit path before the final score is printed.

use std::io;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_pong::core::GameState;
use tui_pong::input::{handle_key_event, should_quit};
use tui_pong::session::read_session;
use tui_pong::term::{FrameBuffer, GameView, TerminalRenderer};

/// How a game loop ended.
enum Outcome {
    /// The ball got past the paddle; holds the final score.
    Missed(u32),
    /// The player quit a live game.
    Quit,
}

fn main() -> Result<()> {
    let config = {
        let stdin = io::stdin();
        read_session(&mut stdin.lock(), &mut io::stdout())?
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let game = GameState::new(config.player, config.size, seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Outcome::Missed(score) = result? {
        println!("Game Over! Final Score: {}", score);
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<Outcome> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        view.render_into(&game, &mut fb);
        term.draw(&fb)?;

        // At most one pending key per frame; no key pending is a no-op.
        if event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(Outcome::Quit);
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
            }
        }

        if !game.update() {
            return Ok(Outcome::Missed(game.score()));
        }

        thread::sleep(Duration::from_millis(game.frame_delay_ms() as u64));
    }
}
