//! Core game logic - pure, deterministic, and testable.
//!
//! This crate holds the whole simulation: session state, the per-tick
//! collision step, and barrier placement. It has no dependencies on UI or
//! I/O, so the same seed always replays the same game against the same
//! inputs.
//!
//! # Module Structure
//!
//! - [`game_state`]: paddle, ball, barrier, and the `update` step
//! - [`rng`]: seeded LCG behind ball spawn and barrier placement
//!
//! # Example
//!
//! ```
//! use tui_pong_core::GameState;
//! use tui_pong_types::{BoardSize, GameAction};
//!
//! let size = BoardSize::new(25, 30).unwrap();
//! let mut game = GameState::new("ada", size, 12345);
//!
//! game.apply_action(GameAction::MoveLeft);
//! assert!(game.update());
//! assert!(game.frame_delay_ms() >= 30);
//! ```

pub mod game_state;
pub mod rng;

pub use tui_pong_types as types;

// Re-export commonly used types for convenience
pub use game_state::{Ball, Barrier, GameState, Paddle};
pub use rng::SimpleRng;
