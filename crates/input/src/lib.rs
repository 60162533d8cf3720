//! Terminal input module.
//!
//! Maps `crossterm` key events into [`tui_pong_types::GameAction`]. The
//! mapping is pure so it can be unit-tested without a terminal; the driver
//! owns the actual event polling.

pub mod map;

pub use tui_pong_types as types;

pub use map::{handle_key_event, should_quit};
