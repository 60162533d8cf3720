//! Terminal rendering module.
//!
//! Renders the game into a simple framebuffer that a terminal backend
//! flushes as one frame of text. The view layer is pure so the frame
//! contents can be asserted in tests without a terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, HEADER_ROWS};
pub use renderer::TerminalRenderer;
