//! Terminal Pong (workspace facade crate).
//!
//! This package keeps a stable `tui_pong::{core, input, term, types}` public
//! API while the implementation lives in dedicated crates under `crates/`.
//! The interactive setup prompts live here, next to the binary they serve.

pub mod session;

pub use tui_pong_core as core;
pub use tui_pong_input as input;
pub use tui_pong_term as term;
pub use tui_pong_types as types;
