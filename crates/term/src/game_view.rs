//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Header rows above the board (player line and score line).
pub const HEADER_ROWS: u16 = 2;

// Wide box-drawing glyphs for the frame, block glyphs for the pieces.
const CHAR_WALL_H: char = '━';
const CHAR_WALL_V: char = '┃';
const CHAR_TL_CORNER: char = '┏';
const CHAR_TR_CORNER: char = '┓';
const CHAR_BL_CORNER: char = '┗';
const CHAR_BR_CORNER: char = '┛';
const CHAR_BALL: char = '●';
const CHAR_PADDLE: char = '▀';
const CHAR_BARRIER: char = '▒';

// Palette: soft gray walls, bright cyan paddle, neon green ball, warm
// orange barrier, gold score.
const WALL: CellStyle = CellStyle::fg(Rgb::new(138, 138, 138));
const PADDLE: CellStyle = CellStyle::fg(Rgb::new(0, 175, 255));
const BALL: CellStyle = CellStyle::fg(Rgb::new(95, 255, 0));
const BARRIER: CellStyle = CellStyle::fg(Rgb::new(255, 175, 0));
const SCORE: CellStyle = CellStyle::fg(Rgb::new(255, 215, 0));

/// Renders the full frame: two centered header lines, then the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render the current game state into an existing framebuffer.
    ///
    /// The framebuffer is sized to `cols x (rows + HEADER_ROWS)`; callers can
    /// reuse one buffer across frames.
    pub fn render_into(&self, game: &GameState, fb: &mut FrameBuffer) {
        let rows = game.size().rows() as u16;
        let cols = game.size().cols() as u16;
        fb.resize(cols, rows + HEADER_ROWS);
        fb.clear(Cell::default());

        self.draw_centered(fb, 0, &format!("Player: {}", game.player()), CellStyle::default());
        self.draw_centered(fb, 1, &format!("Score: {}", game.score()), SCORE);

        for y in 0..game.size().rows() {
            for x in 0..game.size().cols() {
                if let Some((ch, style)) = board_cell(game, x, y) {
                    fb.put_char(x as u16, y as u16 + HEADER_ROWS, ch, style);
                }
            }
        }
    }

    fn draw_centered(&self, fb: &mut FrameBuffer, row: u16, text: &str, style: CellStyle) {
        let len = text.chars().count() as u16;
        let x = fb.width().saturating_sub(len) / 2;
        fb.put_str(x, row, text, style);
    }
}

/// Glyph and style for one board cell, or `None` for a blank.
///
/// Precedence on overlap: corner > wall > paddle > ball > barrier > blank.
fn board_cell(game: &GameState, x: i16, y: i16) -> Option<(char, CellStyle)> {
    let rows = game.size().rows();
    let cols = game.size().cols();
    let ball = game.ball();

    if y == 0 && x == 0 {
        Some((CHAR_TL_CORNER, WALL))
    } else if y == 0 && x == cols - 1 {
        Some((CHAR_TR_CORNER, WALL))
    } else if y == rows - 1 && x == 0 {
        Some((CHAR_BL_CORNER, WALL))
    } else if y == rows - 1 && x == cols - 1 {
        Some((CHAR_BR_CORNER, WALL))
    } else if y == 0 || y == rows - 1 {
        Some((CHAR_WALL_H, WALL))
    } else if x == 0 || x == cols - 1 {
        Some((CHAR_WALL_V, WALL))
    } else if y == game.size().paddle_row() && game.paddle().covers(x) {
        Some((CHAR_PADDLE, PADDLE))
    } else if x == ball.x && y == ball.y {
        Some((CHAR_BALL, BALL))
    } else if game.barrier().contains(x, y) {
        Some((CHAR_BARRIER, BARRIER))
    } else {
        None
    }
}
