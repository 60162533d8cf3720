//! Game state module - session state and the per-tick simulation step.
//!
//! All collision logic works on the ball's *tentative* next position: the
//! step is computed, reflections adjust velocity, and only then is the move
//! committed. The tentative cell is not re-checked after a reflection, so a
//! ball grazing a top corner can flip both axes in a single tick. That
//! single-step reflect-then-move model is intentional and pinned by tests.

use crate::rng::SimpleRng;
use tui_pong_types::{
    BoardSize, GameAction, BARRIER_MAX_LEN, BARRIER_MIN_LEN, BARRIER_PADDLE_CLEARANCE,
    BARRIER_WALL_MARGIN, FRAME_DELAY_STEP_MS, INITIAL_FRAME_DELAY_MS, MIN_FRAME_DELAY_MS,
    PADDLE_STEP,
};

/// Player paddle: two cells wide, pinned to the paddle row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    /// Column of the paddle's left cell.
    pub x: i16,
}

impl Paddle {
    /// Check whether a column is one of the paddle's two cells.
    pub fn covers(&self, x: i16) -> bool {
        x == self.x || x == self.x + 1
    }
}

/// Ball position and velocity. Both velocity components are always ±1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub x: i16,
    pub y: i16,
    pub vx: i16,
    pub vy: i16,
}

/// Axis-aligned square obstacle the ball bounces off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Barrier {
    pub x: i16,
    pub y: i16,
    pub len: i16,
}

impl Barrier {
    /// Check whether a cell lies inside the barrier square.
    pub fn contains(&self, x: i16, y: i16) -> bool {
        self.spans_x(x) && y >= self.y && y < self.y + self.len
    }

    /// Check whether a column lies within the barrier's horizontal span.
    pub fn spans_x(&self, x: i16) -> bool {
        x >= self.x && x < self.x + self.len
    }
}

/// Complete game session state.
///
/// Owns its random source, so a given `(size, seed)` pair replays the same
/// ball spawn and barrier sequence.
#[derive(Debug, Clone)]
pub struct GameState {
    size: BoardSize,
    player: String,
    paddle: Paddle,
    ball: Ball,
    barrier: Barrier,
    score: u32,
    frame_delay_ms: u32,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new session on a validated board.
    ///
    /// The paddle starts centered, the ball at a random interior cell in the
    /// upper half moving down-right, and the barrier is placed immediately.
    pub fn new(player: impl Into<String>, size: BoardSize, seed: u32) -> Self {
        let rows = size.rows();
        let cols = size.cols();
        let mut rng = SimpleRng::new(seed);

        let ball = Ball {
            x: rng.next_range((cols - 2) as u32) as i16 + 1,
            y: rng.next_range((rows / 2) as u32) as i16 + 1,
            vx: 1,
            vy: 1,
        };

        let mut state = Self {
            size,
            player: player.into(),
            paddle: Paddle { x: cols / 2 },
            ball,
            barrier: Barrier { x: 0, y: 0, len: 0 },
            score: 0,
            frame_delay_ms: INITIAL_FRAME_DELAY_MS,
            rng,
        };
        state.place_barrier();
        state
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn paddle(&self) -> Paddle {
        self.paddle
    }

    pub fn ball(&self) -> Ball {
        self.ball
    }

    pub fn barrier(&self) -> Barrier {
        self.barrier
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current delay between simulation ticks, in milliseconds.
    pub fn frame_delay_ms(&self) -> u32 {
        self.frame_delay_ms
    }

    /// Draw a fresh barrier square.
    ///
    /// The square keeps at least [`BARRIER_WALL_MARGIN`] cells of clearance
    /// from every wall and stays well above the paddle row. Called at
    /// construction and after every successful paddle return.
    pub fn place_barrier(&mut self) {
        let rows = self.size.rows();
        let cols = self.size.cols();

        let len_span = (BARRIER_MIN_LEN..=BARRIER_MAX_LEN).count() as u32;
        let len = self.rng.next_range(len_span) as i16 + BARRIER_MIN_LEN;

        let x_span = (cols - len - 2 * BARRIER_WALL_MARGIN) as u32;
        let x = self.rng.next_range(x_span) as i16 + BARRIER_WALL_MARGIN;

        let y_span = (rows - len - BARRIER_WALL_MARGIN - BARRIER_PADDLE_CLEARANCE) as u32;
        let y = self.rng.next_range(y_span) as i16 + BARRIER_WALL_MARGIN;

        self.barrier = Barrier { x, y, len };
    }

    /// Apply a paddle action, clamping to the playable interior.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.paddle.x -= PADDLE_STEP,
            GameAction::MoveRight => self.paddle.x += PADDLE_STEP,
        }
        self.paddle.x = self.paddle.x.clamp(1, self.size.paddle_max_x());
    }

    /// Advance the ball one step.
    ///
    /// Returns `true` while the ball is in play and `false` when it got past
    /// the paddle; on `false` the ball position is left where it was.
    pub fn update(&mut self) -> bool {
        let rows = self.size.rows();
        let cols = self.size.cols();

        let next_x = self.ball.x + self.ball.vx;
        let next_y = self.ball.y + self.ball.vy;

        // Wall bounces, decided on the tentative cell.
        if next_x <= 0 || next_x >= cols - 1 {
            self.ball.vx = -self.ball.vx;
        }
        if next_y <= 0 {
            self.ball.vy = -self.ball.vy;
        }

        // Barrier: the pre-move column decides the reflection axis. Coming
        // from outside the x-span is a side hit, otherwise top/bottom.
        if self.barrier.contains(next_x, next_y) {
            if self.barrier.spans_x(self.ball.x) {
                self.ball.vy = -self.ball.vy;
            } else {
                self.ball.vx = -self.ball.vx;
            }
        }

        // Paddle return.
        if next_y == self.size.paddle_row() && self.paddle.covers(next_x) {
            self.ball.vy = -self.ball.vy;
            self.score += 1;
            if self.frame_delay_ms > MIN_FRAME_DELAY_MS {
                self.frame_delay_ms -= FRAME_DELAY_STEP_MS;
            }
            self.place_barrier();
        }

        // Missed paddle.
        if next_y >= rows - 1 {
            return false;
        }

        self.ball.x += self.ball.vx;
        self.ball.y += self.ball.vy;
        true
    }
}
