//! Simulation properties exercised through the public facade.

use tui_pong::core::{GameState, SimpleRng};
use tui_pong::types::{
    BoardSize, GameAction, BARRIER_MAX_LEN, BARRIER_MIN_LEN, INITIAL_FRAME_DELAY_MS,
    MAX_BOARD_DIM, MIN_BOARD_DIM, MIN_FRAME_DELAY_MS,
};

fn assert_barrier_interior(game: &GameState) {
    let b = game.barrier();
    let rows = game.size().rows();
    let cols = game.size().cols();
    assert!(
        (BARRIER_MIN_LEN..=BARRIER_MAX_LEN).contains(&b.len),
        "len {} out of range",
        b.len
    );
    assert!(b.x >= 3);
    assert!(b.x + b.len <= cols - 4);
    assert!(b.y >= 3);
    assert!(b.y + b.len <= rows - 6);
}

#[test]
fn test_initialization_over_all_valid_sizes() {
    for rows in MIN_BOARD_DIM..=MAX_BOARD_DIM {
        for cols in MIN_BOARD_DIM..=MAX_BOARD_DIM {
            if rows == cols {
                continue;
            }
            let size = BoardSize::new(rows, cols).unwrap();
            let game = GameState::new("p", size, 42);

            let paddle = game.paddle();
            assert_eq!(paddle.x, cols / 2);
            assert!(paddle.x >= 1 && paddle.x <= cols - 3);

            let ball = game.ball();
            assert!(ball.x >= 1 && ball.x <= cols - 2);
            assert!(ball.y >= 1 && ball.y <= rows / 2);
            assert_eq!((ball.vx, ball.vy), (1, 1));

            assert_eq!(game.score(), 0);
            assert_eq!(game.frame_delay_ms(), INITIAL_FRAME_DELAY_MS);
            assert_barrier_interior(&game);
        }
    }
}

#[test]
fn test_paddle_never_leaves_interior() {
    let size = BoardSize::new(22, 35).unwrap();
    let mut game = GameState::new("p", size, 7);
    let mut rng = SimpleRng::new(99);

    for _ in 0..1000 {
        let action = if rng.next_range(2) == 0 {
            GameAction::MoveLeft
        } else {
            GameAction::MoveRight
        };
        game.apply_action(action);
        let x = game.paddle().x;
        assert!(x >= 1 && x <= 35 - 3, "paddle escaped to {}", x);
    }
}

#[test]
fn test_place_barrier_always_in_bounds() {
    for (rows, cols) in [(20, 21), (40, 39), (20, 40), (40, 20)] {
        let size = BoardSize::new(rows, cols).unwrap();
        let mut game = GameState::new("p", size, 3);
        for _ in 0..300 {
            game.place_barrier();
            assert_barrier_interior(&game);
        }
    }
}

#[test]
fn test_score_monotonic_and_delay_floored_over_full_game() {
    let size = BoardSize::new(23, 36).unwrap();
    let mut game = GameState::new("p", size, 31337);
    let mut last_score = game.score();
    let mut last_delay = game.frame_delay_ms();

    for _ in 0..10_000 {
        let alive = game.update();

        assert!(game.score() >= last_score);
        assert!(game.frame_delay_ms() <= last_delay);
        assert!(game.frame_delay_ms() >= MIN_FRAME_DELAY_MS);
        last_score = game.score();
        last_delay = game.frame_delay_ms();

        let ball = game.ball();
        assert!(ball.x >= 0 && ball.x <= 35);
        assert!(ball.y >= 0 && ball.y <= 22);

        if !alive {
            break;
        }
    }
}

#[test]
fn test_same_seed_replays_identically() {
    let size = BoardSize::new(27, 32).unwrap();
    let mut a = GameState::new("p", size, 555);
    let mut b = GameState::new("p", size, 555);

    assert_eq!(a.ball(), b.ball());
    assert_eq!(a.barrier(), b.barrier());

    for _ in 0..200 {
        let ra = a.update();
        let rb = b.update();
        assert_eq!(ra, rb);
        assert_eq!(a.ball(), b.ball());
        assert_eq!(a.barrier(), b.barrier());
        assert_eq!(a.score(), b.score());
        if !ra {
            break;
        }
    }
}
