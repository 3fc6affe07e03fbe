//! Fixed-tick simulation driver
//!
//! One call advances the game by exactly one tick, in a fixed order: paddle
//! input, ball movement, wall/paddle/brick collision response, then the
//! life-loss and victory checks. The surrounding loop owns the cadence
//! (reference: ~16 ms per tick); the core never reads a clock.

use super::collision;
use super::state::{GameEvent, GamePhase, GameState};
use crate::config::Config;

/// Input signals for a single tick, sampled by the input collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left movement key currently held
    pub left_held: bool,
    /// Right movement key currently held
    pub right_held: bool,
    /// Pause was toggled since the last tick
    pub pause_toggled: bool,
    /// Full game reset was requested
    pub reset_requested: bool,
}

/// Advance the game state by one tick.
///
/// Returns the terminal event on the tick that enters GameOver or Victory,
/// and `None` on every other tick. The driver decides what a terminal event
/// means (dialog, restart offer, exit); the core only changes phase.
pub fn tick(state: &mut GameState, input: &TickInput, cfg: &Config) -> Option<GameEvent> {
    // Full reset works from any phase and preempts everything else.
    if input.reset_requested {
        log::info!("game reset");
        *state = GameState::new(cfg);
        return None;
    }

    // Manual pause toggle. The life-loss breather also uses the Paused
    // phase but is not user-cancellable, so the toggle is ignored while
    // its countdown runs.
    if input.pause_toggled && state.respawn_ticks == 0 {
        match state.phase {
            GamePhase::Running => state.phase = GamePhase::Paused,
            GamePhase::Paused => state.phase = GamePhase::Running,
            _ => {}
        }
    }

    match state.phase {
        GamePhase::Paused => {
            if state.respawn_ticks > 0 {
                state.respawn_ticks -= 1;
                if state.respawn_ticks == 0 {
                    state.phase = GamePhase::Running;
                }
            }
            return None;
        }
        GamePhase::GameOver | GamePhase::Victory => return None,
        GamePhase::Running => {}
    }

    state.time_ticks += 1;

    // Paddle responds to held keys
    if input.left_held {
        state.paddle.move_left();
    }
    if input.right_held {
        state.paddle.move_right(cfg.board_width);
    }

    // Ball advances, then collisions resolve. Order matters: each step may
    // mutate velocity, and the brick scan allows one destruction per tick.
    state.ball.step();
    collision::resolve_walls(&mut state.ball, cfg.board_width);
    collision::resolve_paddle(&mut state.ball, &state.paddle);
    if let Some(index) = collision::resolve_bricks(&mut state.ball, &mut state.bricks) {
        state.scoreboard.add_score(cfg.points_per_brick);
        log::debug!(
            "brick {} destroyed, score {}",
            index,
            state.scoreboard.score
        );
    }

    // Bottom-out and victory are mutually exclusive within a tick; a tick
    // that loses the last life never also checks victory.
    if state.ball.pos.y > cfg.board_height {
        state.scoreboard.lose_life();
        if state.scoreboard.lives > 0 {
            log::info!("ball lost, {} lives remaining", state.scoreboard.lives);
            state.reset_ball_and_paddle(cfg);
            state.phase = GamePhase::Paused;
            state.respawn_ticks = cfg.respawn_delay_ticks;
        } else {
            log::info!("game over with score {}", state.scoreboard.score);
            state.phase = GamePhase::GameOver;
            return Some(GameEvent::GameOver {
                score: state.scoreboard.score,
            });
        }
    } else if !state.bricks.any_remaining() {
        log::info!("victory with score {}", state.scoreboard.score);
        state.phase = GamePhase::Victory;
        return Some(GameEvent::Victory {
            score: state.scoreboard.score,
        });
    }

    None
}
