//! Game state and core simulation types
//!
//! Entities hold geometry and velocity only; nothing here draws or reads
//! input. Cross-entity checks happen in `collision` and `tick` against
//! current-tick snapshots of this state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::snapshot::{BallView, BrickView, PaddleView, Snapshot};
use crate::config::Config;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Simulation suspended, either by the player or by the life-loss breather
    Paused,
    /// Run ended with lives exhausted
    GameOver,
    /// Run ended with every brick destroyed
    Victory,
}

impl GamePhase {
    /// Terminal phases end the session pending an explicit reset.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Victory)
    }
}

/// Terminal transition, emitted exactly once by the tick that enters it.
///
/// The surrounding driver decides what to do with it (dialog, restart offer,
/// exit); the core never ends the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameOver { score: u32 },
    Victory { score: u32 },
}

/// The player's paddle: a horizontal-only rigid body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Movement per tick while a direction is held
    pub speed: f32,
}

impl Paddle {
    pub fn new(cfg: &Config) -> Self {
        Self {
            pos: cfg.paddle_start(),
            size: Vec2::new(cfg.paddle_width, cfg.paddle_height),
            speed: cfg.paddle_speed,
        }
    }

    /// Move left, clamped at the left board edge.
    pub fn move_left(&mut self) {
        self.pos.x = (self.pos.x - self.speed).max(0.0);
    }

    /// Move right, clamped so the paddle stays fully on the board.
    pub fn move_right(&mut self, board_width: f32) {
        self.pos.x = (self.pos.x + self.speed).min(board_width - self.size.x);
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Free-moving ball, collision-tested as its bounding square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the bounding square
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub diameter: f32,
}

impl Ball {
    pub fn new(cfg: &Config) -> Self {
        Self {
            pos: cfg.ball_start(),
            vel: cfg.ball_initial_velocity,
            diameter: cfg.ball_diameter,
        }
    }

    /// Advance one tick. Unconditional and unclamped; wall response happens
    /// afterward in the collision pass.
    pub fn step(&mut self) {
        self.pos += self.vel;
    }

    pub fn bounce_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn bounce_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(self.diameter))
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.diameter / 2.0
    }
}

/// Static rectangular brick; only `destroyed` ever mutates, false to true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Aabb,
    pub destroyed: bool,
}

/// The brick grid, in row-major creation order.
///
/// Order matters: the collision scan destroys the first intersecting brick in
/// this order, which is the deterministic tie-break when the ball overlaps
/// more than one brick in the same tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickField {
    bricks: Vec<Brick>,
}

impl BrickField {
    pub fn new(cfg: &Config) -> Self {
        let mut bricks = Vec::with_capacity(cfg.brick_count());
        for row in 0..cfg.rows {
            for col in 0..cfg.cols {
                let pos = Vec2::new(
                    cfg.offset_x + col as f32 * (cfg.brick_width + cfg.padding),
                    cfg.offset_y + row as f32 * (cfg.brick_height + cfg.padding),
                );
                bricks.push(Brick {
                    rect: Aabb::new(pos, Vec2::new(cfg.brick_width, cfg.brick_height)),
                    destroyed: false,
                });
            }
        }
        Self { bricks }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Brick> {
        self.bricks.get(index)
    }

    /// True while at least one brick is standing.
    pub fn any_remaining(&self) -> bool {
        self.bricks.iter().any(|b| !b.destroyed)
    }
}

/// Score and lives counters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u32,
    pub lives: u32,
}

impl Scoreboard {
    pub fn new(starting_lives: u32) -> Self {
        Self {
            score: 0,
            lives: starting_lives,
        }
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Decrement lives, saturating at 0.
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    pub fn reset(&mut self, starting_lives: u32) {
        self.score = 0;
        self.lives = starting_lives;
    }
}

/// Complete game state, exclusively owned by the driver and threaded through
/// [`super::tick`]. Recreated whole on full reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickField,
    pub scoreboard: Scoreboard,
    pub phase: GamePhase,
    /// Ticks remaining in the life-loss breather; 0 outside it. While
    /// non-zero the Paused phase auto-resumes and ignores the pause toggle.
    pub respawn_ticks: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(cfg: &Config) -> Self {
        Self {
            paddle: Paddle::new(cfg),
            ball: Ball::new(cfg),
            bricks: BrickField::new(cfg),
            scoreboard: Scoreboard::new(cfg.starting_lives),
            phase: GamePhase::Running,
            respawn_ticks: 0,
            time_ticks: 0,
        }
    }

    /// Put ball and paddle back at their serve position and velocity.
    /// Bricks and scoreboard are untouched; this is the life-loss reset,
    /// not the full game reset.
    pub fn reset_ball_and_paddle(&mut self, cfg: &Config) {
        self.paddle.pos = cfg.paddle_start();
        self.ball.pos = cfg.ball_start();
        self.ball.vel = cfg.ball_initial_velocity;
    }

    /// Immutable per-tick view for the output collaborator.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            paddle: PaddleView {
                x: self.paddle.pos.x,
                y: self.paddle.pos.y,
                w: self.paddle.size.x,
                h: self.paddle.size.y,
            },
            ball: BallView {
                x: self.ball.pos.x,
                y: self.ball.pos.y,
                diameter: self.ball.diameter,
            },
            bricks: self
                .bricks
                .iter()
                .map(|b| BrickView {
                    x: b.rect.pos.x,
                    y: b.rect.pos.y,
                    w: b.rect.size.x,
                    h: b.rect.size.y,
                    destroyed: b.destroyed,
                })
                .collect(),
            score: self.scoreboard.score,
            lives: self.scoreboard.lives,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn brick_field_is_row_major() {
        let cfg = Config::default();
        let field = BrickField::new(&cfg);
        assert_eq!(field.len(), 50);

        // First brick at the grid offset
        let first = field.get(0).unwrap();
        assert_eq!(first.rect.pos, Vec2::new(70.0, 50.0));

        // Second brick is the next column, same row
        let second = field.get(1).unwrap();
        assert_eq!(second.rect.pos, Vec2::new(140.0, 50.0));

        // Brick `cols` starts the second row
        let next_row = field.get(cfg.cols as usize).unwrap();
        assert_eq!(next_row.rect.pos, Vec2::new(70.0, 80.0));
    }

    #[test]
    fn scoreboard_lives_saturate_at_zero() {
        let mut board = Scoreboard::new(1);
        board.lose_life();
        board.lose_life();
        assert_eq!(board.lives, 0);
    }

    #[test]
    fn scoreboard_reset_restores_counters() {
        let mut board = Scoreboard::new(3);
        board.add_score(120);
        board.lose_life();
        board.reset(3);
        assert_eq!(board.score, 0);
        assert_eq!(board.lives, 3);
    }

    #[test]
    fn paddle_clamps_at_both_edges() {
        let cfg = Config::default();
        let mut paddle = Paddle::new(&cfg);

        for _ in 0..1000 {
            paddle.move_left();
        }
        assert_eq!(paddle.pos.x, 0.0);

        for _ in 0..1000 {
            paddle.move_right(cfg.board_width);
        }
        assert_eq!(paddle.pos.x, cfg.board_width - cfg.paddle_width);
    }

    proptest! {
        /// Any sequence of moves keeps 0 <= x <= board_width - width.
        #[test]
        fn paddle_position_always_in_bounds(moves in prop::collection::vec(any::<bool>(), 0..200)) {
            let cfg = Config::default();
            let mut paddle = Paddle::new(&cfg);
            for go_left in moves {
                if go_left {
                    paddle.move_left();
                } else {
                    paddle.move_right(cfg.board_width);
                }
                prop_assert!(paddle.pos.x >= 0.0);
                prop_assert!(paddle.pos.x <= cfg.board_width - paddle.size.x);
            }
        }

        /// bounce_x twice restores the original velocity (involution).
        #[test]
        fn bounce_is_an_involution(vx in -50.0f32..50.0, vy in -50.0f32..50.0) {
            let cfg = Config::default();
            let mut ball = Ball::new(&cfg);
            ball.vel = Vec2::new(vx, vy);

            ball.bounce_x();
            ball.bounce_x();
            prop_assert_eq!(ball.vel, Vec2::new(vx, vy));

            ball.bounce_y();
            ball.bounce_y();
            prop_assert_eq!(ball.vel, Vec2::new(vx, vy));
        }
    }
}
