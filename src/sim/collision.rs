//! Collision detection and response
//!
//! Everything here is axis-aligned: the ball is tested as its bounding
//! square. Predicates are pure; the `resolve_*` functions apply the per-tick
//! response rules (velocity reflection, positional clamping, the paddle's
//! position-based steering) and are called from `tick` in a fixed order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, BrickField, Paddle};

/// Divisor turning the ball-to-paddle-center offset into the deflected
/// x-velocity. A center hit yields ~0; an edge hit on the reference paddle
/// (offset up to 50 px) yields up to 5 px/tick.
pub const PADDLE_DEFLECT_DIVISOR: f32 = 10.0;

/// Axis-aligned bounding box: top-left corner plus size, y-down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Strict-inequality overlap: boxes that merely share an edge do not
    /// intersect. The same convention is used for every collision test.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Bounce the ball off the side and top walls.
///
/// A wall only reflects the velocity component pointing into it, and the
/// ball is clamped back onto the board. Without the direction guard a ball
/// resting on a wall would flip its velocity every tick and sink through.
/// There is no bottom wall: falling past the bottom is the life-loss
/// trigger, handled in `tick`.
pub fn resolve_walls(ball: &mut Ball, board_width: f32) {
    let rect = ball.rect();

    if rect.left() <= 0.0 && ball.vel.x < 0.0 {
        ball.bounce_x();
        ball.pos.x = 0.0;
    } else if rect.right() >= board_width && ball.vel.x > 0.0 {
        ball.bounce_x();
        ball.pos.x = board_width - ball.diameter;
    }

    if rect.top() <= 0.0 && ball.vel.y < 0.0 {
        ball.bounce_y();
        ball.pos.y = 0.0;
    }
}

/// Bounce the ball off the paddle, steering it by where it struck.
///
/// Only a downward-moving ball is deflected, so an overlap lingering into
/// the next tick cannot bounce the ball back down onto the paddle. The new
/// x-velocity is the offset between ball center and paddle center divided by
/// [`PADDLE_DEFLECT_DIVISOR`]: center hits go straight up, edge hits deflect
/// hard. Returns true if the paddle was hit.
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    if ball.vel.y <= 0.0 {
        return false;
    }
    if !ball.rect().intersects(&paddle.rect()) {
        return false;
    }

    let relative_intersect = ball.center_x() - paddle.rect().center_x();
    ball.vel.x = relative_intersect / PADDLE_DEFLECT_DIVISOR;
    ball.bounce_y();
    true
}

/// Destroy the first intersecting brick, if any, and bounce the ball.
///
/// Bricks are scanned in creation (row-major) order and the scan stops at
/// the first standing brick the ball overlaps, so at most one brick is
/// destroyed per tick even when the ball geometrically overlaps several.
/// That first-in-order rule is a deliberate tie-break, not a shortcut.
/// Returns the index of the destroyed brick.
pub fn resolve_bricks(ball: &mut Ball, bricks: &mut BrickField) -> Option<usize> {
    let ball_rect = ball.rect();
    for (index, brick) in bricks.iter_mut().enumerate() {
        if !brick.destroyed && ball_rect.intersects(&brick.rect) {
            brick.destroyed = true;
            ball.bounce_y();
            return Some(index);
        }
    }
    None
}
