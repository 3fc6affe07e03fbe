//! Immutable per-tick scene snapshot
//!
//! The output collaborator (renderer, HUD, test harness) consumes this view
//! instead of reaching into `GameState`. Serializable so drivers can ship it
//! across any boundary.

use serde::Serialize;

use super::state::GamePhase;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub diameter: f32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BrickView {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub destroyed: bool,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub paddle: PaddleView,
    pub ball: BallView,
    /// Creation (row-major) order, destroyed bricks included.
    pub bricks: Vec<BrickView>,
    pub score: u32,
    pub lives: u32,
    pub phase: GamePhase,
}
