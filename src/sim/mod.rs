//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, no clocks or timers
//! - Stable brick iteration order (row-major creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use snapshot::Snapshot;
pub use state::{Ball, Brick, BrickField, GameEvent, GamePhase, GameState, Paddle, Scoreboard};
pub use tick::{TickInput, tick};
