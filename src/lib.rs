//! Brick Breaker - a single-screen arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state machine)
//! - `config`: Data-driven board/grid/entity constants with validation
//!
//! The crate owns no window, input device, or renderer. A surrounding driver
//! samples input into a [`sim::TickInput`], calls [`sim::tick`] once per
//! frame, and hands the resulting [`sim::Snapshot`] to whatever draws it.

pub mod config;
pub mod sim;

pub use config::{Config, ConfigError};
pub use sim::{GameEvent, GamePhase, GameState, Snapshot, TickInput, tick};

/// Fixed simulation timestep the reference cadence targets (~60 Hz).
///
/// The core itself is tick-counted and never reads a clock; this is for
/// drivers that schedule `tick` calls against real time.
pub const TICK_SECONDS: f32 = 1.0 / 60.0;
