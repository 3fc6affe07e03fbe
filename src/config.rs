//! Game configuration
//!
//! Board, grid, and entity constants are data, not protocol: drivers may load
//! a custom `Config` (serde) or use the reference defaults. Geometry must be
//! validated once at initialization; the simulation assumes a valid config.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Vertical gap between the bottom edge of the board and the paddle.
const PADDLE_BOTTOM_MARGIN: f32 = 50.0;

/// Rejected configuration geometry.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositiveDimension { name: &'static str, value: f32 },
    #[error("brick grid must have at least one row and one column")]
    EmptyGrid,
    #[error("starting lives must be at least 1")]
    NoLives,
}

/// All tunable constants of the game.
///
/// Defaults reproduce the reference board: 800x600, a 5x10 brick grid of
/// 60x20 bricks with 10 px padding at offset (70, 50), a 100x10 paddle moving
/// 5 px/tick, and a 20 px ball launched at (3, -3) px/tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub board_width: f32,
    pub board_height: f32,
    /// Brick grid shape, row-major.
    pub rows: u32,
    pub cols: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    /// Gap between adjacent bricks, both axes.
    pub padding: f32,
    /// Top-left corner of the grid.
    pub offset_x: f32,
    pub offset_y: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle movement per tick while a direction key is held.
    pub paddle_speed: f32,
    pub ball_diameter: f32,
    /// Ball velocity at serve and after every life-loss reset.
    pub ball_initial_velocity: Vec2,
    pub starting_lives: u32,
    pub points_per_brick: u32,
    /// Ticks spent in the non-cancellable pause after losing a life
    /// (60 ticks is the reference's one-second breather at ~60 Hz).
    pub respawn_delay_ticks: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_width: 800.0,
            board_height: 600.0,
            rows: 5,
            cols: 10,
            brick_width: 60.0,
            brick_height: 20.0,
            padding: 10.0,
            offset_x: 70.0,
            offset_y: 50.0,
            paddle_width: 100.0,
            paddle_height: 10.0,
            paddle_speed: 5.0,
            ball_diameter: 20.0,
            ball_initial_velocity: Vec2::new(3.0, -3.0),
            starting_lives: 3,
            points_per_brick: 10,
            respawn_delay_ticks: 60,
        }
    }
}

impl Config {
    /// Check geometry once at initialization.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("board_width", self.board_width),
            ("board_height", self.board_height),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_diameter", self.ball_diameter),
        ];
        for (name, value) in dims {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveDimension { name, value });
            }
        }
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        Ok(())
    }

    /// Paddle start position: centered, fixed margin above the bottom edge.
    pub fn paddle_start(&self) -> Vec2 {
        Vec2::new(
            (self.board_width - self.paddle_width) / 2.0,
            self.board_height - PADDLE_BOTTOM_MARGIN,
        )
    }

    /// Ball start position: centered horizontally, resting above the paddle.
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(
            (self.board_width - self.ball_diameter) / 2.0,
            self.paddle_start().y - self.ball_diameter / 2.0,
        )
    }

    /// Total number of bricks in the grid.
    pub fn brick_count(&self) -> usize {
        (self.rows * self.cols) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn default_start_positions_match_reference() {
        let cfg = Config::default();
        assert_eq!(cfg.paddle_start(), Vec2::new(350.0, 550.0));
        assert_eq!(cfg.ball_start(), Vec2::new(390.0, 540.0));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let mut cfg = Config::default();
        cfg.board_width = 0.0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NonPositiveDimension {
                name: "board_width",
                value: 0.0
            })
        );

        let mut cfg = Config::default();
        cfg.brick_height = -20.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositiveDimension {
                name: "brick_height",
                ..
            })
        ));
    }

    #[test]
    fn rejects_empty_grid() {
        let mut cfg = Config::default();
        cfg.rows = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyGrid));
    }

    #[test]
    fn round_trips_through_json() {
        let cfg = Config::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.validate(), Ok(()));
        assert_eq!(back.board_width, cfg.board_width);
        assert_eq!(back.ball_initial_velocity, cfg.ball_initial_velocity);
    }
}
