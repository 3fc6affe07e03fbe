//! Brick Breaker headless driver
//!
//! Runs the simulation core without a window: a scripted player tracks the
//! ball with the paddle for a bounded number of ticks, terminal events are
//! logged, and the final scene snapshot is printed as JSON. Rendering and
//! key capture are collaborators this binary deliberately does not have.

use brick_breaker::config::{Config, ConfigError};
use brick_breaker::sim::{GameEvent, GameState, TickInput, tick};

/// Demo length cap so the binary always terminates.
const MAX_DEMO_TICKS: u64 = 120_000;

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let cfg = Config::default();
    cfg.validate()?;
    let mut state = GameState::new(&cfg);

    log::info!(
        "brick breaker demo: {}x{} board, {} bricks",
        cfg.board_width,
        cfg.board_height,
        cfg.brick_count()
    );

    let mut terminal: Option<GameEvent> = None;
    for _ in 0..MAX_DEMO_TICKS {
        let input = follow_ball(&state);
        if let Some(event) = tick(&mut state, &input, &cfg) {
            terminal = Some(event);
            break;
        }
    }

    match terminal {
        Some(GameEvent::Victory { score }) => log::info!("demo won with score {score}"),
        Some(GameEvent::GameOver { score }) => log::info!("demo lost with score {score}"),
        None => log::info!("demo stopped after {MAX_DEMO_TICKS} ticks"),
    }

    let snapshot = state.snapshot();
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).expect("snapshot serializes")
    );
    Ok(())
}

/// Scripted player: hold whichever key moves the paddle center toward the
/// ball center.
fn follow_ball(state: &GameState) -> TickInput {
    let paddle_center = state.paddle.rect().center_x();
    let ball_center = state.ball.center_x();
    TickInput {
        left_held: ball_center < paddle_center - state.paddle.speed,
        right_held: ball_center > paddle_center + state.paddle.speed,
        ..Default::default()
    }
}
