//! Per-frame simulation step
//!
//! One `tick` call advances a round by one measured frame delta. The caller
//! owns pacing; everything in here is delta-scaled.

use super::state::{GameState, Phase};
use crate::consts::*;

/// Input sampled for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap requested this frame
    pub flap: bool,
}

/// Advance the round by `dt_ms` milliseconds.
///
/// `dt_ms` must be positive: deltas are measured by the caller, and a zero or
/// negative value would corrupt the integration.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    assert!(dt_ms > 0.0, "frame delta must be positive, got {dt_ms}");

    // Scroll is keyed to the first flap and scaled by the crash slow-down
    let scroll = if state.player.airborne() {
        SCROLL_SPEED * state.slow_down
    } else {
        0.0
    };

    match state.phase {
        Phase::Playing => {
            let points = state.advance_pipes(dt_ms, scroll);
            if points > 0 {
                state.score += points;
                log::debug!("score {}", state.score);
            }

            let alive = state
                .player
                .update(dt_ms, &state.pipes, state.screen, input.flap);
            if !alive {
                log::info!("crashed at score {}", state.score);
                state.phase = Phase::Dying;
                // Drift out to the left; flap input is dead from here on
                state.player.vel.x = -SCROLL_SPEED;
            }
        }
        Phase::Dying => {
            state.slow_down *= 0.5_f32.powf(dt_ms / CRASH_DECAY_HALF_LIFE_MS);
            // Score is frozen: pass points are dropped on the floor
            state.advance_pipes(dt_ms, scroll);
            state
                .player
                .update(dt_ms, &state.pipes, state.screen, false);
            if state.player.out_of_bounds(state.screen) {
                log::info!("round over, final score {}", state.score);
                state.phase = Phase::Over;
            }
        }
        Phase::Over => {}
    }
}
