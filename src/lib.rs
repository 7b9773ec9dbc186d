//! Astro Flap - a scrolling-gap arcade hopper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scoring)
//! - `session`: Screen flow (intro, live round, game over) and restarts
//! - `config`: Screen extent and frame pacing
//! - `highscores`: Session leaderboard
//! - `ui`: HUD text for the rendering collaborator

pub mod config;
pub mod highscores;
pub mod session;
pub mod sim;
pub mod ui;

pub use config::Config;
pub use highscores::HighScores;
pub use session::{Screen, Session, SessionInput};

/// Game tuning constants
///
/// Units are pixels and milliseconds throughout: velocities in px/ms,
/// accelerations in px/ms². Y grows downward (screen coordinates).
pub mod consts {
    /// Player sprite extent
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// The hitbox is shaved top and bottom by this much (sprite transparency)
    pub const PLAYER_HITBOX_INSET: f32 = 2.0;

    /// Downward acceleration (px/ms²)
    pub const GRAVITY: f32 = 0.0180;
    /// Upward velocity a flap sets (px/ms)
    pub const FLAP_IMPULSE: f32 = 0.35;
    /// Leftward scroll speed of the pipe field (px/ms)
    pub const SCROLL_SPEED: f32 = 0.215;
    /// Minimum time between flaps once airborne (ms)
    pub const FLAP_COOLDOWN_MS: f32 = 0.0;
    /// Flap lockout right after spawn (ms)
    pub const SPAWN_COOLDOWN_MS: f32 = 200.0;

    /// Fall speed above which the sprite starts nosing down (px/ms)
    pub const TILT_FALL_THRESHOLD: f32 = 0.25;
    /// Tilt rate while falling (degrees per ms)
    pub const TILT_RATE: f32 = 1.0 / 16.0;
    /// Maximum nose-down tilt (degrees)
    pub const TILT_MAX_DEG: f32 = 70.0;

    /// Wing animation frames per cycle
    pub const ANIM_FRAMES: u32 = 4;
    /// Duration of one full wing cycle (ms)
    pub const ANIM_CYCLE_MS: f32 = 500.0;

    /// Pipe column width
    pub const PIPE_WIDTH: f32 = 40.0;
    /// Opening the player must fit through
    pub const GAP_PASS_HEIGHT: f32 = 60.0;
    /// Full gap band: the passable opening plus one player height of clearance
    pub const GAP_HEIGHT: f32 = GAP_PASS_HEIGHT + PLAYER_HEIGHT;
    /// The gap band never gets closer than this to the screen edges
    pub const GAP_MARGIN: f32 = 40.0;
    /// Pipe collision rects overshoot the screen edges by this much
    pub const PIPE_OVERDRAW: f32 = PLAYER_HEIGHT;

    /// Half-life of the scroll slow-down after a crash (ms)
    pub const CRASH_DECAY_HALF_LIFE_MS: f32 = 120.0;
    /// Intro splash duration (ms)
    pub const INTRO_MS: f32 = 750.0;
    /// Game-over screen ignores restart input for this long (ms)
    pub const RESTART_LOCKOUT_MS: f32 = 200.0;
}
