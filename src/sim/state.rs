//! Round state and core simulation types
//!
//! One `GameState` is one round. Pipes are recycled in place, never
//! reallocated; the whole state is replaced wholesale on restart.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{resolve_horizontal, resolve_vertical};
use super::rect::{Rect, rotated_extent};
use crate::consts::*;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Live play, including the pre-first-flap hover
    Playing,
    /// Crashed: scroll decays, flap input is ignored, the player tumbles out
    Dying,
    /// The player left the screen; the round is finished
    Over,
}

/// The player sprite
#[derive(Debug, Clone)]
pub struct Player {
    /// Sprite center (px, y down)
    pub pos: Vec2,
    /// Velocity (px/ms)
    pub vel: Vec2,
    /// Nose-down tilt while falling fast (degrees, always <= 0)
    pub tilt_deg: f32,
    /// Wing animation frame index, in `0..ANIM_FRAMES`
    pub frame: u32,
    /// Sprite mirrors horizontally while drifting left
    pub mirrored: bool,
    anim_timer_ms: f32,
    flap_cooldown_ms: f32,
    /// False until the first flap; the player hovers in place before that
    pub(crate) airborne: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            tilt_deg: 0.0,
            frame: 0,
            mirrored: false,
            anim_timer_ms: 0.0,
            flap_cooldown_ms: SPAWN_COOLDOWN_MS,
            airborne: false,
        }
    }

    /// Whether the first flap has happened; scroll is keyed to this
    #[inline]
    pub fn airborne(&self) -> bool {
        self.airborne
    }

    /// Collision bounds: the inset sprite box widened to the axis-aligned
    /// extent of the current tilt
    pub fn bounds(&self) -> Rect {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT - 2.0 * PLAYER_HITBOX_INSET);
        Rect::centered(self.pos, rotated_extent(size, self.tilt_deg))
    }

    /// Fully above or fully below the visible vertical extent
    pub fn out_of_bounds(&self, screen: Vec2) -> bool {
        let half = self.bounds().half_extent();
        self.pos.y + half.y < 0.0 || self.pos.y - half.y > screen.y
    }

    fn flap(&mut self) {
        self.airborne = true;
        self.vel.y = -FLAP_IMPULSE;
        self.flap_cooldown_ms = FLAP_COOLDOWN_MS;
    }

    fn animate(&mut self, dt: f32) {
        self.anim_timer_ms += dt;
        if self.anim_timer_ms > ANIM_CYCLE_MS / ANIM_FRAMES as f32 {
            self.frame = (self.frame + 1) % ANIM_FRAMES;
            self.mirrored = self.vel.x < 0.0;
            self.anim_timer_ms = 0.0;
        }
    }

    fn lean(&mut self, dt: f32) {
        if self.vel.y > TILT_FALL_THRESHOLD {
            self.tilt_deg = (self.tilt_deg - dt * TILT_RATE).max(-TILT_MAX_DEG);
        } else {
            self.tilt_deg = 0.0;
        }
    }

    /// Advance the player one frame. Returns false on any lethal outcome
    /// (out of bounds, or a pipe hit on either axis); position and velocity
    /// are already resolved when that happens.
    ///
    /// Movement is axis-separated: horizontal first, vertical only if the
    /// horizontal pass stayed clear. Gravity accumulates only on a fully
    /// clear frame.
    pub fn update(
        &mut self,
        dt: f32,
        pipes: &PipeField,
        screen: Vec2,
        flap_requested: bool,
    ) -> bool {
        if !self.airborne {
            self.vel = Vec2::ZERO;
        }
        self.animate(dt);
        self.flap_cooldown_ms -= dt;
        self.lean(dt);

        if flap_requested && self.flap_cooldown_ms <= 0.0 {
            self.flap();
        }

        if self.out_of_bounds(screen) {
            return false;
        }

        self.pos.x += self.vel.x * dt;
        if let Some(rect) = pipes.hit(&self.bounds(), screen) {
            self.pos.x = resolve_horizontal(self.pos, self.bounds().half_extent(), &rect);
            self.vel.x = -self.vel.x;
            return false;
        }

        self.pos.y += self.vel.y * dt;
        if let Some(rect) = pipes.hit(&self.bounds(), screen) {
            self.pos.y = resolve_vertical(self.pos, self.bounds().half_extent(), &rect);
            self.vel.y = -self.vel.y;
            return false;
        }

        self.vel.y += GRAVITY * dt;
        true
    }
}

/// One scrolling barrier pair with a passable gap
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Left edge of the column (px)
    pub x: f32,
    /// Vertical center of the gap band (px)
    pub gap_center: f32,
    scored: bool,
}

impl Pipe {
    pub fn new(x: f32, gap_center: f32) -> Self {
        Self {
            x,
            gap_center,
            scored: false,
        }
    }

    /// Top of the gap band
    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.gap_center - GAP_HEIGHT / 2.0
    }

    /// Bottom of the gap band
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_center + GAP_HEIGHT / 2.0
    }

    /// Right edge of the column
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    /// Whether this column already paid out its point
    #[inline]
    pub fn scored(&self) -> bool {
        self.scored
    }

    /// The two collision rects, recomputed from the current position. Both
    /// overshoot the screen edges so the player cannot slip around a column.
    pub fn rects(&self, screen: Vec2) -> [Rect; 2] {
        let bottom_top = self.gap_bottom();
        [
            Rect::new(self.x, -PIPE_OVERDRAW, PIPE_WIDTH, self.gap_top() + PIPE_OVERDRAW),
            Rect::new(
                self.x,
                bottom_top,
                PIPE_WIDTH,
                screen.y - bottom_top + PIPE_OVERDRAW,
            ),
        ]
    }

    /// Scroll left by `scroll` px/ms
    pub fn advance(&mut self, dt: f32, scroll: f32) {
        self.x -= scroll * dt;
    }

    /// Jump two screen widths to the right and redraw the gap
    pub fn recycle(&mut self, rng: &mut impl Rng, screen: Vec2) {
        self.x += 2.0 * screen.x;
        self.gap_center = random_gap_center(rng, screen);
        self.scored = false;
    }

    /// One point, exactly once per pass; rearmed by `recycle`
    pub fn take_score(&mut self) -> u32 {
        if self.scored {
            0
        } else {
            self.scored = true;
            1
        }
    }
}

/// Uniform gap center keeping the whole band `GAP_MARGIN` away from both
/// screen edges
fn random_gap_center(rng: &mut impl Rng, screen: Vec2) -> f32 {
    let lo = GAP_MARGIN + GAP_HEIGHT / 2.0;
    let hi = screen.y - GAP_MARGIN - GAP_HEIGHT / 2.0;
    rng.random_range(lo..=hi)
}

/// Fixed-size rolling set of pipe columns
#[derive(Debug, Clone)]
pub struct PipeField {
    pub pipes: Vec<Pipe>,
    /// Horizontal distance between columns (px)
    pub spacing: f32,
}

impl PipeField {
    /// Columns spaced half a screen apart, with enough of them that the band
    /// they cover is at least two screens wide
    pub fn new(rng: &mut impl Rng, screen: Vec2) -> Self {
        let spacing = screen.x / 2.0;
        let count = (2.0 * screen.x / spacing).ceil() as usize;
        let start_x = screen.x * 1.1;
        let pipes = (0..count)
            .map(|i| Pipe::new(start_x + spacing * i as f32, random_gap_center(rng, screen)))
            .collect();
        Self { pipes, spacing }
    }

    /// First pipe rect the given bounds overlap, if any
    pub fn hit(&self, bounds: &Rect, screen: Vec2) -> Option<Rect> {
        self.pipes
            .iter()
            .flat_map(|p| p.rects(screen))
            .find(|r| r.overlaps(bounds))
    }

    /// Scroll every column, recycle the ones that left the screen, and bank
    /// passes against `player_x`. Returns the points earned this frame.
    pub fn advance(
        &mut self,
        rng: &mut impl Rng,
        dt: f32,
        scroll: f32,
        screen: Vec2,
        player_x: f32,
    ) -> u32 {
        let mut points = 0;
        for pipe in &mut self.pipes {
            pipe.advance(dt, scroll);
            if pipe.right() < 0.0 {
                pipe.recycle(rng, screen);
            }
            if player_x > pipe.right() {
                points += pipe.take_score();
            }
        }
        points
    }
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Screen extent (px)
    pub screen: Vec2,
    pub player: Player,
    pub pipes: PipeField,
    /// Points banked this round; only ever increases
    pub score: u32,
    pub phase: Phase,
    /// Scroll multiplier; 1.0 in play, decaying toward zero after a crash
    pub slow_down: f32,
    /// Round seed, kept for replay and diagnostics
    pub seed: u64,
    rng: Pcg32,
}

impl GameState {
    /// Start a fresh round. The screen extent must be positive and tall
    /// enough to hold the gap band between its margins.
    pub fn new(screen: Vec2, seed: u64) -> Self {
        assert!(
            screen.x > 0.0 && screen.y > 0.0,
            "screen extent must be positive"
        );
        assert!(
            screen.y > 2.0 * GAP_MARGIN + GAP_HEIGHT,
            "screen too short for the gap band"
        );

        let mut rng = Pcg32::seed_from_u64(seed);
        let pipes = PipeField::new(&mut rng, screen);
        let player = Player::new(screen / 2.0);
        Self {
            screen,
            player,
            pipes,
            score: 0,
            phase: Phase::Playing,
            slow_down: 1.0,
            seed,
            rng,
        }
    }

    /// True from the crash onward
    #[inline]
    pub fn crashed(&self) -> bool {
        self.phase != Phase::Playing
    }

    /// True once the player has left the screen and the round is done
    #[inline]
    pub fn finished(&self) -> bool {
        self.phase == Phase::Over
    }

    /// Advance the pipe field one frame, feeding it the round RNG.
    /// Returns the points earned.
    pub(crate) fn advance_pipes(&mut self, dt: f32, scroll: f32) -> u32 {
        self.pipes
            .advance(&mut self.rng, dt, scroll, self.screen, self.player.pos.x)
    }
}
