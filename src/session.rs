//! Screen flow: intro, live round, game-over summary
//!
//! The `Session` is the single owner of "what is on screen". Rounds are
//! replaced wholesale on restart; nothing lives in global state.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::Config;
use crate::consts::*;
use crate::highscores::HighScores;
use crate::sim::{GameState, Phase, TickInput, tick};

/// Input sampled for one frame of the outer loop
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionInput {
    /// Flap requested this frame
    pub flap: bool,
    /// Restart requested this frame (game-over screen only)
    pub restart: bool,
}

/// Result card for a finished round
#[derive(Debug, Clone, Copy)]
pub struct RoundSummary {
    pub score: u32,
    /// Best score of the session, including this round
    pub best: u32,
    pub is_new_best: bool,
}

/// What the player is currently looking at
#[derive(Debug)]
pub enum Screen {
    /// Logo splash before the first round
    Intro { elapsed_ms: f32 },
    /// A live round
    Round(GameState),
    /// Crash report; restart unlocks after a short hold
    GameOver {
        summary: RoundSummary,
        lockout_ms: f32,
    },
}

/// Owns the screen flow and everything that outlives a single round
#[derive(Debug)]
pub struct Session {
    screen: Screen,
    scores: HighScores,
    screen_extent: Vec2,
    rounds_played: u32,
    /// Seed stream for the rounds; one session seed replays the whole session
    seeds: Pcg32,
}

impl Session {
    /// The config must already be validated; see `Config::validate`.
    pub fn new(config: &Config, seed: u64) -> Self {
        Self {
            screen: Screen::Intro { elapsed_ms: 0.0 },
            scores: HighScores::new(),
            screen_extent: config.screen_extent(),
            rounds_played: 0,
            seeds: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Intro progress in `[0, 1]` for the renderer, while the intro runs
    pub fn intro_progress(&self) -> Option<f32> {
        match &self.screen {
            Screen::Intro { elapsed_ms } => Some((elapsed_ms / INTRO_MS).min(1.0)),
            _ => None,
        }
    }

    /// Advance the whole game by one measured frame delta
    pub fn update(&mut self, input: &SessionInput, dt_ms: f32) {
        match &mut self.screen {
            Screen::Intro { elapsed_ms } => {
                *elapsed_ms += dt_ms;
                if *elapsed_ms >= INTRO_MS {
                    self.start_round();
                }
            }
            Screen::Round(state) => {
                tick(state, &TickInput { flap: input.flap }, dt_ms);
                if state.phase == Phase::Over {
                    self.finish_round();
                }
            }
            Screen::GameOver { lockout_ms, .. } => {
                *lockout_ms -= dt_ms;
                if *lockout_ms <= 0.0 && input.restart {
                    self.start_round();
                }
            }
        }
    }

    fn start_round(&mut self) {
        let seed = self.seeds.random::<u64>();
        log::info!("round {} starting (seed {seed:#x})", self.rounds_played + 1);
        self.screen = Screen::Round(GameState::new(self.screen_extent, seed));
    }

    fn finish_round(&mut self) {
        let Screen::Round(state) = &self.screen else {
            return;
        };
        let score = state.score;
        self.rounds_played += 1;

        let previous_best = self.scores.top_score().unwrap_or(0);
        let rank = self.scores.add_score(score, self.rounds_played);
        let is_new_best = rank == Some(1) && score > previous_best;
        let summary = RoundSummary {
            score,
            best: self.scores.top_score().unwrap_or(score).max(score),
            is_new_best,
        };

        log::info!(
            "round {} finished: score {}, session best {}",
            self.rounds_played,
            summary.score,
            summary.best
        );
        self.screen = Screen::GameOver {
            summary,
            lockout_ms: RESTART_LOCKOUT_MS,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 8.33;

    fn session() -> Session {
        Session::new(&Config::default(), 0xfeed)
    }

    fn run_until_game_over(session: &mut Session, limit: u32) {
        for _ in 0..limit {
            if matches!(session.screen(), Screen::GameOver { .. }) {
                return;
            }
            // No flaps after takeoff: the player falls out and crashes
            let flap = matches!(session.screen(), Screen::Round(state) if !state.player.airborne());
            session.update(&SessionInput { flap, restart: false }, DT);
        }
        panic!("round never finished");
    }

    #[test]
    fn test_intro_runs_its_course() {
        let mut session = session();
        assert!(matches!(session.screen(), Screen::Intro { .. }));
        assert_eq!(session.intro_progress(), Some(0.0));

        let frames = (INTRO_MS / DT).ceil() as u32 + 1;
        for _ in 0..frames {
            session.update(&SessionInput::default(), DT);
        }
        assert!(matches!(session.screen(), Screen::Round(_)));
        assert_eq!(session.intro_progress(), None);
    }

    #[test]
    fn test_round_flows_into_game_over() {
        let mut session = session();
        run_until_game_over(&mut session, 5_000);

        assert_eq!(session.rounds_played(), 1);
        let Screen::GameOver { summary, .. } = session.screen() else {
            unreachable!()
        };
        assert_eq!(summary.score, 0);
        assert!(!summary.is_new_best);
    }

    #[test]
    fn test_restart_locked_then_honored() {
        let mut session = session();
        run_until_game_over(&mut session, 5_000);

        // Inside the lockout the request is ignored
        let restart = SessionInput {
            flap: false,
            restart: true,
        };
        session.update(&restart, DT);
        assert!(matches!(session.screen(), Screen::GameOver { .. }));

        let frames = (RESTART_LOCKOUT_MS / DT).ceil() as u32 + 1;
        for _ in 0..frames {
            session.update(&restart, DT);
        }
        assert!(matches!(session.screen(), Screen::Round(_)));
    }

    #[test]
    fn test_restart_replaces_the_round_wholesale() {
        let mut session = session();
        run_until_game_over(&mut session, 5_000);

        let restart = SessionInput {
            flap: false,
            restart: true,
        };
        for _ in 0..((RESTART_LOCKOUT_MS / DT).ceil() as u32 + 2) {
            session.update(&restart, DT);
        }

        let Screen::Round(state) = session.screen() else {
            unreachable!()
        };
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.score, 0);
        assert!(!state.player.airborne());
    }

    #[test]
    fn test_rounds_are_counted_across_restarts() {
        let mut session = session();
        run_until_game_over(&mut session, 5_000);

        let restart = SessionInput {
            flap: false,
            restart: true,
        };
        for _ in 0..((RESTART_LOCKOUT_MS / DT).ceil() as u32 + 2) {
            session.update(&restart, DT);
        }
        assert!(matches!(session.screen(), Screen::Round(_)));

        run_until_game_over(&mut session, 10_000);
        assert_eq!(session.rounds_played(), 2);
        // Zero-point rounds never land on the board
        assert!(session.scores().is_empty());
    }
}
