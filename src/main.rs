//! Astro Flap entry point
//!
//! Runs the game headless at the configured frame cap with an autopilot on
//! the flap input, logging round results. Rendering is left to an embedding
//! frontend; this binary exercises the full loop end to end.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;

use astro_flap::config::Config;
use astro_flap::consts::FLAP_IMPULSE;
use astro_flap::session::{Screen, Session, SessionInput};
use astro_flap::sim::GameState;
use astro_flap::ui;

/// Rounds the demo plays before exiting
const DEMO_ROUNDS: u32 = 3;
/// Hard frame budget so a lucky autopilot cannot run forever
const MAX_FRAMES: u32 = 120 * 120;

fn main() -> Result<()> {
    env_logger::init();

    let config_path: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::load_or_default(config_path.as_deref())?;
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0xa57f);

    log::info!(
        "astro-flap {}x{} @ {} fps cap (session seed {seed:#x})",
        config.screen_width,
        config.screen_height,
        config.fps_cap
    );

    let mut session = Session::new(&config, seed);
    let frame_budget = Duration::from_secs_f32(config.frame_budget_ms() / 1000.0);
    let mut last = Instant::now();
    let mut rounds_seen = 0;

    for _ in 0..MAX_FRAMES {
        let frame_start = Instant::now();
        // Measured, not assumed: the sleep below only caps the rate
        let dt_ms = (frame_start - last).as_secs_f32() * 1000.0;
        last = frame_start;
        let dt_ms = dt_ms.max(0.01);

        let input = demo_input(&session);
        session.update(&input, dt_ms);

        if session.rounds_played() > rounds_seen {
            rounds_seen = session.rounds_played();
            if let Screen::GameOver { summary, .. } = session.screen() {
                for line in ui::summary_lines(summary) {
                    log::info!("{line}");
                }
            }
            if rounds_seen >= DEMO_ROUNDS {
                break;
            }
        }

        if let Some(sleep) = frame_budget.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(sleep);
        }
    }

    println!("astro-flap demo: {} rounds played", session.rounds_played());
    for (i, entry) in session.scores().entries.iter().enumerate() {
        println!(
            "  {:>2}. {:>8}  (round {})",
            i + 1,
            ui::format_score(entry.score),
            entry.round
        );
    }
    if session.scores().is_empty() {
        println!("  no scoring rounds");
    }
    Ok(())
}

/// Per-screen demo input: flap via autopilot, restart as soon as allowed
fn demo_input(session: &Session) -> SessionInput {
    match session.screen() {
        Screen::Intro { .. } => SessionInput::default(),
        Screen::Round(state) => SessionInput {
            flap: autopilot_flap(state),
            restart: false,
        },
        Screen::GameOver { .. } => SessionInput {
            flap: false,
            restart: true,
        },
    }
}

/// Flap whenever the player sinks below the next gap center
fn autopilot_flap(state: &GameState) -> bool {
    let player = &state.player;
    if !player.airborne() {
        return true;
    }

    let target = state
        .pipes
        .pipes
        .iter()
        .filter(|p| p.right() >= player.pos.x)
        .min_by(|a, b| a.x.total_cmp(&b.x))
        .map(|p| p.gap_center)
        .unwrap_or(state.screen.y / 2.0);

    // Only flap while sinking; never fight an ongoing climb
    player.pos.y > target && player.vel.y > -0.5 * FLAP_IMPULSE
}
