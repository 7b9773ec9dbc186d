//! HUD text for the rendering collaborator
//!
//! Strings only; layout, fonts and drawing happen outside the crate.

use crate::session::{RoundSummary, Screen};

/// Group digits with commas: 1234567 -> "1,234,567"
pub fn format_score(score: u32) -> String {
    let digits = score.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// One-line status for the current screen
pub fn status_line(screen: &Screen) -> String {
    match screen {
        Screen::Intro { .. } => String::new(),
        Screen::Round(state) if !state.player.airborne() => "Press SPACE to jump".to_string(),
        Screen::Round(state) => format!("Score: {}", format_score(state.score)),
        Screen::GameOver { .. } => "Game Over!".to_string(),
    }
}

/// Result card lines for the game-over screen
pub fn summary_lines(summary: &RoundSummary) -> Vec<String> {
    if summary.is_new_best {
        vec![
            "Game Over!".to_string(),
            format!("NEW HIGHSCORE: {}", format_score(summary.score)),
        ]
    } else {
        vec![
            "Game Over!".to_string(),
            format!("Your Score: {}", format_score(summary.score)),
            format!("Highscore: {}", format_score(summary.best)),
        ]
    }
}
