//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Delta-scaled physics only, no wall-clock reads
//! - Seeded RNG only (gap placement)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{resolve_horizontal, resolve_vertical};
pub use rect::{Rect, rotated_extent};
pub use state::{GameState, Phase, Pipe, PipeField, Player};
pub use tick::{TickInput, tick};
