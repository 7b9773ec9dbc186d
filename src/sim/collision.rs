//! Axis-separated collision resolution
//!
//! The player moves one axis at a time. When the moved axis lands inside a
//! pipe rect, the position is snapped back out on that axis alone, to the
//! near edge given the approach side; the caller inverts that velocity
//! component.

use glam::Vec2;

use super::rect::Rect;

/// Corrected center x for a box of `half` extent overlapping `rect`.
///
/// A center still left of the rect's right edge snaps to the left side,
/// anything else to the right side.
pub fn resolve_horizontal(center: Vec2, half: Vec2, rect: &Rect) -> f32 {
    if center.x < rect.right() {
        rect.left() - half.x
    } else {
        rect.right() + half.x
    }
}

/// Corrected center y for a box of `half` extent overlapping `rect`.
pub fn resolve_vertical(center: Vec2, half: Vec2, rect: &Rect) -> f32 {
    if center.y < rect.bottom() {
        rect.top() - half.y
    } else {
        rect.bottom() + half.y
    }
}
