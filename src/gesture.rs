//! Swipe gesture interpretation.
//!
//! Pure mapping from a horizontal drag offset to visual feedback and the
//! commit decision taken on release. Kept free of DOM types so the commit
//! rule can be tested without a browser.

use crate::models::Decision;

/// Horizontal offset (px) a release must exceed to commit a decision.
pub const COMMIT_THRESHOLD: f64 = 100.0;

/// Offset (px) at which the card reaches its maximum rotation.
pub const ROTATION_RANGE: f64 = 200.0;

/// Maximum card rotation in degrees.
pub const MAX_ROTATION_DEG: f64 = 25.0;

/// Offset (px) over which a directional badge fades from hidden to opaque.
pub const BADGE_REVEAL_RANGE: f64 = 100.0;

/// How far off-screen (px) a committed card travels.
pub const EXIT_DISTANCE: f64 = 1000.0;

/// Direction of a completed horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl From<SwipeDirection> for Decision {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Right => Decision::Healthy,
            SwipeDirection::Left => Decision::Sick,
        }
    }
}

/// Decide whether a release at `offset` commits a swipe.
///
/// Returns `None` inside the threshold, where the card springs back to
/// center with no decision recorded.
pub fn commit_direction(offset: f64) -> Option<SwipeDirection> {
    if offset > COMMIT_THRESHOLD {
        Some(SwipeDirection::Right)
    } else if offset < -COMMIT_THRESHOLD {
        Some(SwipeDirection::Left)
    } else {
        None
    }
}

/// Card rotation for a given offset, proportional and clamped.
pub fn rotation_deg(offset: f64) -> f64 {
    (offset / ROTATION_RANGE).clamp(-1.0, 1.0) * MAX_ROTATION_DEG
}

/// Opacity of the directional badge for `direction` at `offset`.
///
/// Ramps linearly from 0 at center to 1 once the offset covers the reveal
/// range in the badge's direction; the opposite badge stays hidden.
pub fn badge_opacity(offset: f64, direction: SwipeDirection) -> f64 {
    let toward = match direction {
        SwipeDirection::Right => offset,
        SwipeDirection::Left => -offset,
    };
    (toward / BADGE_REVEAL_RANGE).clamp(0.0, 1.0)
}

/// Card body opacity: opaque within the commit zone, fading out as the
/// card travels beyond it.
pub fn card_opacity(offset: f64) -> f64 {
    let excess = (offset.abs() - COMMIT_THRESHOLD) / (ROTATION_RANGE - COMMIT_THRESHOLD);
    1.0 - excess.clamp(0.0, 1.0)
}

/// Target offset for the off-screen exit animation.
pub fn exit_offset(direction: SwipeDirection) -> f64 {
    match direction {
        SwipeDirection::Right => EXIT_DISTANCE,
        SwipeDirection::Left => -EXIT_DISTANCE,
    }
}
