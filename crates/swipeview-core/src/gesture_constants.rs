//! Shared gesture constants for swipe recognition.
//!
//! Distances are in logical pixels, velocities in logical pixels per
//! millisecond (the unit pan-responder style gesture APIs report), and
//! durations in milliseconds.

/// Vertical travel at or beyond which a drag is treated as a scroll and never
/// claimed.
pub const VERTICAL_TOLERANCE: f32 = 5.0;

/// Horizontal travel required before a drag is claimed as a swipe.
///
/// Small enough to feel responsive, large enough to ignore finger jitter on
/// touch screens.
pub const HORIZONTAL_TOLERANCE: f32 = 5.0;

/// Release speed (px/ms) above which an allowed drag commits regardless of
/// how far it travelled.
pub const COMMIT_SPEED: f32 = 1.0;

/// Distance the surface flies to when swiped out. Far beyond any realistic
/// surface width so the surface always leaves the viewport.
pub const FLY_OUT_DISTANCE: f32 = 2000.0;

/// Default lower bound for the speed used to derive fly-out duration (px/ms).
pub const DEFAULT_FLY_OUT_SPEED_FLOOR: f32 = 1.0;

/// Default fraction of the surface width that commits a swipe.
pub const DEFAULT_COMPLETION_FRACTION: f32 = 0.5;

/// Default bounce-back duration in seconds.
pub const DEFAULT_BOUNCE_DURATION_SECS: f32 = 0.2;

/// Maximum release velocity reported by the pointer tracker, in px/ms.
///
/// Matches the common 8000 px/s platform fling cap.
pub const MAX_RELEASE_VELOCITY: f32 = 8.0;
