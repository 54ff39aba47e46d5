//! Gesture classifier.
//!
//! Decides whether a drag is claimed as a horizontal swipe, and at release
//! whether it commits (the surface flies out) or cancels (the surface bounces
//! back). The classifier is stateless; gesture phase lives in the motion
//! controller and surface width in the surface.

use crate::config::SwipeConfig;
use crate::direction::{DirectionSet, SwipeDirection};
use crate::gesture_constants::{COMMIT_SPEED, HORIZONTAL_TOLERANCE, VERTICAL_TOLERANCE};
use crate::layout::SurfaceWidth;

/// Release-time decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeOutcome {
    /// Animate fully off-screen toward `direction` (never `None`).
    SwipeOut {
        direction: SwipeDirection,
        dx: f32,
        speed: f32,
    },
    /// Animate back to rest. `direction` is the drag's sign, possibly `None`.
    Cancel { direction: SwipeDirection },
}

impl SwipeOutcome {
    pub fn direction(&self) -> SwipeDirection {
        match *self {
            SwipeOutcome::SwipeOut { direction, .. } | SwipeOutcome::Cancel { direction } => {
                direction
            }
        }
    }

    pub fn is_commit(&self) -> bool {
        matches!(self, SwipeOutcome::SwipeOut { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureClassifier {
    allowed: DirectionSet,
    completion_fraction: f32,
}

impl GestureClassifier {
    pub fn new(allowed: DirectionSet, completion_fraction: f32) -> Self {
        Self {
            allowed,
            completion_fraction,
        }
    }

    pub fn from_config(config: &SwipeConfig) -> Self {
        Self::new(config.allowed_directions, config.completion_fraction)
    }

    pub fn allowed_directions(&self) -> DirectionSet {
        self.allowed
    }

    /// Returns the claimed direction for a candidate move sample, or `None`
    /// while the drag should stay unclaimed.
    pub fn claim(&self, dx: f32, dy: f32) -> Option<SwipeDirection> {
        if dy.abs() >= VERTICAL_TOLERANCE {
            return None;
        }
        if dx <= -HORIZONTAL_TOLERANCE && self.allowed.contains(SwipeDirection::Left) {
            Some(SwipeDirection::Left)
        } else if dx >= HORIZONTAL_TOLERANCE && self.allowed.contains(SwipeDirection::Right) {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }

    /// Classifies a release with final displacement `dx` and velocity `vx`
    /// (px/ms).
    pub fn classify_release(&self, dx: f32, vx: f32, width: SurfaceWidth) -> SwipeOutcome {
        let speed = vx.abs();
        let direction = SwipeDirection::from_displacement(dx);
        let far_enough = width.exceeded_by(dx.abs(), self.completion_fraction);
        let fast_enough = speed > COMMIT_SPEED;

        if self.allowed.contains(direction) && (far_enough || fast_enough) {
            SwipeOutcome::SwipeOut {
                direction,
                dx,
                speed,
            }
        } else {
            SwipeOutcome::Cancel { direction }
        }
    }

    /// A gesture taken away from us always cancels.
    pub fn classify_terminate(&self, dx: f32) -> SwipeOutcome {
        SwipeOutcome::Cancel {
            direction: SwipeDirection::from_displacement(dx),
        }
    }
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;
