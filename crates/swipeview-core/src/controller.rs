//! Motion controller.
//!
//! Owns the horizontal offset of the surface, turns classifier outcomes into
//! tween requests and sequences the lifecycle callbacks around them.
//!
//! Per gesture cycle the phase moves
//! `Idle -> Dragging -> (FlyingOut | BouncingBack) -> Idle`. Calls that do not
//! fit the current phase are logged and ignored so the machine stays total.

use swipeview_animation::{AnimationSpec, Easing, TweenEngine, TweenRequest};

use crate::classifier::SwipeOutcome;
use crate::config::{SwipeCallbacks, SwipeConfig};
use crate::direction::SwipeDirection;
use crate::gesture_constants::FLY_OUT_DISTANCE;
use crate::layout::SurfaceWidth;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipePhase {
    Idle,
    Dragging { direction: SwipeDirection },
    FlyingOut { direction: SwipeDirection, target: f32 },
    BouncingBack { direction: SwipeDirection },
}

pub struct MotionController<E: TweenEngine> {
    engine: E,
    offset: f32,
    phase: SwipePhase,
    bounce: AnimationSpec,
    fly_out_speed_floor: f32,
    callbacks: SwipeCallbacks,
}

impl<E: TweenEngine> MotionController<E> {
    pub fn new(config: &SwipeConfig, engine: E) -> Self {
        Self {
            engine,
            offset: 0.0,
            phase: SwipePhase::Idle,
            bounce: config.bounce,
            fly_out_speed_floor: config.fly_out_speed_floor,
            callbacks: config.callbacks.clone(),
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == SwipePhase::Idle
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, SwipePhase::Dragging { .. })
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Enters `Dragging` and fires `on_swipe_start`. Returns false (and does
    /// nothing) unless the controller is idle.
    pub fn begin_drag(&mut self, direction: SwipeDirection) -> bool {
        if !self.is_idle() {
            log::warn!("ignoring claim {} while {:?}", direction, self.phase);
            return false;
        }
        log::debug!("swipe claimed toward {}", direction);
        self.phase = SwipePhase::Dragging { direction };
        (self.callbacks.on_swipe_start)(direction);
        true
    }

    /// Follows the pointer exactly while dragging.
    pub fn track(&mut self, dx: f32) {
        if !self.is_dragging() {
            log::warn!("ignoring drag sample {} while {:?}", dx, self.phase);
            return;
        }
        log::trace!("offset {:.2} -> {:.2}", self.offset, dx);
        self.offset = dx;
    }

    /// Issues the fly-out or bounce-back intent for a release outcome.
    pub fn resolve(&mut self, outcome: SwipeOutcome) {
        if !self.is_dragging() {
            log::warn!("ignoring outcome {:?} while {:?}", outcome, self.phase);
            return;
        }
        match outcome {
            SwipeOutcome::SwipeOut {
                direction,
                dx,
                speed,
            } => self.fly_out(direction, dx, speed),
            SwipeOutcome::Cancel { direction } => self.bounce_back(direction),
        }
    }

    fn fly_out(&mut self, direction: SwipeDirection, dx: f32, speed: f32) {
        (self.callbacks.on_will_be_swiped_out)(direction);

        let target = FLY_OUT_DISTANCE * direction.sign();
        let duration_millis = (target - dx).abs() / speed.max(self.fly_out_speed_floor);
        log::debug!(
            "flying out {} from {:.1} to {:.1} over {:.1}ms",
            direction,
            self.offset,
            target,
            duration_millis
        );

        self.phase = SwipePhase::FlyingOut { direction, target };
        self.engine.animate(TweenRequest::new(
            self.offset,
            target,
            duration_millis,
            Easing::Linear,
        ));
    }

    fn bounce_back(&mut self, direction: SwipeDirection) {
        if direction != SwipeDirection::None {
            (self.callbacks.on_will_bounce_back)(direction);
        }
        log::debug!(
            "bouncing back ({}) from {:.1} over {:.1}ms",
            direction,
            self.offset,
            self.bounce.duration_millis
        );

        self.phase = SwipePhase::BouncingBack { direction };
        self.engine.animate(TweenRequest {
            from: self.offset,
            to: 0.0,
            spec: self.bounce,
        });
    }

    /// Applies an interpolated value reported by the tween engine.
    pub fn on_tween_value(&mut self, value: f32) {
        match self.phase {
            SwipePhase::FlyingOut { .. } | SwipePhase::BouncingBack { .. } => {
                self.offset = value;
            }
            _ => log::warn!("ignoring tween value {} while {:?}", value, self.phase),
        }
    }

    /// Lands exactly on the target, returns to `Idle`, then fires the
    /// completion callback.
    pub fn on_tween_complete(&mut self) {
        match self.phase {
            SwipePhase::FlyingOut { direction, target } => {
                self.offset = target;
                self.phase = SwipePhase::Idle;
                log::debug!("swiped out {}", direction);
                (self.callbacks.on_swiped_out)(direction);
            }
            SwipePhase::BouncingBack { direction } => {
                self.offset = 0.0;
                self.phase = SwipePhase::Idle;
                log::debug!("bounced back ({})", direction);
                (self.callbacks.on_bounced_back)(direction);
            }
            _ => log::warn!("ignoring tween completion while {:?}", self.phase),
        }
    }

    /// `offset / width`, 0 while the width is unknown.
    pub fn progress(&self, width: SurfaceWidth) -> f32 {
        width.normalize(self.offset)
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
