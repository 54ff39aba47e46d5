//! The swipeable surface: classifier, motion controller and layout state
//! behind the inbound collaborator contracts.

use swipeview_animation::{FrameTweenEngine, TweenEngine};

use crate::classifier::GestureClassifier;
use crate::config::{ConfigError, SwipeConfig};
use crate::controller::{MotionController, SwipePhase};
use crate::direction::{DirectionSet, SwipeDirection};
use crate::layout::SurfaceWidth;
use crate::pointer::{GestureSample, PointerEvent, PointerTracker};

pub struct SwipeSurface<E: TweenEngine> {
    classifier: GestureClassifier,
    controller: MotionController<E>,
    width: SurfaceWidth,
    opacity_directions: DirectionSet,
    tracker: PointerTracker,
}

impl<E: TweenEngine> SwipeSurface<E> {
    /// Builds a surface, rejecting configurations that could never swipe.
    pub fn new(config: SwipeConfig, engine: E) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            classifier: GestureClassifier::from_config(&config),
            controller: MotionController::new(&config, engine),
            width: SurfaceWidth::Unknown,
            opacity_directions: config.opacity_directions,
            tracker: PointerTracker::new(),
        })
    }

    /// Layout report. Applied immediately, including mid-gesture; an in-flight
    /// tween is not touched.
    pub fn on_width_measured(&mut self, width: f32) {
        match SurfaceWidth::measured(width) {
            Some(measured) => {
                log::debug!("surface width {:?} -> {:?}", self.width, measured);
                self.width = measured;
            }
            None => log::warn!("ignoring invalid surface width {}", width),
        }
    }

    /// Move sample with cumulative displacement since the gesture started.
    pub fn on_move_sample(&mut self, dx: f32, dy: f32) {
        match self.controller.phase() {
            SwipePhase::Idle => {
                if let Some(direction) = self.classifier.claim(dx, dy) {
                    self.controller.begin_drag(direction);
                    self.controller.track(dx);
                }
            }
            SwipePhase::Dragging { .. } => self.controller.track(dx),
            phase => log::trace!("move sample ({}, {}) during {:?}", dx, dy, phase),
        }
    }

    /// Release with final displacement `dx` and velocity `vx` in px/ms.
    pub fn on_release(&mut self, dx: f32, vx: f32) {
        if !self.controller.is_dragging() {
            log::debug!("release of unclaimed gesture ignored");
            return;
        }
        self.controller.track(dx);
        let outcome = self.classifier.classify_release(dx, vx, self.width);
        log::debug!("release dx={:.1} vx={:.3} -> {:?}", dx, vx, outcome);
        self.controller.resolve(outcome);
    }

    /// The gesture was taken away. Always bounces back.
    pub fn on_terminate(&mut self, dx: f32) {
        if !self.controller.is_dragging() {
            log::debug!("termination of unclaimed gesture ignored");
            return;
        }
        self.controller.track(dx);
        let outcome = self.classifier.classify_terminate(dx);
        log::debug!("terminated at dx={:.1} -> {:?}", dx, outcome);
        self.controller.resolve(outcome);
    }

    /// Raw pointer input, converted into move/release/terminate samples.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) {
        match self.tracker.handle(event) {
            Some(GestureSample::Move { dx, dy }) => self.on_move_sample(dx, dy),
            Some(GestureSample::Release { dx, vx }) => self.on_release(dx, vx),
            Some(GestureSample::Terminate { dx }) => self.on_terminate(dx),
            None => {}
        }
    }

    /// Interpolated value from the tween engine.
    pub fn on_tween_value(&mut self, value: f32) {
        self.controller.on_tween_value(value);
    }

    /// Completion notification from the tween engine.
    pub fn on_tween_complete(&mut self) {
        self.controller.on_tween_complete();
    }

    pub fn offset(&self) -> f32 {
        self.controller.offset()
    }

    pub fn phase(&self) -> SwipePhase {
        self.controller.phase()
    }

    /// Offset a renderer should translate the surface by: `offset` held at
    /// rest on a side the surface cannot be swiped toward.
    pub fn translation(&self) -> f32 {
        let allowed = self.classifier.allowed_directions();
        let offset = self.offset();
        let min = if allowed.contains(SwipeDirection::Left) {
            f32::NEG_INFINITY
        } else {
            0.0
        };
        let max = if allowed.contains(SwipeDirection::Right) {
            f32::INFINITY
        } else {
            0.0
        };
        offset.clamp(min, max)
    }

    pub fn surface_width(&self) -> SurfaceWidth {
        self.width
    }

    /// True between claim and release/terminate.
    pub fn is_gesture_active(&self) -> bool {
        self.controller.is_dragging()
    }

    /// `offset / width`; 0 while the width is unknown.
    pub fn progress(&self) -> f32 {
        self.controller.progress(self.width)
    }

    /// `|progress|` clamped to `[0, 1]` when the offset is on a side that
    /// fades, 0 otherwise.
    pub fn fade_progress(&self) -> f32 {
        let side = SwipeDirection::from_displacement(self.offset());
        if self.opacity_directions.contains(side) {
            self.progress().abs().min(1.0)
        } else {
            0.0
        }
    }

    pub fn engine(&self) -> &E {
        self.controller.engine()
    }

    pub fn engine_mut(&mut self) -> &mut E {
        self.controller.engine_mut()
    }
}

impl SwipeSurface<FrameTweenEngine> {
    /// Pumps the built-in engine for one frame. Returns true while a tween is
    /// still running.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        let Some(sample) = self.controller.engine_mut().advance(frame_time_nanos) else {
            return false;
        };
        self.controller.on_tween_value(sample.value);
        if sample.finished {
            self.controller.on_tween_complete();
            return false;
        }
        true
    }
}

#[cfg(test)]
#[path = "tests/surface_tests.rs"]
mod tests;
