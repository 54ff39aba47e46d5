//! Raw pointer input and its conversion into gesture samples.
//!
//! Hosts that only have absolute pointer positions (rather than a gesture API
//! reporting cumulative displacement and velocity) feed `PointerEvent`s into a
//! `PointerTracker`, which produces the move/release/terminate samples the
//! classifier understands.

use web_time::Instant;

use crate::gesture_constants::MAX_RELEASE_VELOCITY;
use crate::velocity_tracker::VelocityTracker1D;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// The gesture was taken away, e.g. claimed by a competing recognizer.
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Absolute position in logical pixels.
    pub position: Point,
    pub time: Instant,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, time: Instant) -> Self {
        Self {
            kind,
            position,
            time,
        }
    }
}

/// Cumulative gesture sample, relative to where the pointer went down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureSample {
    Move { dx: f32, dy: f32 },
    /// `vx` is in px/ms.
    Release { dx: f32, vx: f32 },
    Terminate { dx: f32 },
}

#[derive(Clone, Copy, Debug)]
struct Origin {
    position: Point,
    time: Instant,
}

#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    origin: Option<Origin>,
    last_dx: f32,
    velocity: VelocityTracker1D,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    /// Returns the sample for `event`, or `None` for a down event or for
    /// events that arrive without a preceding down.
    pub fn handle(&mut self, event: &PointerEvent) -> Option<GestureSample> {
        match event.kind {
            PointerEventKind::Down => {
                self.origin = Some(Origin {
                    position: event.position,
                    time: event.time,
                });
                self.last_dx = 0.0;
                self.velocity.reset();
                self.velocity.add_data_point(0, event.position.x);
                None
            }
            PointerEventKind::Move => {
                let origin = self.origin?;
                let dx = self.record(origin, event);
                let dy = event.position.y - origin.position.y;
                Some(GestureSample::Move { dx, dy })
            }
            PointerEventKind::Up => {
                let origin = self.origin.take()?;
                let dx = self.record(origin, event);
                let max_per_second = MAX_RELEASE_VELOCITY * 1000.0;
                let vx = self.velocity.calculate_velocity_with_max(max_per_second) / 1000.0;
                Some(GestureSample::Release { dx, vx })
            }
            PointerEventKind::Cancel => {
                self.origin.take()?;
                Some(GestureSample::Terminate { dx: self.last_dx })
            }
        }
    }

    fn record(&mut self, origin: Origin, event: &PointerEvent) -> f32 {
        let elapsed = event.time.saturating_duration_since(origin.time);
        self.velocity
            .add_data_point(elapsed.as_millis() as i64, event.position.x);
        self.last_dx = event.position.x - origin.position.x;
        self.last_dx
    }
}
