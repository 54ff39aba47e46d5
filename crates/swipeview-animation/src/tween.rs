//! Frame-driven tweens and the engine contract used by the motion controller.
//!
//! A tween is sampled with monotonically increasing frame timestamps in
//! nanoseconds. The first sample anchors the start time, so a tween requested
//! between frames starts moving on the next frame rather than jumping ahead.

use crate::animation::{AnimationSpec, Easing, Lerp};

/// A request to interpolate a scalar from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenRequest {
    pub from: f32,
    pub to: f32,
    pub spec: AnimationSpec,
}

impl TweenRequest {
    pub fn new(from: f32, to: f32, duration_millis: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            spec: AnimationSpec::tween(duration_millis, easing),
        }
    }

    pub fn duration_millis(&self) -> f32 {
        self.spec.duration_millis
    }

    pub fn easing(&self) -> Easing {
        self.spec.easing
    }
}

/// Value produced by a single frame of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSample {
    pub value: f32,
    pub finished: bool,
}

/// Interpolates a single request over time.
#[derive(Debug, Clone)]
pub struct Tween {
    request: TweenRequest,
    start_time_nanos: Option<u64>,
}

impl Tween {
    pub fn new(request: TweenRequest) -> Self {
        Self {
            request,
            start_time_nanos: None,
        }
    }

    pub fn request(&self) -> &TweenRequest {
        &self.request
    }

    /// Samples the tween at `frame_time_nanos`.
    ///
    /// The final sample is exactly `to`, independent of easing rounding.
    pub fn sample(&mut self, frame_time_nanos: u64) -> TweenSample {
        let start = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let duration_millis = self.request.spec.duration_millis;

        if !duration_millis.is_finite() || duration_millis <= 0.0 {
            return TweenSample {
                value: self.request.to,
                finished: true,
            };
        }

        let elapsed_millis = frame_time_nanos.saturating_sub(start) as f64 / 1_000_000.0;
        let linear_progress = (elapsed_millis / duration_millis as f64).clamp(0.0, 1.0) as f32;

        if linear_progress >= 1.0 {
            return TweenSample {
                value: self.request.to,
                finished: true,
            };
        }

        let progress = self.request.spec.easing.transform(linear_progress);
        TweenSample {
            value: self.request.from.lerp(&self.request.to, progress),
            finished: false,
        }
    }
}

/// Outbound contract: something that can animate the surface offset.
///
/// Implementations are fire-and-forget. Interpolated values and the single
/// completion notification are delivered back to the motion controller by the
/// host that owns the engine.
pub trait TweenEngine {
    fn animate(&mut self, request: TweenRequest);
}

/// Default engine: runs at most one tween, pumped by frame timestamps.
#[derive(Debug, Default)]
pub struct FrameTweenEngine {
    running: Option<Tween>,
}

impl FrameTweenEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a tween is waiting for frames.
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Advances the running tween. Returns `None` when idle.
    pub fn advance(&mut self, frame_time_nanos: u64) -> Option<TweenSample> {
        let tween = self.running.as_mut()?;
        let sample = tween.sample(frame_time_nanos);
        log::trace!(
            "tween frame t={}ns value={:.2} finished={}",
            frame_time_nanos,
            sample.value,
            sample.finished
        );
        if sample.finished {
            self.running = None;
        }
        Some(sample)
    }
}

impl TweenEngine for FrameTweenEngine {
    fn animate(&mut self, request: TweenRequest) {
        if self.running.is_some() {
            log::debug!("replacing running tween with {:?}", request);
        }
        self.running = Some(Tween::new(request));
    }
}

#[cfg(test)]
#[path = "tests/tween_tests.rs"]
mod tests;
