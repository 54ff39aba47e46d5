//! Per-surface configuration.
//!
//! `SwipeOptions` is the raw option surface a host passes in (strings and
//! seconds). `SwipeConfig` is the validated form the classifier and motion
//! controller read from. A configuration that could never produce a swipe is
//! rejected at construction instead of silently ignoring every gesture.

use std::fmt;
use std::rc::Rc;

use swipeview_animation::{AnimationSpec, Easing};

use crate::direction::{DirectionSet, SwipeDirection};
use crate::gesture_constants::{
    DEFAULT_BOUNCE_DURATION_SECS, DEFAULT_COMPLETION_FRACTION, DEFAULT_FLY_OUT_SPEED_FLOOR,
};

pub type LifecycleCallback = Rc<dyn Fn(SwipeDirection)>;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NoAllowedDirection,
    CompletionFractionOutOfRange(f32),
    InvalidBounceDuration(f32),
    InvalidSpeedFloor(f32),
    UnknownDirection(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoAllowedDirection => {
                write!(f, "swipe direction must allow left, right or both")
            }
            ConfigError::CompletionFractionOutOfRange(value) => {
                write!(f, "min pan to complete {value} is outside (0, 1]")
            }
            ConfigError::InvalidBounceDuration(value) => {
                write!(f, "bounce-back duration {value} must be finite and non-negative")
            }
            ConfigError::InvalidSpeedFloor(value) => {
                write!(f, "fly-out speed floor {value} must be finite and positive")
            }
            ConfigError::UnknownDirection(value) => {
                write!(f, "unknown direction {value:?}; expected left, right, both or none")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Lifecycle hooks fired around each gesture cycle. Every slot defaults to a
/// no-op.
#[derive(Clone)]
pub struct SwipeCallbacks {
    pub on_swipe_start: LifecycleCallback,
    pub on_will_be_swiped_out: LifecycleCallback,
    pub on_swiped_out: LifecycleCallback,
    pub on_will_bounce_back: LifecycleCallback,
    pub on_bounced_back: LifecycleCallback,
}

impl SwipeCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_swipe_start(mut self, callback: impl Fn(SwipeDirection) + 'static) -> Self {
        self.on_swipe_start = Rc::new(callback);
        self
    }

    pub fn on_will_be_swiped_out(mut self, callback: impl Fn(SwipeDirection) + 'static) -> Self {
        self.on_will_be_swiped_out = Rc::new(callback);
        self
    }

    pub fn on_swiped_out(mut self, callback: impl Fn(SwipeDirection) + 'static) -> Self {
        self.on_swiped_out = Rc::new(callback);
        self
    }

    pub fn on_will_bounce_back(mut self, callback: impl Fn(SwipeDirection) + 'static) -> Self {
        self.on_will_bounce_back = Rc::new(callback);
        self
    }

    pub fn on_bounced_back(mut self, callback: impl Fn(SwipeDirection) + 'static) -> Self {
        self.on_bounced_back = Rc::new(callback);
        self
    }
}

impl Default for SwipeCallbacks {
    fn default() -> Self {
        fn noop() -> LifecycleCallback {
            Rc::new(|_| {})
        }
        Self {
            on_swipe_start: noop(),
            on_will_be_swiped_out: noop(),
            on_swiped_out: noop(),
            on_will_bounce_back: noop(),
            on_bounced_back: noop(),
        }
    }
}

impl fmt::Debug for SwipeCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeCallbacks").finish_non_exhaustive()
    }
}

/// Raw options as a host would declare them on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeOptions {
    /// `left`, `right` or `both`.
    pub swipe_direction: String,
    /// When false no fade progress is reported for either side.
    pub change_opacity: bool,
    /// `left`, `right`, `both` or `none`.
    pub opacity_direction: String,
    /// Fraction of the surface width in (0, 1] that commits a swipe.
    pub min_pan_to_complete: f32,
    /// Bounce-back duration in seconds.
    pub bounce_back_anim_duration: f32,
}

impl Default for SwipeOptions {
    fn default() -> Self {
        Self {
            swipe_direction: "both".to_string(),
            change_opacity: true,
            opacity_direction: "both".to_string(),
            min_pan_to_complete: DEFAULT_COMPLETION_FRACTION,
            bounce_back_anim_duration: DEFAULT_BOUNCE_DURATION_SECS,
        }
    }
}

/// Validated configuration, immutable once a surface is built from it.
#[derive(Debug, Clone)]
pub struct SwipeConfig {
    pub allowed_directions: DirectionSet,
    pub opacity_directions: DirectionSet,
    pub completion_fraction: f32,
    pub bounce: AnimationSpec,
    /// Lower bound (px/ms) for the speed used to derive fly-out duration.
    pub fly_out_speed_floor: f32,
    pub callbacks: SwipeCallbacks,
}

impl SwipeConfig {
    pub fn with_allowed_directions(mut self, directions: DirectionSet) -> Self {
        self.allowed_directions = directions;
        self
    }

    pub fn with_opacity_directions(mut self, directions: DirectionSet) -> Self {
        self.opacity_directions = directions;
        self
    }

    pub fn with_completion_fraction(mut self, fraction: f32) -> Self {
        self.completion_fraction = fraction;
        self
    }

    pub fn with_bounce(mut self, duration_millis: f32, easing: Easing) -> Self {
        self.bounce = AnimationSpec::tween(duration_millis, easing);
        self
    }

    pub fn with_fly_out_speed_floor(mut self, speed: f32) -> Self {
        self.fly_out_speed_floor = speed;
        self
    }

    pub fn with_callbacks(mut self, callbacks: SwipeCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.allowed_directions.is_empty() {
            return Err(ConfigError::NoAllowedDirection);
        }
        let fraction = self.completion_fraction;
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(ConfigError::CompletionFractionOutOfRange(fraction));
        }
        let bounce = self.bounce.duration_millis;
        if !bounce.is_finite() || bounce < 0.0 {
            return Err(ConfigError::InvalidBounceDuration(bounce));
        }
        let floor = self.fly_out_speed_floor;
        if !floor.is_finite() || floor <= 0.0 {
            return Err(ConfigError::InvalidSpeedFloor(floor));
        }
        Ok(())
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            allowed_directions: DirectionSet::BOTH,
            opacity_directions: DirectionSet::BOTH,
            completion_fraction: DEFAULT_COMPLETION_FRACTION,
            bounce: AnimationSpec::from_seconds(DEFAULT_BOUNCE_DURATION_SECS, Easing::Ease),
            fly_out_speed_floor: DEFAULT_FLY_OUT_SPEED_FLOOR,
            callbacks: SwipeCallbacks::default(),
        }
    }
}

impl TryFrom<SwipeOptions> for SwipeConfig {
    type Error = ConfigError;

    fn try_from(options: SwipeOptions) -> Result<Self, Self::Error> {
        let allowed_directions: DirectionSet = options.swipe_direction.parse()?;
        if allowed_directions.is_empty() {
            return Err(ConfigError::NoAllowedDirection);
        }
        let opacity_directions = if options.change_opacity {
            options.opacity_direction.parse()?
        } else {
            DirectionSet::NONE
        };
        let duration = options.bounce_back_anim_duration;
        if !duration.is_finite() || duration < 0.0 {
            return Err(ConfigError::InvalidBounceDuration(duration));
        }

        let config = SwipeConfig {
            allowed_directions,
            opacity_directions,
            completion_fraction: options.min_pan_to_complete,
            bounce: AnimationSpec::from_seconds(duration, Easing::Ease),
            ..SwipeConfig::default()
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
