//! Horizontal swipe-out gesture recognition for a rectangular surface.
//!
//! A drag is claimed, tracked and, at release, either flies the surface
//! off-screen or bounces it back to rest. Animation is delegated to a
//! [`TweenEngine`]; layout reports and pointer samples are pushed in by the
//! host on its UI thread.

pub mod classifier;
pub mod config;
pub mod controller;
pub mod direction;
pub mod gesture_constants;
pub mod layout;
pub mod pointer;
pub mod surface;
pub mod velocity_tracker;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use classifier::{GestureClassifier, SwipeOutcome};
pub use config::{ConfigError, LifecycleCallback, SwipeCallbacks, SwipeConfig, SwipeOptions};
pub use controller::{MotionController, SwipePhase};
pub use direction::{DirectionSet, SwipeDirection};
pub use layout::SurfaceWidth;
pub use pointer::{GestureSample, Point, PointerEvent, PointerEventKind, PointerTracker};
pub use surface::SwipeSurface;
pub use swipeview_animation::{
    AnimationSpec, Easing, FrameTweenEngine, TweenEngine, TweenRequest, TweenSample,
};
pub use velocity_tracker::VelocityTracker1D;

pub mod prelude {
    pub use crate::classifier::SwipeOutcome;
    pub use crate::config::{SwipeCallbacks, SwipeConfig, SwipeOptions};
    pub use crate::controller::SwipePhase;
    pub use crate::direction::{DirectionSet, SwipeDirection};
    pub use crate::pointer::{Point, PointerEvent, PointerEventKind};
    pub use crate::surface::SwipeSurface;
    pub use swipeview_animation::{Easing, FrameTweenEngine, TweenEngine, TweenRequest};
}
