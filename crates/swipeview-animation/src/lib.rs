//! Animation primitives for SwipeView
//!
//! This crate provides easing curves, tween specifications and a frame-driven
//! tween engine used to fly a swiped surface out or bounce it back.

pub mod animation;
pub mod tween;

// Re-export animation system
pub use animation::*;
pub use tween::{FrameTweenEngine, Tween, TweenEngine, TweenRequest, TweenSample};

pub mod prelude {
    pub use crate::animation::{AnimationSpec, Easing, Lerp};
    pub use crate::tween::{FrameTweenEngine, Tween, TweenEngine, TweenRequest, TweenSample};
}
