//! Test doubles for the tween engine and the lifecycle callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use swipeview_animation::{TweenEngine, TweenRequest};

use crate::config::SwipeCallbacks;
use crate::direction::SwipeDirection;

/// Tween engine that only records what it was asked to do. Tests deliver
/// values and completion to the controller by hand.
#[derive(Debug, Default)]
pub struct RecordingTweenEngine {
    requests: Vec<TweenRequest>,
}

impl RecordingTweenEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> &[TweenRequest] {
        &self.requests
    }

    pub fn last_request(&self) -> Option<&TweenRequest> {
        self.requests.last()
    }
}

impl TweenEngine for RecordingTweenEngine {
    fn animate(&mut self, request: TweenRequest) {
        self.requests.push(request);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    SwipeStart(SwipeDirection),
    WillBeSwipedOut(SwipeDirection),
    SwipedOut(SwipeDirection),
    WillBounceBack(SwipeDirection),
    BouncedBack(SwipeDirection),
}

/// Records every lifecycle callback in the order it fired.
#[derive(Clone, Debug, Default)]
pub struct CallbackLog {
    events: Rc<RefCell<Vec<LifecycleEvent>>>,
}

impl CallbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callbacks that append to this log.
    pub fn callbacks(&self) -> SwipeCallbacks {
        let recorder = |make: fn(SwipeDirection) -> LifecycleEvent| {
            let events = Rc::clone(&self.events);
            move |direction| events.borrow_mut().push(make(direction))
        };
        SwipeCallbacks::new()
            .on_swipe_start(recorder(LifecycleEvent::SwipeStart))
            .on_will_be_swiped_out(recorder(LifecycleEvent::WillBeSwipedOut))
            .on_swiped_out(recorder(LifecycleEvent::SwipedOut))
            .on_will_bounce_back(recorder(LifecycleEvent::WillBounceBack))
            .on_bounced_back(recorder(LifecycleEvent::BouncedBack))
    }

    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
