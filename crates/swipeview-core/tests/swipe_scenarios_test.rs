//! End-to-end gesture cycles through the public surface API, from move
//! samples to the final lifecycle callback.

use swipeview_core::testing::{CallbackLog, LifecycleEvent, RecordingTweenEngine};
use swipeview_core::{
    FrameTweenEngine, SwipeConfig, SwipeDirection, SwipeOptions, SwipePhase, SwipeSurface,
};

use LifecycleEvent::*;
use SwipeDirection::{Left, None as Still, Right};

fn surface_with(
    swipe_direction: &str,
    min_pan_to_complete: f32,
) -> (SwipeSurface<RecordingTweenEngine>, CallbackLog) {
    let log = CallbackLog::new();
    let options = SwipeOptions {
        swipe_direction: swipe_direction.to_string(),
        min_pan_to_complete,
        ..SwipeOptions::default()
    };
    let config = SwipeConfig::try_from(options)
        .expect("valid options")
        .with_callbacks(log.callbacks());
    let surface = SwipeSurface::new(config, RecordingTweenEngine::new()).expect("valid config");
    (surface, log)
}

/// Claims with a small move, then drags to `dx` and releases.
fn drag_and_release<E: swipeview_core::TweenEngine>(
    surface: &mut SwipeSurface<E>,
    dx: f32,
    vx: f32,
) {
    surface.on_move_sample(dx.signum() * 6.0, 0.0);
    surface.on_move_sample(dx, 0.0);
    surface.on_release(dx, vx);
}

#[test]
fn scenario_a_far_slow_drag_commits() {
    let (mut surface, log) = surface_with("both", 0.5);
    surface.on_width_measured(300.0);
    drag_and_release(&mut surface, -200.0, -0.2);

    assert_eq!(log.events(), vec![SwipeStart(Left), WillBeSwipedOut(Left)]);
    surface.on_tween_complete();
    assert_eq!(
        log.events(),
        vec![SwipeStart(Left), WillBeSwipedOut(Left), SwipedOut(Left)]
    );
}

#[test]
fn scenario_b_short_slow_drag_bounces_back() {
    let (mut surface, log) = surface_with("both", 0.5);
    surface.on_width_measured(300.0);
    drag_and_release(&mut surface, -100.0, -0.1);
    surface.on_tween_complete();

    assert_eq!(
        log.events(),
        vec![SwipeStart(Left), WillBounceBack(Left), BouncedBack(Left)]
    );
    assert_eq!(surface.offset(), 0.0);
}

#[test]
fn scenario_c_disallowed_direction_never_commits() {
    let (mut surface, log) = surface_with("right", 0.5);
    surface.on_width_measured(300.0);

    // Leftward drags are never claimed on a right-only surface, so push the
    // gesture through as a claimed right drag that ends up on the left.
    surface.on_move_sample(8.0, 0.0);
    surface.on_move_sample(-250.0, 0.0);
    surface.on_release(-250.0, -2.0);
    surface.on_tween_complete();

    assert_eq!(
        log.events(),
        vec![SwipeStart(Right), WillBounceBack(Left), BouncedBack(Left)]
    );
}

#[test]
fn scenario_c_leftward_drag_is_not_claimed_on_right_only_surface() {
    let (mut surface, log) = surface_with("right", 0.5);
    surface.on_move_sample(-250.0, 0.0);
    surface.on_release(-250.0, -2.0);

    assert!(log.events().is_empty());
    assert!(surface.engine().requests().is_empty());
}

#[test]
fn scenario_d_velocity_commits_before_layout() {
    let (mut surface, log) = surface_with("both", 0.5);
    drag_and_release(&mut surface, -10.0, -1.5);
    surface.on_tween_complete();

    assert_eq!(
        log.events(),
        vec![SwipeStart(Left), WillBeSwipedOut(Left), SwipedOut(Left)]
    );
}

#[test]
fn scenario_e_release_at_origin_bounces_without_direction() {
    let (mut surface, log) = surface_with("both", 0.5);
    surface.on_width_measured(300.0);
    surface.on_move_sample(-20.0, 0.0);
    surface.on_release(0.0, 0.0);

    assert_eq!(log.events(), vec![SwipeStart(Left)]);
    surface.on_tween_complete();
    assert_eq!(log.events(), vec![SwipeStart(Left), BouncedBack(Still)]);
}

#[test]
fn unknown_width_commits_iff_fast() {
    for dx in [-3000.0f32, -40.0, 40.0, 3000.0] {
        for vx in [0.0f32, 0.5, 1.0, 1.01, 4.0] {
            let (mut surface, _log) = surface_with("both", 0.5);
            drag_and_release(&mut surface, dx, vx);
            let committed = matches!(surface.phase(), SwipePhase::FlyingOut { .. });
            assert_eq!(committed, vx > 1.0, "dx={dx} vx={vx}");
        }
    }
}

#[test]
fn known_width_commits_iff_far_or_fast() {
    let width = 320.0;
    let fraction = 0.25;
    for dx in [-200.0f32, -80.0, -79.0, 10.0, 81.0, 300.0] {
        for vx in [0.2f32, 1.5] {
            let (mut surface, _log) = surface_with("both", fraction);
            surface.on_width_measured(width);
            drag_and_release(&mut surface, dx, vx);
            let committed = matches!(surface.phase(), SwipePhase::FlyingOut { .. });
            let expected = dx.abs() > fraction * width || vx > 1.0;
            assert_eq!(committed, expected, "dx={dx} vx={vx}");
        }
    }
}

#[test]
fn cancel_always_returns_to_exactly_zero() {
    for dx in [-149.0f32, -17.25, 6.0, 149.9] {
        let (mut surface, _log) = surface_with("both", 0.5);
        surface.on_width_measured(300.0);
        drag_and_release(&mut surface, dx, 0.0);
        surface.on_tween_value(dx * 0.3333);
        surface.on_tween_complete();
        assert_eq!(surface.offset(), 0.0);
        assert_eq!(surface.phase(), SwipePhase::Idle);
    }
}

#[test]
fn termination_never_commits() {
    for dx in [-1000.0f32, -6.0, 6.0, 1000.0] {
        let (mut surface, log) = surface_with("both", 0.5);
        surface.on_width_measured(300.0);
        surface.on_move_sample(dx, 0.0);
        surface.on_terminate(dx);
        assert!(matches!(surface.phase(), SwipePhase::BouncingBack { .. }));
        assert!(!log.events().iter().any(|e| matches!(e, WillBeSwipedOut(_))));
    }
}

#[test]
fn surface_cycles_across_repeated_gestures() {
    let log = CallbackLog::new();
    let config = SwipeConfig::default().with_callbacks(log.callbacks());
    let mut surface = SwipeSurface::new(config, FrameTweenEngine::new()).expect("valid config");
    surface.on_width_measured(300.0);

    let mut time = 0u64;
    let mut settle = |surface: &mut SwipeSurface<FrameTweenEngine>| {
        while surface.on_frame(time) {
            time += 16_666_667;
        }
    };

    drag_and_release(&mut surface, -60.0, -0.3);
    settle(&mut surface);
    drag_and_release(&mut surface, 240.0, 0.4);
    settle(&mut surface);

    assert_eq!(
        log.events(),
        vec![
            SwipeStart(Left),
            WillBounceBack(Left),
            BouncedBack(Left),
            SwipeStart(Right),
            WillBeSwipedOut(Right),
            SwipedOut(Right),
        ]
    );
    assert_eq!(surface.phase(), SwipePhase::Idle);
    assert_eq!(surface.offset(), 2000.0);
}
