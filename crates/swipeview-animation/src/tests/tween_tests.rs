use super::*;

const FRAME_NANOS: u64 = 16_666_667;

#[test]
fn tween_interpolates_over_time() {
    let mut tween = Tween::new(TweenRequest::new(-120.0, 0.0, 200.0, Easing::Ease));

    let first = tween.sample(1_000);
    assert_eq!(first.value, -120.0);
    assert!(!first.finished);

    let mut frame_time = 1_000u64;
    let mut saw_midpoint = false;
    let mut last = first;
    for _ in 0..32 {
        frame_time += FRAME_NANOS;
        last = tween.sample(frame_time);
        if last.value > -120.0 && last.value < 0.0 {
            saw_midpoint = true;
        }
        if last.finished {
            break;
        }
    }

    assert!(saw_midpoint, "tween should report intermediate values");
    assert!(last.finished);
    assert_eq!(last.value, 0.0);
}

#[test]
fn linear_tween_is_halfway_at_half_duration() {
    let mut tween = Tween::new(TweenRequest::new(0.0, 1000.0, 100.0, Easing::Linear));
    tween.sample(0);
    let sample = tween.sample(50_000_000);
    assert!((sample.value - 500.0).abs() < 0.5, "got {}", sample.value);
}

#[test]
fn zero_duration_finishes_on_first_frame() {
    let mut tween = Tween::new(TweenRequest::new(42.0, 0.0, 0.0, Easing::Ease));
    let sample = tween.sample(5);
    assert!(sample.finished);
    assert_eq!(sample.value, 0.0);
}

#[test]
fn frame_engine_is_idle_until_asked() {
    let mut engine = FrameTweenEngine::new();
    assert!(!engine.is_running());
    assert_eq!(engine.advance(0), None);
}

#[test]
fn frame_engine_clears_finished_tween() {
    let mut engine = FrameTweenEngine::new();
    engine.animate(TweenRequest::new(0.0, 2000.0, 32.0, Easing::Linear));
    assert!(engine.is_running());

    let mut frame_time = 0u64;
    let mut finished = false;
    for _ in 0..10 {
        let sample = engine.advance(frame_time).expect("tween running");
        frame_time += FRAME_NANOS;
        if sample.finished {
            assert_eq!(sample.value, 2000.0);
            finished = true;
            break;
        }
    }

    assert!(finished);
    assert!(!engine.is_running());
    assert_eq!(engine.advance(frame_time), None);
}

#[test]
fn frame_engine_replaces_running_tween() {
    let mut engine = FrameTweenEngine::new();
    engine.animate(TweenRequest::new(0.0, 100.0, 1000.0, Easing::Linear));
    engine.advance(0);
    engine.animate(TweenRequest::new(50.0, 0.0, 1000.0, Easing::Linear));

    let sample = engine.advance(10_000_000).expect("tween running");
    assert_eq!(sample.value, 50.0);
}
