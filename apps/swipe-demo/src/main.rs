use swipeview_animation::FrameTweenEngine;
use swipeview_core::{SwipeCallbacks, SwipeConfig, SwipeOptions, SwipeSurface};

/// ~60 FPS
const FRAME_NANOS: u64 = 16_666_667;

#[derive(Clone, Copy, Debug)]
enum Step {
    Move { dx: f32, dy: f32 },
    Release { dx: f32, vx: f32 },
    Terminate { dx: f32 },
}

struct Scenario {
    name: &'static str,
    swipe_direction: &'static str,
    width: Option<f32>,
    steps: Vec<Step>,
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "far slow drag",
            swipe_direction: "both",
            width: Some(300.0),
            steps: vec![
                Step::Move { dx: -8.0, dy: 0.0 },
                Step::Move { dx: -200.0, dy: 1.0 },
                Step::Release { dx: -200.0, vx: -0.2 },
            ],
        },
        Scenario {
            name: "short slow drag",
            swipe_direction: "both",
            width: Some(300.0),
            steps: vec![
                Step::Move { dx: -8.0, dy: 0.0 },
                Step::Move { dx: -100.0, dy: 0.0 },
                Step::Release { dx: -100.0, vx: -0.1 },
            ],
        },
        Scenario {
            name: "fast drag toward a disallowed side",
            swipe_direction: "right",
            width: Some(300.0),
            steps: vec![
                Step::Move { dx: 8.0, dy: 0.0 },
                Step::Move { dx: -250.0, dy: 0.0 },
                Step::Release { dx: -250.0, vx: -2.0 },
            ],
        },
        Scenario {
            name: "flick before layout",
            swipe_direction: "both",
            width: None,
            steps: vec![
                Step::Move { dx: -10.0, dy: 0.0 },
                Step::Release { dx: -10.0, vx: -1.5 },
            ],
        },
        Scenario {
            name: "release at origin",
            swipe_direction: "both",
            width: Some(300.0),
            steps: vec![
                Step::Move { dx: 12.0, dy: 0.0 },
                Step::Release { dx: 0.0, vx: 0.0 },
            ],
        },
        Scenario {
            name: "gesture stolen mid-drag",
            swipe_direction: "both",
            width: Some(300.0),
            steps: vec![
                Step::Move { dx: 40.0, dy: 0.0 },
                Step::Move { dx: 260.0, dy: 0.0 },
                Step::Terminate { dx: 260.0 },
            ],
        },
    ]
}

fn logging_callbacks(name: &'static str) -> SwipeCallbacks {
    SwipeCallbacks::new()
        .on_swipe_start(move |dir| log::info!("[{name}] onSwipeStart({dir})"))
        .on_will_be_swiped_out(move |dir| log::info!("[{name}] onWillBeSwipedOut({dir})"))
        .on_swiped_out(move |dir| log::info!("[{name}] onSwipedOut({dir})"))
        .on_will_bounce_back(move |dir| log::info!("[{name}] onWillBounceBack({dir})"))
        .on_bounced_back(move |dir| log::info!("[{name}] onBouncedBack({dir})"))
}

fn run(scenario: &Scenario) -> anyhow::Result<()> {
    let options = SwipeOptions {
        swipe_direction: scenario.swipe_direction.to_string(),
        ..SwipeOptions::default()
    };
    let config = SwipeConfig::try_from(options)?.with_callbacks(logging_callbacks(scenario.name));
    let mut surface = SwipeSurface::new(config, FrameTweenEngine::new())?;

    if let Some(width) = scenario.width {
        surface.on_width_measured(width);
    }
    for step in &scenario.steps {
        match *step {
            Step::Move { dx, dy } => surface.on_move_sample(dx, dy),
            Step::Release { dx, vx } => surface.on_release(dx, vx),
            Step::Terminate { dx } => surface.on_terminate(dx),
        }
    }

    let mut frame_time = 0u64;
    let mut frames = 0u32;
    while surface.on_frame(frame_time) {
        frame_time += FRAME_NANOS;
        frames += 1;
    }

    log::info!(
        "[{}] settled after {} frames at offset {:.1}",
        scenario.name,
        frames,
        surface.offset()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    for scenario in scenarios() {
        run(&scenario)?;
    }
    Ok(())
}
