//! Release velocity estimation for raw pointer streams.
//!
//! Impulse strategy: velocity is derived from the kinetic energy the pointer
//! imparted over the recent samples, which is far less noisy than a two-point
//! difference at the moment of release.

/// Ring buffer size for samples.
const HISTORY_SIZE: usize = 20;

/// Only samples within this window before the newest one count.
const HORIZON_MS: i64 = 100;

/// Samples older than this relative to the newest one mean the pointer had
/// stopped. Positions are absolute, so the gap is measured from the newest
/// sample rather than between neighbours.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// 1D velocity tracker over absolute positions.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    newest: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            newest: 0,
        }
    }

    pub fn add_data_point(&mut self, time_ms: i64, position: f32) {
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.samples[self.newest] = Some(Sample { time_ms, position });
    }

    /// Velocity in units per second, or 0.0 with fewer than two usable samples.
    pub fn calculate_velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.newest] else {
            return 0.0;
        };

        // Collected newest first: positions and times relative to the newest.
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;

        let mut index = self.newest;
        while let Some(sample) = self.samples[index] {
            let age = newest.time_ms - sample.time_ms;
            if age > HORIZON_MS || age.abs() > ASSUME_STOPPED_MS {
                break;
            }

            positions[count] = sample.position;
            times[count] = -(age as f32);
            count += 1;
            if count >= HISTORY_SIZE {
                break;
            }

            index = (index + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }

        if count < 2 {
            return 0.0;
        }

        impulse_velocity(&positions[..count], &times[..count]) * 1000.0
    }

    /// Velocity in units per second clamped to `±max_velocity`.
    pub fn calculate_velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.calculate_velocity();
        if velocity == 0.0 || velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.newest = 0;
    }
}

/// `positions` and `times` are ordered newest first. Returns units per ms.
fn impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    let oldest = positions.len() - 1;
    let mut work = 0.0f32;

    // Walk from the oldest pair towards the newest.
    for i in (1..=oldest).rev() {
        let (earlier, later) = (times[i], times[i - 1]);
        if earlier == later {
            continue;
        }
        let segment_velocity = (positions[i - 1] - positions[i]) / (later - earlier);
        let previous_velocity = kinetic_energy_to_velocity(work);
        work += (segment_velocity - previous_velocity) * segment_velocity.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = 0.5 * m * v^2 with m = 1.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_returns_zero() {
        assert_eq!(VelocityTracker1D::new().calculate_velocity(), 0.0);
    }

    #[test]
    fn single_point_returns_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 100.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn constant_leftward_drag() {
        let mut tracker = VelocityTracker1D::new();
        // 20 px every 10 ms to the left = -2000 px/s
        for step in 0..5 {
            tracker.add_data_point(step * 10, 300.0 - step as f32 * 20.0);
        }
        let velocity = tracker.calculate_velocity();
        assert!(
            (velocity + 2000.0).abs() < 200.0,
            "Expected ~-2000, got {}",
            velocity
        );
    }

    #[test]
    fn capped_velocity() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(1, 10_000.0);
        assert_eq!(tracker.calculate_velocity_with_max(8_000.0), 8_000.0);

        tracker.reset();
        tracker.add_data_point(0, 10_000.0);
        tracker.add_data_point(1, 0.0);
        assert_eq!(tracker.calculate_velocity_with_max(8_000.0), -8_000.0);
    }

    #[test]
    fn pause_before_release_reads_as_stopped() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(10, 50.0);
        tracker.add_data_point(10 + ASSUME_STOPPED_MS + 1, 50.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn only_samples_near_the_newest_count() {
        let mut tracker = VelocityTracker1D::new();
        // 1 px/ms for the first 60 ms, then 3 px/ms over the last 30 ms.
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(30, 30.0);
        tracker.add_data_point(60, 60.0);
        tracker.add_data_point(90, 150.0);
        let velocity = tracker.calculate_velocity();
        assert!(
            (velocity - 3000.0).abs() < 1.0,
            "Expected 3000 from the last two samples, got {}",
            velocity
        );
    }

    #[test]
    fn reset_forgets_samples() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(10, 100.0);
        tracker.reset();
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }
}
