//! Speed-dependent steering correction.
//!
//! Pure per-frame math: driving tasks read live state through the accessors,
//! feed it in here, and apply the returned values back through the setters.
//! No state is kept between calls.

use glam::{Quat, Vec3};

/// Upper bound of the speed-scaled damping factor.
const REDUCTION_CAP: f32 = 0.6;
/// Speed (engine units) at which the damping factor saturates.
const REDUCTION_SPEED_SPAN: f32 = 30.0;
/// Relative Y speed above which drift correction takes over.
const DRIFT_SPEED_THRESHOLD: f32 = 3.0;

/// Instantaneous pose snapshot assembled from host state.
#[derive(Debug, Clone, Copy)]
pub struct VehicleMotion {
    /// World position.
    pub position: Vec3,
    /// World velocity.
    pub velocity: Vec3,
    /// Body-frame velocity; Y is the forward axis.
    pub relative_velocity: Vec3,
    /// Body-to-world rotation.
    pub rotation: Quat,
}

fn remap(value: f32, from_lo: f32, from_hi: f32, to_lo: f32, to_hi: f32) -> f32 {
    (value - from_lo) / (from_hi - from_lo) * (to_hi - to_lo) + to_lo
}

/// Damping factor in `[0, 0.6]`, scaling steering correction strength down
/// at low speed and saturating at high speed.
pub fn steering_reduction(velocity: Vec3) -> f32 {
    remap(velocity.length(), 0.0, REDUCTION_SPEED_SPAN, 0.0, REDUCTION_CAP).min(REDUCTION_CAP)
}

/// Corrected steering value toward `desired_heading`, clamped to
/// `[-steering_max, steering_max]`.
///
/// Below the drift threshold the correction is simply the scaled target.
/// Above it, the true travel direction (from the velocity vector) is
/// compared against the direction the front wheels point (relative speed
/// rotated by the current steering angle, taken into world space); the
/// shortest signed angular difference, doubled, becomes the correction.
pub fn heading_correction(
    motion: &VehicleMotion,
    steering_angle: f32,
    steering_max: f32,
    desired_heading: f32,
    reduction: f32,
) -> f32 {
    let mut correction = desired_heading * reduction;

    let forward_speed = motion.relative_velocity.y;
    if forward_speed.abs() > DRIFT_SPEED_THRESHOLD {
        let steer_local = Vec3::new(
            forward_speed * -steering_angle.sin(),
            forward_speed * steering_angle.cos(),
            0.0,
        );

        let travel = motion.velocity.normalize_or_zero();
        let steer = (motion.rotation * steer_local).normalize_or_zero();

        let travel_dir = travel.y.atan2(travel.x) + desired_heading * reduction;
        let steer_dir = steer.y.atan2(steer.x);

        let delta = travel_dir - steer_dir;
        correction = 2.0 * delta.sin().atan2(delta.cos());
    }

    correction.min(steering_max).max(-steering_max)
}
