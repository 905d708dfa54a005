//! Pure physics computations consumed by driving tasks.

mod steering;

pub use steering::{VehicleMotion, heading_correction, steering_reduction};
