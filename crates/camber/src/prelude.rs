//! Prelude module for convenient imports.
//!
//! ```ignore
//! use camber::prelude::*;
//! ```

pub use crate::error::{Error, Result};
pub use crate::memory::{EntityBase, ModuleImage};
pub use crate::offset::{
    FieldOffset, OffsetDump, PhysicsField, PhysicsOffsets, SignatureSet,
};
pub use crate::physics::{VehicleMotion, heading_correction, steering_reduction};
pub use crate::scan::Pattern;
pub use crate::vehicle::{VehicleEntity, VehiclePhysics, WheelDimensions};
