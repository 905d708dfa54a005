use std::num::NonZeroI32;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Every vehicle physics field the resolver knows how to locate.
///
/// Wheel-prefixed fields are offsets into a wheel's physics block; the rest
/// are offsets into the vehicle record itself. `HandlingData` and
/// `WheelArray` locate pointers that get chased one level before use.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum PhysicsField {
    Throttle,
    Brake,
    SteeringAngle,
    Handbrake,
    HandlingData,
    WheelArray,
    WheelCount,
    WheelSteeringAngle,
    WheelAngularVelocity,
    WheelSuspensionCompression,
    WheelAngle,
    FuelLevel,
    Transformation,
    FlyMode,
}

/// Resolved byte offset of a field inside its record.
///
/// Always non-zero: the engine never places a physics field at the record
/// base, and a zero displacement historically meant "pattern not found", so
/// zero resolves to "unsupported" rather than an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldOffset(NonZeroI32);

impl FieldOffset {
    pub fn new(value: i32) -> Option<Self> {
        NonZeroI32::new(value).map(Self)
    }

    pub fn get(self) -> i32 {
        self.0.get()
    }
}
