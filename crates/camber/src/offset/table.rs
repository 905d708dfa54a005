use strum::IntoEnumIterator;

use super::{FieldOffset, PhysicsField};

/// Per-field resolved offsets for one game build.
///
/// Computed once per process and read-only afterwards. An unresolved entry
/// means the backing pattern was not found in the running build; every
/// accessor for that field degrades to its documented default instead of
/// dereferencing anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhysicsOffsets {
    throttle: Option<FieldOffset>,
    brake: Option<FieldOffset>,
    steering_angle: Option<FieldOffset>,
    handbrake: Option<FieldOffset>,
    handling_data: Option<FieldOffset>,
    wheel_array: Option<FieldOffset>,
    wheel_count: Option<FieldOffset>,
    wheel_steering_angle: Option<FieldOffset>,
    wheel_angular_velocity: Option<FieldOffset>,
    wheel_suspension_compression: Option<FieldOffset>,
    wheel_angle: Option<FieldOffset>,
    fuel_level: Option<FieldOffset>,
    transformation: Option<FieldOffset>,
    fly_mode: Option<FieldOffset>,
}

impl PhysicsOffsets {
    pub fn get(&self, field: PhysicsField) -> Option<FieldOffset> {
        match field {
            PhysicsField::Throttle => self.throttle,
            PhysicsField::Brake => self.brake,
            PhysicsField::SteeringAngle => self.steering_angle,
            PhysicsField::Handbrake => self.handbrake,
            PhysicsField::HandlingData => self.handling_data,
            PhysicsField::WheelArray => self.wheel_array,
            PhysicsField::WheelCount => self.wheel_count,
            PhysicsField::WheelSteeringAngle => self.wheel_steering_angle,
            PhysicsField::WheelAngularVelocity => self.wheel_angular_velocity,
            PhysicsField::WheelSuspensionCompression => self.wheel_suspension_compression,
            PhysicsField::WheelAngle => self.wheel_angle,
            PhysicsField::FuelLevel => self.fuel_level,
            PhysicsField::Transformation => self.transformation,
            PhysicsField::FlyMode => self.fly_mode,
        }
    }

    pub fn set(&mut self, field: PhysicsField, offset: FieldOffset) {
        *self.slot_mut(field) = Some(offset);
    }

    /// Drop a field during resolution (derived-field consistency); the
    /// table is never mutated once published.
    pub(crate) fn clear(&mut self, field: PhysicsField) {
        *self.slot_mut(field) = None;
    }

    fn slot_mut(&mut self, field: PhysicsField) -> &mut Option<FieldOffset> {
        match field {
            PhysicsField::Throttle => &mut self.throttle,
            PhysicsField::Brake => &mut self.brake,
            PhysicsField::SteeringAngle => &mut self.steering_angle,
            PhysicsField::Handbrake => &mut self.handbrake,
            PhysicsField::HandlingData => &mut self.handling_data,
            PhysicsField::WheelArray => &mut self.wheel_array,
            PhysicsField::WheelCount => &mut self.wheel_count,
            PhysicsField::WheelSteeringAngle => &mut self.wheel_steering_angle,
            PhysicsField::WheelAngularVelocity => &mut self.wheel_angular_velocity,
            PhysicsField::WheelSuspensionCompression => &mut self.wheel_suspension_compression,
            PhysicsField::WheelAngle => &mut self.wheel_angle,
            PhysicsField::FuelLevel => &mut self.fuel_level,
            PhysicsField::Transformation => &mut self.transformation,
            PhysicsField::FlyMode => &mut self.fly_mode,
        }
    }

    pub fn resolved_count(&self) -> usize {
        PhysicsField::iter().filter(|f| self.get(*f).is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved_count() == 0
    }
}
