//! Per-wheel accessors.
//!
//! Wheel order is fixed by the game: 0 front-left, 1 front-right,
//! 2 rear-left, 3 rear-right on four-wheel vehicles. The live count is read
//! from the entity on every call, never assumed, and indexes are validated
//! against it before any wheel block is dereferenced. Wheel pointers are
//! re-derived per call for the same reason entity addresses are.

use crate::memory::EntityBase;
use crate::offset::PhysicsField;

use super::{VehicleEntity, VehiclePhysics, layout};

/// Read-only wheel geometry at fixed offsets inside the wheel block.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelDimensions {
    pub tyre_radius: f32,
    pub rim_radius: f32,
    pub tyre_width: f32,
}

impl VehiclePhysics<'_> {
    /// Live wheel count; 0 when unsupported or the entity is gone.
    pub fn wheel_count<V: VehicleEntity>(&self, vehicle: &V) -> i8 {
        match self.target(vehicle, PhysicsField::WheelCount) {
            Some((base, offset)) => base.read_i8(offset.get()),
            None => 0,
        }
    }

    fn wheel_array<V: VehicleEntity>(&self, vehicle: &V) -> Option<EntityBase> {
        let (base, offset) = self.target(vehicle, PhysicsField::WheelArray)?;
        base.read_ptr(offset.get())
    }

    /// Wheel `index`'s physics block, guarded by the live count.
    fn wheel_block<V: VehicleEntity>(&self, vehicle: &V, index: usize) -> Option<EntityBase> {
        let count = self.wheel_count(vehicle);
        if count <= 0 || index >= count as usize {
            return None;
        }
        let array = self.wheel_array(vehicle)?;
        array.read_ptr(index as i32 * layout::wheel::PTR_STRIDE)
    }

    /// One value per wheel; unsupported fields leave the zeros in place.
    fn read_per_wheel<V: VehicleEntity>(&self, vehicle: &V, field: PhysicsField) -> Vec<f32> {
        let count = self.wheel_count(vehicle).max(0) as usize;
        let mut values = vec![0.0; count];

        let Some(offset) = self.offsets.get(field) else {
            return values;
        };
        let Some(array) = self.wheel_array(vehicle) else {
            return values;
        };

        for (index, value) in values.iter_mut().enumerate() {
            if let Some(wheel) = array.read_ptr(index as i32 * layout::wheel::PTR_STRIDE) {
                *value = wheel.read_f32(offset.get());
            }
        }

        values
    }

    fn write_wheel<V: VehicleEntity>(
        &self,
        vehicle: &V,
        index: usize,
        field: PhysicsField,
        bias: i32,
        value: f32,
    ) {
        let Some(offset) = self.offsets.get(field) else {
            return;
        };
        if let Some(wheel) = self.wheel_block(vehicle, index) {
            wheel.write_f32(offset.get() + bias, value);
        }
    }

    /// Angular velocity per wheel. The engine stores the negated value;
    /// both directions apply the sign flip so a set/get pair round-trips.
    pub fn wheel_rotation_speeds<V: VehicleEntity>(&self, vehicle: &V) -> Vec<f32> {
        self.read_per_wheel(vehicle, PhysicsField::WheelAngularVelocity)
            .into_iter()
            .map(|speed| -speed)
            .collect()
    }

    pub fn set_wheel_rotation_speeds<V: VehicleEntity>(&self, vehicle: &V, speeds: &[f32]) {
        for (index, speed) in speeds.iter().enumerate() {
            self.write_wheel(vehicle, index, PhysicsField::WheelAngularVelocity, 0, -speed);
        }
    }

    /// Rotation angle per wheel, radians.
    pub fn wheel_rotations<V: VehicleEntity>(&self, vehicle: &V) -> Vec<f32> {
        self.read_per_wheel(vehicle, PhysicsField::WheelAngle)
    }

    pub fn set_wheel_rotation<V: VehicleEntity>(&self, vehicle: &V, index: usize, angle: f32) {
        self.write_wheel(vehicle, index, PhysicsField::WheelAngle, 0, angle);
    }

    /// Suspension compression per wheel.
    pub fn wheel_compressions<V: VehicleEntity>(&self, vehicle: &V) -> Vec<f32> {
        self.read_per_wheel(vehicle, PhysicsField::WheelSuspensionCompression)
    }

    pub fn set_wheel_compression<V: VehicleEntity>(&self, vehicle: &V, index: usize, value: f32) {
        self.write_wheel(
            vehicle,
            index,
            PhysicsField::WheelSuspensionCompression,
            layout::wheel::COMPRESSION_WRITE_BIAS,
            value,
        );
    }

    /// Steering angle per wheel, radians. Non-steering wheels read 0.
    pub fn wheel_steering_angles<V: VehicleEntity>(&self, vehicle: &V) -> Vec<f32> {
        self.read_per_wheel(vehicle, PhysicsField::WheelSteeringAngle)
    }

    /// The per-wheel steering angle with the largest magnitude, signed.
    pub fn largest_steering_angle<V: VehicleEntity>(&self, vehicle: &V) -> f32 {
        self.wheel_steering_angles(vehicle)
            .into_iter()
            .fold(0.0f32, |largest, angle| {
                if angle.abs() > largest.abs() { angle } else { largest }
            })
    }

    pub fn wheel_dimensions<V: VehicleEntity>(&self, vehicle: &V) -> Vec<WheelDimensions> {
        let count = self.wheel_count(vehicle).max(0) as usize;
        let mut dimensions = vec![WheelDimensions::default(); count];

        let Some(array) = self.wheel_array(vehicle) else {
            return dimensions;
        };

        for (index, dims) in dimensions.iter_mut().enumerate() {
            if let Some(wheel) = array.read_ptr(index as i32 * layout::wheel::PTR_STRIDE) {
                *dims = WheelDimensions {
                    tyre_radius: wheel.read_f32(layout::wheel::TYRE_RADIUS),
                    rim_radius: wheel.read_f32(layout::wheel::RIM_RADIUS),
                    tyre_width: wheel.read_f32(layout::wheel::TYRE_WIDTH),
                };
            }
        }

        dimensions
    }

    /// Linear speed per tyre: rotation speed scaled by tyre radius.
    pub fn tyre_speeds<V: VehicleEntity>(&self, vehicle: &V) -> Vec<f32> {
        let speeds = self.wheel_rotation_speeds(vehicle);
        let dimensions = self.wheel_dimensions(vehicle);

        speeds
            .into_iter()
            .zip(dimensions)
            .map(|(speed, dims)| speed * dims.tyre_radius)
            .collect()
    }
}
