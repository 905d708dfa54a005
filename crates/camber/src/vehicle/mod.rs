//! Typed accessors over live vehicle physics state.
//!
//! Every accessor first checks that the backing offset resolved and that the
//! entity still exists. When either check fails, getters return the
//! documented default from [`defaults`] and setters drop the write; nothing
//! here panics or dereferences a failed lookup. Writes that do land mutate
//! live simulation state immediately and are not transactional.

mod entity;
pub mod layout;
mod wheels;

pub use entity::VehicleEntity;
pub use wheels::WheelDimensions;

use crate::memory::EntityBase;
use crate::offset::{FieldOffset, PhysicsField, PhysicsOffsets};

/// Getter results for unsupported fields and destroyed entities.
pub mod defaults {
    pub const THROTTLE: f32 = -1.0;
    pub const BRAKE: f32 = 0.0;
    pub const HANDBRAKE: f32 = 0.0;
    pub const STEERING_ANGLE: f32 = -999.0;
    pub const FUEL_LEVEL: f32 = 0.0;
    pub const STEERING_LOCK: f32 = 0.0;
    pub const WHEEL_SIZE: f32 = 1.0;
    pub const TRANSFORMATION: f32 = -1.0;
    pub const FLY_MODE: f32 = -1.0;
}

/// Accessor façade bound to a resolved offset table.
#[derive(Debug, Clone, Copy)]
pub struct VehiclePhysics<'a> {
    offsets: &'a PhysicsOffsets,
}

impl<'a> VehiclePhysics<'a> {
    pub fn new(offsets: &'a PhysicsOffsets) -> Self {
        Self { offsets }
    }
}

impl VehiclePhysics<'static> {
    /// Bound to the process-wide table, resolving it on first use.
    pub fn resolved() -> Self {
        Self {
            offsets: crate::offset::global(),
        }
    }
}

impl VehiclePhysics<'_> {
    /// Entity base plus offset, iff the field resolved and the entity is
    /// alive. Gate for every accessor.
    pub(crate) fn target<V: VehicleEntity>(
        &self,
        vehicle: &V,
        field: PhysicsField,
    ) -> Option<(EntityBase, FieldOffset)> {
        let offset = self.offsets.get(field)?;
        if !vehicle.exists() {
            return None;
        }
        let base = vehicle.memory_address()?;
        Some((base, offset))
    }

    fn read_field<V: VehicleEntity>(&self, vehicle: &V, field: PhysicsField, default: f32) -> f32 {
        match self.target(vehicle, field) {
            Some((base, offset)) => base.read_f32(offset.get()),
            None => default,
        }
    }

    fn write_field<V: VehicleEntity>(&self, vehicle: &V, field: PhysicsField, value: f32) {
        if let Some((base, offset)) = self.target(vehicle, field) {
            base.write_f32(offset.get(), value);
        }
    }

    pub fn throttle<V: VehicleEntity>(&self, vehicle: &V) -> f32 {
        self.read_field(vehicle, PhysicsField::Throttle, defaults::THROTTLE)
    }

    pub fn set_throttle<V: VehicleEntity>(&self, vehicle: &V, throttle: f32) {
        self.write_field(vehicle, PhysicsField::Throttle, throttle);
    }

    pub fn brake<V: VehicleEntity>(&self, vehicle: &V) -> f32 {
        self.read_field(vehicle, PhysicsField::Brake, defaults::BRAKE)
    }

    pub fn set_brake<V: VehicleEntity>(&self, vehicle: &V, brake: f32) {
        self.write_field(vehicle, PhysicsField::Brake, brake);
    }

    pub fn handbrake<V: VehicleEntity>(&self, vehicle: &V) -> f32 {
        self.read_field(vehicle, PhysicsField::Handbrake, defaults::HANDBRAKE)
    }

    pub fn set_handbrake<V: VehicleEntity>(&self, vehicle: &V, handbrake: f32) {
        self.write_field(vehicle, PhysicsField::Handbrake, handbrake);
    }

    /// Current steering input angle, radians.
    pub fn steering_angle<V: VehicleEntity>(&self, vehicle: &V) -> f32 {
        self.read_field(vehicle, PhysicsField::SteeringAngle, defaults::STEERING_ANGLE)
    }

    pub fn set_steering_angle<V: VehicleEntity>(&self, vehicle: &V, angle: f32) {
        self.write_field(vehicle, PhysicsField::SteeringAngle, angle);
    }

    pub fn fuel_level<V: VehicleEntity>(&self, vehicle: &V) -> f32 {
        self.read_field(vehicle, PhysicsField::FuelLevel, defaults::FUEL_LEVEL)
    }

    pub fn set_fuel_level<V: VehicleEntity>(&self, vehicle: &V, level: f32) {
        self.write_field(vehicle, PhysicsField::FuelLevel, level);
    }

    /// Hover conversion progress of transforming vehicles, 0 to 1.
    pub fn transformation<V: VehicleEntity>(&self, vehicle: &V) -> f32 {
        self.read_field(vehicle, PhysicsField::Transformation, defaults::TRANSFORMATION)
    }

    pub fn set_transformation<V: VehicleEntity>(&self, vehicle: &V, state: f32) {
        self.write_field(vehicle, PhysicsField::Transformation, state);
    }

    /// Flight-mode float adjacent to the transformation state.
    pub fn fly_mode<V: VehicleEntity>(&self, vehicle: &V) -> f32 {
        self.read_field(vehicle, PhysicsField::FlyMode, defaults::FLY_MODE)
    }

    pub fn set_fly_mode<V: VehicleEntity>(&self, vehicle: &V, mode: f32) {
        self.write_field(vehicle, PhysicsField::FlyMode, mode);
    }

    fn handling_block<V: VehicleEntity>(&self, vehicle: &V) -> Option<EntityBase> {
        let (base, offset) = self.target(vehicle, PhysicsField::HandlingData)?;
        base.read_ptr(offset.get())
    }

    /// Maximum steering lock from the handling block, radians.
    pub fn steering_lock<V: VehicleEntity>(&self, vehicle: &V) -> f32 {
        match self.handling_block(vehicle) {
            Some(handling) => handling.read_f32(layout::handling::STEERING_LOCK),
            None => defaults::STEERING_LOCK,
        }
    }

    pub fn set_suspension_upper_limit<V: VehicleEntity>(&self, vehicle: &V, limit: f32) {
        if let Some(handling) = self.handling_block(vehicle) {
            handling.write_f32(layout::handling::SUSPENSION_UPPER_LIMIT, limit);
        }
    }

    pub fn set_suspension_lower_limit<V: VehicleEntity>(&self, vehicle: &V, limit: f32) {
        if let Some(handling) = self.handling_block(vehicle) {
            handling.write_f32(layout::handling::SUSPENSION_LOWER_LIMIT, limit);
        }
    }

    fn wheel_geometry<V: VehicleEntity>(&self, vehicle: &V) -> Option<EntityBase> {
        if !vehicle.exists() {
            return None;
        }
        let base = vehicle.memory_address()?;
        let chassis = base.read_ptr(layout::wheel_size::CHASSIS_PTR)?;
        chassis.read_ptr(layout::wheel_size::GEOMETRY_PTR)
    }

    /// Render scale of the wheels, through the fixed chassis pointer chain.
    pub fn wheel_size<V: VehicleEntity>(&self, vehicle: &V) -> f32 {
        match self.wheel_geometry(vehicle) {
            Some(geometry) => geometry.read_f32(layout::wheel_size::SCALE),
            None => defaults::WHEEL_SIZE,
        }
    }

    pub fn set_wheel_size<V: VehicleEntity>(&self, vehicle: &V, size: f32) {
        if let Some(geometry) = self.wheel_geometry(vehicle) {
            geometry.write_f32(layout::wheel_size::SCALE, size);
        }
    }
}
