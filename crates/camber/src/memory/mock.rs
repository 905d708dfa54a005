//! Test double: heap-built records mirroring the game's vehicle layout.
//!
//! The arenas are real allocations wired together with baked-in pointers, so
//! accessor tests exercise the actual raw-access path in `access`.

use crate::offset::{FieldOffset, PhysicsField, PhysicsOffsets};
use crate::vehicle::{VehicleEntity, layout};

use super::access::EntityBase;

// Record-relative offsets used by the mock table. Arbitrary but realistic:
// well inside the record, 4-aligned, non-overlapping.
pub const THROTTLE: i32 = 0x8C0;
pub const BRAKE: i32 = 0x8C4;
pub const STEERING_ANGLE: i32 = 0x8B8;
pub const HANDBRAKE: i32 = 0x8D0;
pub const FUEL_LEVEL: i32 = 0x768;
pub const HANDLING_DATA: i32 = 0x918;
pub const WHEEL_ARRAY: i32 = 0xB20;
pub const WHEEL_COUNT: i32 = 0xB28;
pub const TRANSFORMATION: i32 = 0x9F0;
pub const FLY_MODE: i32 = 0x9F4;

// Wheel-block-relative offsets.
pub const WHEEL_SUSPENSION_COMPRESSION: i32 = 0x160;
pub const WHEEL_ANGLE: i32 = 0x168;
pub const WHEEL_ANGULAR_VELOCITY: i32 = 0x16C;
pub const WHEEL_STEERING_ANGLE: i32 = 0x1BC;

const RECORD_SIZE: usize = 0x1000;
const WHEEL_BLOCK_SIZE: usize = 0x200;
const HANDLING_SIZE: usize = 0x100;
const CHASSIS_SIZE: usize = 0x400;
const GEOMETRY_SIZE: usize = 0x10;

/// A fully resolved table pointing at the mock record layout.
pub fn offsets() -> PhysicsOffsets {
    let mut table = PhysicsOffsets::default();
    table.set(PhysicsField::Throttle, off(THROTTLE));
    table.set(PhysicsField::Brake, off(BRAKE));
    table.set(PhysicsField::SteeringAngle, off(STEERING_ANGLE));
    table.set(PhysicsField::Handbrake, off(HANDBRAKE));
    table.set(PhysicsField::FuelLevel, off(FUEL_LEVEL));
    table.set(PhysicsField::HandlingData, off(HANDLING_DATA));
    table.set(PhysicsField::WheelArray, off(WHEEL_ARRAY));
    table.set(PhysicsField::WheelCount, off(WHEEL_COUNT));
    table.set(PhysicsField::Transformation, off(TRANSFORMATION));
    table.set(PhysicsField::FlyMode, off(FLY_MODE));
    table.set(
        PhysicsField::WheelSuspensionCompression,
        off(WHEEL_SUSPENSION_COMPRESSION),
    );
    table.set(PhysicsField::WheelAngle, off(WHEEL_ANGLE));
    table.set(PhysicsField::WheelAngularVelocity, off(WHEEL_ANGULAR_VELOCITY));
    table.set(PhysicsField::WheelSteeringAngle, off(WHEEL_STEERING_ANGLE));
    table
}

fn off(value: i32) -> FieldOffset {
    FieldOffset::new(value).unwrap()
}

pub struct MockVehicle {
    record: Box<[u8]>,
    // Owners of the blocks whose addresses are baked into the record.
    #[allow(dead_code)]
    wheel_slots: Box<[u64]>,
    wheel_blocks: Vec<Box<[u8]>>,
    handling: Box<[u8]>,
    #[allow(dead_code)]
    chassis: Box<[u8]>,
    geometry: Box<[u8]>,
    exists: bool,
}

impl MockVehicle {
    pub fn new(wheel_count: i8) -> Self {
        let mut record = vec![0u8; RECORD_SIZE].into_boxed_slice();
        let wheel_blocks: Vec<Box<[u8]>> = (0..wheel_count.max(0))
            .map(|_| vec![0u8; WHEEL_BLOCK_SIZE].into_boxed_slice())
            .collect();
        let wheel_slots: Box<[u64]> =
            wheel_blocks.iter().map(|block| block.as_ptr() as u64).collect();
        let handling = vec![0u8; HANDLING_SIZE].into_boxed_slice();
        let mut chassis = vec![0u8; CHASSIS_SIZE].into_boxed_slice();
        let geometry = vec![0u8; GEOMETRY_SIZE].into_boxed_slice();

        write_u64(&mut record, WHEEL_ARRAY, wheel_slots.as_ptr() as u64);
        record[WHEEL_COUNT as usize] = wheel_count as u8;
        write_u64(&mut record, HANDLING_DATA, handling.as_ptr() as u64);
        write_u64(&mut record, layout::wheel_size::CHASSIS_PTR, chassis.as_ptr() as u64);
        write_u64(
            &mut chassis,
            layout::wheel_size::GEOMETRY_PTR,
            geometry.as_ptr() as u64,
        );

        Self {
            record,
            wheel_slots,
            wheel_blocks,
            handling,
            chassis,
            geometry,
            exists: true,
        }
    }

    /// Mark the entity as destroyed; the record stays allocated so stale
    /// access would be observable rather than a segfault.
    pub fn destroy(&mut self) {
        self.exists = false;
    }

    /// Override the live wheel count without touching the allocated blocks.
    pub fn set_wheel_count(&mut self, count: i8) {
        self.record[WHEEL_COUNT as usize] = count as u8;
    }

    /// Null out the handling pointer.
    pub fn clear_handling(&mut self) {
        write_u64(&mut self.record, HANDLING_DATA, 0);
    }

    /// Null out the wheel-size chain at its first link.
    pub fn clear_chassis(&mut self) {
        write_u64(&mut self.record, layout::wheel_size::CHASSIS_PTR, 0);
    }

    pub fn record_f32(&self, offset: i32) -> f32 {
        read_f32(&self.record, offset)
    }

    pub fn set_record_f32(&mut self, offset: i32, value: f32) {
        write_f32(&mut self.record, offset, value);
    }

    pub fn wheel_f32(&self, index: usize, offset: i32) -> f32 {
        read_f32(&self.wheel_blocks[index], offset)
    }

    pub fn set_wheel_f32(&mut self, index: usize, offset: i32, value: f32) {
        write_f32(&mut self.wheel_blocks[index], offset, value);
    }

    pub fn handling_f32(&self, offset: i32) -> f32 {
        read_f32(&self.handling, offset)
    }

    pub fn set_handling_f32(&mut self, offset: i32, value: f32) {
        write_f32(&mut self.handling, offset, value);
    }

    pub fn geometry_f32(&self, offset: i32) -> f32 {
        read_f32(&self.geometry, offset)
    }

    pub fn set_geometry_f32(&mut self, offset: i32, value: f32) {
        write_f32(&mut self.geometry, offset, value);
    }
}

impl VehicleEntity for MockVehicle {
    fn memory_address(&self) -> Option<EntityBase> {
        if !self.exists {
            return None;
        }
        let ptr = std::ptr::NonNull::new(self.record.as_ptr() as *mut u8)?;
        Some(unsafe { EntityBase::from_raw(ptr) })
    }

    fn exists(&self) -> bool {
        self.exists
    }
}

fn read_f32(buffer: &[u8], offset: i32) -> f32 {
    let at = offset as usize;
    f32::from_le_bytes(buffer[at..at + 4].try_into().unwrap())
}

fn write_f32(buffer: &mut [u8], offset: i32, value: f32) {
    let at = offset as usize;
    buffer[at..at + 4].copy_from_slice(&value.to_le_bytes());
}

fn write_u64(buffer: &mut [u8], offset: i32, value: u64) {
    let at = offset as usize;
    buffer[at..at + 8].copy_from_slice(&value.to_le_bytes());
}
