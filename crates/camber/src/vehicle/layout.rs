//! Struct-local byte offsets inside native vehicle structures.
//!
//! Fixed positions within pointed-to blocks, reverse-engineered for the same
//! build the signature table targets. A build update that moves these means
//! updating this table, not the accessors.

/// Wheel physics block.
pub mod wheel {
    /// Stride of one slot in the wheel pointer array.
    pub const PTR_STRIDE: i32 = 8;

    pub const TYRE_RADIUS: i32 = 0x110;
    pub const RIM_RADIUS: i32 = 0x114;
    pub const TYRE_WIDTH: i32 = 0x118;

    /// The suspension compression setter lands one float past the offset
    /// the getter reads.
    pub const COMPRESSION_WRITE_BIAS: i32 = 4;
}

/// Handling data block, reached through the handling-data pointer.
pub mod handling {
    pub const STEERING_LOCK: i32 = 0x80;
    pub const SUSPENSION_UPPER_LIMIT: i32 = 0xC8;
    pub const SUSPENSION_LOWER_LIMIT: i32 = 0xCC;
}

/// Wheel render-size pointer chain, independent of the signature table.
pub mod wheel_size {
    pub const CHASSIS_PTR: i32 = 0x48;
    pub const GEOMETRY_PTR: i32 = 0x370;
    pub const SCALE: i32 = 0x8;
}
