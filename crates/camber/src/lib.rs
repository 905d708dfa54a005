//! # camber
//!
//! Runtime support library for scripted mods hosted inside the game
//! process, bridging the host's scripting API with the engine's native
//! vehicle physics structures.
//!
//! This crate provides:
//! - Byte-pattern scanning over the loaded executable image
//! - One-shot field offset resolution from a versioned signature table
//! - Guarded typed accessors over live vehicle physics state
//! - The speed-dependent steering correction used by driving tasks
//!
//! All raw pointer access is confined to one module under `memory`; the
//! public surface degrades to documented defaults whenever a field is
//! unsupported on the running build or an entity has been destroyed, and
//! never panics over game state.
//!
//! Everything runs on the host's per-frame script callback: calls are
//! synchronous, nothing blocks, and no synchronization is used beyond the
//! once-per-process offset resolution.

pub mod error;
pub mod memory;
pub mod offset;
pub mod physics;
pub mod prelude;
pub mod scan;
pub mod vehicle;

pub use error::{Error, Result};
pub use memory::{EntityBase, ModuleImage};
pub use offset::{
    FieldCapture, FieldOffset, OffsetDump, PhysicsField, PhysicsOffsets, SignatureEntry,
    SignatureSet, load_signatures, save_signatures,
};
pub use physics::{VehicleMotion, heading_correction, steering_reduction};
pub use scan::{Pattern, find_all, find_pattern};
pub use vehicle::{VehicleEntity, VehiclePhysics, WheelDimensions};
