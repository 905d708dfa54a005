//! Offset resolution against the running game build.

mod dump;
mod field;
mod resolver;
mod signature;
mod table;

pub use dump::{OffsetDump, format_offset};
pub use field::{FieldOffset, PhysicsField};
pub use resolver::{global, install, resolve};
pub use signature::{
    FieldCapture, SignatureEntry, SignatureSet, load_signatures, save_signatures,
};
pub use table::PhysicsOffsets;
