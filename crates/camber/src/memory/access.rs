//! Raw typed access to live entity records.
//!
//! This is the only module in the crate that dereferences game memory.
//! Everything above it works in terms of [`EntityBase`] plus resolved byte
//! offsets and never touches a raw address. Reads and writes are volatile:
//! the engine mutates the same memory on its own simulation step.

use std::ptr::NonNull;

/// Base address of a live native entity record.
///
/// Transient by contract: the game may destroy or reallocate the entity the
/// moment control returns to the host, so a base must be re-derived for
/// every accessor call and never cached across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityBase(NonNull<u8>);

impl EntityBase {
    /// # Safety
    ///
    /// `ptr` must point at a live entity (or sub-structure) record owned by
    /// the game, and must remain valid for the duration of the current
    /// accessor call.
    pub unsafe fn from_raw(ptr: NonNull<u8>) -> Self {
        Self(ptr)
    }

    fn at(self, offset: i32) -> *mut u8 {
        self.0.as_ptr().wrapping_offset(offset as isize)
    }

    pub(crate) fn read_f32(self, offset: i32) -> f32 {
        unsafe { std::ptr::read_volatile(self.at(offset).cast::<f32>()) }
    }

    pub(crate) fn write_f32(self, offset: i32, value: f32) {
        unsafe { std::ptr::write_volatile(self.at(offset).cast::<f32>(), value) }
    }

    pub(crate) fn read_i8(self, offset: i32) -> i8 {
        unsafe { std::ptr::read_volatile(self.at(offset).cast::<i8>()) }
    }

    /// Follow one level of indirection; a null pointer reads as `None`.
    pub(crate) fn read_ptr(self, offset: i32) -> Option<EntityBase> {
        let raw = unsafe { std::ptr::read_volatile(self.at(offset).cast::<*mut u8>()) };
        NonNull::new(raw).map(EntityBase)
    }
}
