//! Process memory views and raw typed access.

mod access;
mod image;

#[cfg(test)]
pub mod mock;

pub use access::EntityBase;
pub use image::ModuleImage;

#[cfg(target_os = "windows")]
pub use image::host_module;
