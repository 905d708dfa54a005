//! Signature scanning over loaded executable images.

mod pattern;
mod scanner;

pub use pattern::Pattern;
pub use scanner::{find_all, find_pattern};
