//! Command implementations
//!
//! Each command is an `impl Viewer` block:
//!
//! - `compare`: read two texts and render them side by side
//! - `stat`: print addition/deletion counts
//! - `example`: render the built-in example pair

pub mod compare;
pub mod example;
pub mod stat;
