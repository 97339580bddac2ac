//! Common type aliases used across PTPKit crates.

pub mod aliases;

pub use aliases::{shared, ChangeCallback, Shared};
