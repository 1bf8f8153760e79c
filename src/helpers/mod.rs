//! Helper Utilities
//!
//! Common utilities used across the console.

mod fs;

pub use fs::*;
