//! Application Layer
//!
//! Page routing for the console.

pub mod navigation;
