//! Connection Management
//!
//! Backend server configuration for the console.

mod config;

pub use config::*;
