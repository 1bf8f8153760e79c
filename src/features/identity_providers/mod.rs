//! Identity Providers
//!
//! Creation wizard and the general settings (update/delete) panel.

mod controller;
mod wizard;

pub use controller::*;
pub use wizard::*;
