//! Email Templates
//!
//! Template type list page, type creation wizard and locale template preview.

mod controller;
mod preview;
mod wizard;

pub use controller::*;
pub use preview::*;
pub use wizard::*;
