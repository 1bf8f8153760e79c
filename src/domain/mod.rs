//! Domain - Pure Data Structures and Wire Types
//!
//! These types mirror the backend's REST resources and carry no I/O.

pub mod alert;
pub mod email_template;
pub mod identity_provider;
