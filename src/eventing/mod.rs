//! Eventing
//!
//! Outbound notifications from controllers to whatever displays them.

mod alert_sink;

pub use alert_sink::*;
