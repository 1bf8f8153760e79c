//! IDM Console Library
//!
//! Headless core of an identity-management admin console: client-side list
//! pagination, multi-step wizards, page routing, user-facing alerts and a
//! REST client for email templates and identity providers.

pub mod app;
pub mod cli;
pub mod connection;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod logging;
pub mod output;
pub mod services;
pub mod states;
