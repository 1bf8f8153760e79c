//! Service Layer
//!
//! Abstraction over the identity server's REST API.
//!
//! ```text
//! ┌─────────────────────────────┐
//! │         Controllers         │
//! └──────────────┬──────────────┘
//!                │ BackendApi
//! ┌──────────────▼──────────────┐
//! │ HttpBackend (reqwest, JSON) │
//! └─────────────────────────────┘
//! ```

mod api;
mod http_backend;

pub use api::*;
pub use http_backend::*;
