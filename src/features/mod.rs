//! Feature Controllers
//!
//! Each feature owns its page state and talks to the backend through
//! [`crate::services::BackendApi`], reporting outcomes to an
//! [`crate::eventing::AlertSink`].

use crate::error::Error;

pub mod email_templates;
pub mod identity_providers;

#[cfg(test)]
pub(crate) mod testing;

/// Backend-provided description of a failure, or `fallback`
pub(crate) fn describe(error: &Error, fallback: &str) -> String {
    error
        .backend_description()
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}
