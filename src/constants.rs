//! Console Constants
//!
//! Centralized defaults shared by the config layer and the controllers.

/// Identity server used when nothing is configured
pub const DEFAULT_SERVER_URL: &str = "https://localhost:9443";

/// Per-request HTTP timeout
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Page size of the email template type list
pub const DEFAULT_EMAIL_TEMPLATE_TYPE_ITEM_LIMIT: usize = 10;

/// Log file name prefix inside the data directory
pub const LOG_FILE_PREFIX: &str = "idm-console.log";
