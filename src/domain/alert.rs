//! Alert - User-facing notification

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Success,
    Error,
    Warning,
    Info,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Success => "success",
            AlertLevel::Error => "error",
            AlertLevel::Warning => "warning",
            AlertLevel::Info => "info",
        }
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `{severity, title, detail}` notification emitted by a controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Unique alert ID
    pub id: Uuid,
    /// Severity
    pub level: AlertLevel,
    /// Short title
    pub message: String,
    /// Longer detail text
    pub description: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Alert {
    pub fn new(
        level: AlertLevel,
        message: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(AlertLevel::Success, message, description)
    }

    pub fn error(message: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(AlertLevel::Error, message, description)
    }

    pub fn warning(message: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(AlertLevel::Warning, message, description)
    }

    pub fn info(message: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(AlertLevel::Info, message, description)
    }

    pub fn is_error(&self) -> bool {
        self.level == AlertLevel::Error
    }
}
