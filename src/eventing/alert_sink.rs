//! Alert Sink
//!
//! Controllers never own notification state. They hand each [`Alert`] to a
//! sink, and the sink decides where it goes.

use crate::domain::alert::{Alert, AlertLevel};
use crossbeam_channel::{Receiver, Sender};

/// Destination for user-facing alerts
pub trait AlertSink: Send + Sync {
    fn add_alert(&self, alert: Alert);
}

impl<S: AlertSink + ?Sized> AlertSink for std::sync::Arc<S> {
    fn add_alert(&self, alert: Alert) {
        (**self).add_alert(alert);
    }
}

/// Forwards alerts to a channel receiver
#[derive(Clone, Debug)]
pub struct ChannelAlertSink {
    tx: Sender<Alert>,
}

impl ChannelAlertSink {
    pub fn new(tx: Sender<Alert>) -> Self {
        Self { tx }
    }

    /// Create a sink together with the receiving end of an unbounded channel
    pub fn unbounded() -> (Self, Receiver<Alert>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { tx }, rx)
    }
}

impl AlertSink for ChannelAlertSink {
    fn add_alert(&self, alert: Alert) {
        if let Err(e) = self.tx.send(alert) {
            let dropped = e.into_inner();
            tracing::warn!(title = %dropped.message, "Alert receiver disconnected, dropping alert");
        }
    }
}

/// Writes alerts as structured log events
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingAlertSink;

impl AlertSink for TracingAlertSink {
    fn add_alert(&self, alert: Alert) {
        match alert.level {
            AlertLevel::Error => tracing::error!(
                id = %alert.id,
                title = %alert.message,
                description = %alert.description,
                "alert"
            ),
            AlertLevel::Warning => tracing::warn!(
                id = %alert.id,
                title = %alert.message,
                description = %alert.description,
                "alert"
            ),
            AlertLevel::Success | AlertLevel::Info => tracing::info!(
                id = %alert.id,
                level = %alert.level,
                title = %alert.message,
                description = %alert.description,
                "alert"
            ),
        }
    }
}
