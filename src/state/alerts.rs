//! User-facing alert sink
//!
//! Network and backend failures are surfaced once to the user as an
//! alert and never retried. The sink is a broadcast channel the UI layer
//! subscribes to; emitting with no subscribers is harmless.

use tokio::sync::broadcast;
use tracing::debug;

const ALERT_BUFFER: usize = 32;

/// One-shot user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Broadcast sink for alerts
#[derive(Debug, Clone)]
pub struct AlertSink {
    tx: broadcast::Sender<Alert>,
}

impl AlertSink {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(ALERT_BUFFER);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Alert> {
        self.tx.subscribe()
    }

    pub fn emit(&self, title: &str, message: &str) {
        let alert = Alert {
            title: title.to_string(),
            message: message.to_string(),
        };
        debug!(title = %alert.title, message = %alert.message, "Alert emitted");
        // send only fails when nobody is subscribed
        let _ = self.tx.send(alert);
    }
}

impl Default for AlertSink {
    fn default() -> Self {
        Self::new()
    }
}
