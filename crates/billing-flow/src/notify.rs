//! Notification Collaborator
//!
//! Toast-style notifications are an external collaborator consuming
//! `(title, description?, severity)`; the flow never reads anything back.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a notification should be presented
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Destructive,
}

/// A notification handed to the presentation layer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub severity: Severity,
}

impl Notification {
    /// Informational notification with no description
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            severity: Severity::Info,
        }
    }

    /// Destructive (rejection) notification
    pub fn destructive(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            severity: Severity::Destructive,
        }
    }

    /// Attach a description line
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Notification collaborator trait
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// In-memory notifier that records what was fired (for tests and demos)
#[derive(Default)]
pub struct MemoryNotifier {
    entries: RwLock<Vec<(Notification, DateTime<Utc>)>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded notifications, oldest first
    pub fn notifications(&self) -> Vec<Notification> {
        self.entries
            .read()
            .unwrap()
            .iter()
            .map(|(n, _)| n.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        tracing::debug!(title = %notification.title, severity = ?notification.severity, "Notification fired");
        self.entries.write().unwrap().push((notification, Utc::now()));
    }
}
