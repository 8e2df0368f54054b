use serde::Serialize;

pub const DEFAULT_ACTION: &str = "Close";
pub const SUCCESS_DURATION_MS: u64 = 4000;
pub const ERROR_DURATION_MS: u64 = 6000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub action_label: String,
    pub duration_ms: u64,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
            action_label: DEFAULT_ACTION.to_string(),
            duration_ms: SUCCESS_DURATION_MS,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
            action_label: DEFAULT_ACTION.to_string(),
            duration_ms: ERROR_DURATION_MS,
        }
    }

    pub fn with_action(mut self, action_label: impl Into<String>) -> Self {
        self.action_label = action_label.into();
        self
    }

}

/// Presents notifications. Presentation itself is up to the implementor.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn success(&self, message: &str) {
        self.notify(Notification::success(message));
    }

    fn error(&self, message: &str) {
        self.notify(Notification::error(message));
    }
}
