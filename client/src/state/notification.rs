//! Transient notifications with injected time.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

/// How long a notification stays visible.
pub const NOTIFICATION_MS: u64 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
    /// Time at which the notification disappears.
    pub expires_ms: u64,
}

/// Visible notifications, oldest first.
#[derive(Debug, Default)]
pub struct Notifications {
    next_id: u64,
    items: Vec<Notification>,
}

impl Notifications {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `text` until `now_ms + NOTIFICATION_MS`. Returns the notification id.
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>, now_ms: u64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, kind, text: text.into(), expires_ms: now_ms.saturating_add(NOTIFICATION_MS) });
        id
    }

    /// Drop expired notifications and return them.
    pub fn tick(&mut self, now_ms: u64) -> Vec<Notification> {
        let (expired, live): (Vec<_>, Vec<_>) = std::mem::take(&mut self.items).into_iter().partition(|n| n.expires_ms <= now_ms);
        self.items = live;
        expired
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    #[must_use]
    pub fn active(&self) -> &[Notification] {
        &self.items
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }
}
