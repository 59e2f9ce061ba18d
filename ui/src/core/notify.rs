//! Transient notification banners.

use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use super::timing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
}

impl NotificationLevel {
    /// Bootstrap-style alert classes for the banner.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert alert-success alert-dismissible fade show position-fixed",
            Self::Info => "alert alert-info alert-dismissible fade show position-fixed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub level: NotificationLevel,
    pub created_at: OffsetDateTime,
}

impl Notification {
    pub fn is_expired(&self, now: OffsetDateTime, ttl_ms: u64) -> bool {
        let ttl = Duration::milliseconds(i64::try_from(ttl_ms).unwrap_or(i64::MAX));
        now - self.created_at >= ttl
    }
}

/// Currently attached banners, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn push(&mut self, message: impl Into<String>, level: NotificationLevel) -> Uuid {
        self.push_at(message, level, timing::now())
    }

    pub fn push_at(
        &mut self,
        message: impl Into<String>,
        level: NotificationLevel,
        created_at: OffsetDateTime,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Notification {
            id,
            message: message.into(),
            level,
            created_at,
        });
        tracing::debug!(%id, ?level, "notification raised");
        id
    }

    /// Detach a banner. Safe to call again: a second call reports `false`.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before != self.items.len()
    }

    /// Drop every banner older than `ttl_ms`; returns how many went away.
    pub fn expire(&mut self, now: OffsetDateTime, ttl_ms: u64) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.is_expired(now, ttl_ms));
        before - self.items.len()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
