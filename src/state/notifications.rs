//! Transient, user-dismissable toast notifications.
//!
//! This is the single channel for success messages, network failures, and
//! recoverable user errors (for example drawing without a category). Toasts
//! expire on their own or can be dismissed by the user; server-side
//! notifications are a separate dashboard entity.

use std::time::{Duration, Instant};

/// How long a toast stays up unless dismissed.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Upper bound on simultaneously shown toasts; oldest are dropped first.
pub const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    created: Instant,
}

impl Toast {
    pub fn age(&self) -> Duration {
        self.created.elapsed()
    }
}

/// The queue of currently visible toasts.
#[derive(Debug, Default)]
pub struct ToastCenter {
    toasts: Vec<Toast>,
}

impl ToastCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message.into());
    }

    fn push(&mut self, level: ToastLevel, message: String) {
        match level {
            ToastLevel::Error => log::warn!("toast: {}", message),
            _ => log::info!("toast: {}", message),
        }
        self.toasts.push(Toast {
            level,
            message,
            created: Instant::now(),
        });
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..excess);
        }
    }

    /// Drop expired toasts. Called once per frame.
    pub fn prune(&mut self) {
        self.toasts.retain(|toast| toast.age() < TOAST_LIFETIME);
    }

    /// Dismiss a toast by position (the X button).
    pub fn dismiss(&mut self, index: usize) {
        if index < self.toasts.len() {
            self.toasts.remove(index);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut center = ToastCenter::new();
        center.success("saved");
        center.error("network down");
        assert_eq!(center.iter().count(), 2);

        center.dismiss(0);
        let remaining: Vec<_> = center.iter().collect();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].level, ToastLevel::Error);

        // Out-of-range dismiss is a no-op.
        center.dismiss(5);
        assert_eq!(center.iter().count(), 1);
    }

    #[test]
    fn test_oldest_toasts_drop_past_capacity() {
        let mut center = ToastCenter::new();
        for i in 0..(MAX_TOASTS + 2) {
            center.info(format!("toast {i}"));
        }
        assert_eq!(center.iter().count(), MAX_TOASTS);
        let first = center.iter().next().unwrap();
        assert_eq!(first.message, "toast 2");
    }
}
