//! Toast notifications
//!
//! Screens push a toast after every action or failed load. A renderer drains
//! the queue; tests read it back.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::error::ClientError;

/// Oldest toasts are dropped past this many.
const MAX_TOASTS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Cloneable handle over the shared toast queue
#[derive(Debug, Clone, Default)]
pub struct Toaster {
    inner: Arc<Mutex<VecDeque<Toast>>>,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut toasts = self.inner.lock();
        toasts.push_back(Toast {
            kind,
            message,
            created_at: Utc::now(),
        });
        if toasts.len() > MAX_TOASTS {
            toasts.pop_front();
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(message = %message, "toast: success");
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(message = %message, "toast: error");
        self.push(ToastKind::Error, message);
    }

    /// Error toast carrying the backend message or the generic fallback.
    pub fn client_error(&self, err: &ClientError) {
        self.error(err.user_message());
    }

    /// Take every pending toast, oldest first.
    pub fn drain(&self) -> Vec<Toast> {
        self.inner.lock().drain(..).collect()
    }

    pub fn snapshot(&self) -> Vec<Toast> {
        self.inner.lock().iter().cloned().collect()
    }

    pub fn last(&self) -> Option<Toast> {
        self.inner.lock().back().cloned()
    }

    pub fn count(&self, kind: ToastKind) -> usize {
        self.inner.lock().iter().filter(|t| t.kind == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_queue() {
        let toaster = Toaster::new();
        let handle = toaster.clone();

        handle.success("Site added");
        toaster.error("Failed");

        assert_eq!(toaster.count(ToastKind::Success), 1);
        assert_eq!(handle.count(ToastKind::Error), 1);
        assert_eq!(toaster.last().unwrap().message, "Failed");

        let drained = toaster.drain();
        assert_eq!(drained.len(), 2);
        assert!(handle.is_empty());
    }

    #[test]
    fn queue_is_bounded() {
        let toaster = Toaster::new();
        for i in 0..(MAX_TOASTS + 5) {
            toaster.success(format!("toast {}", i));
        }
        let toasts = toaster.snapshot();
        assert_eq!(toasts.len(), MAX_TOASTS);
        assert_eq!(toasts[0].message, "toast 5");
    }
}
