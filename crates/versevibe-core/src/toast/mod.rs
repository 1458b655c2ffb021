//! Toast notifications
//!
//! A toast is created visible, then leaves the queue either when its lifetime
//! runs out or when the user dismisses it. Removal is always by id, so toasts
//! never interfere with each other's expiry.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tracing::debug;

/// How long a toast stays visible
pub const TOAST_LIFETIME: Duration = Duration::from_millis(4000);

/// Most toasts shown at once; older ones are evicted first
pub const MAX_VISIBLE_TOASTS: usize = 5;

/// Unique toast identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// An immutable notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: ToastId,
    message: String,
    severity: Severity,
    created_at: Instant,
}

impl Toast {
    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Instant after which the toast is no longer shown
    pub fn expires_at(&self) -> Instant {
        self.created_at + TOAST_LIFETIME
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }
}

/// Ordered queue of visible toasts
#[derive(Debug)]
pub struct ToastManager {
    toasts: VecDeque<Toast>,
    next_id: u64,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastManager {
    /// Create a manager whose ids start at the current wall-clock millisecond
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        Self::with_seed(seed)
    }

    /// Create a manager with an explicit first id
    pub fn with_seed(seed: u64) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: seed,
        }
    }

    /// Append a toast created at `now` and return its id.
    ///
    /// When the queue is full the oldest toast is evicted.
    pub fn push_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        while self.toasts.len() >= MAX_VISIBLE_TOASTS {
            if let Some(evicted) = self.toasts.pop_front() {
                debug!("Evicting {} to make room", evicted.id);
            }
        }

        self.toasts.push_back(Toast {
            id,
            message: message.into(),
            severity,
            created_at: now,
        });
        id
    }

    /// Append a toast created now
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> ToastId {
        self.push_at(message, severity, Instant::now())
    }

    /// Remove a toast whose lifetime ran out. Returns false if it was already gone.
    pub fn expire(&mut self, id: ToastId) -> bool {
        self.remove(id)
    }

    /// Remove a toast on user request. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        self.remove(id)
    }

    /// Drop every toast whose lifetime has ended by `now`
    pub fn sweep(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| !toast.is_expired(now));
        before - self.toasts.len()
    }

    /// Visible toasts, oldest first
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn newest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id == id)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    fn remove(&mut self, id: ToastId) -> bool {
        match self.toasts.iter().position(|toast| toast.id == id) {
            Some(index) => {
                self.toasts.remove(index);
                true
            }
            None => false,
        }
    }
}
