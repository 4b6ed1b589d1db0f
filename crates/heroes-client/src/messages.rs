//! The user-facing message log.
//!
//! Every data-access operation appends one human-readable line here; a
//! display surface (the CLI's "Messages" panel) reads it back in order.
//! The log is unbounded for the lifetime of the process.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Anything the data-access layer can report operation traces to.
pub trait MessageSink: Send + Sync {
    /// Record one message.
    fn add(&self, message: String);
}

/// Append-only, in-order list of operation messages.
///
/// Clones share the same underlying list, so a view and the service can
/// hold separate handles to one log.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MessageLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every message, oldest first.
    pub fn get_all(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Remove every message.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of messages recorded since the last clear.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the log holds no messages.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    // Poisoned locks are reused.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MessageSink for MessageLog {
    fn add(&self, message: String) {
        self.lock().push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let log = MessageLog::new();
        log.add(String::from("a"));
        log.add(String::from("b"));
        log.add(String::from("a"));
        assert_eq!(log.get_all(), vec!["a", "b", "a"]);
        assert_eq!(log.len(), 3);
        assert_eq!(log.last().as_deref(), Some("a"));
    }

    #[test]
    fn clear_empties() {
        let log = MessageLog::new();
        log.add(String::from("fetched heroes"));
        log.clear();
        assert!(log.is_empty());
        assert!(log.get_all().is_empty());
    }

    #[test]
    fn clones_share_entries() {
        let log = MessageLog::new();
        let other = log.clone();
        other.add(String::from("shared"));
        assert_eq!(log.get_all(), vec!["shared"]);
    }

    #[test]
    fn snapshot_is_detached() {
        let log = MessageLog::new();
        log.add(String::from("one"));
        let snapshot = log.get_all();
        log.add(String::from("two"));
        assert_eq!(snapshot.len(), 1);
    }
}
