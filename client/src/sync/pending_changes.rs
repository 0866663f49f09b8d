use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use chroma_shared::ParameterId;

/// Parameters edited locally within the grace window, keyed to the instant of
/// their latest edit. A live entry shields its parameter from inbound state.
pub struct PendingChanges {
    edits: HashMap<ParameterId, Instant>,
    grace_window: Duration,
}

impl PendingChanges {
    pub fn new(grace_window: Duration) -> Self {
        Self {
            edits: HashMap::new(),
            grace_window,
        }
    }

    /// Records a local edit, restarting the window if one was already running
    pub fn mark(&mut self, id: ParameterId, now: Instant) {
        self.edits.insert(id, now);
    }

    pub fn clear(&mut self, id: ParameterId) -> bool {
        self.edits.remove(&id).is_some()
    }

    /// True while less than the grace window has passed since the last edit
    pub fn is_pending(&self, id: ParameterId, now: Instant) -> bool {
        match self.edits.get(&id) {
            Some(marked) => now.saturating_duration_since(*marked) < self.grace_window,
            None => false,
        }
    }

    /// Drops every entry whose window has elapsed. Returns how many expired.
    pub fn sweep(&mut self, now: Instant) -> usize {
        let before = self.edits.len();
        let grace_window = self.grace_window;
        self.edits
            .retain(|_, marked| now.saturating_duration_since(*marked) < grace_window);
        before - self.edits.len()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}
