use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chroma_shared::{Fragment, StateSnapshot};

/// The listener's accumulated view of engine state. Fragments merge in under
/// the lock; only cloned snapshots leave it.
#[derive(Clone, Default)]
pub struct ShadowState {
    inner: Arc<Mutex<StateSnapshot>>,
}

impl ShadowState {
    /// Merges one fragment and returns the accumulated snapshot. Parameters
    /// no fragment has carried yet stay unreported in it.
    pub fn merge(&self, fragment: Fragment) -> StateSnapshot {
        let mut state = self.lock();
        state.merge_fragment(fragment);
        state.clone()
    }

    pub fn snapshot(&self) -> StateSnapshot {
        self.lock().clone()
    }

    // A panic while merging cannot leave a snapshot half-typed, so a poisoned
    // lock still guards usable state.
    fn lock(&self) -> MutexGuard<'_, StateSnapshot> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
