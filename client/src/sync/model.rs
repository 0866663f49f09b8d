use std::time::{Duration, Instant};

use log::{debug, warn};

use chroma_shared::{ParamValue, ParameterId, ProtocolError, StateSnapshot};

use super::PendingChanges;

/// The authoritative local view of the engine: the current snapshot, the set
/// of parameters with unconfirmed local edits, and whether the engine is
/// answering. Only the owning [`ControlSurface`](crate::ControlSurface)
/// mutates it.
pub struct Model {
    snapshot: StateSnapshot,
    pending: PendingChanges,
    connected: bool,
    last_inbound: Option<Instant>,
}

impl Model {
    pub fn new(grace_window: Duration) -> Self {
        Self {
            snapshot: StateSnapshot::default(),
            pending: PendingChanges::new(grace_window),
            connected: false,
            last_inbound: None,
        }
    }

    pub fn snapshot(&self) -> &StateSnapshot {
        &self.snapshot
    }

    pub fn pending(&self) -> &PendingChanges {
        &self.pending
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn last_inbound(&self) -> Option<Instant> {
        self.last_inbound
    }

    /// Stores a locally chosen value and opens its grace window
    pub(crate) fn write_local(
        &mut self,
        id: ParameterId,
        value: ParamValue,
        now: Instant,
    ) -> Result<(), ProtocolError> {
        self.snapshot.set(id, value)?;
        self.pending.mark(id, now);
        Ok(())
    }

    pub(crate) fn clear_pending(&mut self, id: ParameterId) -> bool {
        self.pending.clear(id)
    }

    /// Reconciles one inbound snapshot. Only parameters the engine has
    /// actually reported are considered, and those with a live local edit keep
    /// the local value. Telemetry is always adopted. Returns true if this
    /// flipped the model from disconnected to connected.
    pub(crate) fn apply_inbound(&mut self, inbound: StateSnapshot, now: Instant) -> bool {
        let expired = self.pending.sweep(now);
        if expired > 0 {
            debug!("{} pending edits expired", expired);
        }

        let (values, telemetry) = inbound.into_reported_parts();
        for (id, value) in values {
            if self.pending.is_pending(id, now) {
                continue;
            }
            if let Err(err) = self.snapshot.set(id, value) {
                warn!("Inbound snapshot carried an unusable value: {}", err);
            }
        }
        *self.snapshot.telemetry_mut() = telemetry;

        self.last_inbound = Some(now);
        let reconnected = !self.connected;
        self.connected = true;
        reconnected
    }

    /// Marks the engine disconnected once nothing has arrived for `timeout`.
    /// Returns true if this flipped the model to disconnected.
    pub(crate) fn check_timeout(&mut self, now: Instant, timeout: Duration) -> bool {
        if !self.connected {
            return false;
        }
        let silent_for = self
            .last_inbound
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::MAX);
        if silent_for >= timeout {
            self.connected = false;
            return true;
        }
        false
    }
}
