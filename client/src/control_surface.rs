use std::{collections::VecDeque, net::SocketAddr};

use log::{info, warn};
use tokio::sync::mpsc::error::TryRecvError;

use chroma_shared::{
    bounded_string, encode, encode_effects_order_request, encode_sync_request, ControlRule, Frame,
    ParamValue, ParameterId, PayloadKind, StateSnapshot, DEFAULT_EFFECTS_ORDER,
};

use crate::{
    client_config::{ClientConfig, SyncConfig},
    error::{ConnectError, ControlError},
    events::SurfaceEvent,
    sync::Model,
    time::{Clock, SystemClock},
    transport::{ListenerHandle, PacketSender, SnapshotReceiver, StateListener, UdpPacketSender},
};

/// Events held between two calls to [`ControlSurface::receive`]
pub const MAX_QUEUED_EVENTS: usize = 256;

/// Client-side endpoint of the engine link. Owns the [`Model`], turns operator
/// input into outbound frames, and reconciles inbound snapshots with edits
/// that the engine has not confirmed yet.
///
/// Every mutation updates the model first and sends second, so a failed send
/// still leaves the operator's choice visible. Events produced by mutations
/// and by inbound snapshots are collected and handed out by
/// [`ControlSurface::receive`], which callers should drain once per frame or
/// tick. At most [`MAX_QUEUED_EVENTS`] are held; past that the oldest
/// `StateUpdated` is discarded first, since a later one supersedes it.
pub struct ControlSurface {
    sync: SyncConfig,
    model: Model,
    sender: Box<dyn PacketSender>,
    snapshots: Option<SnapshotReceiver>,
    listener: Option<ListenerHandle>,
    clock: Box<dyn Clock>,
    events: VecDeque<SurfaceEvent>,
}

impl ControlSurface {
    /// Creates a surface that sends through `sender` and has no inbound feed
    /// until [`ControlSurface::with_snapshots`] supplies one
    pub fn new(sync: SyncConfig, sender: Box<dyn PacketSender>) -> Self {
        Self {
            model: Model::new(sync.grace_window),
            sync,
            sender,
            snapshots: None,
            listener: None,
            clock: Box::new(SystemClock),
            events: VecDeque::new(),
        }
    }

    pub fn with_snapshots(mut self, snapshots: SnapshotReceiver) -> Self {
        self.snapshots = Some(snapshots);
        self
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Binds the state listener, opens the UDP sender and asks the engine for
    /// a full-state broadcast
    pub fn connect(config: ClientConfig) -> Result<Self, ConnectError> {
        let (listener, snapshots) =
            StateListener::spawn(config.listen_addr, config.snapshot_channel_capacity)?;
        let sender = UdpPacketSender::connect(config.engine_addr)?;

        let mut surface = Self::new(config.sync, Box::new(sender)).with_snapshots(snapshots);
        surface.listener = Some(listener);

        info!(
            "Control surface sending to {}, listening on {:?}",
            config.engine_addr,
            surface.listen_addr()
        );
        if let Err(err) = surface.request_sync() {
            warn!("Initial sync request failed: {}", err);
        }
        Ok(surface)
    }

    // Reading

    pub fn snapshot(&self) -> &StateSnapshot {
        self.model.snapshot()
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn is_connected(&self) -> bool {
        self.model.is_connected()
    }

    /// True while a local edit of `id` still shields it from inbound state
    pub fn is_pending(&self, id: ParameterId) -> bool {
        self.model.pending().is_pending(id, self.clock.now())
    }

    pub fn engine_addr(&self) -> SocketAddr {
        self.sender.engine_addr()
    }

    pub fn listen_addr(&self) -> Option<SocketAddr> {
        self.listener.as_ref().map(ListenerHandle::local_addr)
    }

    // Continuous

    /// Moves a continuous parameter by a raw delta along its curve
    pub fn adjust(&mut self, id: ParameterId, delta: f32) -> Result<(), ControlError> {
        let rule = *id
            .descriptor()
            .rule
            .continuous()
            .ok_or_else(|| unsupported(id, "adjust"))?;
        let next = rule.adjust(self.snapshot().float(id), delta);
        self.commit(id, ParamValue::Float(next))
    }

    /// Sets a continuous parameter from an absolute 0..1 control position
    pub fn set_normalized(&mut self, id: ParameterId, unit: f32) -> Result<(), ControlError> {
        let rule = *id
            .descriptor()
            .rule
            .continuous()
            .ok_or_else(|| unsupported(id, "set_normalized"))?;
        self.commit(id, ParamValue::Float(rule.domain.from_unit(unit)))
    }

    // Toggles

    pub fn toggle(&mut self, id: ParameterId) -> Result<(), ControlError> {
        require_toggle(id, "toggle")?;
        let next = !self.snapshot().flag(id);
        self.commit(id, ParamValue::Bool(next))
    }

    pub fn set_flag(&mut self, id: ParameterId, enabled: bool) -> Result<(), ControlError> {
        require_toggle(id, "set_flag")?;
        self.commit(id, ParamValue::Bool(enabled))
    }

    // Discrete

    /// Selects a choice by index. The index wraps, so negative values count
    /// back from the last choice.
    pub fn set_discrete(&mut self, id: ParameterId, index: i32) -> Result<(), ControlError> {
        let choices = id
            .descriptor()
            .rule
            .choices()
            .filter(|choices| !choices.is_empty())
            .ok_or_else(|| unsupported(id, "set_discrete"))?;
        let count = i32::try_from(choices.len()).unwrap_or(i32::MAX);
        let wrapped = index.rem_euclid(count);
        let value = match id.payload() {
            PayloadKind::Int => ParamValue::Int(wrapped),
            PayloadKind::Text => ParamValue::Text(choices[wrapped as usize].to_string()),
            _ => return Err(unsupported(id, "set_discrete")),
        };
        self.commit(id, value)
    }

    /// Advances to the next choice, wrapping after the last
    pub fn cycle_discrete(&mut self, id: ParameterId) -> Result<(), ControlError> {
        let current = self.discrete_index(id);
        self.set_discrete(id, current.saturating_add(1))
    }

    fn discrete_index(&self, id: ParameterId) -> i32 {
        let snapshot = self.snapshot();
        match id.payload() {
            PayloadKind::Text => id
                .descriptor()
                .rule
                .choices()
                .and_then(|choices| {
                    choices
                        .iter()
                        .position(|choice| *choice == snapshot.text(id))
                })
                .and_then(|position| i32::try_from(position).ok())
                .unwrap_or(0),
            _ => snapshot.int(id),
        }
    }

    // Effects order

    /// Replaces the whole effects chain. Tokens are truncated to the wire
    /// bound before they are stored, so the model holds what the engine gets.
    pub fn set_order(&mut self, tokens: Vec<String>) -> Result<(), ControlError> {
        let tokens = tokens.iter().map(|token| bounded_string(token)).collect();
        self.commit(ParameterId::EffectsOrder, ParamValue::TextList(tokens))
    }

    /// Moves the effect at `index` one slot earlier. Returns false, sending
    /// nothing, when it is already first.
    pub fn swap_up(&mut self, index: usize) -> Result<bool, ControlError> {
        let mut order = self.snapshot().effects_order().to_vec();
        check_order_index(index, order.len())?;
        if index == 0 {
            return Ok(false);
        }
        order.swap(index - 1, index);
        self.set_order(order)?;
        Ok(true)
    }

    /// Moves the effect at `index` one slot later. Returns false, sending
    /// nothing, when it is already last.
    pub fn swap_down(&mut self, index: usize) -> Result<bool, ControlError> {
        let mut order = self.snapshot().effects_order().to_vec();
        check_order_index(index, order.len())?;
        if index + 1 == order.len() {
            return Ok(false);
        }
        order.swap(index, index + 1);
        self.set_order(order)?;
        Ok(true)
    }

    pub fn reset_order(&mut self) -> Result<(), ControlError> {
        let order = DEFAULT_EFFECTS_ORDER
            .iter()
            .map(|token| token.to_string())
            .collect();
        self.set_order(order)
    }

    // Requests

    pub fn request_sync(&mut self) -> Result<(), ControlError> {
        self.send(None, &encode_sync_request())
    }

    pub fn request_effects_order(&mut self) -> Result<(), ControlError> {
        self.send(None, &encode_effects_order_request())
    }

    /// Lets inbound state overwrite `id` immediately instead of waiting for
    /// its grace window to pass
    pub fn clear_pending(&mut self, id: ParameterId) -> bool {
        self.model.clear_pending(id)
    }

    // Inbound

    /// Drains every snapshot the listener has queued, applies them in arrival
    /// order, checks the disconnect timeout, and returns all events produced
    /// since the previous call. Never blocks.
    pub fn receive(&mut self) -> Vec<SurfaceEvent> {
        let mut inbound = Vec::new();
        let mut closed = false;
        if let Some(snapshots) = self.snapshots.as_mut() {
            loop {
                match snapshots.try_recv() {
                    Ok(snapshot) => inbound.push(snapshot),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        closed = true;
                        break;
                    }
                }
            }
        }
        if closed {
            warn!("State listener has stopped, no further snapshots will arrive");
            self.snapshots = None;
        }

        for snapshot in inbound {
            self.apply_snapshot(snapshot);
        }

        let now = self.clock.now();
        if self.model.check_timeout(now, self.sync.disconnect_timeout) {
            info!(
                "No state from engine for {:?}, marking disconnected",
                self.sync.disconnect_timeout
            );
            self.queue(SurfaceEvent::ConnectionChanged(false));
        }

        self.events.drain(..).collect()
    }

    /// Reconciles one inbound snapshot with the model
    pub fn apply_snapshot(&mut self, snapshot: StateSnapshot) {
        let now = self.clock.now();
        if self.model.apply_inbound(snapshot, now) {
            info!("Engine at {} is answering", self.engine_addr());
            self.queue(SurfaceEvent::ConnectionChanged(true));
        }
        self.push_state_update();
    }

    // Internals

    fn commit(&mut self, id: ParameterId, value: ParamValue) -> Result<(), ControlError> {
        let frame = encode(id, &value)?;
        let now = self.clock.now();
        self.model.write_local(id, value, now)?;
        self.push_state_update();
        self.send(Some(id), &frame)
    }

    fn send(&mut self, parameter: Option<ParameterId>, frame: &Frame) -> Result<(), ControlError> {
        match self.sender.send_frame(frame) {
            Ok(()) => Ok(()),
            Err(error) => {
                warn!("Failed to send {}: {}", frame.addr, error);
                self.queue(SurfaceEvent::SendFailed {
                    parameter,
                    error: error.clone(),
                });
                Err(error.into())
            }
        }
    }

    fn push_state_update(&mut self) {
        self.queue(SurfaceEvent::StateUpdated(self.model.snapshot().clone()));
    }

    fn queue(&mut self, event: SurfaceEvent) {
        if self.events.len() >= MAX_QUEUED_EVENTS {
            let oldest = self
                .events
                .iter()
                .position(SurfaceEvent::is_state_update)
                .unwrap_or(0);
            self.events.remove(oldest);
        }
        self.events.push_back(event);
    }
}

fn unsupported(id: ParameterId, operation: &'static str) -> ControlError {
    ControlError::UnsupportedOperation {
        parameter: id,
        operation,
        rule: id.descriptor().rule.name(),
    }
}

fn require_toggle(id: ParameterId, operation: &'static str) -> Result<(), ControlError> {
    match id.descriptor().rule {
        ControlRule::Toggle => Ok(()),
        _ => Err(unsupported(id, operation)),
    }
}

fn check_order_index(index: usize, len: usize) -> Result<(), ControlError> {
    if index < len {
        Ok(())
    } else {
        Err(ControlError::OrderIndexOutOfRange { index, len })
    }
}
