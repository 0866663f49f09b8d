//! In-memory engine link for integration tests.
//! Routes frames between a control surface and a fake engine without network
//! I/O, through the same publisher pipeline the listener thread runs.

use std::net::SocketAddr;

use chroma_client::{
    transport::{PacketChannel, PublishOutcome, ShadowState, SnapshotPublisher},
    ControlSurface, SurfaceEvent, SyncConfig,
};
use chroma_shared::Frame;

use crate::helpers::{FakeEngine, ManualClock};

const FAKE_ENGINE_ADDR: &str = "127.0.0.1:57120";

pub struct LocalLink {
    pub surface: ControlSurface,
    pub engine: FakeEngine,
    pub publisher: SnapshotPublisher,
    pub clock: ManualClock,
}

impl LocalLink {
    pub fn new() -> Self {
        Self::with_config(SyncConfig::default(), 10)
    }

    pub fn with_config(sync: SyncConfig, capacity: usize) -> Self {
        let engine_addr: SocketAddr = FAKE_ENGINE_ADDR.parse().unwrap();
        let (sender, inbox) = PacketChannel::unbounded(engine_addr);
        let (publisher, snapshots) =
            SnapshotPublisher::channel(ShadowState::default(), capacity).unwrap();
        let clock = ManualClock::new();
        let surface = ControlSurface::new(sync, sender)
            .with_snapshots(snapshots)
            .with_clock(Box::new(clock.clone()));

        Self {
            surface,
            engine: FakeEngine::new(inbox),
            publisher,
            clock,
        }
    }

    /// Delivers one engine frame to the listener pipeline
    pub fn deliver(&mut self, frame: &Frame) -> PublishOutcome {
        self.publisher.handle_frame(frame)
    }

    /// Delivers the engine's current full state, then lets the surface
    /// consume it
    pub fn broadcast_state(&mut self) -> Vec<SurfaceEvent> {
        let frame = self.engine.state_frame();
        self.deliver(&frame);
        self.surface.receive()
    }

    pub fn advance_ms(&self, millis: u64) {
        self.clock.advance_ms(millis);
    }
}

impl Default for LocalLink {
    fn default() -> Self {
        Self::new()
    }
}
