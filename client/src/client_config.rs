use std::{default::Default, net::SocketAddr, time::Duration};

/// Contains Config properties which will be used by the Control Surface
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Where parameter changes and sync requests are sent
    pub engine_addr: SocketAddr,
    /// Local address the state listener binds to
    pub listen_addr: SocketAddr,
    /// Used to configure reconciliation of local edits with engine broadcasts
    pub sync: SyncConfig,
    /// How many materialized snapshots may queue between the listener thread
    /// and the consumer before new ones are dropped
    pub snapshot_channel_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            engine_addr: SocketAddr::from(([127, 0, 0, 1], 57120)),
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 9000)),
            sync: SyncConfig::default(),
            snapshot_channel_capacity: 10,
        }
    }
}

/// Timing knobs for the reconciliation engine
#[derive(Clone, Debug)]
pub struct SyncConfig {
    /// How long a local edit shields its parameter from inbound state
    pub grace_window: Duration,
    /// Silence after which the engine is reported as disconnected
    pub disconnect_timeout: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            grace_window: Duration::from_millis(500),
            disconnect_timeout: Duration::from_secs(3),
        }
    }
}
