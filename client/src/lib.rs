//! # Chroma Client
//! Control-surface client for the Chroma effects engine. Parameter changes go
//! out as OSC frames over UDP; engine broadcasts come back through a listener
//! thread and are reconciled with local edits that are still in flight.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use chroma_shared as shared;

mod client_config;
mod control_surface;
mod error;
mod events;
mod sync;
mod time;
pub mod transport;

pub use client_config::{ClientConfig, SyncConfig};
pub use control_surface::{ControlSurface, MAX_QUEUED_EVENTS};
pub use error::{ConnectError, ControlError};
pub use events::SurfaceEvent;
pub use sync::{Model, PendingChanges};
pub use time::{Clock, SystemClock};
pub use transport::{ListenerError, PacketSender, SendError, UdpPacketSender};
